//! Nominatim (OpenStreetMap) forward geocoder.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::Geocoder;
use crate::error::UpstreamError;
use crate::models::Coordinate;

pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

#[derive(Debug, Deserialize)]
struct NominatimResult {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

/// Geocodes free-text addresses via the Nominatim `/search` API.
///
/// The usage policy requires an identifying user agent, so one must be
/// supplied. No rate limiting is applied here.
#[derive(Clone)]
pub struct NominatimGeocoder {
    client: Client,
    search_url: Url,
}

impl NominatimGeocoder {
    pub fn new(base_url: &Url, user_agent: &str, timeout: Duration) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(UpstreamError::Client)?;

        let mut search_url = base_url.clone();
        if let Ok(mut segments) = search_url.path_segments_mut() {
            segments.pop_if_empty().push("search");
        }

        Ok(Self { client, search_url })
    }

    fn request_url(&self, address: &str) -> Url {
        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("q", address)
            .append_pair("format", "json")
            .append_pair("limit", "1");
        url
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinate>, UpstreamError> {
        let url_str = self.search_url.to_string();

        let response = self
            .client
            .get(self.request_url(address))
            .send()
            .await
            .map_err(|source| UpstreamError::Http {
                url: url_str.clone(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(UpstreamError::Status {
                url: url_str,
                status: response.status(),
            });
        }

        let results: Vec<NominatimResult> = response
            .json()
            .await
            .map_err(|source| UpstreamError::from_body(url_str, source))?;

        let Some(result) = results.into_iter().next() else {
            return Ok(None);
        };

        let coordinate = parse_coordinate(&result)?;
        debug!(
            "Geocoded to {} ({})",
            coordinate,
            result.display_name.as_deref().unwrap_or("")
        );

        Ok(Some(coordinate))
    }
}

fn parse_coordinate(result: &NominatimResult) -> Result<Coordinate, UpstreamError> {
    let latitude: f64 = result
        .lat
        .trim()
        .parse()
        .map_err(|_| UpstreamError::InvalidCoordinate(format!("lat={}", result.lat)))?;
    let longitude: f64 = result
        .lon
        .trim()
        .parse()
        .map_err(|_| UpstreamError::InvalidCoordinate(format!("lon={}", result.lon)))?;

    Ok(Coordinate::new(latitude, longitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nominatim_response() {
        let json = r#"[{"lat":"35.4716551","lon":"-97.5209784","display_name":"620, North Harvey Avenue, Oklahoma City"}]"#;
        let results: Vec<NominatimResult> = serde_json::from_str(json).unwrap();

        let coordinate = parse_coordinate(&results[0]).unwrap();
        assert_eq!(coordinate, Coordinate::new(35.4716551, -97.5209784));
    }

    #[test]
    fn test_invalid_latitude() {
        let result = NominatimResult {
            lat: "north".to_string(),
            lon: "-97.5".to_string(),
            display_name: None,
        };
        assert!(matches!(
            parse_coordinate(&result),
            Err(UpstreamError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_request_url() {
        let base = Url::parse(NOMINATIM_URL).unwrap();
        let geocoder = NominatimGeocoder::new(&base, "test/1.0", Duration::from_secs(1)).unwrap();
        let url = geocoder.request_url("620 N Harvey Ave, Oklahoma City");

        assert_eq!(url.path(), "/search");
        let params: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            params,
            vec![
                ("q".to_string(), "620 N Harvey Ave, Oklahoma City".to_string()),
                ("format".to_string(), "json".to_string()),
                ("limit".to_string(), "1".to_string()),
            ]
        );
    }
}
