//! HTTP client for ArcGIS MapServer feature layers.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::feature::{extract_boundary, FeatureSet};
use super::query::query_url;
use crate::error::UpstreamError;
use crate::models::{BoundaryResult, Coordinate};
use crate::registry::Dataset;
use crate::resolver::BoundarySource;

/// Issues point-in-polygon queries against feature layers
#[derive(Clone)]
pub struct ArcGisClient {
    client: Client,
}

impl ArcGisClient {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(UpstreamError::Client)?;

        Ok(Self { client })
    }

    /// Query a layer for the features containing a point
    pub async fn query(
        &self,
        endpoint: &Url,
        coordinate: Coordinate,
    ) -> Result<FeatureSet, UpstreamError> {
        let url = query_url(endpoint, coordinate);
        let endpoint_str = endpoint.to_string();

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| UpstreamError::Http {
                url: endpoint_str.clone(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(UpstreamError::Status {
                url: endpoint_str,
                status: response.status(),
            });
        }

        let feature_set: FeatureSet = response
            .json()
            .await
            .map_err(|source| UpstreamError::from_body(endpoint_str.clone(), source))?;

        if let Some(error) = feature_set.error {
            return Err(UpstreamError::Service {
                url: endpoint_str,
                code: error.code,
                message: error.message,
            });
        }

        Ok(feature_set)
    }
}

#[async_trait]
impl BoundarySource for ArcGisClient {
    async fn fetch_boundary(
        &self,
        coordinate: Coordinate,
        dataset: &Dataset,
    ) -> Result<Option<BoundaryResult>, UpstreamError> {
        let feature_set = self.query(&dataset.url, coordinate).await?;

        debug!(
            "{} returned {} features at {}",
            dataset.name,
            feature_set.features.len(),
            coordinate
        );

        Ok(extract_boundary(&feature_set))
    }
}
