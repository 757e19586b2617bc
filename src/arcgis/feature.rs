//! ArcGIS feature query responses and boundary extraction.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::models::BoundaryResult;

/// Attribute holding the display name on TIGERweb layers
const NAME_ATTRIBUTE: &str = "NAME";
const UNKNOWN_NAME: &str = "Unknown";

/// Body of a `/query` response (`f=json`)
#[derive(Debug, Default, Deserialize)]
pub struct FeatureSet {
    #[serde(default)]
    pub features: Vec<Feature>,
    /// In-band error; ArcGIS reports failures with a 200 status
    pub error: Option<ServiceError>,
}

#[derive(Debug, Deserialize)]
pub struct ServiceError {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Feature {
    pub attributes: Option<HashMap<String, Value>>,
    pub geometry: Option<Geometry>,
}

/// Polygon geometry; each ring is a list of `[x, y]` (lon, lat) points
#[derive(Debug, Default, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub rings: Vec<Vec<Vec<f64>>>,
}

impl Feature {
    /// Display name, falling back to "Unknown"
    pub fn name(&self) -> String {
        match self.attributes.as_ref().and_then(|a| a.get(NAME_ATTRIBUTE)) {
            Some(Value::String(name)) => name.clone(),
            Some(Value::Null) | None => UNKNOWN_NAME.to_string(),
            Some(other) => other.to_string(),
        }
    }

    /// Rings converted to rounded `[lat, lon]` pairs
    pub fn polygon_coordinates(&self) -> Vec<Vec<[f64; 2]>> {
        let Some(geometry) = &self.geometry else {
            return Vec::new();
        };

        geometry
            .rings
            .iter()
            .map(|ring| {
                ring.iter()
                    .filter(|point| point.len() >= 2)
                    .map(|point| [round6(point[1]), round6(point[0])])
                    .collect()
            })
            .collect()
    }
}

/// Build a boundary from the first feature, if the layer returned any
pub fn extract_boundary(feature_set: &FeatureSet) -> Option<BoundaryResult> {
    let feature = feature_set.features.first()?;

    Some(BoundaryResult {
        name: feature.name(),
        polygon_coordinates: feature.polygon_coordinates(),
    })
}

/// Round to 6 decimal places (~0.1 m at the equator).
///
/// Formatting rounds the exact binary value with ties to even, so results
/// agree with correctly-rounded decimal rounding.
pub fn round6(value: f64) -> f64 {
    format!("{:.6}", value).parse().unwrap_or(value)
}
