//! ArcGIS feature service lookups.
//!
//! Each boundary dataset is a MapServer layer that answers point-in-polygon
//! queries; the first matching feature becomes the dataset's boundary.

mod client;
mod feature;
mod query;

pub use client::ArcGisClient;
pub use feature::{extract_boundary, round6, Feature, FeatureSet, Geometry, ServiceError};
pub use query::query_url;
