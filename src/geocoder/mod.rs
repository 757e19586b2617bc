//! Address-to-coordinate lookup.

mod nominatim;

use async_trait::async_trait;

use crate::error::UpstreamError;
use crate::models::Coordinate;

pub use nominatim::{NominatimGeocoder, NOMINATIM_URL};

/// Forward geocoder.
///
/// `Ok(None)` means the service had no match for the address; `Err` is a
/// transport or decoding failure.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinate>, UpstreamError>;
}
