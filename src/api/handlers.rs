//! Request handlers.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use tracing::{error, info};

use super::{ApiError, AppState};
use crate::models::ResponseDocument;
use crate::resolver::resolve_boundaries;

/// JSON body pretty-printed with 2-space indentation
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
            Err(e) => {
                error!("Failed to serialize response: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// Geocode an address and look up every boundary containing it
pub async fn address_to_boundaries(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<PrettyJson<ResponseDocument>, ApiError> {
    let address = match params.get("address") {
        Some(address) if !address.is_empty() => address.clone(),
        _ => return Err(ApiError::MissingAddress),
    };

    let coordinates = match state.geocoder.geocode(&address).await {
        Ok(Some(coordinate)) => coordinate,
        Ok(None) => {
            info!("No geocoding match for {:?}", address);
            return Err(ApiError::AddressNotFound);
        }
        Err(e) => {
            error!("Geocoding failed for {:?}: {}", address, e);
            return Err(ApiError::GeocoderUnavailable);
        }
    };

    let legislative_boundaries =
        resolve_boundaries(state.boundaries.as_ref(), &state.registry, coordinates).await;

    Ok(PrettyJson(ResponseDocument {
        address,
        coordinates,
        legislative_boundaries,
    }))
}

/// Health check endpoint
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        datasets: state.registry.len(),
    })
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    datasets: usize,
}
