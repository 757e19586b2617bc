//! User-facing API errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

/// Request failures surfaced to clients as `{"error": "<message>"}`.
///
/// Messages are fixed; internal details are only logged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Address parameter is missing.")]
    MissingAddress,

    #[error("Address not found.")]
    AddressNotFound,

    #[error("Geocoding service unavailable.")]
    GeocoderUnavailable,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingAddress => StatusCode::BAD_REQUEST,
            ApiError::AddressNotFound => StatusCode::NOT_FOUND,
            ApiError::GeocoderUnavailable => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
