//! HTTP API for address-to-boundary lookups.

mod error;
mod handlers;

pub use error::ApiError;
pub use handlers::PrettyJson;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::geocoder::Geocoder;
use crate::registry::DatasetRegistry;
use crate::resolver::BoundarySource;

/// Application state shared across handlers
pub struct AppState {
    pub geocoder: Arc<dyn Geocoder>,
    pub boundaries: Arc<dyn BoundarySource>,
    pub registry: Arc<DatasetRegistry>,
}

/// Build the router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_handler))
        .route(
            "/address_to_boundaries/",
            get(handlers::address_to_boundaries),
        )
        .route(
            "/address_to_boundaries",
            get(handlers::address_to_boundaries),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}
