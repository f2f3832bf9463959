//! HTTP router construction.

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::warn;

use crate::api;
use crate::state::AppState;

/// Build the application router with all routes and middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.cors_origin);
    Router::new()
        .route("/health", get(api::health))
        .route("/countries", get(api::countries_list))
        .route("/countries/{country}", get(api::country_details))
        .route("/countries/{country}/medals", get(api::country_medals))
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origin: &str) -> CorsLayer {
    if origin == "*" {
        return CorsLayer::permissive();
    }
    match origin.parse::<HeaderValue>() {
        Ok(value) => CorsLayer::new()
            .allow_origin(value)
            .allow_methods([Method::GET]),
        Err(e) => {
            warn!("Invalid CORS_ORIGIN '{}': {}, allowing any origin", origin, e);
            CorsLayer::permissive()
        }
    }
}
