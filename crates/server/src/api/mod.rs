//! HTTP handlers. Each sub-module owns one area; shared error types live here.

mod countries;
mod health;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct QueryErrorResponse {
    pub error: String,
}

pub(crate) type ApiResult<T> = Result<T, (StatusCode, Json<QueryErrorResponse>)>;

pub(crate) fn internal_error(e: impl std::fmt::Display) -> (StatusCode, Json<QueryErrorResponse>) {
    tracing::error!("request failed: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(QueryErrorResponse {
            error: e.to_string(),
        }),
    )
}

pub use countries::{countries_list, country_details, country_medals};
pub use health::health;
