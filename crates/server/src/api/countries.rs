//! `/countries` endpoints. Raw input is normalized here: sort keys are
//! lowercased, `ascending` is parsed from `y`/`n` and country names are
//! fully capitalized before the engine sees them.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use goldmedal_compute::{CountriesResponse, CountryDetailsResponse, CountryMedalsListResponse};

use crate::normalize::{capitalize_fully, parse_ascending};
use crate::state::AppState;

use super::{internal_error, ApiResult};

#[derive(Debug, Deserialize)]
pub struct SortParams {
    pub sort_by: String,
    pub ascending: String,
}

/// `GET /countries?sort_by=&ascending=`
pub async fn countries_list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SortParams>,
) -> ApiResult<Json<CountriesResponse>> {
    let sort_by = params.sort_by.to_lowercase();
    let countries = state
        .engine
        .country_summaries(&sort_by, parse_ascending(&params.ascending))
        .await
        .map_err(internal_error)?;
    Ok(Json(CountriesResponse { countries }))
}

/// `GET /countries/{country}`
pub async fn country_details(
    State(state): State<Arc<AppState>>,
    Path(country): Path<String>,
) -> ApiResult<Json<CountryDetailsResponse>> {
    let name = capitalize_fully(&country);
    let details = state
        .engine
        .country_details(&name)
        .await
        .map_err(internal_error)?;
    Ok(Json(details))
}

/// `GET /countries/{country}/medals?sort_by=&ascending=`
pub async fn country_medals(
    State(state): State<Arc<AppState>>,
    Path(country): Path<String>,
    Query(params): Query<SortParams>,
) -> ApiResult<Json<CountryMedalsListResponse>> {
    let name = capitalize_fully(&country);
    let sort_by = params.sort_by.to_lowercase();
    let medals = state
        .engine
        .country_medals(&name, &sort_by, parse_ascending(&params.ascending))
        .await
        .map_err(internal_error)?;
    Ok(Json(CountryMedalsListResponse { medals }))
}
