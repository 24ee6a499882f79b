use crate::{error::AppError, AppState};
use aggregation::{CountryDetails, CountrySummary, RecordStore};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use core_types::{capitalize_fully, GoldMedal};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The `sort_by` / `ascending` query pair shared by both listing endpoints.
/// `sort_by` is passed through as-is; the engine matches keys case-insensitively.
#[derive(Debug, Deserialize)]
pub struct SortParams {
    pub sort_by: String,
    pub ascending: String,
}

impl SortParams {
    /// Only "y" (any case) means ascending.
    pub fn is_ascending(&self) -> bool {
        self.ascending.eq_ignore_ascii_case("y")
    }
}

#[derive(Debug, Serialize)]
pub struct CountriesResponse {
    pub countries: Vec<CountrySummary>,
}

#[derive(Debug, Serialize)]
pub struct CountryMedalsResponse {
    pub medals: Vec<GoldMedal>,
}

/// # GET /countries?sort_by=&ascending=
pub async fn get_countries<S: RecordStore>(
    State(state): State<Arc<AppState<S>>>,
    Query(params): Query<SortParams>,
) -> Result<Json<CountriesResponse>, AppError> {
    let countries = state
        .engine
        .list_country_summaries(&params.sort_by, params.is_ascending())
        .await
        .map_err(AppError::store)?;
    Ok(Json(CountriesResponse { countries }))
}

/// # GET /countries/:country
/// The path segment is free text; it is canonicalised before the lookup.
pub async fn get_country_details<S: RecordStore>(
    Path(country): Path<String>,
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<CountryDetails>, AppError> {
    let country_name = capitalize_fully(&country);
    let details = state
        .engine
        .get_country_details(&country_name)
        .await
        .map_err(AppError::store)?;
    Ok(Json(details))
}

/// # GET /countries/:country/medals?sort_by=&ascending=
pub async fn get_country_medals<S: RecordStore>(
    Path(country): Path<String>,
    State(state): State<Arc<AppState<S>>>,
    Query(params): Query<SortParams>,
) -> Result<Json<CountryMedalsResponse>, AppError> {
    let country_name = capitalize_fully(&country);
    let medals = state
        .engine
        .list_country_medals(&country_name, &params.sort_by, params.is_ascending())
        .await
        .map_err(AppError::store)?;
    Ok(Json(CountryMedalsResponse { medals }))
}
