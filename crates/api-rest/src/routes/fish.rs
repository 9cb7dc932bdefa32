//! Fish knowledge base endpoints.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::Json;
use matsya_core::catalog::fish::{FishCategory, SpeciesWithCategory};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SpeciesQuery {
    /// Restrict the listing to one category.
    pub category: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/api/fish/categories",
    responses(
        (status = 200, description = "All fish categories", body = Vec<FishCategory>)
    )
)]
/// Lists all fish categories.
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<FishCategory>> {
    Json(state.catalogs.fish.categories())
}

#[utoipa::path(
    get,
    path = "/api/fish/species",
    params(SpeciesQuery),
    responses(
        (status = 200, description = "Species joined with their category", body = Vec<SpeciesWithCategory>)
    )
)]
/// Lists fish species, optionally filtered by category.
pub async fn list_species(
    State(state): State<AppState>,
    Query(query): Query<SpeciesQuery>,
) -> Json<Vec<SpeciesWithCategory>> {
    Json(state.catalogs.fish.species(query.category))
}

#[utoipa::path(
    get,
    path = "/api/fish/species/{id}",
    params(("id" = u32, Path, description = "Species id")),
    responses(
        (status = 200, description = "The species with its category", body = SpeciesWithCategory),
        (status = 404, description = "Unknown species", body = crate::error::ErrorRes)
    )
)]
/// Fetches a single species by id.
pub async fn get_species(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<SpeciesWithCategory>, ApiError> {
    state
        .catalogs
        .fish
        .species_by_id(id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("unknown fish species id: {id}")))
}
