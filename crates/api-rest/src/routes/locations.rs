//! Location directory endpoints backing the cascading selector.

use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use matsya_core::catalog::locations::{District, Division, Upazila};

#[utoipa::path(
    get,
    path = "/api/locations/divisions",
    responses(
        (status = 200, description = "All divisions ordered by Bengali name", body = Vec<Division>)
    )
)]
/// Lists all divisions.
pub async fn list_divisions(State(state): State<AppState>) -> Json<Vec<Division>> {
    Json(state.catalogs.locations.divisions())
}

#[utoipa::path(
    get,
    path = "/api/locations/districts/{division_id}",
    params(("division_id" = u32, Path, description = "Parent division id")),
    responses(
        (status = 200, description = "Districts of the division", body = Vec<District>)
    )
)]
/// Lists the districts of a division.
///
/// An unknown division id yields an empty list, matching the behaviour the
/// cascading selector expects when a parent selection is cleared.
pub async fn list_districts(
    State(state): State<AppState>,
    Path(division_id): Path<u32>,
) -> Json<Vec<District>> {
    Json(state.catalogs.locations.districts_of(division_id))
}

#[utoipa::path(
    get,
    path = "/api/locations/upazilas/{district_id}",
    params(("district_id" = u32, Path, description = "Parent district id")),
    responses(
        (status = 200, description = "Upazilas of the district", body = Vec<Upazila>)
    )
)]
/// Lists the upazilas of a district.
pub async fn list_upazilas(
    State(state): State<AppState>,
    Path(district_id): Path<u32>,
) -> Json<Vec<Upazila>> {
    Json(state.catalogs.locations.upazilas_of(district_id))
}
