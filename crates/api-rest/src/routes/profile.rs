//! Farmer profile endpoints. User-scoped and authenticated.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use matsya_core::profile::{Profile, ProfileUpdate};

#[utoipa::path(
    get,
    path = "/api/user/profile",
    responses(
        (status = 200, description = "The farmer's profile", body = Profile),
        (status = 404, description = "No profile saved yet", body = crate::error::ErrorRes),
        (status = 401, description = "Authentication required", body = crate::error::ErrorRes)
    )
)]
/// Fetches the authenticated farmer's profile.
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Profile>, ApiError> {
    let user = state.auth.authenticate(&headers)?;
    state
        .profiles
        .get(user.user_id)?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("no profile saved"))
}

#[utoipa::path(
    put,
    path = "/api/user/profile",
    request_body = ProfileUpdate,
    responses(
        (status = 200, description = "The saved profile", body = Profile),
        (status = 400, description = "Invalid location selection", body = crate::error::ErrorRes),
        (status = 401, description = "Authentication required", body = crate::error::ErrorRes)
    )
)]
/// Creates or replaces the authenticated farmer's profile.
pub async fn put_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<ProfileUpdate>,
) -> Result<Json<Profile>, ApiError> {
    let user = state.auth.authenticate(&headers)?;
    Ok(Json(state.profiles.upsert(user.user_id, body)?))
}
