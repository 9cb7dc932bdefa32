//! Fish stock endpoints. User-scoped and authenticated.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use matsya_core::stock::{NewStock, StockView};

#[utoipa::path(
    get,
    path = "/api/user/fish-stock",
    responses(
        (status = 200, description = "The farmer's stock entries, newest first", body = Vec<StockView>),
        (status = 401, description = "Authentication required", body = crate::error::ErrorRes)
    )
)]
/// A farmer's stock inventory.
pub async fn list_stock(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<StockView>>, ApiError> {
    let user = state.auth.authenticate(&headers)?;
    Ok(Json(state.stock.list(user.user_id)))
}

#[utoipa::path(
    post,
    path = "/api/user/fish-stock",
    request_body = NewStock,
    responses(
        (status = 200, description = "The stored stock entry", body = StockView),
        (status = 400, description = "Invalid entry", body = crate::error::ErrorRes),
        (status = 401, description = "Authentication required", body = crate::error::ErrorRes)
    )
)]
/// Records a new stocking.
pub async fn add_stock(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<NewStock>,
) -> Result<Json<StockView>, ApiError> {
    let user = state.auth.authenticate(&headers)?;
    Ok(Json(state.stock.add(user.user_id, body)?))
}
