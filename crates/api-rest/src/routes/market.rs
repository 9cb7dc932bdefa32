//! Market price endpoints.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;
use matsya_core::market::{MarketPriceView, NewMarketPrice, PriceFilter};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct PriceQuery {
    /// Division filter; ignored when a district or upazila is given.
    pub division: Option<u32>,
    /// District filter; ignored when an upazila is given.
    pub district: Option<u32>,
    pub upazila: Option<u32>,
    /// Species filter.
    pub species: Option<u32>,
    /// Maximum rows to return (default 50).
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct LatestQuery {
    pub upazila: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/api/market-prices",
    params(PriceQuery),
    responses(
        (status = 200, description = "Price reports, newest first", body = Vec<MarketPriceView>)
    )
)]
/// Lists market price reports filtered by location and species.
pub async fn list_prices(
    State(state): State<AppState>,
    Query(query): Query<PriceQuery>,
) -> Json<Vec<MarketPriceView>> {
    let filter = PriceFilter {
        division_id: query.division,
        district_id: query.district,
        upazila_id: query.upazila,
        fish_species_id: query.species,
        limit: query.limit,
    };
    Json(state.market.list(&filter))
}

#[utoipa::path(
    get,
    path = "/api/market-prices/latest",
    params(LatestQuery),
    responses(
        (status = 200, description = "Most recent price per species", body = Vec<MarketPriceView>)
    )
)]
/// The latest reported price for each species, optionally scoped to an upazila.
pub async fn latest_prices(
    State(state): State<AppState>,
    Query(query): Query<LatestQuery>,
) -> Json<Vec<MarketPriceView>> {
    Json(state.market.latest(query.upazila))
}

#[utoipa::path(
    post,
    path = "/api/market-prices",
    request_body = NewMarketPrice,
    responses(
        (status = 200, description = "The stored price report", body = MarketPriceView),
        (status = 400, description = "Invalid report", body = crate::error::ErrorRes),
        (status = 401, description = "Authentication required", body = crate::error::ErrorRes)
    )
)]
/// Stores a new price report from an authenticated farmer.
pub async fn report_price(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<NewMarketPrice>,
) -> Result<Json<MarketPriceView>, ApiError> {
    let user = state.auth.authenticate(&headers)?;
    let view = state.market.report(user.user_id, body)?;
    Ok(Json(view))
}
