//! # API REST
//!
//! REST API implementation for matsya.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, error bodies)
//!
//! Uses `api-shared` for the health service and gateway authentication and
//! `matsya-core` for all domain behaviour.

#![warn(rust_2018_idioms)]

pub mod docs;
pub mod error;
pub mod routes;
pub mod state;

pub use docs::ApiDoc;
pub use state::AppState;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the REST application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/api/locations/divisions", get(routes::locations::list_divisions))
        .route(
            "/api/locations/districts/:division_id",
            get(routes::locations::list_districts),
        )
        .route(
            "/api/locations/upazilas/:district_id",
            get(routes::locations::list_upazilas),
        )
        .route("/api/fish/categories", get(routes::fish::list_categories))
        .route("/api/fish/species", get(routes::fish::list_species))
        .route("/api/fish/species/:id", get(routes::fish::get_species))
        .route(
            "/api/market-prices",
            get(routes::market::list_prices).post(routes::market::report_price),
        )
        .route("/api/market-prices/latest", get(routes::market::latest_prices))
        .route("/api/guide/symptoms", get(routes::guide::list_symptoms))
        .route("/api/guide/diagnosis", post(routes::guide::diagnose))
        .route("/api/guide/seasons", get(routes::guide::list_seasons))
        .route(
            "/api/user/accounting",
            get(routes::accounting::list_entries).post(routes::accounting::add_entry),
        )
        .route(
            "/api/user/accounting/summary",
            get(routes::accounting::summary),
        )
        .route(
            "/api/user/fish-stock",
            get(routes::stock::list_stock).post(routes::stock::add_stock),
        )
        .route(
            "/api/user/profile",
            get(routes::profile::get_profile).put(routes::profile::put_profile),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
