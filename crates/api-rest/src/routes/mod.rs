//! REST route handlers.

pub mod accounting;
pub mod fish;
pub mod guide;
pub mod locations;
pub mod market;
pub mod profile;
pub mod stock;

use crate::state::AppState;
use api_shared::{HealthRes, HealthService};
use axum::extract::State;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint used for monitoring and load balancer checks.
pub async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[cfg(test)]
mod tests {
    use crate::state::AppState;
    use api_shared::GatewayAuth;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use matsya_core::CoreConfig;
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    const API_KEY: &str = "test-key";
    const USER: &str = "550e8400e29b41d4a716446655440000";

    fn test_app(dir: &TempDir) -> axum::Router {
        let cfg = CoreConfig::new(dir.path().to_path_buf()).unwrap();
        let auth = GatewayAuth::new(API_KEY).unwrap();
        crate::app(AppState::initialise(&cfg, auth).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn authed(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("x-api-key", API_KEY)
            .header("x-user-id", USER)
            .header(header::CONTENT_TYPE, "application/json");
        match body {
            Some(value) => builder.body(Body::from(value.to_string())).unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_reports_alive() {
        let dir = TempDir::new().unwrap();
        let response = test_app(&dir).oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["ok"], json!(true));
    }

    #[tokio::test]
    async fn location_listing_cascades() {
        let dir = TempDir::new().unwrap();
        let app = test_app(&dir);

        let response = app
            .clone()
            .oneshot(get("/api/locations/divisions"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let divisions = body_json(response).await;
        assert_eq!(divisions.as_array().unwrap().len(), 8);

        let response = app
            .clone()
            .oneshot(get("/api/locations/districts/1"))
            .await
            .unwrap();
        let districts = body_json(response).await;
        assert!(districts
            .as_array()
            .unwrap()
            .iter()
            .all(|d| d["division_id"] == json!(1)));

        // Unknown parent yields an empty list, not an error.
        let response = app
            .oneshot(get("/api/locations/upazilas/999"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_json(response).await.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn fish_species_lookup_and_404() {
        let dir = TempDir::new().unwrap();
        let app = test_app(&dir);

        let response = app
            .clone()
            .oneshot(get("/api/fish/species?category=1"))
            .await
            .unwrap();
        let species = body_json(response).await;
        assert_eq!(species.as_array().unwrap().len(), 6);

        let response = app.clone().oneshot(get("/api/fish/species/1")).await.unwrap();
        let rohu = body_json(response).await;
        assert_eq!(rohu["name_en"], json!("Rohu"));
        assert_eq!(rohu["fish_category"]["id"], json!(1));

        let response = app.oneshot(get("/api/fish/species/999")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn diagnosis_ranks_by_match_percentage() {
        let dir = TempDir::new().unwrap();
        let app = test_app(&dir);

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/guide/diagnosis")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({"symptom_ids": ["gasping", "abnormal_swimming", "lethargy"]}).to_string(),
            ))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let results = body_json(response).await;
        let results = results.as_array().unwrap();
        assert_eq!(results[0]["id"], json!("oxygen_deficiency"));
        assert_eq!(results[0]["match_percentage"], json!(100.0));
        assert_eq!(results[0]["severity"], json!("high"));

        // Empty selection: no diagnosis attempted.
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/guide/diagnosis")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"symptom_ids": []}).to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert!(body_json(response).await.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn symptom_catalog_is_grouped() {
        let dir = TempDir::new().unwrap();
        let response = test_app(&dir)
            .oneshot(get("/api/guide/symptoms"))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["external"].as_array().unwrap().len(), 5);
        assert_eq!(body["behavioral"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn user_endpoints_require_authentication() {
        let dir = TempDir::new().unwrap();
        let app = test_app(&dir);

        for uri in [
            "/api/user/fish-stock",
            "/api/user/accounting",
            "/api/user/profile",
        ] {
            let response = app.clone().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
            let body = body_json(response).await;
            assert_eq!(body["error"], json!("Authentication required"));
        }

        // A wrong key is rejected the same way.
        let request = Request::builder()
            .uri("/api/user/fish-stock")
            .header("x-api-key", "wrong")
            .header("x-user-id", USER)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn market_price_report_and_listing() {
        let dir = TempDir::new().unwrap();
        let app = test_app(&dir);

        // Unauthenticated report is refused.
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/market-prices")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({"fish_species_id": 1, "upazila_id": 10101, "price_per_kg": 320.0})
                    .to_string(),
            ))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let request = authed(
            Method::POST,
            "/api/market-prices",
            Some(json!({"fish_species_id": 1, "upazila_id": 10101, "price_per_kg": 320.0})),
        );
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let stored = body_json(response).await;
        assert_eq!(stored["size_category"], json!("medium"));
        assert_eq!(stored["fish_species"]["name_en"], json!("Rohu"));
        assert_eq!(stored["location"]["upazila"]["name_en"], json!("Savar"));

        // Unknown species is a 400 with a message.
        let request = authed(
            Method::POST,
            "/api/market-prices",
            Some(json!({"fish_species_id": 999, "upazila_id": 10101, "price_per_kg": 320.0})),
        );
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .clone()
            .oneshot(get("/api/market-prices?division=1"))
            .await
            .unwrap();
        assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

        let response = app
            .oneshot(get("/api/market-prices?division=2"))
            .await
            .unwrap();
        assert!(body_json(response).await.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn accounting_flow_with_type_filter_and_summary() {
        let dir = TempDir::new().unwrap();
        let app = test_app(&dir);

        let request = authed(
            Method::POST,
            "/api/user/accounting",
            Some(json!({
                "type": "income",
                "category_id": 1,
                "pond_name": "বড় পুকুর",
                "amount": 5000.0,
                "income_date": "2026-07-01"
            })),
        );
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let request = authed(
            Method::POST,
            "/api/user/accounting",
            Some(json!({
                "type": "expense",
                "category_id": 2,
                "pond_name": "বড় পুকুর",
                "amount": 1200.0,
                "expense_date": "2026-07-02"
            })),
        );
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(authed(Method::GET, "/api/user/accounting?type=income", None))
            .await
            .unwrap();
        let income = body_json(response).await;
        assert_eq!(income.as_array().unwrap().len(), 1);

        let response = app
            .clone()
            .oneshot(authed(Method::GET, "/api/user/accounting", None))
            .await
            .unwrap();
        let both = body_json(response).await;
        assert_eq!(both["income"].as_array().unwrap().len(), 1);
        assert_eq!(both["expenses"].as_array().unwrap().len(), 1);

        let response = app
            .oneshot(authed(Method::GET, "/api/user/accounting/summary", None))
            .await
            .unwrap();
        let summary = body_json(response).await;
        assert_eq!(summary["total_income"], json!(5000.0));
        assert_eq!(summary["total_expenses"], json!(1200.0));
        assert_eq!(summary["net_profit"], json!(3800.0));
        assert_eq!(summary["ponds"], json!(["বড় পুকুর"]));
    }

    #[tokio::test]
    async fn stock_roundtrip() {
        let dir = TempDir::new().unwrap();
        let app = test_app(&dir);

        let request = authed(
            Method::POST,
            "/api/user/fish-stock",
            Some(json!({
                "fish_species_id": 13,
                "pond_name": "নতুন পুকুর",
                "quantity": 2000.0
            })),
        );
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let stored = body_json(response).await;
        assert_eq!(stored["size_category"], json!("fry"));

        let response = app
            .oneshot(authed(Method::GET, "/api/user/fish-stock", None))
            .await
            .unwrap();
        let rows = body_json(response).await;
        assert_eq!(rows.as_array().unwrap().len(), 1);
        assert_eq!(
            rows[0]["fish_species"]["name_en"],
            json!("Nile tilapia")
        );
    }

    #[tokio::test]
    async fn profile_upsert_and_fetch() {
        let dir = TempDir::new().unwrap();
        let app = test_app(&dir);

        // Nothing saved yet.
        let response = app
            .clone()
            .oneshot(authed(Method::GET, "/api/user/profile", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let request = authed(
            Method::PUT,
            "/api/user/profile",
            Some(json!({
                "full_name": "আব্দুল করিম",
                "farmer_type": "commercial",
                "division_id": 1,
                "district_id": 101,
                "upazila_id": 10101
            })),
        );
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(authed(Method::GET, "/api/user/profile", None))
            .await
            .unwrap();
        let profile = body_json(response).await;
        assert_eq!(profile["full_name"], json!("আব্দুল করিম"));
        assert_eq!(profile["user_id"], json!(USER));

        // Inconsistent location chain is a 400.
        let request = authed(
            Method::PUT,
            "/api/user/profile",
            Some(json!({"division_id": 1, "district_id": 201})),
        );
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
