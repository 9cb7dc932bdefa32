//! Standalone REST server binary.

use api_rest::AppState;
use api_shared::GatewayAuth;
use matsya_core::CoreConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Entry point for the standalone REST API server.
///
/// # Environment Variables
/// - `MATSYA_REST_ADDR`: listen address (default: "0.0.0.0:3000")
/// - `MATSYA_DATA_DIR`: directory for farm data storage (default: "farm_data")
/// - `MATSYA_API_KEY`: shared gateway key for authenticated endpoints
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("matsya=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("MATSYA_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let cfg = CoreConfig::from_env_value(std::env::var("MATSYA_DATA_DIR").ok())?;
    let auth = GatewayAuth::from_env_value(std::env::var("MATSYA_API_KEY").ok())?;
    let state = AppState::initialise(&cfg, auth)?;

    tracing::info!("++ Starting matsya REST on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, api_rest::app(state)).await?;

    Ok(())
}
