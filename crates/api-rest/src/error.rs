//! REST error mapping.
//!
//! Every error leaves the API as `{ "error": "…" }` with an appropriate
//! status code. Validation problems surface with their message; storage and
//! configuration failures are logged and collapsed to a generic 500 so
//! internals never leak to the client.

use api_shared::AuthError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use matsya_core::CoreError;
use serde::Serialize;
use utoipa::ToSchema;

/// JSON error body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

/// An error response carrying its status code.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Authentication required")
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorRes {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(_)
            | CoreError::UnknownReference { .. }
            | CoreError::Text(_)
            | CoreError::Amount(_) => Self::bad_request(err.to_string()),
            other => {
                tracing::error!("core error: {:?}", other);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingKeyConfig => {
                tracing::error!("auth misconfiguration: {:?}", err);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
            }
            _ => Self::unauthorized(),
        }
    }
}
