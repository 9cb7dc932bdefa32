//! Gateway authentication utilities.
//!
//! Authentication itself is delegated to the fronting platform: the gateway
//! verifies the farmer's session and forwards the authenticated subject to
//! this API. Requests to protected endpoints must carry:
//!
//! - `x-api-key` — the shared gateway key, configured via `MATSYA_API_KEY`
//! - `x-user-id` — the authenticated user's canonical record id
//!
//! The key is resolved once at startup; request handling never reads the
//! process environment.

use axum::http::HeaderMap;
use matsya_uuid::RecordId;

/// Header carrying the shared gateway key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Header carrying the authenticated user id forwarded by the gateway.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Errors produced while authenticating a request.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("MATSYA_API_KEY is not configured")]
    MissingKeyConfig,
    #[error("missing {API_KEY_HEADER} header")]
    MissingApiKey,
    #[error("invalid API key")]
    InvalidApiKey,
    #[error("missing {USER_ID_HEADER} header")]
    MissingUserId,
    #[error("invalid {USER_ID_HEADER} header: {0}")]
    InvalidUserId(#[from] matsya_uuid::IdError),
}

/// The authenticated subject of a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthedUser {
    pub user_id: RecordId,
}

/// Validates gateway-forwarded credentials against the configured key.
#[derive(Clone, Debug)]
pub struct GatewayAuth {
    api_key: String,
}

impl GatewayAuth {
    /// Creates a validator for the given key.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingKeyConfig`] for an empty key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, AuthError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AuthError::MissingKeyConfig);
        }
        Ok(Self { api_key })
    }

    /// Resolves the validator from an optional environment value.
    pub fn from_env_value(value: Option<String>) -> Result<Self, AuthError> {
        Self::new(value.unwrap_or_default())
    }

    /// Checks the gateway key alone, without requiring a user identity.
    ///
    /// Used by endpoints that accept writes from the gateway but are not
    /// scoped to a particular user.
    pub fn validate_api_key(&self, headers: &HeaderMap) -> Result<(), AuthError> {
        let provided = headers
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or(AuthError::MissingApiKey)?;
        if provided != self.api_key {
            return Err(AuthError::InvalidApiKey);
        }
        Ok(())
    }

    /// Authenticates a request and extracts the forwarded user identity.
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<AuthedUser, AuthError> {
        self.validate_api_key(headers)?;
        let user_id = headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or(AuthError::MissingUserId)?;
        Ok(AuthedUser {
            user_id: RecordId::parse(user_id)?,
        })
    }
}
