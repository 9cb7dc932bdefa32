//! # API Shared
//!
//! Shared utilities and definitions for the matsya APIs.
//!
//! Contains:
//! - Shared services like `HealthService`
//! - Gateway authentication utilities
//!
//! Used by `api-rest` for common functionality.

#![warn(rust_2018_idioms)]

pub mod auth;
pub mod health;

pub use auth::{AuthError, AuthedUser, GatewayAuth};
pub use health::{HealthRes, HealthService};
