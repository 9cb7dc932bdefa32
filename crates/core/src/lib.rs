//! # Matsya Core
//!
//! Domain logic for the matsya fish-farm management platform.
//!
//! This crate contains pure domain operations and file-backed storage:
//! - The disease diagnosis engine over validated symptom/disease catalogs
//! - Reference catalogs (locations, fish species, ledger categories,
//!   seasonal advice) loaded and validated once at startup
//! - Market price, accounting, stock and profile services over sharded
//!   JSON record storage under the configured data directory
//!
//! **No API concerns**: HTTP servers, request authentication and OpenAPI
//! documentation belong in `api-rest` and `api-shared`.

pub mod accounting;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod diagnosis;
pub mod error;
pub mod market;
pub mod profile;
pub mod stock;
pub mod store;

pub use catalog::Catalogs;
pub use config::CoreConfig;
pub use error::{CoreError, CoreResult};
