//! Constants used throughout the matsya core crate.
//!
//! All storage path and filename constants live here so the sharded layout
//! stays consistent across domain services.

/// Default directory for farm data storage when no explicit directory is configured.
pub const DEFAULT_DATA_DIR: &str = "farm_data";

/// Directory name for market price reports.
pub const MARKET_PRICES_DIR_NAME: &str = "market_prices";

/// Directory name for pond income entries.
pub const INCOME_DIR_NAME: &str = "income";

/// Directory name for pond expense entries.
pub const EXPENSES_DIR_NAME: &str = "expenses";

/// Directory name for fish stock entries.
pub const FISH_STOCK_DIR_NAME: &str = "fish_stock";

/// Directory name for farmer profiles.
pub const PROFILES_DIR_NAME: &str = "profiles";

/// Filename for stored record documents.
pub const RECORD_JSON_FILENAME: &str = "record.json";

/// Filename for farmer profile documents.
pub const PROFILE_JSON_FILENAME: &str = "profile.json";
