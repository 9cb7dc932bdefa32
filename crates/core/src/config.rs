//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into
//! core services. Request handlers never read process-wide environment
//! variables, which keeps behaviour consistent across multi-threaded
//! runtimes and test harnesses.

use crate::constants::{
    DEFAULT_DATA_DIR, EXPENSES_DIR_NAME, FISH_STOCK_DIR_NAME, INCOME_DIR_NAME,
    MARKET_PRICES_DIR_NAME, PROFILES_DIR_NAME,
};
use crate::error::{CoreError, CoreResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    data_dir: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig` rooted at `data_dir`.
    pub fn new(data_dir: PathBuf) -> CoreResult<Self> {
        if data_dir.as_os_str().is_empty() {
            return Err(CoreError::InvalidInput("data_dir cannot be empty".into()));
        }
        Ok(Self { data_dir })
    }

    /// Resolve the configuration from an optional environment value.
    ///
    /// `None` or an empty/whitespace value falls back to the default
    /// `farm_data/` directory relative to the working directory.
    pub fn from_env_value(value: Option<String>) -> CoreResult<Self> {
        let dir = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
        Self::new(PathBuf::from(dir))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn market_prices_dir(&self) -> PathBuf {
        self.data_dir.join(MARKET_PRICES_DIR_NAME)
    }

    pub fn income_dir(&self) -> PathBuf {
        self.data_dir.join(INCOME_DIR_NAME)
    }

    pub fn expenses_dir(&self) -> PathBuf {
        self.data_dir.join(EXPENSES_DIR_NAME)
    }

    pub fn fish_stock_dir(&self) -> PathBuf {
        self.data_dir.join(FISH_STOCK_DIR_NAME)
    }

    pub fn profiles_dir(&self) -> PathBuf {
        self.data_dir.join(PROFILES_DIR_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_value_defaults_when_unset_or_blank() {
        let cfg = CoreConfig::from_env_value(None).unwrap();
        assert_eq!(cfg.data_dir(), Path::new(DEFAULT_DATA_DIR));

        let cfg = CoreConfig::from_env_value(Some("   ".into())).unwrap();
        assert_eq!(cfg.data_dir(), Path::new(DEFAULT_DATA_DIR));
    }

    #[test]
    fn from_env_value_uses_override() {
        let cfg = CoreConfig::from_env_value(Some("/tmp/matsya".into())).unwrap();
        assert_eq!(cfg.data_dir(), Path::new("/tmp/matsya"));
        assert_eq!(
            cfg.market_prices_dir(),
            Path::new("/tmp/matsya/market_prices")
        );
    }
}
