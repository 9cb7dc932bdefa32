//! Immutable reference catalogs.
//!
//! Everything here is fixed at process start: catalogs are built once,
//! validated, and then only read. Runtime data (price reports, ledgers,
//! stock, profiles) lives in the domain services instead.

pub mod fish;
pub mod ledger_categories;
pub mod locations;
pub mod seasons;

use crate::diagnosis::DiagnosisEngine;
use crate::error::CoreResult;
use fish::FishGuide;
use ledger_categories::LedgerCategories;
use locations::LocationDirectory;
use seasons::SeasonCatalog;
use std::sync::Arc;

/// All reference catalogs, loaded and validated together at startup.
///
/// Construction fails fast on any catalog invariant violation, so a process
/// that starts successfully is guaranteed a coherent set of reference data.
#[derive(Clone)]
pub struct Catalogs {
    pub locations: Arc<LocationDirectory>,
    pub fish: Arc<FishGuide>,
    pub ledger: Arc<LedgerCategories>,
    pub seasons: Arc<SeasonCatalog>,
    pub diagnosis: Arc<DiagnosisEngine>,
}

impl Catalogs {
    /// Loads and validates every built-in catalog.
    pub fn load() -> CoreResult<Self> {
        Ok(Self {
            locations: Arc::new(LocationDirectory::bangladesh()?),
            fish: Arc::new(FishGuide::builtin()?),
            ledger: Arc::new(LedgerCategories::builtin()?),
            seasons: Arc::new(SeasonCatalog::builtin()?),
            diagnosis: Arc::new(DiagnosisEngine::builtin()?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_builtin_catalogs_load() {
        let catalogs = Catalogs::load().unwrap();
        assert!(!catalogs.locations.divisions().is_empty());
        assert!(!catalogs.fish.categories().is_empty());
        assert!(!catalogs.seasons.seasons().is_empty());
        assert!(!catalogs.diagnosis.symptoms().is_empty());
    }
}
