//! Application state shared across REST API handlers.

use api_shared::GatewayAuth;
use matsya_core::accounting::AccountingService;
use matsya_core::market::MarketPriceService;
use matsya_core::profile::ProfileService;
use matsya_core::stock::StockService;
use matsya_core::{Catalogs, CoreConfig, CoreResult};
use std::sync::Arc;

/// Application state shared across REST API handlers.
///
/// Holds the validated reference catalogs, the domain services and the
/// gateway auth validator. Everything here is resolved once at startup;
/// handlers only read.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<GatewayAuth>,
    pub catalogs: Catalogs,
    pub market: MarketPriceService,
    pub accounting: AccountingService,
    pub stock: StockService,
    pub profiles: ProfileService,
}

impl AppState {
    /// Loads the catalogs and wires up the domain services.
    ///
    /// Fails fast on any catalog invariant violation, so a server that
    /// starts is guaranteed coherent reference data.
    pub fn initialise(cfg: &CoreConfig, auth: GatewayAuth) -> CoreResult<Self> {
        let catalogs = Catalogs::load()?;
        let market = MarketPriceService::new(cfg, catalogs.fish.clone(), catalogs.locations.clone());
        let accounting = AccountingService::new(cfg, catalogs.ledger.clone());
        let stock = StockService::new(cfg, catalogs.fish.clone());
        let profiles = ProfileService::new(cfg, catalogs.locations.clone());

        Ok(Self {
            auth: Arc::new(auth),
            catalogs,
            market,
            accounting,
            stock,
            profiles,
        })
    }
}
