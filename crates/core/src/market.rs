//! Market price reporting and lookups.
//!
//! Farmers report the price a species fetched at a local market; lookups
//! filter by administrative location (most specific level wins) and species,
//! newest first. Reports are validated against the reference catalogs before
//! being stored.

use crate::catalog::fish::{FishGuide, SpeciesWithCategory};
use crate::catalog::locations::{LocationChain, LocationDirectory};
use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::store::DocumentStore;
use chrono::{DateTime, NaiveDate, Utc};
use matsya_types::PositiveAmount;
use matsya_uuid::RecordId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// Default number of rows returned by a price listing.
const DEFAULT_LIST_LIMIT: usize = 50;

/// Number of rows returned by the latest-prices lookup.
const LATEST_LIMIT: usize = 20;

/// Market size class of the priced fish.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SizeCategory {
    Small,
    #[default]
    Medium,
    Large,
}

/// A stored market price report.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MarketPriceRecord {
    pub id: RecordId,
    pub fish_species_id: u32,
    pub upazila_id: u32,
    pub price_per_kg: PositiveAmount,
    pub size_category: SizeCategory,
    pub market_name: Option<String>,
    pub price_date: NaiveDate,
    pub reported_by: RecordId,
    pub created_at: DateTime<Utc>,
}

/// A new price report as submitted by a farmer.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct NewMarketPrice {
    pub fish_species_id: u32,
    pub upazila_id: u32,
    pub price_per_kg: f64,
    /// Defaults to [`SizeCategory::Medium`] when omitted.
    pub size_category: Option<SizeCategory>,
    pub market_name: Option<String>,
    /// Defaults to today when omitted.
    pub price_date: Option<NaiveDate>,
}

/// A price report joined with its species and location chain.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct MarketPriceView {
    #[schema(value_type = String)]
    pub id: RecordId,
    pub price_per_kg: f64,
    pub size_category: SizeCategory,
    pub market_name: Option<String>,
    pub price_date: NaiveDate,
    #[schema(value_type = String)]
    pub reported_by: RecordId,
    pub created_at: DateTime<Utc>,
    pub fish_species: SpeciesWithCategory,
    pub location: LocationChain,
}

/// Location/species filter for price listings.
///
/// Location levels are applied most-specific-first: an upazila filter wins
/// over a district filter, which wins over a division filter.
#[derive(Clone, Debug, Default)]
pub struct PriceFilter {
    pub division_id: Option<u32>,
    pub district_id: Option<u32>,
    pub upazila_id: Option<u32>,
    pub fish_species_id: Option<u32>,
    pub limit: Option<usize>,
}

/// Market price operations over the sharded record store.
#[derive(Clone)]
pub struct MarketPriceService {
    store: DocumentStore,
    fish: Arc<FishGuide>,
    locations: Arc<LocationDirectory>,
}

impl MarketPriceService {
    pub fn new(cfg: &CoreConfig, fish: Arc<FishGuide>, locations: Arc<LocationDirectory>) -> Self {
        Self {
            store: DocumentStore::new(cfg.market_prices_dir()),
            fish,
            locations,
        }
    }

    /// Lists price reports matching `filter`, newest first.
    pub fn list(&self, filter: &PriceFilter) -> Vec<MarketPriceView> {
        let mut records: Vec<MarketPriceRecord> = self
            .store
            .load_all()
            .into_iter()
            .filter(|record: &MarketPriceRecord| self.matches_location(record, filter))
            .filter(|record| {
                filter
                    .fish_species_id
                    .is_none_or(|id| record.fish_species_id == id)
            })
            .collect();

        sort_newest_first(&mut records);
        records.truncate(filter.limit.unwrap_or(DEFAULT_LIST_LIMIT));
        self.into_views(records)
    }

    /// The most recent price per species, optionally scoped to an upazila.
    pub fn latest(&self, upazila_id: Option<u32>) -> Vec<MarketPriceView> {
        let mut records: Vec<MarketPriceRecord> = self
            .store
            .load_all()
            .into_iter()
            .filter(|record: &MarketPriceRecord| {
                upazila_id.is_none_or(|id| record.upazila_id == id)
            })
            .collect();

        sort_newest_first(&mut records);

        // Keep only the newest report per species.
        let mut seen_species = std::collections::HashSet::new();
        records.retain(|record| seen_species.insert(record.fish_species_id));
        records.truncate(LATEST_LIMIT);
        self.into_views(records)
    }

    /// Stores a new price report after validating its references.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownReference`] for an unknown species or
    /// upazila, and [`CoreError::Amount`] for a non-positive price.
    pub fn report(
        &self,
        reported_by: RecordId,
        new: NewMarketPrice,
    ) -> CoreResult<MarketPriceView> {
        if self.fish.species_by_id(new.fish_species_id).is_none() {
            return Err(CoreError::UnknownReference {
                entity: "fish species",
                id: new.fish_species_id.to_string(),
            });
        }
        if self.locations.upazila(new.upazila_id).is_none() {
            return Err(CoreError::UnknownReference {
                entity: "upazila",
                id: new.upazila_id.to_string(),
            });
        }
        let price_per_kg = PositiveAmount::new(new.price_per_kg)?;

        let record = MarketPriceRecord {
            id: RecordId::generate(),
            fish_species_id: new.fish_species_id,
            upazila_id: new.upazila_id,
            price_per_kg,
            size_category: new.size_category.unwrap_or_default(),
            market_name: new.market_name,
            price_date: new.price_date.unwrap_or_else(|| Utc::now().date_naive()),
            reported_by,
            created_at: Utc::now(),
        };
        self.store.write(&record.id, &record)?;

        self.view(record).ok_or_else(|| {
            // Unreachable after the reference checks above.
            CoreError::InvalidInput("stored record failed to join catalogs".into())
        })
    }

    fn matches_location(&self, record: &MarketPriceRecord, filter: &PriceFilter) -> bool {
        if let Some(upazila_id) = filter.upazila_id {
            return record.upazila_id == upazila_id;
        }
        if let Some(district_id) = filter.district_id {
            return self
                .locations
                .upazila(record.upazila_id)
                .is_some_and(|u| u.district_id == district_id);
        }
        if let Some(division_id) = filter.division_id {
            return self
                .locations
                .chain(record.upazila_id)
                .is_some_and(|chain| chain.division.id == division_id);
        }
        true
    }

    fn into_views(&self, records: Vec<MarketPriceRecord>) -> Vec<MarketPriceView> {
        records
            .into_iter()
            .filter_map(|record| {
                let id = record.id;
                let view = self.view(record);
                if view.is_none() {
                    tracing::warn!("price report {} no longer joins the catalogs", id);
                }
                view
            })
            .collect()
    }

    fn view(&self, record: MarketPriceRecord) -> Option<MarketPriceView> {
        let fish_species = self.fish.species_by_id(record.fish_species_id)?;
        let location = self.locations.chain(record.upazila_id)?;
        Some(MarketPriceView {
            id: record.id,
            price_per_kg: record.price_per_kg.value(),
            size_category: record.size_category,
            market_name: record.market_name,
            price_date: record.price_date,
            reported_by: record.reported_by,
            created_at: record.created_at,
            fish_species,
            location,
        })
    }
}

fn sort_newest_first(records: &mut [MarketPriceRecord]) {
    records.sort_by(|a, b| {
        b.price_date
            .cmp(&a.price_date)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}
