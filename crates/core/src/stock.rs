//! Fish stock inventory.
//!
//! Tracks what a farmer has stocked in each pond: species, quantity, size
//! class, stocking and expected harvest dates. Entries are per user and
//! joined with the species catalog on the way out.

use crate::catalog::fish::{FishGuide, SpeciesWithCategory};
use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::store::DocumentStore;
use chrono::{DateTime, NaiveDate, Utc};
use matsya_types::{NonEmptyText, PositiveAmount};
use matsya_uuid::RecordId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// Growth stage of stocked fish.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StockSize {
    #[default]
    Fry,
    Fingerling,
    Juvenile,
    Adult,
}

/// A stored stock entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StockRecord {
    pub id: RecordId,
    pub user_id: RecordId,
    pub fish_species_id: u32,
    pub pond_name: NonEmptyText,
    pub quantity: PositiveAmount,
    pub size_category: StockSize,
    pub average_weight_g: Option<f64>,
    pub stocking_date: Option<NaiveDate>,
    pub expected_harvest_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A new stock entry as submitted by a farmer.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct NewStock {
    pub fish_species_id: u32,
    pub pond_name: String,
    pub quantity: f64,
    /// Defaults to [`StockSize::Fry`] when omitted.
    pub size_category: Option<StockSize>,
    pub average_weight_g: Option<f64>,
    pub stocking_date: Option<NaiveDate>,
    pub expected_harvest_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// A stock entry joined with its species.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct StockView {
    #[schema(value_type = String)]
    pub id: RecordId,
    #[schema(value_type = String)]
    pub pond_name: NonEmptyText,
    pub quantity: f64,
    pub size_category: StockSize,
    pub average_weight_g: Option<f64>,
    pub stocking_date: Option<NaiveDate>,
    pub expected_harvest_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub fish_species: SpeciesWithCategory,
}

/// Stock inventory operations over the sharded record store.
#[derive(Clone)]
pub struct StockService {
    store: DocumentStore,
    fish: Arc<FishGuide>,
}

impl StockService {
    pub fn new(cfg: &CoreConfig, fish: Arc<FishGuide>) -> Self {
        Self {
            store: DocumentStore::new(cfg.fish_stock_dir()),
            fish,
        }
    }

    /// A farmer's stock entries, newest first.
    pub fn list(&self, user_id: RecordId) -> Vec<StockView> {
        let mut records: Vec<StockRecord> = self
            .store
            .load_all()
            .into_iter()
            .filter(|r: &StockRecord| r.user_id == user_id)
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records.into_iter().filter_map(|r| self.view(r)).collect()
    }

    /// Stores a new stock entry.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownReference`] for an unknown species,
    /// [`CoreError::Text`] for a blank pond name, and [`CoreError::Amount`]
    /// for a non-positive quantity.
    pub fn add(&self, user_id: RecordId, new: NewStock) -> CoreResult<StockView> {
        if self.fish.species_by_id(new.fish_species_id).is_none() {
            return Err(CoreError::UnknownReference {
                entity: "fish species",
                id: new.fish_species_id.to_string(),
            });
        }
        let record = StockRecord {
            id: RecordId::generate(),
            user_id,
            fish_species_id: new.fish_species_id,
            pond_name: NonEmptyText::new(&new.pond_name)?,
            quantity: PositiveAmount::new(new.quantity)?,
            size_category: new.size_category.unwrap_or_default(),
            average_weight_g: new.average_weight_g,
            stocking_date: new.stocking_date,
            expected_harvest_date: new.expected_harvest_date,
            notes: new.notes,
            created_at: Utc::now(),
        };
        self.store.write(&record.id, &record)?;
        self.view(record)
            .ok_or_else(|| CoreError::InvalidInput("stored entry failed to join catalogs".into()))
    }

    fn view(&self, record: StockRecord) -> Option<StockView> {
        let fish_species = self.fish.species_by_id(record.fish_species_id)?;
        Some(StockView {
            id: record.id,
            pond_name: record.pond_name,
            quantity: record.quantity.value(),
            size_category: record.size_category,
            average_weight_g: record.average_weight_g,
            stocking_date: record.stocking_date,
            expected_harvest_date: record.expected_harvest_date,
            notes: record.notes,
            created_at: record.created_at,
            fish_species,
        })
    }
}
