//! Farmer profiles.
//!
//! One profile document per user, keyed directly by the user's id so reads
//! and upserts never need a scan. Location references are validated against
//! the location directory, including that the selected district belongs to
//! the selected division and the upazila to the district.

use crate::catalog::locations::LocationDirectory;
use crate::config::CoreConfig;
use crate::constants::PROFILE_JSON_FILENAME;
use crate::error::{CoreError, CoreResult};
use crate::store::DocumentStore;
use chrono::{DateTime, Utc};
use matsya_uuid::RecordId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// What kind of operation the farmer runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FarmerType {
    Commercial,
    Hobbyist,
    Hatchery,
}

/// A farmer's profile document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    #[schema(value_type = String)]
    pub user_id: RecordId,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub farmer_type: Option<FarmerType>,
    pub division_id: Option<u32>,
    pub district_id: Option<u32>,
    pub upazila_id: Option<u32>,
    pub address: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// A profile update as submitted by the farmer.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub farmer_type: Option<FarmerType>,
    pub division_id: Option<u32>,
    pub district_id: Option<u32>,
    pub upazila_id: Option<u32>,
    pub address: Option<String>,
}

/// Profile storage keyed by user id.
#[derive(Clone)]
pub struct ProfileService {
    store: DocumentStore,
    locations: Arc<LocationDirectory>,
}

impl ProfileService {
    pub fn new(cfg: &CoreConfig, locations: Arc<LocationDirectory>) -> Self {
        Self {
            store: DocumentStore::with_filename(cfg.profiles_dir(), PROFILE_JSON_FILENAME),
            locations,
        }
    }

    /// Loads a farmer's profile, if one has been saved.
    pub fn get(&self, user_id: RecordId) -> CoreResult<Option<Profile>> {
        self.store.read(&user_id)
    }

    /// Creates or replaces a farmer's profile.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownReference`] for location ids missing from
    /// the directory and [`CoreError::InvalidInput`] for a location chain
    /// that does not hang together (district outside the division, upazila
    /// outside the district).
    pub fn upsert(&self, user_id: RecordId, update: ProfileUpdate) -> CoreResult<Profile> {
        self.validate_location(&update)?;

        let profile = Profile {
            user_id,
            full_name: update.full_name,
            phone: update.phone,
            farmer_type: update.farmer_type,
            division_id: update.division_id,
            district_id: update.district_id,
            upazila_id: update.upazila_id,
            address: update.address,
            updated_at: Utc::now(),
        };
        self.store.write(&user_id, &profile)?;
        Ok(profile)
    }

    fn validate_location(&self, update: &ProfileUpdate) -> CoreResult<()> {
        if let Some(id) = update.division_id {
            if self.locations.division(id).is_none() {
                return Err(CoreError::UnknownReference {
                    entity: "division",
                    id: id.to_string(),
                });
            }
        }
        if let Some(id) = update.district_id {
            let district = self.locations.district(id).ok_or(CoreError::UnknownReference {
                entity: "district",
                id: id.to_string(),
            })?;
            if let Some(division_id) = update.division_id {
                if district.division_id != division_id {
                    return Err(CoreError::InvalidInput(format!(
                        "district {id} is not in division {division_id}"
                    )));
                }
            }
        }
        if let Some(id) = update.upazila_id {
            let upazila = self.locations.upazila(id).ok_or(CoreError::UnknownReference {
                entity: "upazila",
                id: id.to_string(),
            })?;
            if let Some(district_id) = update.district_id {
                if upazila.district_id != district_id {
                    return Err(CoreError::InvalidInput(format!(
                        "upazila {id} is not in district {district_id}"
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalogs;
    use tempfile::TempDir;

    fn service(dir: &TempDir) -> ProfileService {
        let cfg = CoreConfig::new(dir.path().to_path_buf()).unwrap();
        let catalogs = Catalogs::load().unwrap();
        ProfileService::new(&cfg, catalogs.locations)
    }

    fn update() -> ProfileUpdate {
        ProfileUpdate {
            full_name: Some("আব্দুল করিম".into()),
            phone: Some("01712345678".into()),
            farmer_type: Some(FarmerType::Commercial),
            division_id: Some(1),
            district_id: Some(101),
            upazila_id: Some(10101),
            address: Some("সাভার, ঢাকা".into()),
        }
    }

    #[test]
    fn get_before_upsert_is_none() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        assert!(service.get(RecordId::generate()).unwrap().is_none());
    }

    #[test]
    fn upsert_then_get_roundtrips() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        let user = RecordId::generate();

        let saved = service.upsert(user, update()).unwrap();
        let loaded = service.get(user).unwrap().unwrap();
        assert_eq!(loaded, saved);
        assert_eq!(loaded.full_name.as_deref(), Some("আব্দুল করিম"));

        // Second upsert replaces the document.
        let mut second = update();
        second.phone = Some("01898765432".into());
        service.upsert(user, second).unwrap();
        let reloaded = service.get(user).unwrap().unwrap();
        assert_eq!(reloaded.phone.as_deref(), Some("01898765432"));
    }

    #[test]
    fn upsert_rejects_unknown_location_ids() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        let user = RecordId::generate();

        let mut bad = update();
        bad.division_id = Some(99);
        assert!(matches!(
            service.upsert(user, bad),
            Err(CoreError::UnknownReference { .. })
        ));
    }

    #[test]
    fn upsert_rejects_inconsistent_location_chain() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        let user = RecordId::generate();

        // District 201 (Chattogram) is not in division 1 (Dhaka).
        let mut bad = update();
        bad.district_id = Some(201);
        bad.upazila_id = None;
        assert!(matches!(
            service.upsert(user, bad),
            Err(CoreError::InvalidInput(_))
        ));
    }
}
