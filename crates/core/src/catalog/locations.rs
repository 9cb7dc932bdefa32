//! Bangladesh administrative location directory.
//!
//! A three-level hierarchy — division → district → upazila — used for
//! market price reporting and farmer profiles. The directory is reference
//! data validated once at startup: every district must belong to a known
//! division and every upazila to a known district.
//!
//! Child listings are filtered by parent id and ordered by Bengali name,
//! which is what the cascading selector in the front end consumes; an
//! unknown parent id simply yields an empty list.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Division {
    pub id: u32,
    pub name_bn: String,
    pub name_en: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct District {
    pub id: u32,
    pub division_id: u32,
    pub name_bn: String,
    pub name_en: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Upazila {
    pub id: u32,
    pub district_id: u32,
    pub name_bn: String,
    pub name_en: String,
}

/// An upazila resolved together with its district and division.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LocationChain {
    pub upazila: Upazila,
    pub district: District,
    pub division: Division,
}

/// Validated, immutable location hierarchy.
#[derive(Debug)]
pub struct LocationDirectory {
    divisions: Vec<Division>,
    districts: Vec<District>,
    upazilas: Vec<Upazila>,
}

impl LocationDirectory {
    /// Builds a directory, validating uniqueness and parent references.
    pub fn new(
        divisions: Vec<Division>,
        districts: Vec<District>,
        upazilas: Vec<Upazila>,
    ) -> CoreResult<Self> {
        let mut division_ids = HashSet::new();
        for division in &divisions {
            if !division_ids.insert(division.id) {
                return Err(CoreError::InvalidCatalog(format!(
                    "duplicate division id {}",
                    division.id
                )));
            }
        }

        let mut district_ids = HashSet::new();
        for district in &districts {
            if !district_ids.insert(district.id) {
                return Err(CoreError::InvalidCatalog(format!(
                    "duplicate district id {}",
                    district.id
                )));
            }
            if !division_ids.contains(&district.division_id) {
                return Err(CoreError::InvalidCatalog(format!(
                    "district {} references unknown division {}",
                    district.id, district.division_id
                )));
            }
        }

        let mut upazila_ids = HashSet::new();
        for upazila in &upazilas {
            if !upazila_ids.insert(upazila.id) {
                return Err(CoreError::InvalidCatalog(format!(
                    "duplicate upazila id {}",
                    upazila.id
                )));
            }
            if !district_ids.contains(&upazila.district_id) {
                return Err(CoreError::InvalidCatalog(format!(
                    "upazila {} references unknown district {}",
                    upazila.id, upazila.district_id
                )));
            }
        }

        Ok(Self {
            divisions,
            districts,
            upazilas,
        })
    }

    /// The built-in Bangladesh directory.
    pub fn bangladesh() -> CoreResult<Self> {
        Self::new(seed_divisions(), seed_districts(), seed_upazilas())
    }

    /// All divisions ordered by Bengali name.
    pub fn divisions(&self) -> Vec<Division> {
        let mut divisions = self.divisions.clone();
        divisions.sort_by(|a, b| a.name_bn.cmp(&b.name_bn));
        divisions
    }

    /// Districts of a division, ordered by Bengali name.
    pub fn districts_of(&self, division_id: u32) -> Vec<District> {
        let mut districts: Vec<District> = self
            .districts
            .iter()
            .filter(|d| d.division_id == division_id)
            .cloned()
            .collect();
        districts.sort_by(|a, b| a.name_bn.cmp(&b.name_bn));
        districts
    }

    /// Upazilas of a district, ordered by Bengali name.
    pub fn upazilas_of(&self, district_id: u32) -> Vec<Upazila> {
        let mut upazilas: Vec<Upazila> = self
            .upazilas
            .iter()
            .filter(|u| u.district_id == district_id)
            .cloned()
            .collect();
        upazilas.sort_by(|a, b| a.name_bn.cmp(&b.name_bn));
        upazilas
    }

    pub fn division(&self, id: u32) -> Option<&Division> {
        self.divisions.iter().find(|d| d.id == id)
    }

    pub fn district(&self, id: u32) -> Option<&District> {
        self.districts.iter().find(|d| d.id == id)
    }

    pub fn upazila(&self, id: u32) -> Option<&Upazila> {
        self.upazilas.iter().find(|u| u.id == id)
    }

    /// Resolves an upazila with its full parent chain.
    ///
    /// Catalog validation guarantees the parents exist, so this only returns
    /// `None` for an unknown upazila id.
    pub fn chain(&self, upazila_id: u32) -> Option<LocationChain> {
        let upazila = self.upazila(upazila_id)?;
        let district = self.district(upazila.district_id)?;
        let division = self.division(district.division_id)?;
        Some(LocationChain {
            upazila: upazila.clone(),
            district: district.clone(),
            division: division.clone(),
        })
    }

    /// Renders a `division > district > upazila` breadcrumb from whichever
    /// levels are selected, skipping unknown ids.
    pub fn breadcrumb(
        &self,
        division_id: Option<u32>,
        district_id: Option<u32>,
        upazila_id: Option<u32>,
    ) -> String {
        let mut parts = Vec::new();
        if let Some(division) = division_id.and_then(|id| self.division(id)) {
            parts.push(division.name_bn.as_str());
        }
        if let Some(district) = district_id.and_then(|id| self.district(id)) {
            parts.push(district.name_bn.as_str());
        }
        if let Some(upazila) = upazila_id.and_then(|id| self.upazila(id)) {
            parts.push(upazila.name_bn.as_str());
        }
        parts.join(" > ")
    }
}

fn division(id: u32, name_bn: &str, name_en: &str) -> Division {
    Division {
        id,
        name_bn: name_bn.into(),
        name_en: name_en.into(),
    }
}

fn district(id: u32, division_id: u32, name_bn: &str, name_en: &str) -> District {
    District {
        id,
        division_id,
        name_bn: name_bn.into(),
        name_en: name_en.into(),
    }
}

fn upazila(id: u32, district_id: u32, name_bn: &str, name_en: &str) -> Upazila {
    Upazila {
        id,
        district_id,
        name_bn: name_bn.into(),
        name_en: name_en.into(),
    }
}

fn seed_divisions() -> Vec<Division> {
    vec![
        division(1, "ঢাকা", "Dhaka"),
        division(2, "চট্টগ্রাম", "Chattogram"),
        division(3, "রাজশাহী", "Rajshahi"),
        division(4, "খুলনা", "Khulna"),
        division(5, "বরিশাল", "Barishal"),
        division(6, "সিলেট", "Sylhet"),
        division(7, "রংপুর", "Rangpur"),
        division(8, "ময়মনসিংহ", "Mymensingh"),
    ]
}

fn seed_districts() -> Vec<District> {
    vec![
        district(101, 1, "ঢাকা", "Dhaka"),
        district(102, 1, "গাজীপুর", "Gazipur"),
        district(201, 2, "চট্টগ্রাম", "Chattogram"),
        district(202, 2, "কুমিল্লা", "Cumilla"),
        district(301, 3, "রাজশাহী", "Rajshahi"),
        district(302, 3, "পাবনা", "Pabna"),
        district(401, 4, "খুলনা", "Khulna"),
        district(402, 4, "যশোর", "Jashore"),
        district(501, 5, "বরিশাল", "Barishal"),
        district(502, 5, "ভোলা", "Bhola"),
        district(601, 6, "সিলেট", "Sylhet"),
        district(602, 6, "মৌলভীবাজার", "Moulvibazar"),
        district(701, 7, "রংপুর", "Rangpur"),
        district(702, 7, "দিনাজপুর", "Dinajpur"),
        district(801, 8, "ময়মনসিংহ", "Mymensingh"),
        district(802, 8, "নেত্রকোণা", "Netrokona"),
    ]
}

fn seed_upazilas() -> Vec<Upazila> {
    vec![
        upazila(10101, 101, "সাভার", "Savar"),
        upazila(10102, 101, "ধামরাই", "Dhamrai"),
        upazila(10103, 101, "দোহার", "Dohar"),
        upazila(10201, 102, "কালিয়াকৈর", "Kaliakair"),
        upazila(10202, 102, "শ্রীপুর", "Sreepur"),
        upazila(20101, 201, "মীরসরাই", "Mirsharai"),
        upazila(20102, 201, "সীতাকুণ্ড", "Sitakunda"),
        upazila(20201, 202, "দাউদকান্দি", "Daudkandi"),
        upazila(20202, 202, "লাকসাম", "Laksam"),
        upazila(30101, 301, "পবা", "Paba"),
        upazila(30102, 301, "বাগমারা", "Bagmara"),
        upazila(30201, 302, "সুজানগর", "Sujanagar"),
        upazila(30202, 302, "ঈশ্বরদী", "Ishwardi"),
        upazila(40101, 401, "ডুমুরিয়া", "Dumuria"),
        upazila(40102, 401, "পাইকগাছা", "Paikgachha"),
        upazila(40201, 402, "অভয়নগর", "Abhaynagar"),
        upazila(40202, 402, "মণিরামপুর", "Manirampur"),
        upazila(50101, 501, "বাকেরগঞ্জ", "Bakerganj"),
        upazila(50102, 501, "উজিরপুর", "Wazirpur"),
        upazila(50201, 502, "চরফ্যাশন", "Charfasson"),
        upazila(50202, 502, "লালমোহন", "Lalmohan"),
        upazila(60101, 601, "বিশ্বনাথ", "Bishwanath"),
        upazila(60102, 601, "গোলাপগঞ্জ", "Golapganj"),
        upazila(60201, 602, "শ্রীমঙ্গল", "Sreemangal"),
        upazila(60202, 602, "কুলাউড়া", "Kulaura"),
        upazila(70101, 701, "মিঠাপুকুর", "Mithapukur"),
        upazila(70102, 701, "পীরগাছা", "Pirgachha"),
        upazila(70201, 702, "বিরামপুর", "Birampur"),
        upazila(70202, 702, "পার্বতীপুর", "Parbatipur"),
        upazila(80101, 801, "ত্রিশাল", "Trishal"),
        upazila(80102, 801, "মুক্তাগাছা", "Muktagachha"),
        upazila(80201, 802, "কেন্দুয়া", "Kendua"),
        upazila(80202, 802, "মোহনগঞ্জ", "Mohanganj"),
    ]
}
