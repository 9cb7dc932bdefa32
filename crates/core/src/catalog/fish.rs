//! Fish species knowledge base.
//!
//! Categories and species of farmed fish, immutable reference data validated
//! at startup. Species listings are joined with their category and ordered
//! by Bengali name, matching what the species guide pages render.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FishCategory {
    pub id: u32,
    pub name_bn: String,
    pub name_en: String,
    pub description_bn: String,
    pub description_en: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FishSpecies {
    pub id: u32,
    pub category_id: u32,
    pub name_bn: String,
    pub name_en: String,
    pub scientific_name: String,
    pub description_bn: String,
    pub description_en: String,
    pub image_url: Option<String>,
}

/// A species joined with its category record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SpeciesWithCategory {
    #[serde(flatten)]
    pub species: FishSpecies,
    pub fish_category: FishCategory,
}

/// Validated, immutable species catalog.
#[derive(Debug)]
pub struct FishGuide {
    categories: Vec<FishCategory>,
    species: Vec<FishSpecies>,
}

impl FishGuide {
    /// Builds the guide, validating id uniqueness and category references.
    pub fn new(categories: Vec<FishCategory>, species: Vec<FishSpecies>) -> CoreResult<Self> {
        let mut category_ids = HashSet::new();
        for category in &categories {
            if !category_ids.insert(category.id) {
                return Err(CoreError::InvalidCatalog(format!(
                    "duplicate fish category id {}",
                    category.id
                )));
            }
        }
        let mut species_ids = HashSet::new();
        for sp in &species {
            if !species_ids.insert(sp.id) {
                return Err(CoreError::InvalidCatalog(format!(
                    "duplicate fish species id {}",
                    sp.id
                )));
            }
            if !category_ids.contains(&sp.category_id) {
                return Err(CoreError::InvalidCatalog(format!(
                    "fish species {} references unknown category {}",
                    sp.id, sp.category_id
                )));
            }
        }
        Ok(Self {
            categories,
            species,
        })
    }

    /// The built-in species catalog.
    pub fn builtin() -> CoreResult<Self> {
        Self::new(seed_categories(), seed_species())
    }

    /// All categories ordered by Bengali name.
    pub fn categories(&self) -> Vec<FishCategory> {
        let mut categories = self.categories.clone();
        categories.sort_by(|a, b| a.name_bn.cmp(&b.name_bn));
        categories
    }

    pub fn category(&self, id: u32) -> Option<&FishCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Species joined with their category, optionally filtered by category,
    /// ordered by Bengali name.
    pub fn species(&self, category_id: Option<u32>) -> Vec<SpeciesWithCategory> {
        let mut rows: Vec<SpeciesWithCategory> = self
            .species
            .iter()
            .filter(|sp| category_id.is_none_or(|id| sp.category_id == id))
            .filter_map(|sp| self.join_category(sp))
            .collect();
        rows.sort_by(|a, b| a.species.name_bn.cmp(&b.species.name_bn));
        rows
    }

    /// A single species joined with its category.
    pub fn species_by_id(&self, id: u32) -> Option<SpeciesWithCategory> {
        self.species
            .iter()
            .find(|sp| sp.id == id)
            .and_then(|sp| self.join_category(sp))
    }

    fn join_category(&self, sp: &FishSpecies) -> Option<SpeciesWithCategory> {
        // Catalog validation guarantees the category exists.
        self.category(sp.category_id).map(|category| SpeciesWithCategory {
            species: sp.clone(),
            fish_category: category.clone(),
        })
    }
}

fn category(id: u32, name_bn: &str, name_en: &str, desc_bn: &str, desc_en: &str) -> FishCategory {
    FishCategory {
        id,
        name_bn: name_bn.into(),
        name_en: name_en.into(),
        description_bn: desc_bn.into(),
        description_en: desc_en.into(),
    }
}

fn species(
    id: u32,
    category_id: u32,
    name_bn: &str,
    name_en: &str,
    scientific_name: &str,
    desc_bn: &str,
    desc_en: &str,
) -> FishSpecies {
    FishSpecies {
        id,
        category_id,
        name_bn: name_bn.into(),
        name_en: name_en.into(),
        scientific_name: scientific_name.into(),
        description_bn: desc_bn.into(),
        description_en: desc_en.into(),
        image_url: None,
    }
}

fn seed_categories() -> Vec<FishCategory> {
    vec![
        category(
            1,
            "কার্প জাতীয় মাছ",
            "Carp",
            "দ্রুত বর্ধনশীল, পুকুরে মিশ্র চাষের প্রধান মাছ।",
            "Fast-growing staples of polyculture ponds.",
        ),
        category(
            2,
            "জিওল মাছ",
            "Air-breathing fish",
            "কম অক্সিজেনেও বাঁচে, উচ্চ বাজারমূল্যের দেশীয় মাছ।",
            "Hardy native fish tolerating low oxygen, high market value.",
        ),
        category(
            3,
            "ছোট দেশীয় মাছ",
            "Small indigenous fish",
            "পুষ্টিগুণে সমৃদ্ধ ছোট মাছ, ধানক্ষেত ও ছোট জলাশয়ে চাষযোগ্য।",
            "Nutrient-rich small fish suited to rice fields and small waters.",
        ),
        category(
            4,
            "বিদেশি চাষযোগ্য মাছ",
            "Exotic farmed fish",
            "অধিক উৎপাদনশীল বিদেশি জাত, বাণিজ্যিক খামারে জনপ্রিয়।",
            "High-yield introduced species popular in commercial farms.",
        ),
    ]
}

fn seed_species() -> Vec<FishSpecies> {
    vec![
        species(
            1,
            1,
            "রুই",
            "Rohu",
            "Labeo rohita",
            "বাংলাদেশের সবচেয়ে জনপ্রিয় কার্প, মধ্যস্তরের খাবার খায়।",
            "The most popular carp in Bangladesh, a column feeder.",
        ),
        species(
            2,
            1,
            "কাতলা",
            "Catla",
            "Gibelion catla",
            "বড় মাথার দ্রুত বর্ধনশীল কার্প, পানির উপরের স্তরে খায়।",
            "Large-headed fast grower feeding at the surface.",
        ),
        species(
            3,
            1,
            "মৃগেল",
            "Mrigal",
            "Cirrhinus cirrhosus",
            "তলদেশের খাবার খাওয়া কার্প, মিশ্র চাষে অপরিহার্য।",
            "Bottom-feeding carp, essential in polyculture.",
        ),
        species(
            4,
            1,
            "সিলভার কার্প",
            "Silver carp",
            "Hypophthalmichthys molitrix",
            "প্লাংকটনভোজী দ্রুত বর্ধনশীল মাছ।",
            "Plankton-feeding rapid grower.",
        ),
        species(
            5,
            1,
            "গ্রাস কার্প",
            "Grass carp",
            "Ctenopharyngodon idella",
            "জলজ উদ্ভিদ নিয়ন্ত্রণে কার্যকর তৃণভোজী কার্প।",
            "Herbivorous carp effective at controlling aquatic weeds.",
        ),
        species(
            6,
            1,
            "কমন কার্প",
            "Common carp",
            "Cyprinus carpio",
            "শীত সহনশীল তলদেশচারী কার্প।",
            "Cold-tolerant bottom dweller.",
        ),
        species(
            7,
            2,
            "শিং",
            "Stinging catfish",
            "Heteropneustes fossilis",
            "উচ্চমূল্যের জিওল মাছ, ঘন মজুদে চাষযোগ্য।",
            "High-value air breather suited to dense stocking.",
        ),
        species(
            8,
            2,
            "মাগুর",
            "Walking catfish",
            "Clarias batrachus",
            "দেশীয় মাগুর, কম পানিতেও টিকে থাকে।",
            "Native catfish surviving in shallow water.",
        ),
        species(
            9,
            2,
            "কৈ",
            "Climbing perch",
            "Anabas testudineus",
            "জনপ্রিয় দেশীয় মাছ, ভাসমান খাবারে ভালো বাড়ে।",
            "Popular native perch growing well on floating feed.",
        ),
        species(
            10,
            2,
            "শোল",
            "Striped snakehead",
            "Channa striata",
            "রাক্ষুসে স্বভাবের মাছ, একক চাষে লাভজনক।",
            "Predatory snakehead profitable in monoculture.",
        ),
        species(
            11,
            3,
            "টেংরা",
            "Striped dwarf catfish",
            "Mystus vittatus",
            "সুস্বাদু ছোট মাছ, মিশ্র চাষে বাড়তি আয়।",
            "Tasty small catfish adding income to polyculture.",
        ),
        species(
            12,
            3,
            "পাবদা",
            "Pabda catfish",
            "Ompok pabda",
            "উচ্চ বাজারমূল্যের ছোট ক্যাটফিশ।",
            "Small catfish with premium market price.",
        ),
        species(
            13,
            4,
            "তেলাপিয়া",
            "Nile tilapia",
            "Oreochromis niloticus",
            "সহজ চাষযোগ্য, দ্রুত বর্ধনশীল বিদেশি মাছ।",
            "Easily farmed, fast-growing introduced species.",
        ),
        species(
            14,
            4,
            "পাঙ্গাস",
            "Striped pangasius",
            "Pangasianodon hypophthalmus",
            "বাণিজ্যিক খামারের প্রধান ক্যাটফিশ।",
            "The mainstay catfish of commercial farms.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_guide_is_valid() {
        let guide = FishGuide::builtin().unwrap();
        assert_eq!(guide.categories().len(), 4);
        assert_eq!(guide.species(None).len(), 14);
    }

    #[test]
    fn species_filter_by_category() {
        let guide = FishGuide::builtin().unwrap();
        let carp = guide.species(Some(1));
        assert_eq!(carp.len(), 6);
        assert!(carp.iter().all(|row| row.species.category_id == 1));
        assert!(guide.species(Some(999)).is_empty());
    }

    #[test]
    fn species_by_id_joins_category() {
        let guide = FishGuide::builtin().unwrap();
        let rohu = guide.species_by_id(1).unwrap();
        assert_eq!(rohu.species.name_en, "Rohu");
        assert_eq!(rohu.fish_category.id, rohu.species.category_id);
        assert!(guide.species_by_id(999).is_none());
    }

    #[test]
    fn validation_rejects_unknown_category_reference() {
        let err = FishGuide::new(
            seed_categories(),
            vec![species(99, 42, "ইলিশ", "Hilsa", "Tenualosa ilisha", "", "")],
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidCatalog(_)));
    }
}
