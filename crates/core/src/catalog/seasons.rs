//! Seasonal farming advice.
//!
//! Three fixed seasons with the activities, precautions, recommended species
//! and tips the guide pages present. Pure reference data.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeasonalAdvice {
    pub season_bn: String,
    pub season_en: String,
    pub months_bn: String,
    pub activities: Vec<String>,
    pub precautions: Vec<String>,
    pub fish_species: Vec<String>,
    pub tips: Vec<String>,
}

/// Immutable catalog of seasonal advice.
#[derive(Debug)]
pub struct SeasonCatalog {
    seasons: Vec<SeasonalAdvice>,
}

impl SeasonCatalog {
    pub fn new(seasons: Vec<SeasonalAdvice>) -> CoreResult<Self> {
        let mut names = HashSet::new();
        for season in &seasons {
            if !names.insert(season.season_bn.as_str()) {
                return Err(CoreError::InvalidCatalog(format!(
                    "duplicate season '{}'",
                    season.season_bn
                )));
            }
        }
        Ok(Self { seasons })
    }

    pub fn builtin() -> CoreResult<Self> {
        Self::new(seed_seasons())
    }

    /// All seasons in calendar order.
    pub fn seasons(&self) -> &[SeasonalAdvice] {
        &self.seasons
    }

    /// Looks a season up by its Bengali or English name.
    pub fn by_name(&self, name: &str) -> Option<&SeasonalAdvice> {
        self.seasons
            .iter()
            .find(|s| s.season_bn == name || s.season_en.eq_ignore_ascii_case(name))
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn seed_seasons() -> Vec<SeasonalAdvice> {
    vec![
        SeasonalAdvice {
            season_bn: "গ্রীষ্মকাল".into(),
            season_en: "Summer".into(),
            months_bn: "এপ্রিল - জুন".into(),
            activities: strings(&[
                "পুকুর প্রস্তুতি ও পরিষ্কার করুন",
                "নতুন পোনা মজুদের উপযুক্ত সময়",
                "পানির গভীরতা বাড়ান",
                "ছায়ার ব্যবস্থা করুন",
            ]),
            precautions: strings(&[
                "পানির তাপমাত্রা নিয়ন্ত্রণে রাখুন",
                "অক্সিজেনের অভাব এড়াতে বায়ু সরবরাহ বাড়ান",
                "বেশি খাবার দেবেন না",
                "নিয়মিত পানি পরিবর্তন করুন",
            ]),
            fish_species: strings(&["রুই", "কাতলা", "মৃগেল", "সিলভার কার্প"]),
            tips: strings(&[
                "সকাল ও সন্ধ্যায় খাবার দিন",
                "পুকুরে জলজ উদ্ভিদ লাগান",
                "পানির pH ৭-৮ এর মধ্যে রাখুন",
            ]),
        },
        SeasonalAdvice {
            season_bn: "বর্ষাকাল".into(),
            season_en: "Monsoon".into(),
            months_bn: "জুলাই - সেপ্টেম্বর".into(),
            activities: strings(&[
                "পুকুরের পাড় মজবুত করুন",
                "অতিরিক্ত পানি নিষ্কাশনের ব্যবস্থা করুন",
                "মাছের বৃদ্ধি পর্যবেক্ষণ করুন",
                "জাল দিয়ে পুকুর ঢেকে রাখুন",
            ]),
            precautions: strings(&[
                "বন্যার পানি থেকে রক্ষা করুন",
                "রোগবালাই থেকে সাবধান থাকুন",
                "পানিতে লবণাক্ততা পরীক্ষা করুন",
                "মাছ পালানো রোধ করুন",
            ]),
            fish_species: strings(&["শিং", "মাগুর", "কৈ", "শোল"]),
            tips: strings(&[
                "বৃষ্টির পানি সরাসরি পুকুরে পড়তে দেবেন না",
                "নিয়মিত চুন প্রয়োগ করুন",
                "অসুস্থ মাছ আলাদা করুন",
            ]),
        },
        SeasonalAdvice {
            season_bn: "শীতকাল".into(),
            season_en: "Winter".into(),
            months_bn: "অক্টোবর - মার্চ".into(),
            activities: strings(&[
                "মাছ আহরণের প্রধান সময়",
                "পুকুর সংস্কার ও মেরামত",
                "নতুন পুকুর খনন",
                "বীজ মাছ সংরক্ষণ",
            ]),
            precautions: strings(&[
                "ঠান্ডায় মাছের বৃদ্ধি কমে যায়",
                "খাবারের পরিমাণ কমান",
                "পানির গভীরতা বজায় রাখুন",
                "হঠাৎ তাপমাত্রা পরিবর্তন এড়ান",
            ]),
            fish_species: strings(&["গ্রাস কার্প", "কমন কার্প", "টেংরা", "পাবদা"]),
            tips: strings(&[
                "দুপুরের সময় খাবার দিন",
                "পানিতে ভিটামিন সি মিশান",
                "মাছের স্বাস্থ্য নিয়মিত পরীক্ষা করুন",
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_three_seasons() {
        let catalog = SeasonCatalog::builtin().unwrap();
        assert_eq!(catalog.seasons().len(), 3);
    }

    #[test]
    fn lookup_by_bengali_or_english_name() {
        let catalog = SeasonCatalog::builtin().unwrap();
        assert_eq!(
            catalog.by_name("গ্রীষ্মকাল").unwrap().season_en,
            "Summer"
        );
        assert_eq!(catalog.by_name("monsoon").unwrap().season_bn, "বর্ষাকাল");
        assert!(catalog.by_name("autumn").is_none());
    }

    #[test]
    fn validation_rejects_duplicate_seasons() {
        let mut seasons = seed_seasons();
        seasons.push(seasons[0].clone());
        assert!(SeasonCatalog::new(seasons).is_err());
    }
}
