//! Fish disease diagnosis engine.
//!
//! Holds an immutable catalog of symptoms and diseases and scores candidate
//! diseases against a farmer's observed symptoms. Each disease is defined by
//! the set of symptoms it presents with; a candidate's score is the share of
//! its defined symptoms present in the observation.
//!
//! The catalog is validated when the engine is constructed: a disease with no
//! symptoms, or one referencing a symptom that is not in the catalog, is a
//! fatal configuration error rather than a latent division-by-zero or a
//! silently unmatchable entry. Per-call input is never an error — unknown
//! symptom identifiers simply cannot match anything.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;

/// Broad grouping used to lay out the symptom checklist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SymptomCategory {
    /// Visible on the fish body (spots, rot, ulcers).
    External,
    /// Observable behaviour (appetite, swimming, gasping).
    Behavioral,
}

/// An atomic observable sign, referenced by identifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Symptom {
    pub id: String,
    pub name_bn: String,
    pub name_en: String,
    pub category: SymptomCategory,
}

/// Urgency classification attached to a disease.
///
/// The ordering `Low < Medium < High` drives advisory presentation: callers
/// surface an urgent-warning banner for [`Severity::High`] results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// A named condition defined by a required set of symptoms plus guidance text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Disease {
    pub id: String,
    pub name_bn: String,
    pub name_en: String,
    /// Symptom identifiers that define this disease. Non-empty; every entry
    /// resolves into the symptom catalog (checked at engine construction).
    pub symptoms: Vec<String>,
    pub treatment_bn: String,
    pub prevention_bn: String,
    pub severity: Severity,
}

/// One scored candidate disease for an observation.
///
/// Carries the disease's full record plus the derived match fields, mirroring
/// the shape the presentation layer renders (name, percentage, matched/total
/// counts, guidance, severity badge).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiagnosisResult {
    pub id: String,
    pub name_bn: String,
    pub name_en: String,
    pub treatment_bn: String,
    pub prevention_bn: String,
    pub severity: Severity,
    /// Count of the disease's symptoms present in the observation.
    pub matched_symptoms: usize,
    /// Total symptoms defined for the disease.
    pub total_symptoms: usize,
    /// `matched_symptoms / total_symptoms * 100`, unrounded. Rounding is a
    /// presentation concern.
    pub match_percentage: f64,
}

/// Symptom-to-disease matching engine over immutable reference catalogs.
///
/// Construction validates the catalogs once; after that every call to
/// [`DiagnosisEngine::diagnose`] is a pure function of the observation and
/// is safe to invoke concurrently without coordination.
#[derive(Debug)]
pub struct DiagnosisEngine {
    symptoms: Vec<Symptom>,
    diseases: Vec<Disease>,
}

impl DiagnosisEngine {
    /// Builds an engine from the given catalogs, validating their invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCatalog`] when:
    /// - a symptom or disease identifier is duplicated,
    /// - a disease defines no symptoms,
    /// - a disease references a symptom missing from the symptom catalog.
    pub fn new(symptoms: Vec<Symptom>, diseases: Vec<Disease>) -> CoreResult<Self> {
        let mut symptom_ids = HashSet::new();
        for symptom in &symptoms {
            if !symptom_ids.insert(symptom.id.as_str()) {
                return Err(CoreError::InvalidCatalog(format!(
                    "duplicate symptom id '{}'",
                    symptom.id
                )));
            }
        }

        let mut disease_ids = HashSet::new();
        for disease in &diseases {
            if !disease_ids.insert(disease.id.as_str()) {
                return Err(CoreError::InvalidCatalog(format!(
                    "duplicate disease id '{}'",
                    disease.id
                )));
            }
            if disease.symptoms.is_empty() {
                return Err(CoreError::InvalidCatalog(format!(
                    "disease '{}' defines no symptoms",
                    disease.id
                )));
            }
            for symptom_id in &disease.symptoms {
                if !symptom_ids.contains(symptom_id.as_str()) {
                    return Err(CoreError::InvalidCatalog(format!(
                        "disease '{}' references unknown symptom '{}'",
                        disease.id, symptom_id
                    )));
                }
            }
        }

        Ok(Self { symptoms, diseases })
    }

    /// Builds the engine over the built-in catalog.
    pub fn builtin() -> CoreResult<Self> {
        Self::new(builtin_symptoms(), builtin_diseases())
    }

    /// The symptom catalog, in declaration order.
    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    /// The disease catalog, in declaration order.
    pub fn diseases(&self) -> &[Disease] {
        &self.diseases
    }

    /// Scores every disease against the observed symptoms and returns the
    /// ranked candidates.
    ///
    /// - An empty observation returns an empty list without scoring: the
    ///   caller has not attempted a diagnosis yet.
    /// - Diseases with zero matching symptoms are excluded entirely.
    /// - Results are sorted by descending match percentage; equal
    ///   percentages keep the catalog's declaration order (stable sort).
    /// - Observed identifiers unknown to the catalog are ignored; they are
    ///   not an error.
    pub fn diagnose(&self, observed: &HashSet<String>) -> Vec<DiagnosisResult> {
        if observed.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<DiagnosisResult> = self
            .diseases
            .iter()
            .filter_map(|disease| {
                let matched = disease
                    .symptoms
                    .iter()
                    .filter(|id| observed.contains(id.as_str()))
                    .count();
                if matched == 0 {
                    return None;
                }
                let total = disease.symptoms.len();
                Some(DiagnosisResult {
                    id: disease.id.clone(),
                    name_bn: disease.name_bn.clone(),
                    name_en: disease.name_en.clone(),
                    treatment_bn: disease.treatment_bn.clone(),
                    prevention_bn: disease.prevention_bn.clone(),
                    severity: disease.severity,
                    matched_symptoms: matched,
                    total_symptoms: total,
                    match_percentage: matched as f64 / total as f64 * 100.0,
                })
            })
            .collect();

        // Vec::sort_by is stable; ties keep catalog order. Percentages are
        // finite so total_cmp never sees a NaN.
        results.sort_by(|a, b| b.match_percentage.total_cmp(&a.match_percentage));
        results
    }
}

fn symptom(id: &str, name_bn: &str, name_en: &str, category: SymptomCategory) -> Symptom {
    Symptom {
        id: id.into(),
        name_bn: name_bn.into(),
        name_en: name_en.into(),
        category,
    }
}

/// Built-in symptom catalog.
pub fn builtin_symptoms() -> Vec<Symptom> {
    use SymptomCategory::{Behavioral, External};
    vec![
        symptom("red_spots", "শরীরে লাল দাগ", "Red spots on body", External),
        symptom(
            "white_spots",
            "সাদা দাগ বা তুলার মতো",
            "White or cotton-like spots",
            External,
        ),
        symptom("fin_rot", "পাখনা পচা", "Fin rot", External),
        symptom("ulcers", "ক্ষত বা ঘা", "Ulcers or sores", External),
        symptom("swollen_eyes", "চোখ ফোলা", "Swollen eyes", External),
        symptom("loss_appetite", "খাবারে অনীহা", "Loss of appetite", Behavioral),
        symptom(
            "abnormal_swimming",
            "অস্বাভাবিক সাঁতার",
            "Abnormal swimming",
            Behavioral,
        ),
        symptom(
            "gasping",
            "পানির উপরে হাঁপানি",
            "Gasping at the surface",
            Behavioral,
        ),
        symptom("lethargy", "নিস্তেজতা", "Lethargy", Behavioral),
        symptom(
            "isolation",
            "একা থাকার প্রবণতা",
            "Isolation from the shoal",
            Behavioral,
        ),
    ]
}

/// Built-in disease catalog.
pub fn builtin_diseases() -> Vec<Disease> {
    vec![
        Disease {
            id: "bacterial_infection".into(),
            name_bn: "ব্যাকটেরিয়াল ইনফেকশন".into(),
            name_en: "Bacterial infection".into(),
            symptoms: vec![
                "red_spots".into(),
                "fin_rot".into(),
                "ulcers".into(),
                "loss_appetite".into(),
            ],
            treatment_bn: "অ্যান্টিবায়োটিক (অক্সিটেট্রাসাইক্লিন) ১০-১৫ মিগ্রা/লিটার পানিতে ৫-৭ দিন প্রয়োগ করুন।"
                .into(),
            prevention_bn: "পুকুরের পানি পরিষ্কার রাখুন, অতিরিক্ত খাবার দেবেন না।".into(),
            severity: Severity::High,
        },
        Disease {
            id: "fungal_infection".into(),
            name_bn: "ছত্রাক সংক্রমণ".into(),
            name_en: "Fungal infection".into(),
            symptoms: vec![
                "white_spots".into(),
                "lethargy".into(),
                "loss_appetite".into(),
            ],
            treatment_bn:
                "পটাশিয়াম পারম্যাঙ্গানেট ২-৩ মিগ্রা/লিটার অথবা ফরমালিন ২৫ মিলি/১০০ লিটার পানিতে প্রয়োগ করুন।"
                    .into(),
            prevention_bn: "পানির তাপমাত্রা নিয়ন্ত্রণে রাখুন, আহত মাছ আলাদা করুন।".into(),
            severity: Severity::Medium,
        },
        Disease {
            id: "parasitic_infection".into(),
            name_bn: "পরজীবী আক্রমণ".into(),
            name_en: "Parasitic infestation".into(),
            symptoms: vec![
                "abnormal_swimming".into(),
                "gasping".into(),
                "isolation".into(),
                "loss_appetite".into(),
            ],
            treatment_bn:
                "লবণ স্নান (৩% লবণ পানিতে ৫-১০ মিনিট) অথবা ট্রিক্লোরফন ০.৫ মিগ্রা/লিটার প্রয়োগ করুন।".into(),
            prevention_bn: "নতুন মাছ কোয়ারেন্টাইন করুন, পুকুর নিয়মিত পরিষ্কার করুন।".into(),
            severity: Severity::Medium,
        },
        Disease {
            id: "oxygen_deficiency".into(),
            name_bn: "অক্সিজেনের অভাব".into(),
            name_en: "Oxygen deficiency".into(),
            symptoms: vec![
                "gasping".into(),
                "abnormal_swimming".into(),
                "lethargy".into(),
            ],
            treatment_bn: "পানিতে বায়ু সরবরাহ বাড়ান, অতিরিক্ত মাছ সরান, পানি পরিবর্তন করুন।".into(),
            prevention_bn: "পুকুরে অতিরিক্ত মাছ রাখবেন না, নিয়মিত পানি পরিবর্তন করুন।".into(),
            severity: Severity::High,
        },
        Disease {
            id: "eye_disease".into(),
            name_bn: "চোখের রোগ".into(),
            name_en: "Eye disease".into(),
            symptoms: vec![
                "swollen_eyes".into(),
                "loss_appetite".into(),
                "abnormal_swimming".into(),
            ],
            treatment_bn: "টেরামাইসিন ১০ মিগ্রা/লিটার পানিতে ৫ দিন প্রয়োগ করুন।".into(),
            prevention_bn: "পানির গুণাগুণ ভালো রাখুন, আঘাত এড়ান।".into(),
            severity: Severity::Low,
        },
    ]
}
