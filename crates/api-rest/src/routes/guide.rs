//! Fish guide endpoints: disease diagnosis and seasonal advice.

use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use matsya_core::catalog::seasons::SeasonalAdvice;
use matsya_core::diagnosis::{DiagnosisResult, Symptom, SymptomCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;

/// The symptom catalog grouped the way the checklist renders it.
#[derive(Debug, Serialize, ToSchema)]
pub struct SymptomsRes {
    pub external: Vec<Symptom>,
    pub behavioral: Vec<Symptom>,
}

/// Observed symptoms submitted for diagnosis.
#[derive(Debug, Deserialize, ToSchema)]
pub struct DiagnoseReq {
    pub symptom_ids: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/api/guide/symptoms",
    responses(
        (status = 200, description = "Symptom catalog grouped by category", body = SymptomsRes)
    )
)]
/// The symptom catalog, grouped by category for the checklist UI.
pub async fn list_symptoms(State(state): State<AppState>) -> Json<SymptomsRes> {
    let mut external = Vec::new();
    let mut behavioral = Vec::new();
    for symptom in state.catalogs.diagnosis.symptoms() {
        match symptom.category {
            SymptomCategory::External => external.push(symptom.clone()),
            SymptomCategory::Behavioral => behavioral.push(symptom.clone()),
        }
    }
    Json(SymptomsRes {
        external,
        behavioral,
    })
}

#[utoipa::path(
    post,
    path = "/api/guide/diagnosis",
    request_body = DiagnoseReq,
    responses(
        (status = 200, description = "Ranked candidate diseases; empty when no symptom matches or none were selected", body = Vec<DiagnosisResult>)
    )
)]
/// Scores the disease catalog against the observed symptoms.
///
/// An empty selection yields an empty list ("no diagnosis attempted");
/// a selection matching nothing also yields an empty list, which the
/// client presents as "no match — consult an expert". Unknown symptom
/// ids are ignored.
pub async fn diagnose(
    State(state): State<AppState>,
    Json(body): Json<DiagnoseReq>,
) -> Json<Vec<DiagnosisResult>> {
    let observed: HashSet<String> = body.symptom_ids.into_iter().collect();
    Json(state.catalogs.diagnosis.diagnose(&observed))
}

#[utoipa::path(
    get,
    path = "/api/guide/seasons",
    responses(
        (status = 200, description = "Seasonal advice in calendar order", body = Vec<SeasonalAdvice>)
    )
)]
/// Seasonal farming advice.
pub async fn list_seasons(State(state): State<AppState>) -> Json<Vec<SeasonalAdvice>> {
    Json(state.catalogs.seasons.seasons().to_vec())
}
