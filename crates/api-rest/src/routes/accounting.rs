//! Pond accounting endpoints. All are user-scoped and authenticated.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::Json;
use matsya_core::accounting::{AccountingSummary, NewExpense, NewIncome};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct AccountingQuery {
    /// `income` or `expense`; anything else returns both ledgers.
    #[serde(rename = "type")]
    pub entry_type: Option<String>,
    /// Restrict to one pond.
    pub pond: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SummaryQuery {
    pub pond: Option<String>,
}

/// A new ledger entry, discriminated by `type`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NewLedgerEntry {
    Income(NewIncome),
    Expense(NewExpense),
}

#[utoipa::path(
    get,
    path = "/api/user/accounting",
    params(AccountingQuery),
    responses(
        (status = 200, description = "Ledger entries, newest first. An array for type=income or type=expense, otherwise `{income, expenses}`"),
        (status = 401, description = "Authentication required", body = crate::error::ErrorRes)
    )
)]
/// A farmer's ledger entries.
pub async fn list_entries(
    State(state): State<AppState>,
    Query(query): Query<AccountingQuery>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let user = state.auth.authenticate(&headers)?;
    let pond = query.pond.as_deref();

    let response = match query.entry_type.as_deref() {
        Some("income") => Json(state.accounting.income(user.user_id, pond)).into_response(),
        Some("expense") => Json(state.accounting.expenses(user.user_id, pond)).into_response(),
        _ => Json(serde_json::json!({
            "income": state.accounting.income(user.user_id, pond),
            "expenses": state.accounting.expenses(user.user_id, pond),
        }))
        .into_response(),
    };
    Ok(response)
}

#[utoipa::path(
    post,
    path = "/api/user/accounting",
    responses(
        (status = 200, description = "The stored entry joined with its category"),
        (status = 400, description = "Invalid entry", body = crate::error::ErrorRes),
        (status = 401, description = "Authentication required", body = crate::error::ErrorRes)
    )
)]
/// Adds an income or expense entry, discriminated by a `type` field.
pub async fn add_entry(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<NewLedgerEntry>,
) -> Result<Response, ApiError> {
    let user = state.auth.authenticate(&headers)?;
    let response = match body {
        NewLedgerEntry::Income(new) => {
            Json(state.accounting.add_income(user.user_id, new)?).into_response()
        }
        NewLedgerEntry::Expense(new) => {
            Json(state.accounting.add_expense(user.user_id, new)?).into_response()
        }
    };
    Ok(response)
}

#[utoipa::path(
    get,
    path = "/api/user/accounting/summary",
    params(SummaryQuery),
    responses(
        (status = 200, description = "Totals, net profit and per-category breakdowns", body = AccountingSummary),
        (status = 401, description = "Authentication required", body = crate::error::ErrorRes)
    )
)]
/// Aggregated accounting summary for a farmer.
pub async fn summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
    headers: HeaderMap,
) -> Result<Json<AccountingSummary>, ApiError> {
    let user = state.auth.authenticate(&headers)?;
    Ok(Json(
        state.accounting.summary(user.user_id, query.pond.as_deref()),
    ))
}
