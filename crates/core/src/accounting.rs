//! Pond income and expense ledgers.
//!
//! Each farmer keeps per-pond ledgers of income (fish sales and the like)
//! and expenses (feed, fingerlings, labour). Entries are stored per user and
//! can be filtered by pond name; the summary aggregates both ledgers into
//! totals, net profit and per-category breakdowns.

use crate::catalog::ledger_categories::{LedgerCategories, LedgerCategory};
use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::store::DocumentStore;
use chrono::{DateTime, NaiveDate, Utc};
use matsya_types::{NonEmptyText, PositiveAmount};
use matsya_uuid::RecordId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// A stored income entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IncomeRecord {
    pub id: RecordId,
    pub user_id: RecordId,
    pub category_id: u32,
    pub pond_name: NonEmptyText,
    pub amount: PositiveAmount,
    pub quantity_kg: Option<f64>,
    pub price_per_kg: Option<f64>,
    pub description: Option<String>,
    pub income_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// A stored expense entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: RecordId,
    pub user_id: RecordId,
    pub category_id: u32,
    pub pond_name: NonEmptyText,
    pub amount: PositiveAmount,
    pub description: Option<String>,
    pub expense_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// A new income entry as submitted by a farmer.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct NewIncome {
    pub category_id: u32,
    pub pond_name: String,
    pub amount: f64,
    pub quantity_kg: Option<f64>,
    pub price_per_kg: Option<f64>,
    pub description: Option<String>,
    /// Defaults to today when omitted.
    pub income_date: Option<NaiveDate>,
}

/// A new expense entry as submitted by a farmer.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct NewExpense {
    pub category_id: u32,
    pub pond_name: String,
    pub amount: f64,
    pub description: Option<String>,
    /// Defaults to today when omitted.
    pub expense_date: Option<NaiveDate>,
}

/// An income entry joined with its category.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct IncomeView {
    #[schema(value_type = String)]
    pub id: RecordId,
    #[schema(value_type = String)]
    pub pond_name: NonEmptyText,
    pub amount: f64,
    pub quantity_kg: Option<f64>,
    pub price_per_kg: Option<f64>,
    pub description: Option<String>,
    pub income_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub income_category: LedgerCategory,
}

/// An expense entry joined with its category.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct ExpenseView {
    #[schema(value_type = String)]
    pub id: RecordId,
    #[schema(value_type = String)]
    pub pond_name: NonEmptyText,
    pub amount: f64,
    pub description: Option<String>,
    pub expense_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub expense_category: LedgerCategory,
}

/// Total amount attributed to one category.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct CategoryTotal {
    pub category: LedgerCategory,
    pub total: f64,
}

/// Aggregated view of a farmer's ledgers.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct AccountingSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_profit: f64,
    pub income_by_category: Vec<CategoryTotal>,
    pub expenses_by_category: Vec<CategoryTotal>,
    /// Distinct pond names across both ledgers, first-seen order.
    pub ponds: Vec<String>,
}

/// Ledger operations over the sharded record stores.
#[derive(Clone)]
pub struct AccountingService {
    income_store: DocumentStore,
    expense_store: DocumentStore,
    categories: Arc<LedgerCategories>,
}

impl AccountingService {
    pub fn new(cfg: &CoreConfig, categories: Arc<LedgerCategories>) -> Self {
        Self {
            income_store: DocumentStore::new(cfg.income_dir()),
            expense_store: DocumentStore::new(cfg.expenses_dir()),
            categories,
        }
    }

    /// A farmer's income entries, newest first, optionally scoped to a pond.
    pub fn income(&self, user_id: RecordId, pond: Option<&str>) -> Vec<IncomeView> {
        let mut records: Vec<IncomeRecord> = self
            .income_store
            .load_all()
            .into_iter()
            .filter(|r: &IncomeRecord| r.user_id == user_id)
            .filter(|r| pond.is_none_or(|p| r.pond_name.as_str() == p))
            .collect();
        records.sort_by(|a, b| {
            b.income_date
                .cmp(&a.income_date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        records
            .into_iter()
            .filter_map(|r| self.income_view(r))
            .collect()
    }

    /// A farmer's expense entries, newest first, optionally scoped to a pond.
    pub fn expenses(&self, user_id: RecordId, pond: Option<&str>) -> Vec<ExpenseView> {
        let mut records: Vec<ExpenseRecord> = self
            .expense_store
            .load_all()
            .into_iter()
            .filter(|r: &ExpenseRecord| r.user_id == user_id)
            .filter(|r| pond.is_none_or(|p| r.pond_name.as_str() == p))
            .collect();
        records.sort_by(|a, b| {
            b.expense_date
                .cmp(&a.expense_date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        records
            .into_iter()
            .filter_map(|r| self.expense_view(r))
            .collect()
    }

    /// Stores a new income entry.
    pub fn add_income(&self, user_id: RecordId, new: NewIncome) -> CoreResult<IncomeView> {
        if self.categories.income_category(new.category_id).is_none() {
            return Err(CoreError::UnknownReference {
                entity: "income category",
                id: new.category_id.to_string(),
            });
        }
        let record = IncomeRecord {
            id: RecordId::generate(),
            user_id,
            category_id: new.category_id,
            pond_name: NonEmptyText::new(&new.pond_name)?,
            amount: PositiveAmount::new(new.amount)?,
            quantity_kg: new.quantity_kg,
            price_per_kg: new.price_per_kg,
            description: new.description,
            income_date: new.income_date.unwrap_or_else(|| Utc::now().date_naive()),
            created_at: Utc::now(),
        };
        self.income_store.write(&record.id, &record)?;
        self.income_view(record)
            .ok_or_else(|| CoreError::InvalidInput("stored entry failed to join catalogs".into()))
    }

    /// Stores a new expense entry.
    pub fn add_expense(&self, user_id: RecordId, new: NewExpense) -> CoreResult<ExpenseView> {
        if self.categories.expense_category(new.category_id).is_none() {
            return Err(CoreError::UnknownReference {
                entity: "expense category",
                id: new.category_id.to_string(),
            });
        }
        let record = ExpenseRecord {
            id: RecordId::generate(),
            user_id,
            category_id: new.category_id,
            pond_name: NonEmptyText::new(&new.pond_name)?,
            amount: PositiveAmount::new(new.amount)?,
            description: new.description,
            expense_date: new.expense_date.unwrap_or_else(|| Utc::now().date_naive()),
            created_at: Utc::now(),
        };
        self.expense_store.write(&record.id, &record)?;
        self.expense_view(record)
            .ok_or_else(|| CoreError::InvalidInput("stored entry failed to join catalogs".into()))
    }

    /// Aggregates both ledgers for a farmer, optionally scoped to a pond.
    pub fn summary(&self, user_id: RecordId, pond: Option<&str>) -> AccountingSummary {
        let income = self.income(user_id, pond);
        let expenses = self.expenses(user_id, pond);

        let total_income: f64 = income.iter().map(|e| e.amount).sum();
        let total_expenses: f64 = expenses.iter().map(|e| e.amount).sum();

        let income_by_category = category_totals(
            self.categories.income(),
            income.iter().map(|e| (e.income_category.id, e.amount)),
        );
        let expenses_by_category = category_totals(
            self.categories.expense(),
            expenses.iter().map(|e| (e.expense_category.id, e.amount)),
        );

        let mut ponds = Vec::new();
        for name in income
            .iter()
            .map(|e| e.pond_name.as_str())
            .chain(expenses.iter().map(|e| e.pond_name.as_str()))
        {
            if !ponds.iter().any(|p| p == name) {
                ponds.push(name.to_string());
            }
        }

        AccountingSummary {
            total_income,
            total_expenses,
            net_profit: total_income - total_expenses,
            income_by_category,
            expenses_by_category,
            ponds,
        }
    }

    fn income_view(&self, record: IncomeRecord) -> Option<IncomeView> {
        let category = self.categories.income_category(record.category_id)?;
        Some(IncomeView {
            id: record.id,
            pond_name: record.pond_name,
            amount: record.amount.value(),
            quantity_kg: record.quantity_kg,
            price_per_kg: record.price_per_kg,
            description: record.description,
            income_date: record.income_date,
            created_at: record.created_at,
            income_category: category.clone(),
        })
    }

    fn expense_view(&self, record: ExpenseRecord) -> Option<ExpenseView> {
        let category = self.categories.expense_category(record.category_id)?;
        Some(ExpenseView {
            id: record.id,
            pond_name: record.pond_name,
            amount: record.amount.value(),
            description: record.description,
            expense_date: record.expense_date,
            created_at: record.created_at,
            expense_category: category.clone(),
        })
    }
}

/// Sums amounts per category, keeping catalog order and dropping categories
/// with no entries.
fn category_totals(
    catalog: &[LedgerCategory],
    entries: impl Iterator<Item = (u32, f64)> + Clone,
) -> Vec<CategoryTotal> {
    catalog
        .iter()
        .filter_map(|category| {
            let total: f64 = entries
                .clone()
                .filter(|(id, _)| *id == category.id)
                .map(|(_, amount)| amount)
                .sum();
            (total > 0.0).then(|| CategoryTotal {
                category: category.clone(),
                total,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalogs;
    use tempfile::TempDir;

    fn service(dir: &TempDir) -> AccountingService {
        let cfg = CoreConfig::new(dir.path().to_path_buf()).unwrap();
        let catalogs = Catalogs::load().unwrap();
        AccountingService::new(&cfg, catalogs.ledger)
    }

    fn income(category: u32, pond: &str, amount: f64, date: &str) -> NewIncome {
        NewIncome {
            category_id: category,
            pond_name: pond.into(),
            amount,
            quantity_kg: None,
            price_per_kg: None,
            description: None,
            income_date: Some(date.parse().unwrap()),
        }
    }

    fn expense(category: u32, pond: &str, amount: f64, date: &str) -> NewExpense {
        NewExpense {
            category_id: category,
            pond_name: pond.into(),
            amount,
            description: None,
            expense_date: Some(date.parse().unwrap()),
        }
    }

    #[test]
    fn entries_are_scoped_to_user_and_pond() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        let alice = RecordId::generate();
        let bob = RecordId::generate();

        service
            .add_income(alice, income(1, "বড় পুকুর", 5000.0, "2026-07-01"))
            .unwrap();
        service
            .add_income(alice, income(1, "ছোট পুকুর", 2000.0, "2026-07-02"))
            .unwrap();
        service
            .add_income(bob, income(1, "বড় পুকুর", 9000.0, "2026-07-03"))
            .unwrap();

        assert_eq!(service.income(alice, None).len(), 2);
        assert_eq!(service.income(alice, Some("বড় পুকুর")).len(), 1);
        assert_eq!(service.income(bob, None).len(), 1);
    }

    #[test]
    fn entries_are_ordered_newest_first() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        let user = RecordId::generate();

        service
            .add_expense(user, expense(2, "পুকুর", 100.0, "2026-07-01"))
            .unwrap();
        service
            .add_expense(user, expense(2, "পুকুর", 200.0, "2026-07-05"))
            .unwrap();

        let rows = service.expenses(user, None);
        assert_eq!(rows[0].amount, 200.0);
        assert_eq!(rows[1].amount, 100.0);
    }

    #[test]
    fn add_rejects_unknown_category_blank_pond_and_bad_amount() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        let user = RecordId::generate();

        assert!(matches!(
            service.add_income(user, income(99, "পুকুর", 100.0, "2026-07-01")),
            Err(CoreError::UnknownReference { .. })
        ));
        assert!(matches!(
            service.add_income(user, income(1, "   ", 100.0, "2026-07-01")),
            Err(CoreError::Text(_))
        ));
        assert!(matches!(
            service.add_expense(user, expense(1, "পুকুর", -5.0, "2026-07-01")),
            Err(CoreError::Amount(_))
        ));
    }

    #[test]
    fn summary_aggregates_totals_and_categories() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        let user = RecordId::generate();

        service
            .add_income(user, income(1, "বড় পুকুর", 5000.0, "2026-07-01"))
            .unwrap();
        service
            .add_income(user, income(2, "বড় পুকুর", 1500.0, "2026-07-02"))
            .unwrap();
        service
            .add_expense(user, expense(2, "বড় পুকুর", 1200.0, "2026-07-03"))
            .unwrap();
        service
            .add_expense(user, expense(2, "ছোট পুকুর", 300.0, "2026-07-04"))
            .unwrap();

        let summary = service.summary(user, None);
        assert_eq!(summary.total_income, 6500.0);
        assert_eq!(summary.total_expenses, 1500.0);
        assert_eq!(summary.net_profit, 5000.0);
        assert_eq!(summary.income_by_category.len(), 2);
        assert_eq!(summary.expenses_by_category.len(), 1);
        assert_eq!(summary.expenses_by_category[0].total, 1500.0);
        assert_eq!(summary.ponds, vec!["বড় পুকুর", "ছোট পুকুর"]);

        let scoped = service.summary(user, Some("ছোট পুকুর"));
        assert_eq!(scoped.total_income, 0.0);
        assert_eq!(scoped.total_expenses, 300.0);
        assert_eq!(scoped.net_profit, -300.0);
    }

    #[test]
    fn summary_for_empty_ledgers_is_zeroed() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        let summary = service.summary(RecordId::generate(), None);
        assert_eq!(summary.total_income, 0.0);
        assert_eq!(summary.net_profit, 0.0);
        assert!(summary.income_by_category.is_empty());
        assert!(summary.ponds.is_empty());
    }
}
