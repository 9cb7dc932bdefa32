//! Income and expense category catalogs for pond accounting.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LedgerCategory {
    pub id: u32,
    pub name_bn: String,
    pub name_en: String,
}

/// Immutable income/expense category catalogs.
#[derive(Debug)]
pub struct LedgerCategories {
    income: Vec<LedgerCategory>,
    expense: Vec<LedgerCategory>,
}

impl LedgerCategories {
    pub fn new(income: Vec<LedgerCategory>, expense: Vec<LedgerCategory>) -> CoreResult<Self> {
        for (kind, list) in [("income", &income), ("expense", &expense)] {
            let mut ids = HashSet::new();
            for category in list {
                if !ids.insert(category.id) {
                    return Err(CoreError::InvalidCatalog(format!(
                        "duplicate {kind} category id {}",
                        category.id
                    )));
                }
            }
        }
        Ok(Self { income, expense })
    }

    pub fn builtin() -> CoreResult<Self> {
        Self::new(seed_income_categories(), seed_expense_categories())
    }

    /// Income categories in declaration order.
    pub fn income(&self) -> &[LedgerCategory] {
        &self.income
    }

    /// Expense categories in declaration order.
    pub fn expense(&self) -> &[LedgerCategory] {
        &self.expense
    }

    pub fn income_category(&self, id: u32) -> Option<&LedgerCategory> {
        self.income.iter().find(|c| c.id == id)
    }

    pub fn expense_category(&self, id: u32) -> Option<&LedgerCategory> {
        self.expense.iter().find(|c| c.id == id)
    }
}

fn category(id: u32, name_bn: &str, name_en: &str) -> LedgerCategory {
    LedgerCategory {
        id,
        name_bn: name_bn.into(),
        name_en: name_en.into(),
    }
}

fn seed_income_categories() -> Vec<LedgerCategory> {
    vec![
        category(1, "মাছ বিক্রয়", "Fish sale"),
        category(2, "পোনা বিক্রয়", "Fingerling sale"),
        category(3, "অন্যান্য আয়", "Other income"),
    ]
}

fn seed_expense_categories() -> Vec<LedgerCategory> {
    vec![
        category(1, "পোনা ক্রয়", "Fingerling purchase"),
        category(2, "মাছের খাবার", "Fish feed"),
        category(3, "ওষুধ ও রাসায়নিক", "Medicine and chemicals"),
        category(4, "শ্রমিক মজুরি", "Labour"),
        category(5, "পুকুর ইজারা", "Pond lease"),
        category(6, "বিদ্যুৎ ও যন্ত্রপাতি", "Electricity and equipment"),
        category(7, "অন্যান্য ব্যয়", "Other expenses"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalogs_are_valid() {
        let categories = LedgerCategories::builtin().unwrap();
        assert_eq!(categories.income().len(), 3);
        assert_eq!(categories.expense().len(), 7);
        assert!(categories.income_category(1).is_some());
        assert!(categories.expense_category(7).is_some());
        assert!(categories.income_category(99).is_none());
    }

    #[test]
    fn validation_rejects_duplicates() {
        let mut income = seed_income_categories();
        income.push(category(1, "মাছ বিক্রয়", "Fish sale"));
        assert!(LedgerCategories::new(income, seed_expense_categories()).is_err());
    }
}
