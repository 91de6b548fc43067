//! Transaction domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::entry_type::EntryType;
use crate::ids::{CategoryId, CurrencyId, TransactionId, UserId};
use crate::money::Money;
use crate::utils::pagination::Pagination;

/// Domain model representing a recorded income or expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub user_id: UserId,
    pub category_id: CategoryId,
    pub money: Money,
    pub description: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub transaction_type: EntryType,
    pub created_at: NaiveDateTime,
}

impl Transaction {
    pub fn currency_id(&self) -> CurrencyId {
        self.money.currency_id()
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == EntryType::Expense
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == EntryType::Income
    }
}

/// Input model for creating a new transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub user_id: UserId,
    pub category_id: CategoryId,
    pub money: Money,
    pub description: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub transaction_type: EntryType,
}

/// Replacement values applied by an update.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionUpdate {
    pub category_id: CategoryId,
    pub currency_id: CurrencyId,
    pub money: Money,
    pub description: String,
    pub date: NaiveDate,
}

/// Filters for paginated transaction listing. Empty fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilter {
    #[serde(rename = "type")]
    pub transaction_type: Option<EntryType>,
    pub category_ids: Vec<CategoryId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub pagination: Pagination,
}

impl TransactionFilter {
    /// In-memory evaluation of the filter criteria, pagination excluded.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(kind) = self.transaction_type {
            if transaction.transaction_type != kind {
                return false;
            }
        }
        if !self.category_ids.is_empty() && !self.category_ids.contains(&transaction.category_id)
        {
            return false;
        }
        if let Some(start) = self.start_date {
            if transaction.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if transaction.date > end {
                return false;
            }
        }
        true
    }
}

/// One page of transactions plus the unpaginated match count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPage {
    pub transactions: Vec<Transaction>,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn transaction(category: i64, kind: EntryType, date: &str) -> Transaction {
        Transaction {
            id: TransactionId::new(1),
            user_id: UserId::new(1),
            category_id: CategoryId::new(category),
            money: Money::new(dec!(10), CurrencyId::new(1)).unwrap(),
            description: String::new(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            transaction_type: kind,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = TransactionFilter::default();
        assert!(filter.matches(&transaction(1, EntryType::Income, "2024-03-01")));
        assert!(filter.matches(&transaction(2, EntryType::Expense, "1999-12-31")));
    }

    #[test]
    fn test_filter_combines_criteria() {
        let filter = TransactionFilter {
            transaction_type: Some(EntryType::Expense),
            category_ids: vec![CategoryId::new(2), CategoryId::new(3)],
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 31),
            ..Default::default()
        };

        assert!(filter.matches(&transaction(2, EntryType::Expense, "2024-01-31")));
        assert!(filter.matches(&transaction(3, EntryType::Expense, "2024-01-01")));
        assert!(!filter.matches(&transaction(2, EntryType::Income, "2024-01-15")));
        assert!(!filter.matches(&transaction(4, EntryType::Expense, "2024-01-15")));
        assert!(!filter.matches(&transaction(2, EntryType::Expense, "2024-02-01")));
    }
}
