//! Transport-facing response shapes and request parsing helpers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::budgets::{Budget, BudgetReport};
use crate::categories::{Category, CategoryServiceTrait};
use crate::currencies::Currency;
use crate::errors::{Error, Result};
use crate::ids::{CategoryId, UserId};
use crate::recurring::RecurringTransaction;
use crate::transactions::Transaction;
use crate::utils::time_utils::{format_date, format_timestamp};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: i64,
    pub user_id: Option<i64>,
    pub name: String,
    pub color: String,
    pub is_default: bool,
    #[serde(rename = "type")]
    pub category_type: String,
    pub created_at: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.value(),
            user_id: category.user_id().map(UserId::value),
            is_default: category.is_default(),
            category_type: category.category_type.to_string(),
            created_at: format_timestamp(category.created_at),
            name: category.name,
            color: category.color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyResponse {
    pub id: i64,
    pub user_id: Option<i64>,
    pub code: String,
    pub name: String,
    pub symbol: String,
    pub is_default: bool,
    pub created_at: String,
}

impl From<Currency> for CurrencyResponse {
    fn from(currency: Currency) -> Self {
        Self {
            id: currency.id.value(),
            user_id: currency.user_id().map(UserId::value),
            is_default: currency.is_default(),
            created_at: format_timestamp(currency.created_at),
            code: currency.code,
            name: currency.name,
            symbol: currency.symbol,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub id: i64,
    pub user_id: i64,
    pub category_id: i64,
    pub currency_id: i64,
    pub amount: Decimal,
    pub description: String,
    pub date: String,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryResponse>,
}

impl TransactionResponse {
    pub fn new(transaction: Transaction, category: Option<Category>) -> Self {
        Self {
            id: transaction.id.value(),
            user_id: transaction.user_id.value(),
            category_id: transaction.category_id.value(),
            currency_id: transaction.currency_id().value(),
            amount: transaction.money.amount(),
            date: format_date(transaction.date),
            transaction_type: transaction.transaction_type.to_string(),
            created_at: format_timestamp(transaction.created_at),
            description: transaction.description,
            category: category.map(CategoryResponse::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetResponse {
    pub id: i64,
    pub user_id: i64,
    pub category_id: i64,
    pub currency_id: i64,
    pub amount: Decimal,
    pub period: String,
    pub start_date: String,
    pub end_date: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<BudgetReport>,
}

impl BudgetResponse {
    pub fn new(budget: Budget, category: Option<Category>, report: Option<BudgetReport>) -> Self {
        Self {
            id: budget.id.value(),
            user_id: budget.user_id.value(),
            category_id: budget.category_id.value(),
            currency_id: budget.money.currency_id().value(),
            amount: budget.money.amount(),
            period: budget.period.to_string(),
            start_date: format_date(budget.start_date),
            end_date: format_date(budget.end_date),
            created_at: format_timestamp(budget.created_at),
            category: category.map(CategoryResponse::from),
            report,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringTransactionResponse {
    pub id: i64,
    pub user_id: i64,
    pub category_id: i64,
    pub currency_id: i64,
    pub amount: Decimal,
    pub description: String,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub frequency: String,
    pub next_due_date: String,
    pub is_active: bool,
    pub is_due: bool,
    pub created_at: String,
}

impl RecurringTransactionResponse {
    pub fn new(recurring: RecurringTransaction, today: NaiveDate) -> Self {
        Self {
            id: recurring.id.value(),
            user_id: recurring.user_id.value(),
            category_id: recurring.category_id.value(),
            currency_id: recurring.currency_id().value(),
            amount: recurring.money.amount(),
            transaction_type: recurring.transaction_type.to_string(),
            frequency: recurring.frequency.to_string(),
            next_due_date: format_date(recurring.next_due_date),
            is_active: recurring.is_active,
            is_due: recurring.is_due(today),
            created_at: format_timestamp(recurring.created_at),
            description: recurring.description,
        }
    }
}

/// Optional category details for a response. A category that no longer
/// exists is left out; any other failure is returned.
pub(crate) fn optional_category(
    categories: &dyn CategoryServiceTrait,
    category_id: CategoryId,
    user_id: UserId,
) -> Result<Option<Category>> {
    match categories.get_category(category_id, user_id) {
        Ok(category) => Ok(Some(category)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Category ids from query values. Each value may itself be a comma-joined
/// list; blank segments are skipped.
pub fn parse_category_ids<S: AsRef<str>>(values: &[S]) -> Result<Vec<CategoryId>> {
    values
        .iter()
        .flat_map(|value| value.as_ref().split(','))
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            segment
                .parse::<i64>()
                .map(CategoryId::new)
                .map_err(|_| Error::invalid_input(format!("Invalid category id '{segment}'")))
        })
        .collect()
}
