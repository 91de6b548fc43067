//! Period summaries of income and spending.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entry_type::EntryType;
use crate::errors::{Error, Result};
use crate::transactions::Transaction;
use crate::utils::time_utils::{month_bounds, week_bounds, year_bounds};

/// Calendar window an analytics summary covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsPeriod {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl AnalyticsPeriod {
    /// Lenient parse: anything other than "weekly" or "yearly" is monthly.
    pub fn from_name(name: Option<&str>) -> Self {
        match name.map(|n| n.trim().to_ascii_lowercase()).as_deref() {
            Some("weekly") => AnalyticsPeriod::Weekly,
            Some("yearly") => AnalyticsPeriod::Yearly,
            _ => AnalyticsPeriod::Monthly,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            AnalyticsPeriod::Weekly => "weekly",
            AnalyticsPeriod::Monthly => "monthly",
            AnalyticsPeriod::Yearly => "yearly",
        }
    }

    /// Inclusive `(first, last)` days of the window containing `today`.
    pub fn window(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            AnalyticsPeriod::Weekly => week_bounds(today),
            AnalyticsPeriod::Monthly => month_bounds(today),
            AnalyticsPeriod::Yearly => year_bounds(today),
        }
    }
}

/// Income and spending totals over one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub period: AnalyticsPeriod,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_income: Decimal,
    pub total_spent: Decimal,
    pub net_amount: Decimal,
    pub transaction_count: usize,
}

impl AnalyticsSummary {
    /// Sums `transactions` by type. The caller supplies the transactions of
    /// the window; amounts are added regardless of currency.
    pub fn from_transactions(
        period: AnalyticsPeriod,
        (start_date, end_date): (NaiveDate, NaiveDate),
        transactions: &[Transaction],
    ) -> Result<Self> {
        let out_of_range = || Error::Unexpected("Analytics totals are out of range".to_string());

        let mut total_income = Decimal::ZERO;
        let mut total_spent = Decimal::ZERO;
        for transaction in transactions {
            let total = match transaction.transaction_type {
                EntryType::Income => &mut total_income,
                EntryType::Expense => &mut total_spent,
            };
            *total = total
                .checked_add(transaction.money.amount())
                .ok_or_else(out_of_range)?;
        }
        let net_amount = total_income
            .checked_sub(total_spent)
            .ok_or_else(out_of_range)?;

        Ok(Self {
            period,
            start_date,
            end_date,
            total_income,
            total_spent,
            net_amount,
            transaction_count: transactions.len(),
        })
    }
}
