//! Budget versus actual spending.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::budgets_model::Budget;
use crate::errors::{Error, Result};
use crate::transactions::Transaction;

fn overflow(what: &str) -> Error {
    Error::Unexpected(format!("Budget report {} is out of range", what))
}

/// Spending against one budget over its window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetReport {
    pub budget_amount: Decimal,
    pub total_spent: Decimal,
    pub remaining: Decimal,
    /// Rounded to two decimal places. Zero when the budget amount is zero.
    pub percentage_used: Decimal,
    pub is_on_track: bool,
}

impl BudgetReport {
    /// Derives the report figures from a cap and the amount spent against it.
    ///
    /// Fails instead of panicking when a figure leaves the decimal range.
    pub fn from_totals(budget_amount: Decimal, total_spent: Decimal) -> Result<Self> {
        let percentage_used = if budget_amount > Decimal::ZERO {
            total_spent
                .checked_div(budget_amount)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .ok_or_else(|| overflow("percentage"))?
                .round_dp(2)
        } else {
            Decimal::ZERO
        };
        let remaining = budget_amount
            .checked_sub(total_spent)
            .ok_or_else(|| overflow("remaining amount"))?;

        Ok(Self {
            budget_amount,
            total_spent,
            remaining,
            percentage_used,
            is_on_track: total_spent <= budget_amount,
        })
    }
}

/// Aggregates `transactions` against `budget`.
///
/// Only expenses in the budget's category dated within
/// `[start_date, end_date]` count. Callers may pass any superset of those.
pub fn compute_budget_report(
    budget: &Budget,
    transactions: &[Transaction],
) -> Result<BudgetReport> {
    let total_spent = transactions
        .iter()
        .filter(|t| {
            t.user_id == budget.user_id
                && t.category_id == budget.category_id
                && t.is_expense()
                && t.date >= budget.start_date
                && t.date <= budget.end_date
        })
        .try_fold(Decimal::ZERO, |total, t| total.checked_add(t.money.amount()))
        .ok_or_else(|| overflow("total"))?;

    BudgetReport::from_totals(budget.money.amount(), total_spent)
}
