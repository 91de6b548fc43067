//! Budget domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result, ValidationError};
use crate::ids::{BudgetId, CategoryId, UserId};
use crate::money::Money;
use crate::utils::time_utils::{add_days, add_months, add_years};

/// Length of a budget window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Weekly,
    Monthly,
    Yearly,
}

impl BudgetPeriod {
    pub const fn as_str(&self) -> &'static str {
        match self {
            BudgetPeriod::Weekly => "weekly",
            BudgetPeriod::Monthly => "monthly",
            BudgetPeriod::Yearly => "yearly",
        }
    }

    /// First day after the window that opens on `start`.
    ///
    /// Month and year steps clamp to the last valid day, so a monthly budget
    /// starting on January 31st ends on the last day of February.
    pub fn end_date(&self, start: NaiveDate) -> Result<NaiveDate> {
        match self {
            BudgetPeriod::Weekly => add_days(start, 7),
            BudgetPeriod::Monthly => add_months(start, 1),
            BudgetPeriod::Yearly => add_years(start, 1),
        }
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetPeriod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(BudgetPeriod::Weekly),
            "monthly" => Ok(BudgetPeriod::Monthly),
            "yearly" => Ok(BudgetPeriod::Yearly),
            _ => Err(Error::Validation(ValidationError::UnknownVariant {
                kind: "period",
                value: s.to_string(),
            })),
        }
    }
}

/// Domain model representing a spending cap for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: BudgetId,
    pub user_id: UserId,
    pub category_id: CategoryId,
    pub money: Money,
    pub period: BudgetPeriod,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: NaiveDateTime,
}

impl Budget {
    /// Active on `day` when `start_date <= day < end_date`.
    pub fn is_active_on(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day < self.end_date
    }

    /// Replaces the cap and window. The cap must stay in the same currency.
    pub fn reschedule(
        &mut self,
        money: Money,
        period: BudgetPeriod,
        start_date: NaiveDate,
    ) -> Result<()> {
        self.money.ensure_same_currency(&money)?;
        self.end_date = period.end_date(start_date)?;
        self.money = money;
        self.period = period;
        self.start_date = start_date;
        Ok(())
    }
}

/// Input model for creating a new budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub user_id: UserId,
    pub category_id: CategoryId,
    pub money: Money,
    pub period: BudgetPeriod,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl NewBudget {
    /// Builds a budget with its end date derived from `period`.
    pub fn new(
        user_id: UserId,
        category_id: CategoryId,
        money: Money,
        period: BudgetPeriod,
        start_date: NaiveDate,
    ) -> Result<Self> {
        Ok(Self {
            user_id,
            category_id,
            money,
            period,
            start_date,
            end_date: period.end_date(start_date)?,
        })
    }
}
