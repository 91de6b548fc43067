//! Recurring transaction templates.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entry_type::EntryType;
use crate::errors::{Error, Result, ValidationError};
use crate::ids::{CategoryId, CurrencyId, RecurringTransactionId, UserId};
use crate::money::Money;
use crate::utils::time_utils::{add_days, add_months, add_years};

/// How often a recurring transaction fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        }
    }

    /// The date one step after `date`.
    pub fn next_after(&self, date: NaiveDate) -> Result<NaiveDate> {
        match self {
            Frequency::Daily => add_days(date, 1),
            Frequency::Weekly => add_days(date, 7),
            Frequency::Monthly => add_months(date, 1),
            Frequency::Yearly => add_years(date, 1),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "yearly" => Ok(Frequency::Yearly),
            _ => Err(Error::Validation(ValidationError::UnknownVariant {
                kind: "frequency",
                value: s.to_string(),
            })),
        }
    }
}

/// A transaction template that comes due on a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringTransaction {
    pub id: RecurringTransactionId,
    pub user_id: UserId,
    pub category_id: CategoryId,
    pub money: Money,
    pub description: String,
    #[serde(rename = "type")]
    pub transaction_type: EntryType,
    pub frequency: Frequency,
    pub next_due_date: NaiveDate,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl RecurringTransaction {
    pub fn currency_id(&self) -> CurrencyId {
        self.money.currency_id()
    }

    /// Inactive templates are never due.
    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.is_active && self.next_due_date <= today
    }

    /// Moves the next due date forward by one frequency step.
    pub fn advance(&mut self) -> Result<()> {
        self.next_due_date = self.frequency.next_after(self.next_due_date)?;
        Ok(())
    }
}

/// Input model for creating a recurring transaction. New templates start active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecurringTransaction {
    pub user_id: UserId,
    pub category_id: CategoryId,
    pub money: Money,
    pub description: String,
    #[serde(rename = "type")]
    pub transaction_type: EntryType,
    pub frequency: Frequency,
    pub next_due_date: NaiveDate,
    pub is_active: bool,
}
