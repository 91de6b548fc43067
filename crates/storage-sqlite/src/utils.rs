//! Helpers for turning stored text columns back into domain values.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::corrupt_row;
use tally_core::{CurrencyId, Money, Result};

/// Parses a stored enum column (`period`, `frequency`, `transaction_type`, ...).
pub(crate) fn parse_column<T>(table: &'static str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|e| corrupt_row(table, e))
}

/// Rebuilds a `Money` from its TEXT amount and currency id.
pub(crate) fn money_from_row(table: &'static str, amount: &str, currency_id: i64) -> Result<Money> {
    let amount = Decimal::from_str(amount).map_err(|e| corrupt_row(table, e))?;
    Money::new(amount, CurrencyId::new(currency_id)).map_err(|e| corrupt_row(table, e))
}
