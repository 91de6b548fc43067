//! Money value object.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{Error, Result, ValidationError};
use crate::ids::CurrencyId;

/// Largest amount a single `Money` may carry.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// A strictly positive amount bound to a currency.
///
/// `Money` can only be built through [`Money::new`], so holding one proves the
/// amount is greater than zero and at most [`MAX_AMOUNT`]. Deserialization goes
/// through the same check.
///
/// ```rust
/// use rust_decimal_macros::dec;
/// use tally_core::{ids::CurrencyId, money::Money};
///
/// let price = Money::new(dec!(12.50), CurrencyId::new(1)).unwrap();
/// assert_eq!(price.amount(), dec!(12.50));
/// assert!(Money::new(dec!(0), CurrencyId::new(1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MoneyParts", rename_all = "camelCase")]
pub struct Money {
    amount: Decimal,
    currency_id: CurrencyId,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MoneyParts {
    amount: Decimal,
    currency_id: CurrencyId,
}

impl TryFrom<MoneyParts> for Money {
    type Error = Error;

    fn try_from(parts: MoneyParts) -> Result<Self> {
        Money::new(parts.amount, parts.currency_id)
    }
}

impl Money {
    pub fn new(amount: Decimal, currency_id: CurrencyId) -> Result<Self> {
        if amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::NonPositiveAmount(amount)));
        }
        if amount > MAX_AMOUNT {
            return Err(Error::Validation(ValidationError::AmountTooLarge {
                amount,
                max: MAX_AMOUNT,
            }));
        }
        Ok(Self {
            amount,
            currency_id,
        })
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency_id(&self) -> CurrencyId {
        self.currency_id
    }

    pub fn same_currency(&self, other: &Money) -> bool {
        self.currency_id == other.currency_id
    }

    /// Fails with a validation error unless `other` is in the same currency.
    pub fn ensure_same_currency(&self, other: &Money) -> Result<()> {
        if !self.same_currency(other) {
            return Err(Error::Validation(ValidationError::CurrencyMismatch {
                expected: self.currency_id.value(),
                actual: other.currency_id.value(),
            }));
        }
        Ok(())
    }

    /// Fails with a validation error unless the amount is in `currency_id`.
    pub fn ensure_currency(&self, currency_id: CurrencyId) -> Result<()> {
        if self.currency_id != currency_id {
            return Err(Error::Validation(ValidationError::CurrencyMismatch {
                expected: currency_id.value(),
                actual: self.currency_id.value(),
            }));
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (currency {})", self.amount, self.currency_id)
    }
}
