//! Typed identifiers.
//!
//! Every entity is identified by a storage-assigned integer. The wrappers keep a
//! `CategoryId` from being passed where a `CurrencyId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// Identity of an authenticated user. The core never loads users, it only
    /// compares ids for ownership.
    UserId
);
define_id!(CategoryId);
define_id!(CurrencyId);
define_id!(TransactionId);
define_id!(BudgetId);
define_id!(RecurringTransactionId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_as_plain_integers() {
        assert_eq!(serde_json::to_string(&CategoryId::new(42)).unwrap(), "42");
        let parsed: BudgetId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, BudgetId::new(7));
    }

    #[test]
    fn test_id_conversions() {
        let id = UserId::from(3);
        assert_eq!(i64::from(id), 3);
        assert_eq!(id.to_string(), "3");
    }
}
