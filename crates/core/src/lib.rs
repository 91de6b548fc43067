//! Tally Core - Domain entities, services, and traits.
//!
//! This crate contains the bookkeeping rules for Tally: money, categories,
//! currencies, transactions, budgets and recurring templates, plus the use
//! cases the server calls. It is database-agnostic and defines traits that
//! are implemented by the `storage-sqlite` crate.

pub mod analytics;
pub mod budgets;
pub mod categories;
pub mod constants;
pub mod currencies;
pub mod entry_type;
pub mod errors;
pub mod ids;
pub mod money;
pub mod ownership;
pub mod recurring;
pub mod transactions;
pub mod use_cases;
pub mod users;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use entry_type::EntryType;
pub use ids::{BudgetId, CategoryId, CurrencyId, RecurringTransactionId, TransactionId, UserId};
pub use money::Money;
pub use ownership::Ownership;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
