//! SQLite storage implementation for recurring transaction templates.

mod model;
mod repository;

pub use model::{NewRecurringTransactionDB, RecurringTransactionDB};
pub use repository::RecurringTransactionRepository;
