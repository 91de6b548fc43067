//! Recurring module - scheduled transaction templates.

mod recurring_model;
mod recurring_service;
mod recurring_traits;

pub use recurring_model::{Frequency, NewRecurringTransaction, RecurringTransaction};
pub use recurring_service::RecurringTransactionService;
pub use recurring_traits::{RecurringTransactionRepositoryTrait, RecurringTransactionServiceTrait};
