//! Currencies module - system-default and user-defined currencies.

mod currencies_model;
mod currencies_service;
mod currencies_traits;

pub use currencies_model::{normalize_code, Currency, NewCurrency};
pub use currencies_service::{load_accessible_currency, CurrencyService};
pub use currencies_traits::{CurrencyRepositoryTrait, CurrencyServiceTrait};
