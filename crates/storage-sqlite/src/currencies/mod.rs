//! SQLite storage implementation for currencies and per-user default currencies.

mod model;
mod repository;

pub use model::{CurrencyDB, NewCurrencyDB, UserDefaultCurrencyDB};
pub use repository::CurrencyRepository;
