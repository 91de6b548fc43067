//! SQLite storage implementation for Tally.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `tally-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations, including the seeded default categories and currencies
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! The core crate is database-agnostic and works with traits.
//!
//! ```text
//!   core (domain)       server (HTTP)
//!         │                   │
//!         └─────────┬─────────┘
//!                   │
//!                   ▼
//!          storage-sqlite (this crate)
//!                   │
//!                   ▼
//!               SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;
mod utils;

// Repository implementations
pub mod budgets;
pub mod categories;
pub mod currencies;
pub mod recurring;
pub mod transactions;
pub mod users;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use budgets::BudgetRepository;
pub use categories::CategoryRepository;
pub use currencies::CurrencyRepository;
pub use recurring::RecurringTransactionRepository;
pub use transactions::TransactionRepository;
pub use users::UserRepository;

// Re-export from tally-core for convenience
pub use tally_core::errors::{DatabaseError, Error, Result};
