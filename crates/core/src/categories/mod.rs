//! Categories module - income and expense classifications.

mod categories_model;
mod categories_service;
mod categories_traits;

pub use categories_model::{Category, NewCategory};
pub use categories_service::{load_accessible_category, CategoryService};
pub use categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
