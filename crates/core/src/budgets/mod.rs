//! Budgets module - per-category spending caps and their reports.

mod budget_report;
mod budgets_model;
mod budgets_service;
mod budgets_traits;
mod budgets_service_tests;

pub use budget_report::{compute_budget_report, BudgetReport};
pub use budgets_model::{Budget, BudgetPeriod, NewBudget};
pub use budgets_service::BudgetService;
pub use budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
