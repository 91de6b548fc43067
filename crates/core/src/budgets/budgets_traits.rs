//! Budget repository and service traits.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::budget_report::BudgetReport;
use super::budgets_model::{Budget, BudgetPeriod, NewBudget};
use crate::errors::Result;
use crate::ids::{BudgetId, CategoryId, UserId};
use crate::money::Money;

/// Trait defining the contract for Budget repository operations.
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    async fn create(&self, new_budget: NewBudget) -> Result<Budget>;

    async fn update(&self, budget: Budget) -> Result<Budget>;

    async fn delete(&self, budget_id: BudgetId) -> Result<usize>;

    fn find_by_id(&self, budget_id: BudgetId) -> Result<Option<Budget>>;

    fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<Budget>>;

    /// Budgets whose window `[start_date, end_date)` contains `today`.
    fn find_active_by_user_id(&self, user_id: UserId, today: NaiveDate) -> Result<Vec<Budget>>;
}

/// Trait defining the contract for Budget service operations.
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    async fn create_budget(
        &self,
        user_id: UserId,
        category_id: CategoryId,
        money: Money,
        period: BudgetPeriod,
        start_date: NaiveDate,
    ) -> Result<Budget>;

    fn get_budget(&self, budget_id: BudgetId, user_id: UserId) -> Result<Budget>;

    fn get_budgets_by_user(&self, user_id: UserId) -> Result<Vec<Budget>>;

    fn get_active_budgets_by_user(&self, user_id: UserId, today: NaiveDate)
        -> Result<Vec<Budget>>;

    async fn update_budget(
        &self,
        budget_id: BudgetId,
        user_id: UserId,
        money: Money,
        period: BudgetPeriod,
        start_date: NaiveDate,
    ) -> Result<Budget>;

    async fn delete_budget(&self, budget_id: BudgetId, user_id: UserId) -> Result<()>;

    /// Spending against `budget`, recomputed from the owner's transactions.
    fn get_budget_report(&self, budget: &Budget) -> Result<BudgetReport>;
}
