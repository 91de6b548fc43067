use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

use super::budget_report::{compute_budget_report, BudgetReport};
use super::budgets_model::{Budget, BudgetPeriod, NewBudget};
use super::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::categories::{load_accessible_category, CategoryRepositoryTrait};
use crate::errors::{Error, Result};
use crate::ids::{BudgetId, CategoryId, UserId};
use crate::money::Money;
use crate::ownership::ensure_owner;
use crate::transactions::TransactionRepositoryTrait;

/// Service for managing budgets and computing their spending reports.
pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl BudgetService {
    pub fn new(
        repository: Arc<dyn BudgetRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            category_repository,
            transaction_repository,
        }
    }

    fn load_owned(&self, budget_id: BudgetId, user_id: UserId) -> Result<Budget> {
        let budget = self
            .repository
            .find_by_id(budget_id)?
            .ok_or_else(|| Error::not_found(format!("Budget {budget_id}")))?;
        ensure_owner(budget.user_id, user_id, "budget")?;
        Ok(budget)
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    async fn create_budget(
        &self,
        user_id: UserId,
        category_id: CategoryId,
        money: Money,
        period: BudgetPeriod,
        start_date: NaiveDate,
    ) -> Result<Budget> {
        load_accessible_category(self.category_repository.as_ref(), category_id, user_id)?;
        let new_budget = NewBudget::new(user_id, category_id, money, period, start_date)?;
        debug!(
            "Creating {} budget of {} for category {} ({} - {})",
            period, money, category_id, new_budget.start_date, new_budget.end_date
        );
        self.repository.create(new_budget).await
    }

    fn get_budget(&self, budget_id: BudgetId, user_id: UserId) -> Result<Budget> {
        self.load_owned(budget_id, user_id)
    }

    fn get_budgets_by_user(&self, user_id: UserId) -> Result<Vec<Budget>> {
        self.repository.find_by_user_id(user_id)
    }

    fn get_active_budgets_by_user(
        &self,
        user_id: UserId,
        today: NaiveDate,
    ) -> Result<Vec<Budget>> {
        self.repository.find_active_by_user_id(user_id, today)
    }

    async fn update_budget(
        &self,
        budget_id: BudgetId,
        user_id: UserId,
        money: Money,
        period: BudgetPeriod,
        start_date: NaiveDate,
    ) -> Result<Budget> {
        let mut budget = self.load_owned(budget_id, user_id)?;
        budget.reschedule(money, period, start_date)?;
        self.repository.update(budget).await
    }

    async fn delete_budget(&self, budget_id: BudgetId, user_id: UserId) -> Result<()> {
        self.load_owned(budget_id, user_id)?;
        debug!("Deleting budget {} for user {}", budget_id, user_id);
        self.repository.delete(budget_id).await?;
        Ok(())
    }

    fn get_budget_report(&self, budget: &Budget) -> Result<BudgetReport> {
        let transactions = self.transaction_repository.find_by_user_id_and_date_range(
            budget.user_id,
            budget.start_date,
            budget.end_date,
        )?;
        compute_budget_report(budget, &transactions)
    }
}
