use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

use super::recurring_model::{Frequency, NewRecurringTransaction, RecurringTransaction};
use super::recurring_traits::{
    RecurringTransactionRepositoryTrait, RecurringTransactionServiceTrait,
};
use crate::categories::{load_accessible_category, CategoryRepositoryTrait};
use crate::currencies::{load_accessible_currency, CurrencyRepositoryTrait};
use crate::entry_type::EntryType;
use crate::errors::{Error, Result};
use crate::ids::{CategoryId, CurrencyId, RecurringTransactionId, UserId};
use crate::money::Money;
use crate::ownership::ensure_owner;

/// Service for managing recurring transaction templates.
pub struct RecurringTransactionService {
    repository: Arc<dyn RecurringTransactionRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
    currency_repository: Arc<dyn CurrencyRepositoryTrait>,
}

impl RecurringTransactionService {
    pub fn new(
        repository: Arc<dyn RecurringTransactionRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
        currency_repository: Arc<dyn CurrencyRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            category_repository,
            currency_repository,
        }
    }

    fn load_owned(
        &self,
        recurring_id: RecurringTransactionId,
        user_id: UserId,
    ) -> Result<RecurringTransaction> {
        let recurring = self
            .repository
            .find_by_id(recurring_id)?
            .ok_or_else(|| Error::not_found(format!("Recurring transaction {recurring_id}")))?;
        ensure_owner(recurring.user_id, user_id, "recurring transaction")?;
        Ok(recurring)
    }
}

#[async_trait]
impl RecurringTransactionServiceTrait for RecurringTransactionService {
    async fn create_recurring_transaction(
        &self,
        user_id: UserId,
        category_id: CategoryId,
        currency_id: CurrencyId,
        money: Money,
        description: &str,
        transaction_type: EntryType,
        frequency: Frequency,
        next_due_date: NaiveDate,
    ) -> Result<RecurringTransaction> {
        let category =
            load_accessible_category(self.category_repository.as_ref(), category_id, user_id)?;
        load_accessible_currency(self.currency_repository.as_ref(), currency_id, user_id)?;

        category.ensure_accepts(transaction_type)?;
        money.ensure_currency(currency_id)?;

        debug!(
            "Creating {} recurring {} of {} for user {}",
            frequency, transaction_type, money, user_id
        );
        self.repository
            .create(NewRecurringTransaction {
                user_id,
                category_id,
                money,
                description: description.trim().to_string(),
                transaction_type,
                frequency,
                next_due_date,
                is_active: true,
            })
            .await
    }

    fn get_recurring_transactions_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<RecurringTransaction>> {
        self.repository.find_by_user_id(user_id)
    }

    fn get_due_recurring_transactions(
        &self,
        user_id: UserId,
        today: NaiveDate,
    ) -> Result<Vec<RecurringTransaction>> {
        self.repository.find_due_by_user_id(user_id, today)
    }

    async fn set_recurring_transaction_active(
        &self,
        recurring_id: RecurringTransactionId,
        user_id: UserId,
        active: bool,
    ) -> Result<RecurringTransaction> {
        let mut recurring = self.load_owned(recurring_id, user_id)?;
        recurring.is_active = active;
        self.repository.update(recurring).await
    }

    async fn delete_recurring_transaction(
        &self,
        recurring_id: RecurringTransactionId,
        user_id: UserId,
    ) -> Result<()> {
        self.load_owned(recurring_id, user_id)?;
        self.repository.delete(recurring_id).await?;
        Ok(())
    }
}
