//! Recurring transaction repository and service traits.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::recurring_model::{Frequency, NewRecurringTransaction, RecurringTransaction};
use crate::entry_type::EntryType;
use crate::errors::Result;
use crate::ids::{CategoryId, CurrencyId, RecurringTransactionId, UserId};
use crate::money::Money;

/// Trait defining the contract for RecurringTransaction repository operations.
#[async_trait]
pub trait RecurringTransactionRepositoryTrait: Send + Sync {
    async fn create(&self, new_recurring: NewRecurringTransaction)
        -> Result<RecurringTransaction>;

    async fn update(&self, recurring: RecurringTransaction) -> Result<RecurringTransaction>;

    async fn delete(&self, recurring_id: RecurringTransactionId) -> Result<usize>;

    fn find_by_id(&self, recurring_id: RecurringTransactionId)
        -> Result<Option<RecurringTransaction>>;

    fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<RecurringTransaction>>;

    /// Active templates with `next_due_date <= today`.
    fn find_due_by_user_id(
        &self,
        user_id: UserId,
        today: NaiveDate,
    ) -> Result<Vec<RecurringTransaction>>;
}

/// Trait defining the contract for RecurringTransaction service operations.
#[async_trait]
pub trait RecurringTransactionServiceTrait: Send + Sync {
    #[allow(clippy::too_many_arguments)]
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
    ) -> Result<RecurringTransaction>;

    fn get_recurring_transactions_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<RecurringTransaction>>;

    fn get_due_recurring_transactions(
        &self,
        user_id: UserId,
        today: NaiveDate,
    ) -> Result<Vec<RecurringTransaction>>;

    async fn set_recurring_transaction_active(
        &self,
        recurring_id: RecurringTransactionId,
        user_id: UserId,
        active: bool,
    ) -> Result<RecurringTransaction>;

    async fn delete_recurring_transaction(
        &self,
        recurring_id: RecurringTransactionId,
        user_id: UserId,
    ) -> Result<()>;
}
