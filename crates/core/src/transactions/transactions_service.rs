use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

use super::transactions_model::{
    NewTransaction, Transaction, TransactionFilter, TransactionPage, TransactionUpdate,
};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::categories::{load_accessible_category, CategoryRepositoryTrait};
use crate::currencies::{load_accessible_currency, CurrencyRepositoryTrait};
use crate::entry_type::EntryType;
use crate::errors::{Error, Result};
use crate::ids::{CategoryId, CurrencyId, TransactionId, UserId};
use crate::money::Money;
use crate::ownership::ensure_owner;

/// Service for recording transactions against categories and currencies.
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
    currency_repository: Arc<dyn CurrencyRepositoryTrait>,
}

impl TransactionService {
    pub fn new(
        repository: Arc<dyn TransactionRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
        currency_repository: Arc<dyn CurrencyRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            category_repository,
            currency_repository,
        }
    }

    fn load_owned(&self, transaction_id: TransactionId, user_id: UserId) -> Result<Transaction> {
        let transaction = self
            .repository
            .find_by_id(transaction_id)?
            .ok_or_else(|| Error::not_found(format!("Transaction {transaction_id}")))?;
        ensure_owner(transaction.user_id, user_id, "transaction")?;
        Ok(transaction)
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn create_transaction(
        &self,
        user_id: UserId,
        category_id: CategoryId,
        currency_id: CurrencyId,
        money: Money,
        description: &str,
        date: NaiveDate,
        transaction_type: EntryType,
    ) -> Result<Transaction> {
        let category =
            load_accessible_category(self.category_repository.as_ref(), category_id, user_id)?;
        load_accessible_currency(self.currency_repository.as_ref(), currency_id, user_id)?;

        category.ensure_accepts(transaction_type)?;
        money.ensure_currency(currency_id)?;

        debug!(
            "Creating {} transaction of {} for user {}",
            transaction_type, money, user_id
        );
        self.repository
            .create(NewTransaction {
                user_id,
                category_id,
                money,
                description: description.trim().to_string(),
                date,
                transaction_type,
            })
            .await
    }

    fn get_transaction(
        &self,
        transaction_id: TransactionId,
        user_id: UserId,
    ) -> Result<Transaction> {
        self.load_owned(transaction_id, user_id)
    }

    fn get_transactions_by_user(&self, user_id: UserId) -> Result<Vec<Transaction>> {
        self.repository.find_by_user_id(user_id)
    }

    fn get_transactions_by_user_and_date_range(
        &self,
        user_id: UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>> {
        self.repository
            .find_by_user_id_and_date_range(user_id, start, end)
    }

    fn get_transactions_by_user_with_filters(
        &self,
        user_id: UserId,
        filter: &TransactionFilter,
    ) -> Result<TransactionPage> {
        let (transactions, total) = self
            .repository
            .find_by_user_id_with_filters(user_id, filter)?;
        Ok(TransactionPage {
            transactions,
            total,
        })
    }

    async fn update_transaction(
        &self,
        transaction_id: TransactionId,
        user_id: UserId,
        update: TransactionUpdate,
    ) -> Result<Transaction> {
        let mut transaction = self.load_owned(transaction_id, user_id)?;

        load_accessible_category(
            self.category_repository.as_ref(),
            update.category_id,
            user_id,
        )?;
        load_accessible_currency(
            self.currency_repository.as_ref(),
            update.currency_id,
            user_id,
        )?;
        update.money.ensure_currency(update.currency_id)?;
        transaction.money.ensure_same_currency(&update.money)?;

        transaction.category_id = update.category_id;
        transaction.money = update.money;
        transaction.description = update.description.trim().to_string();
        transaction.date = update.date;

        self.repository.update(transaction).await
    }

    async fn delete_transaction(
        &self,
        transaction_id: TransactionId,
        user_id: UserId,
    ) -> Result<()> {
        self.load_owned(transaction_id, user_id)?;
        debug!("Deleting transaction {} for user {}", transaction_id, user_id);
        self.repository.delete(transaction_id).await?;
        Ok(())
    }
}
