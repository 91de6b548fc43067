//! Transaction repository and service traits.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::transactions_model::{
    NewTransaction, Transaction, TransactionFilter, TransactionPage, TransactionUpdate,
};
use crate::entry_type::EntryType;
use crate::errors::Result;
use crate::ids::{CategoryId, CurrencyId, TransactionId, UserId};
use crate::money::Money;

/// Trait defining the contract for Transaction repository operations.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    async fn create(&self, new_transaction: NewTransaction) -> Result<Transaction>;

    async fn update(&self, transaction: Transaction) -> Result<Transaction>;

    async fn delete(&self, transaction_id: TransactionId) -> Result<usize>;

    fn find_by_id(&self, transaction_id: TransactionId) -> Result<Option<Transaction>>;

    /// All transactions of a user, newest first.
    fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<Transaction>>;

    /// Transactions dated within `[start, end]`, both ends inclusive.
    fn find_by_user_id_and_date_range(
        &self,
        user_id: UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>>;

    /// One page of matching transactions and the total match count.
    fn find_by_user_id_with_filters(
        &self,
        user_id: UserId,
        filter: &TransactionFilter,
    ) -> Result<(Vec<Transaction>, i64)>;
}

/// Trait defining the contract for Transaction service operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    #[allow(clippy::too_many_arguments)]
    async fn create_transaction(
        &self,
        user_id: UserId,
        category_id: CategoryId,
        currency_id: CurrencyId,
        money: Money,
        description: &str,
        date: NaiveDate,
        transaction_type: EntryType,
    ) -> Result<Transaction>;

    fn get_transaction(&self, transaction_id: TransactionId, user_id: UserId)
        -> Result<Transaction>;

    fn get_transactions_by_user(&self, user_id: UserId) -> Result<Vec<Transaction>>;

    fn get_transactions_by_user_and_date_range(
        &self,
        user_id: UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>>;

    fn get_transactions_by_user_with_filters(
        &self,
        user_id: UserId,
        filter: &TransactionFilter,
    ) -> Result<TransactionPage>;

    /// Replaces category, currency, amount, description and date. The
    /// category type is not re-checked against the transaction type.
    async fn update_transaction(
        &self,
        transaction_id: TransactionId,
        user_id: UserId,
        update: TransactionUpdate,
    ) -> Result<Transaction>;

    async fn delete_transaction(&self, transaction_id: TransactionId, user_id: UserId)
        -> Result<()>;
}
