use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use diesel::SqliteConnection;
use std::sync::Arc;

use super::model::{NewTransactionDB, TransactionDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::transactions;
use tally_core::transactions::{
    NewTransaction, Transaction, TransactionFilter, TransactionRepositoryTrait,
};
use tally_core::{Result, TransactionId, UserId};

pub struct TransactionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TransactionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        TransactionRepository { pool, writer }
    }

    fn load_rows(rows: Vec<TransactionDB>) -> Result<Vec<Transaction>> {
        rows.into_iter().map(Transaction::try_from).collect()
    }

    /// The user's transactions narrowed by `filter`, without ordering or paging.
    fn filtered_query(
        user_id: UserId,
        filter: &TransactionFilter,
    ) -> transactions::BoxedQuery<'static, Sqlite> {
        let mut query = transactions::table
            .filter(transactions::user_id.eq(user_id.value()))
            .into_boxed();

        if let Some(kind) = filter.transaction_type {
            query = query.filter(transactions::transaction_type.eq(kind.as_str()));
        }
        if !filter.category_ids.is_empty() {
            let ids: Vec<i64> = filter.category_ids.iter().map(|c| c.value()).collect();
            query = query.filter(transactions::category_id.eq_any(ids));
        }
        if let Some(start) = filter.start_date {
            query = query.filter(transactions::date.ge(start));
        }
        if let Some(end) = filter.end_date {
            query = query.filter(transactions::date.le(end));
        }
        query
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    async fn create(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Transaction> {
                let new_transaction_db: NewTransactionDB = new_transaction.into();
                let result_db = diesel::insert_into(transactions::table)
                    .values(&new_transaction_db)
                    .returning(TransactionDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Transaction::try_from(result_db)
            })
            .await
    }

    async fn update(&self, transaction: Transaction) -> Result<Transaction> {
        let transaction_db: TransactionDB = transaction.into();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Transaction> {
                let result_db = diesel::update(transactions::table.find(transaction_db.id))
                    .set(&transaction_db)
                    .returning(TransactionDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Transaction::try_from(result_db)
            })
            .await
    }

    async fn delete(&self, transaction_id: TransactionId) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(transactions::table.find(transaction_id.value()))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    fn find_by_id(&self, transaction_id: TransactionId) -> Result<Option<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        transactions::table
            .find(transaction_id.value())
            .select(TransactionDB::as_select())
            .first::<TransactionDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .map(Transaction::try_from)
            .transpose()
    }

    fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = transactions::table
            .filter(transactions::user_id.eq(user_id.value()))
            .order((transactions::date.desc(), transactions::id.desc()))
            .select(TransactionDB::as_select())
            .load::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Self::load_rows(rows)
    }

    fn find_by_user_id_and_date_range(
        &self,
        user_id: UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = transactions::table
            .filter(transactions::user_id.eq(user_id.value()))
            .filter(transactions::date.between(start, end))
            .order((transactions::date.desc(), transactions::id.desc()))
            .select(TransactionDB::as_select())
            .load::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Self::load_rows(rows)
    }

    fn find_by_user_id_with_filters(
        &self,
        user_id: UserId,
        filter: &TransactionFilter,
    ) -> Result<(Vec<Transaction>, i64)> {
        let mut conn = get_connection(&self.pool)?;

        let total: i64 = Self::filtered_query(user_id, filter)
            .count()
            .get_result(&mut conn)
            .map_err(StorageError::from)?;

        let rows = Self::filtered_query(user_id, filter)
            .order((transactions::date.desc(), transactions::id.desc()))
            .limit(filter.pagination.limit())
            .offset(filter.pagination.offset())
            .select(TransactionDB::as_select())
            .load::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok((Self::load_rows(rows)?, total))
    }
}
