use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use super::model::{NewRecurringTransactionDB, RecurringTransactionDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::recurring_transactions;
use tally_core::recurring::{
    NewRecurringTransaction, RecurringTransaction, RecurringTransactionRepositoryTrait,
};
use tally_core::{RecurringTransactionId, Result, UserId};

pub struct RecurringTransactionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl RecurringTransactionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        RecurringTransactionRepository { pool, writer }
    }

    fn load_rows(rows: Vec<RecurringTransactionDB>) -> Result<Vec<RecurringTransaction>> {
        rows.into_iter().map(RecurringTransaction::try_from).collect()
    }
}

#[async_trait]
impl RecurringTransactionRepositoryTrait for RecurringTransactionRepository {
    async fn create(
        &self,
        new_recurring: NewRecurringTransaction,
    ) -> Result<RecurringTransaction> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<RecurringTransaction> {
                let new_recurring_db: NewRecurringTransactionDB = new_recurring.into();
                let result_db = diesel::insert_into(recurring_transactions::table)
                    .values(&new_recurring_db)
                    .returning(RecurringTransactionDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                RecurringTransaction::try_from(result_db)
            })
            .await
    }

    async fn update(&self, recurring: RecurringTransaction) -> Result<RecurringTransaction> {
        let recurring_db: RecurringTransactionDB = recurring.into();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<RecurringTransaction> {
                let result_db =
                    diesel::update(recurring_transactions::table.find(recurring_db.id))
                        .set(&recurring_db)
                        .returning(RecurringTransactionDB::as_returning())
                        .get_result(conn)
                        .map_err(StorageError::from)?;
                RecurringTransaction::try_from(result_db)
            })
            .await
    }

    async fn delete(&self, recurring_id: RecurringTransactionId) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(
                    diesel::delete(recurring_transactions::table.find(recurring_id.value()))
                        .execute(conn)
                        .map_err(StorageError::from)?,
                )
            })
            .await
    }

    fn find_by_id(
        &self,
        recurring_id: RecurringTransactionId,
    ) -> Result<Option<RecurringTransaction>> {
        let mut conn = get_connection(&self.pool)?;
        recurring_transactions::table
            .find(recurring_id.value())
            .select(RecurringTransactionDB::as_select())
            .first::<RecurringTransactionDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .map(RecurringTransaction::try_from)
            .transpose()
    }

    fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<RecurringTransaction>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = recurring_transactions::table
            .filter(recurring_transactions::user_id.eq(user_id.value()))
            .order((
                recurring_transactions::next_due_date.asc(),
                recurring_transactions::id.asc(),
            ))
            .select(RecurringTransactionDB::as_select())
            .load::<RecurringTransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Self::load_rows(rows)
    }

    fn find_due_by_user_id(
        &self,
        user_id: UserId,
        today: NaiveDate,
    ) -> Result<Vec<RecurringTransaction>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = recurring_transactions::table
            .filter(recurring_transactions::user_id.eq(user_id.value()))
            .filter(recurring_transactions::is_active.eq(true))
            .filter(recurring_transactions::next_due_date.le(today))
            .order((
                recurring_transactions::next_due_date.asc(),
                recurring_transactions::id.asc(),
            ))
            .select(RecurringTransactionDB::as_select())
            .load::<RecurringTransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Self::load_rows(rows)
    }
}
