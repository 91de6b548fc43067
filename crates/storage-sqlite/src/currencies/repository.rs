use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;

use super::model::{CurrencyDB, NewCurrencyDB, UserDefaultCurrencyDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{currencies, user_default_currencies};
use tally_core::currencies::{normalize_code, Currency, CurrencyRepositoryTrait, NewCurrency};
use tally_core::{CurrencyId, Error, Result, UserId};

pub struct CurrencyRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CurrencyRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        CurrencyRepository { pool, writer }
    }
}

#[async_trait]
impl CurrencyRepositoryTrait for CurrencyRepository {
    async fn create(&self, new_currency: NewCurrency) -> Result<Currency> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Currency> {
                let new_currency_db: NewCurrencyDB = new_currency.into();
                let result_db = diesel::insert_into(currencies::table)
                    .values(&new_currency_db)
                    .returning(CurrencyDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Currency::from(result_db))
            })
            .await
    }

    async fn update(&self, currency: Currency) -> Result<Currency> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Currency> {
                let result_db = diesel::update(currencies::table.find(currency.id.value()))
                    .set((
                        currencies::code.eq(&currency.code),
                        currencies::name.eq(&currency.name),
                        currencies::symbol.eq(&currency.symbol),
                    ))
                    .returning(CurrencyDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Currency::from(result_db))
            })
            .await
    }

    async fn delete(&self, currency_id: CurrencyId) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                match diesel::delete(currencies::table.find(currency_id.value())).execute(conn) {
                    Ok(deleted) => Ok(deleted),
                    Err(DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _)) => {
                        debug!("Currency {} is still referenced, delete rejected", currency_id);
                        Err(Error::Conflict(format!(
                            "Currency {} is still in use",
                            currency_id
                        )))
                    }
                    Err(e) => Err(StorageError::from(e).into()),
                }
            })
            .await
    }

    fn find_by_id(&self, currency_id: CurrencyId) -> Result<Option<Currency>> {
        let mut conn = get_connection(&self.pool)?;
        let row = currencies::table
            .find(currency_id.value())
            .select(CurrencyDB::as_select())
            .first::<CurrencyDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Currency::from))
    }

    fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<Currency>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = currencies::table
            .filter(currencies::user_id.eq(user_id.value()))
            .order(currencies::id.asc())
            .select(CurrencyDB::as_select())
            .load::<CurrencyDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Currency::from).collect())
    }

    fn find_default_currencies(&self) -> Result<Vec<Currency>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = currencies::table
            .filter(currencies::user_id.is_null())
            .order(currencies::id.asc())
            .select(CurrencyDB::as_select())
            .load::<CurrencyDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Currency::from).collect())
    }

    fn exists_by_code_and_user_id(&self, code: &str, user_id: UserId) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let count: i64 = currencies::table
            .filter(currencies::code.eq(normalize_code(code)))
            .filter(currencies::user_id.eq(user_id.value()))
            .count()
            .get_result(&mut conn)
            .map_err(StorageError::from)?;
        Ok(count > 0)
    }

    async fn set_user_default_currency(
        &self,
        user_id: UserId,
        currency_id: CurrencyId,
    ) -> Result<()> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                let row = UserDefaultCurrencyDB {
                    user_id: user_id.value(),
                    currency_id: currency_id.value(),
                    updated_at: chrono::Utc::now().naive_utc(),
                };
                diesel::insert_into(user_default_currencies::table)
                    .values(&row)
                    .on_conflict(user_default_currencies::user_id)
                    .do_update()
                    .set((
                        user_default_currencies::currency_id.eq(row.currency_id),
                        user_default_currencies::updated_at.eq(row.updated_at),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    fn get_user_default_currency(&self, user_id: UserId) -> Result<Option<Currency>> {
        let mut conn = get_connection(&self.pool)?;
        let row = user_default_currencies::table
            .inner_join(currencies::table)
            .filter(user_default_currencies::user_id.eq(user_id.value()))
            .select(CurrencyDB::as_select())
            .first::<CurrencyDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Currency::from))
    }
}
