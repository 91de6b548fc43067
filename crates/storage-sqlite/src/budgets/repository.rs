use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use super::model::{BudgetDB, NewBudgetDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::budgets;
use tally_core::budgets::{Budget, BudgetRepositoryTrait, NewBudget};
use tally_core::{BudgetId, Result, UserId};

pub struct BudgetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BudgetRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        BudgetRepository { pool, writer }
    }

    fn load_rows(rows: Vec<BudgetDB>) -> Result<Vec<Budget>> {
        rows.into_iter().map(Budget::try_from).collect()
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    async fn create(&self, new_budget: NewBudget) -> Result<Budget> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Budget> {
                let new_budget_db: NewBudgetDB = new_budget.into();
                let result_db = diesel::insert_into(budgets::table)
                    .values(&new_budget_db)
                    .returning(BudgetDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Budget::try_from(result_db)
            })
            .await
    }

    async fn update(&self, budget: Budget) -> Result<Budget> {
        let budget_db: BudgetDB = budget.into();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Budget> {
                let result_db = diesel::update(budgets::table.find(budget_db.id))
                    .set(&budget_db)
                    .returning(BudgetDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Budget::try_from(result_db)
            })
            .await
    }

    async fn delete(&self, budget_id: BudgetId) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(budgets::table.find(budget_id.value()))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    fn find_by_id(&self, budget_id: BudgetId) -> Result<Option<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        budgets::table
            .find(budget_id.value())
            .select(BudgetDB::as_select())
            .first::<BudgetDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .map(Budget::try_from)
            .transpose()
    }

    fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = budgets::table
            .filter(budgets::user_id.eq(user_id.value()))
            .order((budgets::start_date.desc(), budgets::id.desc()))
            .select(BudgetDB::as_select())
            .load::<BudgetDB>(&mut conn)
            .map_err(StorageError::from)?;
        Self::load_rows(rows)
    }

    fn find_active_by_user_id(&self, user_id: UserId, today: NaiveDate) -> Result<Vec<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = budgets::table
            .filter(budgets::user_id.eq(user_id.value()))
            .filter(budgets::start_date.le(today))
            .filter(budgets::end_date.gt(today))
            .order((budgets::start_date.desc(), budgets::id.desc()))
            .select(BudgetDB::as_select())
            .load::<BudgetDB>(&mut conn)
            .map_err(StorageError::from)?;
        Self::load_rows(rows)
    }
}
