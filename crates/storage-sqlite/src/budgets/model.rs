//! Database models for budgets.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{money_from_row, parse_column};
use tally_core::budgets::{Budget, NewBudget};
use tally_core::{BudgetId, CategoryId, Error, UserId};

const TABLE: &str = "budgets";

#[derive(
    Queryable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::budgets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct BudgetDB {
    pub id: i64,
    pub user_id: i64,
    pub category_id: i64,
    pub currency_id: i64,
    pub amount: String,
    pub period: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::budgets)]
#[serde(rename_all = "camelCase")]
pub struct NewBudgetDB {
    pub user_id: i64,
    pub category_id: i64,
    pub currency_id: i64,
    pub amount: String,
    pub period: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: NaiveDateTime,
}

impl TryFrom<BudgetDB> for Budget {
    type Error = Error;

    fn try_from(db: BudgetDB) -> Result<Self, Self::Error> {
        Ok(Self {
            id: BudgetId::new(db.id),
            user_id: UserId::new(db.user_id),
            category_id: CategoryId::new(db.category_id),
            money: money_from_row(TABLE, &db.amount, db.currency_id)?,
            period: parse_column(TABLE, &db.period)?,
            start_date: db.start_date,
            end_date: db.end_date,
            created_at: db.created_at,
        })
    }
}

impl From<NewBudget> for NewBudgetDB {
    fn from(domain: NewBudget) -> Self {
        Self {
            user_id: domain.user_id.value(),
            category_id: domain.category_id.value(),
            currency_id: domain.money.currency_id().value(),
            amount: domain.money.amount().to_string(),
            period: domain.period.as_str().to_string(),
            start_date: domain.start_date,
            end_date: domain.end_date,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

impl From<Budget> for BudgetDB {
    fn from(domain: Budget) -> Self {
        Self {
            id: domain.id.value(),
            user_id: domain.user_id.value(),
            category_id: domain.category_id.value(),
            currency_id: domain.money.currency_id().value(),
            amount: domain.money.amount().to_string(),
            period: domain.period.as_str().to_string(),
            start_date: domain.start_date,
            end_date: domain.end_date,
            created_at: domain.created_at,
        }
    }
}
