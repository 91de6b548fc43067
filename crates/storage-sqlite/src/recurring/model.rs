//! Database models for recurring transactions.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{money_from_row, parse_column};
use tally_core::recurring::{NewRecurringTransaction, RecurringTransaction};
use tally_core::{CategoryId, Error, RecurringTransactionId, UserId};

const TABLE: &str = "recurring_transactions";

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
#[diesel(table_name = crate::schema::recurring_transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct RecurringTransactionDB {
    pub id: i64,
    pub user_id: i64,
    pub category_id: i64,
    pub currency_id: i64,
    pub amount: String,
    pub description: String,
    pub transaction_type: String,
    pub frequency: String,
    pub next_due_date: NaiveDate,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::recurring_transactions)]
#[serde(rename_all = "camelCase")]
pub struct NewRecurringTransactionDB {
    pub user_id: i64,
    pub category_id: i64,
    pub currency_id: i64,
    pub amount: String,
    pub description: String,
    pub transaction_type: String,
    pub frequency: String,
    pub next_due_date: NaiveDate,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl TryFrom<RecurringTransactionDB> for RecurringTransaction {
    type Error = Error;

    fn try_from(db: RecurringTransactionDB) -> Result<Self, Self::Error> {
        Ok(Self {
            id: RecurringTransactionId::new(db.id),
            user_id: UserId::new(db.user_id),
            category_id: CategoryId::new(db.category_id),
            money: money_from_row(TABLE, &db.amount, db.currency_id)?,
            transaction_type: parse_column(TABLE, &db.transaction_type)?,
            frequency: parse_column(TABLE, &db.frequency)?,
            description: db.description,
            next_due_date: db.next_due_date,
            is_active: db.is_active,
            created_at: db.created_at,
        })
    }
}

impl From<NewRecurringTransaction> for NewRecurringTransactionDB {
    fn from(domain: NewRecurringTransaction) -> Self {
        Self {
            user_id: domain.user_id.value(),
            category_id: domain.category_id.value(),
            currency_id: domain.money.currency_id().value(),
            amount: domain.money.amount().to_string(),
            description: domain.description,
            transaction_type: domain.transaction_type.as_str().to_string(),
            frequency: domain.frequency.as_str().to_string(),
            next_due_date: domain.next_due_date,
            is_active: domain.is_active,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

impl From<RecurringTransaction> for RecurringTransactionDB {
    fn from(domain: RecurringTransaction) -> Self {
        Self {
            id: domain.id.value(),
            user_id: domain.user_id.value(),
            category_id: domain.category_id.value(),
            currency_id: domain.money.currency_id().value(),
            amount: domain.money.amount().to_string(),
            description: domain.description,
            transaction_type: domain.transaction_type.as_str().to_string(),
            frequency: domain.frequency.as_str().to_string(),
            next_due_date: domain.next_due_date,
            is_active: domain.is_active,
            created_at: domain.created_at,
        }
    }
}
