//! Database models for transactions.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{money_from_row, parse_column};
use tally_core::transactions::{NewTransaction, Transaction};
use tally_core::{CategoryId, Error, TransactionId, UserId};

const TABLE: &str = "transactions";

/// Database model for transactions. Amounts are stored as decimal text.
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
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct TransactionDB {
    pub id: i64,
    pub user_id: i64,
    pub category_id: i64,
    pub currency_id: i64,
    pub amount: String,
    pub description: String,
    pub date: NaiveDate,
    pub transaction_type: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
#[serde(rename_all = "camelCase")]
pub struct NewTransactionDB {
    pub user_id: i64,
    pub category_id: i64,
    pub currency_id: i64,
    pub amount: String,
    pub description: String,
    pub date: NaiveDate,
    pub transaction_type: String,
    pub created_at: NaiveDateTime,
}

impl TryFrom<TransactionDB> for Transaction {
    type Error = Error;

    fn try_from(db: TransactionDB) -> Result<Self, Self::Error> {
        Ok(Self {
            id: TransactionId::new(db.id),
            user_id: UserId::new(db.user_id),
            category_id: CategoryId::new(db.category_id),
            money: money_from_row(TABLE, &db.amount, db.currency_id)?,
            transaction_type: parse_column(TABLE, &db.transaction_type)?,
            description: db.description,
            date: db.date,
            created_at: db.created_at,
        })
    }
}

impl From<NewTransaction> for NewTransactionDB {
    fn from(domain: NewTransaction) -> Self {
        Self {
            user_id: domain.user_id.value(),
            category_id: domain.category_id.value(),
            currency_id: domain.money.currency_id().value(),
            amount: domain.money.amount().to_string(),
            description: domain.description,
            date: domain.date,
            transaction_type: domain.transaction_type.as_str().to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

impl From<Transaction> for TransactionDB {
    fn from(domain: Transaction) -> Self {
        Self {
            id: domain.id.value(),
            user_id: domain.user_id.value(),
            category_id: domain.category_id.value(),
            currency_id: domain.money.currency_id().value(),
            amount: domain.money.amount().to_string(),
            description: domain.description,
            date: domain.date,
            transaction_type: domain.transaction_type.as_str().to_string(),
            created_at: domain.created_at,
        }
    }
}
