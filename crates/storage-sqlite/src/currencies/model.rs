//! Database models for currencies.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use tally_core::currencies::{Currency, NewCurrency};
use tally_core::{CurrencyId, Ownership, UserId};

/// Database model for currencies. A NULL `user_id` marks a default currency.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::currencies)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct CurrencyDB {
    pub id: i64,
    pub user_id: Option<i64>,
    pub code: String,
    pub name: String,
    pub symbol: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::currencies)]
#[serde(rename_all = "camelCase")]
pub struct NewCurrencyDB {
    pub user_id: Option<i64>,
    pub code: String,
    pub name: String,
    pub symbol: String,
    pub created_at: NaiveDateTime,
}

/// A user's preferred currency.
#[derive(Insertable, Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::user_default_currencies)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDefaultCurrencyDB {
    pub user_id: i64,
    pub currency_id: i64,
    pub updated_at: NaiveDateTime,
}

impl From<CurrencyDB> for Currency {
    fn from(db: CurrencyDB) -> Self {
        Self {
            id: CurrencyId::new(db.id),
            ownership: Ownership::from_owner(db.user_id.map(UserId::new)),
            code: db.code,
            name: db.name,
            symbol: db.symbol,
            created_at: db.created_at,
        }
    }
}

impl From<NewCurrency> for NewCurrencyDB {
    fn from(domain: NewCurrency) -> Self {
        Self {
            user_id: domain.ownership.owner().map(UserId::value),
            code: domain.code,
            name: domain.name,
            symbol: domain.symbol,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
