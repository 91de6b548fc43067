//! Database models for categories.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::parse_column;
use tally_core::categories::{Category, NewCategory};
use tally_core::{CategoryId, Error, Ownership, UserId};

/// Database model for categories. A NULL `user_id` marks a default category.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct CategoryDB {
    pub id: i64,
    pub user_id: Option<i64>,
    pub name: String,
    pub color: String,
    pub category_type: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::categories)]
#[serde(rename_all = "camelCase")]
pub struct NewCategoryDB {
    pub user_id: Option<i64>,
    pub name: String,
    pub color: String,
    pub category_type: String,
    pub created_at: NaiveDateTime,
}

impl TryFrom<CategoryDB> for Category {
    type Error = Error;

    fn try_from(db: CategoryDB) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CategoryId::new(db.id),
            ownership: Ownership::from_owner(db.user_id.map(UserId::new)),
            category_type: parse_column("categories", &db.category_type)?,
            name: db.name,
            color: db.color,
            created_at: db.created_at,
        })
    }
}

impl From<NewCategory> for NewCategoryDB {
    fn from(domain: NewCategory) -> Self {
        Self {
            user_id: domain.ownership.owner().map(UserId::value),
            name: domain.name,
            color: domain.color,
            category_type: domain.category_type.as_str().to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
