//! Database models for users.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use tally_core::users::{NewUser, User};
use tally_core::UserId;

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUserDB {
    pub email: String,
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        Self {
            id: UserId::new(db.id),
            email: db.email,
            password_hash: db.password_hash,
            created_at: db.created_at,
        }
    }
}

impl From<NewUser> for NewUserDB {
    fn from(domain: NewUser) -> Self {
        Self {
            email: domain.email,
            password_hash: domain.password_hash,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
