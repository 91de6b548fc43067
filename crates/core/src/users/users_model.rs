//! User account models. Only the server's authentication flow reads these;
//! the rest of the core works with bare `UserId`s.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::ids::UserId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    /// Emails are trimmed and lower-cased so lookups are case-insensitive.
    pub fn new(email: &str, password_hash: String) -> Result<Self> {
        let email = normalize_email(email);
        if email.is_empty() || !email.contains('@') {
            return Err(Error::invalid_input("A valid email address is required"));
        }
        Ok(Self {
            email,
            password_hash,
        })
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}
