//! Currency domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::ids::{CurrencyId, UserId};
use crate::ownership::Ownership;

/// Domain model representing a currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub id: CurrencyId,
    pub ownership: Ownership,
    pub code: String,
    pub name: String,
    pub symbol: String,
    pub created_at: NaiveDateTime,
}

impl Currency {
    pub fn is_default(&self) -> bool {
        self.ownership.is_default()
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.ownership.owner()
    }

    /// Replaces code, name and symbol. Each field is validated on its own.
    pub fn apply(&mut self, code: &str, name: &str, symbol: &str) -> Result<()> {
        let fields = CurrencyFields::parse(code, name, symbol)?;
        self.code = fields.code;
        self.name = fields.name;
        self.symbol = fields.symbol;
        Ok(())
    }
}

/// Input model for creating a new currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCurrency {
    pub ownership: Ownership,
    pub code: String,
    pub name: String,
    pub symbol: String,
}

impl NewCurrency {
    pub fn owned_by(user_id: UserId, code: &str, name: &str, symbol: &str) -> Result<Self> {
        let fields = CurrencyFields::parse(code, name, symbol)?;
        Ok(Self {
            ownership: Ownership::Owned(user_id),
            code: fields.code,
            name: fields.name,
            symbol: fields.symbol,
        })
    }
}

struct CurrencyFields {
    code: String,
    name: String,
    symbol: String,
}

impl CurrencyFields {
    fn parse(code: &str, name: &str, symbol: &str) -> Result<Self> {
        Ok(Self {
            code: required("code", code)?.to_ascii_uppercase(),
            name: required("name", name)?,
            symbol: required("symbol", symbol)?,
        })
    }
}

fn required(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_input(format!(
            "Currency {field} cannot be empty"
        )));
    }
    Ok(trimmed.to_string())
}

/// Normalized form used for per-user code uniqueness checks.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
