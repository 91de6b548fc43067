//! Category domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CATEGORY_COLOR;
use crate::entry_type::EntryType;
use crate::errors::{Error, Result};
use crate::ids::{CategoryId, UserId};
use crate::ownership::Ownership;

/// Domain model representing a transaction category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub ownership: Ownership,
    pub name: String,
    pub color: String,
    #[serde(rename = "type")]
    pub category_type: EntryType,
    pub created_at: NaiveDateTime,
}

impl Category {
    pub fn is_default(&self) -> bool {
        self.ownership.is_default()
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.ownership.owner()
    }

    /// Fails unless entries of `entry_type` may be filed under this category.
    pub fn ensure_accepts(&self, entry_type: EntryType) -> Result<()> {
        if self.category_type != entry_type {
            return Err(Error::invalid_input(format!(
                "Category '{}' is an {} category and cannot hold an {} entry",
                self.name, self.category_type, entry_type
            )));
        }
        Ok(())
    }

    /// Replaces name and color. The category type is left untouched.
    pub fn rename(&mut self, name: &str, color: Option<&str>) -> Result<()> {
        self.name = validate_name(name)?;
        self.color = normalize_color(color);
        Ok(())
    }
}

/// Input model for creating a new category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub ownership: Ownership,
    pub name: String,
    pub color: String,
    #[serde(rename = "type")]
    pub category_type: EntryType,
}

impl NewCategory {
    /// A category owned by `user_id`. Blank colors fall back to the default color.
    pub fn owned_by(
        user_id: UserId,
        name: &str,
        color: Option<&str>,
        category_type: EntryType,
    ) -> Result<Self> {
        Ok(Self {
            ownership: Ownership::Owned(user_id),
            name: validate_name(name)?,
            color: normalize_color(color),
            category_type,
        })
    }
}

fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_input("Category name cannot be empty"));
    }
    Ok(trimmed.to_string())
}

fn normalize_color(color: Option<&str>) -> String {
    match color.map(str::trim) {
        Some(c) if !c.is_empty() => c.to_string(),
        _ => DEFAULT_CATEGORY_COLOR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category_defaults_color() {
        let c = NewCategory::owned_by(UserId::new(1), "Food", None, EntryType::Expense).unwrap();
        assert_eq!(c.color, DEFAULT_CATEGORY_COLOR);
        let c = NewCategory::owned_by(UserId::new(1), "Food", Some("  "), EntryType::Expense)
            .unwrap();
        assert_eq!(c.color, DEFAULT_CATEGORY_COLOR);
        let c = NewCategory::owned_by(UserId::new(1), " Food ", Some("#FF0000"), EntryType::Expense)
            .unwrap();
        assert_eq!(c.color, "#FF0000");
        assert_eq!(c.name, "Food");
        assert_eq!(c.ownership, Ownership::Owned(UserId::new(1)));
    }

    #[test]
    fn test_new_category_rejects_blank_name() {
        let err = NewCategory::owned_by(UserId::new(1), "   ", None, EntryType::Income);
        assert!(matches!(err, Err(Error::Validation(_))));
    }
}
