//! Ownership of shareable resources (categories and currencies).

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::ids::UserId;

/// Who a category or currency belongs to.
///
/// `SystemDefault` resources are seeded for everyone: any user may reference
/// them, nobody may change or delete them through the normal paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "userId")]
pub enum Ownership {
    SystemDefault,
    Owned(UserId),
}

impl Ownership {
    /// Storage keeps ownership as a nullable owner column.
    pub fn from_owner(owner: Option<UserId>) -> Self {
        match owner {
            Some(user_id) => Ownership::Owned(user_id),
            None => Ownership::SystemDefault,
        }
    }

    pub fn owner(&self) -> Option<UserId> {
        match self {
            Ownership::Owned(user_id) => Some(*user_id),
            Ownership::SystemDefault => None,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Ownership::SystemDefault)
    }

    /// True when `user` may reference the resource.
    pub fn can_access(&self, user: UserId) -> bool {
        match self {
            Ownership::SystemDefault => true,
            Ownership::Owned(owner) => *owner == user,
        }
    }

    /// True when `user` may update or delete the resource.
    pub fn can_mutate(&self, user: UserId) -> bool {
        match self {
            Ownership::SystemDefault => false,
            Ownership::Owned(owner) => *owner == user,
        }
    }

    pub fn ensure_accessible(&self, user: UserId, what: &str) -> Result<()> {
        if self.can_access(user) {
            Ok(())
        } else {
            Err(Error::forbidden(format!("{what} belongs to another user")))
        }
    }

    pub fn ensure_mutable(&self, user: UserId, what: &str) -> Result<()> {
        match self {
            Ownership::SystemDefault => Err(Error::forbidden(format!(
                "default {what} cannot be modified"
            ))),
            Ownership::Owned(_) => self.ensure_accessible(user, what),
        }
    }
}

/// Ownership check for entities that always carry an owning user.
pub fn ensure_owner(owner: UserId, user: UserId, what: &str) -> Result<()> {
    if owner == user {
        Ok(())
    } else {
        Err(Error::forbidden(format!("{what} belongs to another user")))
    }
}
