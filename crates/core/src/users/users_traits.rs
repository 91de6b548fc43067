use async_trait::async_trait;

use super::users_model::{NewUser, User};
use crate::errors::Result;
use crate::ids::UserId;

/// Trait defining the contract for User repository operations.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// Fails with `Error::Conflict` when the email is already registered.
    async fn create(&self, new_user: NewUser) -> Result<User>;

    fn find_by_id(&self, user_id: UserId) -> Result<Option<User>>;

    /// Looks up by normalized email.
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
}
