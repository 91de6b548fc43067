//! Category repository and service traits.

use async_trait::async_trait;

use super::categories_model::{Category, NewCategory};
use crate::entry_type::EntryType;
use crate::errors::Result;
use crate::ids::{CategoryId, UserId};

/// Trait defining the contract for Category repository operations.
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    async fn create(&self, new_category: NewCategory) -> Result<Category>;

    async fn update(&self, category: Category) -> Result<Category>;

    /// Returns the number of deleted records.
    async fn delete(&self, category_id: CategoryId) -> Result<usize>;

    fn find_by_id(&self, category_id: CategoryId) -> Result<Option<Category>>;

    /// Categories owned by `user_id`. Defaults are not included.
    fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<Category>>;

    fn find_default_categories(&self) -> Result<Vec<Category>>;

    /// Categories of one type visible to `user_id`: the user's own plus the
    /// defaults, filtered by the storage layer.
    fn find_by_user_id_and_type(
        &self,
        user_id: UserId,
        category_type: EntryType,
    ) -> Result<Vec<Category>>;
}

/// Trait defining the contract for Category service operations.
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    async fn create_category(
        &self,
        user_id: UserId,
        name: &str,
        color: Option<&str>,
        category_type: EntryType,
    ) -> Result<Category>;

    /// Loads a category the user may reference (default or owned).
    fn get_category(&self, category_id: CategoryId, user_id: UserId) -> Result<Category>;

    /// Defaults first, then the user's own categories.
    fn get_categories_by_user(&self, user_id: UserId) -> Result<Vec<Category>>;

    fn get_categories_by_user_and_type(
        &self,
        user_id: UserId,
        category_type: EntryType,
    ) -> Result<Vec<Category>>;

    /// Updates name and color. `category_type` is accepted for interface
    /// compatibility but not applied.
    async fn update_category(
        &self,
        category_id: CategoryId,
        user_id: UserId,
        name: &str,
        color: Option<&str>,
        category_type: EntryType,
    ) -> Result<Category>;

    async fn delete_category(&self, category_id: CategoryId, user_id: UserId) -> Result<()>;
}
