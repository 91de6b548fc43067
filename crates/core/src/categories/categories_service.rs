use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::categories_model::{Category, NewCategory};
use super::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::entry_type::EntryType;
use crate::errors::{Error, Result};
use crate::ids::{CategoryId, UserId};

/// Service for managing categories and their ownership rules.
pub struct CategoryService {
    repository: Arc<dyn CategoryRepositoryTrait>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn load(&self, category_id: CategoryId) -> Result<Category> {
        find_category(self.repository.as_ref(), category_id)
    }
}

fn find_category(
    repository: &dyn CategoryRepositoryTrait,
    category_id: CategoryId,
) -> Result<Category> {
    repository
        .find_by_id(category_id)?
        .ok_or_else(|| Error::not_found(format!("Category {category_id}")))
}

/// Loads a category that `user_id` may reference: a default or one they own.
pub fn load_accessible_category(
    repository: &dyn CategoryRepositoryTrait,
    category_id: CategoryId,
    user_id: UserId,
) -> Result<Category> {
    let category = find_category(repository, category_id)?;
    category.ownership.ensure_accessible(user_id, "category")?;
    Ok(category)
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    async fn create_category(
        &self,
        user_id: UserId,
        name: &str,
        color: Option<&str>,
        category_type: EntryType,
    ) -> Result<Category> {
        let new_category = NewCategory::owned_by(user_id, name, color, category_type)?;
        debug!(
            "Creating {} category '{}' for user {}",
            category_type, new_category.name, user_id
        );
        self.repository.create(new_category).await
    }

    fn get_category(&self, category_id: CategoryId, user_id: UserId) -> Result<Category> {
        load_accessible_category(self.repository.as_ref(), category_id, user_id)
    }

    fn get_categories_by_user(&self, user_id: UserId) -> Result<Vec<Category>> {
        let mut categories = self.repository.find_default_categories()?;
        categories.extend(self.repository.find_by_user_id(user_id)?);
        Ok(categories)
    }

    fn get_categories_by_user_and_type(
        &self,
        user_id: UserId,
        category_type: EntryType,
    ) -> Result<Vec<Category>> {
        self.repository
            .find_by_user_id_and_type(user_id, category_type)
    }

    async fn update_category(
        &self,
        category_id: CategoryId,
        user_id: UserId,
        name: &str,
        color: Option<&str>,
        _category_type: EntryType,
    ) -> Result<Category> {
        let mut category = self.load(category_id)?;
        category.ownership.ensure_mutable(user_id, "category")?;
        category.rename(name, color)?;
        self.repository.update(category).await
    }

    async fn delete_category(&self, category_id: CategoryId, user_id: UserId) -> Result<()> {
        let category = self.load(category_id)?;
        category.ownership.ensure_mutable(user_id, "category")?;
        debug!("Deleting category {} for user {}", category_id, user_id);
        self.repository.delete(category_id).await?;
        Ok(())
    }
}
