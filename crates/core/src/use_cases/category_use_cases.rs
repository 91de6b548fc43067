use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::responses::CategoryResponse;
use super::UseCase;
use crate::categories::CategoryServiceTrait;
use crate::entry_type::EntryType;
use crate::errors::Result;
use crate::ids::{CategoryId, UserId};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    #[serde(skip)]
    pub user_id: i64,
    pub name: String,
    pub color: Option<String>,
    #[serde(rename = "type")]
    pub category_type: String,
}

pub struct CreateCategory {
    categories: Arc<dyn CategoryServiceTrait>,
}

impl CreateCategory {
    pub fn new(categories: Arc<dyn CategoryServiceTrait>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl UseCase for CreateCategory {
    type Request = CreateCategoryRequest;
    type Response = CategoryResponse;

    async fn execute(&self, request: CreateCategoryRequest) -> Result<CategoryResponse> {
        let category_type: EntryType = request.category_type.parse()?;
        let category = self
            .categories
            .create_category(
                UserId::new(request.user_id),
                &request.name,
                request.color.as_deref(),
                category_type,
            )
            .await?;
        Ok(category.into())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCategoriesRequest {
    #[serde(skip)]
    pub user_id: i64,
    /// `income` or `expense`. Absent lists every category visible to the user.
    #[serde(rename = "type")]
    pub category_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListCategoriesResponse {
    pub categories: Vec<CategoryResponse>,
}

pub struct ListCategories {
    categories: Arc<dyn CategoryServiceTrait>,
}

impl ListCategories {
    pub fn new(categories: Arc<dyn CategoryServiceTrait>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl UseCase for ListCategories {
    type Request = ListCategoriesRequest;
    type Response = ListCategoriesResponse;

    async fn execute(&self, request: ListCategoriesRequest) -> Result<ListCategoriesResponse> {
        let user_id = UserId::new(request.user_id);
        let categories = match request.category_type.as_deref().map(str::trim) {
            Some(kind) if !kind.is_empty() => self
                .categories
                .get_categories_by_user_and_type(user_id, kind.parse()?)?,
            _ => self.categories.get_categories_by_user(user_id)?,
        };
        Ok(ListCategoriesResponse {
            categories: categories.into_iter().map(CategoryResponse::from).collect(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    #[serde(skip)]
    pub user_id: i64,
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub color: Option<String>,
    #[serde(rename = "type")]
    pub category_type: String,
}

pub struct UpdateCategory {
    categories: Arc<dyn CategoryServiceTrait>,
}

impl UpdateCategory {
    pub fn new(categories: Arc<dyn CategoryServiceTrait>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl UseCase for UpdateCategory {
    type Request = UpdateCategoryRequest;
    type Response = CategoryResponse;

    async fn execute(&self, request: UpdateCategoryRequest) -> Result<CategoryResponse> {
        let category_type: EntryType = request.category_type.parse()?;
        let category = self
            .categories
            .update_category(
                CategoryId::new(request.id),
                UserId::new(request.user_id),
                &request.name,
                request.color.as_deref(),
                category_type,
            )
            .await?;
        Ok(category.into())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCategoryRequest {
    #[serde(skip)]
    pub user_id: i64,
    pub id: i64,
}

pub struct DeleteCategory {
    categories: Arc<dyn CategoryServiceTrait>,
}

impl DeleteCategory {
    pub fn new(categories: Arc<dyn CategoryServiceTrait>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl UseCase for DeleteCategory {
    type Request = DeleteCategoryRequest;
    type Response = ();

    async fn execute(&self, request: DeleteCategoryRequest) -> Result<()> {
        self.categories
            .delete_category(CategoryId::new(request.id), UserId::new(request.user_id))
            .await
    }
}
