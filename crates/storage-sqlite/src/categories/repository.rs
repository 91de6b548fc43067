use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use super::model::{CategoryDB, NewCategoryDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::categories;
use crate::schema::categories::dsl::*;
use tally_core::categories::{Category, CategoryRepositoryTrait, NewCategory};
use tally_core::{CategoryId, EntryType, Result, UserId};

pub struct CategoryRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CategoryRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        CategoryRepository { pool, writer }
    }

    fn load_rows(rows: Vec<CategoryDB>) -> Result<Vec<Category>> {
        rows.into_iter().map(Category::try_from).collect()
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    async fn create(&self, new_category: NewCategory) -> Result<Category> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Category> {
                let new_category_db: NewCategoryDB = new_category.into();
                let result_db = diesel::insert_into(categories::table)
                    .values(&new_category_db)
                    .returning(CategoryDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Category::try_from(result_db)
            })
            .await
    }

    async fn update(&self, category: Category) -> Result<Category> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Category> {
                let result_db = diesel::update(categories.find(category.id.value()))
                    .set((
                        name.eq(&category.name),
                        color.eq(&category.color),
                        category_type.eq(category.category_type.as_str()),
                    ))
                    .returning(CategoryDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Category::try_from(result_db)
            })
            .await
    }

    async fn delete(&self, category_id: CategoryId) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(categories.find(category_id.value()))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    fn find_by_id(&self, category_id: CategoryId) -> Result<Option<Category>> {
        let mut conn = get_connection(&self.pool)?;
        categories
            .find(category_id.value())
            .select(CategoryDB::as_select())
            .first::<CategoryDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .map(Category::try_from)
            .transpose()
    }

    fn find_by_user_id(&self, owner: UserId) -> Result<Vec<Category>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = categories
            .filter(user_id.eq(owner.value()))
            .order(id.asc())
            .select(CategoryDB::as_select())
            .load::<CategoryDB>(&mut conn)
            .map_err(StorageError::from)?;
        Self::load_rows(rows)
    }

    fn find_default_categories(&self) -> Result<Vec<Category>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = categories
            .filter(user_id.is_null())
            .order(id.asc())
            .select(CategoryDB::as_select())
            .load::<CategoryDB>(&mut conn)
            .map_err(StorageError::from)?;
        Self::load_rows(rows)
    }

    fn find_by_user_id_and_type(
        &self,
        owner: UserId,
        entry_type: EntryType,
    ) -> Result<Vec<Category>> {
        let mut conn = get_connection(&self.pool)?;
        // NULL owners sort first, so defaults lead the list.
        let rows = categories
            .filter(category_type.eq(entry_type.as_str()))
            .filter(user_id.eq(owner.value()).or(user_id.is_null()))
            .order((user_id.asc(), id.asc()))
            .select(CategoryDB::as_select())
            .load::<CategoryDB>(&mut conn)
            .map_err(StorageError::from)?;
        Self::load_rows(rows)
    }
}
