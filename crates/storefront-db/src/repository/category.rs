//! # Category Repository
//!
//! Menu sections. The storefront only reads active ones, ordered the way
//! the menu shows them.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use storefront_core::validation::{validate_id, validate_name};
use storefront_core::{Category, CoreError};

#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        CategoryRepository { pool }
    }

    /// Active categories by `sort_order`, ties broken by id.
    pub async fn list_active(&self) -> DbResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, icon, sort_order, active
            FROM categories
            WHERE active = 1
            ORDER BY sort_order, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = categories.len(), "Loaded active categories");
        Ok(categories)
    }

    /// Inserts a category.
    ///
    /// ## Returns
    /// * `Err(DbError::UniqueViolation)` - id already exists
    /// * `Err(DbError::InvalidRecord)` - blank id or name
    pub async fn insert(&self, category: &Category) -> DbResult<()> {
        validate_id("category.id", &category.id).map_err(CoreError::from)?;
        validate_name("category.name", &category.name).map_err(CoreError::from)?;

        debug!(id = %category.id, "Inserting category");

        sqlx::query(
            r#"
            INSERT INTO categories (id, name, icon, sort_order, active)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&category.id)
        .bind(&category.name)
        .bind(&category.icon)
        .bind(category.sort_order)
        .bind(category.active)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
