//! # Menu Repository
//!
//! Menu items with their variations and add-ons.
//!
//! ## Assembly
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Loading the catalog                                  │
//! │                                                                         │
//! │  menu_items (rowid order)     variations           add_ons              │
//! │  ┌───────────────────┐        ┌──────────────┐     ┌──────────────┐     │
//! │  │ latte             │◄───────│ latte/small  │     │ latte/oat    │     │
//! │  │ mocha             │        │ latte/large  │     │ latte/shot   │     │
//! │  │ croissant         │        └──────────────┘     └──────────────┘     │
//! │  └───────────────────┘              │ by position        │ by position  │
//! │           │                         ▼                    ▼              │
//! │           └──────────────► MenuItem { variations, add_ons }             │
//! │                                                                         │
//! │  Three queries per load, joined in memory.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Variations and add-ons come back in the order they were inserted, which
//! is the order the customization dialog lists them in.

use std::collections::HashMap;

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use storefront_core::validation::validate_menu_item;
use storefront_core::{AddOn, MenuItem, Money, Variation};

// =============================================================================
// Row Types
// =============================================================================

#[derive(Debug, sqlx::FromRow)]
struct MenuItemRow {
    id: String,
    name: String,
    description: String,
    base_price: Money,
    category: String,
    popular: bool,
    available: bool,
    image_url: Option<String>,
    discount_price: Option<Money>,
    discount_active: bool,
}

#[derive(Debug, sqlx::FromRow)]
struct VariationRow {
    menu_item_id: String,
    id: String,
    name: String,
    price: Money,
}

#[derive(Debug, sqlx::FromRow)]
struct AddOnRow {
    menu_item_id: String,
    id: String,
    name: String,
    category: String,
    price: Money,
}

impl MenuItemRow {
    fn into_menu_item(self, variations: Vec<Variation>, add_ons: Vec<AddOn>) -> MenuItem {
        MenuItem {
            id: self.id,
            name: self.name,
            description: self.description,
            base_price: self.base_price,
            category: self.category,
            popular: self.popular,
            available: self.available,
            image: self.image_url,
            discount_price: self.discount_price,
            on_discount: self.discount_active,
            variations,
            add_ons,
        }
    }
}

impl From<VariationRow> for Variation {
    fn from(row: VariationRow) -> Self {
        Variation {
            id: row.id,
            name: row.name,
            price: row.price,
        }
    }
}

impl From<AddOnRow> for AddOn {
    fn from(row: AddOnRow) -> Self {
        AddOn {
            id: row.id,
            name: row.name,
            category: row.category,
            price: row.price,
        }
    }
}

const ITEM_COLUMNS: &str = r#"
    id, name, description, base_price, category, popular, available,
    image_url, discount_price, discount_active
"#;

// =============================================================================
// Repository
// =============================================================================

/// Repository for menu items.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.menu();
/// let items = repo.list_all().await?;
/// let latte = repo.get_by_id("latte").await?;
/// ```
#[derive(Debug, Clone)]
pub struct MenuRepository {
    pool: SqlitePool,
}

impl MenuRepository {
    pub fn new(pool: SqlitePool) -> Self {
        MenuRepository { pool }
    }

    /// Loads the whole catalog, including unavailable items.
    ///
    /// Items come back in insertion order.
    pub async fn list_all(&self) -> DbResult<Vec<MenuItem>> {
        let rows = sqlx::query_as::<_, MenuItemRow>(&format!(
            "SELECT {ITEM_COLUMNS} FROM menu_items ORDER BY rowid"
        ))
        .fetch_all(&self.pool)
        .await?;

        let variation_rows = sqlx::query_as::<_, VariationRow>(
            r#"
            SELECT menu_item_id, id, name, price
            FROM variations
            ORDER BY menu_item_id, position
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let add_on_rows = sqlx::query_as::<_, AddOnRow>(
            r#"
            SELECT menu_item_id, id, name, category, price
            FROM add_ons
            ORDER BY menu_item_id, position
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut variations: HashMap<String, Vec<Variation>> = HashMap::new();
        for row in variation_rows {
            variations
                .entry(row.menu_item_id.clone())
                .or_default()
                .push(row.into());
        }

        let mut add_ons: HashMap<String, Vec<AddOn>> = HashMap::new();
        for row in add_on_rows {
            add_ons
                .entry(row.menu_item_id.clone())
                .or_default()
                .push(row.into());
        }

        let items: Vec<MenuItem> = rows
            .into_iter()
            .map(|row| {
                let item_variations = variations.remove(&row.id).unwrap_or_default();
                let item_add_ons = add_ons.remove(&row.id).unwrap_or_default();
                row.into_menu_item(item_variations, item_add_ons)
            })
            .collect();

        debug!(count = items.len(), "Loaded menu items");
        Ok(items)
    }

    /// Gets one item with its options.
    ///
    /// ## Returns
    /// * `Ok(Some(MenuItem))` - Item found
    /// * `Ok(None)` - No item with that id
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<MenuItem>> {
        let row = sqlx::query_as::<_, MenuItemRow>(&format!(
            "SELECT {ITEM_COLUMNS} FROM menu_items WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let variations = sqlx::query_as::<_, VariationRow>(
            r#"
            SELECT menu_item_id, id, name, price
            FROM variations
            WHERE menu_item_id = ?1
            ORDER BY position
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Variation::from)
        .collect();

        let add_ons = sqlx::query_as::<_, AddOnRow>(
            r#"
            SELECT menu_item_id, id, name, category, price
            FROM add_ons
            WHERE menu_item_id = ?1
            ORDER BY position
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(AddOn::from)
        .collect();

        Ok(Some(row.into_menu_item(variations, add_ons)))
    }

    /// Inserts an item with its variations and add-ons.
    ///
    /// The record is validated first; everything is written in one
    /// transaction so a failed child insert leaves no partial item behind.
    ///
    /// ## Returns
    /// * `Err(DbError::InvalidRecord)` - record failed validation
    /// * `Err(DbError::UniqueViolation)` - item id already exists
    pub async fn insert(&self, item: &MenuItem) -> DbResult<()> {
        validate_menu_item(item)?;

        debug!(
            id = %item.id,
            variations = item.variations.len(),
            add_ons = item.add_ons.len(),
            "Inserting menu item"
        );

        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO menu_items (
                id, name, description, base_price, category,
                popular, available, image_url,
                discount_price, discount_active,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?11)
            "#,
        )
        .bind(&item.id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.base_price)
        .bind(&item.category)
        .bind(item.popular)
        .bind(item.available)
        .bind(&item.image)
        .bind(item.discount_price)
        .bind(item.on_discount)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        for (position, variation) in item.variations.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO variations (menu_item_id, id, name, price, position)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
            )
            .bind(&item.id)
            .bind(&variation.id)
            .bind(&variation.name)
            .bind(variation.price)
            .bind(position as i64)
            .execute(&mut *tx)
            .await?;
        }

        for (position, add_on) in item.add_ons.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO add_ons (menu_item_id, id, name, category, price, position)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
            )
            .bind(&item.id)
            .bind(&add_on.id)
            .bind(&add_on.name)
            .bind(&add_on.category)
            .bind(add_on.price)
            .bind(position as i64)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Number of stored items.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM menu_items")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::repository::test_db;

    fn latte() -> MenuItem {
        let mut item = MenuItem::new("latte", "Café Latte", "coffee", Money::from_centavos(10000));
        item.description = "Espresso and steamed milk".to_string();
        item.popular = true;
        item.image = Some("https://cdn.example.com/latte.jpg".to_string());
        item.discount_price = Some(Money::from_centavos(8000));
        item.on_discount = true;
        item.variations = vec![
            Variation {
                id: "small".to_string(),
                name: "Small".to_string(),
                price: Money::from_centavos(-1000),
            },
            Variation {
                id: "large".to_string(),
                name: "Large".to_string(),
                price: Money::from_centavos(2000),
            },
        ];
        item.add_ons = vec![
            AddOn {
                id: "shot".to_string(),
                name: "Extra Shot".to_string(),
                category: "Coffee".to_string(),
                price: Money::from_centavos(2500),
            },
            AddOn {
                id: "oat".to_string(),
                name: "Oat Milk".to_string(),
                category: "Milk".to_string(),
                price: Money::from_centavos(3000),
            },
        ];
        item
    }

    #[tokio::test]
    async fn test_insert_and_get_round_trip() {
        let db = test_db().await;
        let repo = db.menu();

        let item = latte();
        repo.insert(&item).await.unwrap();

        let loaded = repo.get_by_id("latte").await.unwrap().unwrap();
        assert_eq!(loaded, item);
        assert_eq!(loaded.variations[0].id, "small");
        assert_eq!(loaded.add_ons[1].id, "oat");
        assert_eq!(loaded.effective_price().centavos(), 8000);

        assert!(repo.get_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_keeps_insertion_order() {
        let db = test_db().await;
        let repo = db.menu();

        repo.insert(&latte()).await.unwrap();
        repo.insert(&MenuItem::new(
            "croissant",
            "Croissant",
            "pastries",
            Money::from_centavos(8500),
        ))
        .await
        .unwrap();
        let mut sold_out = MenuItem::new("mocha", "Mocha", "coffee", Money::from_centavos(13000));
        sold_out.available = false;
        repo.insert(&sold_out).await.unwrap();

        let items = repo.list_all().await.unwrap();
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["latte", "croissant", "mocha"]);
        assert_eq!(items[0].variations.len(), 2);
        assert!(items[1].variations.is_empty());
        assert!(!items[2].available);
        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_invalid_discount_rejected_before_write() {
        let db = test_db().await;
        let repo = db.menu();

        let mut item = latte();
        item.discount_price = Some(Money::from_centavos(12000));

        let err = repo.insert(&item).await.unwrap_err();
        assert!(matches!(err, DbError::InvalidRecord(_)));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_item_rejected() {
        let db = test_db().await;
        let repo = db.menu();

        repo.insert(&latte()).await.unwrap();
        let err = repo.insert(&latte()).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
