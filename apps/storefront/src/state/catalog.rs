//! # Catalog State
//!
//! The menu snapshot the storefront renders and prices from.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  startup / refresh_catalog                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  db.categories().list_active() + db.menu().list_all()                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RwLock<CatalogSnapshot>  ◄── replaced whole, never edited in place    │
//! │       │                                                                 │
//! │       ├──► get_menu      (sections)                                     │
//! │       └──► add_to_cart   (item lookup)                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Readers get clones, so a refresh never changes a snapshot a command is
//! already holding. Cart lines keep their own frozen prices either way.

use std::sync::{Arc, RwLock, RwLockReadGuard};

use serde::{Deserialize, Serialize};
use storefront_core::menu::menu_sections;
use storefront_core::{Category, CoreError, CoreResult, MenuItem, MenuSection};
use storefront_db::{Database, DbResult};
use tracing::{info, warn};

/// Categories and items loaded together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    pub categories: Vec<Category>,
    pub items: Vec<MenuItem>,
}

impl CatalogSnapshot {
    pub fn item(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn sections(&self) -> Vec<MenuSection> {
        menu_sections(&self.categories, &self.items)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    snapshot: Arc<RwLock<CatalogSnapshot>>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps in a new snapshot.
    pub fn replace(&self, categories: Vec<Category>, items: Vec<MenuItem>) {
        let mut snapshot = self.snapshot.write().unwrap_or_else(|poisoned| {
            warn!("Catalog lock poisoned, recovering");
            poisoned.into_inner()
        });
        *snapshot = CatalogSnapshot { categories, items };
    }

    /// Reloads categories and items from the store.
    ///
    /// On error the previous snapshot stays in place.
    pub async fn refetch(&self, db: &Database) -> DbResult<()> {
        let categories = db.categories().list_active().await?;
        let items = db.menu().list_all().await?;

        info!(
            categories = categories.len(),
            items = items.len(),
            "Catalog refreshed"
        );

        self.replace(categories, items);
        Ok(())
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        self.read().clone()
    }

    pub fn sections(&self) -> Vec<MenuSection> {
        self.read().sections()
    }

    /// Looks up an item that can be ordered right now.
    ///
    /// ## Errors
    /// * `CoreError::MenuItemNotFound` - id is not in the snapshot
    /// * `CoreError::ItemUnavailable` - item is flagged unavailable
    pub fn orderable_item(&self, id: &str) -> CoreResult<MenuItem> {
        let snapshot = self.read();
        let item = snapshot
            .item(id)
            .ok_or_else(|| CoreError::MenuItemNotFound(id.to_string()))?;

        if !item.available {
            return Err(CoreError::ItemUnavailable {
                id: item.id.clone(),
                name: item.name.clone(),
            });
        }

        Ok(item.clone())
    }

    fn read(&self) -> RwLockReadGuard<'_, CatalogSnapshot> {
        self.snapshot.read().unwrap_or_else(|poisoned| {
            warn!("Catalog lock poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Money;

    fn coffee() -> Category {
        Category {
            id: "coffee".to_string(),
            name: "Coffee".to_string(),
            icon: "☕".to_string(),
            sort_order: 1,
            active: true,
        }
    }

    #[test]
    fn test_orderable_item_checks_availability() {
        let state = CatalogState::new();
        let latte = MenuItem::new("latte", "Latte", "coffee", Money::from_centavos(12000));
        let mut mocha = MenuItem::new("mocha", "Mocha", "coffee", Money::from_centavos(13000));
        mocha.available = false;
        state.replace(vec![coffee()], vec![latte, mocha]);

        assert_eq!(state.orderable_item("latte").unwrap().name, "Latte");
        assert!(matches!(
            state.orderable_item("mocha"),
            Err(CoreError::ItemUnavailable { .. })
        ));
        assert!(matches!(
            state.orderable_item("missing"),
            Err(CoreError::MenuItemNotFound(_))
        ));
    }

    #[test]
    fn test_empty_catalog_has_no_sections() {
        let state = CatalogState::new();
        assert!(state.sections().is_empty());

        state.replace(vec![coffee()], Vec::new());
        assert!(state.sections().is_empty());
    }
}
