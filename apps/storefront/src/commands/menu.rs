//! # Menu Commands
//!
//! Read access to the catalog snapshot, and reloading it.

use serde::{Deserialize, Serialize};
use storefront_core::{Category, CategoryFilter, MenuItem, MenuSection};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{CatalogState, DbState};

/// The rendered menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    /// Category tabs, in menu order.
    pub categories: Vec<Category>,
    /// Sections with at least one item.
    pub sections: Vec<MenuSection>,
}

impl MenuResponse {
    fn from_catalog(catalog: &CatalogState) -> Self {
        let snapshot = catalog.snapshot();
        let sections = snapshot.sections();
        MenuResponse {
            categories: sections.iter().map(|s| s.category.clone()).collect(),
            sections,
        }
    }
}

/// Gets the menu as sections.
pub fn get_menu(catalog: &CatalogState) -> MenuResponse {
    debug!("get_menu command");
    MenuResponse::from_catalog(catalog)
}

/// Items matching a category tab, in catalog order.
///
/// ## Arguments
/// * `category` - Category id, or `"all"`
pub fn filter_menu(catalog: &CatalogState, category: String) -> Vec<MenuItem> {
    debug!(category = %category, "filter_menu command");

    let filter = CategoryFilter::from_id(&category);
    let snapshot = catalog.snapshot();
    filter.apply(&snapshot.items).into_iter().cloned().collect()
}

/// Reloads the catalog from the store.
///
/// Cart lines are untouched; their prices were frozen when added.
pub async fn refresh_catalog(db: &DbState, catalog: &CatalogState) -> Result<MenuResponse, ApiError> {
    info!("refresh_catalog command");

    catalog.refetch(db.inner()).await?;
    Ok(MenuResponse::from_catalog(catalog))
}
