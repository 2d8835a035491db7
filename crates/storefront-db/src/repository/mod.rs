//! # Repository Module
//!
//! Catalog store repositories.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Store Access                                 │
//! │                                                                         │
//! │  Storefront command                                                    │
//! │       │                                                                 │
//! │       │  db.menu().list_all()                                          │
//! │       ▼                                                                 │
//! │  MenuRepository                                                        │
//! │  ├── list_all(&self)        → items with variations + add-ons          │
//! │  ├── get_by_id(&self, id)                                              │
//! │  └── insert(&self, item)    → one transaction per item                 │
//! │       │                                                                 │
//! │       │  SQL                                                            │
//! │       ▼                                                                 │
//! │  SQLite: menu_items, variations, add_ons, categories, site_settings   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CategoryRepository`] - Menu sections
//! - [`MenuRepository`] - Menu items and their options
//! - [`SettingsRepository`] - Site settings key/value rows

pub mod category;
pub mod menu;
pub mod settings;

pub use category::CategoryRepository;
pub use menu::MenuRepository;
pub use settings::SettingsRepository;

/// Opens an in-memory database for repository tests.
#[cfg(test)]
pub(crate) async fn test_db() -> crate::Database {
    crate::Database::new(crate::DbConfig::in_memory())
        .await
        .expect("in-memory database")
}
