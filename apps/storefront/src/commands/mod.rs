//! # Commands Module
//!
//! Everything the presentation layer can ask of the storefront.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── menu.rs      ◄─── get_menu, filter_menu, refresh_catalog
//! ├── cart.rs      ◄─── get_cart, add_to_cart, update/remove/clear
//! └── settings.rs  ◄─── get/update/refresh site settings, update_site_setting
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &CartState, config: &ConfigState)
//!
//! // Needs the catalog to resolve the item
//! fn add_to_cart(catalog: &CatalogState, cart: &CartState, config: &ConfigState, ...)
//!
//! // Needs the store
//! async fn refresh_catalog(db: &DbState, catalog: &CatalogState)
//! ```

pub mod cart;
pub mod menu;
pub mod settings;
