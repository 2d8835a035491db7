//! # storefront-core: Pure Logic for the Restaurant Storefront
//!
//! Everything the storefront computes without touching the network or
//! disk: prices, the cart ledger, menu navigation, and the site settings
//! read model.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (web menu + cart)                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              storefront app (state + commands)                  │   │
//! │  │    get_menu, add_to_cart, update_cart_item, get_site_settings   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ storefront-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐  │   │
//! │  │  │  types  │ │ pricing │ │  cart   │ │  menu   │ │ settings │  │   │
//! │  │  │MenuItem │ │unit     │ │Cart     │ │sections │ │SiteSett- │  │   │
//! │  │  │AddOn    │ │ price   │ │CartItem │ │scroll   │ │ ings     │  │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              storefront-db (catalog store, SQLite)              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog types (MenuItem, Variation, AddOn, Category)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Unit price and discount percentage
//! - [`cart`] - The cart ledger
//! - [`menu`] - Section building, category filter, scroll sync
//! - [`settings`] - Site settings read model
//! - [`validation`] - Quantity and catalog record checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Cart, MenuItem, Money};
//!
//! let latte = MenuItem::new("latte", "Latte", "coffee", Money::from_centavos(12000));
//!
//! let mut cart = Cart::new();
//! cart.add_item(&latte, 2).unwrap();
//!
//! assert_eq!(cart.total().to_string(), "₱240.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod menu;
pub mod money;
pub mod pricing;
pub mod settings;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem, CartTotals};
pub use error::{CoreError, CoreResult, ValidationError};
pub use menu::{ActiveCategory, CategoryFilter, MenuSection};
pub use money::Money;
pub use pricing::Customization;
pub use settings::{SiteSettingRow, SiteSettings, SiteSettingsUpdate};
pub use types::*;

// =============================================================================
// Constants
// =============================================================================

/// Maximum quantity of a single cart line.
///
/// ## Business Reason
/// Stops a mistyped quantity (1000 instead of 10) and keeps every line
/// total far inside `i64` centavos.
pub const MAX_ITEM_QUANTITY: i64 = 999;
