//! # Cart Commands
//!
//! Commands for the customer's cart.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────────┐     ┌──────────┐     ┌──────────┐   │
//! │  │  Empty   │────►│ Customize    │────►│ In Cart  │────►│ Checkout │   │
//! │  │  Cart    │     │ (size, add-  │     │          │     │          │   │
//! │  └──────────┘     │  ons, qty)   │     └──────────┘     └──────────┘   │
//! │                   └──────────────┘          │                 │         │
//! │                     add_to_cart        update_cart_item       │         │
//! │                                        remove_from_cart       │         │
//! │                                             │                 ▼         │
//! │                                             └─────────► clear_cart      │
//! │                                                        (back to empty)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use storefront_core::{AddOn, Cart, CartItem, CartTotals, CoreError, SelectedAddOn, Variation};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartState, CatalogState, ConfigState};

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
    /// Total rendered with the configured currency symbol.
    pub formatted_total: String,
}

impl CartResponse {
    pub fn new(cart: &Cart, config: &ConfigState) -> Self {
        let totals = CartTotals::from(cart);
        CartResponse {
            items: cart.items().to_vec(),
            formatted_total: config.format_currency(totals.total),
            totals,
        }
    }
}

/// Gets the current cart contents.
///
/// ```text
/// ┌──────────────────────────────────────────────────────────────┐
/// │  YOUR ORDER                                      2 items     │
/// ├──────────────────────────────────────────────────────────────┤
/// │  Café Latte (Large) + Oat Milk     x2          ₱360.00       │
/// │  Butter Croissant                  x1           ₱95.00       │
/// ├──────────────────────────────────────────────────────────────┤
/// │  TOTAL                                         ₱455.00       │
/// └──────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::new(c, config))
}

/// Adds a configured menu item to the cart.
///
/// ## Behavior
/// - Item must be in the catalog snapshot and available
/// - `variation_id`, when given, must be one of the item's variations
/// - `add_on_ids` lists one entry per unit, so `["vanilla", "vanilla"]`
///   is two pumps of vanilla
/// - If the item already has a line: only its quantity grows; the new
///   configuration is ignored and the frozen price kept
///
/// ## Arguments
/// * `menu_item_id` - Item to add
/// * `quantity` - Units to add (default: 1, must be ≥ 1)
/// * `variation_id` - Selected size, if any
/// * `add_on_ids` - Selected add-ons, one entry per unit
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    config: &ConfigState,
    menu_item_id: String,
    quantity: Option<i64>,
    variation_id: Option<String>,
    add_on_ids: Vec<String>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(
        menu_item_id = %menu_item_id,
        quantity,
        variation_id = ?variation_id,
        add_ons = add_on_ids.len(),
        "add_to_cart command"
    );

    let item = catalog.orderable_item(&menu_item_id)?;

    let variation: Option<Variation> = match variation_id {
        Some(id) => Some(
            item.variation(&id)
                .cloned()
                .ok_or_else(|| CoreError::UnknownVariation {
                    item_id: item.id.clone(),
                    variation_id: id,
                })?,
        ),
        None => None,
    };

    let units = add_on_ids
        .iter()
        .map(|id| {
            item.add_on(id).cloned().ok_or_else(|| CoreError::UnknownAddOn {
                item_id: item.id.clone(),
                add_on_id: id.clone(),
            })
        })
        .collect::<Result<Vec<AddOn>, CoreError>>()?;
    let add_ons = SelectedAddOn::collapse(&units);

    cart.with_cart_mut(|c| {
        c.add(&item, quantity, variation.as_ref(), &add_ons)?;
        Ok::<CartResponse, ApiError>(CartResponse::new(c, config))
    })
}

/// Sets the quantity of a cart line.
///
/// ## Behavior
/// - Quantity ≤ 0: removes the line
/// - Unknown id: cart unchanged
/// - Quantity above 999: `VALIDATION_ERROR`, line unchanged
pub fn update_cart_item(
    cart: &CartState,
    config: &ConfigState,
    menu_item_id: String,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(menu_item_id = %menu_item_id, quantity, "update_cart_item command");

    cart.with_cart_mut(|c| {
        c.update_quantity(&menu_item_id, quantity)?;
        Ok::<CartResponse, ApiError>(CartResponse::new(c, config))
    })
}

/// Removes a line from the cart. Unknown ids are ignored.
pub fn remove_from_cart(cart: &CartState, config: &ConfigState, menu_item_id: String) -> CartResponse {
    debug!(menu_item_id = %menu_item_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        c.remove(&menu_item_id);
        CartResponse::new(c, config)
    })
}

/// Clears all items from the cart.
///
/// ## When Used
/// - Customer empties the cart
/// - After the order is handed off at checkout
pub fn clear_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::new(c, config)
    })
}
