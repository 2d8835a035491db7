//! # Cart Ledger
//!
//! The in-memory collection of line items awaiting checkout.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Ledger Operations                               │
//! │                                                                         │
//! │  UI Action               Ledger Call              Effect                │
//! │  ─────────               ───────────              ──────                │
//! │                                                                         │
//! │  Add (first time) ─────► add(item, n, var, adds) ► push, price frozen  │
//! │                                                                         │
//! │  Add (again) ──────────► add(item, n, ..) ───────► quantity += n       │
//! │                                                    (config ignored)     │
//! │                                                                         │
//! │  Stepper +/- ──────────► update_quantity(id, n) ─► quantity = n        │
//! │                                                    n ≤ 0 removes       │
//! │                                                                         │
//! │  Trash icon ───────────► remove(id) ─────────────► retain(id != ..)    │
//! │                                                                         │
//! │  Clear cart ───────────► clear() ────────────────► items.clear()       │
//! │                                                                         │
//! │  Total line ───────────► total() ────────────────► Σ unit × qty        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per menu item id. A second add of the same item only
//!   bumps the quantity of the configuration committed first.
//! - Every line has quantity in `1..=MAX_ITEM_QUANTITY`.
//! - The cart total fits in `Money`. A change that would break either
//!   rule is rejected before the ledger is touched.
//! - Insertion order is preserved by every operation.
//! - Unit prices are frozen at add time. Later catalog changes do not
//!   reach lines already in the cart.
//!
//! Single-owner, synchronous. Sharing a ledger across threads needs an
//! outer lock; see `CartState` in the storefront app.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing;
use crate::types::{MenuItem, SelectedAddOn, Variation};
use crate::validation::validate_quantity;

// =============================================================================
// Cart Item
// =============================================================================

/// One configured item and its quantity.
///
/// Name, unit price, variation and add-ons are snapshots taken when the
/// line was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    /// Id of the menu item this line was created from.
    pub id: String,

    /// Item name at time of adding (frozen).
    pub name: String,

    /// Price of one unit including variation and add-ons (frozen).
    pub unit_price: Money,

    pub quantity: i64,

    pub variation: Option<Variation>,

    pub add_ons: Vec<SelectedAddOn>,

    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a line from a menu item and its chosen configuration.
    pub fn from_menu_item(
        item: &MenuItem,
        quantity: i64,
        variation: Option<&Variation>,
        add_ons: &[SelectedAddOn],
    ) -> Self {
        CartItem {
            id: item.id.clone(),
            name: item.name.clone(),
            unit_price: pricing::unit_price(item, variation, add_ons),
            quantity,
            variation: variation.cloned(),
            add_ons: add_ons
                .iter()
                .filter(|selected| selected.quantity >= 1)
                .cloned()
                .collect(),
            added_at: Utc::now(),
        }
    }

    /// unit price × quantity, saturating at the `i64` bounds.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.saturating_mul(self.quantity)
    }

    /// unit price × quantity, `None` on overflow.
    #[inline]
    pub fn checked_line_total(&self) -> Option<Money> {
        self.unit_price.checked_mul(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The cart ledger.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    items: Vec<CartItem>,

    /// When the cart was created or last cleared.
    #[ts(as = "String")]
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds an item, or bumps the quantity of its existing line.
    ///
    /// ## Behavior
    /// - Existing line for `item.id`: `quantity` is added to it. The supplied
    ///   variation and add-ons are ignored and the frozen price is kept.
    /// - No line yet: the unit price is computed from the configuration and
    ///   a new line is appended.
    ///
    /// ## Errors
    /// The cart is left untouched when:
    /// - `quantity` is not in `1..=MAX_ITEM_QUANTITY`
    /// - the bumped line would exceed `MAX_ITEM_QUANTITY`
    /// - the new cart total would overflow (`CoreError::AmountOverflow`)
    pub fn add(
        &mut self,
        item: &MenuItem,
        quantity: i64,
        variation: Option<&Variation>,
        add_ons: &[SelectedAddOn],
    ) -> CoreResult<()> {
        validate_quantity(quantity)?;

        if let Some(index) = self.position(&item.id) {
            // Both operands are at most MAX_ITEM_QUANTITY.
            let bumped = self.items[index].quantity + quantity;
            validate_quantity(bumped)?;
            self.set_quantity_at(index, bumped)?;
            debug!(id = %item.id, quantity = bumped, "Cart line quantity increased");
            return Ok(());
        }

        let line = CartItem::from_menu_item(item, quantity, variation, add_ons);
        let unit_price = line.unit_price;
        self.items.push(line);
        if self.checked_total().is_none() {
            self.items.pop();
            return Err(CoreError::AmountOverflow);
        }

        debug!(id = %item.id, quantity, unit_price = %unit_price, "Cart line added");
        Ok(())
    }

    /// Adds an item with no variation and no add-ons.
    pub fn add_item(&mut self, item: &MenuItem, quantity: i64) -> CoreResult<()> {
        self.add(item, quantity, None, &[])
    }

    /// Sets a line's quantity exactly.
    ///
    /// `quantity ≤ 0` removes the line. Unknown ids are ignored.
    ///
    /// ## Errors
    /// A quantity above `MAX_ITEM_QUANTITY`, or one that would overflow the
    /// cart total, is rejected and the line keeps its old quantity.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> CoreResult<()> {
        if quantity <= 0 {
            self.remove(id);
            return Ok(());
        }

        validate_quantity(quantity)?;

        if let Some(index) = self.position(id) {
            self.set_quantity_at(index, quantity)?;
            debug!(id = %id, quantity, "Cart line quantity set");
        }
        Ok(())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|line| line.id == id)
    }

    fn set_quantity_at(&mut self, index: usize, quantity: i64) -> CoreResult<()> {
        let previous = std::mem::replace(&mut self.items[index].quantity, quantity);
        if self.checked_total().is_none() {
            self.items[index].quantity = previous;
            return Err(CoreError::AmountOverflow);
        }
        Ok(())
    }

    /// Removes a line. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) {
        let before = self.items.len();
        self.items.retain(|line| line.id != id);
        if self.items.len() != before {
            debug!(id = %id, "Cart line removed");
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
        debug!("Cart cleared");
    }

    /// Sum of every line total. Recomputed on each call.
    ///
    /// Mutations keep this exact. A cart deserialized from elsewhere may not
    /// respect that, so the fold saturates instead of panicking.
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .map(CartItem::line_total)
            .fold(Money::zero(), Money::saturating_add)
    }

    /// Sum of every line total, `None` on overflow.
    pub fn checked_total(&self) -> Option<Money> {
        self.items.iter().try_fold(Money::zero(), |total, line| {
            total.checked_add(line.checked_line_total()?)
        })
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|line| line.id == id)
    }

    /// Quantity in the cart for a menu item (0 when absent).
    pub fn quantity_of(&self, id: &str) -> i64 {
        self.get(id).map_or(0, |line| line.quantity)
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total units across all lines (the header badge).
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

/// Cart summary for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total: cart.total(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};
    use crate::types::AddOn;
    use crate::MAX_ITEM_QUANTITY;

    fn menu_item(id: &str, centavos: i64) -> MenuItem {
        MenuItem::new(id, format!("Item {}", id), "coffee", Money::from_centavos(centavos))
    }

    fn latte() -> MenuItem {
        let mut item = menu_item("latte", 10000);
        item.discount_price = Some(Money::from_centavos(8000));
        item.on_discount = true;
        item.variations = vec![Variation {
            id: "large".to_string(),
            name: "Large".to_string(),
            price: Money::from_centavos(2000),
        }];
        item.add_ons = vec![AddOn {
            id: "vanilla".to_string(),
            name: "Vanilla".to_string(),
            category: "Syrups".to_string(),
            price: Money::from_centavos(1000),
        }];
        item
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("1", 999), 2).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.total().centavos(), 1998);
    }

    #[test]
    fn test_same_item_collapses_into_one_line() {
        let mut cart = Cart::new();
        let item = menu_item("1", 999);

        cart.add_item(&item, 2).unwrap();
        cart.add_item(&item, 3).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.quantity_of("1"), 5);
        assert_eq!(cart.items()[0].unit_price.centavos(), 999);
    }

    #[test]
    fn test_customized_line_keeps_first_configuration() {
        let mut cart = Cart::new();
        let item = latte();
        let large = item.variation("large").cloned();
        let syrup = [SelectedAddOn::new(item.add_ons[0].clone(), 2)];

        cart.add(&item, 1, large.as_ref(), &syrup).unwrap();
        assert_eq!(cart.total().centavos(), 12000);

        cart.add_item(&item, 1).unwrap();
        assert_eq!(cart.quantity_of("latte"), 2);
        assert_eq!(cart.total().centavos(), 24000);

        let line = cart.get("latte").unwrap();
        assert_eq!(line.variation.as_ref().map(|v| v.id.as_str()), Some("large"));
        assert_eq!(line.add_ons[0].quantity, 2);
    }

    #[test]
    fn test_frozen_price_survives_catalog_change() {
        let mut cart = Cart::new();
        let mut item = menu_item("1", 5000);
        cart.add_item(&item, 1).unwrap();

        item.base_price = Money::from_centavos(9000);
        cart.add_item(&item, 1).unwrap();

        assert_eq!(cart.total().centavos(), 10000);
    }

    #[test]
    fn test_non_positive_add_rejected() {
        let mut cart = Cart::new();
        let item = menu_item("1", 999);

        let err = cart.add_item(&item, 0).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustBePositive { .. })
        ));
        assert!(cart.is_empty());

        cart.add_item(&item, 2).unwrap();
        assert!(cart.add_item(&item, -1).is_err());
        assert_eq!(cart.quantity_of("1"), 2);
    }

    #[test]
    fn test_update_quantity_is_absolute() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("1", 100), 2).unwrap();

        cart.update_quantity("1", 7).unwrap();
        assert_eq!(cart.quantity_of("1"), 7);
        assert_eq!(cart.total().centavos(), 700);
    }

    #[test]
    fn test_update_to_zero_removes_and_is_idempotent() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("1", 100), 2).unwrap();
        cart.add_item(&menu_item("2", 200), 1).unwrap();

        cart.update_quantity("1", 0).unwrap();
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.quantity_of("1"), 0);

        cart.update_quantity("1", 0).unwrap();
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items()[0].id, "2");

        cart.update_quantity("2", -4).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("1", 100), 1).unwrap();

        cart.update_quantity("ghost", 3).unwrap();
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 1);
    }

    #[test]
    fn test_remove_unknown_keeps_order() {
        let mut cart = Cart::new();
        for (id, price) in [("a", 100), ("b", 200), ("c", 300)] {
            cart.add_item(&menu_item(id, price), 1).unwrap();
        }
        let before = cart.items().to_vec();

        cart.remove("ghost");
        assert_eq!(cart.items(), before.as_slice());

        cart.remove("b");
        cart.remove("b");
        let ids: Vec<&str> = cart.items().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_round_trip_to_empty() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("a", 100), 3).unwrap();
        cart.add_item(&menu_item("b", 250), 1).unwrap();
        assert_eq!(cart.total().centavos(), 550);

        cart.remove("a");
        cart.update_quantity("b", 0).unwrap();
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("1", 999), 2).unwrap();

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_quantity_capped_per_line() {
        let mut cart = Cart::new();
        let item = menu_item("1", 100);

        assert!(cart.add_item(&item, MAX_ITEM_QUANTITY + 1).is_err());
        assert!(cart.add_item(&item, i64::MAX).is_err());
        assert!(cart.is_empty());

        cart.add_item(&item, MAX_ITEM_QUANTITY - 1).unwrap();
        cart.add_item(&item, 1).unwrap();
        assert_eq!(cart.quantity_of("1"), MAX_ITEM_QUANTITY);

        let err = cart.add_item(&item, 1).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { .. })
        ));
        assert_eq!(cart.quantity_of("1"), MAX_ITEM_QUANTITY);

        assert!(cart.update_quantity("1", i64::MAX).is_err());
        assert_eq!(cart.quantity_of("1"), MAX_ITEM_QUANTITY);
        assert_eq!(cart.total().centavos(), 100 * MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_total_overflow_rejected_and_cart_unchanged() {
        let mut cart = Cart::new();
        let pricey = menu_item("pricey", i64::MAX / 4);

        cart.add_item(&pricey, 2).unwrap();
        let err = cart.add_item(&pricey, 3).unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow));
        assert_eq!(cart.quantity_of("pricey"), 2);

        let err = cart.add_item(&menu_item("other", i64::MAX - 1), 1).unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow));
        assert_eq!(cart.item_count(), 1);

        assert!(cart.update_quantity("pricey", 8).is_err());
        assert_eq!(cart.quantity_of("pricey"), 2);
        assert_eq!(cart.checked_total(), Some(cart.total()));
    }

    #[test]
    fn test_totals_summary() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("a", 100), 3).unwrap();
        cart.add_item(&menu_item("b", 250), 2).unwrap();

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total_quantity, 5);
        assert_eq!(totals.total.centavos(), 800);
    }

    #[test]
    fn test_zero_quantity_add_ons_not_stored() {
        let mut cart = Cart::new();
        let item = latte();
        let selections = [SelectedAddOn::new(item.add_ons[0].clone(), 0)];

        cart.add(&item, 1, None, &selections).unwrap();
        assert!(cart.items()[0].add_ons.is_empty());
        assert_eq!(cart.total().centavos(), 8000);
    }
}
