//! # Catalog Types
//!
//! The read-only catalog snapshot the storefront renders and prices from.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog Types                                   │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌──────────────────────────────────┐       │
//! │  │    Category     │◄───────│            MenuItem              │       │
//! │  │  ─────────────  │  by id │  ──────────────────────────────  │       │
//! │  │  id (slug)      │        │  id, name, description           │       │
//! │  │  name, icon     │        │  base_price, discount_price      │       │
//! │  │  sort_order     │        │  on_discount, available, popular │       │
//! │  └─────────────────┘        │  variations: Vec<Variation>      │       │
//! │                             │  add_ons:    Vec<AddOn>          │       │
//! │                             └───────┬──────────────┬───────────┘       │
//! │                                     │              │                    │
//! │                          ┌──────────▼─────┐  ┌─────▼────────────┐      │
//! │                          │   Variation    │  │      AddOn       │      │
//! │                          │  price DELTA   │  │  price per unit  │      │
//! │                          │  (may be < 0)  │  │  category (free) │      │
//! │                          └────────────────┘  └──────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The remote store owns these records; the storefront only ever holds
//! snapshots and never mutates them.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::pricing;

// =============================================================================
// Category
// =============================================================================

/// A menu section such as "Hot Coffee" or "Pastries".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Category {
    /// Slug identifier, also used as the section anchor.
    pub id: String,
    pub name: String,
    /// Emoji or short glyph shown next to the name.
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

// =============================================================================
// Variation
// =============================================================================

/// A size or format option for a menu item.
///
/// `price` is a delta added to the item's effective price, not a
/// replacement for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Variation {
    pub id: String,
    pub name: String,
    pub price: Money,
}

// =============================================================================
// Add-on
// =============================================================================

/// An optional extra sold per unit (extra shot, oat milk, syrup pump).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AddOn {
    pub id: String,
    pub name: String,
    /// Free-form grouping label ("Milk", "Syrups", ...).
    pub category: String,
    pub price: Money,
}

/// Add-ons sharing a category label, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AddOnGroup {
    pub category: String,
    pub add_ons: Vec<AddOn>,
}

/// An add-on together with how many units the customer picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SelectedAddOn {
    pub add_on: AddOn,
    pub quantity: u32,
}

impl SelectedAddOn {
    pub fn new(add_on: AddOn, quantity: u32) -> Self {
        SelectedAddOn { add_on, quantity }
    }

    /// Price of all units of this add-on, saturating at the `i64` bounds.
    #[inline]
    pub fn line_price(&self) -> Money {
        self.add_on.price.saturating_mul(i64::from(self.quantity))
    }

    /// Folds a flattened selection (one entry per unit) into quantities.
    ///
    /// First-seen order is kept, so `[syrup, shot, syrup]` becomes
    /// `[syrup × 2, shot × 1]`.
    pub fn collapse(units: &[AddOn]) -> Vec<SelectedAddOn> {
        let mut selected: Vec<SelectedAddOn> = Vec::new();
        for add_on in units {
            match selected.iter_mut().find(|s| s.add_on.id == add_on.id) {
                Some(existing) => existing.quantity = existing.quantity.saturating_add(1),
                None => selected.push(SelectedAddOn::new(add_on.clone(), 1)),
            }
        }
        selected
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A sellable item on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,

    /// Regular price.
    pub base_price: Money,

    /// Id of the owning [`Category`].
    pub category: String,

    #[serde(default)]
    pub popular: bool,

    #[serde(default = "default_true")]
    pub available: bool,

    /// Image URL; `None` renders a placeholder.
    #[serde(default)]
    pub image: Option<String>,

    /// Sale price, honoured only while `on_discount` is set.
    #[serde(default)]
    pub discount_price: Option<Money>,

    #[serde(default)]
    pub on_discount: bool,

    #[serde(default)]
    pub variations: Vec<Variation>,

    #[serde(default)]
    pub add_ons: Vec<AddOn>,
}

impl MenuItem {
    /// Creates a plain item with no discount, variations, or add-ons.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        base_price: Money,
    ) -> Self {
        MenuItem {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            base_price,
            category: category.into(),
            popular: false,
            available: true,
            image: None,
            discount_price: None,
            on_discount: false,
            variations: Vec::new(),
            add_ons: Vec::new(),
        }
    }

    /// Whether a discount is currently being applied.
    #[inline]
    pub fn is_discounted(&self) -> bool {
        self.on_discount && self.discount_price.is_some()
    }

    /// The price actually charged for the bare item.
    ///
    /// ```rust
    /// use storefront_core::{MenuItem, Money};
    ///
    /// let mut item = MenuItem::new("mocha", "Mocha", "coffee", Money::from_centavos(10000));
    /// item.discount_price = Some(Money::from_centavos(8000));
    /// assert_eq!(item.effective_price().centavos(), 10000);
    ///
    /// item.on_discount = true;
    /// assert_eq!(item.effective_price().centavos(), 8000);
    /// ```
    pub fn effective_price(&self) -> Money {
        match self.discount_price {
            Some(discount) if self.on_discount => discount,
            _ => self.base_price,
        }
    }

    /// Amount saved against the base price ("Save ₱20.00").
    pub fn savings(&self) -> Money {
        self.base_price - self.effective_price()
    }

    /// Rounded percentage off, for the "25% OFF" badge.
    ///
    /// `None` when no discount is active or the base price is zero.
    pub fn discount_percent(&self) -> Option<u32> {
        if !self.is_discounted() {
            return None;
        }
        pricing::discount_percent(self.base_price, self.effective_price()).ok()
    }

    /// Pre-selected variation when the customization dialog opens.
    pub fn default_variation(&self) -> Option<&Variation> {
        self.variations.first()
    }

    pub fn variation(&self, id: &str) -> Option<&Variation> {
        self.variations.iter().find(|v| v.id == id)
    }

    pub fn add_on(&self, id: &str) -> Option<&AddOn> {
        self.add_ons.iter().find(|a| a.id == id)
    }

    /// Items with variations or add-ons open the customization dialog;
    /// plain items only ask for a quantity.
    pub fn is_customizable(&self) -> bool {
        !self.variations.is_empty() || !self.add_ons.is_empty()
    }

    /// Groups add-ons by their category label.
    ///
    /// Groups appear in the order their first add-on appears in the
    /// catalog; add-ons keep catalog order within a group.
    pub fn add_on_groups(&self) -> Vec<AddOnGroup> {
        let mut groups: Vec<AddOnGroup> = Vec::new();
        for add_on in &self.add_ons {
            match groups.iter_mut().find(|g| g.category == add_on.category) {
                Some(group) => group.add_ons.push(add_on.clone()),
                None => groups.push(AddOnGroup {
                    category: add_on.category.clone(),
                    add_ons: vec![add_on.clone()],
                }),
            }
        }
        groups
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn add_on(id: &str, category: &str, centavos: i64) -> AddOn {
        AddOn {
            id: id.to_string(),
            name: id.to_uppercase(),
            category: category.to_string(),
            price: Money::from_centavos(centavos),
        }
    }

    fn discounted_item() -> MenuItem {
        let mut item = MenuItem::new("latte", "Latte", "coffee", Money::from_centavos(10000));
        item.discount_price = Some(Money::from_centavos(7500));
        item.on_discount = true;
        item
    }

    #[test]
    fn test_effective_price_respects_discount_flag() {
        let mut item = discounted_item();
        assert_eq!(item.effective_price().centavos(), 7500);
        assert!(item.is_discounted());

        item.on_discount = false;
        assert_eq!(item.effective_price().centavos(), 10000);
        assert!(!item.is_discounted());
    }

    #[test]
    fn test_flag_without_discount_price_uses_base() {
        let mut item = MenuItem::new("tea", "Tea", "tea", Money::from_centavos(6000));
        item.on_discount = true;
        assert_eq!(item.effective_price().centavos(), 6000);
        assert_eq!(item.discount_percent(), None);
    }

    #[test]
    fn test_savings_and_badge() {
        let item = discounted_item();
        assert_eq!(item.savings().centavos(), 2500);
        assert_eq!(item.discount_percent(), Some(25));

        let plain = MenuItem::new("tea", "Tea", "tea", Money::from_centavos(6000));
        assert!(plain.savings().is_zero());
        assert_eq!(plain.discount_percent(), None);
    }

    #[test]
    fn test_add_on_groups_keep_first_appearance_order() {
        let mut item = MenuItem::new("latte", "Latte", "coffee", Money::from_centavos(10000));
        item.add_ons = vec![
            add_on("oat", "Milk", 2000),
            add_on("vanilla", "Syrups", 1000),
            add_on("soy", "Milk", 1500),
        ];

        let groups = item.add_on_groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "Milk");
        assert_eq!(groups[0].add_ons.len(), 2);
        assert_eq!(groups[0].add_ons[1].id, "soy");
        assert_eq!(groups[1].category, "Syrups");
        assert!(item.is_customizable());
    }

    #[test]
    fn test_collapse_counts_units() {
        let syrup = add_on("vanilla", "Syrups", 1000);
        let shot = add_on("shot", "Coffee", 2500);

        let selected = SelectedAddOn::collapse(&[syrup.clone(), shot.clone(), syrup.clone()]);
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].add_on.id, "vanilla");
        assert_eq!(selected[0].quantity, 2);
        assert_eq!(selected[0].line_price().centavos(), 2000);
        assert_eq!(selected[1].quantity, 1);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{
            "id": "croissant",
            "name": "Croissant",
            "basePrice": 8500,
            "category": "pastries"
        }"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert!(item.available);
        assert!(!item.on_discount);
        assert!(item.variations.is_empty());
        assert!(!item.is_customizable());
        assert_eq!(item.default_variation(), None);
    }
}
