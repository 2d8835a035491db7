//! # Pricing Engine
//!
//! Turns a configured menu item into a unit price.
//!
//! ## Computation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  unit_price(item, variation?, add_ons)                                  │
//! │                                                                         │
//! │    effective price     discount if on_discount && present, else base    │
//! │  + variation.price     delta, may be negative                           │
//! │  + Σ add_on.price × n  for every selection with n ≥ 1                   │
//! │  ─────────────────                                                      │
//! │    unit price          frozen into the CartItem at add time             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The result is not clamped at zero. A large negative variation delta can
//! produce a negative unit price; keeping catalog deltas sane is the
//! catalog editor's job, not the engine's.

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{AddOn, MenuItem, SelectedAddOn, Variation};

/// Computes the unit price of a configured item.
///
/// Pure function of its inputs. Add-on order does not matter; selections
/// with a quantity of zero contribute nothing. Sums saturate at the `i64`
/// bounds instead of wrapping.
///
/// ## Example
/// ```rust
/// use storefront_core::pricing::unit_price;
/// use storefront_core::{AddOn, MenuItem, Money, SelectedAddOn, Variation};
///
/// let mut item = MenuItem::new("latte", "Latte", "coffee", Money::from_centavos(10000));
/// item.discount_price = Some(Money::from_centavos(8000));
/// item.on_discount = true;
///
/// let large = Variation { id: "l".into(), name: "Large".into(), price: Money::from_centavos(2000) };
/// let syrup = AddOn {
///     id: "vanilla".into(),
///     name: "Vanilla".into(),
///     category: "Syrups".into(),
///     price: Money::from_centavos(1000),
/// };
///
/// let price = unit_price(&item, Some(&large), &[SelectedAddOn::new(syrup, 2)]);
/// assert_eq!(price.centavos(), 12000); // 80 + 20 + 10 × 2
/// ```
pub fn unit_price(
    item: &MenuItem,
    variation: Option<&Variation>,
    add_ons: &[SelectedAddOn],
) -> Money {
    let mut price = item.effective_price();

    if let Some(variation) = variation {
        price = price.saturating_add(variation.price);
    }

    add_ons
        .iter()
        .filter(|selected| selected.quantity >= 1)
        .map(SelectedAddOn::line_price)
        .fold(price, Money::saturating_add)
}

/// Rounded percentage saved by a discount: `round((base − discount) / base × 100)`.
///
/// Rounds half up, matching how the badge has always displayed. The result
/// is clamped into `0..=100` so a discount above base reads as 0% and a
/// negative discount as 100%.
///
/// ## Errors
/// `CoreError::ZeroBasePrice` when `base` is zero or negative. No sellable
/// item has such a price, so callers should treat this as a catalog bug.
///
/// ```rust
/// use storefront_core::pricing::discount_percent;
/// use storefront_core::Money;
///
/// let base = Money::from_centavos(10000);
/// assert_eq!(discount_percent(base, Money::from_centavos(7500)).unwrap(), 25);
/// assert_eq!(discount_percent(base, base).unwrap(), 0);
/// ```
pub fn discount_percent(base: Money, discount: Money) -> CoreResult<u32> {
    if !base.is_positive() {
        return Err(CoreError::ZeroBasePrice);
    }

    let diff = i128::from((base - discount).centavos());
    let base = i128::from(base.centavos());

    // floor(diff × 100 / base + 1/2) in integers
    let percent = (diff * 200 + base).div_euclid(base * 2);

    Ok(percent.clamp(0, 100) as u32)
}

// =============================================================================
// Customization
// =============================================================================

/// The in-progress choices of the customization dialog.
///
/// ## Lifecycle
/// ```text
/// open dialog ──► Customization::for_item (default = first variation)
///      │
///      ├── select_variation("large")
///      ├── set_add_on_quantity(oat, 1)
///      ├── set_add_on_quantity(vanilla, 2)
///      ├── set_add_on_quantity(vanilla, 0)   ← removes it
///      │
///      ▼
/// unit_price(&item) shown on the "Add to Cart - ₱..." button
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Customization {
    pub variation: Option<Variation>,
    pub add_ons: Vec<SelectedAddOn>,
}

impl Customization {
    /// Starts a customization with the item's default variation selected.
    pub fn for_item(item: &MenuItem) -> Self {
        Customization {
            variation: item.default_variation().cloned(),
            add_ons: Vec::new(),
        }
    }

    /// Selects one of the item's variations by id.
    pub fn select_variation(&mut self, item: &MenuItem, variation_id: &str) -> CoreResult<()> {
        let variation = item
            .variation(variation_id)
            .ok_or_else(|| CoreError::UnknownVariation {
                item_id: item.id.clone(),
                variation_id: variation_id.to_string(),
            })?;
        self.variation = Some(variation.clone());
        Ok(())
    }

    /// Sets how many units of an add-on are chosen.
    ///
    /// Zero removes the add-on. An existing selection is updated in place
    /// so its position in the list is stable; a new one is appended.
    pub fn set_add_on_quantity(&mut self, add_on: &AddOn, quantity: u32) {
        if quantity == 0 {
            self.add_ons.retain(|s| s.add_on.id != add_on.id);
            return;
        }

        match self.add_ons.iter_mut().find(|s| s.add_on.id == add_on.id) {
            Some(existing) => existing.quantity = quantity,
            None => self
                .add_ons
                .push(SelectedAddOn::new(add_on.clone(), quantity)),
        }
    }

    /// Units chosen for an add-on (0 when not selected).
    pub fn add_on_quantity(&self, add_on_id: &str) -> u32 {
        self.add_ons
            .iter()
            .find(|s| s.add_on.id == add_on_id)
            .map_or(0, |s| s.quantity)
    }

    /// Price of one unit of the item as currently configured.
    pub fn unit_price(&self, item: &MenuItem) -> Money {
        let price = unit_price(item, self.variation.as_ref(), &self.add_ons);
        debug!(item_id = %item.id, price = %price, "Customization priced");
        price
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> MenuItem {
        let mut item = MenuItem::new("latte", "Latte", "coffee", Money::from_centavos(10000));
        item.discount_price = Some(Money::from_centavos(8000));
        item.on_discount = true;
        item.variations = vec![
            variation("regular", 0),
            variation("large", 2000),
            variation("kids", -3000),
        ];
        item.add_ons = vec![add_on("vanilla", 1000), add_on("oat", 2500)];
        item
    }

    fn variation(id: &str, centavos: i64) -> Variation {
        Variation {
            id: id.to_string(),
            name: id.to_string(),
            price: Money::from_centavos(centavos),
        }
    }

    fn add_on(id: &str, centavos: i64) -> AddOn {
        AddOn {
            id: id.to_string(),
            name: id.to_string(),
            category: "Extras".to_string(),
            price: Money::from_centavos(centavos),
        }
    }

    #[test]
    fn test_bare_item_uses_effective_price() {
        let mut item = item();
        assert_eq!(unit_price(&item, None, &[]).centavos(), 8000);

        item.on_discount = false;
        assert_eq!(unit_price(&item, None, &[]).centavos(), 10000);
    }

    /// Base 100, discount 80, +20 variation, 10 × 2 add-on ⇒ 120.
    #[test]
    fn test_full_configuration() {
        let item = item();
        let large = item.variation("large").cloned();
        let add_ons = [SelectedAddOn::new(add_on("vanilla", 1000), 2)];

        let price = unit_price(&item, large.as_ref(), &add_ons);
        assert_eq!(price, Money::from_centavos(12000));
    }

    #[test]
    fn test_add_on_order_does_not_matter() {
        let item = item();
        let a = SelectedAddOn::new(add_on("vanilla", 1000), 3);
        let b = SelectedAddOn::new(add_on("oat", 2500), 1);

        let forward = unit_price(&item, None, &[a.clone(), b.clone()]);
        let backward = unit_price(&item, None, &[b, a]);
        assert_eq!(forward, backward);
        assert_eq!(forward.centavos(), 8000 + 3000 + 2500);
    }

    #[test]
    fn test_zero_quantity_add_on_ignored() {
        let item = item();
        let none = SelectedAddOn::new(add_on("oat", 2500), 0);
        assert_eq!(unit_price(&item, None, &[none]).centavos(), 8000);
    }

    #[test]
    fn test_negative_delta_is_not_clamped() {
        let mut item = item();
        item.on_discount = false;
        item.base_price = Money::from_centavos(1000);
        let kids = item.variation("kids").cloned();

        assert_eq!(unit_price(&item, kids.as_ref(), &[]).centavos(), -2000);
    }

    #[test]
    fn test_huge_add_on_quantity_saturates() {
        let item = item();
        let pricey = SelectedAddOn::new(add_on("gold-leaf", i64::MAX / 2), u32::MAX);

        assert_eq!(unit_price(&item, None, &[pricey]).centavos(), i64::MAX);
    }

    #[test]
    fn test_discount_percent() {
        let base = Money::from_centavos(10000);
        assert_eq!(discount_percent(base, Money::from_centavos(7500)).unwrap(), 25);
        assert_eq!(discount_percent(base, base).unwrap(), 0);
        assert_eq!(discount_percent(base, Money::zero()).unwrap(), 100);
    }

    #[test]
    fn test_discount_percent_rounds_half_up() {
        // 12.5% → 13, 1/3 → 33, 2/3 → 67
        let base = Money::from_centavos(800);
        assert_eq!(discount_percent(base, Money::from_centavos(700)).unwrap(), 13);

        let base = Money::from_centavos(300);
        assert_eq!(discount_percent(base, Money::from_centavos(200)).unwrap(), 33);
        assert_eq!(discount_percent(base, Money::from_centavos(100)).unwrap(), 67);
    }

    #[test]
    fn test_discount_percent_clamps() {
        let base = Money::from_centavos(1000);
        assert_eq!(discount_percent(base, Money::from_centavos(1500)).unwrap(), 0);
        assert_eq!(discount_percent(base, Money::from_centavos(-500)).unwrap(), 100);
    }

    #[test]
    fn test_discount_percent_zero_base() {
        let result = discount_percent(Money::zero(), Money::zero());
        assert!(matches!(result, Err(CoreError::ZeroBasePrice)));
    }

    #[test]
    fn test_customization_flow() {
        let item = item();
        let mut custom = Customization::for_item(&item);
        assert_eq!(custom.variation.as_ref().map(|v| v.id.as_str()), Some("regular"));
        assert_eq!(custom.unit_price(&item).centavos(), 8000);

        custom.select_variation(&item, "large").unwrap();
        custom.set_add_on_quantity(&item.add_ons[0], 2);
        custom.set_add_on_quantity(&item.add_ons[1], 1);
        assert_eq!(custom.unit_price(&item).centavos(), 8000 + 2000 + 2000 + 2500);

        custom.set_add_on_quantity(&item.add_ons[0], 1);
        assert_eq!(custom.add_on_quantity("vanilla"), 1);
        assert_eq!(custom.add_ons[0].add_on.id, "vanilla");

        custom.set_add_on_quantity(&item.add_ons[0], 0);
        assert_eq!(custom.add_on_quantity("vanilla"), 0);
        assert_eq!(custom.add_ons.len(), 1);
    }

    #[test]
    fn test_select_unknown_variation() {
        let item = item();
        let mut custom = Customization::for_item(&item);
        let err = custom.select_variation(&item, "venti").unwrap_err();
        assert!(matches!(err, CoreError::UnknownVariation { .. }));
        assert_eq!(custom.variation.as_ref().map(|v| v.id.as_str()), Some("regular"));
    }
}
