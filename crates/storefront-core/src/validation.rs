//! # Validation Module
//!
//! Input validation for cart operations and catalog records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation (web UI)                                        │
//! │  ├── Quantity steppers never go below 1 on first add                   │
//! │  └── Unavailable items have no add button                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Commands / Cart Ledger                                       │
//! │  └── THIS MODULE: quantity and catalog record checks                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog store (SQLite)                                       │
//! │  ├── NOT NULL / CHECK constraints                                      │
//! │  └── Foreign keys from variations/add-ons to menu items                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::MenuItem;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest item or category name the storefront accepts.
pub const MAX_NAME_LEN: usize = 200;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed `MAX_ITEM_QUANTITY` (999)
///
/// ```rust
/// use storefront_core::validation::validate_quantity;
///
/// assert!(validate_quantity(1).is_ok());
/// assert!(validate_quantity(0).is_err());
/// assert!(validate_quantity(1000).is_err());
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a display name (item, category, variation, add-on).
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a record identifier: non-empty, no surrounding whitespace.
pub fn validate_id(field: &str, id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if id.trim() != id {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must not have leading or trailing whitespace".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates a catalog record before it is stored.
///
/// ## Rules
/// - id and name present
/// - base price and add-on prices non-negative
/// - an active discount is strictly below the base price
/// - variation ids and add-on ids unique within the item
///
/// Variation deltas are allowed to be negative.
pub fn validate_menu_item(item: &MenuItem) -> CoreResult<()> {
    validate_id("id", &item.id)?;
    validate_name("name", &item.name)?;
    validate_id("category", &item.category)?;

    if item.base_price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "base price".to_string(),
            min: 0,
            max: i64::MAX,
        }
        .into());
    }

    if let Some(discount) = item.discount_price {
        if discount.is_negative() {
            return Err(ValidationError::OutOfRange {
                field: "discount price".to_string(),
                min: 0,
                max: i64::MAX,
            }
            .into());
        }
        if item.on_discount && discount >= item.base_price {
            return Err(CoreError::InvalidDiscount {
                base: item.base_price.to_string(),
                discount: discount.to_string(),
            });
        }
    }

    let mut seen = HashSet::new();
    for variation in &item.variations {
        validate_id("variation id", &variation.id)?;
        validate_name("variation name", &variation.name)?;
        if !seen.insert(variation.id.as_str()) {
            return Err(ValidationError::Duplicate {
                field: "variation id".to_string(),
                value: variation.id.clone(),
            }
            .into());
        }
    }

    let mut seen = HashSet::new();
    for add_on in &item.add_ons {
        validate_id("add-on id", &add_on.id)?;
        validate_name("add-on name", &add_on.name)?;
        if add_on.price.is_negative() {
            return Err(ValidationError::OutOfRange {
                field: "add-on price".to_string(),
                min: 0,
                max: i64::MAX,
            }
            .into());
        }
        if !seen.insert(add_on.id.as_str()) {
            return Err(ValidationError::Duplicate {
                field: "add-on id".to_string(),
                value: add_on.id.clone(),
            }
            .into());
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{AddOn, Variation};

    fn valid_item() -> MenuItem {
        let mut item = MenuItem::new("latte", "Latte", "coffee", Money::from_centavos(10000));
        item.variations = vec![Variation {
            id: "small".to_string(),
            name: "Small".to_string(),
            price: Money::from_centavos(-1500),
        }];
        item.add_ons = vec![AddOn {
            id: "oat".to_string(),
            name: "Oat Milk".to_string(),
            category: "Milk".to_string(),
            price: Money::from_centavos(2000),
        }];
        item
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(MAX_ITEM_QUANTITY).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());

        let err = validate_quantity(MAX_ITEM_QUANTITY + 1).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { max: 999, .. }));
        assert!(validate_quantity(i64::MAX).is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("name", "Spanish Latte").is_ok());
        assert!(validate_name("name", "   ").is_err());
        assert!(validate_name("name", &"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_id() {
        assert!(validate_id("id", "hot-coffee").is_ok());
        assert!(validate_id("id", "").is_err());
        assert!(validate_id("id", " padded ").is_err());
    }

    #[test]
    fn test_valid_item_with_negative_delta() {
        assert!(validate_menu_item(&valid_item()).is_ok());
    }

    #[test]
    fn test_active_discount_must_be_below_base() {
        let mut item = valid_item();
        item.discount_price = Some(Money::from_centavos(10000));
        item.on_discount = true;
        assert!(matches!(
            validate_menu_item(&item),
            Err(CoreError::InvalidDiscount { .. })
        ));

        // inactive discounts are not compared
        item.on_discount = false;
        assert!(validate_menu_item(&item).is_ok());
    }

    #[test]
    fn test_negative_prices_rejected() {
        let mut item = valid_item();
        item.base_price = Money::from_centavos(-1);
        assert!(validate_menu_item(&item).is_err());

        let mut item = valid_item();
        item.add_ons[0].price = Money::from_centavos(-1);
        assert!(validate_menu_item(&item).is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut item = valid_item();
        item.variations.push(item.variations[0].clone());
        assert!(matches!(
            validate_menu_item(&item),
            Err(CoreError::Validation(ValidationError::Duplicate { .. }))
        ));

        let mut item = valid_item();
        item.add_ons.push(item.add_ons[0].clone());
        assert!(validate_menu_item(&item).is_err());
    }
}
