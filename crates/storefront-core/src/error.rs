//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Catalog and cart rule violations               │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront-db errors (separate crate)                                 │
//! │  └── DbError          - Catalog store failures                         │
//! │                                                                         │
//! │  storefront app errors                                                 │
//! │  └── ApiError         - What the presentation layer sees (serialized)  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unknown cart ids are NOT errors: `update_quantity` and `remove` treat
//! them as silent no-ops, so there is no "cart item not found" variant.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core storefront errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Menu item cannot be found in the catalog snapshot.
    #[error("Menu item not found: {0}")]
    MenuItemNotFound(String),

    /// Menu item exists but is flagged unavailable.
    ///
    /// ## When This Occurs
    /// - Kitchen ran out of an ingredient and staff toggled the item off
    /// - Catalog snapshot refreshed while the customer had the card open
    #[error("{name} is currently unavailable")]
    ItemUnavailable { id: String, name: String },

    /// The requested variation is not offered by the item.
    #[error("Variation {variation_id} is not offered for {item_id}")]
    UnknownVariation {
        item_id: String,
        variation_id: String,
    },

    /// The requested add-on is not offered by the item.
    #[error("Add-on {add_on_id} is not offered for {item_id}")]
    UnknownAddOn { item_id: String, add_on_id: String },

    /// An active discount is not below the base price.
    #[error("Discount price {discount} must be below base price {base}")]
    InvalidDiscount { base: String, discount: String },

    /// Discount percentage requested for an item with no base price.
    #[error("Cannot compute a discount percentage on a zero base price")]
    ZeroBasePrice,

    /// A cart change would push a line or the cart total past what
    /// `Money` can hold.
    #[error("Cart total is too large")]
    AmountOverflow,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value within a collection (e.g., two variations with one id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
