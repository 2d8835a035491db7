//! # Cart State
//!
//! Holds the customer's cart ledger for the session.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Several commands read and modify the cart
//! 2. Only one command should modify the cart at a time
//! 3. Commands can run concurrently on the async runtime
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Customer Action          Command                 Cart State Change     │
//! │  ───────────────          ───────                 ─────────────────     │
//! │                                                                         │
//! │  Add to Cart ────────────► add_to_cart() ───────► line pushed / qty += │
//! │                                                                         │
//! │  Stepper +/- ────────────► update_cart_item() ──► qty = n (≤ 0 drops)  │
//! │                                                                         │
//! │  Click Remove ───────────► remove_from_cart() ──► line removed         │
//! │                                                                         │
//! │  Checkout done ──────────► clear_cart() ────────► items cleared        │
//! │                                                                         │
//! │  Open Cart ──────────────► get_cart() ──────────► (read only)          │
//! │                                                                         │
//! │  NOTE: All write operations acquire the Mutex lock exclusively.         │
//! │        Read operations also acquire the lock but release it quickly.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use storefront_core::Cart;
use tracing::warn;

/// Managed cart state.
///
/// Cloning shares the same cart.
#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|cart| CartTotals::from(cart));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.lock();
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_item(&item, 1))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.lock();
        f(&mut cart)
    }

    // Cart mutations validate before they write, so a poisoned lock still
    // guards a valid ledger.
    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().unwrap_or_else(|poisoned| {
            warn!("Cart mutex poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{MenuItem, Money};

    fn latte() -> MenuItem {
        MenuItem::new("latte", "Latte", "coffee", Money::from_centavos(12000))
    }

    #[test]
    fn test_clones_share_cart() {
        let state = CartState::new();
        let other = state.clone();

        state.with_cart_mut(|c| c.add_item(&latte(), 2)).unwrap();

        assert_eq!(other.with_cart(|c| c.quantity_of("latte")), 2);
        assert_eq!(other.with_cart(|c| c.total()).centavos(), 24000);
    }

    #[test]
    fn test_poisoned_lock_recovers() {
        let state = CartState::new();
        state.with_cart_mut(|c| c.add_item(&latte(), 1)).unwrap();

        let poisoner = state.clone();
        let result = std::thread::spawn(move || {
            poisoner.with_cart_mut(|_| panic!("boom"));
        })
        .join();
        assert!(result.is_err());

        assert_eq!(state.with_cart(|c| c.item_count()), 1);
    }
}
