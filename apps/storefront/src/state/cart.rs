//! # Cart State
//!
//! Holds the session's one [`CartStore`].
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Session Line             Command                 Cart State Change     │
//! │  ────────────             ───────                 ─────────────────     │
//! │                                                                         │
//! │  add <name> ─────────────► add_to_cart() ───────► qty += 1 or push     │
//! │                                                                         │
//! │  remove <name> ──────────► remove_from_cart() ──► qty -= 1 or remove   │
//! │                                                                         │
//! │  drop <name> ────────────► drop_from_cart() ────► line removed         │
//! │                                                                         │
//! │  checkout ───────────────► checkout() ──────────► clear() on commit    │
//! │                                                                         │
//! │  cart / json ────────────► get_cart() ──────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! One actor drives the session, so the store is owned directly and lent
//! out by reference; there is no lock.

use serde::Serialize;

use pedido_core::{CartStore, Money};

/// Cart totals summary for responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Distinct lines, as shown on the cart badge
    pub item_count: usize,
    pub total_quantity: u64,
    pub total: Money,
}

impl From<&CartStore> for CartTotals {
    fn from(cart: &CartStore) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total: cart.total(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CartState {
    cart: CartStore,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: CartStore::new(),
        }
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartStore) -> R,
    {
        f(&self.cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut CartStore) -> R,
    {
        f(&mut self.cart)
    }
}
