//! # Cart Store
//!
//! Owns the list of line items shown in the cart modal.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Widget Action            Operation               State Change          │
//! │  ─────────────            ─────────               ────────────          │
//! │                                                                         │
//! │  Click menu button ──────► add_item() ──────────► qty += 1 or push     │
//! │                                                                         │
//! │  Click "Remover" ────────► remove_one_unit() ───► qty -= 1 or remove   │
//! │                                                                         │
//! │  Checkout committed ─────► clear() ─────────────► items.clear()        │
//! │                                                                         │
//! │  Open cart modal ────────► snapshot() / total() ► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per distinct name
//! - Every line has `quantity >= 1`
//! - Lines keep first-add order
//! - The total is derived from the lines on every call, never stored
//!
//! Lookups are linear scans; a cart holds a handful of lines.

use serde::Serialize;

use crate::money::Money;
use crate::types::{LineItem, MenuItem};

// =============================================================================
// Remove Outcome
// =============================================================================

/// What [`CartStore::remove_one_unit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The line is still there with one unit less.
    Decremented { remaining: u32 },
    /// The last unit went, and the line with it.
    Removed,
    /// No line with that name; nothing changed.
    NotInCart,
}

// =============================================================================
// Cart Store
// =============================================================================

/// The shopping cart.
///
/// ## Example
/// ```rust
/// use pedido_core::{CartStore, MenuItem, Money};
///
/// let pizza = MenuItem::new("Pizza", Money::from_cents(2000)).unwrap();
/// let soda = MenuItem::new("Soda", Money::from_cents(500)).unwrap();
///
/// let mut cart = CartStore::new();
/// cart.add_item(&pizza);
/// cart.add_item(&pizza);
/// cart.add_item(&soda);
///
/// assert_eq!(cart.item_count(), 2);
/// assert_eq!(cart.total(), Money::from_cents(4500));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartStore {
    items: Vec<LineItem>,
}

impl CartStore {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        CartStore { items: Vec::new() }
    }

    /// Adds one unit of a menu item.
    ///
    /// ## Behavior
    /// - Name already in cart: quantity + 1, stored price untouched
    /// - Name not in cart: appended with quantity 1
    ///
    /// The first price seen for a name wins, even if a later add carries a
    /// different one.
    pub fn add_item(&mut self, item: &MenuItem) {
        match self.position(item.name()) {
            Some(index) => {
                let line = &mut self.items[index];
                line.quantity = line.quantity.saturating_add(1);
            }
            None => self.items.push(LineItem::first_of(item)),
        }
    }

    /// Takes one unit of `name` out of the cart.
    ///
    /// ## Behavior
    /// - Not in cart: no-op
    /// - Quantity > 1: quantity - 1
    /// - Quantity == 1: the line is removed
    pub fn remove_one_unit(&mut self, name: &str) -> RemoveOutcome {
        let Some(index) = self.position(name) else {
            return RemoveOutcome::NotInCart;
        };

        let line = &mut self.items[index];
        if line.quantity > 1 {
            line.quantity -= 1;
            return RemoveOutcome::Decremented {
                remaining: line.quantity,
            };
        }

        self.items.remove(index);
        RemoveOutcome::Removed
    }

    /// Removes the whole line for `name`, whatever its quantity.
    ///
    /// Returns `false` if there was no such line.
    pub fn remove_item(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Read-only view of the lines as they are right now.
    ///
    /// The snapshot borrows the cart, so the cart cannot change while the
    /// snapshot is alive; it can be iterated any number of times.
    pub fn snapshot(&self) -> CartSnapshot<'_> {
        CartSnapshot { items: &self.items }
    }

    /// Looks up the line for `name`.
    pub fn get(&self, name: &str) -> Option<&LineItem> {
        self.items.iter().find(|line| line.name == name)
    }

    /// Sum of `unit_price × quantity` over all lines. Zero when empty.
    pub fn total(&self) -> Money {
        self.snapshot().total()
    }

    /// Number of distinct lines (not units).
    ///
    /// This is what the cart badge shows: two pizzas and a soda count as 2.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities over all lines.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|line| line.name == name)
    }
}

// =============================================================================
// Cart Snapshot
// =============================================================================

/// Borrowed, ordered view over the cart's lines.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct CartSnapshot<'a> {
    items: &'a [LineItem],
}

impl<'a> CartSnapshot<'a> {
    /// Iterates the lines in first-add order.
    pub fn iter(&self) -> std::slice::Iter<'a, LineItem> {
        self.items.iter()
    }

    /// Sum of line totals.
    pub fn total(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the cart had no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Owned copy of the lines.
    pub fn to_vec(&self) -> Vec<LineItem> {
        self.items.to_vec()
    }
}

impl<'a> IntoIterator for CartSnapshot<'a> {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
