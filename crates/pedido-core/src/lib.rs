//! # pedido-core: Pure Cart & Checkout Logic
//!
//! This crate is the **heart** of the Pedido storefront widget. It holds the
//! cart state and the checkout gate as plain data and pure functions.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pedido Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               Storefront (apps/storefront)                      │   │
//! │  │    Menu ──► Cart view ──► Delivery form ──► Checkout            │   │
//! │  │    Clock • Notifications • Order message • Messaging link       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pedido-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │  money   │ │   cart   │ │ checkout │ │ delivery / hours │  │   │
//! │  │   │  Money   │ │CartStore │ │ Decision │ │  DeliveryForm    │  │   │
//! │  │   │          │ │ LineItem │ │ Summary  │ │  OpeningHours    │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (MenuItem, LineItem, DeliverySelection)
//! - [`money`] - Money type with integer arithmetic
//! - [`catalog`] - Menu catalogue: categories and combos
//! - [`cart`] - The cart store
//! - [`checkout`] - Checkout gating and the order summary
//! - [`delivery`] - Delivery-selection state machine
//! - [`hours`] - Opening-hours rule
//! - [`validation`] - Input validators
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use pedido_core::{CartStore, CheckoutInputs, CheckoutValidator, Decision};
//! use pedido_core::{DeliveryForm, DeliverySelection, MenuItem, Money};
//!
//! let pizza = MenuItem::new("Pizza", Money::from_cents(2000)).unwrap();
//!
//! let mut cart = CartStore::new();
//! cart.add_item(&pizza);
//! cart.add_item(&pizza);
//! assert_eq!(cart.total(), Money::from_cents(4000));
//!
//! let mut form = DeliveryForm::new();
//! form.select(DeliverySelection::LocalPickup);
//!
//! let inputs = CheckoutInputs::gather(&cart, true, &form);
//! let decision = CheckoutValidator::evaluate(inputs, cart.snapshot());
//! assert!(matches!(decision, Decision::Proceed(_)));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod delivery;
pub mod error;
pub mod hours;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartSnapshot, CartStore, RemoveOutcome};
pub use catalog::{Catalog, Combo, MenuSection};
pub use checkout::{CheckoutInputs, CheckoutValidator, Decision, OrderLine, OrderSummary};
pub use delivery::DeliveryForm;
pub use error::{CoreError, CoreResult, ValidationError};
pub use hours::OpeningHours;
pub use money::{CurrencyFormat, Money};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a menu item name, in characters.
pub const MAX_ITEM_NAME_LEN: usize = 120;

/// Maximum length of a menu item description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 300;

/// Maximum length of a delivery address, in characters.
pub const MAX_ADDRESS_LEN: usize = 300;
