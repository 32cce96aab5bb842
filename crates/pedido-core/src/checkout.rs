//! # Checkout Validator
//!
//! Decides whether the "Finalizar pedido" action may go ahead.
//!
//! ## Decision Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  evaluate(inputs, snapshot)                                             │
//! │       │                                                                 │
//! │       ├── restaurant closed?            → RestaurantClosed              │
//! │       │                                                                 │
//! │       ├── cart empty?                   → EmptyCart (silent)            │
//! │       │                                                                 │
//! │       ├── home delivery, no address?    → AddressRequired               │
//! │       │                                                                 │
//! │       ├── no delivery method picked?    → DeliveryMethodRequired        │
//! │       │                                                                 │
//! │       └── otherwise                     → Proceed(OrderSummary)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The order is fixed: when several conditions fail at once, the first one
//! in this list is the one the customer sees.
//!
//! ## After Proceed
//! The caller owns the commit: it turns the [`OrderSummary`] into the
//! outbound message and then clears the cart. Nothing here formats text or
//! touches the cart.

use serde::Serialize;
use ts_rs::TS;

use crate::cart::{CartSnapshot, CartStore};
use crate::delivery::DeliveryForm;
use crate::money::Money;
use crate::types::{DeliverySelection, LineItem};

// =============================================================================
// Inputs
// =============================================================================

/// Everything the checkout gate looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutInputs {
    pub cart_empty: bool,
    pub restaurant_open: bool,
    pub delivery: DeliverySelection,
    pub address_provided: bool,
}

impl CheckoutInputs {
    /// Reads the inputs off the cart and the delivery form.
    pub fn gather(cart: &CartStore, restaurant_open: bool, form: &DeliveryForm) -> Self {
        CheckoutInputs {
            cart_empty: cart.is_empty(),
            restaurant_open,
            delivery: form.selection(),
            address_provided: form.address_provided(),
        }
    }
}

// =============================================================================
// Order Summary
// =============================================================================

/// One line of a committed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub line_total: Money,
}

impl From<&LineItem> for OrderLine {
    fn from(line: &LineItem) -> Self {
        OrderLine {
            name: line.name.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price,
            line_total: line.line_total(),
        }
    }
}

/// What the customer is ordering, frozen at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct OrderSummary {
    pub lines: Vec<OrderLine>,
    pub total: Money,
}

impl OrderSummary {
    /// Freezes the cart's current lines and total.
    pub fn from_snapshot(snapshot: CartSnapshot<'_>) -> Self {
        OrderSummary {
            lines: snapshot.iter().map(OrderLine::from).collect(),
            total: snapshot.total(),
        }
    }
}

// =============================================================================
// Decision
// =============================================================================

/// Outcome of a checkout attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(tag = "outcome", content = "summary", rename_all = "snake_case")]
pub enum Decision {
    /// Outside opening hours.
    RestaurantClosed,
    /// Nothing to order. The widget shows nothing for this one.
    EmptyCart,
    /// Home delivery picked but the address field is empty.
    AddressRequired,
    /// Neither delivery nor pickup picked.
    DeliveryMethodRequired,
    /// Checkout may go ahead with this order.
    Proceed(OrderSummary),
}

impl Decision {
    pub fn is_proceed(&self) -> bool {
        matches!(self, Decision::Proceed(_))
    }

    /// Stable machine-readable name, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            Decision::RestaurantClosed => "restaurant_closed",
            Decision::EmptyCart => "empty_cart",
            Decision::AddressRequired => "address_required",
            Decision::DeliveryMethodRequired => "delivery_method_required",
            Decision::Proceed(_) => "proceed",
        }
    }
}

// =============================================================================
// Validator
// =============================================================================

/// The checkout gate.
pub struct CheckoutValidator;

impl CheckoutValidator {
    /// Evaluates the checkout rules in priority order.
    ///
    /// `inputs.cart_empty` drives the gate; `snapshot` is only read to build
    /// the summary on [`Decision::Proceed`].
    ///
    /// ```rust
    /// use pedido_core::{CartStore, CheckoutInputs, CheckoutValidator, Decision};
    /// use pedido_core::DeliverySelection;
    ///
    /// let cart = CartStore::new();
    /// let inputs = CheckoutInputs {
    ///     cart_empty: true,
    ///     restaurant_open: false,
    ///     delivery: DeliverySelection::Unselected,
    ///     address_provided: false,
    /// };
    /// // Closed wins over everything else
    /// assert_eq!(
    ///     CheckoutValidator::evaluate(inputs, cart.snapshot()),
    ///     Decision::RestaurantClosed
    /// );
    /// ```
    pub fn evaluate(inputs: CheckoutInputs, snapshot: CartSnapshot<'_>) -> Decision {
        if !inputs.restaurant_open {
            return Decision::RestaurantClosed;
        }

        if inputs.cart_empty {
            return Decision::EmptyCart;
        }

        if inputs.delivery.requires_address() && !inputs.address_provided {
            return Decision::AddressRequired;
        }

        if !inputs.delivery.is_selected() {
            return Decision::DeliveryMethodRequired;
        }

        Decision::Proceed(OrderSummary::from_snapshot(snapshot))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MenuItem;

    const ALL_SELECTIONS: [DeliverySelection; 3] = [
        DeliverySelection::Unselected,
        DeliverySelection::HomeDelivery,
        DeliverySelection::LocalPickup,
    ];

    fn cart_with_pizza() -> CartStore {
        let mut cart = CartStore::new();
        cart.add_item(&MenuItem::new("Pizza", Money::from_cents(2000)).unwrap());
        cart
    }

    fn inputs(
        cart_empty: bool,
        restaurant_open: bool,
        delivery: DeliverySelection,
        address_provided: bool,
    ) -> CheckoutInputs {
        CheckoutInputs {
            cart_empty,
            restaurant_open,
            delivery,
            address_provided,
        }
    }

    #[test]
    fn test_empty_cart_when_open_regardless_of_delivery() {
        let cart = CartStore::new();
        for delivery in ALL_SELECTIONS {
            for address_provided in [true, false] {
                let decision = CheckoutValidator::evaluate(
                    inputs(true, true, delivery, address_provided),
                    cart.snapshot(),
                );
                assert_eq!(decision, Decision::EmptyCart);
            }
        }
    }

    #[test]
    fn test_closed_wins_even_when_everything_else_is_valid() {
        let cart = cart_with_pizza();
        let decision = CheckoutValidator::evaluate(
            inputs(false, false, DeliverySelection::HomeDelivery, true),
            cart.snapshot(),
        );
        assert_eq!(decision, Decision::RestaurantClosed);

        let decision = CheckoutValidator::evaluate(
            inputs(false, false, DeliverySelection::LocalPickup, false),
            cart.snapshot(),
        );
        assert_eq!(decision, Decision::RestaurantClosed);
    }

    #[test]
    fn test_home_delivery_without_address() {
        let cart = cart_with_pizza();
        let decision = CheckoutValidator::evaluate(
            inputs(false, true, DeliverySelection::HomeDelivery, false),
            cart.snapshot(),
        );
        assert_eq!(decision, Decision::AddressRequired);
    }

    #[test]
    fn test_unselected_delivery() {
        let cart = cart_with_pizza();
        for address_provided in [true, false] {
            let decision = CheckoutValidator::evaluate(
                inputs(false, true, DeliverySelection::Unselected, address_provided),
                cart.snapshot(),
            );
            assert_eq!(decision, Decision::DeliveryMethodRequired);
        }
    }

    #[test]
    fn test_local_pickup_never_needs_address() {
        let cart = cart_with_pizza();
        let decision = CheckoutValidator::evaluate(
            inputs(false, true, DeliverySelection::LocalPickup, false),
            cart.snapshot(),
        );
        assert!(decision.is_proceed());
    }

    #[test]
    fn test_home_delivery_with_address_proceeds_with_summary() {
        let mut cart = cart_with_pizza();
        cart.add_item(&MenuItem::new("Pizza", Money::from_cents(2000)).unwrap());
        cart.add_item(&MenuItem::new("Soda", Money::from_cents(500)).unwrap());

        let decision = CheckoutValidator::evaluate(
            inputs(false, true, DeliverySelection::HomeDelivery, true),
            cart.snapshot(),
        );

        let Decision::Proceed(summary) = decision else {
            panic!("expected Proceed, got {:?}", decision);
        };
        assert_eq!(summary.total, Money::from_cents(4500));
        assert_eq!(
            summary.lines,
            vec![
                OrderLine {
                    name: "Pizza".to_string(),
                    quantity: 2,
                    unit_price: Money::from_cents(2000),
                    line_total: Money::from_cents(4000),
                },
                OrderLine {
                    name: "Soda".to_string(),
                    quantity: 1,
                    unit_price: Money::from_cents(500),
                    line_total: Money::from_cents(500),
                },
            ]
        );
    }

    #[test]
    fn test_address_check_comes_before_delivery_check() {
        // Only HomeDelivery can hit AddressRequired, so Unselected with no
        // address falls through to DeliveryMethodRequired.
        let cart = cart_with_pizza();
        let decision = CheckoutValidator::evaluate(
            inputs(false, true, DeliverySelection::Unselected, false),
            cart.snapshot(),
        );
        assert_eq!(decision, Decision::DeliveryMethodRequired);
    }

    #[test]
    fn test_gather_reads_cart_and_form() {
        let cart = cart_with_pizza();
        let mut form = DeliveryForm::new();
        form.select(DeliverySelection::HomeDelivery);
        form.set_address("Rua A, 1").unwrap();

        assert_eq!(
            CheckoutInputs::gather(&cart, true, &form),
            inputs(false, true, DeliverySelection::HomeDelivery, true)
        );

        form.select(DeliverySelection::LocalPickup);
        assert_eq!(
            CheckoutInputs::gather(&CartStore::new(), false, &form),
            inputs(true, false, DeliverySelection::LocalPickup, false)
        );
    }

    #[test]
    fn test_decision_codes() {
        assert_eq!(Decision::EmptyCart.code(), "empty_cart");
        assert_eq!(Decision::RestaurantClosed.code(), "restaurant_closed");
        assert!(!Decision::AddressRequired.is_proceed());
    }

    #[test]
    fn test_decision_json_shape() {
        let json = serde_json::to_value(Decision::AddressRequired).unwrap();
        assert_eq!(json, serde_json::json!({ "outcome": "address_required" }));

        let cart = cart_with_pizza();
        let summary = OrderSummary::from_snapshot(cart.snapshot());
        let json = serde_json::to_value(Decision::Proceed(summary)).unwrap();
        assert_eq!(json["outcome"], "proceed");
        assert_eq!(json["summary"]["total"], 2000);
        assert_eq!(json["summary"]["lines"][0]["lineTotal"], 2000);
    }
}
