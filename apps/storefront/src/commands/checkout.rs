//! # Checkout Command
//!
//! Runs the checkout gate and, when it says go, commits the order.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Customer clicks "Finalizar pedido"                                     │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  1. Ask the clock for the hour, apply the opening hours                 │
//! │  2. Gather cart + delivery form into CheckoutInputs                     │
//! │  3. CheckoutValidator::evaluate                                         │
//! │       ├── AddressRequired → raise the address warning                   │
//! │       ├── other blockers  → returned as-is                              │
//! │       └── Proceed(summary)                                              │
//! │             ├── compose the order message                               │
//! │             ├── build the wa.me link                                    │
//! │             └── clear the cart                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, info};

use pedido_core::{CheckoutInputs, CheckoutValidator, Decision};

use crate::clock::Clock;
use crate::error::ApiError;
use crate::messaging::{compose_message, whatsapp_link};
use crate::state::{CartState, ConfigState, DeliveryState};

/// An order that went through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommittedOrder {
    pub message: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub decision: Decision,
    /// Present only when `decision` is `Proceed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<CommittedOrder>,
}

/// Attempts checkout.
///
/// On `Proceed` the cart is cleared before returning. The delivery form is
/// left as it was so a repeat order keeps the address.
pub fn checkout(
    cart: &mut CartState,
    delivery: &mut DeliveryState,
    config: &ConfigState,
    clock: &dyn Clock,
) -> Result<CheckoutResponse, ApiError> {
    let hour = clock.hour();
    let restaurant_open = config.opening_hours()?.is_open_at_hour(hour);
    debug!(hour, restaurant_open, "checkout command");

    let decision = cart.with_cart(|c| {
        let inputs = CheckoutInputs::gather(c, restaurant_open, delivery.form());
        CheckoutValidator::evaluate(inputs, c.snapshot())
    });

    let order = match &decision {
        Decision::Proceed(summary) => {
            let message = compose_message(summary, delivery.form(), &config.currency());
            let link = whatsapp_link(&config.whatsapp_digits(), &message)?;

            cart.with_cart_mut(|c| c.clear());
            info!(
                lines = summary.lines.len(),
                total = %summary.total,
                delivery = %delivery.form().selection(),
                "Order committed"
            );

            Some(CommittedOrder {
                message,
                link: link.to_string(),
            })
        }
        Decision::AddressRequired => {
            delivery.show_address_warning();
            None
        }
        blocked => {
            debug!(reason = blocked.code(), "Checkout blocked");
            None
        }
    };

    Ok(CheckoutResponse { decision, order })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::commands::cart::{add_to_cart, get_cart};
    use crate::state::MenuState;
    use pedido_core::{DeliverySelection, Money};

    struct Fixture {
        config: ConfigState,
        menu: MenuState,
        cart: CartState,
        delivery: DeliveryState,
    }

    impl Fixture {
        fn new() -> Self {
            let config = ConfigState::default();
            let menu = MenuState::from_config(&config).unwrap();
            Fixture {
                config,
                menu,
                cart: CartState::new(),
                delivery: DeliveryState::new(),
            }
        }

        fn add(&mut self, name: &str) {
            add_to_cart(&self.menu, &mut self.cart, name).unwrap();
        }

        fn checkout_at(&mut self, hour: u32) -> CheckoutResponse {
            checkout(
                &mut self.cart,
                &mut self.delivery,
                &self.config,
                &FixedClock(hour),
            )
            .unwrap()
        }
    }

    #[test]
    fn test_closed_restaurant_blocks_and_keeps_cart() {
        let mut fx = Fixture::new();
        fx.add("X-BBQ");
        fx.delivery.select(DeliverySelection::LocalPickup);

        let response = fx.checkout_at(17);
        assert_eq!(response.decision, Decision::RestaurantClosed);
        assert!(response.order.is_none());
        assert_eq!(get_cart(&fx.cart).items.len(), 1);
    }

    #[test]
    fn test_empty_cart_is_silent() {
        let mut fx = Fixture::new();
        fx.delivery.select(DeliverySelection::LocalPickup);

        let response = fx.checkout_at(20);
        assert_eq!(response.decision, Decision::EmptyCart);
    }

    #[test]
    fn test_missing_address_raises_warning() {
        let mut fx = Fixture::new();
        fx.add("X-BBQ");
        fx.delivery.select(DeliverySelection::HomeDelivery);

        let response = fx.checkout_at(20);
        assert_eq!(response.decision, Decision::AddressRequired);
        assert!(fx.delivery.address_warning());
        assert_eq!(get_cart(&fx.cart).items.len(), 1);
    }

    #[test]
    fn test_unselected_delivery() {
        let mut fx = Fixture::new();
        fx.add("X-BBQ");

        let response = fx.checkout_at(23);
        assert_eq!(response.decision, Decision::DeliveryMethodRequired);
    }

    #[test]
    fn test_proceed_builds_link_and_clears_cart() {
        let mut fx = Fixture::new();
        fx.add("X-BBQ");
        fx.add("X-BBQ");
        fx.add("Guaravita");
        fx.delivery.select(DeliverySelection::HomeDelivery);
        fx.delivery.set_address("Rua das Flores, 12").unwrap();

        let response = fx.checkout_at(18);

        let Decision::Proceed(summary) = &response.decision else {
            panic!("expected Proceed, got {:?}", response.decision);
        };
        assert_eq!(summary.total, Money::from_cents(900 * 2 + 200));

        let order = response.order.as_ref().unwrap();
        assert!(order.link.starts_with("https://wa.me/5521974857727?text="));
        assert!(order.message.contains("X-BBQ Quantidade: (2) Preço: R$ 9,00 |"));
        assert!(order.message.contains("*Total: R$ 20,00*"));
        assert!(order.message.ends_with("*Endereço: Rua das Flores, 12*"));

        assert!(get_cart(&fx.cart).items.is_empty());
        assert_eq!(fx.delivery.form().address(), "Rua das Flores, 12");
    }

    #[test]
    fn test_local_pickup_without_address_proceeds() {
        let mut fx = Fixture::new();
        fx.add("Batata pequena");
        fx.delivery.select(DeliverySelection::LocalPickup);

        let response = fx.checkout_at(21);
        assert!(response.decision.is_proceed());
        assert!(response
            .order
            .unwrap()
            .message
            .ends_with("*Retirada no local*"));
    }

    #[test]
    fn test_response_json_omits_order_when_blocked() {
        let mut fx = Fixture::new();
        let json = serde_json::to_value(fx.checkout_at(3)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "decision": { "outcome": "restaurant_closed" } })
        );
    }
}
