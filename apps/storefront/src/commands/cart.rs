//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│ Message  │       │
//! │  │  Cart    │     │          │     │  gate    │     │   sent   │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │       ▲                │                                  │             │
//! │       │           add_to_cart                             │             │
//! │       │           remove_from_cart                        │             │
//! │       │           drop_from_cart                          │             │
//! │       └───────────────────────────── cart cleared ◄───────┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use pedido_core::{CartStore, LineItem, RemoveOutcome};

use crate::error::ApiError;
use crate::state::{CartState, CartTotals, MenuState};

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub totals: CartTotals,
}

impl From<&CartStore> for CartResponse {
    fn from(cart: &CartStore) -> Self {
        CartResponse {
            items: cart.snapshot().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Result of a remove click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveResponse {
    /// False when the name was not in the cart
    pub changed: bool,
    pub cart: CartResponse,
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds one unit of a menu item to the cart.
///
/// ## Behavior
/// - Already in cart: quantity increases, price stays as first added
/// - Not in cart: added as a new line
/// - Not on the menu: `NOT_FOUND`, cart untouched
pub fn add_to_cart(
    menu: &MenuState,
    cart: &mut CartState,
    name: &str,
) -> Result<CartResponse, ApiError> {
    debug!(name = %name, "add_to_cart command");

    let item = menu.find(name)?;
    Ok(cart.with_cart_mut(|c| {
        c.add_item(item);
        CartResponse::from(&*c)
    }))
}

/// Takes one unit out of the cart. Unknown names are a no-op.
pub fn remove_from_cart(cart: &mut CartState, name: &str) -> RemoveResponse {
    debug!(name = %name, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        let outcome = c.remove_one_unit(name.trim());
        RemoveResponse {
            changed: outcome != RemoveOutcome::NotInCart,
            cart: CartResponse::from(&*c),
        }
    })
}

/// Removes the whole line for `name`. Unknown names are a no-op.
pub fn drop_from_cart(cart: &mut CartState, name: &str) -> RemoveResponse {
    debug!(name = %name, "drop_from_cart command");

    cart.with_cart_mut(|c| RemoveResponse {
        changed: c.remove_item(name.trim()),
        cart: CartResponse::from(&*c),
    })
}

/// Clears all items from the cart.
pub fn clear_cart(cart: &mut CartState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::ConfigState;
    use pedido_core::Money;

    fn menu() -> MenuState {
        MenuState::from_config(&ConfigState::default()).unwrap()
    }

    #[test]
    fn test_add_merges_by_name() {
        let menu = menu();
        let mut cart = CartState::new();

        add_to_cart(&menu, &mut cart, "X-BBQ").unwrap();
        let response = add_to_cart(&menu, &mut cart, "x-bbq").unwrap();

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].quantity, 2);
        assert_eq!(response.totals.item_count, 1);
        assert_eq!(response.totals.total, Money::from_cents(1800));
    }

    #[test]
    fn test_add_unknown_item_leaves_cart_alone() {
        let menu = menu();
        let mut cart = CartState::new();

        let err = add_to_cart(&menu, &mut cart, "X-Tudo").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(get_cart(&cart).items.is_empty());
    }

    #[test]
    fn test_remove_and_drop() {
        let menu = menu();
        let mut cart = CartState::new();
        add_to_cart(&menu, &mut cart, "Batata pequena").unwrap();
        add_to_cart(&menu, &mut cart, "Batata pequena").unwrap();
        add_to_cart(&menu, &mut cart, "Guaravita").unwrap();

        let response = remove_from_cart(&mut cart, "Batata pequena");
        assert!(response.changed);
        assert_eq!(response.cart.items[0].quantity, 1);

        let response = remove_from_cart(&mut cart, "Pizza");
        assert!(!response.changed);
        assert_eq!(response.cart.totals.item_count, 2);

        let response = drop_from_cart(&mut cart, "Guaravita");
        assert!(response.changed);
        assert_eq!(response.cart.totals.item_count, 1);
        assert_eq!(response.cart.totals.total, Money::from_cents(300));
    }

    #[test]
    fn test_clear_cart() {
        let menu = menu();
        let mut cart = CartState::new();
        add_to_cart(&menu, &mut cart, "X-Boladão").unwrap();

        let response = clear_cart(&mut cart);
        assert!(response.items.is_empty());
        assert_eq!(response.totals.total, Money::zero());
    }

    #[test]
    fn test_cart_response_json_shape() {
        let menu = menu();
        let mut cart = CartState::new();
        let response = add_to_cart(&menu, &mut cart, "Guaravita").unwrap();

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["items"][0]["unitPrice"], 200);
        assert_eq!(json["totals"]["itemCount"], 1);
        assert_eq!(json["totals"]["totalQuantity"], 1);
        assert_eq!(json["totals"]["total"], 200);
    }
}
