//! # Delivery Form
//!
//! The delivery-method radio pair plus the address field, as one state
//! machine.
//!
//! ```text
//!   select(HomeDelivery) ──► address kept, required at checkout
//!   select(LocalPickup)  ──► address cleared, never required
//!   set_address(text)    ──► stored as typed
//! ```
//!
//! The checkout gate only reads [`DeliveryForm::selection`] and
//! [`DeliveryForm::address_provided`]; clearing the address on pickup
//! happens here, on the transition.

use serde::Serialize;

use crate::types::DeliverySelection;
use crate::validation::{validate_address, ValidationResult};

/// Delivery selection and the address typed for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryForm {
    selection: DeliverySelection,
    address: String,
}

impl DeliveryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches the delivery method.
    ///
    /// Moving into [`DeliverySelection::LocalPickup`] discards any address
    /// already typed.
    ///
    /// ```rust
    /// use pedido_core::{DeliveryForm, DeliverySelection};
    ///
    /// let mut form = DeliveryForm::new();
    /// form.select(DeliverySelection::HomeDelivery);
    /// form.set_address("Rua A, 10").unwrap();
    ///
    /// form.select(DeliverySelection::LocalPickup);
    /// assert_eq!(form.address(), "");
    /// ```
    pub fn select(&mut self, selection: DeliverySelection) {
        if selection == DeliverySelection::LocalPickup {
            self.address.clear();
        }
        self.selection = selection;
    }

    /// Stores the address text.
    pub fn set_address(&mut self, address: impl Into<String>) -> ValidationResult<()> {
        let address = address.into();
        validate_address(&address)?;
        self.address = address;
        Ok(())
    }

    pub fn selection(&self) -> DeliverySelection {
        self.selection
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// True when the address holds more than whitespace.
    pub fn address_provided(&self) -> bool {
        !self.address.trim().is_empty()
    }

    /// True when the current selection needs an address at checkout.
    pub fn address_required(&self) -> bool {
        self.selection.requires_address()
    }

    /// Back to nothing selected and no address.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
