//! # Delivery State
//!
//! The delivery form plus the inline address warning.
//!
//! The warning is raised by a checkout that ended in `AddressRequired` and
//! goes away as soon as a non-empty address is typed.

use pedido_core::{DeliveryForm, DeliverySelection, ValidationError};

#[derive(Debug, Default)]
pub struct DeliveryState {
    form: DeliveryForm,
    address_warning: bool,
}

impl DeliveryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &DeliveryForm {
        &self.form
    }

    pub fn select(&mut self, selection: DeliverySelection) {
        self.form.select(selection);
        if !selection.requires_address() {
            self.address_warning = false;
        }
    }

    /// Stores the address; returns true if this hid a visible warning.
    pub fn set_address(&mut self, address: &str) -> Result<bool, ValidationError> {
        self.form.set_address(address)?;

        let hide = self.address_warning && self.form.address_provided();
        if hide {
            self.address_warning = false;
        }
        Ok(hide)
    }

    pub fn show_address_warning(&mut self) {
        self.address_warning = true;
    }

    pub fn address_warning(&self) -> bool {
        self.address_warning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_address_hides_warning() {
        let mut state = DeliveryState::new();
        state.select(DeliverySelection::HomeDelivery);
        state.show_address_warning();

        assert!(!state.set_address("  ").unwrap());
        assert!(state.address_warning());

        assert!(state.set_address("Rua A, 1").unwrap());
        assert!(!state.address_warning());

        // Nothing left to hide
        assert!(!state.set_address("Rua A, 2").unwrap());
    }

    #[test]
    fn test_switching_to_pickup_hides_warning_and_clears_address() {
        let mut state = DeliveryState::new();
        state.select(DeliverySelection::HomeDelivery);
        state.set_address("Rua B").unwrap();
        state.show_address_warning();

        state.select(DeliverySelection::LocalPickup);
        assert!(!state.address_warning());
        assert_eq!(state.form().address(), "");
    }
}
