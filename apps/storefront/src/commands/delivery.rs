//! # Delivery Commands

use serde::Serialize;
use tracing::debug;

use pedido_core::DeliverySelection;

use crate::error::ApiError;
use crate::state::DeliveryState;

/// Current state of the delivery section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryResponse {
    pub selection: DeliverySelection,
    pub address: String,
    pub address_required: bool,
    pub address_warning: bool,
}

impl From<&DeliveryState> for DeliveryResponse {
    fn from(state: &DeliveryState) -> Self {
        DeliveryResponse {
            selection: state.form().selection(),
            address: state.form().address().to_string(),
            address_required: state.form().address_required(),
            address_warning: state.address_warning(),
        }
    }
}

/// Picks home delivery or local pickup.
pub fn select_delivery(
    delivery: &mut DeliveryState,
    selection: DeliverySelection,
) -> DeliveryResponse {
    debug!(selection = %selection, "select_delivery command");

    delivery.select(selection);
    DeliveryResponse::from(&*delivery)
}

/// Stores the typed address.
///
/// Returns the new state and whether a visible address warning was hidden.
pub fn set_address(
    delivery: &mut DeliveryState,
    address: &str,
) -> Result<(DeliveryResponse, bool), ApiError> {
    debug!(len = address.len(), "set_address command");

    let hid_warning = delivery.set_address(address)?;
    Ok((DeliveryResponse::from(&*delivery), hid_warning))
}
