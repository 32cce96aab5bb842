//! # Notifications
//!
//! Turns cart events and checkout decisions into what the customer sees.
//!
//! ## Decision → UI Effect
//! ```text
//! ┌──────────────────────────┬──────────────────────────────────────────────┐
//! │  Decision                │  Effect                                      │
//! ├──────────────────────────┼──────────────────────────────────────────────┤
//! │  RestaurantClosed        │  error toast  "Ops, o restaurante está..."   │
//! │  EmptyCart               │  nothing                                     │
//! │  AddressRequired         │  inline warning on the address field         │
//! │  DeliveryMethodRequired  │  error toast  "Por favor, selecione..."      │
//! │  Proceed                 │  nothing (the messaging link opens)          │
//! └──────────────────────────┴──────────────────────────────────────────────┘
//! ```
//!
//! [`effect_for`] is the only place that mapping is written down.

use serde::Serialize;
use std::io::{self, Write};

use pedido_core::Decision;

pub const ITEM_ADDED: &str = "Item adicionado ao carrinho!";
pub const ITEM_REMOVED: &str = "Item removido do carrinho!";
pub const RESTAURANT_CLOSED: &str = "Ops, o restaurante está fechado!";
pub const DELIVERY_METHOD_REQUIRED: &str = "Por favor, selecione a forma de entrega!";
pub const ADDRESS_WARNING: &str = "Digite seu endereço completo!";

/// Colour of a transient toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Success,
    Error,
}

/// Something the presentation layer should show or hide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum UiEffect {
    Toast { kind: ToastKind, message: String },
    ShowAddressWarning,
    HideAddressWarning,
}

impl UiEffect {
    pub fn toast(kind: ToastKind, message: &str) -> Self {
        UiEffect::Toast {
            kind,
            message: message.to_string(),
        }
    }

    pub fn item_added() -> Self {
        UiEffect::toast(ToastKind::Success, ITEM_ADDED)
    }

    pub fn item_removed() -> Self {
        UiEffect::toast(ToastKind::Error, ITEM_REMOVED)
    }
}

/// Effect for a checkout decision, if any.
pub fn effect_for(decision: &Decision) -> Option<UiEffect> {
    match decision {
        Decision::RestaurantClosed => Some(UiEffect::toast(ToastKind::Error, RESTAURANT_CLOSED)),
        Decision::EmptyCart => None,
        Decision::AddressRequired => Some(UiEffect::ShowAddressWarning),
        Decision::DeliveryMethodRequired => {
            Some(UiEffect::toast(ToastKind::Error, DELIVERY_METHOD_REQUIRED))
        }
        Decision::Proceed(_) => None,
    }
}

// =============================================================================
// Notifier
// =============================================================================

/// Presents UI effects.
pub trait Notifier {
    fn notify(&mut self, effect: &UiEffect) -> io::Result<()>;
}

/// Prints effects as bracketed lines, e.g. `[ok] Item adicionado ao carrinho!`.
#[derive(Debug)]
pub struct ConsoleNotifier<W: Write> {
    out: W,
}

impl<W: Write> ConsoleNotifier<W> {
    pub fn new(out: W) -> Self {
        ConsoleNotifier { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleNotifier<io::Stdout> {
    pub fn stdout() -> Self {
        ConsoleNotifier::new(io::stdout())
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn notify(&mut self, effect: &UiEffect) -> io::Result<()> {
        match effect {
            UiEffect::Toast {
                kind: ToastKind::Success,
                message,
            } => writeln!(self.out, "[ok] {}", message),
            UiEffect::Toast {
                kind: ToastKind::Error,
                message,
            } => writeln!(self.out, "[!] {}", message),
            UiEffect::ShowAddressWarning => writeln!(self.out, "[endereço] {}", ADDRESS_WARNING),
            UiEffect::HideAddressWarning => Ok(()),
        }
    }
}

/// Keeps every effect it receives; used by tests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub effects: Vec<UiEffect>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, effect: &UiEffect) -> io::Result<()> {
        self.effects.push(effect.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pedido_core::{CartStore, OrderSummary};

    #[test]
    fn test_decision_table() {
        assert_eq!(
            effect_for(&Decision::RestaurantClosed),
            Some(UiEffect::toast(ToastKind::Error, RESTAURANT_CLOSED))
        );
        assert_eq!(effect_for(&Decision::EmptyCart), None);
        assert_eq!(
            effect_for(&Decision::AddressRequired),
            Some(UiEffect::ShowAddressWarning)
        );
        assert_eq!(
            effect_for(&Decision::DeliveryMethodRequired),
            Some(UiEffect::toast(ToastKind::Error, DELIVERY_METHOD_REQUIRED))
        );

        let summary = OrderSummary::from_snapshot(CartStore::new().snapshot());
        assert_eq!(effect_for(&Decision::Proceed(summary)), None);
    }

    #[test]
    fn test_console_notifier_output() {
        let mut notifier = ConsoleNotifier::new(Vec::new());
        notifier.notify(&UiEffect::item_added()).unwrap();
        notifier.notify(&UiEffect::item_removed()).unwrap();
        notifier.notify(&UiEffect::ShowAddressWarning).unwrap();
        notifier.notify(&UiEffect::HideAddressWarning).unwrap();

        let out = String::from_utf8(notifier.into_inner()).unwrap();
        assert_eq!(
            out,
            "[ok] Item adicionado ao carrinho!\n\
             [!] Item removido do carrinho!\n\
             [endereço] Digite seu endereço completo!\n"
        );
    }

    #[test]
    fn test_effect_json_shape() {
        let json = serde_json::to_value(UiEffect::item_added()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "effect": "toast",
                "kind": "success",
                "message": "Item adicionado ao carrinho!"
            })
        );
    }
}
