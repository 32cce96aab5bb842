//! # Order Message
//!
//! Turns a committed [`OrderSummary`] into the text sent to the restaurant
//! and the `wa.me` link that pre-fills it.
//!
//! ## Message Layout
//! ```text
//! Pizza Quantidade: (2) Preço: R$ 20,00 | Soda Quantidade: (1) Preço: R$ 5,00 |
//! *Total: R$ 45,00* | *Endereço: Rua das Flores, 12*
//! ```
//!
//! Local pickup replaces the address segment with `*Retirada no local*`.

use url::Url;

use pedido_core::{CurrencyFormat, DeliveryForm, DeliverySelection, OrderSummary};

const WHATSAPP_BASE: &str = "https://wa.me/";

/// Builds the order text.
pub fn compose_message(
    summary: &OrderSummary,
    delivery: &DeliveryForm,
    currency: &CurrencyFormat,
) -> String {
    let lines = summary
        .lines
        .iter()
        .map(|line| {
            format!(
                "{} Quantidade: ({}) Preço: {} |",
                line.name,
                line.quantity,
                currency.format(line.unit_price)
            )
        })
        .collect::<Vec<_>>()
        .join(" ");

    let destination = match delivery.selection() {
        DeliverySelection::LocalPickup => "*Retirada no local*".to_string(),
        _ => format!("*Endereço: {}*", delivery.address().trim()),
    };

    format!(
        "{}\n*Total: {}* | {}",
        lines,
        currency.format(summary.total),
        destination
    )
}

/// Builds `https://wa.me/<digits>?text=<message>`.
pub fn whatsapp_link(digits: &str, message: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(WHATSAPP_BASE)?.join(digits)?;
    url.query_pairs_mut().append_pair("text", message);
    Ok(url)
}
