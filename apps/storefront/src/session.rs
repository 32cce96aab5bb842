//! # Session
//!
//! Line-oriented front end. Each input line is one customer action, parsed
//! into a [`Command`] and dispatched to the matching command function.
//!
//! ```text
//! > add X-BBQ
//! [ok] Item adicionado ao carrinho!
//! > delivery pickup
//! > checkout
//! https://wa.me/5521974857727?text=...
//! ```
//!
//! Notifications go through the [`Notifier`]; everything else is written to
//! the session output.

use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::{debug, warn};

use pedido_core::{CurrencyFormat, DeliverySelection};

use crate::clock::Clock;
use crate::commands::cart::{
    add_to_cart, drop_from_cart, get_cart, remove_from_cart, CartResponse,
};
use crate::commands::checkout::checkout;
use crate::commands::delivery::{select_delivery, set_address, DeliveryResponse};
use crate::commands::menu::{get_menu, MenuResponse};
use crate::error::ApiError;
use crate::notify::{effect_for, Notifier, UiEffect};
use crate::state::{CartState, ConfigState, DeliveryState, MenuState};

const HELP: &str = "\
Comandos:
  menu                    mostra o cardápio
  add <item>              adiciona uma unidade
  remove <item>           remove uma unidade
  drop <item>             remove o item inteiro
  cart                    mostra o carrinho
  json                    carrinho e entrega em JSON
  delivery home|pickup    escolhe a forma de entrega
  address <endereço>      informa o endereço
  checkout                finaliza o pedido
  help                    esta ajuda
  quit                    sair";

/// Whether the loop keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Menu,
    Add(String),
    Remove(String),
    Drop(String),
    Cart,
    Json,
    Delivery(DeliverySelection),
    Address(String),
    Checkout,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = ApiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        let argument = |usage: &str| {
            if rest.is_empty() {
                Err(ApiError::validation(format!("uso: {}", usage)))
            } else {
                Ok(rest.to_string())
            }
        };

        match keyword.to_lowercase().as_str() {
            "menu" => Ok(Command::Menu),
            "add" => argument("add <item>").map(Command::Add),
            "remove" => argument("remove <item>").map(Command::Remove),
            "drop" => argument("drop <item>").map(Command::Drop),
            "cart" => Ok(Command::Cart),
            "json" => Ok(Command::Json),
            "delivery" => {
                let selection = argument("delivery home|pickup")?;
                selection
                    .parse::<DeliverySelection>()
                    .map(Command::Delivery)
                    .map_err(|_| ApiError::validation("uso: delivery home|pickup"))
            }
            // An empty address is allowed: it clears the field.
            "address" => Ok(Command::Address(rest.to_string())),
            "checkout" => Ok(Command::Checkout),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(ApiError::not_found(format!("comando desconhecido: {}", other))),
        }
    }
}

/// Cart and delivery as printed by the `json` command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionView {
    cart: CartResponse,
    delivery: DeliveryResponse,
}

/// One customer's shopping session.
pub struct Session<C: Clock, N: Notifier> {
    config: ConfigState,
    menu: MenuState,
    cart: CartState,
    delivery: DeliveryState,
    clock: C,
    notifier: N,
}

impl<C: Clock, N: Notifier> Session<C, N> {
    /// Starts a session with an empty cart and no delivery choice.
    pub fn new(config: ConfigState, clock: C, notifier: N) -> Result<Self, ApiError> {
        config.validate()?;
        let menu = MenuState::from_config(&config)?;

        Ok(Session {
            config,
            menu,
            cart: CartState::new(),
            delivery: DeliveryState::new(),
            clock,
            notifier,
        })
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn delivery(&self) -> &DeliveryState {
        &self.delivery
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Reads commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "Bem-vindo ao {}! Digite 'help' para ver os comandos.",
            self.config.store_name
        )?;

        for line in input.lines() {
            if self.handle_line(&line?, out)? == Flow::Quit {
                break;
            }
        }

        debug!("Session ended");
        Ok(())
    }

    /// Handles one input line. Command failures are printed, not returned.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{}", err.message)?;
                return Ok(Flow::Continue);
            }
        };

        self.execute(command, out)
    }

    fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<Flow> {
        match command {
            Command::Menu => match get_menu(&self.menu, &self.config) {
                Ok(menu) => render_menu(out, &menu, &self.config.currency())?,
                Err(err) => report(out, &err)?,
            },

            Command::Add(name) => match add_to_cart(&self.menu, &mut self.cart, &name) {
                Ok(_) => self.notifier.notify(&UiEffect::item_added())?,
                Err(err) => report(out, &err)?,
            },

            Command::Remove(name) => {
                if remove_from_cart(&mut self.cart, &name).changed {
                    self.notifier.notify(&UiEffect::item_removed())?;
                } else {
                    writeln!(out, "{} não está no carrinho", name)?;
                }
            }

            Command::Drop(name) => {
                if drop_from_cart(&mut self.cart, &name).changed {
                    self.notifier.notify(&UiEffect::item_removed())?;
                } else {
                    writeln!(out, "{} não está no carrinho", name)?;
                }
            }

            Command::Cart => {
                let cart = get_cart(&self.cart);
                render_cart(out, &cart, &self.config.currency())?;
            }

            Command::Json => {
                let view = SessionView {
                    cart: get_cart(&self.cart),
                    delivery: DeliveryResponse::from(&self.delivery),
                };
                serde_json::to_writer_pretty(&mut *out, &view).map_err(io::Error::from)?;
                writeln!(out)?;
            }

            Command::Delivery(selection) => {
                let warning_was_shown = self.delivery.address_warning();
                let response = select_delivery(&mut self.delivery, selection);
                if warning_was_shown && !response.address_warning {
                    self.notifier.notify(&UiEffect::HideAddressWarning)?;
                }
                writeln!(out, "Entrega: {}", response.selection)?;
            }

            Command::Address(address) => match set_address(&mut self.delivery, &address) {
                Ok((_, true)) => self.notifier.notify(&UiEffect::HideAddressWarning)?,
                Ok((_, false)) => {}
                Err(err) => report(out, &err)?,
            },

            Command::Checkout => {
                match checkout(&mut self.cart, &mut self.delivery, &self.config, &self.clock) {
                    Ok(response) => {
                        if let Some(effect) = effect_for(&response.decision) {
                            self.notifier.notify(&effect)?;
                        }
                        if let Some(order) = response.order {
                            writeln!(out, "{}", order.message)?;
                            writeln!(out, "{}", order.link)?;
                        }
                    }
                    Err(err) => report(out, &err)?,
                }
            }

            Command::Help => writeln!(out, "{}", HELP)?,

            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }
}

fn report<W: Write>(out: &mut W, err: &ApiError) -> io::Result<()> {
    warn!(code = ?err.code, "{}", err.message);
    writeln!(out, "{}", err.message)
}

/// Category headings, each followed by `➤ name - description - price`.
/// Combos list their components as the description.
fn render_menu<W: Write>(
    out: &mut W,
    menu: &MenuResponse,
    currency: &CurrencyFormat,
) -> io::Result<()> {
    writeln!(
        out,
        "{} (aberto das {}h às {}h)",
        menu.store_name,
        menu.opening_hours.open_hour(),
        menu.opening_hours.close_hour()
    )?;

    for section in &menu.sections {
        writeln!(out, "{}:", section.category)?;
        for item in &section.items {
            let price = currency.format(item.price());
            if item.description().is_empty() {
                writeln!(out, "  ➤ {} - {}", item.name(), price)?;
            } else {
                writeln!(out, "  ➤ {} - {} - {}", item.name(), item.description(), price)?;
            }
        }
    }
    Ok(())
}

fn render_cart<W: Write>(
    out: &mut W,
    cart: &CartResponse,
    currency: &CurrencyFormat,
) -> io::Result<()> {
    if cart.items.is_empty() {
        return writeln!(out, "Carrinho vazio");
    }

    for item in &cart.items {
        writeln!(
            out,
            "  {} x{} - {}",
            item.name,
            item.quantity,
            currency.format(item.line_total())
        )?;
    }
    writeln!(out, "Total: {}", currency.format(cart.totals.total))
}
