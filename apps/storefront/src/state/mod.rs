//! # State Module
//!
//! Manages the session state of the storefront.
//!
//! ## Why Multiple State Types?
//! Each command declares exactly the state it needs, the same way the
//! widget's handlers each touch one piece of the page:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌────────────┐  │
//! │  │  MenuState   │  │  CartState   │  │DeliveryState │  │ConfigState │  │
//! │  │              │  │              │  │              │  │            │  │
//! │  │  MenuItems   │  │  CartStore   │  │ DeliveryForm │  │ hours      │  │
//! │  │  by name     │  │              │  │ + warning    │  │ currency   │  │
//! │  └──────────────┘  └──────────────┘  └──────────────┘  └────────────┘  │
//! │                                                                         │
//! │  MenuState and ConfigState are read-only after startup.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod delivery;
mod menu;

pub use cart::{CartState, CartTotals};
pub use config::{ConfigState, HoursConfig, MenuEntry, CONFIG_PATH_ENV};
pub use delivery::DeliveryState;
pub use menu::MenuState;
