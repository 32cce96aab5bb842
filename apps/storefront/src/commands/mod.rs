//! # Commands Module
//!
//! Everything the session (or any other front end) can ask the storefront
//! to do.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── menu.rs      ◄─── Menu listing, config view
//! ├── cart.rs      ◄─── Cart manipulation
//! ├── delivery.rs  ◄─── Delivery method and address
//! └── checkout.rs  ◄─── Checkout gate and commit
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &CartState) -> CartResponse
//!
//! // Needs menu and cart
//! fn add_to_cart(menu: &MenuState, cart: &mut CartState, name: &str)
//!
//! // Needs everything plus a clock
//! fn checkout(cart: &mut CartState, delivery: &mut DeliveryState,
//!             config: &ConfigState, clock: &dyn Clock)
//! ```
//!
//! Responses are plain serializable structs so they can be printed as text
//! or handed over as JSON.

pub mod cart;
pub mod checkout;
pub mod delivery;
pub mod menu;
