//! # Domain Types
//!
//! Core domain types used throughout Pedido.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    MenuItem     │   │    LineItem     │   │ DeliverySelection   │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  name           │──►│  name (key)     │   │  Unselected         │   │
//! │  │  price          │   │  unit_price     │   │  HomeDelivery       │   │
//! │  │  description    │   │  quantity ≥ 1   │   │  LocalPickup        │   │
//! │  │  category       │   └─────────────────┘   └─────────────────────┘   │
//! │  └─────────────────┘                                                   │
//! │                                                                         │
//! │  Category: Menu │ Bebidas │ Combos                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Name as Identity
//! The widget has no product ids: the item name is the key. Two menu buttons
//! with the same name are the same cart line.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{
    validate_description, validate_item_name, validate_price, ValidationResult,
};

// =============================================================================
// Category
// =============================================================================

/// Section of the menu an item is listed under.
///
/// Declaration order is listing order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum Category {
    /// Burgers, hot dogs, sides.
    #[default]
    Menu,
    /// Drinks.
    Bebidas,
    /// Bundles of menu items at one price.
    Combos,
}

impl Category {
    /// Every category, in listing order.
    pub const ALL: [Category; 3] = [Category::Menu, Category::Bebidas, Category::Combos];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Menu => write!(f, "Menu"),
            Category::Bebidas => write!(f, "Bebidas"),
            Category::Combos => write!(f, "Combos"),
        }
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A dish or drink offered by the menu, ready to be added to the cart.
///
/// Construction is the only place the name/price constraints are checked,
/// which is what lets [`CartStore::add_item`](crate::cart::CartStore::add_item)
/// be infallible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct MenuItem {
    name: String,
    price: Money,
    description: String,
    category: Category,
}

impl MenuItem {
    /// Creates a menu item.
    ///
    /// ## Rules
    /// - `name` must be non-empty after trimming (stored trimmed)
    /// - `price` must be non-negative (zero is a free item)
    ///
    /// Starts with no description, listed under [`Category::Menu`].
    ///
    /// ```rust
    /// use pedido_core::{MenuItem, Money};
    ///
    /// assert!(MenuItem::new("Hamburguer Smash", Money::from_cents(1890)).is_ok());
    /// assert!(MenuItem::new("  ", Money::from_cents(1890)).is_err());
    /// assert!(MenuItem::new("Soda", Money::from_cents(-1)).is_err());
    /// ```
    pub fn new(name: impl Into<String>, price: Money) -> ValidationResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_price(price)?;

        Ok(MenuItem {
            name: name.trim().to_string(),
            price,
            description: String::new(),
            category: Category::default(),
        })
    }

    /// Sets the line shown under the name, e.g. the burger's ingredients.
    pub fn with_description(mut self, description: impl Into<String>) -> ValidationResult<Self> {
        let description = description.into();
        validate_description(&description)?;
        self.description = description.trim().to_string();
        Ok(self)
    }

    pub fn in_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One line of the cart: a menu item name, its frozen price and a quantity.
///
/// ## Invariants
/// - `quantity >= 1` (a line at zero is removed, never kept)
/// - `unit_price` is the price seen on the first add
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
}

impl LineItem {
    pub(crate) fn first_of(item: &MenuItem) -> Self {
        LineItem {
            name: item.name.clone(),
            unit_price: item.price,
            quantity: 1,
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Delivery Selection
// =============================================================================

/// How the customer gets the order.
///
/// ## Transitions
/// ```text
///                 ┌──────────────┐
///                 │  Unselected  │
///                 └──────┬───────┘
///             ┌──────────┴──────────┐
///             ▼                     ▼
///    ┌────────────────┐    ┌────────────────┐
///    │  HomeDelivery  │◄──►│  LocalPickup   │  (clears the address)
///    │ needs address  │    │ no address     │
///    └────────────────┘    └────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DeliverySelection {
    /// Nothing picked yet.
    #[default]
    Unselected,
    /// Delivered to the customer's address.
    HomeDelivery,
    /// Customer picks the order up at the restaurant.
    LocalPickup,
}

impl DeliverySelection {
    /// Returns true if this selection needs a delivery address.
    #[inline]
    pub fn requires_address(&self) -> bool {
        matches!(self, DeliverySelection::HomeDelivery)
    }

    /// Returns true once a method has been picked.
    #[inline]
    pub fn is_selected(&self) -> bool {
        !matches!(self, DeliverySelection::Unselected)
    }
}

impl fmt::Display for DeliverySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliverySelection::Unselected => write!(f, "unselected"),
            DeliverySelection::HomeDelivery => write!(f, "home"),
            DeliverySelection::LocalPickup => write!(f, "pickup"),
        }
    }
}

impl FromStr for DeliverySelection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" | "delivery" | "home_delivery" | "entrega" => {
                Ok(DeliverySelection::HomeDelivery)
            }
            "pickup" | "local" | "local_pickup" | "retirada" => Ok(DeliverySelection::LocalPickup),
            "none" | "unselected" => Ok(DeliverySelection::Unselected),
            other => Err(ValidationError::InvalidFormat {
                field: "delivery".to_string(),
                reason: format!("unknown delivery method '{}', expected home or pickup", other),
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
