//! # Configuration State
//!
//! Stores the storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Environment Variables (highest priority)                           │
//! │     PEDIDO_STORE_NAME, PEDIDO_WHATSAPP_NUMBER,                         │
//! │     PEDIDO_OPEN_HOUR, PEDIDO_CLOSE_HOUR                                │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, else $PEDIDO_CONFIG, else                         │
//! │     ~/.config/storefront/storefront.toml (Linux)                       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! store_name = "Hamburgueria"
//! whatsapp_number = "+55 21 97485-7727"
//! currency_symbol = "R$"
//! decimal_separator = ","
//!
//! [opening_hours]
//! open_hour = 18
//! close_hour = 23
//!
//! [[menu]]
//! name = "X-BBQ"
//! price = "9.00"
//! description = "Carne, queijo, onion, barbecue e molho Billy Jack"
//! category = "Menu"          # Menu | Bebidas | Combos, default Menu
//!
//! [[combos]]
//! name = "Combo X-BBQ"
//! price = "13.00"
//! items = ["X-BBQ", "Batata pequena", "Guaravita"]
//! ```
//!
//! Read-only after load.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use pedido_core::hours::{DEFAULT_CLOSE_HOUR, DEFAULT_OPEN_HOUR};
use pedido_core::{Catalog, Category, Combo, CurrencyFormat, MenuItem, Money, OpeningHours};

use crate::error::{ConfigError, ConfigResult};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "PEDIDO_CONFIG";

// =============================================================================
// Config Sections
// =============================================================================

/// Opening window as written in the file; checked by [`ConfigState::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursConfig {
    #[serde(default = "default_open_hour")]
    pub open_hour: u32,
    #[serde(default = "default_close_hour")]
    pub close_hour: u32,
}

fn default_open_hour() -> u32 {
    DEFAULT_OPEN_HOUR
}

fn default_close_hour() -> u32 {
    DEFAULT_CLOSE_HOUR
}

impl Default for HoursConfig {
    fn default() -> Self {
        HoursConfig {
            open_hour: default_open_hour(),
            close_hour: default_close_hour(),
        }
    }
}

/// One menu button: name, price as a decimal string, and how it is listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Category,
}

impl MenuEntry {
    fn new(name: &str, price: &str, description: &str, category: Category) -> Self {
        MenuEntry {
            name: name.to_string(),
            price: price.to_string(),
            description: description.to_string(),
            category,
        }
    }

    /// Parses and validates the entry.
    pub fn to_menu_item(&self) -> ConfigResult<MenuItem> {
        let invalid = |reason: String| {
            ConfigError::Invalid(format!("menu entry '{}': {}", self.name, reason))
        };

        let price = self
            .price
            .parse::<Money>()
            .map_err(|e| invalid(e.to_string()))?;
        MenuItem::new(self.name.as_str(), price)
            .and_then(|item| item.with_description(self.description.as_str()))
            .map(|item| item.in_category(self.category))
            .map_err(|e| invalid(e.to_string()))
    }
}

/// A combo: several menu items at one price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboEntry {
    pub name: String,
    pub price: String,
    /// Names of `[[menu]]` entries
    pub items: Vec<String>,
}

impl ComboEntry {
    fn new(name: &str, price: &str, items: &[&str]) -> Self {
        ComboEntry {
            name: name.to_string(),
            price: price.to_string(),
            items: items.iter().map(|item| item.to_string()).collect(),
        }
    }

    /// Parses the entry. Components are checked against the menu later.
    pub fn to_combo(&self) -> ConfigResult<Combo> {
        let invalid =
            |reason: String| ConfigError::Invalid(format!("combo '{}': {}", self.name, reason));

        let price = self
            .price
            .parse::<Money>()
            .map_err(|e| invalid(e.to_string()))?;
        Combo::new(self.name.as_str(), price, self.items.clone())
            .map_err(|e| invalid(e.to_string()))
    }
}

// =============================================================================
// Config State
// =============================================================================

/// Storefront configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Shown in the session banner.
    pub store_name: String,

    /// Destination of the order message, any formatting; digits are kept.
    pub whatsapp_number: String,

    /// Currency symbol for display.
    pub currency_symbol: String,

    /// Decimal separator for display.
    pub decimal_separator: char,

    pub opening_hours: HoursConfig,

    pub menu: Vec<MenuEntry>,

    pub combos: Vec<ComboEntry>,
}

impl Default for ConfigState {
    /// The hamburgueria's own menu.
    fn default() -> Self {
        ConfigState {
            store_name: "Hamburgueria".to_string(),
            whatsapp_number: "+5521974857727".to_string(),
            currency_symbol: "R$".to_string(),
            decimal_separator: ',',
            opening_hours: HoursConfig::default(),
            menu: vec![
                MenuEntry::new(
                    "X-Boladão",
                    "15.00",
                    "2 carnes, 2 ovos, bacon, calabresa, queijo, salada, batata palha, \
                     ketchup, maionese da casa e molho Billy Jack",
                    Category::Menu,
                ),
                MenuEntry::new(
                    "X-BBQ",
                    "9.00",
                    "Carne, queijo, onion, barbecue e molho Billy Jack",
                    Category::Menu,
                ),
                MenuEntry::new(
                    "Cachorro-quente",
                    "9.00",
                    "Salsicha, molho, milho, ervilha, batata palha, queijo ralado, \
                     ovo de codorna, ketchup e molho Billy Jack",
                    Category::Menu,
                ),
                MenuEntry::new(
                    "Guaravita",
                    "2.00",
                    "Suco de guaraná natural",
                    Category::Bebidas,
                ),
                MenuEntry::new(
                    "Batata pequena",
                    "3.00",
                    "Porção de batata frita crocante",
                    Category::Menu,
                ),
            ],
            combos: vec![ComboEntry::new(
                "Combo X-BBQ",
                "13.00",
                &["X-BBQ", "Batata pequena", "Guaravita"],
            )],
        }
    }
}

impl ConfigState {
    /// Loads configuration from file (if any), then environment, then
    /// validates it.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// [`load`](Self::load) with an explicit environment lookup.
    pub fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| lookup(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(lookup);
        config.validate()?;

        Ok(config)
    }

    /// Parses a config file without applying overrides.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies `PEDIDO_*` overrides from any key lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("PEDIDO_STORE_NAME") {
            self.store_name = name;
        }

        if let Some(number) = lookup("PEDIDO_WHATSAPP_NUMBER") {
            debug!(number = %number, "Overriding messaging number from environment");
            self.whatsapp_number = number;
        }

        if let Some(hour) = lookup("PEDIDO_OPEN_HOUR") {
            match hour.parse::<u32>() {
                Ok(h) => self.opening_hours.open_hour = h,
                Err(_) => warn!(value = %hour, "Ignoring non-numeric PEDIDO_OPEN_HOUR"),
            }
        }

        if let Some(hour) = lookup("PEDIDO_CLOSE_HOUR") {
            match hour.parse::<u32>() {
                Ok(h) => self.opening_hours.close_hour = h,
                Err(_) => warn!(value = %hour, "Ignoring non-numeric PEDIDO_CLOSE_HOUR"),
            }
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        self.opening_hours()?;

        if self.whatsapp_digits().is_empty() {
            return Err(ConfigError::Invalid(
                "whatsapp_number must contain at least one digit".into(),
            ));
        }

        if self.menu.is_empty() {
            return Err(ConfigError::Invalid("menu must list at least one item".into()));
        }

        self.catalog()?;
        Ok(())
    }

    /// Returns the validated opening window.
    pub fn opening_hours(&self) -> ConfigResult<OpeningHours> {
        OpeningHours::new(self.opening_hours.open_hour, self.opening_hours.close_hour)
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Display currency.
    pub fn currency(&self) -> CurrencyFormat {
        CurrencyFormat::new(self.currency_symbol.clone(), self.decimal_separator)
    }

    /// Messaging number with every non-digit stripped.
    pub fn whatsapp_digits(&self) -> String {
        self.whatsapp_number
            .chars()
            .filter(char::is_ascii_digit)
            .collect()
    }

    /// Builds the menu catalogue: every entry parsed, names unique, combo
    /// components resolved.
    pub fn catalog(&self) -> ConfigResult<Catalog> {
        let items = self
            .menu
            .iter()
            .map(MenuEntry::to_menu_item)
            .collect::<ConfigResult<Vec<_>>>()?;
        let combos = self
            .combos
            .iter()
            .map(ComboEntry::to_combo)
            .collect::<ConfigResult<Vec<_>>>()?;

        Catalog::new(items, combos).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "pedido", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }
}
