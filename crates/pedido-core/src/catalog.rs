//! # Menu Catalogue
//!
//! Everything the customer can order, grouped the way the menu page lists it.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Menu     X-Boladão, X-BBQ, Cachorro-quente, Batata pequena             │
//! │  Bebidas  Guaravita                                                     │
//! │  Combos   Combo X-BBQ ── X-BBQ + Batata pequena + Guaravita             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A combo is orderable like any other item: the catalogue turns it into a
//! [`MenuItem`] under [`Category::Combos`] whose description lists the
//! components. The cart never sees the difference.
//!
//! ## Invariants
//! - Names are unique across items and combos, ignoring case
//! - Every combo component is a plain menu item (not another combo)

use serde::Serialize;
use std::collections::HashSet;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Category, MenuItem};
use crate::validation::{validate_item_name, validate_price, ValidationResult};

// =============================================================================
// Combo
// =============================================================================

/// A bundle of menu items sold at one price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Combo {
    name: String,
    price: Money,
    items: Vec<String>,
}

impl Combo {
    /// Creates a combo.
    ///
    /// ## Rules
    /// - Name and price follow the [`MenuItem`] rules
    /// - At least one component; every component name must be non-empty
    ///
    /// Components are only checked against the menu by [`Catalog::new`].
    pub fn new(
        name: impl Into<String>,
        price: Money,
        items: Vec<String>,
    ) -> ValidationResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_price(price)?;

        if items.is_empty() {
            return Err(ValidationError::Required {
                field: "items".to_string(),
            });
        }
        for item in &items {
            validate_item_name(item)?;
        }

        Ok(Combo {
            name: name.trim().to_string(),
            price,
            items: items.iter().map(|item| item.trim().to_string()).collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    /// Component names, in the order they were listed.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// The orderable entry for this combo.
    pub fn to_menu_item(&self) -> ValidationResult<MenuItem> {
        Ok(MenuItem::new(self.name.as_str(), self.price)?
            .with_description(self.items.join(", "))?
            .in_category(Category::Combos))
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// One category heading with its items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct MenuSection {
    pub category: Category,
    pub items: Vec<MenuItem>,
}

/// The full menu: plain items plus combos.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Plain items first, then one entry per combo
    items: Vec<MenuItem>,
    combos: Vec<Combo>,
}

impl Catalog {
    /// Builds the catalogue.
    ///
    /// Combo components are matched to menu items ignoring case and stored
    /// with the menu's spelling.
    ///
    /// ## Errors
    /// - [`CoreError::DuplicateItem`] when two names collide
    /// - [`CoreError::UnknownComboItem`] when a component is not a menu item
    pub fn new(items: Vec<MenuItem>, combos: Vec<Combo>) -> CoreResult<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(fold(item.name())) {
                return Err(CoreError::DuplicateItem(item.name().to_string()));
            }
        }

        let menu_len = items.len();
        let mut catalog = Catalog {
            items,
            combos: Vec::with_capacity(combos.len()),
        };

        for mut combo in combos {
            for component in combo.items.iter_mut() {
                let wanted = fold(component);
                let found = catalog.items[..menu_len]
                    .iter()
                    .find(|item| fold(item.name()) == wanted)
                    .ok_or_else(|| CoreError::UnknownComboItem {
                        combo: combo.name.clone(),
                        item: component.clone(),
                    })?;
                *component = found.name().to_string();
            }

            if !seen.insert(fold(&combo.name)) {
                return Err(CoreError::DuplicateItem(combo.name));
            }

            catalog.items.push(combo.to_menu_item()?);
            catalog.combos.push(combo);
        }

        Ok(catalog)
    }

    /// Finds an orderable item (plain or combo) by name, ignoring case and
    /// surrounding whitespace.
    pub fn find(&self, name: &str) -> CoreResult<&MenuItem> {
        let wanted = fold(name);
        self.items
            .iter()
            .find(|item| fold(item.name()) == wanted)
            .ok_or_else(|| CoreError::ItemNotOnMenu(name.trim().to_string()))
    }

    /// Every orderable item, combos last.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn combos(&self) -> &[Combo] {
        &self.combos
    }

    /// Items grouped by category, in [`Category::ALL`] order. Empty
    /// categories are left out.
    pub fn sections(&self) -> Vec<MenuSection> {
        Category::ALL
            .iter()
            .filter_map(|&category| {
                let items: Vec<MenuItem> = self
                    .items
                    .iter()
                    .filter(|item| item.category() == category)
                    .cloned()
                    .collect();
                (!items.is_empty()).then_some(MenuSection { category, items })
            })
            .collect()
    }
}

fn fold(name: &str) -> String {
    name.trim().to_lowercase()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, cents: i64, category: Category) -> MenuItem {
        MenuItem::new(name, Money::from_cents(cents))
            .unwrap()
            .in_category(category)
    }

    fn combo(name: &str, cents: i64, items: &[&str]) -> Combo {
        let items = items.iter().map(|s| s.to_string()).collect();
        Combo::new(name, Money::from_cents(cents), items).unwrap()
    }

    fn menu() -> Vec<MenuItem> {
        vec![
            item("X-BBQ", 900, Category::Menu),
            item("Guaravita", 200, Category::Bebidas),
            item("Batata pequena", 300, Category::Menu),
        ]
    }

    #[test]
    fn test_combo_requires_components() {
        let err = Combo::new("Vazio", Money::from_cents(100), vec![]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Required {
                field: "items".to_string()
            }
        );
        assert!(Combo::new("Combo", Money::from_cents(100), vec!["  ".to_string()]).is_err());
    }

    #[test]
    fn test_combo_becomes_orderable_item() {
        let catalog = Catalog::new(
            menu(),
            vec![combo("Combo X-BBQ", 1300, &["x-bbq", "BATATA PEQUENA", "Guaravita"])],
        )
        .unwrap();

        let ordered = catalog.find("combo x-bbq").unwrap();
        assert_eq!(ordered.price(), Money::from_cents(1300));
        assert_eq!(ordered.category(), Category::Combos);
        assert_eq!(ordered.description(), "X-BBQ, Batata pequena, Guaravita");

        // Components take the menu's spelling
        assert_eq!(catalog.combos()[0].items(), ["X-BBQ", "Batata pequena", "Guaravita"]);
        assert_eq!(catalog.items().len(), 4);
    }

    #[test]
    fn test_combo_with_unknown_component() {
        let combos = vec![combo("Combo", 1000, &["X-BBQ", "X-Tudo"])];
        let err = Catalog::new(menu(), combos).unwrap_err();
        assert!(matches!(
            err,
            CoreError::UnknownComboItem { ref combo, ref item }
                if combo == "Combo" && item == "X-Tudo"
        ));
    }

    #[test]
    fn test_combo_cannot_contain_combo() {
        let err = Catalog::new(
            menu(),
            vec![
                combo("Combo A", 1000, &["X-BBQ"]),
                combo("Combo B", 2000, &["Combo A"]),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::UnknownComboItem { .. }));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut items = menu();
        items.push(item("x-bbq", 100, Category::Menu));
        assert!(matches!(Catalog::new(items, vec![]), Err(CoreError::DuplicateItem(_))));

        let err = Catalog::new(menu(), vec![combo("Guaravita", 100, &["X-BBQ"])]).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateItem(name) if name == "Guaravita"));
    }

    #[test]
    fn test_sections_group_by_category_in_listing_order() {
        let catalog = Catalog::new(menu(), vec![combo("Combo X-BBQ", 1300, &["X-BBQ"])]).unwrap();

        let sections = catalog.sections();
        let headings: Vec<Category> = sections.iter().map(|s| s.category).collect();
        assert_eq!(headings, [Category::Menu, Category::Bebidas, Category::Combos]);

        let menu_names: Vec<&str> = sections[0].items.iter().map(MenuItem::name).collect();
        assert_eq!(menu_names, ["X-BBQ", "Batata pequena"]);
    }

    #[test]
    fn test_sections_skip_empty_categories() {
        let catalog = Catalog::new(vec![item("X-BBQ", 900, Category::Menu)], vec![]).unwrap();
        assert_eq!(catalog.sections().len(), 1);
    }

    #[test]
    fn test_find_unknown() {
        let catalog = Catalog::new(menu(), vec![]).unwrap();
        let err = catalog.find("  X-Tudo ").unwrap_err();
        assert!(matches!(err, CoreError::ItemNotOnMenu(name) if name == "X-Tudo"));
    }
}
