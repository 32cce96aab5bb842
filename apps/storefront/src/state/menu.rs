//! # Menu State
//!
//! The catalogue the menu offers, built once from [`ConfigState`].
//!
//! Menu buttons in the widget carry the item name; lookups here ignore case
//! and surrounding whitespace so a typed `add x-bbq` finds "X-BBQ".

use pedido_core::{Catalog, Combo, CoreResult, MenuItem, MenuSection};

use crate::error::ConfigResult;
use crate::state::ConfigState;

#[derive(Debug, Clone)]
pub struct MenuState {
    catalog: Catalog,
}

impl MenuState {
    pub fn new(catalog: Catalog) -> Self {
        MenuState { catalog }
    }

    pub fn from_config(config: &ConfigState) -> ConfigResult<Self> {
        Ok(MenuState::new(config.catalog()?))
    }

    /// Finds an orderable item, plain or combo, by name.
    pub fn find(&self, name: &str) -> CoreResult<&MenuItem> {
        self.catalog.find(name)
    }

    pub fn items(&self) -> &[MenuItem] {
        self.catalog.items()
    }

    pub fn combos(&self) -> &[Combo] {
        self.catalog.combos()
    }

    /// Items under their category headings.
    pub fn sections(&self) -> Vec<MenuSection> {
        self.catalog.sections()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pedido_core::{Category, CoreError, Money};

    fn menu() -> MenuState {
        let catalog = Catalog::new(
            vec![
                MenuItem::new("X-BBQ", Money::from_cents(900)).unwrap(),
                MenuItem::new("Guaraná natural", Money::from_cents(200))
                    .unwrap()
                    .in_category(Category::Bebidas),
            ],
            vec![],
        )
        .unwrap();
        MenuState::new(catalog)
    }

    #[test]
    fn test_find_ignores_case_and_whitespace() {
        let menu = menu();
        assert_eq!(menu.find("x-bbq").unwrap().price(), Money::from_cents(900));
        assert_eq!(menu.find("  X-BBQ ").unwrap().name(), "X-BBQ");
        assert_eq!(menu.find("GUARANÁ NATURAL").unwrap().name(), "Guaraná natural");
    }

    #[test]
    fn test_find_unknown_item() {
        let err = menu().find("X-Tudo").unwrap_err();
        assert!(matches!(err, CoreError::ItemNotOnMenu(name) if name == "X-Tudo"));
    }

    #[test]
    fn test_from_default_config() {
        let menu = MenuState::from_config(&ConfigState::default()).unwrap();
        assert_eq!(menu.items().len(), 6);
        assert_eq!(menu.combos()[0].name(), "Combo X-BBQ");
        assert_eq!(
            menu.find("combo x-bbq").unwrap().price(),
            Money::from_cents(1300)
        );

        let headings: Vec<Category> = menu.sections().iter().map(|s| s.category).collect();
        assert_eq!(headings, Category::ALL);
    }
}
