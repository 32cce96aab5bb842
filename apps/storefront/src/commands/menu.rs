//! # Menu Commands

use serde::Serialize;
use tracing::debug;

use pedido_core::{Combo, MenuSection, OpeningHours};

use crate::error::ApiError;
use crate::state::{ConfigState, MenuState};

/// What the menu section of the page shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub store_name: String,
    pub opening_hours: OpeningHours,
    /// Every orderable item, under its category heading
    pub sections: Vec<MenuSection>,
    pub combos: Vec<Combo>,
}

/// Lists the menu with the store's opening window.
pub fn get_menu(menu: &MenuState, config: &ConfigState) -> Result<MenuResponse, ApiError> {
    debug!("get_menu command");

    Ok(MenuResponse {
        store_name: config.store_name.clone(),
        opening_hours: config.opening_hours()?,
        sections: menu.sections(),
        combos: menu.combos().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pedido_core::Category;

    #[test]
    fn test_get_menu_from_defaults() {
        let config = ConfigState::default();
        let menu = MenuState::from_config(&config).unwrap();

        let response = get_menu(&menu, &config).unwrap();
        assert_eq!(response.store_name, "Hamburgueria");
        assert!(response.opening_hours.is_open_at_hour(18));

        let counts: Vec<(Category, usize)> = response
            .sections
            .iter()
            .map(|s| (s.category, s.items.len()))
            .collect();
        assert_eq!(
            counts,
            [(Category::Menu, 4), (Category::Bebidas, 1), (Category::Combos, 1)]
        );
        assert_eq!(
            response.combos[0].items(),
            ["X-BBQ", "Batata pequena", "Guaravita"]
        );
    }

    #[test]
    fn test_menu_response_json_shape() {
        let config = ConfigState::default();
        let menu = MenuState::from_config(&config).unwrap();

        let json = serde_json::to_value(get_menu(&menu, &config).unwrap()).unwrap();
        assert_eq!(json["sections"][1]["category"], "Bebidas");
        assert_eq!(json["sections"][1]["items"][0]["name"], "Guaravita");
        assert_eq!(json["combos"][0]["price"], 1300);
    }
}
