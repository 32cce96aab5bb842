//! # Validation Module
//!
//! Input validation utilities for Pedido.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Config load (storefront)                                     │
//! │  └── Menu entries, opening hours, messaging number                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Name / price / address / hour rules                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Typed values (MenuItem, OpeningHours)                        │
//! │  └── Once built, the cart and checkout never re-check                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_ADDRESS_LEN, MAX_DESCRIPTION_LEN, MAX_ITEM_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a menu item name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_ITEM_NAME_LEN`] characters
///
/// ```rust
/// use pedido_core::validation::validate_item_name;
///
/// assert!(validate_item_name("X-BBQ").is_ok());
/// assert!(validate_item_name("").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a menu item description. Empty is fine.
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.trim().chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(())
}

/// Validates a delivery address.
///
/// An empty address is valid here: whether one is needed depends on the
/// delivery selection and is decided at checkout.
pub fn validate_address(address: &str) -> ValidationResult<()> {
    if address.trim().chars().count() > MAX_ADDRESS_LEN {
        return Err(ValidationError::TooLong {
            field: "address".to_string(),
            max: MAX_ADDRESS_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a menu price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ```rust
/// use pedido_core::money::Money;
/// use pedido_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(3590)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates an hour of day (0-23).
pub fn validate_hour(field: &str, hour: u32) -> ValidationResult<()> {
    if hour > 23 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: 23,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Pizza").is_ok());
        assert!(validate_item_name("Açaí 500ml").is_ok());

        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"A".repeat(MAX_ITEM_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_item_name_counts_chars_not_bytes() {
        // 120 two-byte characters is still within the limit
        assert!(validate_item_name(&"ç".repeat(MAX_ITEM_NAME_LEN)).is_ok());
    }

    #[test]
    fn test_validate_description() {
        assert!(validate_description("").is_ok());
        assert!(validate_description("Carne, queijo, onion, barbecue e molho Billy Jack").is_ok());
        assert!(validate_description(&"x".repeat(MAX_DESCRIPTION_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_address() {
        assert!(validate_address("").is_ok());
        assert!(validate_address("Rua das Flores, 12").is_ok());
        assert_eq!(
            validate_address(&"x".repeat(MAX_ADDRESS_LEN + 1)),
            Err(ValidationError::TooLong {
                field: "address".to_string(),
                max: MAX_ADDRESS_LEN,
            })
        );
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(1)).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_hour() {
        assert!(validate_hour("open_hour", 0).is_ok());
        assert!(validate_hour("open_hour", 23).is_ok());
        assert!(validate_hour("close_hour", 24).is_err());
    }
}
