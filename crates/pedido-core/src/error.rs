//! # Error Types
//!
//! Domain-specific error types for pedido-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pedido-core errors (this file)                                        │
//! │  ├── CoreError        - Menu / combo / price / hours failures          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront errors (app)                                               │
//! │  ├── ConfigError      - Config file / env failures                     │
//! │  └── ApiError         - What the widget sees (serialized)              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Widget                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart mutation and checkout gating never produce errors: their outcomes
//! are [`RemoveOutcome`](crate::cart::RemoveOutcome) and
//! [`Decision`](crate::checkout::Decision) values. These types only cover
//! building the inputs (menu entries, prices, opening hours).

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The requested name is not on the menu.
    ///
    /// ## When This Occurs
    /// - A widget button carries a name that the configured menu lacks
    /// - A typo in the interactive session
    #[error("Item not on the menu: {0}")]
    ItemNotOnMenu(String),

    /// Two catalogue entries share a name (case-insensitive).
    #[error("'{0}' is listed more than once")]
    DuplicateItem(String),

    /// A combo names something that is not on the menu.
    #[error("Combo '{combo}' lists '{item}', which is not on the menu")]
    UnknownComboItem { combo: String, item: String },

    /// A price string could not be read as an amount.
    #[error("Invalid price '{input}': {reason}")]
    InvalidPrice { input: String, reason: String },

    /// Opening hours outside the 0-23 range.
    #[error("Invalid opening hours {open}h-{close}h: hours must be within 0-23")]
    InvalidHours { open: u32, close: u32 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ItemNotOnMenu("X-Tudo".to_string());
        assert_eq!(err.to_string(), "Item not on the menu: X-Tudo");

        let err = CoreError::InvalidHours { open: 18, close: 24 };
        assert_eq!(
            err.to_string(),
            "Invalid opening hours 18h-24h: hours must be within 0-23"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooLong {
            field: "address".to_string(),
            max: 300,
        };
        assert_eq!(err.to_string(), "address must be at most 300 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
