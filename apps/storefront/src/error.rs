//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Pedido                                 │
//! │                                                                         │
//! │  Session line ──► Command ──► Result<T, ApiError>                       │
//! │                                  │                                      │
//! │      Config error? ── ConfigError::Parse(..) ──────┐                    │
//! │      Unknown item? ── CoreError::ItemNotOnMenu ────┼──► ApiError ──►   │
//! │      Bad input?    ── ValidationError ─────────────┘    printed         │
//! │                                                                         │
//! │  Checkout *outcomes* (closed, empty cart, ...) are NOT errors: they     │
//! │  travel as `Decision` values inside a successful response.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use pedido_core::{CoreError, ValidationError};

// =============================================================================
// Config Error
// =============================================================================

/// Failures while loading `storefront.toml` and environment overrides.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Convenience alias for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// API Error
// =============================================================================

/// Error returned from storefront commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Item not on the menu: X-Tudo"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Item or command not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Configuration could not be loaded
    ConfigError,

    /// Anything else
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::NotFound, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemNotOnMenu(_) => ApiError::not_found(err.to_string()),
            CoreError::InvalidPrice { .. }
            | CoreError::InvalidHours { .. }
            | CoreError::DuplicateItem(_)
            | CoreError::UnknownComboItem { .. } => ApiError::validation(err.to_string()),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        tracing::error!("Messaging link could not be built: {}", err);
        ApiError::internal("Could not build the messaging link")
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::internal(format!("I/O error: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_codes() {
        let err: ApiError = CoreError::ItemNotOnMenu("X-Tudo".into()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Item not on the menu: X-Tudo");

        let err: ApiError = CoreError::InvalidHours { open: 30, close: 2 }.into();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err: ApiError = CoreError::Validation(ValidationError::Required {
            field: "name".into(),
        })
        .into();
        assert_eq!(err.message, "name is required");
    }

    #[test]
    fn test_config_error_maps_to_config_code() {
        let err: ApiError = ConfigError::Invalid("menu is empty".into()).into();
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert_eq!(err.to_string(), "[ConfigError] Invalid configuration: menu is empty");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::not_found("nope")).unwrap();
        assert_eq!(json, serde_json::json!({ "code": "NOT_FOUND", "message": "nope" }));
    }
}
