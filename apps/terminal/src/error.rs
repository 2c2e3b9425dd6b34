//! # Terminal Error Type
//!
//! Unified error type for the checkout flow.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Terminal                           │
//! │                                                                         │
//! │  run_checkout()  ── Result<CheckoutOutcome, AppError>                   │
//! │        │                                                                │
//! │        ├── CoreError (catalog, status machine) ──┐                      │
//! │        ├── io::Error (stdin/stdout)  ────────────┤                      │
//! │        ├── Kitchen (task lost)  ─────────────────┤                      │
//! │        └── Report (serde_json, logged only)  ────┤                      │
//! │                                                  ▼                      │
//! │  run_session()  ── prints the user message and "Estado final: Error",  │
//! │                    returns OrderStatus::Error. The process never       │
//! │                    crashes on a failed order.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use foodexpress_core::CoreError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    /// Business rule violation from the core crate.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Console read or write failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The preparation task stopped without handing back a status.
    #[error("kitchen failure: {0}")]
    Kitchen(String),

    /// The session report could not be serialized.
    #[error("report serialization failed: {0}")]
    Report(#[from] serde_json::Error),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use foodexpress_core::ValidationError;

    #[test]
    fn test_core_error_is_transparent() {
        let err: AppError = CoreError::Validation(ValidationError::Required {
            field: "name".to_string(),
        })
        .into();
        assert_eq!(err.to_string(), "Validation error: name is required");
    }

    #[test]
    fn test_kitchen_error_message() {
        let err = AppError::Kitchen("task dropped".to_string());
        assert_eq!(err.to_string(), "kitchen failure: task dropped");
    }

    #[test]
    fn test_report_error_from_serde_json() {
        let source = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: AppError = source.into();
        assert!(matches!(err, AppError::Report(_)));
        assert!(err.to_string().starts_with("report serialization failed: "));
    }
}
