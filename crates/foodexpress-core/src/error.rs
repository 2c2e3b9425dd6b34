//! # Error Types
//!
//! Domain-specific error types for foodexpress-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  foodexpress-core errors (this file)                                   │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  terminal errors (apps/terminal)                                       │
//! │  ├── ConfigError      - Bad environment or terminal.toml values        │
//! │  └── AppError         - What the checkout boundary reports             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → "Estado final: Error"  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An order status change that the state machine does not allow.
    ///
    /// ## When This Occurs
    /// - Marking an order Ready before it was Preparing
    /// - Moving an order out of Ready or Error
    #[error("Order cannot move from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by product construction and configuration checks.
#[derive(Debug, Error)]
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
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OrderStatus, Product, ProductKind};

    #[test]
    fn test_invalid_product_surfaces_as_validation() {
        let err = Product::new("  ", 1_000, "Comida", 5, ProductKind::Meal { premium: false })
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Required { .. })
        ));
        assert!(err.to_string().starts_with("Validation error: "));

        let err = Product::new("Cazuela", 4_990, "Comida", -3, ProductKind::Meal { premium: false })
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_ready_order_cannot_go_back_to_preparing() {
        let err = OrderStatus::Ready
            .transition(OrderStatus::Preparing)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Order cannot move from Listo to En Preparación"
        );
    }
}
