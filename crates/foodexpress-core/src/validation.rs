//! # Validation Module
//!
//! Input validation for product construction and terminal configuration.
//!
//! ## Usage
//! ```rust
//! use foodexpress_core::validation::{validate_price_pesos, validate_product_name};
//!
//! assert!(validate_product_name("Salmón Grillado").is_ok());
//! assert!(validate_price_pesos(-1).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest product name the receipt can print.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Upper bound for a tax rate: 100%.
pub const MAX_TAX_RATE_BPS: u32 = 10_000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a base price in pesos. Zero is allowed (free items).
pub fn validate_price_pesos(pesos: i64) -> ValidationResult<()> {
    if pesos < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a preparation time in minutes. Zero is allowed.
pub fn validate_prep_minutes(minutes: i64) -> ValidationResult<()> {
    if minutes < 0 {
        return Err(ValidationError::OutOfRange {
            field: "preparation time".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points (0% to 100%).
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > MAX_TAX_RATE_BPS {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: MAX_TAX_RATE_BPS as i64,
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
    fn test_validate_product_name() {
        assert!(validate_product_name("Papas Fritas con Merluza").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price_pesos() {
        assert!(validate_price_pesos(0).is_ok());
        assert!(validate_price_pesos(8_990).is_ok());
        assert!(validate_price_pesos(-100).is_err());
    }

    #[test]
    fn test_validate_prep_minutes() {
        assert!(validate_prep_minutes(0).is_ok());
        assert!(validate_prep_minutes(18).is_ok());
        assert!(validate_prep_minutes(-1).is_err());
    }

    #[test]
    fn test_validate_tax_rate_bps() {
        assert!(validate_tax_rate_bps(0).is_ok());
        assert!(validate_tax_rate_bps(1900).is_ok());
        assert!(validate_tax_rate_bps(10_000).is_ok());
        assert!(validate_tax_rate_bps(10_001).is_err());
    }
}
