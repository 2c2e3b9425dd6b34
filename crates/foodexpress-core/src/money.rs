//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CLP HAS NO MINOR UNIT                                                  │
//! │                                                                         │
//! │  Every amount on the menu, on the receipt and in the report is a       │
//! │  whole number of pesos. Percentages (size factors, discounts, IVA)     │
//! │  are basis points applied with integer math and rounded once:          │
//! │                                                                         │
//! │    1990 × 11500 bps = 2288.5 → 2289                                    │
//! │                                                                         │
//! │  No float ever touches an amount.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use foodexpress_core::money::Money;
//!
//! let price = Money::from_pesos(8_990);
//! let total = price + Money::from_pesos(2_289);
//! assert_eq!(total.to_string(), "$11.279");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::types::TaxRate;

/// Basis points in one whole (100%).
pub const BPS_SCALE: i128 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole Chilean pesos.
///
/// ## Design Decisions
/// - **i64 (signed)**: discounts are rendered as negative lines
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole pesos.
    #[inline]
    pub const fn from_pesos(pesos: i64) -> Self {
        Money(pesos)
    }

    /// Returns the value in whole pesos.
    #[inline]
    pub const fn pesos(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns the share of this amount given in basis points, rounded to the
    /// nearest peso with halves going up.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`.
    /// The +5000 provides rounding (5000/10000 = 0.5).
    ///
    /// ## Example
    /// ```rust
    /// use foodexpress_core::money::Money;
    ///
    /// // 10% of 11.279 = 1127.9 → 1128
    /// assert_eq!(Money::from_pesos(11_279).percentage(1000).pesos(), 1_128);
    /// // 115% of 1.990 = 2288.5 → 2289
    /// assert_eq!(Money::from_pesos(1_990).percentage(11_500).pesos(), 2_289);
    /// ```
    pub fn percentage(&self, bps: u32) -> Money {
        // i128 prevents overflow on large amounts
        let scaled = (self.0 as i128 * bps as i128 + BPS_SCALE / 2) / BPS_SCALE;
        Money::from_pesos(scaled as i64)
    }

    /// Calculates tax on this amount.
    ///
    /// ## Example
    /// ```rust
    /// use foodexpress_core::money::Money;
    /// use foodexpress_core::types::TaxRate;
    ///
    /// let taxable = Money::from_pesos(10_151);
    /// // 10.151 × 19% = 1928.69 → 1.929
    /// assert_eq!(taxable.calculate_tax(TaxRate::from_bps(1900)).pesos(), 1_929);
    /// ```
    #[inline]
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        self.percentage(rate.bps())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders `$` followed by the amount with `.` every three digits, the way
/// prices are printed in Chile: `$12.990`, `-$1.128`, `$0`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let digits = self.0.unsigned_abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }

        write!(f, "{}${}", sign, grouped)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
