//! # foodexpress-core: Pure Checkout Logic for FoodExpress
//!
//! This crate is the **heart** of the FoodExpress checkout. It contains the
//! product model, the pricing pipeline and the sales report as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      FoodExpress Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Terminal (apps/terminal)                        │   │
//! │  │   Catalog listing ──► Selection ──► Tier ──► Summary           │   │
//! │  │                    Kitchen simulator (tokio task)               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ foodexpress-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │  report   │  │   │
//! │  │   │  Product  │  │   Money   │  │ Promotions│  │   Sale    │  │   │
//! │  │   │   Tier    │  │  TaxRate  │  │  Totals   │  │  Report   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO CONSOLE • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CustomerTier, OrderStatus, TaxRate)
//! - [`money`] - Money type with integer arithmetic (whole pesos)
//! - [`catalog`] - The fixed menu offered by the terminal
//! - [`pricing`] - Subtotal, promotions, tier discount, tax, totals
//! - [`report`] - Sales aggregation
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use foodexpress_core::catalog::default_catalog;
//! use foodexpress_core::pricing::OrderTotals;
//! use foodexpress_core::{CustomerTier, DEFAULT_TAX_RATE};
//!
//! let catalog = default_catalog().unwrap();
//! let items = catalog.select(&[0, 6]);
//!
//! let totals = OrderTotals::compute(&items, CustomerTier::Vip, DEFAULT_TAX_RATE);
//! assert_eq!(totals.subtotal.pesos(), 11_279);
//! assert_eq!(totals.total.pesos(), 12_080);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Chilean VAT (IVA) applied to every order: 19%.
pub const DEFAULT_TAX_RATE: TaxRate = TaxRate::from_bps(1900);

/// Number of entries listed in the top products section of a report.
pub const TOP_PRODUCTS_LIMIT: usize = 5;
