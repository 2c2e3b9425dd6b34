//! # Domain Types
//!
//! Core domain types used throughout FoodExpress.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  CustomerTier   │   │  OrderStatus    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  Regular  5%    │   │  Pending        │       │
//! │  │  base_price     │   │  Vip     10%    │   │  Preparing      │       │
//! │  │  category       │   │  Premium 15%    │   │  Ready          │       │
//! │  │  prep_minutes   │   └─────────────────┘   │  Error(msg)     │       │
//! │  │  kind ──────────┼──┐                      └─────────────────┘       │
//! │  └─────────────────┘  │                                                 │
//! │                       ▼                                                 │
//! │            ┌─────────────────────┐        ┌─────────────────┐          │
//! │            │    ProductKind      │        │    TaxRate      │          │
//! │            │  Meal { premium }   │        │  bps (u32)      │          │
//! │            │  Beverage { size }  │        │  1900 = 19%     │          │
//! │            └─────────────────────┘        └─────────────────┘          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_prep_minutes, validate_price_pesos, validate_product_name};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 1900 bps = 19% (Chilean IVA).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for configuration input).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

/// `19%`, `8.25%`.
impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage())
    }
}

// =============================================================================
// Beverage Size
// =============================================================================

/// Cup size of a beverage. The size scales the base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeverageSize {
    /// ×1.00
    Small,
    /// ×1.15
    Medium,
    /// ×1.30
    Large,
}

impl BeverageSize {
    /// Price factor in basis points (10000 = ×1.00).
    pub const fn factor_bps(&self) -> u32 {
        match self {
            BeverageSize::Small => 10_000,
            BeverageSize::Medium => 11_500,
            BeverageSize::Large => 13_000,
        }
    }

    /// Label printed next to the beverage name.
    pub const fn label(&self) -> &'static str {
        match self {
            BeverageSize::Small => "Pequeño",
            BeverageSize::Medium => "Mediano",
            BeverageSize::Large => "Grande",
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// What kind of item a product is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProductKind {
    /// A dish. Premium dishes carry their surcharge in the base price.
    Meal { premium: bool },
    /// A drink sold in one of three sizes.
    Beverage { size: BeverageSize },
}

/// Category assigned to meals unless the catalog says otherwise.
pub const MEAL_CATEGORY: &str = "Comida";

/// Category assigned to beverages unless the catalog says otherwise.
pub const BEVERAGE_CATEGORY: &str = "Bebida";

/// Minutes it takes to pour a beverage.
pub const BEVERAGE_PREP_MINUTES: i64 = 1;

/// An item on the menu.
///
/// ## Invariants
/// - `name` is not blank
/// - `base_price` and `prep_minutes` are never negative
///
/// Fields are private so the only way to get a `Product` is through a
/// validating constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    name: String,
    base_price: Money,
    category: String,
    prep_minutes: i64,
    kind: ProductKind,
}

impl Product {
    /// Creates a product after validating its fields.
    ///
    /// ## Example
    /// ```rust
    /// use foodexpress_core::types::{Product, ProductKind};
    ///
    /// let soup = Product::new("Cazuela", 4_990, "Comida", 12, ProductKind::Meal { premium: false });
    /// assert!(soup.is_ok());
    ///
    /// let broken = Product::new("Cazuela", -1, "Comida", 12, ProductKind::Meal { premium: false });
    /// assert!(broken.is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        base_price_pesos: i64,
        category: impl Into<String>,
        prep_minutes: i64,
        kind: ProductKind,
    ) -> CoreResult<Self> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_price_pesos(base_price_pesos)?;
        validate_prep_minutes(prep_minutes)?;

        Ok(Product {
            name: name.trim().to_string(),
            base_price: Money::from_pesos(base_price_pesos),
            category: category.into(),
            prep_minutes,
            kind,
        })
    }

    /// Creates a meal in the default `Comida` category.
    pub fn meal(
        name: impl Into<String>,
        base_price_pesos: i64,
        prep_minutes: i64,
        premium: bool,
    ) -> CoreResult<Self> {
        Product::new(
            name,
            base_price_pesos,
            MEAL_CATEGORY,
            prep_minutes,
            ProductKind::Meal { premium },
        )
    }

    /// Creates a beverage in the default `Bebida` category.
    pub fn beverage(
        brand: impl Into<String>,
        size: BeverageSize,
        base_price_pesos: i64,
    ) -> CoreResult<Self> {
        Product::new(
            brand,
            base_price_pesos,
            BEVERAGE_CATEGORY,
            BEVERAGE_PREP_MINUTES,
            ProductKind::Beverage { size },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_price(&self) -> Money {
        self.base_price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn prep_minutes(&self) -> i64 {
        self.prep_minutes
    }

    /// Checks if the product is a beverage.
    pub fn is_beverage(&self) -> bool {
        matches!(self.kind, ProductKind::Beverage { .. })
    }

    /// Price charged for one unit, before any order-level promotion.
    ///
    /// ## Example
    /// ```rust
    /// use foodexpress_core::types::{BeverageSize, Product};
    ///
    /// let coke = Product::beverage("Coca Cola", BeverageSize::Medium, 1_990).unwrap();
    /// assert_eq!(coke.final_price().pesos(), 2_289);
    /// ```
    pub fn final_price(&self) -> Money {
        match self.kind {
            ProductKind::Meal { .. } => self.base_price,
            ProductKind::Beverage { size } => self.base_price.percentage(size.factor_bps()),
        }
    }

    /// Suffix shown after the name: ` (Premium)` or ` (Mediano)`.
    pub fn label_suffix(&self) -> Option<String> {
        match self.kind {
            ProductKind::Meal { premium: true } => Some(" (Premium)".to_string()),
            ProductKind::Meal { premium: false } => None,
            ProductKind::Beverage { size } => Some(format!(" ({})", size.label())),
        }
    }

    /// Name plus suffix, as printed on the receipt.
    pub fn description(&self) -> String {
        match self.label_suffix() {
            Some(suffix) => format!("{}{}", self.name, suffix),
            None => self.name.clone(),
        }
    }

    /// Receipt line for this product.
    pub fn order_line(&self) -> OrderLine {
        OrderLine {
            description: self.description(),
            price: self.final_price(),
        }
    }
}

// =============================================================================
// Order Line
// =============================================================================

/// One printed line of the order summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    pub description: String,
    pub price: Money,
}

// =============================================================================
// Customer Tier
// =============================================================================

/// Customer classification that decides the loyalty discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerTier {
    /// 5% off.
    #[default]
    Regular,
    /// 10% off.
    Vip,
    /// 15% off.
    Premium,
}

impl CustomerTier {
    /// Discount in basis points.
    pub const fn discount_bps(&self) -> u32 {
        match self {
            CustomerTier::Regular => 500,
            CustomerTier::Vip => 1_000,
            CustomerTier::Premium => 1_500,
        }
    }

    /// Whole-number discount percentage for labels.
    pub const fn discount_percent(&self) -> u32 {
        self.discount_bps() / 100
    }

    pub const fn label(&self) -> &'static str {
        match self {
            CustomerTier::Regular => "Regular",
            CustomerTier::Vip => "VIP",
            CustomerTier::Premium => "Premium",
        }
    }

    /// Parses console input, falling back to [`CustomerTier::Regular`] on
    /// anything unrecognized.
    ///
    /// ## Example
    /// ```rust
    /// use foodexpress_core::CustomerTier;
    ///
    /// assert_eq!(CustomerTier::from_input("  VIP "), CustomerTier::Vip);
    /// assert_eq!(CustomerTier::from_input("gold"), CustomerTier::Regular);
    /// ```
    pub fn from_input(input: &str) -> Self {
        input.parse().unwrap_or_else(|_| {
            tracing::debug!(input, "Unrecognized customer tier, using Regular");
            CustomerTier::default()
        })
    }
}

impl fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CustomerTier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "regular" => Ok(CustomerTier::Regular),
            "vip" => Ok(CustomerTier::Vip),
            "premium" => Ok(CustomerTier::Premium),
            "" => Err(ValidationError::Required {
                field: "customer tier".to_string(),
            }),
            _ => Err(ValidationError::OutOfRange {
                field: "customer tier".to_string(),
                min: 0,
                max: 2,
            }),
        }
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Where an order is in the kitchen.
///
/// ## State Machine
/// ```text
/// Pending ──► Preparing ──► Ready
///    │            │
///    └────────────┴──► Error(message)
/// ```
/// Ready and Error are terminal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Error(String),
}

impl OrderStatus {
    /// Text shown after `Estado:` / `Estado final:`.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pendiente",
            OrderStatus::Preparing => "En Preparación",
            OrderStatus::Ready => "Listo",
            OrderStatus::Error(_) => "Error",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Ready | OrderStatus::Error(_))
    }

    /// Moves to `next` if the state machine allows it.
    ///
    /// ## Example
    /// ```rust
    /// use foodexpress_core::OrderStatus;
    ///
    /// let status = OrderStatus::Pending.transition(OrderStatus::Preparing).unwrap();
    /// let status = status.transition(OrderStatus::Ready).unwrap();
    /// assert_eq!(status, OrderStatus::Ready);
    ///
    /// assert!(OrderStatus::Pending.transition(OrderStatus::Ready).is_err());
    /// ```
    pub fn transition(self, next: OrderStatus) -> CoreResult<OrderStatus> {
        let allowed = match (&self, &next) {
            (from, _) if from.is_terminal() => false,
            (OrderStatus::Pending, OrderStatus::Preparing)
            | (OrderStatus::Preparing, OrderStatus::Ready)
            | (_, OrderStatus::Error(_)) => true,
            _ => false,
        };

        if allowed {
            Ok(next)
        } else {
            Err(CoreError::InvalidStatusTransition {
                from: self.label().to_string(),
                to: next.label().to_string(),
            })
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_percentage() {
        let rate = TaxRate::from_percentage(19.0);
        assert_eq!(rate.bps(), 1900);
        assert_eq!(rate.to_string(), "19%");
        assert_eq!(TaxRate::from_bps(825).to_string(), "8.25%");
    }

    #[test]
    fn test_beverage_final_price_never_below_base() {
        for base in [0, 1, 990, 1_990, 2_990, 123_457] {
            for size in [BeverageSize::Small, BeverageSize::Medium, BeverageSize::Large] {
                let drink = Product::beverage("Agua", size, base).unwrap();
                assert!(drink.final_price() >= drink.base_price());
            }
            let small = Product::beverage("Agua", BeverageSize::Small, base).unwrap();
            assert_eq!(small.final_price().pesos(), base);
        }
    }

    #[test]
    fn test_beverage_size_factors() {
        let medium = Product::beverage("Coca Cola", BeverageSize::Medium, 1_990).unwrap();
        assert_eq!(medium.final_price().pesos(), 2_289);

        let large = Product::beverage("Jugo Natural", BeverageSize::Large, 2_990).unwrap();
        assert_eq!(large.final_price().pesos(), 3_887);
    }

    #[test]
    fn test_meal_final_price_is_base_price() {
        let salmon = Product::meal("Salmón Grillado", 15_990, 15, true).unwrap();
        assert_eq!(salmon.final_price().pesos(), 15_990);
        assert_eq!(salmon.category(), MEAL_CATEGORY);
    }

    #[test]
    fn test_descriptions() {
        let plain = Product::meal("Hamburguesa Clásica", 8_990, 10, false).unwrap();
        assert_eq!(plain.description(), "Hamburguesa Clásica");
        assert_eq!(plain.label_suffix(), None);

        let premium = Product::meal("Bife a lo Pobre", 12_990, 18, true).unwrap();
        assert_eq!(premium.description(), "Bife a lo Pobre (Premium)");

        let drink = Product::beverage("Coca Cola", BeverageSize::Small, 990).unwrap();
        assert_eq!(drink.description(), "Coca Cola (Pequeño)");
        assert_eq!(drink.category(), BEVERAGE_CATEGORY);
        assert_eq!(drink.prep_minutes(), BEVERAGE_PREP_MINUTES);
    }

    #[test]
    fn test_product_rejects_invalid_fields() {
        assert!(Product::meal("Completo", -1, 5, false).is_err());
        assert!(Product::meal("Completo", 2_990, -5, false).is_err());
        assert!(Product::meal("   ", 2_990, 5, false).is_err());
        assert!(Product::meal("Completo", 0, 0, false).is_ok());
    }

    #[test]
    fn test_customer_tier_parsing() {
        assert_eq!("regular".parse::<CustomerTier>().unwrap(), CustomerTier::Regular);
        assert_eq!("VIP".parse::<CustomerTier>().unwrap(), CustomerTier::Vip);
        assert_eq!(" Premium\n".parse::<CustomerTier>().unwrap(), CustomerTier::Premium);
        assert!("gold".parse::<CustomerTier>().is_err());
        assert!("".parse::<CustomerTier>().is_err());
    }

    #[test]
    fn test_customer_tier_lenient_input_defaults_to_regular() {
        for input in ["", "gold", "REGULAR ", "v i p", "premium+"] {
            assert_eq!(CustomerTier::from_input(input), CustomerTier::Regular);
        }
        assert_eq!(CustomerTier::from_input("premium"), CustomerTier::Premium);
    }

    #[test]
    fn test_customer_tier_rates() {
        assert_eq!(CustomerTier::Regular.discount_percent(), 5);
        assert_eq!(CustomerTier::Vip.discount_percent(), 10);
        assert_eq!(CustomerTier::Premium.discount_percent(), 15);
        assert_eq!(CustomerTier::default(), CustomerTier::Regular);
    }

    #[test]
    fn test_order_status_success_path() {
        let status = OrderStatus::default();
        assert_eq!(status, OrderStatus::Pending);

        let status = status.transition(OrderStatus::Preparing).unwrap();
        let status = status.transition(OrderStatus::Ready).unwrap();
        assert!(status.is_terminal());
        assert_eq!(status.label(), "Listo");
    }

    #[test]
    fn test_order_status_rejects_illegal_transitions() {
        assert!(OrderStatus::Pending.transition(OrderStatus::Ready).is_err());
        assert!(OrderStatus::Ready.transition(OrderStatus::Preparing).is_err());
        assert!(OrderStatus::Ready
            .transition(OrderStatus::Error("late".to_string()))
            .is_err());
        assert!(OrderStatus::Error("x".to_string())
            .transition(OrderStatus::Ready)
            .is_err());
    }

    #[test]
    fn test_order_status_error_reachable_before_ready() {
        let failed = OrderStatus::Preparing
            .transition(OrderStatus::Error("kitchen closed".to_string()))
            .unwrap();
        assert_eq!(failed.label(), "Error");
        assert!(failed.is_terminal());
    }
}
