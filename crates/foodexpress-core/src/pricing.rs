//! # Pricing Engine
//!
//! Turns a list of selected products and a customer tier into the numbers
//! printed on the order summary.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Order Arithmetic                               │
//! │                                                                         │
//! │  items ──► subtotal            Σ final_price                           │
//! │               │                                                         │
//! │               ▼                                                         │
//! │          − promotions          3x2 beverages + 5% bulk (3+ items)      │
//! │               │                                                         │
//! │               ▼                                                         │
//! │          − tier discount       5% / 10% / 15% of the line above        │
//! │               │                                                         │
//! │               ▼                                                         │
//! │          + tax                 19% of the line above                   │
//! │               │                                                         │
//! │               ▼                                                         │
//! │             total                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every percentage is rounded to the nearest peso, halves up, at the step
//! where it is computed.

use std::fmt;

use serde::Serialize;

use crate::money::Money;
use crate::types::{CustomerTier, Product, TaxRate};

/// Size of a 3-for-2 beverage group.
pub const BEVERAGE_GROUP_SIZE: usize = 3;

/// Items needed before the bulk discount applies.
pub const BULK_MIN_ITEMS: usize = 3;

/// Bulk discount: 5% of the subtotal.
pub const BULK_DISCOUNT_BPS: u32 = 500;

// =============================================================================
// Basic Amounts
// =============================================================================

/// Sum of the final price of every item.
pub fn subtotal(items: &[&Product]) -> Money {
    items.iter().map(|p| p.final_price()).sum()
}

/// Loyalty discount for `tier` on `amount`.
pub fn tier_discount(tier: CustomerTier, amount: Money) -> Money {
    amount.percentage(tier.discount_bps())
}

/// Tax owed on `amount`.
pub fn tax(amount: Money, rate: TaxRate) -> Money {
    amount.calculate_tax(rate)
}

// =============================================================================
// Promotions
// =============================================================================

/// Which promotion rule produced a discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionKind {
    /// Cheapest beverage of every three is free.
    BeverageThreeForTwo,
    /// 5% off orders of three or more items.
    BulkOrder,
}

/// A promotion that lowered the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedPromotion {
    pub kind: PromotionKind,
    pub amount: Money,
}

/// The line printed on the summary.
impl fmt::Display for AppliedPromotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PromotionKind::BeverageThreeForTwo => {
                write!(f, "Promo 3x2 en bebidas: -{}", self.amount)
            }
            PromotionKind::BulkOrder => {
                write!(f, "Descuento por cantidad (5%): -{}", self.amount)
            }
        }
    }
}

/// All promotions that applied to an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Promotions {
    /// Sum of every applied promotion.
    pub discount: Money,
    /// Only promotions with a non-zero amount, in rule order.
    pub applied: Vec<AppliedPromotion>,
}

impl Promotions {
    fn push(&mut self, kind: PromotionKind, amount: Money) {
        if amount.is_zero() {
            return;
        }
        self.discount += amount;
        self.applied.push(AppliedPromotion { kind, amount });
    }
}

/// 3-for-2 on beverages.
///
/// Beverage prices are sorted ascending and taken in groups of three; the
/// first (cheapest) price of every full group is given away.
///
/// ## Example
/// ```rust
/// use foodexpress_core::pricing::beverage_three_for_two;
/// use foodexpress_core::types::{BeverageSize, Product};
///
/// let a = Product::beverage("Coca Cola", BeverageSize::Small, 1_990).unwrap();
/// let b = Product::beverage("Coca Cola", BeverageSize::Small, 990).unwrap();
///
/// assert_eq!(beverage_three_for_two(&[&a, &a, &b]).pesos(), 990);
/// assert_eq!(beverage_three_for_two(&[&a, &b]).pesos(), 0);
/// ```
pub fn beverage_three_for_two(items: &[&Product]) -> Money {
    let mut prices: Vec<Money> = items
        .iter()
        .filter(|p| p.is_beverage())
        .map(|p| p.final_price())
        .collect();

    if prices.len() < BEVERAGE_GROUP_SIZE {
        return Money::zero();
    }

    prices.sort_unstable();
    prices
        .chunks_exact(BEVERAGE_GROUP_SIZE)
        .map(|group| group[0])
        .sum()
}

/// 5% of the subtotal when the order has at least three items.
pub fn bulk_discount(items: &[&Product]) -> Money {
    if items.len() < BULK_MIN_ITEMS {
        return Money::zero();
    }
    subtotal(items).percentage(BULK_DISCOUNT_BPS)
}

/// Evaluates every promotion rule and sums the ones that apply.
pub fn promotions(items: &[&Product]) -> Promotions {
    let mut promos = Promotions::default();
    promos.push(
        PromotionKind::BeverageThreeForTwo,
        beverage_three_for_two(items),
    );
    promos.push(PromotionKind::BulkOrder, bulk_discount(items));
    promos
}

// =============================================================================
// Order Totals
// =============================================================================

/// Every figure of the order summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderTotals {
    pub subtotal: Money,
    pub promotions: Promotions,
    /// Subtotal minus promotions.
    pub after_promotions: Money,
    pub tier: CustomerTier,
    pub tier_discount: Money,
    /// After promotions minus tier discount; the tax base.
    pub taxable: Money,
    pub tax_rate: TaxRate,
    pub tax: Money,
    pub total: Money,
    /// Longest preparation time among the items.
    pub estimated_prep_minutes: i64,
}

impl OrderTotals {
    /// Runs the full pipeline.
    ///
    /// ## Example
    /// ```rust
    /// use foodexpress_core::pricing::OrderTotals;
    /// use foodexpress_core::types::{BeverageSize, CustomerTier, Product, TaxRate};
    ///
    /// let burger = Product::meal("Hamburguesa Clásica", 8_990, 10, false).unwrap();
    /// let coke = Product::beverage("Coca Cola", BeverageSize::Medium, 1_990).unwrap();
    ///
    /// let totals = OrderTotals::compute(&[&burger, &coke], CustomerTier::Vip, TaxRate::from_bps(1900));
    /// assert_eq!(totals.tier_discount.pesos(), 1_128);
    /// assert_eq!(totals.tax.pesos(), 1_929);
    /// assert_eq!(totals.total.pesos(), 12_080);
    /// ```
    pub fn compute(items: &[&Product], tier: CustomerTier, tax_rate: TaxRate) -> Self {
        let subtotal = subtotal(items);
        let promotions = promotions(items);
        let after_promotions = subtotal - promotions.discount;
        let tier_discount = tier_discount(tier, after_promotions);
        let taxable = after_promotions - tier_discount;
        let tax = tax(taxable, tax_rate);

        OrderTotals {
            subtotal,
            promotions,
            after_promotions,
            tier,
            tier_discount,
            taxable,
            tax_rate,
            tax,
            total: taxable + tax,
            estimated_prep_minutes: items.iter().map(|p| p.prep_minutes()).max().unwrap_or(0),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
