//! # Sales Report
//!
//! Aggregates completed sales into totals, per-category counts and the most
//! ordered products.
//!
//! ## Ranking
//! Top products are ordered by how often they were sold, most first. Products
//! sold equally often are ordered by description so the report is stable
//! from run to run.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::money::Money;
use crate::types::Product;
use crate::TOP_PRODUCTS_LIMIT;

// =============================================================================
// Sale
// =============================================================================

/// A completed order.
/// Uses snapshot pattern to freeze product data at time of sale.
#[derive(Debug, Clone, Serialize)]
pub struct Sale {
    pub id: String,
    pub items: Vec<Product>,
    pub total: Money,
    pub completed_at: DateTime<Utc>,
}

impl Sale {
    /// Records a sale of `items` for `total`, stamped now.
    pub fn new(items: Vec<Product>, total: Money) -> Self {
        Sale {
            id: Uuid::new_v4().to_string(),
            items,
            total,
            completed_at: Utc::now(),
        }
    }

    /// Records a sale from products borrowed out of the catalog.
    pub fn from_selection(items: &[&Product], total: Money) -> Self {
        Sale::new(items.iter().map(|&p| p.clone()).collect(), total)
    }
}

// =============================================================================
// Report
// =============================================================================

/// How many times one product was sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCount {
    pub description: String,
    pub count: usize,
}

/// Summary of a batch of sales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesReport {
    pub total_sales: usize,
    pub total_revenue: Money,
    /// Items sold per category; sums to the number of items across all sales.
    pub by_category: BTreeMap<String, usize>,
    /// At most five entries.
    pub top_products: Vec<ProductCount>,
}

/// Builds a [`SalesReport`] from completed sales.
///
/// ## Example
/// ```rust
/// use foodexpress_core::report::{generate_report, Sale};
/// use foodexpress_core::{Money, Product};
///
/// let fries = Product::meal("Papas Fritas con Merluza", 5_990, 4, false).unwrap();
/// let sales = vec![Sale::new(vec![fries.clone(), fries], Money::from_pesos(11_980))];
///
/// let report = generate_report(&sales);
/// assert_eq!(report.total_sales, 1);
/// assert_eq!(report.by_category["Comida"], 2);
/// ```
pub fn generate_report(sales: &[Sale]) -> SalesReport {
    let mut by_category: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_product: BTreeMap<String, usize> = BTreeMap::new();

    for product in sales.iter().flat_map(|s| s.items.iter()) {
        *by_category.entry(product.category().to_string()).or_default() += 1;
        *by_product.entry(product.description()).or_default() += 1;
    }

    // BTreeMap iterates by description, and the sort is stable, so ties
    // stay in lexicographic order.
    let mut top_products: Vec<ProductCount> = by_product
        .into_iter()
        .map(|(description, count)| ProductCount { description, count })
        .collect();
    top_products.sort_by(|a, b| b.count.cmp(&a.count));
    top_products.truncate(TOP_PRODUCTS_LIMIT);

    SalesReport {
        total_sales: sales.len(),
        total_revenue: sales.iter().map(|s| s.total).sum(),
        by_category,
        top_products,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BeverageSize;

    fn burger() -> Product {
        Product::meal("Hamburguesa Clásica", 8_990, 10, false).unwrap()
    }

    fn coke() -> Product {
        Product::beverage("Coca Cola", BeverageSize::Small, 990).unwrap()
    }

    #[test]
    fn test_category_counts_sum_to_item_count() {
        let sales = vec![Sale::new(
            vec![burger(), burger(), coke()],
            Money::from_pesos(10),
        )];
        let report = generate_report(&sales);

        assert_eq!(report.total_sales, 1);
        assert_eq!(report.total_revenue.pesos(), 10);
        assert_eq!(report.by_category.values().sum::<usize>(), 3);
        assert_eq!(report.by_category["Comida"], 2);
        assert_eq!(report.by_category["Bebida"], 1);
    }

    #[test]
    fn test_top_products_ranked_by_count() {
        let sales = vec![
            Sale::new(vec![coke(), burger()], Money::from_pesos(9_980)),
            Sale::new(vec![coke(), coke()], Money::from_pesos(1_980)),
        ];
        let report = generate_report(&sales);

        assert_eq!(report.total_revenue.pesos(), 11_960);
        assert_eq!(
            report.top_products[0],
            ProductCount {
                description: "Coca Cola (Pequeño)".to_string(),
                count: 3,
            }
        );
        assert_eq!(report.top_products[1].description, "Hamburguesa Clásica");
    }

    #[test]
    fn test_top_products_limited_and_ties_lexicographic() {
        let names = ["F", "E", "D", "C", "B", "A"];
        let items: Vec<Product> = names
            .iter()
            .map(|n| Product::meal(*n, 1_000, 5, false).unwrap())
            .collect();
        let report = generate_report(&[Sale::new(items, Money::from_pesos(6_000))]);

        let ranked: Vec<&str> = report
            .top_products
            .iter()
            .map(|p| p.description.as_str())
            .collect();
        assert_eq!(ranked, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_empty_report() {
        let report = generate_report(&[]);
        assert_eq!(report.total_sales, 0);
        assert!(report.total_revenue.is_zero());
        assert!(report.by_category.is_empty());
        assert!(report.top_products.is_empty());
    }

    #[test]
    fn test_sale_from_selection_snapshots_products() {
        let b = burger();
        let sale = Sale::from_selection(&[&b, &b], Money::from_pesos(17_980));
        assert_eq!(sale.items.len(), 2);
        assert!(uuid::Uuid::parse_str(&sale.id).is_ok());
    }

    #[test]
    fn test_report_serializes() {
        let report = generate_report(&[Sale::new(vec![coke()], Money::from_pesos(990))]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["total_sales"], 1);
        assert_eq!(json["total_revenue"], 990);
        assert_eq!(json["by_category"]["Bebida"], 1);
    }
}
