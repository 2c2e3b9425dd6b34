//! # Catalog
//!
//! The fixed menu offered at the counter. Built once per run and never
//! mutated; orders borrow products out of it.

use serde::Serialize;

use crate::error::CoreResult;
use crate::types::{BeverageSize, Product};

/// The menu, in the order it is listed (1-based on screen).
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product by zero-based position.
    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// Resolves zero-based positions to products, skipping any position past
    /// the end. Repeated positions yield the product once per occurrence.
    ///
    /// ## Example
    /// ```rust
    /// use foodexpress_core::catalog::default_catalog;
    ///
    /// let catalog = default_catalog().unwrap();
    /// let items = catalog.select(&[6, 6, 42]);
    /// assert_eq!(items.len(), 2);
    /// assert_eq!(items[0].description(), "Coca Cola (Mediano)");
    /// ```
    pub fn select(&self, indices: &[usize]) -> Vec<&Product> {
        indices.iter().filter_map(|&i| self.get(i)).collect()
    }
}

/// Builds the house menu: six meals and four beverages.
pub fn default_catalog() -> CoreResult<Catalog> {
    let products = vec![
        Product::meal("Hamburguesa Clásica", 8_990, 10, false)?,
        Product::meal("Hamburguesa Tres Carnes", 12_990, 10, true)?,
        Product::meal("Salmón Grillado", 15_990, 15, true)?,
        Product::meal("Bife a lo Pobre", 12_990, 18, true)?,
        Product::meal("Papas Fritas con Carne Mechada", 6_990, 4, false)?,
        Product::meal("Papas Fritas con Merluza", 5_990, 4, false)?,
        Product::beverage("Coca Cola", BeverageSize::Medium, 1_990)?,
        Product::beverage("Coca Cola", BeverageSize::Small, 990)?,
        Product::beverage("Jugo Natural (Sabores)", BeverageSize::Large, 2_990)?,
        Product::beverage("Jugo Natural (Sabores)", BeverageSize::Medium, 1_990)?,
    ];

    Ok(Catalog::new(products))
}
