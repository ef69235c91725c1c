//! # Sample Products
//!
//! The five products installed when a store starts with an empty catalog.

use crate::types::Product;

/// (id, name, category, price) in install order.
const SAMPLE_PRODUCTS: &[(&str, &str, &str, f64)] = &[
    ("ELEC001", "Wireless Bluetooth Headphones", "Electronics", 79.99),
    ("CLOTH001", "Cotton T-Shirt", "Clothing", 24.99),
    ("WATCH001", "Digital Sports Watch", "Watches", 149.99),
    ("ELEC002", "Smartphone Case", "Electronics", 19.99),
    ("CLOTH002", "Denim Jeans", "Clothing", 89.99),
];

/// Returns the sample products in install order.
pub fn sample_products() -> Vec<Product> {
    SAMPLE_PRODUCTS
        .iter()
        .map(|&(id, name, category, price)| Product::new(id, name, category, price))
        .collect()
}
