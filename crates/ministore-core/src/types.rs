//! # Domain Types
//!
//! Core domain types used throughout MiniStore.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐   validate   ┌─────────────────────┐          │
//! │  │    ProductInput     │ ───────────► │      Product        │          │
//! │  │  ─────────────────  │              │  ─────────────────  │          │
//! │  │  id       (raw)     │              │  id       (trimmed) │          │
//! │  │  name     (raw)     │              │  name     (trimmed) │          │
//! │  │  category (raw)     │              │  category           │          │
//! │  │  price    (token)   │              │  price    (f64)     │          │
//! │  └─────────────────────┘              └─────────────────────┘          │
//! │      form submission                    stored in the catalog          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persisted Layout
//! The catalog is stored as a JSON array of `Product`:
//! `[{"id":"ELEC001","name":"...","category":"Electronics","price":79.99}]`

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::validation::validate_product_input;

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// `price` keeps full precision; two-decimal rounding happens only when a
/// row is rendered (see [`crate::price::format_price`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Business identifier, unique within the catalog (case-sensitive).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Free-text category tag.
    pub category: String,

    /// Unit price.
    pub price: f64,
}

impl Product {
    /// Builds a product from already-trusted values (seed data, tests).
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
        }
    }
}

// =============================================================================
// Product Input
// =============================================================================

/// Raw product form as submitted by a user.
///
/// All four fields are untrusted strings. Use [`ProductInput::into_product`]
/// (or [`crate::Catalog::add`], which also checks id uniqueness) to turn it
/// into a [`Product`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductInput {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Price token, parsed with decimal-prefix semantics.
    pub price: String,
}

impl ProductInput {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        ProductInput {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price: price.into(),
        }
    }

    /// Validates the form and produces the product to store.
    ///
    /// `id` and `name` are trimmed; `category` is kept as submitted.
    pub fn into_product(self) -> Result<Product, ValidationError> {
        validate_product_input(&self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_json_layout() {
        let product = Product::new("ELEC001", "Headphones", "Electronics", 79.99);
        let json = serde_json::to_string(&product).unwrap();
        assert_eq!(
            json,
            r#"{"id":"ELEC001","name":"Headphones","category":"Electronics","price":79.99}"#
        );
    }

    #[test]
    fn test_into_product_trims_id_and_name() {
        let input = ProductInput::new("  ELEC003 ", " Speaker ", "Electronics", "59.5");
        let product = input.into_product().unwrap();
        assert_eq!(product.id, "ELEC003");
        assert_eq!(product.name, "Speaker");
        assert_eq!(product.price, 59.5);
    }

    #[test]
    fn test_into_product_rejects_blank_form() {
        let err = ProductInput::default().into_product().unwrap_err();
        assert_eq!(err.field(), "id");
    }
}
