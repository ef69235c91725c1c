//! # Validation Module
//!
//! Field rules for products submitted through the add form.
//!
//! ## Validation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Add Product Checks                                 │
//! │                                                                         │
//! │  ProductInput                                                           │
//! │       │                                                                 │
//! │       ├── id blank?        → Required { field: "id" }                  │
//! │       ├── name blank?      → Required { field: "name" }                │
//! │       ├── category blank?  → Required { field: "category" }            │
//! │       ├── price not > 0?   → Required { field: "price" }               │
//! │       │                                                                 │
//! │       ▼  (this module stops here)                                       │
//! │  Catalog::add                                                          │
//! │       └── id taken?        → DuplicateId                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Zero Prices
//! A price of exactly `0` is treated as missing, same as an unparsable
//! token. The browser version behaves this way because `0` is falsy there;
//! it is kept so both versions accept the same forms.

use crate::error::ValidationError;
use crate::price::parse_price;
use crate::types::{Product, ProductInput};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a required text field and returns it trimmed.
///
/// ## Example
/// ```rust
/// use ministore_core::validation::validate_required;
///
/// assert_eq!(validate_required("name", "  Jeans ").unwrap(), "Jeans");
/// assert!(validate_required("name", "   ").is_err());
/// ```
pub fn validate_required<'a>(field: &str, value: &'a str) -> ValidationResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(value)
}

/// Parses and validates a price token.
///
/// ## Rules
/// - Must start with a decimal literal (see [`parse_price`])
/// - Must be finite and strictly positive; zero counts as missing
///
/// ## Example
/// ```rust
/// use ministore_core::validation::validate_price;
///
/// assert_eq!(validate_price("19.99").unwrap(), 19.99);
/// assert!(validate_price("0").is_err());
/// assert!(validate_price("free").is_err());
/// ```
pub fn validate_price(token: &str) -> ValidationResult<f64> {
    match parse_price(token) {
        Some(price) if price.is_finite() && price > 0.0 => Ok(price),
        _ => Err(ValidationError::required("price")),
    }
}

// =============================================================================
// Form Validator
// =============================================================================

/// Validates a full product form in field order and builds the product.
///
/// The first failing field is reported. `id` and `name` are stored trimmed;
/// `category` is stored as submitted (it comes from a fixed list in the UI)
/// but a whitespace-only category still counts as missing.
pub fn validate_product_input(input: &ProductInput) -> ValidationResult<Product> {
    let id = validate_required("id", &input.id)?;
    let name = validate_required("name", &input.name)?;
    validate_required("category", &input.category)?;
    let price = validate_price(&input.price)?;

    Ok(Product::new(id, name, input.category.as_str(), price))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn input(id: &str, name: &str, category: &str, price: &str) -> ProductInput {
        ProductInput::new(id, name, category, price)
    }

    #[test]
    fn test_validate_product_input_ok() {
        let product =
            validate_product_input(&input("WATCH002", "Dress Watch", "Watches", "210")).unwrap();
        assert_eq!(product, Product::new("WATCH002", "Dress Watch", "Watches", 210.0));
    }

    #[test]
    fn test_reports_first_missing_field() {
        let err = validate_product_input(&input("", "", "", "")).unwrap_err();
        assert_eq!(err.field(), "id");

        let err = validate_product_input(&input("X1", " ", "Misc", "1")).unwrap_err();
        assert_eq!(err.field(), "name");

        let err = validate_product_input(&input("X1", "Thing", "\t", "1")).unwrap_err();
        assert_eq!(err.field(), "category");

        let err = validate_product_input(&input("X1", "Thing", "Misc", "")).unwrap_err();
        assert_eq!(err.field(), "price");
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("0.01").is_ok());
        assert!(validate_price("12 dollars").is_ok());

        assert!(validate_price("0").is_err());
        assert!(validate_price("0.00").is_err());
        assert!(validate_price("-3").is_err());
        assert!(validate_price("1e400").is_err());
        assert!(validate_price("n/a").is_err());
    }

    #[test]
    fn test_category_kept_as_submitted() {
        let product =
            validate_product_input(&input("C1", "Scarf", " Clothing", "9.5")).unwrap();
        assert_eq!(product.category, " Clothing");
    }
}
