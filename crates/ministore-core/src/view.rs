//! # View Projector
//!
//! Read-only derivations of the catalog for the two product views.
//!
//! ## Projections
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog → Views                                    │
//! │                                                                         │
//! │  &[Product] ──┬──► management_rows ──► every product, in order         │
//! │               │                                                         │
//! │               ├──► filtered_catalog(search, category)                   │
//! │               │        id contains search (case-insensitive)            │
//! │               │        AND category == selected (or All)                │
//! │               │                                                         │
//! │               └──► categories ──► distinct, first-occurrence order     │
//! │                                                                         │
//! │  Nothing here mutates the catalog or remembers previous calls.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Empty States
//! A projection with no rows says why:
//! - [`EmptyState::EmptyCatalog`] - there are no products at all
//! - [`EmptyState::EmptyFilterResult`] - products exist, filters hide them all

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::price::format_price;
use crate::types::Product;

// =============================================================================
// Category Filter
// =============================================================================

/// Category dropdown selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No filter; the "All Categories" entry.
    #[default]
    All,
    /// Exact match on `Product::category`.
    Category(String),
}

impl CategoryFilter {
    /// Maps a dropdown value to a filter; the empty value means `All`.
    pub fn from_selection(value: &str) -> Self {
        if value.is_empty() {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }

    /// The dropdown value for this filter (`""` for `All`).
    pub fn as_selection(&self) -> &str {
        match self {
            CategoryFilter::All => "",
            CategoryFilter::Category(category) => category,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(selected) => selected == category,
        }
    }
}

// =============================================================================
// Projection Types
// =============================================================================

/// Why a projection has no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum EmptyState {
    /// The catalog has no products; the user should add some.
    EmptyCatalog,
    /// The catalog has products but the filters exclude all of them.
    EmptyFilterResult,
}

/// One product ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Full-precision price.
    pub price: f64,
    /// Price rounded to two decimals with the currency symbol.
    pub price_display: String,
}

impl ProductRow {
    pub fn from_product(product: &Product, currency_symbol: &str) -> Self {
        ProductRow {
            id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price,
            price_display: format_price(product.price, currency_symbol),
        }
    }
}

/// Rows for one view, plus the empty state when there are none.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub rows: Vec<ProductRow>,
    pub empty_state: Option<EmptyState>,
}

impl Projection {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// =============================================================================
// Projections
// =============================================================================

/// Distinct categories in first-occurrence order.
///
/// ## Example
/// ```rust
/// use ministore_core::Product;
/// use ministore_core::view::categories;
///
/// let products = vec![
///     Product::new("1", "a", "A", 1.0),
///     Product::new("2", "b", "B", 1.0),
///     Product::new("3", "c", "A", 1.0),
/// ];
/// assert_eq!(categories(&products), ["A", "B"]);
/// ```
pub fn categories(products: &[Product]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for product in products {
        if !seen.contains(&product.category.as_str()) {
            seen.push(&product.category);
        }
    }
    seen
}

/// Products passing both the id search and the category filter, in order.
pub fn matching_products<'a>(
    products: &'a [Product],
    search_term: &str,
    filter: &CategoryFilter,
) -> Vec<&'a Product> {
    let needle = search_term.to_lowercase();
    products
        .iter()
        .filter(|p| needle.is_empty() || p.id.to_lowercase().contains(&needle))
        .filter(|p| filter.matches(&p.category))
        .collect()
}

/// Catalog grid projection.
///
/// `search_term` matches the product id only, case-insensitively; an empty
/// term matches everything.
pub fn filtered_catalog(
    products: &[Product],
    search_term: &str,
    filter: &CategoryFilter,
    currency_symbol: &str,
) -> Projection {
    let rows: Vec<ProductRow> = matching_products(products, search_term, filter)
        .into_iter()
        .map(|p| ProductRow::from_product(p, currency_symbol))
        .collect();

    let empty_state = if !rows.is_empty() {
        None
    } else if products.is_empty() {
        Some(EmptyState::EmptyCatalog)
    } else {
        Some(EmptyState::EmptyFilterResult)
    };

    Projection { rows, empty_state }
}

/// Management list projection: every product, unfiltered.
pub fn management_rows(products: &[Product], currency_symbol: &str) -> Projection {
    Projection {
        rows: products
            .iter()
            .map(|p| ProductRow::from_product(p, currency_symbol))
            .collect(),
        empty_state: products.is_empty().then_some(EmptyState::EmptyCatalog),
    }
}

/// Keeps the selected category if it is still offered, else falls back to `All`.
pub fn reconcile_filter(current: &CategoryFilter, available: &[&str]) -> CategoryFilter {
    match current {
        CategoryFilter::Category(selected) if available.contains(&selected.as_str()) => {
            current.clone()
        }
        _ => CategoryFilter::All,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_products;

    fn ids(projection: &Projection) -> Vec<&str> {
        projection.rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_categories_first_occurrence() {
        assert_eq!(
            categories(&sample_products()),
            ["Electronics", "Clothing", "Watches"]
        );
        assert!(categories(&[]).is_empty());
    }

    #[test]
    fn test_search_matches_id_case_insensitively() {
        let products = sample_products();
        let view = filtered_catalog(&products, "cloth", &CategoryFilter::All, "$");
        assert_eq!(ids(&view), ["CLOTH001", "CLOTH002"]);
        assert_eq!(view.empty_state, None);
    }

    #[test]
    fn test_search_ignores_name_and_category() {
        let products = sample_products();
        let view = filtered_catalog(&products, "jeans", &CategoryFilter::All, "$");
        assert!(view.is_empty());
        let view = filtered_catalog(&products, "watches", &CategoryFilter::All, "$");
        assert!(view.is_empty());
    }

    #[test]
    fn test_search_and_category_are_anded() {
        let products = sample_products();
        let filter = CategoryFilter::from_selection("Electronics");

        let view = filtered_catalog(&products, "002", &filter, "$");
        assert_eq!(ids(&view), ["ELEC002"]);

        let view = filtered_catalog(&products, "", &filter, "$");
        assert_eq!(ids(&view), ["ELEC001", "ELEC002"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let products = sample_products();
        let filter = CategoryFilter::from_selection("Clothing");
        let first = filtered_catalog(&products, "c", &filter, "$");
        let second = filtered_catalog(&products, "c", &filter, "$");
        assert_eq!(first, second);
    }

    #[test]
    fn test_absent_category_yields_filter_empty_state() {
        let products = sample_products();
        let filter = CategoryFilter::from_selection("Toys");
        let view = filtered_catalog(&products, "", &filter, "$");
        assert!(view.is_empty());
        assert_eq!(view.empty_state, Some(EmptyState::EmptyFilterResult));
    }

    #[test]
    fn test_empty_catalog_state() {
        let view = filtered_catalog(&[], "x", &CategoryFilter::All, "$");
        assert_eq!(view.empty_state, Some(EmptyState::EmptyCatalog));

        let list = management_rows(&[], "$");
        assert_eq!(list.empty_state, Some(EmptyState::EmptyCatalog));
    }

    #[test]
    fn test_management_rows_identity() {
        let products = sample_products();
        let list = management_rows(&products, "$");
        assert_eq!(
            ids(&list),
            ["ELEC001", "CLOTH001", "WATCH001", "ELEC002", "CLOTH002"]
        );
        assert_eq!(list.rows[2].price_display, "$149.99");
        assert_eq!(list.empty_state, None);
    }

    #[test]
    fn test_reconcile_filter() {
        let available = ["Electronics", "Clothing"];

        let kept = reconcile_filter(&CategoryFilter::from_selection("Clothing"), &available);
        assert_eq!(kept, CategoryFilter::Category("Clothing".to_string()));

        let dropped = reconcile_filter(&CategoryFilter::from_selection("Watches"), &available);
        assert_eq!(dropped, CategoryFilter::All);

        assert_eq!(reconcile_filter(&CategoryFilter::All, &available), CategoryFilter::All);
    }

    #[test]
    fn test_empty_state_wire_names() {
        assert_eq!(
            serde_json::to_string(&EmptyState::EmptyFilterResult).unwrap(),
            r#""emptyFilterResult""#
        );
    }
}
