//! # Catalog
//!
//! The ordered product list and its one invariant: ids are unique.
//!
//! ## Invariants
//! - Insertion order is display order; nothing is ever sorted.
//! - No two products share an `id` (case-sensitive comparison).
//!
//! This type knows nothing about storage. `ministore-db` wraps it in a
//! `CatalogStore` that persists after every change.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{Product, ProductInput};

/// Ordered, id-unique list of products.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from a loaded list.
    ///
    /// Later entries whose id was already seen are dropped, so a hand-edited
    /// storage value cannot break the uniqueness invariant.
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut catalog = Catalog::default();
        for product in products {
            if !catalog.contains(&product.id) {
                catalog.products.push(product);
            }
        }
        catalog
    }

    /// Parses the persisted JSON array, record by record.
    ///
    /// A record missing a field, or repeating an earlier id, is skipped and
    /// reported in [`LoadedCatalog::skipped`]; its siblings still load.
    /// Only a value that is not a JSON array at all is an error.
    pub fn from_json(json: &str) -> serde_json::Result<LoadedCatalog> {
        let records: Vec<serde_json::Value> = serde_json::from_str(json)?;
        let mut loaded = LoadedCatalog::default();

        for (index, record) in records.into_iter().enumerate() {
            let stored = match serde_json::from_value::<StoredProduct>(record) {
                Ok(stored) => stored,
                Err(_) => {
                    loaded.skipped.push(SkippedRecord::new(index, None, "not a product record"));
                    continue;
                }
            };
            let id = stored.id.clone();

            match stored.into_product() {
                Ok(product) => {
                    if let Err(e) = loaded.catalog.insert(product) {
                        loaded.skipped.push(SkippedRecord::new(index, id, e.to_string()));
                    }
                }
                Err(reason) => loaded.skipped.push(SkippedRecord::new(index, id, reason)),
            }
        }

        Ok(loaded)
    }

    /// Serializes the catalog to the persisted JSON array layout.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.products)
    }

    /// Validates a submitted form and appends the product.
    ///
    /// ## Errors
    /// - `CoreError::Validation` - a field is missing (catalog unchanged)
    /// - `CoreError::DuplicateId` - the trimmed id is taken (catalog unchanged)
    pub fn add(&mut self, input: ProductInput) -> CoreResult<&Product> {
        let product = input.into_product()?;
        self.insert(product)
    }

    /// Appends an already-valid product, enforcing id uniqueness.
    pub fn insert(&mut self, product: Product) -> CoreResult<&Product> {
        if self.contains(&product.id) {
            return Err(CoreError::duplicate_id(product.id));
        }
        self.products.push(product);
        Ok(&self.products[self.products.len() - 1])
    }

    /// Removes the product with this id.
    ///
    /// Returns the removed product, or `None` when no product matched.
    pub fn remove(&mut self, id: &str) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;
        Some(self.products.remove(index))
    }

    /// Replaces the whole list (used when seeding).
    pub fn replace(&mut self, products: Vec<Product>) {
        *self = Catalog::from_products(products);
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Current products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Stored Records
// =============================================================================

/// What [`Catalog::from_json`] recovered from a stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    /// Records left out, in stored order.
    pub skipped: Vec<SkippedRecord>,
}

/// A stored record that did not become a product.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// Position in the stored array.
    pub index: usize,
    pub id: Option<String>,
    pub reason: String,
}

impl SkippedRecord {
    fn new(index: usize, id: Option<String>, reason: impl Into<String>) -> Self {
        SkippedRecord {
            index,
            id,
            reason: reason.into(),
        }
    }
}

/// One element of the persisted array, with every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StoredProduct {
    id: Option<String>,
    name: Option<String>,
    category: Option<String>,
    price: Option<f64>,
}

impl StoredProduct {
    fn into_product(self) -> Result<Product, &'static str> {
        let id = present(self.id).ok_or("missing id")?;
        let name = present(self.name).ok_or("missing name")?;
        let category = present(self.category).ok_or("missing category")?;
        let price = self
            .price
            .filter(|p| p.is_finite())
            .ok_or("missing price")?;

        Ok(Product::new(id, name, category, price))
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_products;

    fn seeded() -> Catalog {
        Catalog::from_products(sample_products())
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut catalog = seeded();
        let added = catalog
            .add(ProductInput::new("BAG001", "Tote Bag", "Accessories", "15"))
            .unwrap()
            .clone();

        assert_eq!(added.id, "BAG001");
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.products().last(), Some(&added));
    }

    #[test]
    fn test_duplicate_id_leaves_catalog_unchanged() {
        let mut catalog = seeded();
        let before = catalog.clone();

        let err = catalog
            .add(ProductInput::new("ELEC001", "Other", "Electronics", "5"))
            .unwrap_err();

        assert_eq!(err, CoreError::duplicate_id("ELEC001"));
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_duplicate_check_uses_trimmed_id_and_is_case_sensitive() {
        let mut catalog = seeded();
        assert!(catalog
            .add(ProductInput::new(" ELEC001 ", "Other", "Electronics", "5"))
            .is_err());
        assert!(catalog
            .add(ProductInput::new("elec001", "Other", "Electronics", "5"))
            .is_ok());
    }

    #[test]
    fn test_validation_failure_leaves_catalog_unchanged() {
        let mut catalog = seeded();
        let before = catalog.clone();

        let err = catalog
            .add(ProductInput::new("NEW1", "Thing", "Misc", "0"))
            .unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_remove_present_and_absent() {
        let mut catalog = seeded();

        let removed = catalog.remove("WATCH001").unwrap();
        assert_eq!(removed.name, "Digital Sports Watch");
        assert_eq!(catalog.len(), 4);
        assert!(!catalog.contains("WATCH001"));

        assert!(catalog.remove("WATCH001").is_none());
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_json_round_trip_preserves_order() {
        let catalog = seeded();
        let loaded = Catalog::from_json(&catalog.to_json().unwrap()).unwrap();
        assert_eq!(loaded.catalog, catalog);
        assert!(loaded.skipped.is_empty());
    }

    #[test]
    fn test_from_json_keeps_valid_records_around_a_broken_one() {
        let json = r#"[
            {"id":"MINE1","name":"Mine","category":"Misc","price":5},
            {"id":"OLD1","name":"Legacy","category":"Misc"},
            {"id":"MINE2","name":"Also Mine","category":"Misc","price":2.5,"stock":3}
        ]"#;

        let loaded = Catalog::from_json(json).unwrap();

        let ids: Vec<&str> = loaded.catalog.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["MINE1", "MINE2"]);
        assert_eq!(
            loaded.skipped,
            [SkippedRecord::new(1, Some("OLD1".into()), "missing price")]
        );
    }

    #[test]
    fn test_from_json_skips_blank_wrong_typed_and_repeated_records() {
        let json = r#"[
            {"id":"A","name":"First","category":"X","price":1},
            {"id":"B","name":"   ","category":"X","price":1},
            {"id":"C","name":"Third","category":"X","price":"1"},
            "not an object",
            {"id":"A","name":"Shadow","category":"Y","price":3}
        ]"#;

        let loaded = Catalog::from_json(json).unwrap();

        assert_eq!(loaded.catalog.len(), 1);
        assert_eq!(loaded.catalog.get("A").map(|p| p.name.as_str()), Some("First"));

        let skipped: Vec<(usize, &str)> = loaded
            .skipped
            .iter()
            .map(|s| (s.index, s.reason.as_str()))
            .collect();
        assert_eq!(skipped[0], (1, "missing name"));
        assert_eq!(skipped[1], (2, "not a product record"));
        assert_eq!(skipped[2], (3, "not a product record"));
        assert_eq!(skipped[3].0, 4);
        assert_eq!(loaded.skipped[3].id.as_deref(), Some("A"));
    }

    #[test]
    fn test_from_products_drops_repeated_ids() {
        let catalog = Catalog::from_products(vec![
            Product::new("A", "First", "X", 1.0),
            Product::new("B", "Second", "X", 2.0),
            Product::new("A", "Shadow", "Y", 3.0),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("A").map(|p| p.name.as_str()), Some("First"));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Catalog::from_json("not json").is_err());
        assert!(Catalog::from_json(r#"{"id":"A"}"#).is_err());
    }
}
