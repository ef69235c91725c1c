//! # Catalog Store
//!
//! The authoritative in-memory catalog, mirrored to one durable key.
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    add / remove                                         │
//! │                                                                         │
//! │  ProductInput ──► Catalog::add ──┬── Err ──► StoreError::Rejected      │
//! │                                  │           (no write, no change)      │
//! │                                  ▼                                      │
//! │                        in-memory catalog changed                        │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                     persist(): whole catalog as JSON                    │
//! │                                  │                                      │
//! │                                  ├── Err ──► StoreError::Persistence   │
//! │                                  │           (change kept in memory)    │
//! │                                  ▼                                      │
//! │                                 Ok                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no partial write: every persist overwrites the key with the full
//! list, last write wins.

use ministore_core::seed::sample_products;
use ministore_core::{Catalog, Product, ProductInput};
use tracing::{debug, info, warn};

use crate::error::{DbError, DbResult, StoreResult};
use crate::repository::storage::DurableStorageRepository;

/// The persisted catalog.
///
/// Construct once at startup with [`CatalogStore::open`] and hand it to
/// whatever issues commands.
#[derive(Debug)]
pub struct CatalogStore {
    storage: DurableStorageRepository,
    key: String,
    catalog: Catalog,
}

impl CatalogStore {
    /// Reads the catalog stored under `key`.
    ///
    /// An absent key or a value that is not a JSON array yields an empty
    /// catalog. Records that lack a field are dropped one by one and the
    /// rest load. Only a failing read is an error.
    pub async fn initialize(storage: &DurableStorageRepository, key: &str) -> DbResult<Catalog> {
        let Some(raw) = storage.get(key).await? else {
            debug!(key = %key, "No stored catalog");
            return Ok(Catalog::default());
        };

        match Catalog::from_json(&raw) {
            Ok(loaded) => {
                for skipped in &loaded.skipped {
                    warn!(
                        key = %key,
                        index = skipped.index,
                        id = skipped.id.as_deref().unwrap_or(""),
                        reason = %skipped.reason,
                        "Dropped unreadable stored product"
                    );
                }
                debug!(key = %key, count = loaded.catalog.len(), "Loaded catalog");
                Ok(loaded.catalog)
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Stored catalog is unreadable, starting empty");
                Ok(Catalog::default())
            }
        }
    }

    /// Loads the catalog and returns a store bound to `key`.
    pub async fn open(storage: DurableStorageRepository, key: impl Into<String>) -> DbResult<Self> {
        let key = key.into();
        let catalog = Self::initialize(&storage, &key).await?;
        info!(key = %key, count = catalog.len(), "Catalog store opened");

        Ok(CatalogStore {
            storage,
            key,
            catalog,
        })
    }

    /// Installs the sample products when the catalog is empty.
    ///
    /// Runs at every startup, so a catalog the user emptied is seeded again
    /// on the next start. Returns whether seeding happened.
    pub async fn seed_if_empty(&mut self) -> StoreResult<bool> {
        if !self.catalog.is_empty() {
            return Ok(false);
        }

        self.catalog.replace(sample_products());
        info!(count = self.catalog.len(), "Seeded sample products");
        self.persist().await?;
        Ok(true)
    }

    /// Replaces the whole catalog with the sample products and persists.
    pub async fn reset_to_samples(&mut self) -> StoreResult<()> {
        self.catalog.replace(sample_products());
        info!(count = self.catalog.len(), "Catalog reset to sample products");
        self.persist().await
    }

    /// Validates and appends a product, then persists.
    ///
    /// ## Errors
    /// * `StoreError::Rejected` - missing field or duplicate id; nothing changed
    /// * `StoreError::Persistence` - the product was added in memory but the
    ///   write failed, so it may be lost on reload
    pub async fn add(&mut self, input: ProductInput) -> StoreResult<Product> {
        let product = self.catalog.add(input)?.clone();
        info!(id = %product.id, count = self.catalog.len(), "Product added");

        self.persist().await?;
        Ok(product)
    }

    /// Removes the product with `id` and persists.
    ///
    /// This is the unconfirmed removal: callers ask the user first. An
    /// unknown id is not an error; the unchanged catalog is written anyway.
    pub async fn remove(&mut self, id: &str) -> StoreResult<&[Product]> {
        match self.catalog.remove(id) {
            Some(_) => info!(id = %id, count = self.catalog.len(), "Product removed"),
            None => debug!(id = %id, "Remove of unknown id"),
        }

        self.persist().await?;
        Ok(self.catalog.products())
    }

    /// Writes the full catalog to the durable key.
    pub async fn persist(&self) -> StoreResult<()> {
        let json = self.catalog.to_json().map_err(DbError::from)?;
        self.storage.set(&self.key, &json).await?;
        debug!(key = %self.key, bytes = json.len(), "Catalog persisted");
        Ok(())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current products in display order.
    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.catalog.contains(id)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &DurableStorageRepository {
        &self.storage
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
