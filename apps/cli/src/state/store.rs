//! # Store State
//!
//! Owns the database connection and the catalog store for the session.
//!
//! ## Ownership
//! The process runs one command at a time on a single-threaded runtime, so
//! commands borrow the store mutably instead of locking it.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! async fn add_product(
//!     store: &mut StoreState,
//!     config: &ConfigState,
//!     input: ProductInput,
//! ) -> Result<ProductRow, ApiError> {
//!     let product = store.catalog_mut().add(input).await?;
//!     Ok(ProductRow::from_product(&product, &config.currency_symbol))
//! }
//! ```

use std::path::PathBuf;

use ministore_core::Product;
use ministore_db::{CatalogStore, Database, DbConfig, DbResult, StoreResult};
use tracing::info;

use super::ConfigState;

/// Database plus the catalog loaded from it.
#[derive(Debug)]
pub struct StoreState {
    db: Database,
    catalog: CatalogStore,
}

impl StoreState {
    /// Connects to the database at `path` and loads the catalog.
    pub async fn open(config: &ConfigState, path: PathBuf) -> DbResult<Self> {
        info!(?path, "Opening database");
        let db = Database::new(DbConfig::new(path).quota_bytes(config.quota_bytes)).await?;
        Self::from_database(db, &config.storage_key).await
    }

    /// Loads the catalog stored under `key` in an already open database.
    pub async fn from_database(db: Database, key: &str) -> DbResult<Self> {
        let catalog = CatalogStore::open(db.storage(), key).await?;
        Ok(StoreState { db, catalog })
    }

    /// Seeds the sample products if the catalog loaded empty.
    pub async fn bootstrap(&mut self) -> StoreResult<bool> {
        self.catalog.seed_if_empty().await
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut CatalogStore {
        &mut self.catalog
    }

    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    /// Closes the connection pool.
    pub async fn close(self) {
        self.db.close().await;
    }
}
