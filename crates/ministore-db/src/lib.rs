//! # ministore-db: Storage Layer for MiniStore
//!
//! This crate persists the catalog. It uses SQLite through sqlx to emulate
//! browser local storage: a table of named durable keys, each holding one
//! string value, with a size quota.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        MiniStore Data Flow                              │
//! │                                                                         │
//! │  CLI command (add_product)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   ministore-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────────┐  ┌─────────────┐  │   │
//! │  │   │ CatalogStore  │───►│ DurableStorage    │  │ Migrations  │  │   │
//! │  │   │ (store.rs)    │    │ Repository        │  │ (embedded)  │  │   │
//! │  │   │               │    │ get / set / quota │  │ 001_...sql  │  │   │
//! │  │   └───────┬───────┘    └─────────┬─────────┘  └─────────────┘  │   │
//! │  │           │                      │                              │   │
//! │  │   ministore-core::Catalog   Database (pool.rs, SqlitePool)      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ministore.db (SQLite file, WAL mode)                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`pool`] - Connection pool and database configuration
//! - [`migrations`] - Embedded schema migrations
//! - [`error`] - Storage and store error types
//! - [`repository`] - Durable key-value slots
//! - [`store`] - The persisted catalog
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ministore_db::{CatalogStore, Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./ministore.db")).await?;
//! let mut store = CatalogStore::open(db.storage(), "ministore_products").await?;
//! store.seed_if_empty().await?;
//!
//! store.add(ProductInput::new("BAG001", "Tote", "Accessories", "15")).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult, StoreError, StoreResult};
pub use pool::{Database, DbConfig, DEFAULT_QUOTA_BYTES};
pub use repository::storage::DurableStorageRepository;
pub use store::CatalogStore;
