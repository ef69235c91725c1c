//! # Repository Module
//!
//! Database repository implementations for MiniStore.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  CatalogStore                                                          │
//! │       │                                                                 │
//! │       │  storage.set("ministore_products", json)                       │
//! │       ▼                                                                 │
//! │  DurableStorageRepository                                              │
//! │  ├── get(&self, key)                                                   │
//! │  ├── set(&self, key, value)   ← quota checked                          │
//! │  ├── remove(&self, key)                                                │
//! │  └── usage_bytes(&self)                                                │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite durable_storage table                                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`storage::DurableStorageRepository`] - named key/value slots

pub mod storage;
