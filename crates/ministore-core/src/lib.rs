//! # ministore-core: Pure Catalog Logic for MiniStore
//!
//! This crate holds everything MiniStore knows about products that does not
//! touch storage: the domain types, input validation, the catalog's
//! uniqueness invariant, and the view projections used by the management
//! list and the catalog grid.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        MiniStore Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 ministore-cli (commands, shell)                 │   │
//! │  │   add_product, remove_product, catalog, switch_view, ...       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ministore-db (CatalogStore, durable storage)         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ ministore-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  catalog  │  │   view    │  │ validation│  │   │
//! │  │   │  Product  │  │  Catalog  │  │ Projection│  │   price   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • PURE FUNCTIONS                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Product` and the raw `ProductInput` form
//! - [`catalog`] - ordered product list with unique ids
//! - [`view`] - search/filter projections and empty states
//! - [`validation`] - field rules for new products
//! - [`price`] - price token parsing and display formatting
//! - [`seed`] - the built-in sample products
//! - [`error`] - domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use ministore_core::{Catalog, CategoryFilter, ProductInput};
//! use ministore_core::view::filtered_catalog;
//!
//! let mut catalog = Catalog::default();
//! catalog
//!     .add(ProductInput::new("ELEC001", "Headphones", "Electronics", "79.99"))
//!     .unwrap();
//!
//! let view = filtered_catalog(catalog.products(), "elec", &CategoryFilter::All, "$");
//! assert_eq!(view.rows.len(), 1);
//! assert_eq!(view.rows[0].price_display, "$79.99");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod price;
pub mod seed;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, LoadedCatalog, SkippedRecord};
pub use error::{CoreError, CoreResult, ValidationError};
pub use types::{Product, ProductInput};
pub use view::{CategoryFilter, EmptyState, Projection, ProductRow};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Name of the durable key holding the serialized catalog.
///
/// Matches the local storage key used by the browser version, so an exported
/// value can be pasted in unchanged.
pub const DEFAULT_STORAGE_KEY: &str = "ministore_products";

/// Currency symbol used when none is configured.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
