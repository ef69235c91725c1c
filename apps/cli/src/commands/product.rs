//! # Product Commands
//!
//! Catalog reads and writes issued by the CLI and the shell.
//!
//! ## Add Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    add_product                                          │
//! │                                                                         │
//! │  ProductInput { id, name, category, price: "79.99" }                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogStore::add                                                      │
//! │       │                                                                 │
//! │       ├── missing field / bad price ──► VALIDATION_ERROR               │
//! │       ├── id already present ─────────► DUPLICATE_ID                   │
//! │       ├── write failed ───────────────► PERSISTENCE_ERROR              │
//! │       │                                 (product stays in memory)       │
//! │       ▼                                                                 │
//! │  ProductRow { price_display: "$79.99", .. }                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::Write;

use ministore_core::view::{self, CategoryFilter, Projection, ProductRow};
use ministore_core::ProductInput;
use tokio::io::AsyncBufRead;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{ConfigState, StoreState};
use crate::ui::prompt::Prompt;

/// Toast text after a successful add.
pub const MSG_ADDED: &str = "Product added successfully!";

/// Toast text after a successful remove.
pub const MSG_REMOVED: &str = "Product removed successfully!";

/// Question asked before a removal.
pub const CONFIRM_REMOVE: &str = "Are you sure you want to remove this product?";

/// Validates and adds a product.
pub async fn add_product(
    store: &mut StoreState,
    config: &ConfigState,
    input: ProductInput,
) -> Result<ProductRow, ApiError> {
    debug!(id = %input.id, "add_product command");

    let product = store.catalog_mut().add(input).await?;
    info!(id = %product.id, "Product added via command");

    Ok(ProductRow::from_product(&product, &config.currency_symbol))
}

/// Removes a product without asking. Callers confirm first.
///
/// Returns the remaining rows. An unknown id succeeds and changes nothing.
pub async fn remove_product(
    store: &mut StoreState,
    config: &ConfigState,
    id: &str,
) -> Result<Vec<ProductRow>, ApiError> {
    debug!(id = %id, "remove_product command");

    let remaining = store.catalog_mut().remove(id).await?;

    Ok(remaining
        .iter()
        .map(|p| ProductRow::from_product(p, &config.currency_symbol))
        .collect())
}

/// What a confirmed removal did.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoveOutcome {
    /// The user said no; the store was not touched.
    Cancelled,
    /// Rows left after the removal.
    Removed(Vec<ProductRow>),
}

/// Asks [`CONFIRM_REMOVE`] unless `assume_yes`, then removes `id`.
///
/// A declined question writes `Cancelled.` and leaves the store alone.
pub async fn confirm_and_remove<R: AsyncBufRead + Unpin>(
    store: &mut StoreState,
    config: &ConfigState,
    prompt: &mut Prompt<R>,
    out: &mut impl Write,
    id: &str,
    assume_yes: bool,
) -> Result<RemoveOutcome, ApiError> {
    if !assume_yes && !prompt.confirm(&mut *out, CONFIRM_REMOVE).await? {
        debug!(id = %id, "Removal declined");
        writeln!(out, "Cancelled.")?;
        return Ok(RemoveOutcome::Cancelled);
    }

    remove_product(store, config, id)
        .await
        .map(RemoveOutcome::Removed)
}

/// Management list: every product, in order.
pub fn list_products(store: &StoreState, config: &ConfigState) -> Projection {
    view::management_rows(store.products(), &config.currency_symbol)
}

/// Catalog grid filtered by id search and category.
pub fn catalog(
    store: &StoreState,
    config: &ConfigState,
    search_term: &str,
    filter: &CategoryFilter,
) -> Projection {
    view::filtered_catalog(store.products(), search_term, filter, &config.currency_symbol)
}

/// Distinct categories in first-appearance order.
pub fn categories(store: &StoreState) -> Vec<String> {
    view::categories(store.products())
        .into_iter()
        .map(str::to_string)
        .collect()
}
