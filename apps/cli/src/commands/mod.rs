//! # Commands Module
//!
//! Every user action the CLI and the shell can perform.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── add, remove, list, catalog, categories
//! └── view.rs     ◄─── switch_view, search, category filter
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Reads the catalog
//! fn list_products(store: &StoreState, config: &ConfigState) -> Projection
//!
//! // Changes the catalog
//! async fn add_product(store: &mut StoreState, config: &ConfigState, input: ProductInput)
//!
//! // Changes navigation
//! fn switch_view(view: &mut ViewState, store: &StoreState, config: &ConfigState, target: View)
//! ```

pub mod product;
pub mod view;

#[cfg(test)]
pub(crate) async fn test_store() -> crate::state::StoreState {
    use ministore_db::{Database, DbConfig};

    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let mut store = crate::state::StoreState::from_database(db, "ministore_products")
        .await
        .unwrap();
    store.bootstrap().await.unwrap();
    store
}
