//! # State Module
//!
//! Manages application state for the CLI.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  StoreState  │  │  ViewState   │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Database    │  │  current     │  │  database_path   │              │
//! │  │  CatalogStore│  │  search_term │  │  storage_key     │              │
//! │  │              │  │  filter      │  │  currency_symbol │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  • StoreState: borrowed `&mut` by commands that change the catalog     │
//! │  • ViewState: only the interactive shell keeps one                     │
//! │  • ConfigState: read-only after startup                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod store;
mod view;

pub use config::{ConfigError, ConfigState, CONFIG_FILE_NAME, DATABASE_FILE_NAME};
pub use store::StoreState;
pub use view::{View, ViewState};
