//! # View State
//!
//! Navigation and catalog filter state for the interactive shell.
//!
//! ## What Each View Refreshes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  switch_view(home)        ──► nothing                                   │
//! │  switch_view(management)  ──► management rows                           │
//! │  switch_view(catalog)     ──► category list (filter reconciled)         │
//! │                               + filtered catalog grid                   │
//! │  search / category        ──► filtered catalog grid                     │
//! │  add / remove             ──► management rows                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use ministore_core::CategoryFilter;
use serde::{Deserialize, Serialize};

/// One of the three screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Management,
    Catalog,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Home => write!(f, "home"),
            View::Management => write!(f, "management"),
            View::Catalog => write!(f, "catalog"),
        }
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" => Ok(View::Home),
            "management" | "manage" => Ok(View::Management),
            "catalog" => Ok(View::Catalog),
            _ => Err(format!("Unknown view: {}", s)),
        }
    }
}

/// Current view plus the catalog's search box and category dropdown.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// The screen the user is on
    pub current: View,

    /// Search box contents, matched against product ids
    pub search_term: String,

    /// Category dropdown selection
    pub category_filter: CategoryFilter,

    /// Dropdown options as of the last catalog refresh
    pub categories: Vec<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }
}
