//! # View Commands
//!
//! Navigation between home, management and catalog, and the catalog's
//! search box and category dropdown.
//!
//! Each command returns a [`Screen`] holding only what that action
//! refreshes; the renderer turns it into text.

use ministore_core::view::{self, reconcile_filter, CategoryFilter, Projection};

use super::product::{catalog, list_products};
use crate::state::{ConfigState, StoreState, View, ViewState};

/// What to draw after a view command.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Home,
    Management(Projection),
    Catalog(CatalogScreen),
}

/// Catalog grid plus the state of its controls.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogScreen {
    pub projection: Projection,
    pub categories: Vec<String>,
    pub category_filter: CategoryFilter,
    pub search_term: String,
}

/// Switches to `target` and refreshes what that view shows.
pub fn switch_view(
    state: &mut ViewState,
    store: &StoreState,
    config: &ConfigState,
    target: View,
) -> Screen {
    tracing::debug!(from = %state.current, to = %target, "switch_view command");
    state.current = target;

    match target {
        View::Home => Screen::Home,
        View::Management => Screen::Management(list_products(store, config)),
        View::Catalog => {
            refresh_categories(state, store);
            Screen::Catalog(catalog_screen(state, store, config))
        }
    }
}

/// Sets the search box and redraws the grid.
pub fn set_search(
    state: &mut ViewState,
    store: &StoreState,
    config: &ConfigState,
    term: &str,
) -> CatalogScreen {
    state.search_term = term.to_string();
    catalog_screen(state, store, config)
}

/// Sets the category dropdown and redraws the grid.
///
/// An empty selection means all categories.
pub fn set_category(
    state: &mut ViewState,
    store: &StoreState,
    config: &ConfigState,
    selection: &str,
) -> CatalogScreen {
    state.category_filter = CategoryFilter::from_selection(selection);
    catalog_screen(state, store, config)
}

/// Rebuilds the dropdown options, keeping a selection that still exists.
fn refresh_categories(state: &mut ViewState, store: &StoreState) {
    let available = view::categories(store.products());
    state.category_filter = reconcile_filter(&state.category_filter, &available);
    state.categories = available.into_iter().map(str::to_string).collect();
}

fn catalog_screen(state: &ViewState, store: &StoreState, config: &ConfigState) -> CatalogScreen {
    CatalogScreen {
        projection: catalog(store, config, &state.search_term, &state.category_filter),
        categories: state.categories.clone(),
        category_filter: state.category_filter.clone(),
        search_term: state.search_term.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::product::remove_product;
    use crate::commands::test_store;
    use ministore_core::EmptyState;

    #[tokio::test]
    async fn test_switch_to_catalog_lists_categories() {
        let store = test_store().await;
        let config = ConfigState::default();
        let mut state = ViewState::new();

        let Screen::Catalog(screen) = switch_view(&mut state, &store, &config, View::Catalog)
        else {
            panic!("expected catalog screen");
        };

        assert_eq!(state.current, View::Catalog);
        assert_eq!(screen.categories, ["Electronics", "Clothing", "Watches"]);
        assert_eq!(screen.projection.rows.len(), 5);
    }

    #[tokio::test]
    async fn test_home_refreshes_nothing() {
        let store = test_store().await;
        let config = ConfigState::default();
        let mut state = ViewState::new();

        assert_eq!(
            switch_view(&mut state, &store, &config, View::Home),
            Screen::Home
        );
    }

    #[tokio::test]
    async fn test_search_and_category_combine() {
        let store = test_store().await;
        let config = ConfigState::default();
        let mut state = ViewState::new();
        switch_view(&mut state, &store, &config, View::Catalog);

        let screen = set_category(&mut state, &store, &config, "Clothing");
        assert_eq!(screen.projection.rows.len(), 2);

        let screen = set_search(&mut state, &store, &config, "cloth002");
        let ids: Vec<_> = screen.projection.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["CLOTH002"]);

        let screen = set_search(&mut state, &store, &config, "elec");
        assert_eq!(screen.projection.empty_state, Some(EmptyState::EmptyFilterResult));
    }

    #[tokio::test]
    async fn test_vanished_category_resets_on_catalog_switch() {
        let mut store = test_store().await;
        let config = ConfigState::default();
        let mut state = ViewState::new();
        switch_view(&mut state, &store, &config, View::Catalog);
        set_category(&mut state, &store, &config, "Watches");

        remove_product(&mut store, &config, "WATCH001").await.unwrap();

        let Screen::Catalog(screen) = switch_view(&mut state, &store, &config, View::Catalog)
        else {
            panic!("expected catalog screen");
        };
        assert_eq!(screen.category_filter, CategoryFilter::All);
        assert_eq!(screen.projection.rows.len(), 4);
    }

    #[tokio::test]
    async fn test_surviving_category_stays_selected() {
        let mut store = test_store().await;
        let config = ConfigState::default();
        let mut state = ViewState::new();
        switch_view(&mut state, &store, &config, View::Catalog);
        set_category(&mut state, &store, &config, "Electronics");

        remove_product(&mut store, &config, "ELEC001").await.unwrap();

        let Screen::Catalog(screen) = switch_view(&mut state, &store, &config, View::Catalog)
        else {
            panic!("expected catalog screen");
        };
        assert_eq!(
            screen.category_filter,
            CategoryFilter::Category("Electronics".into())
        );
        assert_eq!(screen.projection.rows.len(), 1);
    }
}
