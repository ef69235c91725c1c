//! # Text Renderer
//!
//! Turns projections into terminal text: a table for the management list,
//! cards for the catalog grid.
//!
//! ```text
//! Management                          Catalog
//! ──────────                          ───────
//! ID        NAME            PRICE     [ELEC001] Wireless Bluetooth Headphones
//! ELEC001   Wireless ...   $79.99               Electronics · $79.99
//! ```

use std::io::{self, Write};

use ministore_core::{CategoryFilter, EmptyState, Projection, ProductRow};

use crate::commands::view::{CatalogScreen, Screen};
use crate::state::View;

/// Headline and hint shown in place of rows.
pub fn empty_state_text(state: EmptyState, view: View) -> (&'static str, &'static str) {
    match (state, view) {
        (EmptyState::EmptyFilterResult, _) => (
            "No products found matching your criteria",
            "Try adjusting your search or filter.",
        ),
        (EmptyState::EmptyCatalog, View::Management) => (
            "No products yet",
            "Add your first product using the form",
        ),
        (EmptyState::EmptyCatalog, _) => (
            "No products available",
            "Add some products to get started!",
        ),
    }
}

pub fn render_screen(out: &mut impl Write, screen: &Screen) -> io::Result<()> {
    match screen {
        Screen::Home => render_home(out),
        Screen::Management(projection) => render_management(out, projection),
        Screen::Catalog(catalog) => render_catalog(out, catalog),
    }
}

pub fn render_home(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "MiniStore")?;
    writeln!(out, "  view management   manage products (add, remove)")?;
    writeln!(out, "  view catalog      browse, search and filter")?;
    writeln!(out, "  help              list every command")
}

/// Management table: ID, name, category, price.
pub fn render_management(out: &mut impl Write, projection: &Projection) -> io::Result<()> {
    if let Some(state) = projection.empty_state {
        return render_empty(out, state, View::Management);
    }

    writeln!(out, "Products ({})", projection.rows.len())?;

    let headers = ["ID", "NAME", "CATEGORY", "PRICE"];
    let cells: Vec<[&str; 4]> = projection
        .rows
        .iter()
        .map(|r| [r.id.as_str(), r.name.as_str(), r.category.as_str(), r.price_display.as_str()])
        .collect();

    let mut widths = headers.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_table_row(out, &headers, &widths)?;
    for row in &cells {
        write_table_row(out, row, &widths)?;
    }
    Ok(())
}

/// Catalog cards with the state of the search box and dropdown.
pub fn render_catalog(out: &mut impl Write, screen: &CatalogScreen) -> io::Result<()> {
    let category = match &screen.category_filter {
        CategoryFilter::All => "All Categories",
        CategoryFilter::Category(c) => c.as_str(),
    };
    writeln!(
        out,
        "Catalog  search: \"{}\"  category: {}",
        screen.search_term, category
    )?;

    if let Some(state) = screen.projection.empty_state {
        render_empty(out, state, View::Catalog)?;
        if state == EmptyState::EmptyCatalog {
            writeln!(out, "  Go to `view management` to add products.")?;
        }
        return Ok(());
    }

    for row in &screen.projection.rows {
        render_card(out, row)?;
    }
    Ok(())
}

pub fn render_categories(
    out: &mut impl Write,
    categories: &[String],
    selected: &CategoryFilter,
) -> io::Result<()> {
    let marker = |on: bool| if on { "*" } else { " " };

    writeln!(out, "{} All Categories", marker(*selected == CategoryFilter::All))?;
    for category in categories {
        let on = matches!(selected, CategoryFilter::Category(c) if c == category);
        writeln!(out, "{} {}", marker(on), category)?;
    }
    Ok(())
}

fn render_card(out: &mut impl Write, row: &ProductRow) -> io::Result<()> {
    let tag = format!("[{}]", row.id);
    writeln!(out, "{} {}", tag, row.name)?;
    writeln!(out, "{:width$} {} · {}", "", row.category, row.price_display, width = tag.chars().count())
}

fn render_empty(out: &mut impl Write, state: EmptyState, view: View) -> io::Result<()> {
    let (headline, hint) = empty_state_text(state, view);
    writeln!(out, "{}", headline)?;
    writeln!(out, "  {}", hint)
}

fn write_table_row(out: &mut impl Write, cells: &[&str; 4], widths: &[usize; 4]) -> io::Result<()> {
    writeln!(
        out,
        "{:<w0$}  {:<w1$}  {:<w2$}  {:>w3$}",
        cells[0],
        cells[1],
        cells[2],
        cells[3],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ministore_core::seed::sample_products;
    use ministore_core::view::{filtered_catalog, management_rows};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_management_table_aligns_columns() {
        let projection = management_rows(&sample_products(), "$");
        let text = render(|out| render_management(out, &projection));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Products (5)");
        assert!(lines[1].starts_with("ID "));
        assert!(lines[2].starts_with("ELEC001 "));
        assert!(lines[2].ends_with("$79.99"));
        assert!(lines[4].ends_with("$149.99"));
        assert_eq!(lines[2].len(), lines[4].len());
    }

    #[test]
    fn test_empty_texts_differ_by_view() {
        let empty = management_rows(&[], "$");
        let text = render(|out| render_management(out, &empty));
        assert!(text.contains("No products yet"));
        assert!(text.contains("Add your first product using the form"));

        let screen = CatalogScreen {
            projection: filtered_catalog(&[], "", &CategoryFilter::All, "$"),
            categories: Vec::new(),
            category_filter: CategoryFilter::All,
            search_term: String::new(),
        };
        let text = render(|out| render_catalog(out, &screen));
        assert!(text.contains("No products available"));
        assert!(text.contains("Add some products to get started!"));
        assert!(text.contains("view management"));
    }

    #[test]
    fn test_filtered_out_catalog() {
        let products = sample_products();
        let filter = CategoryFilter::from_selection("Toys");
        let screen = CatalogScreen {
            projection: filtered_catalog(&products, "", &filter, "$"),
            categories: vec!["Electronics".into()],
            category_filter: filter,
            search_term: String::new(),
        };

        let text = render(|out| render_catalog(out, &screen));
        assert!(text.contains("category: Toys"));
        assert!(text.contains("No products found matching your criteria"));
        assert!(text.contains("Try adjusting your search or filter."));
    }

    #[test]
    fn test_catalog_cards() {
        let products = sample_products();
        let screen = CatalogScreen {
            projection: filtered_catalog(&products, "watch", &CategoryFilter::All, "$"),
            categories: Vec::new(),
            category_filter: CategoryFilter::All,
            search_term: "watch".into(),
        };

        let text = render(|out| render_catalog(out, &screen));
        assert!(text.contains("[WATCH001] Digital Sports Watch"));
        assert!(text.contains("Watches · $149.99"));
    }

    #[test]
    fn test_categories_mark_selection() {
        let categories = vec!["Electronics".to_string(), "Clothing".to_string()];
        let text = render(|out| {
            render_categories(out, &categories, &CategoryFilter::from_selection("Clothing"))
        });

        assert_eq!(text, "  All Categories\n  Electronics\n* Clothing\n");
    }
}
