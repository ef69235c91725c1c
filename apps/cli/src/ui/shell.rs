//! # Interactive Shell
//!
//! A read-eval loop over the commands, standing in for the three-page UI.
//!
//! ```text
//! ministore> view catalog
//! Catalog  search: ""  category: All Categories
//! [ELEC001] Wireless Bluetooth Headphones
//!           Electronics · $79.99
//! ...
//! ministore> category Watches
//! ministore> search watch
//! ministore> remove WATCH001
//! Are you sure you want to remove this product? [y/N] y
//! ✓ Product removed successfully!
//! ```
//!
//! Each line runs to completion before the next one is read.

use std::io::{self, Write};

use ministore_core::ProductInput;
use tokio::io::AsyncBufRead;

use super::notify::{Notifier, Toast};
use super::prompt::Prompt;
use super::render::{render_catalog, render_categories, render_management, render_screen};
use crate::commands::product::{
    add_product, categories, list_products, remove_product, CONFIRM_REMOVE, MSG_ADDED, MSG_REMOVED,
};
use crate::commands::view::{set_category, set_search, switch_view};
use crate::error::{ApiError, ErrorCode};
use crate::state::{ConfigState, StoreState, View, ViewState};

const HELP: &str = "\
Commands:
  view <home|management|catalog>   switch view
  search <term>                    filter the catalog by product id
  category <name|all>              filter the catalog by category
                                   (`all` clears it; `category \"all\"`
                                   selects a category named all)
  categories                       list categories
  add                              add a product (asks for each field)
  remove <id>                      remove a product
  help                             show this help
  quit                             leave the shell";

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    View(View),
    Search(String),
    /// Dropdown selection; empty means all categories
    Category(String),
    Categories,
    Add,
    Remove(String),
    Help,
    Quit,
    Empty,
}

/// Parses a shell line. The error is a message for the user.
pub fn parse_command(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim_start();
    let (word, rest) = line.split_once(' ').unwrap_or((line.trim_end(), ""));

    match word.to_lowercase().as_str() {
        "" => Ok(ShellCommand::Empty),
        "view" => rest.trim().parse().map(ShellCommand::View),
        "list" => Ok(ShellCommand::View(View::Management)),
        "search" => Ok(ShellCommand::Search(rest.to_string())),
        "category" => {
            let selection = rest.trim();
            let quoted = selection
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'));

            match quoted {
                Some(name) => Ok(ShellCommand::Category(name.to_string())),
                None if selection.eq_ignore_ascii_case("all") => {
                    Ok(ShellCommand::Category(String::new()))
                }
                None => Ok(ShellCommand::Category(selection.to_string())),
            }
        }
        "categories" => Ok(ShellCommand::Categories),
        "add" => Ok(ShellCommand::Add),
        "remove" | "rm" => match rest.trim() {
            "" => Err("Usage: remove <id>".to_string()),
            id => Ok(ShellCommand::Remove(id.to_string())),
        },
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" => Ok(ShellCommand::Quit),
        other => Err(format!("Unknown command: {}. Type `help` for a list.", other)),
    }
}

pub struct Shell<'a, R, W, N> {
    store: &'a mut StoreState,
    config: &'a ConfigState,
    view: ViewState,
    prompt: Prompt<R>,
    out: W,
    notifier: N,
}

impl<'a, R, W, N> Shell<'a, R, W, N>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    N: Notifier,
{
    pub fn new(
        store: &'a mut StoreState,
        config: &'a ConfigState,
        prompt: Prompt<R>,
        out: W,
        notifier: N,
    ) -> Self {
        Shell {
            store,
            config,
            view: ViewState::new(),
            prompt,
            out,
            notifier,
        }
    }

    /// Runs until `quit` or end of input.
    pub async fn run(&mut self) -> io::Result<()> {
        render_screen(&mut self.out, &switch_view(&mut self.view, &*self.store, self.config, View::Home))?;

        loop {
            write!(self.out, "ministore> ")?;
            self.out.flush()?;

            let Some(line) = self.prompt.read_line().await? else {
                writeln!(self.out)?;
                break;
            };

            match parse_command(&line) {
                Ok(ShellCommand::Quit) => break,
                Ok(command) => self.execute(command).await?,
                Err(message) => writeln!(self.out, "{}", message)?,
            }
        }

        tracing::debug!("Shell closed");
        Ok(())
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    async fn execute(&mut self, command: ShellCommand) -> io::Result<()> {
        match command {
            ShellCommand::View(target) => {
                let screen = switch_view(&mut self.view, &*self.store, self.config, target);
                render_screen(&mut self.out, &screen)
            }
            ShellCommand::Search(term) => {
                self.enter_catalog();
                let screen = set_search(&mut self.view, &*self.store, self.config, &term);
                render_catalog(&mut self.out, &screen)
            }
            ShellCommand::Category(selection) => {
                self.enter_catalog();
                let screen = set_category(&mut self.view, &*self.store, self.config, &selection);
                render_catalog(&mut self.out, &screen)
            }
            ShellCommand::Categories => {
                let available = categories(&*self.store);
                render_categories(&mut self.out, &available, &self.view.category_filter)
            }
            ShellCommand::Add => self.add().await,
            ShellCommand::Remove(id) => self.remove(&id).await,
            ShellCommand::Help => writeln!(self.out, "{}", HELP),
            ShellCommand::Quit | ShellCommand::Empty => Ok(()),
        }
    }

    /// Search and category controls live on the catalog view.
    fn enter_catalog(&mut self) {
        if self.view.current != View::Catalog {
            switch_view(&mut self.view, &*self.store, self.config, View::Catalog);
        }
    }

    async fn add(&mut self) -> io::Result<()> {
        let Some(input) = self.read_product_form().await? else {
            return Ok(());
        };

        let result = add_product(&mut *self.store, self.config, input)
            .await
            .map(|_| ());
        self.report(result, MSG_ADDED)
    }

    async fn remove(&mut self, id: &str) -> io::Result<()> {
        if !self.prompt.confirm(&mut self.out, CONFIRM_REMOVE).await? {
            return writeln!(self.out, "Cancelled.");
        }

        let result = remove_product(&mut *self.store, self.config, id)
            .await
            .map(|_| ());
        self.report(result, MSG_REMOVED)
    }

    /// Toasts the outcome and redraws the management list when the
    /// catalog changed in memory.
    fn report(&mut self, result: Result<(), ApiError>, success: &str) -> io::Result<()> {
        let changed = match result {
            Ok(()) => {
                self.notifier.notify(Toast::success(success));
                true
            }
            Err(e) => {
                self.notifier.notify(Toast::from(&e));
                e.code == ErrorCode::PersistenceError
            }
        };

        if changed && self.view.current == View::Management {
            render_management(&mut self.out, &list_products(&*self.store, self.config))?;
        }
        Ok(())
    }

    async fn read_product_form(&mut self) -> io::Result<Option<ProductInput>> {
        let mut input = ProductInput::default();
        let fields = [
            ("Product ID:", &mut input.id),
            ("Product Name:", &mut input.name),
            ("Category:", &mut input.category),
            ("Price:", &mut input.price),
        ];

        for (label, field) in fields {
            match self.prompt.ask(&mut self.out, label).await? {
                Some(value) => *field = value,
                None => return Ok(None),
            }
        }
        Ok(Some(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_store;
    use crate::error::MSG_DUPLICATE_ID;
    use crate::ui::notify::Severity;
    use ministore_core::CategoryFilter;

    async fn run_script(store: &mut StoreState, script: &str) -> (String, Vec<Toast>, ViewState) {
        let config = ConfigState::default();
        let mut out = Vec::new();
        let mut toasts = Vec::new();

        let view = {
            let mut shell = Shell::new(
                store,
                &config,
                Prompt::new(script.as_bytes()),
                &mut out,
                &mut toasts,
            );
            shell.run().await.unwrap();
            shell.view().clone()
        };

        (String::from_utf8(out).unwrap(), toasts, view)
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("view catalog"), Ok(ShellCommand::View(View::Catalog)));
        assert_eq!(parse_command("  search elec"), Ok(ShellCommand::Search("elec".into())));
        assert_eq!(parse_command("search"), Ok(ShellCommand::Search(String::new())));
        assert_eq!(parse_command("category All"), Ok(ShellCommand::Category(String::new())));
        assert_eq!(
            parse_command("category Home Goods"),
            Ok(ShellCommand::Category("Home Goods".into()))
        );
        assert_eq!(
            parse_command(r#"category "all""#),
            Ok(ShellCommand::Category("all".into()))
        );
        assert_eq!(
            parse_command(r#"category "Home Goods" "#),
            Ok(ShellCommand::Category("Home Goods".into()))
        );
        assert_eq!(parse_command(r#"category """#), Ok(ShellCommand::Category(String::new())));
        assert_eq!(parse_command("rm X1 "), Ok(ShellCommand::Remove("X1".into())));
        assert_eq!(parse_command(""), Ok(ShellCommand::Empty));
        assert!(parse_command("remove").is_err());
        assert!(parse_command("view checkout").is_err());
        assert!(parse_command("checkout").is_err());
    }

    #[tokio::test]
    async fn test_quoted_all_selects_literal_category() {
        let mut store = test_store().await;
        store
            .catalog_mut()
            .add(ProductInput::new("ODD1", "Odd One", "all", "1"))
            .await
            .unwrap();

        let (out, _, view) =
            run_script(&mut store, "view catalog\ncategory \"all\"\n").await;
        assert_eq!(view.category_filter, CategoryFilter::Category("all".into()));
        let last_screen = out.rsplit("Catalog  search:").next().unwrap();
        assert!(last_screen.contains("category: all"));
        assert!(last_screen.contains("[ODD1] Odd One"));
        assert!(!last_screen.contains("[ELEC001]"));

        let (_, _, view) = run_script(&mut store, "view catalog\ncategory all\n").await;
        assert_eq!(view.category_filter, CategoryFilter::All);
    }

    #[tokio::test]
    async fn test_add_from_management_view() {
        let mut store = test_store().await;
        let (out, toasts, _) = run_script(
            &mut store,
            "view management\nadd\nBAG001\nTote Bag\nAccessories\n15\nquit\n",
        )
        .await;

        assert_eq!(toasts, [Toast::success("Product added successfully!")]);
        assert!(out.contains("Product ID: Product Name: Category: Price: "));
        assert!(out.contains("Products (6)"));
        assert!(out.contains("$15.00"));
        assert_eq!(store.products().len(), 6);
    }

    #[tokio::test]
    async fn test_duplicate_add_toasts_error() {
        let mut store = test_store().await;
        let (_, toasts, _) =
            run_script(&mut store, "add\nELEC001\nCopy\nElectronics\n9\n").await;

        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].severity, Severity::Error);
        assert_eq!(toasts[0].message, MSG_DUPLICATE_ID);
        assert_eq!(store.products().len(), 5);
    }

    #[tokio::test]
    async fn test_remove_declined_changes_nothing() {
        let mut store = test_store().await;
        let (out, toasts, _) = run_script(&mut store, "remove ELEC001\nn\nquit\n").await;

        assert!(out.contains("Are you sure you want to remove this product? [y/N]"));
        assert!(out.contains("Cancelled."));
        assert!(toasts.is_empty());
        assert_eq!(store.products().len(), 5);
    }

    #[tokio::test]
    async fn test_remove_confirmed() {
        let mut store = test_store().await;
        let (out, toasts, _) =
            run_script(&mut store, "view management\nremove ELEC001\ny\n").await;

        assert_eq!(toasts, [Toast::success("Product removed successfully!")]);
        assert!(out.contains("Products (4)"));
        assert!(store.catalog().catalog().get("ELEC001").is_none());
    }

    #[tokio::test]
    async fn test_search_enters_catalog() {
        let mut store = test_store().await;
        let (out, _, view) = run_script(&mut store, "search cloth\n").await;

        assert_eq!(view.current, View::Catalog);
        assert_eq!(view.search_term, "cloth");
        assert!(out.contains("[CLOTH001] Cotton T-Shirt"));
        assert!(out.contains("[CLOTH002] Denim Jeans"));
        assert!(!out.contains("[ELEC001]"));
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let mut store = test_store().await;
        let (out, _, _) = run_script(&mut store, "checkout\nquit\n").await;
        assert!(out.contains("Unknown command: checkout"));
    }
}
