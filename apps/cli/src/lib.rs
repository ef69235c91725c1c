//! # MiniStore CLI Library
//!
//! Core library for the `ministore` binary: argument parsing, startup, and
//! dispatch to commands.
//!
//! ## Module Organization
//! ```text
//! ministore_cli/
//! ├── lib.rs          ◄─── You are here (startup & dispatch)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Database + catalog store
//! │   ├── view.rs     ◄─── Current view and catalog filters
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── add, remove, list, catalog, categories
//! │   └── view.rs     ◄─── switch_view, search, category
//! ├── ui/
//! │   ├── render.rs   ◄─── Text output
//! │   ├── notify.rs   ◄─── Toasts
//! │   ├── prompt.rs   ◄─── Line input, confirmation
//! │   └── shell.rs    ◄─── Interactive loop
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;
pub mod ui;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use ministore_core::{CategoryFilter, ProductInput};
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::product::{
    add_product, catalog, categories, confirm_and_remove, list_products, RemoveOutcome, MSG_ADDED,
    MSG_REMOVED,
};
use error::ApiError;
use state::{ConfigState, StoreState};
use ui::notify::{Notifier, TerminalNotifier, Toast};
use ui::prompt::Prompt;
use ui::render::{render_catalog, render_categories, render_management};
use ui::shell::Shell;

/// Log filter used when neither `RUST_LOG` nor `--log-level` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn,ministore=info,sqlx=warn";

#[derive(Debug, Parser)]
#[command(name = "ministore", version, about = "MiniStore inventory manager")]
pub struct Cli {
    /// Config file (default: ministore.toml in the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Database file, overriding config and MINISTORE_DB_PATH
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `ministore_db=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show every product (management list)
    List,

    /// Show the catalog, optionally filtered
    Catalog {
        /// Case-insensitive match on product id
        #[arg(long, default_value = "")]
        search: String,

        /// Exact category name
        #[arg(long)]
        category: Option<String>,
    },

    /// List categories in first-appearance order
    Categories,

    /// Add a product
    Add {
        #[arg(long, default_value = "")]
        id: String,

        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        category: String,

        #[arg(long, default_value = "")]
        price: String,
    },

    /// Remove a product by id
    Remove {
        id: String,

        /// Skip the confirmation question
        #[arg(long, short)]
        yes: bool,
    },

    /// Interactive shell with home, management and catalog views
    Shell,
}

/// Parses arguments and runs one command.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber on stderr                                      │
/// │     • --log-level, else RUST_LOG, else DEFAULT_LOG_FILTER               │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → ministore.toml → MINISTORE_* → --db                    │
/// │                                                                         │
/// │  3. Open Store ───────────────────────────────────────────────────────► │
/// │     • SQLite with WAL mode, run pending migrations                      │
/// │     • load catalog, seed samples if it is empty                         │
/// │                                                                         │
/// │  4. Run Command ──────────────────────────────────────────────────────► │
/// │     • failures are shown as toasts and give a non-zero exit             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    match execute(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("ministore: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut config = ConfigState::load(cli.config)?;
    if let Some(db) = cli.db {
        config.database_path = Some(db);
    }

    let db_path = config.resolve_database_path()?;
    info!(?db_path, "Database path determined");

    let mut store = StoreState::open(&config, db_path).await?;
    let mut notifier = TerminalNotifier::stderr();

    if config.seed_on_empty {
        if let Err(e) = store.bootstrap().await {
            notifier.notify(Toast::from(&ApiError::from(e)));
        }
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Command::List => {
            render_management(&mut out, &list_products(&store, &config))?;
            Ok(())
        }
        Command::Catalog { search, category } => {
            let filter = CategoryFilter::from_selection(category.as_deref().unwrap_or(""));
            let screen = commands::view::CatalogScreen {
                projection: catalog(&store, &config, &search, &filter),
                categories: categories(&store),
                category_filter: filter,
                search_term: search,
            };
            render_catalog(&mut out, &screen)?;
            Ok(())
        }
        Command::Categories => {
            render_categories(&mut out, &categories(&store), &CategoryFilter::All)?;
            Ok(())
        }
        Command::Add {
            id,
            name,
            category,
            price,
        } => {
            let input = ProductInput::new(id, name, category, price);
            match add_product(&mut store, &config, input).await {
                Ok(row) => {
                    notifier.notify(Toast::success(MSG_ADDED));
                    writeln!(out, "{}  {}  {}  {}", row.id, row.name, row.category, row.price_display)?;
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }
        Command::Remove { id, yes } => {
            let mut prompt = Prompt::stdin();
            match confirm_and_remove(&mut store, &config, &mut prompt, &mut out, &id, yes).await {
                Ok(RemoveOutcome::Removed(_)) => {
                    notifier.notify(Toast::success(MSG_REMOVED));
                    Ok(())
                }
                Ok(RemoveOutcome::Cancelled) => Ok(()),
                Err(e) => Err(e),
            }
        }
        Command::Shell => {
            let mut shell = Shell::new(&mut store, &config, Prompt::stdin(), &mut out, &mut notifier);
            shell.run().await?;
            Ok(())
        }
    };

    store.close().await;

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            notifier.notify(Toast::from(&e));
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `--log-level debug` - Show debug messages
/// - `RUST_LOG=ministore_db=trace` - Show trace for the storage crate only
/// - Default: [`DEFAULT_LOG_FILTER`]
///
/// Logs go to stderr so command output on stdout stays clean.
fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
