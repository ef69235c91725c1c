//! # MiniStore Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ministore                                        │
//! │                                                                         │
//! │  main.rs ────► starts a single-threaded runtime                        │
//! │                                                                         │
//! │  lib.rs ─────► logging, config, store, command dispatch                │
//! │                                                                         │
//! │  commands/ ──► add_product, remove_product, switch_view, ...           │
//! │                                                                         │
//! │  ui/ ────────► text rendering, toasts, prompts, shell                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    ministore_cli::run().await
}
