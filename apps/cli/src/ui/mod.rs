//! # Terminal UI
//!
//! ```text
//! ui/
//! ├── render.rs   ◄─── projections to text (table, cards, empty states)
//! ├── notify.rs   ◄─── success/error toasts
//! ├── prompt.rs   ◄─── line input and yes/no confirmation
//! └── shell.rs    ◄─── interactive loop
//! ```

pub mod notify;
pub mod prompt;
pub mod render;
pub mod shell;
