//! # Command-Line Interface
//!
//! User-facing commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Effect |
//! |---------|--------|
//! | `list` (default) | Numbered view of every line |
//! | `print` | File contents as they are |
//! | `status` | Total, done and pending counts |
//! | `add` | Insert or append a task |
//! | `indent`, `unindent` | Re-indent selected task lines |
//! | `do`, `undo` | Check or uncheck selected task lines |
//! | `rm` | Remove selected lines |
//! | `mv` | Move one line |
//!
//! Any other first word is treated as task text for `add`:
//! ```bash
//! todo "Buy milk"
//! ```
//!
//! Selectors name lines by number: `3`, `3-4`, `3-4,6`. Numbers past the end
//! of the file are ignored, so `todo do 100 -q` is a silent no-op.
//!
//! ## Output Formats
//!
//! All commands support `--format`:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod commands;
mod output;

pub use app::{run, AddArgs, Cli, Commands, GlobalArgs};
pub use output::{Output, OutputFormat};
