//! # Storage Layer
//!
//! Reading and writing checklist files, and user configuration.
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Checklist | Markdown | `todo.md`, `--file` or `$TODO_FILE` |
//! | Config | TOML | `<config dir>/todo-md/config.toml` or `$TODO_CONFIG` |
//!
//! Writes are atomic (temp file + rename) and use file locking (`fs2`).

mod config;
mod todo_file;

pub use config::{Config, ConfigError, OutputFormat, DEFAULT_FILE};
pub use todo_file::TodoFile;
