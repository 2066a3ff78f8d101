//! Output formatting for CLI commands

use std::path::Path;

use serde::Serialize;

use crate::domain::{render, Document, Status};
pub use crate::storage::OutputFormat;

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    /// Prints the numbered listing
    pub fn listing(&self, document: &Document) {
        match self.format {
            OutputFormat::Text => print!("{}", render::numbered(document)),
            OutputFormat::Json => self.data(&serde_json::json!({
                "lines": render::line_views(document),
            })),
        }
    }

    /// Prints the listing after an edit, unless quiet
    pub fn edited(&self, document: &Document, command: &str, changed: usize) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Text => print!("{}", render::numbered(document)),
            OutputFormat::Json => self.data(&serde_json::json!({
                "command": command,
                "changed": changed,
                "lines": render::line_views(document),
            })),
        }
    }

    /// Prints the raw document text
    pub fn raw(&self, document: &Document) {
        match self.format {
            OutputFormat::Text => print!("{}", render::raw(document)),
            OutputFormat::Json => self.data(&serde_json::json!({
                "text": render::raw(document),
            })),
        }
    }

    /// Prints the task counts
    pub fn status(&self, status: Status, file: &Path) {
        match self.format {
            OutputFormat::Text => println!("{} in {}", status, file.display()),
            OutputFormat::Json => self.data(&serde_json::json!({
                "total": status.total,
                "done": status.done,
                "pending": status.pending,
                "file": file.display().to_string(),
            })),
        }
    }

    /// Prints structured data
    pub fn data<T: Serialize>(&self, data: &T) {
        if let Ok(json) = serde_json::to_string(data) {
            println!("{}", json);
        }
    }
}
