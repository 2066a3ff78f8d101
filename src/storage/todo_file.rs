//! Checklist file on disk
//!
//! Reads take a shared lock. Writes go to a sibling temp file held under an
//! exclusive lock and are renamed over the target, so readers never see a
//! partially written document.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use crate::domain::Document;

/// A checklist document file
pub struct TodoFile {
    path: PathBuf,
}

impl TodoFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the raw file contents; a missing file reads as empty
    pub fn read_text(&self) -> Result<String> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "document file missing, starting empty");
            return Ok(String::new());
        }

        let mut file = File::open(&self.path)
            .with_context(|| format!("Failed to open todo file: {}", self.path.display()))?;

        file.lock_shared()
            .context("Failed to acquire read lock on todo file")?;

        let mut text = String::new();
        file.read_to_string(&mut text)
            .with_context(|| format!("Failed to read todo file: {}", self.path.display()))?;

        Ok(text)
    }

    /// Loads the document
    pub fn load(&self) -> Result<Document> {
        let text = self.read_text()?;
        let document = Document::parse(&text);
        tracing::debug!(path = %self.path.display(), lines = document.len(), "loaded document");
        Ok(document)
    }

    /// Writes the document back (full rewrite)
    pub fn save(&self, document: &Document) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let temp_path = self.temp_path();

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            file.lock_exclusive()
                .context("Failed to acquire write lock on todo file")?;

            let mut writer = BufWriter::new(&file);
            write!(writer, "{}", document).context("Failed to write document")?;
            writer.flush().context("Failed to flush todo file")?;
        }

        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        tracing::debug!(path = %self.path.display(), lines = document.len(), "saved document");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
