//! Command implementations
//!
//! Each command loads the document fresh, runs once, and writes back only
//! when an edit actually changed something.

use anyhow::{Context, Result};

use super::output::Output;
use crate::domain::{Edit, Status};
use crate::storage::TodoFile;

pub fn list(file: &TodoFile, output: &Output) -> Result<()> {
    let document = file.load()?;
    output.listing(&document);
    Ok(())
}

pub fn print(file: &TodoFile, output: &Output) -> Result<()> {
    let document = file.load()?;
    output.raw(&document);
    Ok(())
}

pub fn status(file: &TodoFile, output: &Output) -> Result<()> {
    let document = file.load()?;
    let status = Status::of(&document);
    tracing::debug!(total = status.total, done = status.done, "counted tasks");
    output.status(status, file.path());
    Ok(())
}

pub fn edit(file: &TodoFile, output: &Output, edit: &Edit) -> Result<()> {
    let mut document = file.load()?;

    if let Some(selector) = edit.selector() {
        if selector.is_empty() {
            tracing::debug!(command = edit.name(), "empty selector, nothing to do");
        } else {
            tracing::debug!(command = edit.name(), %selector, "selected lines");
        }
    }

    let changed = edit
        .apply(&mut document)
        .with_context(|| format!("Cannot {}", edit.name()))?;
    tracing::debug!(command = edit.name(), changed, "applied edit");

    if changed > 0 {
        file.save(&document)?;
    }

    output.edited(&document, edit.name(), changed);
    Ok(())
}
