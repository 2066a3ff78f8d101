//! Read-only views of a document

use std::fmt;

use serde::Serialize;

use super::document::Document;
use super::line::{Line, LineKind};

/// Minimum width of the line number column
pub const NUMBER_WIDTH: usize = 4;

/// Numbered listing: every line prefixed with its position
///
/// ```text
///    3 | - [ ] Line 3
///    4 |   - [x] Line 4
/// ```
pub fn numbered(document: &Document) -> String {
    let width = document.len().to_string().len().max(NUMBER_WIDTH);
    let mut out = String::new();
    for (index, line) in document.numbered() {
        out.push_str(&format!("{:>width$} | {}\n", index, line, width = width));
    }
    out
}

/// Raw reconstruction of the document text
pub fn raw(document: &Document) -> String {
    document.to_string()
}

/// Task counts for a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Status {
    pub total: usize,
    pub done: usize,
    pub pending: usize,
}

impl Status {
    pub fn of(document: &Document) -> Self {
        let (total, done) = document
            .tasks()
            .fold((0, 0), |(total, done), task| {
                (total + 1, done + usize::from(task.checked))
            });
        Self {
            total,
            done,
            pending: total - done,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} tasks, {} done, {} pending",
            self.total, self.done, self.pending
        )
    }
}

/// One line in structured output
#[derive(Debug, Clone, Serialize)]
pub struct LineView {
    pub index: usize,
    pub kind: LineKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub raw: String,
}

impl LineView {
    pub fn new(index: usize, line: &Line) -> Self {
        let task = line.as_task();
        Self {
            index,
            kind: line.kind(),
            indent: task.map(|t| t.indent()),
            checked: task.map(|t| t.checked),
            text: task.map(|t| t.text.clone()),
            raw: line.to_string(),
        }
    }
}

/// Structured form of the numbered listing
pub fn line_views(document: &Document) -> Vec<LineView> {
    document
        .numbered()
        .map(|(index, line)| LineView::new(index, line))
        .collect()
}
