//! Line model for checklist documents
//!
//! Every line of a document is either a task line (`- [ ] text` or
//! `- [x] text`, optionally indented) or a plain line that is reproduced
//! verbatim. Classification is purely textual; nothing else of markdown is
//! understood.

use std::fmt;

use serde::Serialize;

const UNCHECKED: &str = "- [ ] ";
const CHECKED: &str = "- [x] ";

/// A checklist task line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Leading whitespace exactly as read (or generated)
    leading: String,
    /// Whether the checkbox is ticked
    pub checked: bool,
    /// Content after the checkbox marker
    pub text: String,
}

impl Task {
    /// Creates a task with `indent` spaces of indentation
    pub fn new(text: impl Into<String>, indent: usize, checked: bool) -> Self {
        Self {
            leading: " ".repeat(indent),
            checked,
            text: text.into(),
        }
    }

    /// Number of leading space characters
    ///
    /// Tabs in the leading whitespace are kept on output but do not count.
    pub fn indent(&self) -> usize {
        self.leading.chars().filter(|c| *c == ' ').count()
    }

    /// Replaces the leading whitespace with `spaces` space characters
    pub fn set_indent(&mut self, spaces: usize) {
        self.leading = " ".repeat(spaces);
    }

    fn marker(&self) -> &'static str {
        if self.checked {
            CHECKED
        } else {
            UNCHECKED
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.leading, self.marker(), self.text)
    }
}

/// One line of a checklist document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Anything that is not a task: headings, blank lines, prose
    Plain(String),
    /// A checklist item
    Task(Task),
}

/// Kind of a line, as reported in structured output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Plain,
    Task,
}

impl Line {
    /// Classifies a raw line
    pub fn parse(raw: &str) -> Self {
        let rest = raw.trim_start_matches([' ', '\t']);
        let leading = &raw[..raw.len() - rest.len()];

        let (checked, text) = if let Some(text) = rest.strip_prefix(UNCHECKED) {
            (false, text)
        } else if let Some(text) = rest.strip_prefix(CHECKED) {
            (true, text)
        } else {
            return Line::Plain(raw.to_string());
        };

        Line::Task(Task {
            leading: leading.to_string(),
            checked,
            text: text.to_string(),
        })
    }

    pub fn kind(&self) -> LineKind {
        match self {
            Line::Plain(_) => LineKind::Plain,
            Line::Task(_) => LineKind::Task,
        }
    }

    pub fn as_task(&self) -> Option<&Task> {
        match self {
            Line::Task(task) => Some(task),
            Line::Plain(_) => None,
        }
    }

    pub fn as_task_mut(&mut self) -> Option<&mut Task> {
        match self {
            Line::Task(task) => Some(task),
            Line::Plain(_) => None,
        }
    }

    /// Indentation in spaces; plain lines count as unindented
    pub fn indent(&self) -> usize {
        self.as_task().map_or(0, Task::indent)
    }
}

impl From<Task> for Line {
    fn from(task: Task) -> Self {
        Line::Task(task)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Plain(raw) => f.write_str(raw),
            Line::Task(task) => fmt::Display::fmt(task, f),
        }
    }
}
