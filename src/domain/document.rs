//! Checklist document
//!
//! A [`Document`] is the full file as an ordered list of [`Line`]s, addressed
//! by 1-based position. Lines the current edit does not touch keep their
//! exact original text.

use std::fmt;

use thiserror::Error;

use super::indent::{IndentRequest, Shift, MAX_INDENT};
use super::line::{Line, Task};
use super::selector::Selector;

#[derive(Debug, Error, PartialEq)]
pub enum EditError {
    #[error("Line positions start at 1, got 0")]
    ZeroPosition,

    #[error("Indent steps must be a positive integer, got 0")]
    ZeroSteps,

    #[error("Indentation would exceed {max} spaces")]
    IndentTooDeep { max: usize },
}

/// A new task to insert
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub text: String,
    /// Target position; `None` appends
    pub position: Option<usize>,
    pub checked: bool,
    pub indent: IndentRequest,
}

impl NewTask {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// An in-memory checklist document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,
}

impl Document {
    /// Builds a document from file contents
    ///
    /// A single trailing newline ends the last line rather than starting an
    /// empty one.
    pub fn parse(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }

        let body = text.strip_suffix('\n').unwrap_or(text);
        Self {
            lines: body.split('\n').map(Line::parse).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the line at a 1-based position
    pub fn get(&self, index: usize) -> Option<&Line> {
        index.checked_sub(1).and_then(|i| self.lines.get(i))
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut Line> {
        index.checked_sub(1).and_then(|i| self.lines.get_mut(i))
    }

    /// Iterates lines with their 1-based positions
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &Line)> {
        self.lines.iter().enumerate().map(|(i, line)| (i + 1, line))
    }

    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.lines.iter().filter_map(Line::as_task)
    }

    /// Inserts a task and returns the position it ended up at
    ///
    /// A position past the end appends. The new line's indentation comes
    /// from the line that ends up directly above it.
    pub fn add(&mut self, task: NewTask) -> Result<usize, EditError> {
        let slot = match task.position {
            Some(0) => return Err(EditError::ZeroPosition),
            Some(position) => position.min(self.len() + 1),
            None => self.len() + 1,
        };

        let reference = self.get(slot - 1).map_or(0, Line::indent);
        let indent = task
            .indent
            .resolve(reference)
            .ok_or(EditError::IndentTooDeep { max: MAX_INDENT })?;

        self.lines
            .insert(slot - 1, Task::new(task.text, indent, task.checked).into());
        Ok(slot)
    }

    /// Re-indents the selected task lines by `steps` levels
    ///
    /// Returns the number of lines whose indentation changed.
    /// Fails without touching any line if one of them would end up deeper
    /// than the indentation limit.
    pub fn shift(
        &mut self,
        selector: &Selector,
        steps: usize,
        shift: Shift,
    ) -> Result<usize, EditError> {
        if steps == 0 {
            return Err(EditError::ZeroSteps);
        }

        let mut updates = Vec::new();
        for index in selector.resolve(self.len()) {
            if let Some(task) = self.get(index).and_then(Line::as_task) {
                let spaces = shift
                    .apply(task.indent(), steps)
                    .ok_or(EditError::IndentTooDeep { max: MAX_INDENT })?;
                updates.push((index, spaces));
            }
        }

        let mut changed = 0;
        for (index, spaces) in updates {
            if let Some(task) = self.get_mut(index).and_then(Line::as_task_mut) {
                let before = task.to_string();
                task.set_indent(spaces);
                if task.to_string() != before {
                    changed += 1;
                }
            }
        }
        Ok(changed)
    }

    /// Sets the checkbox of the selected task lines
    ///
    /// Returns the number of lines that actually flipped.
    pub fn mark(&mut self, selector: &Selector, checked: bool) -> usize {
        let mut changed = 0;
        for index in selector.resolve(self.len()) {
            if let Some(task) = self.get_mut(index).and_then(Line::as_task_mut) {
                if task.checked != checked {
                    task.checked = checked;
                    changed += 1;
                }
            }
        }
        changed
    }

    /// Removes the selected lines of any kind
    ///
    /// Returns the number of lines removed.
    pub fn remove(&mut self, selector: &Selector) -> usize {
        let indices = selector.resolve_descending(self.len());
        for index in &indices {
            self.lines.remove(index - 1);
        }
        indices.len()
    }

    /// Moves the single line at `from` so that it ends up at `to`
    ///
    /// Lines in between close the gap. A `from` past the end is a no-op and a
    /// `to` past the end moves the line to the bottom. Returns whether the
    /// document changed.
    pub fn move_line(&mut self, from: usize, to: usize) -> Result<bool, EditError> {
        if from == 0 || to == 0 {
            return Err(EditError::ZeroPosition);
        }
        if from > self.len() {
            return Ok(false);
        }

        let line = self.lines.remove(from - 1);
        let slot = (to - 1).min(self.lines.len());
        self.lines.insert(slot, line);
        Ok(slot != from - 1)
    }
}

impl fmt::Display for Document {
    /// Raw reconstruction: newline-joined with one trailing newline
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
