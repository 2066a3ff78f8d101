//! Edit commands
//!
//! An [`Edit`] is one mutating command with its arguments already parsed.
//! Applying it either fails up front with an [`EditError`] (leaving the
//! document untouched) or runs to completion.

use super::document::{Document, EditError, NewTask};
use super::indent::Shift;
use super::selector::Selector;

/// A single mutating command
#[derive(Debug, Clone)]
pub enum Edit {
    Add(NewTask),
    Indent { selector: Selector, steps: usize },
    Unindent { selector: Selector, steps: usize },
    Do(Selector),
    Undo(Selector),
    Remove(Selector),
    Move { from: usize, to: usize },
}

impl Edit {
    /// Command name as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Edit::Add(_) => "add",
            Edit::Indent { .. } => "indent",
            Edit::Unindent { .. } => "unindent",
            Edit::Do(_) => "do",
            Edit::Undo(_) => "undo",
            Edit::Remove(_) => "rm",
            Edit::Move { .. } => "mv",
        }
    }

    /// Lines the edit targets, for commands that take a selector
    pub fn selector(&self) -> Option<&Selector> {
        match self {
            Edit::Indent { selector, .. }
            | Edit::Unindent { selector, .. }
            | Edit::Do(selector)
            | Edit::Undo(selector)
            | Edit::Remove(selector) => Some(selector),
            Edit::Add(_) | Edit::Move { .. } => None,
        }
    }

    /// Applies the edit and returns how many lines changed
    pub fn apply(&self, document: &mut Document) -> Result<usize, EditError> {
        match self {
            Edit::Add(task) => document.add(task.clone()).map(|_| 1),
            Edit::Indent { selector, steps } => document.shift(selector, *steps, Shift::In),
            Edit::Unindent { selector, steps } => document.shift(selector, *steps, Shift::Out),
            Edit::Do(selector) => Ok(document.mark(selector, true)),
            Edit::Undo(selector) => Ok(document.mark(selector, false)),
            Edit::Remove(selector) => Ok(document.remove(selector)),
            Edit::Move { from, to } => document.move_line(*from, *to).map(usize::from),
        }
    }
}
