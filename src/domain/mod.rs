//! Domain model for checklist documents
//!
//! Contains the editing engine without any I/O concerns.

mod line;
mod selector;
mod indent;
mod document;
mod edit;
pub mod render;

pub use line::{Line, LineKind, Task};
pub use selector::{Selector, SelectorError};
pub use indent::{IndentLevel, IndentRequest, Shift, INDENT_WIDTH, MAX_INDENT};
pub use document::{Document, EditError, NewTask};
pub use edit::Edit;
pub use render::Status;
