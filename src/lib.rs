//! todo-md - line-addressed editing of markdown checklists
//!
//! A checklist is any markdown file; lines of the form `- [ ] text` or
//! `- [x] text` (optionally indented) are tasks and everything else is kept
//! verbatim. Commands address lines by their number in the file.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{Document, Edit, Line, Selector, Status, Task};
