//! Indentation policy
//!
//! Indentation is an attribute of each line, not a tree. Whenever the engine
//! has to invent an indent it looks only at the line that will sit directly
//! above the new one.

/// Spaces per indentation level
pub const INDENT_WIDTH: usize = 2;

/// Deepest indentation, in spaces, the engine will generate
pub const MAX_INDENT: usize = 1024;

fn within_limit(spaces: usize) -> Option<usize> {
    (spaces <= MAX_INDENT).then_some(spaces)
}

/// Indentation counted in levels of [`INDENT_WIDTH`] spaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct IndentLevel(pub usize);

impl IndentLevel {
    /// Width in spaces, or `None` past [`MAX_INDENT`]
    pub fn spaces(self) -> Option<usize> {
        self.0.checked_mul(INDENT_WIDTH).and_then(within_limit)
    }
}

/// How a newly added line picks its indentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentRequest {
    /// Match the line above
    #[default]
    Inherit,
    /// One level deeper than the line above
    Deeper,
    /// An absolute level
    Level(IndentLevel),
}

impl IndentRequest {
    /// Indent in spaces for a new line whose predecessor has `reference`
    /// spaces of indentation
    ///
    /// Returns `None` when a generated indent would exceed [`MAX_INDENT`].
    /// Inheriting never fails: the reference line already exists.
    pub fn resolve(self, reference: usize) -> Option<usize> {
        match self {
            IndentRequest::Level(level) => level.spaces(),
            IndentRequest::Deeper => reference.checked_add(INDENT_WIDTH).and_then(within_limit),
            IndentRequest::Inherit => Some(reference),
        }
    }
}

/// Direction of a re-indent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    In,
    Out,
}

impl Shift {
    /// Applies `steps` levels to `spaces`
    ///
    /// Unindenting stops at zero. Indenting past [`MAX_INDENT`] yields `None`.
    pub fn apply(self, spaces: usize, steps: usize) -> Option<usize> {
        match self {
            Shift::In => steps
                .checked_mul(INDENT_WIDTH)
                .and_then(|delta| spaces.checked_add(delta))
                .and_then(within_limit),
            Shift::Out => Some(spaces.saturating_sub(steps.saturating_mul(INDENT_WIDTH))),
        }
    }
}
