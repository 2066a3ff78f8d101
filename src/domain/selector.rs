//! Line selectors
//!
//! A selector picks document lines by 1-based position:
//! - `5` selects line 5
//! - `3-4` selects lines 3 and 4
//! - `3-4,6` selects lines 3, 4 and 6
//!
//! Syntax is checked when parsing. Bounds are not: a selector may name lines
//! past the end of a document, and [`Selector::resolve`] simply drops them.

use std::collections::HashSet;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SelectorError {
    #[error("Empty entry in selector '{0}'")]
    EmptyToken(String),

    #[error("Invalid line number '{0}': expected a positive integer")]
    InvalidIndex(String),

    #[error("Invalid range '{0}': start is greater than end")]
    ReversedRange(String),
}

/// An ordered set of line positions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    spans: Vec<RangeInclusive<usize>>,
}

impl Selector {
    /// Returns true if the selector names no lines at all
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Returns true if `index` is named by the selector
    pub fn contains(&self, index: usize) -> bool {
        self.spans.iter().any(|span| span.contains(&index))
    }

    /// Expands the selector against a document of `len` lines
    ///
    /// Returns the distinct in-range positions in first-seen order.
    pub fn resolve(&self, len: usize) -> Vec<usize> {
        let mut seen = HashSet::new();
        let mut indices = Vec::new();

        for span in &self.spans {
            let start = *span.start();
            let end = (*span.end()).min(len);
            for index in start..=end {
                if seen.insert(index) {
                    indices.push(index);
                }
            }
        }

        indices
    }

    /// Like [`resolve`](Self::resolve), sorted highest first
    ///
    /// Removing lines in this order never shifts a position that is still
    /// waiting to be processed.
    pub fn resolve_descending(&self, len: usize) -> Vec<usize> {
        let mut indices = self.resolve(len);
        indices.sort_unstable_by(|a, b| b.cmp(a));
        indices
    }
}

fn parse_index(token: &str) -> Result<usize, SelectorError> {
    match token.trim().parse::<usize>() {
        Ok(0) | Err(_) => Err(SelectorError::InvalidIndex(token.trim().to_string())),
        Ok(n) => Ok(n),
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut spans = Vec::new();
        for token in s.split(',') {
            let token = token.trim();
            if token.is_empty() {
                return Err(SelectorError::EmptyToken(s.to_string()));
            }

            let span = match token.split_once('-') {
                Some((start, end)) => {
                    let start = parse_index(start)?;
                    let end = parse_index(end)?;
                    if start > end {
                        return Err(SelectorError::ReversedRange(token.to_string()));
                    }
                    start..=end
                }
                None => {
                    let index = parse_index(token)?;
                    index..=index
                }
            };
            spans.push(span);
        }

        Ok(Self { spans })
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .spans
            .iter()
            .map(|span| {
                if span.start() == span.end() {
                    span.start().to_string()
                } else {
                    format!("{}-{}", span.start(), span.end())
                }
            })
            .collect();
        write!(f, "{}", parts.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sel(s: &str) -> Selector {
        s.parse().unwrap()
    }

    #[test]
    fn single_index() {
        assert_eq!(sel("5").resolve(10), vec![5]);
    }

    #[test]
    fn ranges_and_singles_in_order() {
        assert_eq!(sel("3-4,6").resolve(10), vec![3, 4, 6]);
        assert_eq!(sel("6,3-4").resolve(10), vec![6, 3, 4]);
    }

    #[test]
    fn duplicates_keep_first_position() {
        assert_eq!(sel("4,2-5,3").resolve(10), vec![4, 2, 3, 5]);
    }

    #[test]
    fn out_of_range_is_dropped() {
        assert_eq!(sel("5,100,2").resolve(6), vec![5, 2]);
        assert_eq!(sel("4-9").resolve(6), vec![4, 5, 6]);
        assert!(sel("7-9").resolve(6).is_empty());
    }

    #[test]
    fn huge_range_is_cheap() {
        assert_eq!(sel("2-4000000000").resolve(3), vec![2, 3]);
    }

    #[test]
    fn descending_order() {
        assert_eq!(sel("5,3").resolve_descending(6), vec![5, 3]);
        assert_eq!(sel("1,3-4,2").resolve_descending(6), vec![4, 3, 2, 1]);
    }

    #[test]
    fn whitespace_is_tolerated() {
        assert_eq!(sel(" 3 - 4 , 6 ").resolve(10), vec![3, 4, 6]);
    }

    #[test]
    fn empty_selector_selects_nothing() {
        let empty = sel("");
        assert!(empty.is_empty());
        assert!(empty.resolve(10).is_empty());
    }

    #[test]
    fn contains_checks_spans() {
        let s = sel("3-4,6");
        assert!(s.contains(3));
        assert!(s.contains(6));
        assert!(!s.contains(5));
    }

    #[test]
    fn malformed_selectors_are_rejected() {
        assert_eq!(
            "abc".parse::<Selector>(),
            Err(SelectorError::InvalidIndex("abc".into()))
        );
        assert_eq!(
            "4-3".parse::<Selector>(),
            Err(SelectorError::ReversedRange("4-3".into()))
        );
        assert_eq!(
            "3,,4".parse::<Selector>(),
            Err(SelectorError::EmptyToken("3,,4".into()))
        );
        assert!("0".parse::<Selector>().is_err());
        assert!("-3".parse::<Selector>().is_err());
        assert!("3-".parse::<Selector>().is_err());
        assert!("1-2-3".parse::<Selector>().is_err());
        assert!("2.5".parse::<Selector>().is_err());
    }

    #[test]
    fn display_round_trips_syntax() {
        assert_eq!(sel("3-4,6").to_string(), "3-4,6");
    }
}
