//! # Cycle Notation
//!
//! Reading of the disjoint-cycle text format for [`Permutation`]s. Writing is
//! the [`std::fmt::Display`] impl on [`Permutation`]; this module owns the
//! inverse direction and the [`std::str::FromStr`] impl built on it.
//!
//! A permutation is written as a sequence of parenthesised cycles over
//! 1-based points, covering every point of the ground set exactly once, with
//! fixed points as singleton cycles:
//!
//! ```text
//! (1 2 3 4 5)        a 5-cycle
//! (1)(2 5)(3 4)      a reflection fixing 1
//! (1)(2)(3)          the identity on {1..3}
//! ```
//!
//! Points within a cycle are separated by whitespace or commas. Input may
//! also use the classic compact form where single-digit points are run
//! together, `(12345)` or `(1)(25)(34)`. The compact reading is attempted
//! only when the whole string contains no separator at all, and only kept
//! when it yields a valid permutation, so strings holding multi-digit points
//! such as `(1 10)(2)...(9)` are never misread digit by digit. Output never
//! uses the compact form.

use std::str::FromStr;

use thiserror::Error;

use crate::permutation::{Permutation, PermutationError};

/// Errors arising from parsing cycle-notation text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// The input contained no cycles at all.
    #[error("empty cycle notation")]
    Empty,
    /// A parenthesis was left unclosed, or closed without being opened.
    #[error("unbalanced parentheses in cycle notation")]
    UnbalancedParentheses,
    /// A character that is not a digit, a separator, or a parenthesis.
    #[error("unexpected character {0:?} in cycle notation")]
    UnexpectedCharacter(char),
    /// A `()` group naming no points.
    #[error("cycle with no points")]
    EmptyCycle,
    /// The point `0`, which is outside every ground set.
    #[error("point 0 is outside the ground set")]
    ZeroPoint,
    /// A point too large to represent.
    #[error("point {0} does not fit in a machine word")]
    PointTooLarge(String),
    /// Cycles that are well formed as text but do not describe a permutation.
    #[error(transparent)]
    Permutation(#[from] PermutationError),
}

/// Parses cycle-notation text into a [`Permutation`].
///
/// The ground set is inferred from the text: valid notation names every
/// point of `{1..n}` exactly once, so `n` is the number of points written.
///
/// # Examples
///
/// ```
/// use twite::notation;
///
/// let p = notation::parse("(1 2 3 4 5)").unwrap();
/// assert_eq!(p.order(), 5);
///
/// // The classic compact form reads the same way.
/// assert_eq!(notation::parse("(12345)").unwrap(), p);
///
/// assert!(notation::parse("(1 2)(2 3)").is_err());
/// ```
pub fn parse(text: &str) -> Result<Permutation, NotationError> {
    let groups = split_groups(text)?;
    if groups.is_empty() {
        return Err(NotationError::Empty);
    }
    let has_separators = groups
        .iter()
        .any(|group| group.chars().any(is_separator));
    if !has_separators {
        // Compact candidate: read every digit as a point, and keep that
        // reading only when it forms a permutation.
        if let Ok(cycles) = read_compact(&groups) {
            if let Ok(perm) = Permutation::from_cycles(&cycles) {
                return Ok(perm);
            }
        }
    }
    let cycles = read_separated(&groups)?;
    Ok(Permutation::from_cycles(&cycles)?)
}

impl FromStr for Permutation {
    type Err = NotationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse(text)
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

/// Splits the text into the contents of its parenthesised groups, validating
/// parenthesis balance and the character set as it goes.
fn split_groups(text: &str) -> Result<Vec<&str>, NotationError> {
    let mut groups = Vec::new();
    let mut open = None;
    for (i, c) in text.char_indices() {
        match (open, c) {
            (None, '(') => open = Some(i + 1),
            (None, ')') => return Err(NotationError::UnbalancedParentheses),
            (None, c) if c.is_whitespace() => {}
            (None, c) => return Err(NotationError::UnexpectedCharacter(c)),
            (Some(start), ')') => {
                groups.push(&text[start..i]);
                open = None;
            }
            (Some(_), '(') => return Err(NotationError::UnbalancedParentheses),
            (Some(_), c) if c.is_ascii_digit() || is_separator(c) => {}
            (Some(_), c) => return Err(NotationError::UnexpectedCharacter(c)),
        }
    }
    if open.is_some() {
        return Err(NotationError::UnbalancedParentheses);
    }
    Ok(groups)
}

/// Reads each group as separator-delimited decimal points.
fn read_separated(groups: &[&str]) -> Result<Vec<Vec<usize>>, NotationError> {
    let mut cycles = Vec::with_capacity(groups.len());
    for group in groups {
        let mut cycle = Vec::new();
        for token in group.split(is_separator) {
            if token.is_empty() {
                continue;
            }
            let point: usize = token
                .parse()
                .map_err(|_| NotationError::PointTooLarge(token.to_owned()))?;
            if point == 0 {
                return Err(NotationError::ZeroPoint);
            }
            cycle.push(point);
        }
        if cycle.is_empty() {
            return Err(NotationError::EmptyCycle);
        }
        cycles.push(cycle);
    }
    Ok(cycles)
}

/// Reads each group as a run of single-digit points.
fn read_compact(groups: &[&str]) -> Result<Vec<Vec<usize>>, NotationError> {
    let mut cycles = Vec::with_capacity(groups.len());
    for group in groups {
        let mut cycle = Vec::new();
        for c in group.chars() {
            // split_groups admits only digits here once separators are ruled out
            let point = c.to_digit(10).map(|d| d as usize).unwrap_or(0);
            if point == 0 {
                return Err(NotationError::ZeroPoint);
            }
            cycle.push(point);
        }
        if cycle.is_empty() {
            return Err(NotationError::EmptyCycle);
        }
        cycles.push(cycle);
    }
    Ok(cycles)
}
