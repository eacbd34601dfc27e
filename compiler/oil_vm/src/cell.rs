//! Tape cells and the coercion rules between their two kinds.
//!
//! A cell holds either an integer or a string. Strings become integers only
//! through the strict integer grammar: an optional `-` followed by either a
//! lone `0` or a non-zero digit and any further digits. `"-0"`, `"007"` and
//! `" 5"` are all strings.

use std::fmt;

/// One addressable unit of the tape.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Int(i64),
    Str(String),
}

/// Whether `text` is a literal integer under the strict grammar
/// `^(0|-?[1-9][0-9]*)$`.
pub fn is_strict_integer(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    match digits.as_bytes() {
        // A bare zero is only valid without a sign.
        [b'0'] => digits.len() == text.len(),
        [first, rest @ ..] => (b'1'..=b'9').contains(first) && rest.iter().all(u8::is_ascii_digit),
        [] => false,
    }
}

/// Parse `text` under the strict grammar.
///
/// Returns `None` when the grammar does not match or the literal does not
/// fit in an `i64`.
pub fn parse_strict(text: &str) -> Option<i64> {
    if is_strict_integer(text) {
        text.parse().ok()
    } else {
        None
    }
}

impl Cell {
    /// The default content of every unwritten address.
    pub const ZERO: Cell = Cell::Int(0);

    /// Build a cell from raw text: an integer when the text is a strict
    /// integer literal, otherwise the text itself.
    pub fn classify(text: impl Into<String>) -> Cell {
        let text = text.into();
        match parse_strict(&text) {
            Some(value) => Cell::Int(value),
            None => Cell::Str(text),
        }
    }

    /// Re-run classification on string content. Integers are returned as-is.
    #[must_use]
    pub fn normalized(self) -> Cell {
        match self {
            Cell::Str(text) => Cell::classify(text),
            int @ Cell::Int(_) => int,
        }
    }

    /// Coerce to an integer. Never fails: non-literal strings become 0.
    pub fn intify(&self) -> i64 {
        match self {
            Cell::Int(value) => *value,
            Cell::Str(text) => parse_strict(text).unwrap_or(0),
        }
    }

    /// Whether this cell holds an integer.
    #[inline]
    pub fn is_int(&self) -> bool {
        matches!(self, Cell::Int(_))
    }

    /// Render for the debug trace: integers bare, strings quoted.
    pub fn repr(&self) -> String {
        match self {
            Cell::Int(value) => value.to_string(),
            Cell::Str(text) => format!("{text:?}"),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::ZERO
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Str(text.to_owned())
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::Str(text)
    }
}

impl From<char> for Cell {
    fn from(ch: char) -> Self {
        Cell::Str(ch.to_string())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Int(value) => write!(f, "{value}"),
            Cell::Str(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests;
