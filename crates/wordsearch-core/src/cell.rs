//! Grid cell representation.

use std::fmt::{self, Display};

/// A single grid slot.
///
/// A cell either still holds the empty placeholder or a resolved uppercase
/// letter. Cells live inside a [`Grid`] and are addressed by [`Position`]; they
/// are never meant to be copied out and mutated separately.
///
/// [`Grid`]: crate::Grid
/// [`Position`]: crate::Position
///
/// # Examples
///
/// ```
/// use wordsearch_core::Cell;
///
/// let cell = Cell::Empty;
/// assert!(cell.accepts('A'));
///
/// let cell = Cell::Letter('A');
/// assert!(cell.accepts('A'));
/// assert!(!cell.accepts('B'));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// The placeholder for a cell that holds no letter yet.
    #[default]
    Empty,
    /// A cell holding a resolved letter.
    Letter(char),
}

impl Cell {
    /// Returns `true` if the cell still holds the empty placeholder.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the letter in this cell, if any.
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Empty => None,
            Self::Letter(letter) => Some(letter),
        }
    }

    /// Returns `true` if `letter` can be written here without overwriting a
    /// different letter.
    #[must_use]
    pub fn accepts(self, letter: char) -> bool {
        match self {
            Self::Empty => true,
            Self::Letter(existing) => existing == letter,
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("."),
            Self::Letter(letter) => write!(f, "{letter}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cell() {
        let cell = Cell::default();
        assert!(cell.is_empty());
        assert_eq!(cell.letter(), None);
        assert!(cell.accepts('Z'));
        assert_eq!(cell.to_string(), ".");
    }

    #[test]
    fn test_letter_cell() {
        let cell = Cell::Letter('Q');
        assert!(!cell.is_empty());
        assert_eq!(cell.letter(), Some('Q'));
        assert!(cell.accepts('Q'));
        assert!(!cell.accepts('R'));
        assert_eq!(cell.to_string(), "Q");
    }
}
