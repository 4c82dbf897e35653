//! Grid position representation.

use std::fmt::{self, Display};

/// A cell position in a square grid, addressed by row and column.
///
/// Positions carry no grid size of their own; whether a position is valid
/// depends on the grid it is used with.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Position;
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.col(), 3);
///
/// // Step one column left and one row down inside a 5x5 grid
/// assert_eq!(pos.offset(-1, 1, 5), Some(Position::new(3, 2)));
///
/// // Stepping off the grid yields `None`
/// assert_eq!(pos.offset(0, 3, 5), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from a row and a column index.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns the position `dx` columns and `dy` rows away from this one.
    ///
    /// Returns `None` if the resulting position lies outside `[0, size)` on
    /// either axis.
    #[must_use]
    pub fn offset(self, dx: isize, dy: isize, size: usize) -> Option<Self> {
        let col = self.col.checked_add_signed(dx)?;
        let row = self.row.checked_add_signed(dy)?;
        (col < size && row < size).then_some(Self { row, col })
    }

    /// Returns the row-major index of this position in a grid of the given size.
    #[must_use]
    #[inline]
    pub(crate) const fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_stays_inside() {
        let pos = Position::new(0, 0);
        assert_eq!(pos.offset(1, 0, 3), Some(Position::new(0, 1)));
        assert_eq!(pos.offset(0, 1, 3), Some(Position::new(1, 0)));
        assert_eq!(pos.offset(2, 2, 3), Some(Position::new(2, 2)));
        assert_eq!(pos.offset(0, 0, 3), Some(pos));
    }

    #[test]
    fn test_offset_rejects_out_of_range() {
        let pos = Position::new(0, 0);
        assert_eq!(pos.offset(-1, 0, 3), None);
        assert_eq!(pos.offset(0, -1, 3), None);
        assert_eq!(pos.offset(3, 0, 3), None);
        assert_eq!(pos.offset(0, 3, 3), None);

        let corner = Position::new(2, 2);
        assert_eq!(corner.offset(-2, -2, 3), Some(Position::new(0, 0)));
        assert_eq!(corner.offset(1, -1, 3), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(4, 7).to_string(), "(4, 7)");
    }
}
