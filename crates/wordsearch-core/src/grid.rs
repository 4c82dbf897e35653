//! Square letter grid.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use rand::Rng;

use crate::{Alphabet, Cell, Position};

/// Configuration errors reported when building a grid or its fill alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The requested grid size was zero.
    #[display("grid size must be positive")]
    EmptyGrid,
    /// The fill alphabet contained no letters.
    #[display("alphabet must contain at least one letter")]
    EmptyAlphabet,
    /// The fill alphabet contained something other than an uppercase letter.
    #[display("alphabet entry {ch:?} is not an uppercase letter")]
    InvalidLetter {
        /// The offending character.
        ch: char,
    },
}

/// Errors returned when parsing a [`Grid`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The text contained no rows.
    #[display("grid text contains no rows")]
    NoRows,
    /// A row's length differs from the number of rows.
    #[display("row {row} has {len} cells, expected {expected}")]
    RowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of cells found in the row.
        len: usize,
        /// Number of cells expected (the number of rows).
        expected: usize,
    },
    /// A character is neither a letter nor an empty-cell marker.
    #[display("invalid character {ch:?} in row {row}")]
    InvalidChar {
        /// The offending character.
        ch: char,
        /// Zero-based row index.
        row: usize,
    },
}

/// An N×N matrix of letter cells forming one puzzle instance.
///
/// Cells are stored in row-major order and addressed by [`Position`]. The grid
/// is square and fully allocated from construction onward; every position in
/// `[0, size)²` holds a [`Cell`].
///
/// Indexing with a position outside the grid panics. Callers are expected to
/// bounds-check with [`Grid::contains`] or [`Position::offset`] first.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Cell, Grid, GridError, Position};
///
/// let mut grid = Grid::new(3)?;
/// assert_eq!(grid.empty_count(), 9);
///
/// grid[Position::new(0, 1)] = Cell::Letter('A');
/// assert_eq!(grid.cell(Position::new(0, 1)).letter(), Some('A'));
/// assert_eq!(grid.to_string(), ".A.\n...\n...");
/// # Ok::<(), GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Grid size used when none is configured.
    pub const DEFAULT_SIZE: usize = 10;

    /// Creates a `size`×`size` grid with every cell empty.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyGrid`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::EmptyGrid);
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `pos` lies inside this grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row() < self.size && pos.col() < self.size
    }

    /// Returns the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Cell {
        self[pos]
    }

    /// Returns all cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns an iterator over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.size)
    }

    /// Returns the number of cells still holding the empty placeholder.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Returns `true` if no cell holds the empty placeholder.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Assigns a random letter from `alphabet` to every empty cell.
    ///
    /// Cells that already hold a letter are left untouched, so running this
    /// again on a filled grid changes nothing. Returns the number of cells
    /// that were filled.
    pub fn fill_gaps<R>(&mut self, alphabet: &Alphabet, rng: &mut R) -> usize
    where
        R: Rng + ?Sized,
    {
        let mut filled = 0;
        for cell in &mut self.cells {
            if cell.is_empty() {
                *cell = Cell::Letter(alphabet.pick(rng));
                filled += 1;
            }
        }
        filled
    }

    /// Reads `len` letters starting at `start`, stepping `dx` columns and
    /// `dy` rows between letters.
    ///
    /// Returns `None` if the path leaves the grid or crosses an empty cell.
    #[must_use]
    pub fn read(&self, start: Position, dx: isize, dy: isize, len: usize) -> Option<String> {
        if !self.contains(start) {
            return None;
        }
        let mut text = String::with_capacity(len);
        let mut pos = start;
        for i in 0..len {
            if i > 0 {
                pos = pos.offset(dx, dy, self.size)?;
            }
            text.push(self[pos].letter()?);
        }
        Some(text)
    }

    #[track_caller]
    fn index_of(&self, pos: Position) -> usize {
        assert!(
            self.contains(pos),
            "position {pos} is outside a {size}x{size} grid",
            size = self.size
        );
        pos.index(self.size)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            cells: vec![Cell::Empty; Self::DEFAULT_SIZE * Self::DEFAULT_SIZE],
        }
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    #[track_caller]
    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[self.index_of(pos)]
    }
}

impl IndexMut<Position> for Grid {
    #[track_caller]
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        let index = self.index_of(pos);
        &mut self.cells[index]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                Display::fmt(cell, f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    /// Parses a grid from whitespace-separated rows.
    ///
    /// Letters are upcased; `.` and `_` mark empty cells. The number of rows
    /// determines the grid size and every row must have that many cells.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s.split_whitespace().collect::<Vec<_>>();
        let size = rows.len();
        if size == 0 {
            return Err(GridParseError::NoRows);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, text) in rows.into_iter().enumerate() {
            let len = text.chars().count();
            if len != size {
                return Err(GridParseError::RowLength {
                    row,
                    len,
                    expected: size,
                });
            }
            for ch in text.chars() {
                let cell = match ch {
                    '.' | '_' => Cell::Empty,
                    ch if ch.is_ascii_alphabetic() => Cell::Letter(ch.to_ascii_uppercase()),
                    ch => return Err(GridParseError::InvalidChar { ch, row }),
                };
                cells.push(cell);
            }
        }
        Ok(Self { size, cells })
    }
}
