//! Word placement.
//!
//! [`PlacementEngine`] writes words into a [`Grid`] one at a time. For every
//! word it tries the difficulty's directions in shuffled order, and for every
//! direction it scans start positions in shuffled row and column order. The
//! first start position where every letter lands on an empty cell or on the
//! same letter wins; there is no search for a better position.
//!
//! Words that fit nowhere are skipped. They are not errors: the caller learns
//! about them only by their absence from the returned list.

use rand::{Rng, seq::SliceRandom as _};
use wordsearch_core::{Cell, Grid, Position};

use crate::{Difficulty, Direction, PlacedWord, Word};

/// Places words into a grid using a greedy, randomized first-fit search.
///
/// The engine borrows the grid and the random number generator for its
/// lifetime, so the same grid can be inspected again once the engine is
/// dropped.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
/// use wordsearch_core::Grid;
/// use wordsearch_generator::{Difficulty, PlacementEngine, Word};
///
/// let mut grid = Grid::new(6)?;
/// let mut rng = Pcg64::seed_from_u64(0);
/// let words = [Word::new("cat", "Purrs"), Word::new("dog", "Barks")];
///
/// let placed = PlacementEngine::new(&mut grid, Difficulty::Easy, &mut rng).place_all(&words);
///
/// assert_eq!(placed.len(), 2);
/// for word in &placed {
///     assert_eq!(word.read_from(&grid).as_deref(), Some(word.normalized()));
/// }
/// # Ok::<(), wordsearch_core::GridError>(())
/// ```
#[derive(Debug)]
pub struct PlacementEngine<'a, R: ?Sized> {
    grid: &'a mut Grid,
    difficulty: Difficulty,
    rng: &'a mut R,
}

impl<'a, R> PlacementEngine<'a, R>
where
    R: Rng + ?Sized,
{
    /// Binds an engine to a grid, a difficulty and a source of randomness.
    pub fn new(grid: &'a mut Grid, difficulty: Difficulty, rng: &'a mut R) -> Self {
        Self {
            grid,
            difficulty,
            rng,
        }
    }

    /// Returns the grid being filled.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        self.grid
    }

    /// Returns the difficulty in effect.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Places as many of `words` as fit and returns them in placement order.
    ///
    /// The words are processed in a shuffled order, so which words win scarce
    /// space varies from run to run. Words that cannot be placed are dropped.
    pub fn place_all(&mut self, words: &[Word]) -> Vec<PlacedWord> {
        let mut order = words.iter().collect::<Vec<_>>();
        order.shuffle(&mut *self.rng);

        let mut placed = Vec::with_capacity(order.len());
        for word in order {
            match self.place_one(word) {
                Some(placement) => placed.push(placement),
                None => log::debug!(
                    "no room for {:?} in {size}x{size} grid",
                    word.text,
                    size = self.grid.size()
                ),
            }
        }

        log::debug!(
            "placed {}/{} words ({} difficulty)",
            placed.len(),
            words.len(),
            self.difficulty
        );
        placed
    }

    /// Places a single word, trying each eligible direction in shuffled order.
    ///
    /// Returns `None` if the word fits in no direction at all, or if it has no
    /// letters once spaces are removed.
    pub fn place_one(&mut self, word: &Word) -> Option<PlacedWord> {
        let normalized = word.normalized();
        if normalized.is_empty() {
            return None;
        }
        let letters = normalized.chars().collect::<Vec<_>>();

        for direction in self.difficulty.shuffled_directions(&mut *self.rng) {
            if let Some(start) = self.try_place(&letters, direction) {
                log::trace!("placed {normalized} at {start} going {direction}");
                return Some(PlacedWord::new(word.clone(), normalized, start, direction));
            }
        }
        None
    }

    /// Writes `letters` at the first fitting start position for `direction`.
    ///
    /// Rows and columns are each visited in an independently shuffled order.
    /// Start positions whose far end would leave the grid are skipped before
    /// any cell is looked at. Returns the start position used.
    pub fn try_place(&mut self, letters: &[char], direction: Direction) -> Option<Position> {
        let span = letters.len().checked_sub(1)?;
        let size = self.grid.size();

        let mut rows = (0..size).collect::<Vec<_>>();
        let mut cols = (0..size).collect::<Vec<_>>();
        rows.shuffle(&mut *self.rng);
        cols.shuffle(&mut *self.rng);

        for &row in &rows {
            for &col in &cols {
                let start = Position::new(row, col);
                if direction.advance(start, span, size).is_none() {
                    continue;
                }
                if let Some(footprint) = self.fit_check(start, letters, direction) {
                    for (pos, &letter) in footprint.into_iter().zip(letters) {
                        self.grid[pos] = Cell::Letter(letter);
                    }
                    return Some(start);
                }
            }
        }
        None
    }

    /// Checks whether `letters` can be written from `start` along `direction`.
    ///
    /// A cell accepts a letter if it is empty or already holds that same
    /// letter. Returns the footprint positions in letter order when every
    /// letter is accepted; returns `None` on the first conflict or if the path
    /// leaves the grid. The grid is not modified.
    #[must_use]
    pub fn fit_check(
        &self,
        start: Position,
        letters: &[char],
        direction: Direction,
    ) -> Option<Vec<Position>> {
        let size = self.grid.size();
        let mut footprint = Vec::with_capacity(letters.len());
        for (i, &letter) in letters.iter().enumerate() {
            let pos = direction.advance(start, i, size)?;
            if !self.grid[pos].accepts(letter) {
                return None;
            }
            footprint.push(pos);
        }
        Some(footprint)
    }
}
