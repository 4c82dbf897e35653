//! Complete puzzle generation from a word list.

use rayon::prelude::*;
use wordsearch_core::{Alphabet, Grid, GridError};

use crate::{Difficulty, PlacedWord, PlacementEngine, PuzzleSeed, Word};

/// Errors returned by [`PuzzleGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GeneratorError {
    /// The configured grid could not be built.
    #[display("invalid grid configuration: {_0}")]
    Grid(GridError),
}

/// A finished puzzle page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The seed this page was generated from.
    pub seed: PuzzleSeed,
    /// The finished grid; every cell holds a letter.
    pub grid: Grid,
    /// Words hidden in the grid, in the order they were placed.
    pub placed: Vec<PlacedWord>,
}

impl GeneratedPuzzle {
    /// Returns the words from `words` that did not make it into this puzzle.
    ///
    /// Duplicates are matched one for one, so a word listed twice but placed
    /// once is reported once.
    #[must_use]
    pub fn unplaced<'a>(&self, words: &'a [Word]) -> Vec<&'a Word> {
        let mut remaining = self.placed.iter().map(PlacedWord::word).collect::<Vec<_>>();
        words
            .iter()
            .filter(|word| {
                if let Some(i) = remaining.iter().position(|placed| placed == word) {
                    remaining.swap_remove(i);
                    false
                } else {
                    true
                }
            })
            .collect()
    }
}

/// Builds complete puzzles: an empty grid, placed words, and random filler.
///
/// # Examples
///
/// ```
/// use wordsearch_generator::{Difficulty, PuzzleGenerator, PuzzleSeed, Word};
///
/// let generator = PuzzleGenerator::new([Word::new("cat", ""), Word::new("dog", "")])
///     .with_size(6)
///     .with_difficulty(Difficulty::Easy);
///
/// let seed = PuzzleSeed::from_bytes([0; 32]);
/// let puzzle = generator.generate_with_seed(seed)?;
/// assert!(puzzle.grid.is_filled());
/// assert_eq!(puzzle.placed.len(), 2);
///
/// // The same seed always produces the same puzzle
/// assert_eq!(generator.generate_with_seed(seed)?, puzzle);
/// # Ok::<(), wordsearch_generator::GeneratorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    words: Vec<Word>,
    size: usize,
    difficulty: Difficulty,
    alphabet: Alphabet,
}

impl PuzzleGenerator {
    /// Creates a generator for `words` with a 10×10 grid, medium difficulty
    /// and the uppercase Latin alphabet as filler.
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        Self {
            words: words.into_iter().collect(),
            size: Grid::DEFAULT_SIZE,
            difficulty: Difficulty::default(),
            alphabet: Alphabet::latin_uppercase(),
        }
    }

    /// Sets the grid size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Sets the difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Sets the alphabet used to fill cells no word covers.
    #[must_use]
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Returns the candidate words.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Returns the configured grid size.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the configured difficulty.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Grid`] if the grid size is zero.
    pub fn generate(&self) -> Result<GeneratedPuzzle, GeneratorError> {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Grid`] if the grid size is zero.
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> Result<GeneratedPuzzle, GeneratorError> {
        let mut grid = Grid::new(self.size)?;
        let mut rng = seed.rng();

        let placed =
            PlacementEngine::new(&mut grid, self.difficulty, &mut rng).place_all(&self.words);
        let filled = grid.fill_gaps(&self.alphabet, &mut rng);
        log::debug!(
            "generated {size}x{size} puzzle {seed}: {} words placed, {filled} cells filled",
            placed.len(),
            size = self.size,
        );

        Ok(GeneratedPuzzle { seed, grid, placed })
    }

    /// Generates `count` independent pages derived from `seed`.
    ///
    /// Page `i` is generated from [`PuzzleSeed::page`]`(i)`. Pages share no
    /// state and are built in parallel; the result is in page order and is
    /// identical to generating each page on its own.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Grid`] if the grid size is zero.
    pub fn generate_pages(
        &self,
        seed: PuzzleSeed,
        count: usize,
    ) -> Result<Vec<GeneratedPuzzle>, GeneratorError> {
        (0..count)
            .into_par_iter()
            .map(|page| self.generate_with_seed(seed.page(page)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: PuzzleSeed = PuzzleSeed::from_bytes([42; 32]);

    fn animals() -> Vec<Word> {
        ["cat", "dog", "hamster", "horse", "sea lion", "owl"]
            .into_iter()
            .map(|text| Word::new(text, format!("a {text}")))
            .collect()
    }

    #[test]
    fn test_generate_with_seed_is_deterministic() {
        let generator = PuzzleGenerator::new(animals()).with_difficulty(Difficulty::Hard);
        let a = generator.generate_with_seed(SEED).unwrap();
        let b = generator.generate_with_seed(SEED).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.seed, SEED);
    }

    #[test]
    fn test_generated_puzzle_is_complete() {
        let generator = PuzzleGenerator::new(animals());
        let puzzle = generator.generate().unwrap();
        assert_eq!(puzzle.grid.size(), Grid::DEFAULT_SIZE);
        assert!(puzzle.grid.is_filled());
        assert!(
            puzzle
                .grid
                .cells()
                .iter()
                .all(|cell| cell.letter().is_some_and(|l| l.is_ascii_uppercase()))
        );
        for word in &puzzle.placed {
            assert_eq!(word.read_from(&puzzle.grid).as_deref(), Some(word.normalized()));
        }
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let generator = PuzzleGenerator::new(animals()).with_size(0);
        assert_eq!(
            generator.generate_with_seed(SEED),
            Err(GeneratorError::Grid(GridError::EmptyGrid))
        );
        assert_eq!(
            generator.generate_pages(SEED, 3),
            Err(GeneratorError::Grid(GridError::EmptyGrid))
        );
    }

    #[test]
    fn test_unplaced_reports_missing_words() {
        let words = vec![
            Word::new("hamster", ""),
            Word::new("ox", ""),
            Word::new("ox", ""),
        ];
        let generator = PuzzleGenerator::new(words.clone()).with_size(2);
        let puzzle = generator.generate_with_seed(SEED).unwrap();

        assert_eq!(puzzle.placed.len(), 2);
        assert_eq!(puzzle.unplaced(&words), [&words[0]]);
        assert_eq!(puzzle.grid.empty_count(), 0);
    }

    #[test]
    fn test_custom_alphabet_fills_gaps() {
        let generator = PuzzleGenerator::new([Word::new("abc", "")])
            .with_size(5)
            .with_alphabet(Alphabet::new(['Q']).unwrap());
        let puzzle = generator.generate_with_seed(SEED).unwrap();
        let filler = puzzle
            .grid
            .cells()
            .iter()
            .filter(|cell| cell.letter() == Some('Q'))
            .count();
        assert_eq!(filler, 25 - 3);
    }

    #[test]
    fn test_pages_match_single_page_generation() {
        let generator = PuzzleGenerator::new(animals()).with_difficulty(Difficulty::Hard);
        let pages = generator.generate_pages(SEED, 5).unwrap();
        assert_eq!(pages.len(), 5);
        for (i, page) in pages.iter().enumerate() {
            assert_eq!(page.seed, SEED.page(i));
            assert_eq!(page, &generator.generate_with_seed(SEED.page(i)).unwrap());
        }
        assert_ne!(pages[0].grid, pages[1].grid);
        assert!(generator.generate_pages(SEED, 0).unwrap().is_empty());
    }
}
