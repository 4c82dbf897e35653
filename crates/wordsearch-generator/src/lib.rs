//! Word-search puzzle generation.
//!
//! This crate hides a list of words in a [`Grid`] and fills the remaining cells
//! with random letters.
//!
//! # Overview
//!
//! - [`direction`]: The eight unit steps a word can follow.
//! - [`difficulty`]: Tiers selecting which directions are eligible.
//! - [`word`]: Input words, normalization, and placement records.
//! - [`engine`]: [`PlacementEngine`], the greedy randomized first-fit placer.
//! - [`seed`]: [`PuzzleSeed`], 256-bit seeds that make puzzles reproducible.
//! - [`generator`]: [`PuzzleGenerator`], which ties grid construction,
//!   placement and gap-filling together, one page or many.
//!
//! Words that cannot be placed are not an error. They are simply missing from
//! the result; use [`GeneratedPuzzle::unplaced`] to list them.
//!
//! [`Grid`]: wordsearch_core::Grid
//!
//! # Examples
//!
//! ```
//! use wordsearch_generator::{Difficulty, PuzzleGenerator, PuzzleSeed, Word};
//!
//! let words = vec![
//!     Word::new("cat", "Chases mice"),
//!     Word::new("dog", "Chases cats"),
//!     Word::new("sea lion", "Barks at sea"),
//! ];
//! let generator = PuzzleGenerator::new(words.clone()).with_difficulty(Difficulty::Hard);
//! let pages = generator.generate_pages(PuzzleSeed::random(), 3)?;
//!
//! for page in &pages {
//!     assert!(page.grid.is_filled());
//!     for placed in &page.placed {
//!         assert_eq!(placed.read_from(&page.grid).as_deref(), Some(placed.normalized()));
//!     }
//!     println!("{}\n", page.grid);
//! }
//! # Ok::<(), wordsearch_generator::GeneratorError>(())
//! ```

pub mod difficulty;
pub mod direction;
pub mod engine;
pub mod generator;
pub mod seed;
pub mod word;

pub use self::{
    difficulty::{Difficulty, DifficultyParseError},
    direction::Direction,
    engine::PlacementEngine,
    generator::{GeneratedPuzzle, GeneratorError, PuzzleGenerator},
    seed::{PuzzleSeed, SeedParseError},
    word::{PlacedWord, Word, normalize},
};
