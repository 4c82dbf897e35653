//! Core data structures for word-search puzzles.
//!
//! This crate owns the letter grid that a puzzle is built on. It knows nothing
//! about words or directions; placing words is the job of
//! `wordsearch-generator`.
//!
//! # Overview
//!
//! - [`position`]: Row/column coordinates with checked signed stepping.
//! - [`cell`]: A single grid slot, either empty or holding a letter.
//! - [`grid`]: The square, fully allocated cell matrix, indexed by
//!   [`Position`], with gap-filling and text rendering.
//! - [`alphabet`]: The non-empty letter set used to fill unused cells.
//!
//! # Examples
//!
//! ```
//! use rand::SeedableRng as _;
//! use rand_pcg::Pcg64;
//! use wordsearch_core::{Alphabet, Cell, Grid, Position};
//!
//! let mut grid = Grid::new(4)?;
//!
//! // Write a word left to right along the top row
//! for (col, letter) in "WORD".chars().enumerate() {
//!     grid[Position::new(0, col)] = Cell::Letter(letter);
//! }
//!
//! // Fill everything else with random letters
//! let mut rng = Pcg64::seed_from_u64(0);
//! grid.fill_gaps(&Alphabet::latin_uppercase(), &mut rng);
//!
//! assert!(grid.is_filled());
//! assert_eq!(grid.read(Position::new(0, 0), 1, 0, 4).as_deref(), Some("WORD"));
//! # Ok::<(), wordsearch_core::GridError>(())
//! ```

pub mod alphabet;
pub mod cell;
pub mod grid;
pub mod position;

pub use self::{
    alphabet::Alphabet,
    cell::Cell,
    grid::{Grid, GridError, GridParseError},
    position::Position,
};
