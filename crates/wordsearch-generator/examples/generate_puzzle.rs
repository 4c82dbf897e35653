//! Example demonstrating word-search puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` for a word list
//! - Generate a random puzzle and print its grid, seed and word list
//! - Sample many seeds and keep the puzzle that places the most words
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Use your own words (repeatable), grid size and difficulty:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --word cat --word dog --size 6 --difficulty easy
//! ```
//!
//! Sample several candidates and keep the fullest one:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard --max-tries 1000
//! ```

use std::process;

use clap::Parser;
use rayon::prelude::*;
use wordsearch_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed, Word};

const DEFAULT_WORDS: [&str; 12] = [
    "cat", "dog", "hamster", "horse", "rabbit", "parrot", "goldfish", "tortoise", "ferret",
    "guinea pig", "canary", "gerbil",
];

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Word to hide in the grid. Repeatable; defaults to a list of pets.
    #[arg(short, long = "word", value_name = "WORD")]
    words: Vec<String>,

    /// Number of rows and columns.
    #[arg(long, value_name = "N", default_value_t = 10)]
    size: usize,

    /// Difficulty: easy, medium or hard.
    #[arg(long, value_name = "LEVEL", default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Seed to generate from (64 hex digits). Random if omitted.
    #[arg(long, value_name = "HEX")]
    seed: Option<PuzzleSeed>,

    /// Number of candidate puzzles to sample; the one placing the most words wins.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    max_tries: usize,
}

fn main() {
    let args = Args::parse();
    let words = if args.words.is_empty() {
        DEFAULT_WORDS.iter().map(|text| Word::new(*text, "")).collect()
    } else {
        args.words.iter().map(|text| Word::new(text.as_str(), "")).collect::<Vec<_>>()
    };
    let generator = PuzzleGenerator::new(words)
        .with_size(args.size)
        .with_difficulty(args.difficulty);

    if args.max_tries == 0 {
        eprintln!("--max-tries must be at least 1.");
        process::exit(1);
    }

    let seed = args.seed.unwrap_or_else(PuzzleSeed::random);
    let best = (0..args.max_tries)
        .into_par_iter()
        .map(|i| generator.generate_with_seed(seed.page(i)))
        .collect::<Result<Vec<_>, _>>()
        .map(|puzzles| {
            puzzles
                .into_iter()
                .max_by_key(|puzzle| puzzle.placed.len())
        });

    match best {
        Ok(Some(puzzle)) => print_puzzle(&generator, &puzzle, args.max_tries),
        Ok(None) => unreachable!("at least one candidate is generated"),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn print_puzzle(generator: &PuzzleGenerator, puzzle: &GeneratedPuzzle, tries: usize) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Grid:");
    for line in puzzle.grid.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Placed ({}/{}):", puzzle.placed.len(), generator.words().len());
    for placed in &puzzle.placed {
        println!(
            "  {} at {} going {}",
            placed.normalized(),
            placed.start(),
            placed.direction()
        );
    }

    let unplaced = puzzle.unplaced(generator.words());
    if !unplaced.is_empty() {
        println!();
        println!("Unplaced:");
        for word in unplaced {
            println!("  {}", word.text);
        }
    }

    if tries > 1 {
        println!();
        println!("Selected best of {tries} candidates.");
    }
}
