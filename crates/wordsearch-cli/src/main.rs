//! Command-line word-search generator.
//!
//! Reads a JSON word list and prints one or more puzzles as plain text.
//!
//! ```sh
//! RUST_LOG=info wordsearch --size 12 --difficulty hard --pages 3 words.json
//! ```

use std::{path::PathBuf, process};

use clap::Parser;
use wordsearch_generator::{
    Difficulty, GeneratedPuzzle, GeneratorError, PuzzleGenerator, PuzzleSeed, Word,
};

use crate::words::LoadError;

mod words;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON file holding an array of `{"text": ..., "clue": ...}` records.
    #[arg(value_name = "WORDS")]
    words: PathBuf,

    /// Number of rows and columns in each grid.
    #[arg(short, long, value_name = "N", default_value_t = 10)]
    size: usize,

    /// Eligible directions: easy, medium or hard.
    #[arg(short, long, value_name = "LEVEL", default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Number of independent puzzles to generate.
    #[arg(short, long, value_name = "COUNT", default_value_t = 1)]
    pages: usize,

    /// Master seed (64 hex digits). Random if omitted.
    #[arg(long, value_name = "HEX")]
    seed: Option<PuzzleSeed>,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("{_0}")]
    Load(LoadError),
    #[display("{_0}")]
    Generate(GeneratorError),
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let words = words::load(&args.words)?;
    let generator = PuzzleGenerator::new(words)
        .with_size(args.size)
        .with_difficulty(args.difficulty);

    let seed = args.seed.unwrap_or_else(PuzzleSeed::random);
    log::info!(
        "generating {} page(s), {size}x{size}, {} difficulty, seed {seed}",
        args.pages,
        args.difficulty,
        size = args.size,
    );

    let pages = generator.generate_pages(seed, args.pages)?;
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_page(i, page, generator.words());
    }
    Ok(())
}

fn print_page(index: usize, page: &GeneratedPuzzle, words: &[Word]) {
    println!("Page {} (seed {})", index + 1, page.seed);
    println!();
    for row in page.grid.rows() {
        let letters = row.iter().map(ToString::to_string).collect::<Vec<_>>();
        println!("  {}", letters.join(" "));
    }
    println!();

    for placed in &page.placed {
        let word = placed.word();
        if word.clue.is_empty() {
            println!("  {}", placed.normalized());
        } else {
            println!("  {}: {}", placed.normalized(), word.clue);
        }
    }

    for word in page.unplaced(words) {
        log::warn!("page {}: could not place {:?}", index + 1, word.text);
    }
}
