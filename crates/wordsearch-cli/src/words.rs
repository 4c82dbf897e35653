//! Word list loading.

use std::{fs, io, path::Path};

use wordsearch_generator::Word;

/// Errors returned while loading a word list.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum LoadError {
    #[display("failed to read word list: {_0}")]
    Io(io::Error),
    #[display("failed to parse word list: {_0}")]
    Json(serde_json::Error),
}

/// Loads a JSON array of `{"text": ..., "clue": ...}` records.
pub(crate) fn load(path: &Path) -> Result<Vec<Word>, LoadError> {
    let text = fs::read_to_string(path)?;
    let words = parse(&text)?;
    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

pub(crate) fn parse(text: &str) -> Result<Vec<Word>, serde_json::Error> {
    serde_json::from_str(text)
}
