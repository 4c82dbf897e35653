//! Input words and placement results.

use serde::{Deserialize, Serialize};
use wordsearch_core::{Grid, Position};

use crate::Direction;

/// A word to hide in the grid, together with its clue.
///
/// The clue is carried through unchanged for whoever renders the puzzle
/// legend; placement only looks at the text.
///
/// # Examples
///
/// ```
/// use wordsearch_generator::Word;
///
/// let word = Word::new("New York", "Big Apple");
/// assert_eq!(word.normalized(), "NEWYORK");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    /// Display text, possibly lowercase or containing spaces.
    pub text: String,
    /// Clue shown in the legend.
    #[serde(default)]
    pub clue: String,
}

impl Word {
    /// Creates a word from its text and clue.
    pub fn new(text: impl Into<String>, clue: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            clue: clue.into(),
        }
    }

    /// Returns the text as it is written into the grid: letters only, all
    /// uppercased.
    #[must_use]
    pub fn normalized(&self) -> String {
        normalize(&self.text)
    }
}

/// Converts `text` to the uppercase letters written into the grid.
///
/// Spaces are removed, as is anything else that is not a letter (digits,
/// hyphens, apostrophes), so every grid cell ends up holding a letter.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|ch| ch.is_alphabetic())
        .flat_map(char::to_uppercase)
        .collect()
}

/// A word that was written into the grid, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    word: Word,
    normalized: String,
    start: Position,
    direction: Direction,
}

impl PlacedWord {
    pub(crate) fn new(word: Word, normalized: String, start: Position, direction: Direction) -> Self {
        Self {
            word,
            normalized,
            start,
            direction,
        }
    }

    /// The original input word.
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// The letters as written into the grid.
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Position of the first letter.
    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    /// Direction the letters run in.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of grid cells the word occupies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.normalized.chars().count()
    }

    /// Always `false`; empty words are never placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Returns the positions the word covers, first letter first.
    ///
    /// `size` is the size of the grid the word was placed in.
    #[must_use]
    pub fn positions(&self, size: usize) -> Vec<Position> {
        (0..self.len())
            .map_while(|i| self.direction.advance(self.start, i, size))
            .collect()
    }

    /// Reads the word back out of `grid` along its recorded footprint.
    #[must_use]
    pub fn read_from(&self, grid: &Grid) -> Option<String> {
        let (dx, dy) = self.direction.step();
        grid.read(self.start, dx, dy, self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("New York"), "NEWYORK");
        assert_eq!(normalize("NEWYORK"), "NEWYORK");
        assert_eq!(normalize(" ice  cream "), "ICECREAM");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("straße"), "STRASSE");
        assert_eq!(normalize("a-1"), "A");
        assert_eq!(normalize("Rock 'n' Roll"), "ROCKNROLL");
        assert_eq!(normalize("42"), "");
    }

    #[test]
    fn test_deserialize_word_list() {
        let words: Vec<Word> = serde_json::from_str(
            r#"[
                {"text": "cat", "clue": "Purrs"},
                {"text": "dog"}
            ]"#,
        )
        .unwrap();
        assert_eq!(words, [Word::new("cat", "Purrs"), Word::new("dog", "")]);
    }

    #[test]
    fn test_placed_word_positions() {
        let placed = PlacedWord::new(
            Word::new("cat", ""),
            "CAT".to_owned(),
            Position::new(2, 2),
            Direction::UpLeft,
        );
        assert_eq!(placed.len(), 3);
        assert_eq!(
            placed.positions(3),
            [
                Position::new(2, 2),
                Position::new(1, 1),
                Position::new(0, 0)
            ]
        );

        let grid: Grid = "T.. .A. ..C".parse().unwrap();
        assert_eq!(placed.read_from(&grid).as_deref(), Some("CAT"));
    }
}
