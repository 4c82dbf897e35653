//! Letter sets used to fill unused grid cells.

use rand::{Rng, seq::IndexedRandom as _};

use crate::GridError;

/// A non-empty set of letters that gap-filling picks from.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Alphabet, GridError};
///
/// let latin = Alphabet::latin_uppercase();
/// assert_eq!(latin.len(), 26);
///
/// let vowels = Alphabet::new("AEIOU".chars())?;
/// assert!(vowels.contains('E'));
///
/// assert_eq!(Alphabet::new("".chars()), Err(GridError::EmptyAlphabet));
/// # Ok::<(), GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// Creates an alphabet from the given letters.
    ///
    /// Duplicate letters are kept, which weights them more heavily when
    /// picking.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyAlphabet`] if no letters are given, and
    /// [`GridError::InvalidLetter`] for anything that is not an uppercase
    /// letter.
    pub fn new<I>(letters: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = char>,
    {
        let letters = letters.into_iter().collect::<Vec<_>>();
        if let Some(&ch) = letters
            .iter()
            .find(|ch| !(ch.is_alphabetic() && ch.is_uppercase()))
        {
            return Err(GridError::InvalidLetter { ch });
        }
        if letters.is_empty() {
            return Err(GridError::EmptyAlphabet);
        }
        Ok(Self { letters })
    }

    /// Returns the 26 uppercase Latin letters `A` through `Z`.
    #[must_use]
    pub fn latin_uppercase() -> Self {
        Self {
            letters: ('A'..='Z').collect(),
        }
    }

    /// Returns the letters of this alphabet.
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Returns the number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always returns `false`; alphabets are non-empty by construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Returns `true` if `letter` belongs to this alphabet.
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Picks a letter uniformly at random.
    pub fn pick<R>(&self, rng: &mut R) -> char
    where
        R: Rng + ?Sized,
    {
        *self
            .letters
            .choose(rng)
            .expect("alphabet is non-empty by construction")
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::latin_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    #[test]
    fn test_latin_uppercase() {
        let alphabet = Alphabet::latin_uppercase();
        assert_eq!(alphabet.len(), 26);
        assert_eq!(alphabet.letters().first(), Some(&'A'));
        assert_eq!(alphabet.letters().last(), Some(&'Z'));
        assert!(!alphabet.is_empty());
        assert_eq!(Alphabet::default(), alphabet);
    }

    #[test]
    fn test_empty_alphabet_rejected() {
        assert_eq!(Alphabet::new("".chars()), Err(GridError::EmptyAlphabet));
    }

    #[test]
    fn test_non_letters_rejected() {
        assert_eq!(
            Alphabet::new(['A', '#']),
            Err(GridError::InvalidLetter { ch: '#' })
        );
        assert_eq!(
            Alphabet::new("AB1".chars()),
            Err(GridError::InvalidLetter { ch: '1' })
        );
        assert_eq!(
            Alphabet::new("Ab".chars()),
            Err(GridError::InvalidLetter { ch: 'b' })
        );
        assert!(Alphabet::new("ÄÖÜ".chars()).is_ok());
    }

    #[test]
    fn test_pick_stays_in_alphabet() {
        let alphabet = Alphabet::new("XYZ".chars()).unwrap();
        let mut rng = Pcg64::seed_from_u64(7);
        for _ in 0..100 {
            assert!(alphabet.contains(alphabet.pick(&mut rng)));
        }
    }

    #[test]
    fn test_single_letter_alphabet() {
        let alphabet = Alphabet::new(['K']).unwrap();
        let mut rng = Pcg64::seed_from_u64(0);
        assert_eq!(alphabet.pick(&mut rng), 'K');
    }
}
