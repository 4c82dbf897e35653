//! Reproducible puzzle seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// Errors returned when parsing a [`PuzzleSeed`] from hex text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The text was not exactly 64 hex digits long.
    #[display("seed must be 64 hex digits, got {len}")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// The text contained a non-hex character.
    #[display("invalid hex digit {ch:?} in seed")]
    InvalidDigit {
        /// The offending character.
        ch: char,
    },
}

/// A 256-bit seed that fully determines a generated puzzle.
///
/// Seeds print as 64 lowercase hex digits and parse back from the same form,
/// so a puzzle can be regenerated from its printed seed.
///
/// # Examples
///
/// ```
/// use wordsearch_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed = "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff"
///     .parse()
///     .unwrap();
/// assert_eq!(seed.to_string().parse::<PuzzleSeed>().unwrap(), seed);
///
/// // Pages derived from one seed differ from each other
/// assert_ne!(seed.page(0), seed.page(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Creates a seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives the seed of page `index` in a multi-page run.
    ///
    /// The derived seed is the SHA-256 digest of this seed followed by the
    /// page index as a little-endian `u64`.
    #[must_use]
    pub fn page(&self, index: usize) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        hasher.update((index as u64).to_le_bytes());
        Self(hasher.finalize().into())
    }

    /// Returns a fresh random number generator seeded from this seed.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = SeedParseError;

    #[expect(clippy::cast_possible_truncation)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        if len != 64 {
            return Err(SeedParseError::InvalidLength { len });
        }

        let digits = s
            .chars()
            .map(|ch| {
                ch.to_digit(16)
                    .ok_or(SeedParseError::InvalidDigit { ch })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(digits.chunks_exact(2)) {
            *byte = ((pair[0] << 4) | pair[1]) as u8;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::seq::SliceRandom as _;

    use super::*;

    const HEX: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_parse_and_display() {
        let seed = HEX.parse::<PuzzleSeed>().unwrap();
        assert_eq!(seed.as_bytes()[0], 0xc1);
        assert_eq!(seed.as_bytes()[31], 0xf1);
        assert_eq!(seed.to_string(), HEX);
        assert_eq!(HEX.to_uppercase().parse::<PuzzleSeed>(), Ok(seed));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<PuzzleSeed>(),
            Err(SeedParseError::InvalidLength { len: 3 })
        );
        let bad = format!("{}g", &HEX[..63]);
        assert_eq!(
            bad.parse::<PuzzleSeed>(),
            Err(SeedParseError::InvalidDigit { ch: 'g' })
        );
    }

    #[test]
    fn test_page_seeds_are_stable_and_distinct() {
        let seed = HEX.parse::<PuzzleSeed>().unwrap();
        let pages = (0..16).map(|i| seed.page(i)).collect::<Vec<_>>();
        assert_eq!(pages.iter().collect::<HashSet<_>>().len(), 16);
        assert!(!pages.contains(&seed));
        assert_eq!(seed.page(3), pages[3]);
    }

    #[test]
    fn test_rng_is_reproducible() {
        let seed = PuzzleSeed::from_bytes([7; 32]);
        let shuffled = |seed: PuzzleSeed| {
            let mut values = (0..32).collect::<Vec<_>>();
            values.shuffle(&mut seed.rng());
            values
        };
        assert_eq!(shuffled(seed), shuffled(seed));
        assert_ne!(shuffled(seed), shuffled(seed.page(0)));
    }

    #[test]
    fn test_random_seeds_differ() {
        assert_ne!(PuzzleSeed::random(), PuzzleSeed::random());
    }
}
