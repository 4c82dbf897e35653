//! Difficulty tiers.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng, seq::SliceRandom as _};

use crate::Direction;

/// Error returned when parsing an unknown difficulty name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty {name:?}, expected one of: easy, medium, hard")]
pub struct DifficultyParseError {
    name: String,
}

/// Selects which directions words may be placed in.
///
/// The set of directions is fixed per tier; only the order in which they are
/// tried is randomized, once per word.
///
/// # Examples
///
/// ```
/// use wordsearch_generator::{Difficulty, Direction};
///
/// assert_eq!(
///     Difficulty::Easy.directions(),
///     &[Direction::LeftToRight, Direction::TopToBottom]
/// );
/// assert_eq!(Difficulty::Hard.directions().len(), 8);
/// assert_eq!("Medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// Left to right and top to bottom only.
    Easy,
    /// Both horizontals and both verticals.
    #[default]
    Medium,
    /// All eight directions, including diagonals.
    Hard,
}

impl Difficulty {
    /// All tiers from easiest to hardest.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the eligible directions in canonical order.
    #[must_use]
    pub const fn directions(self) -> &'static [Direction] {
        match self {
            Self::Easy => &[Direction::LeftToRight, Direction::TopToBottom],
            Self::Medium => &[
                Direction::LeftToRight,
                Direction::RightToLeft,
                Direction::TopToBottom,
                Direction::BottomToTop,
            ],
            Self::Hard => &Direction::ALL,
        }
    }

    /// Returns the eligible directions in a freshly shuffled trial order.
    pub fn shuffled_directions<R>(self, rng: &mut R) -> Vec<Direction>
    where
        R: Rng + ?Sized,
    {
        let mut directions = self.directions().to_vec();
        directions.shuffle(rng);
        directions
    }

    /// Lowercase name of this tier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DifficultyParseError { name: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    #[test]
    fn test_direction_sets() {
        assert_eq!(
            Difficulty::Easy.directions(),
            &[Direction::LeftToRight, Direction::TopToBottom]
        );
        assert_eq!(
            Difficulty::Medium.directions(),
            &[
                Direction::LeftToRight,
                Direction::RightToLeft,
                Direction::TopToBottom,
                Direction::BottomToTop,
            ]
        );
        assert_eq!(Difficulty::Hard.directions(), &Direction::ALL);
    }

    #[test]
    fn test_shuffle_keeps_composition() {
        let mut rng = Pcg64::seed_from_u64(3);
        for difficulty in Difficulty::ALL {
            let expected = difficulty.directions().iter().collect::<HashSet<_>>();
            for _ in 0..20 {
                let shuffled = difficulty.shuffled_directions(&mut rng);
                assert_eq!(shuffled.len(), expected.len());
                assert_eq!(shuffled.iter().collect::<HashSet<_>>(), expected);
            }
        }
    }

    #[test]
    fn test_shuffle_varies_order() {
        let mut rng = Pcg64::seed_from_u64(11);
        let orders = (0..50)
            .map(|_| Difficulty::Hard.shuffled_directions(&mut rng))
            .collect::<HashSet<_>>();
        assert!(orders.len() > 1);
    }

    #[test]
    fn test_parse_and_display() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse::<Difficulty>(), Ok(difficulty));
        }
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(Difficulty::default(), Difficulty::Medium);

        let err = "impossible".parse::<Difficulty>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown difficulty \"impossible\", expected one of: easy, medium, hard"
        );
    }
}
