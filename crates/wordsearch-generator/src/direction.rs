//! Directions a word can run across the grid.

use std::fmt::{self, Display};

use wordsearch_core::Position;

/// One of the eight unit steps a word's letters can follow.
///
/// `dx` steps columns (positive is rightwards) and `dy` steps rows (positive is
/// downwards).
///
/// # Examples
///
/// ```
/// use wordsearch_core::Position;
/// use wordsearch_generator::Direction;
///
/// assert_eq!(Direction::LeftToRight.step(), (1, 0));
/// assert_eq!(Direction::UpLeft.step(), (-1, -1));
///
/// // The far end of a 3-letter word starting at (2, 2)
/// let end = Direction::UpLeft.advance(Position::new(2, 2), 2, 3);
/// assert_eq!(end, Some(Position::new(0, 0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Horizontal, read left to right: `(1, 0)`.
    LeftToRight,
    /// Horizontal, read right to left: `(-1, 0)`.
    RightToLeft,
    /// Vertical, read top to bottom: `(0, 1)`.
    TopToBottom,
    /// Vertical, read bottom to top: `(0, -1)`.
    BottomToTop,
    /// Diagonal towards the bottom right: `(1, 1)`.
    DownRight,
    /// Diagonal towards the bottom left: `(-1, 1)`.
    DownLeft,
    /// Diagonal towards the top right: `(1, -1)`.
    UpRight,
    /// Diagonal towards the top left: `(-1, -1)`.
    UpLeft,
}

impl Direction {
    /// All eight directions.
    pub const ALL: [Self; 8] = [
        Self::LeftToRight,
        Self::RightToLeft,
        Self::TopToBottom,
        Self::BottomToTop,
        Self::DownRight,
        Self::DownLeft,
        Self::UpRight,
        Self::UpLeft,
    ];

    /// Returns the `(dx, dy)` unit step of this direction.
    #[must_use]
    pub const fn step(self) -> (isize, isize) {
        match self {
            Self::LeftToRight => (1, 0),
            Self::RightToLeft => (-1, 0),
            Self::TopToBottom => (0, 1),
            Self::BottomToTop => (0, -1),
            Self::DownRight => (1, 1),
            Self::DownLeft => (-1, 1),
            Self::UpRight => (1, -1),
            Self::UpLeft => (-1, -1),
        }
    }

    /// Column step.
    #[must_use]
    pub const fn dx(self) -> isize {
        self.step().0
    }

    /// Row step.
    #[must_use]
    pub const fn dy(self) -> isize {
        self.step().1
    }

    /// Returns the position `steps` steps from `start` in this direction,
    /// or `None` if it falls outside a `size`×`size` grid.
    #[must_use]
    pub fn advance(self, start: Position, steps: usize, size: usize) -> Option<Position> {
        let steps = isize::try_from(steps).ok()?;
        start.offset(self.dx() * steps, self.dy() * steps, size)
    }

    /// Short human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LeftToRight => "left-to-right",
            Self::RightToLeft => "right-to-left",
            Self::TopToBottom => "top-to-bottom",
            Self::BottomToTop => "bottom-to-top",
            Self::DownRight => "down-right",
            Self::DownLeft => "down-left",
            Self::UpRight => "up-right",
            Self::UpLeft => "up-left",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_all_steps_are_distinct_unit_vectors() {
        let steps = Direction::ALL
            .iter()
            .map(|dir| dir.step())
            .collect::<HashSet<_>>();
        assert_eq!(steps.len(), 8);
        for (dx, dy) in steps {
            assert!((-1..=1).contains(&dx));
            assert!((-1..=1).contains(&dy));
            assert!((dx, dy) != (0, 0));
        }
    }

    #[test]
    fn test_advance() {
        let start = Position::new(1, 1);
        assert_eq!(
            Direction::LeftToRight.advance(start, 2, 4),
            Some(Position::new(1, 3))
        );
        assert_eq!(Direction::LeftToRight.advance(start, 3, 4), None);
        assert_eq!(
            Direction::DownLeft.advance(start, 1, 4),
            Some(Position::new(2, 0))
        );
        assert_eq!(Direction::DownLeft.advance(start, 2, 4), None);
        assert_eq!(Direction::BottomToTop.advance(start, 0, 4), Some(start));
    }
}
