//! Compass headings and the 90° turn cycle.
//!
//! The heading is a closed four-value enum, so the turn functions are total
//! and the cyclic automaton N→E→S→W→N needs no fallback branch.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The compass direction the rover currently faces.
///
/// Headings are immutable values; turning produces a new heading rather
/// than mutating in place.
///
/// # Example
///
/// ```rust
/// use gridrover::Heading;
///
/// let heading = Heading::North;
/// assert_eq!(heading.turned_right(), Heading::East);
/// assert_eq!(heading.turned_left(), Heading::West);
/// assert_eq!(heading.code(), 'N');
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Heading {
    North,
    South,
    East,
    West,
}

impl Heading {
    /// All headings, in turn-right order from North.
    pub const ALL: [Heading; 4] = [
        Heading::North,
        Heading::East,
        Heading::South,
        Heading::West,
    ];

    /// Get the canonical single-character code for this heading.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gridrover::Heading;
    ///
    /// assert_eq!(Heading::South.code(), 'S');
    /// assert_eq!(Heading::West.code(), 'W');
    /// ```
    pub fn code(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }

    /// Rotate 90° clockwise: North→East→South→West→North.
    ///
    /// Pure function; the current heading is unchanged.
    pub fn turned_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Rotate 90° counter-clockwise: North→West→South→East→North.
    ///
    /// Pure function; the current heading is unchanged.
    pub fn turned_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_matches_canonical_characters() {
        assert_eq!(Heading::North.code(), 'N');
        assert_eq!(Heading::South.code(), 'S');
        assert_eq!(Heading::East.code(), 'E');
        assert_eq!(Heading::West.code(), 'W');
    }

    #[test]
    fn turned_right_cycles_clockwise() {
        assert_eq!(Heading::North.turned_right(), Heading::East);
        assert_eq!(Heading::East.turned_right(), Heading::South);
        assert_eq!(Heading::South.turned_right(), Heading::West);
        assert_eq!(Heading::West.turned_right(), Heading::North);
    }

    #[test]
    fn turned_left_cycles_counter_clockwise() {
        assert_eq!(Heading::North.turned_left(), Heading::West);
        assert_eq!(Heading::West.turned_left(), Heading::South);
        assert_eq!(Heading::South.turned_left(), Heading::East);
        assert_eq!(Heading::East.turned_left(), Heading::North);
    }

    #[test]
    fn four_turns_are_identity() {
        for heading in Heading::ALL {
            let right = heading
                .turned_right()
                .turned_right()
                .turned_right()
                .turned_right();
            let left = heading
                .turned_left()
                .turned_left()
                .turned_left()
                .turned_left();
            assert_eq!(right, heading);
            assert_eq!(left, heading);
        }
    }

    #[test]
    fn opposite_turns_cancel() {
        for heading in Heading::ALL {
            assert_eq!(heading.turned_right().turned_left(), heading);
            assert_eq!(heading.turned_left().turned_right(), heading);
        }
    }

    #[test]
    fn two_right_turns_from_north_face_south() {
        assert_eq!(Heading::North.turned_right().turned_right(), Heading::South);
        assert_eq!(
            Heading::North.turned_right().turned_right().turned_right(),
            Heading::West
        );
    }

    #[test]
    fn display_renders_code() {
        assert_eq!(Heading::North.to_string(), "N");
        assert_eq!(Heading::East.to_string(), "E");
    }

    #[test]
    fn heading_serializes_correctly() {
        let heading = Heading::West;
        let json = serde_json::to_string(&heading).unwrap();
        let deserialized: Heading = serde_json::from_str(&json).unwrap();
        assert_eq!(heading, deserialized);
    }
}
