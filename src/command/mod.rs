//! Command parsing and the validation boundary.
//!
//! Commands arrive as raw characters and are validated here exactly once.
//! Past this boundary the rest of the crate operates on the closed
//! [`Command`] type, so an invalid instruction cannot reach the transition
//! logic.

mod error;

pub use error::CommandError;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single instruction driving one state transition.
///
/// Canonical character codes: `M` (move), `L` (turn left), `R` (turn
/// right). Any other character fails to parse.
///
/// # Example
///
/// ```rust
/// use gridrover::Command;
///
/// assert_eq!(Command::parse('M').unwrap(), Command::Move);
/// assert_eq!(Command::parse('L').unwrap(), Command::TurnLeft);
/// assert!(Command::parse('X').is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Command {
    Move,
    TurnLeft,
    TurnRight,
}

impl Command {
    /// Parse a single character into a command.
    ///
    /// Returns [`CommandError::InvalidCommand`] for anything outside
    /// `{'M', 'L', 'R'}`, naming the offending character.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gridrover::Command;
    ///
    /// let err = Command::parse('I').unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "I is not a valid input command, must be one of: 'M', 'L', 'R'"
    /// );
    /// ```
    pub fn parse(c: char) -> Result<Self, CommandError> {
        match c {
            'M' => Ok(Self::Move),
            'L' => Ok(Self::TurnLeft),
            'R' => Ok(Self::TurnRight),
            other => Err(CommandError::InvalidCommand(other)),
        }
    }

    /// Get the canonical character code for this command.
    pub fn code(self) -> char {
        match self {
            Self::Move => 'M',
            Self::TurnLeft => 'L',
            Self::TurnRight => 'R',
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_canonical_characters() {
        assert_eq!(Command::parse('M').unwrap(), Command::Move);
        assert_eq!(Command::parse('L').unwrap(), Command::TurnLeft);
        assert_eq!(Command::parse('R').unwrap(), Command::TurnRight);
    }

    #[test]
    fn parse_rejects_anything_else() {
        for c in ['X', 'm', 'l', 'r', ' ', '0', 'Z'] {
            assert!(Command::parse(c).is_err(), "{c:?} should not parse");
        }
    }

    #[test]
    fn parse_error_names_the_offending_character() {
        let err = Command::parse('X').unwrap_err();
        assert_eq!(
            err.to_string(),
            "X is not a valid input command, must be one of: 'M', 'L', 'R'"
        );
    }

    #[test]
    fn code_round_trips_through_parse() {
        for command in [Command::Move, Command::TurnLeft, Command::TurnRight] {
            assert_eq!(Command::parse(command.code()).unwrap(), command);
        }
    }
}
