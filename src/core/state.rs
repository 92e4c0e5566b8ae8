//! The composite rover state and its pure transitions.
//!
//! A [`Rover`] is an immutable value pairing a [`Position`] with a
//! [`Heading`]. Every transition returns a new value - callers may hold on
//! to prior states (e.g. for before/after comparisons in tests) without any
//! risk of them changing underneath.

use super::heading::Heading;
use super::position::Position;
use crate::command::Command;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The rover's complete state: where it is and which way it faces.
///
/// Created once per run as [`Rover::INITIAL`], threaded through each command
/// application, and discarded after the final report. No state persists
/// across runs.
///
/// # Example
///
/// ```rust
/// use gridrover::{Command, Heading, Rover};
///
/// let before = Rover::INITIAL;
/// let after = before.apply(Command::TurnRight).apply(Command::Move);
///
/// // Transitions are pure: the original value is untouched.
/// assert_eq!(before, Rover::INITIAL);
/// assert_eq!(after.heading, Heading::East);
/// assert_eq!(after.to_string(), "1:0:E");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Rover {
    pub position: Position,
    pub heading: Heading,
}

impl Rover {
    /// The fixed starting state: the origin, facing North.
    pub const INITIAL: Rover = Rover {
        position: Position::ORIGIN,
        heading: Heading::North,
    };

    /// Move one grid cell in the direction of the current heading.
    ///
    /// Toroidal wraparound applies on the affected axis; the heading is
    /// unchanged. Total function over all valid states.
    pub fn advance(self) -> Self {
        Self {
            position: self.position.stepped(self.heading),
            ..self
        }
    }

    /// Rotate the heading 90° clockwise. Position unchanged.
    pub fn turn_right(self) -> Self {
        Self {
            heading: self.heading.turned_right(),
            ..self
        }
    }

    /// Rotate the heading 90° counter-clockwise. Position unchanged.
    pub fn turn_left(self) -> Self {
        Self {
            heading: self.heading.turned_left(),
            ..self
        }
    }

    /// Dispatch a single validated command to its transition.
    ///
    /// The command type is closed, so dispatch is total - validation has
    /// already happened at the parse boundary.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gridrover::{Command, Rover};
    ///
    /// let rover = Rover::INITIAL.apply(Command::Move);
    /// assert_eq!(rover.to_string(), "0:1:N");
    /// ```
    pub fn apply(self, command: Command) -> Self {
        match command {
            Command::Move => self.advance(),
            Command::TurnRight => self.turn_right(),
            Command::TurnLeft => self.turn_left(),
        }
    }
}

impl fmt::Display for Rover {
    /// Render the report form `"{x}:{y}:{heading}"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.position.x, self.position.y, self.heading
        )
    }
}
