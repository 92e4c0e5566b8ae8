//! Grid coordinates with toroidal wraparound.

use super::heading::Heading;
use serde::{Deserialize, Serialize};

/// Side length of the fixed square grid.
pub const GRID_SIZE: u8 = 10;

/// A cell on the toroidal grid.
///
/// Both coordinates are always in `[0, GRID_SIZE)`. Moving past an edge
/// wraps to the opposite edge; coordinates are never clamped and stepping
/// never fails.
///
/// # Example
///
/// ```rust
/// use gridrover::{Heading, Position};
///
/// let origin = Position::ORIGIN;
/// assert_eq!(origin.stepped(Heading::North), Position { x: 0, y: 1 });
///
/// // Stepping south from the origin wraps to the far edge.
/// assert_eq!(origin.stepped(Heading::South), Position { x: 0, y: 9 });
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    /// The bottom-left corner of the grid, where every run starts.
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    /// Move one cell in the given direction, returning a new position.
    ///
    /// Wraparound applies to the affected axis only; the other coordinate
    /// is unchanged. This is a pure total function.
    pub fn stepped(self, heading: Heading) -> Self {
        match heading {
            Heading::North => Self {
                y: (self.y + 1) % GRID_SIZE,
                ..self
            },
            Heading::South => Self {
                y: (self.y + GRID_SIZE - 1) % GRID_SIZE,
                ..self
            },
            Heading::East => Self {
                x: (self.x + 1) % GRID_SIZE,
                ..self
            },
            Heading::West => Self {
                x: (self.x + GRID_SIZE - 1) % GRID_SIZE,
                ..self
            },
        }
    }

    /// Check that both coordinates lie on the grid.
    pub fn in_bounds(self) -> bool {
        self.x < GRID_SIZE && self.y < GRID_SIZE
    }
}
