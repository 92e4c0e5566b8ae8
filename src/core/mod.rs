//! Core rover state types and transitions.
//!
//! This module contains the pure functional core of the simulator:
//! - Compass headings via the [`Heading`] enum
//! - Wrap-around grid coordinates via [`Position`]
//! - The composite [`Rover`] state and its transitions
//!
//! All logic in this module is pure (no side effects) and total over the
//! closed types, following the "pure core, imperative shell" philosophy.

mod heading;
mod position;
mod state;

pub use heading::Heading;
pub use position::{Position, GRID_SIZE};
pub use state::Rover;
