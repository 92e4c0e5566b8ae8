//! Gridrover: a pure functional rover simulator on a toroidal grid
//!
//! Gridrover models a single rover on a fixed 10×10 wrap-around grid as a
//! pure state machine. The transition logic is composed of pure functions
//! over immutable value types with no side effects; the only boundary is a
//! single function call that folds a command string over the fixed initial
//! state and reports where the rover ended up.
//!
//! # Core Concepts
//!
//! - **Rover**: immutable composite of [`Position`] and [`Heading`]
//! - **Command**: closed set of instructions (`M`, `L`, `R`), validated once
//!   at the boundary so illegal states are unrepresentable past it
//! - **Execute**: left fold of the command dispatcher over a command string,
//!   short-circuiting on the first invalid character
//!
//! # Example
//!
//! ```rust
//! use gridrover::execute;
//!
//! // Move north twice, face east, move twice, face north, move once.
//! let report = execute("MMRMMLM").unwrap();
//! assert_eq!(report, "2:3:N");
//!
//! // Invalid characters abort the whole run.
//! assert!(execute("MMX").is_err());
//! ```

pub mod command;
pub mod core;
pub mod exec;

// Re-export commonly used types
pub use crate::command::{Command, CommandError};
pub use crate::core::{Heading, Position, Rover, GRID_SIZE};
pub use crate::exec::{execute, execute_bytes};
