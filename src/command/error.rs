//! Validation errors for command input.

use thiserror::Error;

/// Errors raised while validating command input.
///
/// Both kinds are fatal to the current run: there is no partial result and
/// no recovery, the error propagates directly to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The input was not textual at all (e.g. raw bytes that are not valid
    /// UTF-8). Raised before any character is examined.
    #[error("{input} is not a valid input commands, must be a string of: 'M', 'L', 'R' e.g. MMRMLM")]
    NotText { input: String },

    /// The first character in the sequence outside `{'M', 'L', 'R'}`.
    #[error("{0} is not a valid input command, must be one of: 'M', 'L', 'R'")]
    InvalidCommand(char),
}
