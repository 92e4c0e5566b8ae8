//! The top-level entry point: fold a command string over the initial state.
//!
//! Execution is a left-to-right reduction with early abort. Each character
//! is validated and applied in turn; the first invalid character terminates
//! the run with an error and no further characters are processed. Every run
//! starts from the fixed initial state, so concurrent callers need no
//! coordination.

use crate::command::{Command, CommandError};
use crate::core::Rover;

/// Run a command string against a fresh rover and report the final state.
///
/// The empty string short-circuits to the initial report without folding.
/// Otherwise each character is parsed and applied left to right; the first
/// character outside `{'M', 'L', 'R'}` aborts the whole run with
/// [`CommandError::InvalidCommand`] - no partial state escapes.
///
/// On success the report has the exact form `"{x}:{y}:{heading}"` with both
/// coordinates in `[0, 9]`.
///
/// # Example
///
/// ```rust
/// use gridrover::execute;
///
/// assert_eq!(execute("").unwrap(), "0:0:N");
/// assert_eq!(execute("RM").unwrap(), "1:0:E");
/// assert_eq!(execute("LM").unwrap(), "9:0:W");
///
/// let err = execute("MMRX").unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "X is not a valid input command, must be one of: 'M', 'L', 'R'"
/// );
/// ```
pub fn execute(commands: &str) -> Result<String, CommandError> {
    if commands.is_empty() {
        return Ok(Rover::INITIAL.to_string());
    }

    let final_state = commands
        .chars()
        .try_fold(Rover::INITIAL, |state, c| Ok(state.apply(Command::parse(c)?)))?;

    Ok(final_state.to_string())
}

/// Run raw bytes as a command string, rejecting non-textual input.
///
/// This is the boundary for callers holding untyped input: bytes that are
/// not valid UTF-8 fail with [`CommandError::NotText`] before any character
/// is examined. Valid text behaves exactly like [`execute`].
///
/// # Example
///
/// ```rust
/// use gridrover::execute_bytes;
///
/// assert_eq!(execute_bytes(b"MR").unwrap(), "0:1:E");
/// assert!(execute_bytes(&[0xff, 0xfe]).is_err());
/// ```
pub fn execute_bytes(input: &[u8]) -> Result<String, CommandError> {
    match std::str::from_utf8(input) {
        Ok(commands) => execute(commands),
        Err(_) => Err(CommandError::NotText {
            input: String::from_utf8_lossy(input).into_owned(),
        }),
    }
}
