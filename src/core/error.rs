//! Engine error type.
//!
//! Every error is local and recoverable: the rejected call leaves the
//! match state untouched and the caller may retry with corrected input.

use thiserror::Error;

use super::action::Phase;

/// Errors returned by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LudoError {
    /// A chosen token is not eligible, or a chosen seat is not in a
    /// state that allows the operation.
    #[error("invalid selection: {reason}")]
    InvalidSelection { reason: String },

    /// A raw value was outside its domain (dice face, seat index, config).
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The operation does not apply to the engine's current phase.
    #[error("illegal state transition: operation requires {expected}, engine is {actual}")]
    IllegalStateTransition { expected: Phase, actual: Phase },

    /// `roll_forced` was called without opting in through the match config.
    #[error("forced dice rolls are disabled for this match")]
    ForcedRollDisabled,
}

impl LudoError {
    pub(crate) fn invalid_selection(reason: impl Into<String>) -> Self {
        Self::InvalidSelection {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Result alias for engine operations.
pub type Result<T, E = LudoError> = std::result::Result<T, E>;
