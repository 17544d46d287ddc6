//! Shared error types for the services crate.

use thiserror::Error;

use hcf_core::model::{GameSummaryError, RoundError};

/// Errors emitted by the game state machine and its workflow surface.
///
/// A rejected or duplicate drop is not an error; those are ordinary
/// `DropOutcome` values. Everything here signals a call made in the wrong
/// state, so mis-wiring fails loudly instead of corrupting the session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("round index {index} is out of range (1..={total})")]
    InvalidIndex { index: u32, total: u32 },

    #[error("expected to start round {expected}, got {requested}")]
    IndexMismatch { expected: u32, requested: u32 },

    #[error("a round is already underway")]
    RoundAlreadyStarted,

    #[error("no round is in progress")]
    NoRoundInProgress,

    #[error("current round is not complete")]
    RoundNotComplete,

    #[error("game session is already complete")]
    SessionComplete,

    #[error("game session is not complete yet")]
    NotComplete,

    #[error(transparent)]
    Round(#[from] RoundError),

    #[error(transparent)]
    Summary(#[from] GameSummaryError),
}
