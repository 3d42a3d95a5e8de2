//! Engine error taxonomy.
//!
//! Every error is local and recoverable. The presentation layer decides
//! whether to surface it to the user or ignore it and retry.

use thiserror::Error;

use crate::rules::MatchStatus;

/// Errors reported by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Rejected configuration value (zero goal, unknown difficulty, bias over 100%).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Text that does not name a move.
    #[error("invalid move: {0:?}")]
    InvalidMove(String),

    /// The one-time bonus was already consumed this match.
    #[error("bonus already used this match")]
    AlreadyUsed,

    /// The match has ended; `reset` must be called first.
    #[error("match concluded ({0}); reset before playing again")]
    MatchConcluded(MatchStatus),

    /// Every opponent in the story ladder has been beaten.
    #[error("story mode already completed")]
    StoryComplete,
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
