//! Error types for the 2048 engine.
//!
//! Only two things can go wrong: a session is configured with impossible
//! dimensions or spawn probability, or a caller hands over an integer
//! action outside the four recognized directions. Everything else (full
//! boards, no-op moves, moves after game over) is a normal outcome.

use thiserror::Error;

/// Errors produced by the engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    /// Width, height or `prob_4` out of range. Construction fails.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Human-readable description of the offending field.
        reason: String,
    },

    /// Integer action outside `0..=3`. The board is left unchanged.
    #[error("invalid direction {0}: expected 0 (up), 1 (left), 2 (down) or 3 (right)")]
    InvalidDirection(i64),
}

impl GameError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        GameError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type GameResult<T> = Result<T, GameError>;
