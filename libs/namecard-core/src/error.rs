//! Error types for namecard-core.

use thiserror::Error;

/// Result type alias using GameError.
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors raised while setting up or driving a game.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("unknown card {card_id}")]
    UnknownCard { card_id: usize },

    #[error("roster contains no names")]
    EmptyRoster,

    #[error("invalid name at line {line}: {name}")]
    InvalidName { line: usize, name: String },
}

/// Errors from the audio output. These never reach the player; the
/// synthesizer logs and drops them.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio output unavailable: {0}")]
    Unavailable(String),

    #[error("audio output could not resume: {0}")]
    Resume(String),

    #[error("wav encoding failed: {0}")]
    Encode(#[from] hound::Error),
}
