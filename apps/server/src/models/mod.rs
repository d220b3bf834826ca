//! API request and response types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from namecard-core
pub use namecard_core::types::{CardStatus, CardView, Cue, Feedback, SubmitOutcome};
use namecard_core::Game;

/// Game snapshot returned on create and fetch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResponse {
    pub game_id: Uuid,
    pub shake_ms: u64,
    pub complete: bool,
    pub cards: Vec<CardView>,
}

impl GameResponse {
    pub fn new(game_id: Uuid, game: &Game) -> Self {
        Self {
            game_id,
            shake_ms: game.settings().shake_ms,
            complete: game.is_complete(),
            cards: game.cards(),
        }
    }
}

/// Guess submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuessRequest {
    #[serde(default)]
    pub text: String,
}

/// Guess result, ready for the page to render
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuessResponse {
    pub card_id: usize,
    pub matched: bool,
    pub status: CardStatus,
    pub feedback: Option<Feedback>,
    pub message: Option<String>,
    pub cue: Option<Cue>,
    /// The revealed name, set only on the guess that solves the card.
    pub name: Option<String>,
}

impl GuessResponse {
    pub fn with_name(mut self, name: Option<String>) -> Self {
        if self.matched {
            self.name = name;
        }
        self
    }
}

impl From<SubmitOutcome> for GuessResponse {
    fn from(outcome: SubmitOutcome) -> Self {
        Self {
            card_id: outcome.card_id,
            matched: outcome.matched,
            status: outcome.status,
            message: outcome.feedback.map(|f| f.message().to_string()),
            feedback: outcome.feedback,
            cue: outcome.cue,
            name: None,
        }
    }
}
