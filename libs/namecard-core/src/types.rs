//! Core types for the name card game.

use serde::{Deserialize, Serialize};

/// One card's answer. The name doubles as the image key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub name: String,
}

impl Puzzle {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Card progress. `Solved` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardStatus {
    Unsolved,
    Solved,
}

impl Default for CardStatus {
    fn default() -> Self {
        Self::Unsolved
    }
}

/// Mutable state owned by a single card controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardState {
    pub status: CardStatus,
}

impl CardState {
    pub fn is_solved(&self) -> bool {
        self.status == CardStatus::Solved
    }
}

/// A submitted guess, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessEvent {
    pub raw_text: String,
}

impl GuessEvent {
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
        }
    }
}

/// Audio cue variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    Success,
    Fail,
}

impl Cue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Fail => "fail",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "success" => Some(Self::Success),
            "fail" => Some(Self::Fail),
            _ => None,
        }
    }
}

/// What the presentation layer should show after a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    /// Flip to the back face and lock the input for good.
    Correct,
    /// Shake the card briefly and keep the input open.
    TryAgain,
}

impl Feedback {
    /// Inline message text.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Correct => "Correct!",
            Self::TryAgain => "Nope, try again.",
        }
    }

    /// Whether input for the card stays enabled.
    pub fn keeps_input_open(&self) -> bool {
        matches!(self, Self::TryAgain)
    }
}

/// Result of submitting a guess to a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitOutcome {
    pub card_id: usize,
    pub matched: bool,
    pub status: CardStatus,
    /// `None` when the card was already solved and the submit was ignored.
    pub feedback: Option<Feedback>,
    pub cue: Option<Cue>,
}

impl SubmitOutcome {
    pub fn was_ignored(&self) -> bool {
        self.feedback.is_none()
    }
}

/// Render-ready snapshot of one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: usize,
    pub image_path: String,
    pub status: CardStatus,
    /// Only revealed once the card is solved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Game presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Directory (URL prefix) holding the card images.
    pub images_dir: String,
    /// Image file extension, without the dot.
    pub image_ext: String,
    /// Duration of the wrong-answer shake.
    pub shake_ms: u64,
    /// Sample rate used when rendering cues offline.
    pub sample_rate: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            images_dir: "pictures".to_string(),
            image_ext: "jpeg".to_string(),
            shake_ms: 300,
            sample_rate: 44_100,
        }
    }
}
