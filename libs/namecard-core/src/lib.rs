//! Core library for the name card matching game.
//!
//! Provides:
//! - Guess matching (three or more consecutive letters of the name)
//! - Per-card state machine and the game grid
//! - Procedural success/failure cues and an injectable audio output
//! - Roster parsing and the image path convention

pub mod audio;
pub mod card;
pub mod error;
pub mod game;
pub mod matching;
pub mod roster;
pub mod synth;
pub mod types;

pub use audio::{AudioBackend, AudioHandle, AudioOutput, ContextState, Mixdown};
pub use card::CardController;
pub use error::{AudioError, GameError, Result};
pub use game::Game;
pub use matching::{check_guess, is_match, MatchResult, Rejection, MIN_GUESS_CHARS};
pub use roster::{default_roster, image_path, parse_roster};
pub use synth::{encode_wav, render_cue, ToneSynthesizer};
pub use types::{
    CardState, CardStatus, CardView, Cue, Feedback, GameSettings, GuessEvent, Puzzle,
    SubmitOutcome,
};
