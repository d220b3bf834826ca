//! Per-card answer checking.
//!
//! ```text
//! Unsolved --correct guess--> Solved
//!    ^  |
//!    +--+ wrong guess
//! ```
//!
//! `Solved` is terminal: later submits are ignored without touching state or
//! playing anything.

use crate::matching::check_guess;
use crate::roster::image_path;
use crate::synth::ToneSynthesizer;
use crate::types::{
    CardState, CardStatus, CardView, Cue, Feedback, GameSettings, GuessEvent, Puzzle,
    SubmitOutcome,
};
use std::sync::Arc;

/// Owns one card's state and reacts to its submit events.
#[derive(Debug)]
pub struct CardController {
    id: usize,
    puzzle: Puzzle,
    state: CardState,
    synth: Arc<ToneSynthesizer>,
}

impl CardController {
    pub fn new(id: usize, puzzle: Puzzle, synth: Arc<ToneSynthesizer>) -> Self {
        Self {
            id,
            puzzle,
            state: CardState::default(),
            synth,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn state(&self) -> &CardState {
        &self.state
    }

    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    /// Evaluate a submitted guess.
    pub fn submit(&mut self, event: &GuessEvent) -> SubmitOutcome {
        if self.state.is_solved() {
            return SubmitOutcome {
                card_id: self.id,
                matched: false,
                status: CardStatus::Solved,
                feedback: None,
                cue: None,
            };
        }

        self.synth.ensure_ready();

        let result = check_guess(&self.puzzle.name, &event.raw_text);
        let (feedback, cue) = if result.is_match {
            self.state.status = CardStatus::Solved;
            tracing::debug!(card_id = self.id, "card solved");
            (Feedback::Correct, Cue::Success)
        } else {
            tracing::debug!(card_id = self.id, rejection = ?result.rejection, "guess rejected");
            (Feedback::TryAgain, Cue::Fail)
        };
        self.synth.play(cue);

        SubmitOutcome {
            card_id: self.id,
            matched: result.is_match,
            status: self.state.status,
            feedback: Some(feedback),
            cue: Some(cue),
        }
    }

    /// Snapshot for rendering. The name is only exposed once solved.
    pub fn view(&self, settings: &GameSettings) -> CardView {
        CardView {
            id: self.id,
            image_path: image_path(settings, &self.puzzle.name),
            status: self.state.status,
            name: self.is_solved().then(|| self.puzzle.name.clone()),
        }
    }
}
