//! A grid of independent cards sharing one synthesizer.

use crate::card::CardController;
use crate::error::{GameError, Result};
use crate::synth::ToneSynthesizer;
use crate::types::{CardView, GameSettings, GuessEvent, Puzzle, SubmitOutcome};
use std::sync::Arc;

/// One play session. Card ids are positions in the roster.
#[derive(Debug)]
pub struct Game {
    cards: Vec<CardController>,
    settings: GameSettings,
}

impl Game {
    pub fn new(
        puzzles: Vec<Puzzle>,
        synth: Arc<ToneSynthesizer>,
        settings: GameSettings,
    ) -> Result<Self> {
        if puzzles.is_empty() {
            return Err(GameError::EmptyRoster);
        }

        let cards = puzzles
            .into_iter()
            .enumerate()
            .map(|(id, puzzle)| CardController::new(id, puzzle, Arc::clone(&synth)))
            .collect();

        Ok(Self { cards, settings })
    }

    /// Convenience constructor from plain names.
    pub fn from_names<I, S>(names: I, synth: Arc<ToneSynthesizer>, settings: GameSettings) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let puzzles = names.into_iter().map(Puzzle::new).collect();
        Self::new(puzzles, synth, settings)
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Every card, in display order.
    pub fn cards(&self) -> Vec<CardView> {
        self.cards.iter().map(|c| c.view(&self.settings)).collect()
    }

    pub fn card(&self, card_id: usize) -> Result<CardView> {
        self.cards
            .get(card_id)
            .map(|c| c.view(&self.settings))
            .ok_or(GameError::UnknownCard { card_id })
    }

    /// Submit a guess for one card.
    pub fn submit_guess(&mut self, card_id: usize, text: &str) -> Result<SubmitOutcome> {
        let card = self
            .cards
            .get_mut(card_id)
            .ok_or(GameError::UnknownCard { card_id })?;
        Ok(card.submit(&GuessEvent::new(text)))
    }

    pub fn is_complete(&self) -> bool {
        self.cards.iter().all(CardController::is_solved)
    }
}
