//! Offline output: records scheduled voices and mixes them to samples.

use super::{AudioOutput, ContextState};
use crate::error::AudioError;
use crate::synth::Voice;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Output context with a manually driven clock.
///
/// Starts suspended, like a browser context created before any user gesture.
/// The clock only moves while running.
#[derive(Debug)]
pub struct Mixdown {
    sample_rate: u32,
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    clock: f64,
    state: ContextState,
    voices: Vec<Voice>,
}

impl Mixdown {
    pub fn new(sample_rate: u32) -> Self {
        Self::with_state(sample_rate, ContextState::Suspended)
    }

    /// Already-running context, for offline rendering.
    pub fn running(sample_rate: u32) -> Self {
        Self::with_state(sample_rate, ContextState::Running)
    }

    fn with_state(sample_rate: u32, state: ContextState) -> Self {
        Self {
            sample_rate,
            inner: Mutex::new(Inner {
                clock: 0.0,
                state,
                voices: Vec::new(),
            }),
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Move the clock forward by `seconds`.
    pub fn advance(&self, seconds: f64) {
        let mut inner = self.lock();
        if inner.state == ContextState::Running {
            inner.clock += seconds.max(0.0);
        }
    }

    pub fn add_voice(&self, voice: Voice) {
        self.lock().voices.push(voice);
    }

    pub fn voices(&self) -> Vec<Voice> {
        self.lock().voices.clone()
    }

    pub fn voice_count(&self) -> usize {
        self.lock().voices.len()
    }

    /// Latest stop time of any scheduled voice.
    pub fn end_time(&self) -> f64 {
        self.lock().voices.iter().map(|v| v.stop).fold(0.0, f64::max)
    }

    /// Mix every scheduled voice into mono samples starting at time zero.
    pub fn render(&self) -> Vec<f32> {
        let inner = self.lock();
        let end = inner.voices.iter().map(|v| v.stop).fold(0.0, f64::max);
        let len = (end * f64::from(self.sample_rate)).ceil() as usize;

        let mut out = vec![0.0f32; len];
        for voice in &inner.voices {
            voice.render_into(&mut out, self.sample_rate, 0.0);
        }
        out
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AudioOutput for Mixdown {
    fn current_time(&self) -> f64 {
        self.lock().clock
    }

    fn state(&self) -> ContextState {
        self.lock().state
    }

    fn resume(&self) -> Result<(), AudioError> {
        self.lock().state = ContextState::Running;
        Ok(())
    }

    fn schedule(&self, voice: Voice) -> Result<(), AudioError> {
        self.add_voice(voice);
        Ok(())
    }
}
