//! Oscillator voices: one waveform through one gain envelope.

use super::param::AudioParam;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Oscillator shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    Sine,
    Sawtooth,
}

impl Waveform {
    /// Sample at `phase`, measured in cycles.
    pub fn sample(&self, phase: f64) -> f32 {
        match self {
            Self::Sine => (TAU * phase).sin() as f32,
            // Starts at zero and rises, like the browser oscillator.
            Self::Sawtooth => (2.0 * (phase - (phase + 0.5).floor())) as f32,
        }
    }
}

/// A scheduled oscillator with its own frequency and gain automation.
///
/// Each cue allocates fresh voices, so overlapping cues never share state.
#[derive(Debug, Clone, PartialEq)]
pub struct Voice {
    pub waveform: Waveform,
    pub frequency: AudioParam,
    pub gain: AudioParam,
    /// Start time in seconds on the output clock.
    pub start: f64,
    /// Stop time in seconds on the output clock.
    pub stop: f64,
}

impl Voice {
    pub fn new(waveform: Waveform, frequency_hz: f32) -> Self {
        Self {
            waveform,
            frequency: AudioParam::new(frequency_hz),
            gain: AudioParam::new(1.0),
            start: 0.0,
            stop: 0.0,
        }
    }

    pub fn scheduled(mut self, start: f64, stop: f64) -> Self {
        self.start = start;
        self.stop = stop;
        self
    }

    /// Mix this voice into `out`, whose first sample sits at `origin` seconds.
    pub fn render_into(&self, out: &mut [f32], sample_rate: u32, origin: f64) {
        if self.stop <= origin || self.stop <= self.start {
            return;
        }

        let rate = f64::from(sample_rate);
        let first = ((self.start - origin) * rate).ceil().max(0.0) as usize;
        let last = (((self.stop - origin) * rate).ceil().max(0.0) as usize).min(out.len());

        // Phase accumulates so frequency glides stay continuous.
        let mut phase = 0.0f64;
        for (n, slot) in out.iter_mut().enumerate().take(last).skip(first) {
            let t = origin + n as f64 / rate;
            *slot += self.waveform.sample(phase) * self.gain.value_at(t);
            phase = (phase + f64::from(self.frequency.value_at(t)) / rate).fract();
        }
    }
}
