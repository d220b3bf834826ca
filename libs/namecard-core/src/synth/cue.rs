//! Voice schedules for the two feedback cues.

use super::voice::{Voice, Waveform};
use crate::types::Cue;

/// Gain floor used instead of zero, since exponential ramps cannot reach zero.
const SILENCE: f32 = 0.0001;

// Rising chime.
const SUCCESS_FREQS: [f32; 3] = [660.0, 880.0, 1175.0];
const SUCCESS_PEAK: f32 = 0.18;
const SUCCESS_ATTACK: f64 = 0.01;
const SUCCESS_ATTACK_STEP: f64 = 0.02;
const SUCCESS_DECAY_END: f64 = 0.18;
const SUCCESS_STOP: f64 = 0.22;
const SUCCESS_STAGGER: f64 = 0.03;

// Drooping buzz.
const FAIL_FREQ_START: f32 = 220.0;
const FAIL_FREQ_END: f32 = 140.0;
const FAIL_GLIDE: f64 = 0.25;
const FAIL_PEAK: f32 = 0.12;
const FAIL_ATTACK: f64 = 0.02;
const FAIL_DECAY_END: f64 = 0.32;
const FAIL_STOP: f64 = 0.34;

impl Cue {
    /// Fresh voices for this cue, starting at `now` on the output clock.
    pub fn voices(&self, now: f64) -> Vec<Voice> {
        match self {
            Self::Success => success_voices(now),
            Self::Fail => vec![fail_voice(now)],
        }
    }

    /// Seconds from the first voice start to the last voice stop.
    pub fn duration(&self) -> f64 {
        self.voices(0.0).iter().map(|v| v.stop).fold(0.0, f64::max)
    }
}

fn success_voices(now: f64) -> Vec<Voice> {
    SUCCESS_FREQS
        .iter()
        .enumerate()
        .map(|(i, &freq)| {
            let i = i as f64;
            let mut voice = Voice::new(Waveform::Sine, freq).scheduled(
                now + i * SUCCESS_STAGGER,
                now + SUCCESS_STOP + i * SUCCESS_STAGGER,
            );
            voice
                .gain
                .set_value_at_time(SILENCE, now)
                .exponential_ramp_to_value_at_time(
                    SUCCESS_PEAK,
                    now + SUCCESS_ATTACK + i * SUCCESS_ATTACK_STEP,
                )
                .exponential_ramp_to_value_at_time(
                    SILENCE,
                    now + SUCCESS_DECAY_END + i * SUCCESS_STAGGER,
                );
            voice
        })
        .collect()
}

fn fail_voice(now: f64) -> Voice {
    let mut voice = Voice::new(Waveform::Sawtooth, FAIL_FREQ_START).scheduled(now, now + FAIL_STOP);
    voice
        .frequency
        .set_value_at_time(FAIL_FREQ_START, now)
        .exponential_ramp_to_value_at_time(FAIL_FREQ_END, now + FAIL_GLIDE);
    voice
        .gain
        .set_value_at_time(SILENCE, now)
        .exponential_ramp_to_value_at_time(FAIL_PEAK, now + FAIL_ATTACK)
        .exponential_ramp_to_value_at_time(SILENCE, now + FAIL_DECAY_END);
    voice
}
