//! Procedural feedback cues.
//!
//! No audio assets: both cues are oscillators shaped by exponential gain
//! envelopes and scheduled on whatever output the injected [`AudioHandle`]
//! provides.

pub mod cue;
pub mod param;
pub mod voice;
pub mod wav;

use crate::audio::{AudioHandle, ContextState, Mixdown};
use crate::error::AudioError;
use crate::types::Cue;

pub use param::AudioParam;
pub use voice::{Voice, Waveform};
pub use wav::encode_wav;

/// Plays the success and failure cues.
///
/// Audio problems never surface: with no usable output every call is a no-op.
#[derive(Debug)]
pub struct ToneSynthesizer {
    audio: AudioHandle,
}

impl ToneSynthesizer {
    pub fn new(audio: AudioHandle) -> Self {
        Self { audio }
    }

    /// Synthesizer for a platform without audio output.
    pub fn silent() -> Self {
        Self::new(AudioHandle::unavailable())
    }

    pub fn audio(&self) -> &AudioHandle {
        &self.audio
    }

    /// Open the output and resume it if suspended.
    pub fn ensure_ready(&self) {
        let result = self.audio.acquire().and_then(|output| {
            if output.state() == ContextState::Suspended {
                output.resume()
            } else {
                Ok(())
            }
        });
        if let Err(err) = result {
            tracing::debug!(%err, "audio output not ready");
        }
    }

    pub fn play(&self, cue: Cue) {
        if let Err(err) = self.schedule(cue) {
            tracing::debug!(cue = cue.as_str(), %err, "cue skipped");
        }
    }

    pub fn play_success(&self) {
        self.play(Cue::Success);
    }

    pub fn play_fail(&self) {
        self.play(Cue::Fail);
    }

    fn schedule(&self, cue: Cue) -> Result<(), AudioError> {
        let output = self.audio.acquire()?;
        let now = output.current_time();
        for voice in cue.voices(now) {
            output.schedule(voice)?;
        }
        Ok(())
    }
}

/// Render a cue offline to mono samples.
pub fn render_cue(cue: Cue, sample_rate: u32) -> Vec<f32> {
    let mix = Mixdown::running(sample_rate);
    for voice in cue.voices(0.0) {
        mix.add_voice(voice);
    }
    mix.render()
}
