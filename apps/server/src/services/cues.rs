//! Pre-rendered cue audio.
//!
//! The server has no speakers of its own: games run with a silent
//! synthesizer and the page plays the cue named in each guess response.
//! Both cues are rendered once at startup and served as WAV.

use axum::body::Bytes;
use namecard_core::{encode_wav, render_cue, AudioError, Cue};

/// WAV bytes for each cue.
#[derive(Debug, Clone)]
pub struct CueLibrary {
    success: Bytes,
    fail: Bytes,
}

impl CueLibrary {
    pub fn render(sample_rate: u32) -> Result<Self, AudioError> {
        let success = encode_wav(&render_cue(Cue::Success, sample_rate), sample_rate)?;
        let fail = encode_wav(&render_cue(Cue::Fail, sample_rate), sample_rate)?;
        tracing::debug!(
            sample_rate,
            success_bytes = success.len(),
            fail_bytes = fail.len(),
            "cues rendered"
        );

        Ok(Self {
            success: Bytes::from(success),
            fail: Bytes::from(fail),
        })
    }

    pub fn get(&self, cue: Cue) -> Bytes {
        match cue {
            Cue::Success => self.success.clone(),
            Cue::Fail => self.fail.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_both_cues() {
        let library = CueLibrary::render(8_000).unwrap();
        let success = library.get(Cue::Success);
        let fail = library.get(Cue::Fail);

        assert_eq!(&success[..4], b"RIFF");
        assert_eq!(&fail[..4], b"RIFF");
        // The failure buzz outlasts the chime.
        assert!(fail.len() > success.len());
    }
}
