//! Audio output handle.
//!
//! The output context is not a global: an [`AudioHandle`] is built at startup
//! from an [`AudioBackend`] and injected into the synthesizer. The context is
//! opened on the first [`AudioHandle::acquire`] and reused until
//! [`AudioHandle::release`].

pub mod mixdown;

use crate::error::AudioError;
use crate::synth::Voice;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub use mixdown::Mixdown;

/// Whether an output context is currently producing sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    /// Created but waiting for a user gesture (or paused).
    Suspended,
    Running,
}

/// An open audio output context.
///
/// Voices are scheduled against the context's clock; the context mixes
/// overlapping voices on its own, so callers never coordinate.
pub trait AudioOutput: Send + Sync {
    /// Current time on the output clock, in seconds.
    fn current_time(&self) -> f64;

    fn state(&self) -> ContextState;

    /// Leave the suspended state.
    fn resume(&self) -> Result<(), AudioError>;

    /// Queue a voice. It plays to completion once scheduled.
    fn schedule(&self, voice: Voice) -> Result<(), AudioError>;
}

/// Something that can open an output context.
pub trait AudioBackend: Send + Sync {
    fn open(&self) -> Result<Arc<dyn AudioOutput>, AudioError>;
}

impl<F> AudioBackend for F
where
    F: Fn() -> Result<Arc<dyn AudioOutput>, AudioError> + Send + Sync,
{
    fn open(&self) -> Result<Arc<dyn AudioOutput>, AudioError> {
        self()
    }
}

/// Injected handle to the process's audio output.
pub struct AudioHandle {
    backend: Option<Box<dyn AudioBackend>>,
    context: Mutex<Option<Arc<dyn AudioOutput>>>,
}

impl AudioHandle {
    pub fn new(backend: impl AudioBackend + 'static) -> Self {
        Self {
            backend: Some(Box::new(backend)),
            context: Mutex::new(None),
        }
    }

    /// Handle backed by a closure that opens the context.
    pub fn from_fn<F>(open: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn AudioOutput>, AudioError> + Send + Sync + 'static,
    {
        Self::new(open)
    }

    /// Handle that always hands out the given context.
    pub fn with_output(output: Arc<dyn AudioOutput>) -> Self {
        Self::from_fn(move || Ok(Arc::clone(&output)))
    }

    /// Handle for a platform with no audio at all. Every acquire fails.
    pub fn unavailable() -> Self {
        Self {
            backend: None,
            context: Mutex::new(None),
        }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    pub fn is_open(&self) -> bool {
        self.lock().is_some()
    }

    /// Return the open context, opening it first if needed.
    ///
    /// A failed open leaves the handle empty; the next call tries again.
    pub fn acquire(&self) -> Result<Arc<dyn AudioOutput>, AudioError> {
        let backend = self
            .backend
            .as_ref()
            .ok_or_else(|| AudioError::Unavailable("no audio backend".to_string()))?;

        let mut context = self.lock();
        if let Some(output) = context.as_ref() {
            return Ok(Arc::clone(output));
        }

        let output = backend.open()?;
        tracing::debug!("audio output opened");
        *context = Some(Arc::clone(&output));
        Ok(output)
    }

    /// Drop the open context. Voices already scheduled keep their own reference.
    pub fn release(&self) {
        if self.lock().take().is_some() {
            tracing::debug!("audio output released");
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Arc<dyn AudioOutput>>> {
        self.context.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for AudioHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioHandle")
            .field("available", &self.is_available())
            .field("open", &self.is_open())
            .finish()
    }
}
