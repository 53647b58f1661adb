//! Boundary to the host speech platform.
//!
//! Recognition and synthesis are opaque capabilities supplied by the
//! embedder.  The session talks to them only through the [`Recognizer`] and
//! [`Synthesizer`] traits, and receives their asynchronous output as
//! [`SessionEvent`](crate::session::SessionEvent)s.
//!
//! [`MockSynthesizer`] and [`MockRecognizer`] (available under
//! `#[cfg(test)]`) record every call so session tests can assert on them
//! without a real platform.

pub mod recognition;
pub mod synthesis;

pub use recognition::{RecognitionAlternative, RecognitionBatch, RecognitionConfig, Recognizer};
pub use synthesis::{SynthesisRequest, Synthesizer};

#[cfg(test)]
pub use recognition::MockRecognizer;
#[cfg(test)]
pub use synthesis::{MockSynthesizer, SynthCall};

use thiserror::Error;

// ---------------------------------------------------------------------------
// SpeechError
// ---------------------------------------------------------------------------

/// Failures reported by the speech platform.
///
/// None of these are fatal: the session logs them and at most surfaces them
/// as status text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechError {
    /// The platform has no recognition or synthesis capability.
    #[error("{0} not supported on this platform")]
    Unsupported(&'static str),

    /// Recognition was started while already running.
    #[error("recognition already started")]
    TransientRecognition,

    /// Any other backend failure.
    #[error("speech platform error: {0}")]
    Platform(String),
}

// ---------------------------------------------------------------------------
// Capabilities
// ---------------------------------------------------------------------------

/// What the host platform can do.  Commands that depend on a missing
/// capability become no-ops instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub recognition: bool,
    pub synthesis: bool,
}

impl Capabilities {
    pub fn none() -> Self {
        Self {
            recognition: false,
            synthesis: false,
        }
    }

    pub fn all() -> Self {
        Self {
            recognition: true,
            synthesis: true,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::none()
    }
}

// ---------------------------------------------------------------------------
// StatusUpdate
// ---------------------------------------------------------------------------

/// Status line for the UI, plus whether the "recording" indicator is lit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub text: String,
    pub active: bool,
}

impl StatusUpdate {
    pub fn idle(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            active: false,
        }
    }

    pub fn active(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            active: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
