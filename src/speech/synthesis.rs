//! Synthesis requests and the synthesizer trait.

use crate::voice::VoiceDescriptor;

/// Everything the platform needs to speak one utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    pub text: String,
    /// `None` → platform default voice.
    pub voice: Option<VoiceDescriptor>,
    /// Language override, set only when the user picked a language.
    pub language: Option<String>,
    pub rate: f32,
    pub pitch: f32,
}

/// Output side of the speech platform.
pub trait Synthesizer: Send {
    /// Queue `request` for playback.  The session always cancels first, so
    /// at most one utterance is active.
    fn speak(&mut self, request: SynthesisRequest);

    /// Cancel every queued or playing utterance.  Must be harmless when
    /// nothing is playing.
    fn cancel(&mut self);
}

// ---------------------------------------------------------------------------
// MockSynthesizer
// ---------------------------------------------------------------------------

#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum SynthCall {
    Speak(SynthesisRequest),
    Cancel,
}

/// Records every call into a shared log.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MockSynthesizer {
    pub calls: std::sync::Arc<std::sync::Mutex<Vec<SynthCall>>>,
}

#[cfg(test)]
impl MockSynthesizer {
    pub fn calls(&self) -> Vec<SynthCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Synthesizer for MockSynthesizer {
    fn speak(&mut self, request: SynthesisRequest) {
        self.calls.lock().unwrap().push(SynthCall::Speak(request));
    }

    fn cancel(&mut self) {
        self.calls.lock().unwrap().push(SynthCall::Cancel);
    }
}
