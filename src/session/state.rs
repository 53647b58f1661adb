//! Session state.
//!
//! [`AppState`] is the single source of truth for the session: the selected
//! character, user multipliers, language preference, transcript and the
//! latest voice inventory.  It is owned by the session loop and never shared
//! across threads, so it needs no lock.

use crate::character::{self, CharacterProfile};
use crate::config::SessionConfig;
use crate::speech::{Capabilities, StatusUpdate, SynthesisRequest};
use crate::voice::{
    clamp, compose, select_voice, LanguagePreference, VoiceInventory, PITCH_RANGE, RATE_RANGE,
};

// ---------------------------------------------------------------------------
// RecognitionState
// ---------------------------------------------------------------------------

/// Whether the platform recognizer is currently listening.
///
/// Driven by the recognizer's own start/end notifications, not by the
/// toggle request, so a failed start leaves it `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecognitionState {
    #[default]
    Idle,
    Listening,
}

impl RecognitionState {
    /// Short label for the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            RecognitionState::Idle => "Idle",
            RecognitionState::Listening => "Listening…",
        }
    }

    pub fn is_listening(&self) -> bool {
        matches!(self, RecognitionState::Listening)
    }
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct AppState {
    /// Always a catalog id; see [`AppState::selected_character`].
    selected_character_id: String,
    /// Kept within [`RATE_RANGE`].
    rate_multiplier: f32,
    /// Kept within [`PITCH_RANGE`].
    pitch_multiplier: f32,

    /// Voice language filter, also sent as the synthesis language override.
    pub language: LanguagePreference,

    /// Dictated lines, oldest first.
    pub transcript: Vec<String>,

    /// Latest interim hypothesis, for live display only.
    pub interim_text: String,

    /// Voices last reported by the platform.
    pub voices: VoiceInventory,

    pub recognition: RecognitionState,

    pub capabilities: Capabilities,

    /// Last status line emitted.
    pub last_status: Option<StatusUpdate>,
}

impl AppState {
    pub fn new(config: &SessionConfig, capabilities: Capabilities) -> Self {
        Self {
            selected_character_id: character::resolve(&config.default_character).id.to_string(),
            rate_multiplier: clamp(config.rate_multiplier, &RATE_RANGE),
            pitch_multiplier: clamp(config.pitch_multiplier, &PITCH_RANGE),
            language: config.language.clone(),
            transcript: Vec::new(),
            interim_text: String::new(),
            voices: VoiceInventory::new(),
            recognition: RecognitionState::Idle,
            capabilities,
            last_status: None,
        }
    }

    // -----------------------------------------------------------------------
    // Character
    // -----------------------------------------------------------------------

    pub fn selected_character_id(&self) -> &str {
        &self.selected_character_id
    }

    /// The selected profile, falling back to the first catalog entry.
    pub fn selected_character(&self) -> &'static CharacterProfile {
        character::resolve(&self.selected_character_id)
    }

    /// Select `id` if it names a catalog profile.  Unknown ids are ignored.
    pub fn select_character(&mut self, id: &str) -> Option<&'static CharacterProfile> {
        let profile = character::find(id)?;
        self.selected_character_id = profile.id.to_string();
        Some(profile)
    }

    // -----------------------------------------------------------------------
    // Multipliers
    // -----------------------------------------------------------------------

    pub fn rate_multiplier(&self) -> f32 {
        self.rate_multiplier
    }

    pub fn pitch_multiplier(&self) -> f32 {
        self.pitch_multiplier
    }

    /// Store a clamped rate multiplier and return the stored value.
    pub fn set_rate_multiplier(&mut self, value: f32) -> f32 {
        self.rate_multiplier = clamp(value, &RATE_RANGE);
        self.rate_multiplier
    }

    /// Store a clamped pitch multiplier and return the stored value.
    pub fn set_pitch_multiplier(&mut self, value: f32) -> f32 {
        self.pitch_multiplier = clamp(value, &PITCH_RANGE);
        self.pitch_multiplier
    }

    // -----------------------------------------------------------------------
    // Transcript
    // -----------------------------------------------------------------------

    /// Append a trimmed line.  Blank lines are dropped.
    pub fn append_transcript(&mut self, line: &str) {
        let line = line.trim();
        if !line.is_empty() {
            self.transcript.push(line.to_string());
        }
    }

    /// The transcript as one trimmed, newline-separated string.
    pub fn transcript_text(&self) -> String {
        self.transcript.join("\n").trim().to_string()
    }

    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
    }

    // -----------------------------------------------------------------------
    // Synthesis
    // -----------------------------------------------------------------------

    /// Build a synthesis request for `text` from the current character,
    /// multipliers, language preference and voice inventory.
    pub fn synthesis_request(&self, text: &str) -> SynthesisRequest {
        let character = self.selected_character();
        let voice = select_voice(character, &self.language, self.voices.voices()).cloned();
        let params = compose(character, self.rate_multiplier, self.pitch_multiplier);
        SynthesisRequest {
            text: text.to_string(),
            voice,
            language: self.language.tag().map(str::to_string),
            rate: params.rate,
            pitch: params.pitch,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&SessionConfig::default(), Capabilities::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voice::VoiceDescriptor;

    #[test]
    fn default_state() {
        let st = AppState::default();
        assert_eq!(st.selected_character_id(), "hulk");
        assert_eq!(st.rate_multiplier(), 1.0);
        assert_eq!(st.pitch_multiplier(), 1.0);
        assert_eq!(st.language, LanguagePreference::Auto);
        assert_eq!(st.recognition, RecognitionState::Idle);
        assert!(st.transcript.is_empty());
        assert!(st.last_status.is_none());
    }

    #[test]
    fn unknown_default_character_falls_back_to_first() {
        let cfg = SessionConfig {
            default_character: "nobody".into(),
            ..SessionConfig::default()
        };
        let st = AppState::new(&cfg, Capabilities::all());
        assert_eq!(st.selected_character_id(), "hulk");
    }

    #[test]
    fn configured_multipliers_are_clamped() {
        let cfg = SessionConfig {
            rate_multiplier: 10.0,
            pitch_multiplier: -1.0,
            ..SessionConfig::default()
        };
        let st = AppState::new(&cfg, Capabilities::all());
        assert_eq!(st.rate_multiplier(), 2.0);
        assert_eq!(st.pitch_multiplier(), 0.0);
    }

    #[test]
    fn select_unknown_character_keeps_current() {
        let mut st = AppState::default();
        st.select_character("giant");
        assert!(st.select_character("nobody").is_none());
        assert_eq!(st.selected_character().id, "giant");
    }

    #[test]
    fn transcript_append_and_text() {
        let mut st = AppState::default();
        st.append_transcript("  hello world ");
        st.append_transcript("   ");
        st.append_transcript("second");
        assert_eq!(st.transcript, vec!["hello world", "second"]);
        assert_eq!(st.transcript_text(), "hello world\nsecond");
        st.clear_transcript();
        assert_eq!(st.transcript_text(), "");
    }

    #[test]
    fn synthesis_request_without_voices_uses_platform_default() {
        let st = AppState::default();
        let req = st.synthesis_request("hi");
        assert!(req.voice.is_none());
        assert!((req.rate - 0.9).abs() < 1e-5);
        assert!((req.pitch - 0.7).abs() < 1e-5);
    }

    #[test]
    fn synthesis_request_carries_language_override() {
        let mut st = AppState::default();
        st.language = LanguagePreference::Tag("en-GB".into());
        st.voices.replace(vec![
            VoiceDescriptor::new("Samantha", "en-US"),
            VoiceDescriptor::new("Daniel", "en-GB"),
        ]);
        let req = st.synthesis_request("hi");
        assert_eq!(req.language.as_deref(), Some("en-GB"));
        assert_eq!(req.voice.unwrap().name, "Daniel");
    }

    #[test]
    fn recognition_state_labels() {
        assert_eq!(RecognitionState::Idle.label(), "Idle");
        assert_eq!(RecognitionState::Listening.label(), "Listening…");
        assert!(RecognitionState::Listening.is_listening());
        assert!(!RecognitionState::default().is_listening());
    }
}
