//! Session events, effects, and the state update function.
//!
//! ```text
//! SessionEvent ──▶ update(&mut AppState, event) ──▶ Vec<Effect>
//!                                                      │
//!                    Session::apply ◀──────────────────┘
//!                      ├─ Status        → status channel
//!                      ├─ CancelSpeech  → Synthesizer::cancel
//!                      ├─ Speak         → Synthesizer::speak
//!                      ├─ StartRecognition / StopRecognition → Recognizer
//! ```
//!
//! `update` never touches the platform, which keeps it testable with plain
//! values.

use crate::command;
use crate::speech::{RecognitionBatch, SpeechError, StatusUpdate, SynthesisRequest};
use crate::voice::{LanguagePreference, VoiceDescriptor};

use super::state::{AppState, RecognitionState};

/// Capability name used in the "not supported" status for recognition.
const RECOGNITION_CAPABILITY: &str = "Speech recognition";

pub const UNSUPPORTED_RECOGNITION: &str = "Speech recognition not supported on this platform";

// ---------------------------------------------------------------------------
// SessionEvent
// ---------------------------------------------------------------------------

/// Everything that can happen to a session, from the platform or the user.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    // ── Platform ─────────────────────────────────────────────────────────
    /// The platform voice list changed; replaces the inventory wholesale.
    VoicesChanged(Vec<VoiceDescriptor>),
    RecognitionStarted,
    RecognitionEnded,
    /// Recognition failed with a platform error code.
    RecognitionError(String),
    RecognitionResult(RecognitionBatch),

    // ── User ─────────────────────────────────────────────────────────────
    SelectCharacter(String),
    SetRate(f32),
    SetPitch(f32),
    SetLanguage(LanguagePreference),
    /// Speak typed text, or the transcript when `None`.
    Speak(Option<String>),
    StopSpeaking,
    ClearTranscript,
    /// Start listening, or stop if already listening.
    ToggleListening,
}

// ---------------------------------------------------------------------------
// Effect
// ---------------------------------------------------------------------------

/// A side effect requested by [`update`], carried out by the session loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Status(StatusUpdate),
    CancelSpeech,
    Speak(SynthesisRequest),
    StartRecognition,
    StopRecognition,
}

// ---------------------------------------------------------------------------
// update
// ---------------------------------------------------------------------------

/// Apply `event` to `state` and return the effects to perform, in order.
pub fn update(state: &mut AppState, event: SessionEvent) -> Vec<Effect> {
    let mut effects = Vec::new();

    match event {
        SessionEvent::VoicesChanged(voices) => {
            log::debug!("session: voice list replaced ({} voices)", voices.len());
            state.voices.replace(voices);
        }

        SessionEvent::RecognitionStarted => {
            state.recognition = RecognitionState::Listening;
            effects.push(Effect::Status(StatusUpdate::active(
                RecognitionState::Listening.label(),
            )));
        }

        SessionEvent::RecognitionEnded => {
            state.recognition = RecognitionState::Idle;
            state.interim_text.clear();
            effects.push(Effect::Status(StatusUpdate::idle(
                RecognitionState::Idle.label(),
            )));
        }

        SessionEvent::RecognitionError(code) => {
            log::warn!("session: recognition error: {code}");
            effects.push(Effect::Status(StatusUpdate::idle(format!("Error: {code}"))));
        }

        SessionEvent::RecognitionResult(batch) => {
            let (final_text, interim) = batch.split();
            state.interim_text = interim;
            if !final_text.is_empty() && !command::execute(state, &final_text, &mut effects) {
                state.append_transcript(&final_text);
            }
        }

        SessionEvent::SelectCharacter(id) => {
            if state.select_character(&id).is_none() {
                log::warn!("session: unknown character id {id:?}, selection unchanged");
            }
        }

        SessionEvent::SetRate(value) => {
            state.set_rate_multiplier(value);
        }

        SessionEvent::SetPitch(value) => {
            state.set_pitch_multiplier(value);
        }

        SessionEvent::SetLanguage(language) => {
            state.language = language;
        }

        SessionEvent::Speak(text) => {
            let text = match text {
                Some(text) => text.trim().to_string(),
                None => state.transcript_text(),
            };
            effects.extend(speak_effects(state, &text));
        }

        SessionEvent::StopSpeaking => {
            if state.capabilities.synthesis {
                effects.push(Effect::CancelSpeech);
            }
        }

        SessionEvent::ClearTranscript => {
            state.clear_transcript();
        }

        SessionEvent::ToggleListening => {
            if !state.capabilities.recognition {
                let err = SpeechError::Unsupported(RECOGNITION_CAPABILITY);
                log::warn!("session: {err}");
                effects.push(Effect::Status(StatusUpdate::idle(err.to_string())));
            } else if state.recognition.is_listening() {
                effects.push(Effect::StopRecognition);
            } else {
                effects.push(Effect::StartRecognition);
            }
        }
    }

    effects
}

/// Effects for speaking `text`: cancel whatever is playing, then request the
/// new utterance.  Empty text still produces a request.  Nothing at all when
/// the platform cannot synthesize.
pub fn speak_effects(state: &AppState, text: &str) -> Vec<Effect> {
    if !state.capabilities.synthesis {
        log::debug!("session: synthesis unsupported, speak ignored");
        return Vec::new();
    }
    vec![
        Effect::CancelSpeech,
        Effect::Speak(state.synthesis_request(text)),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::speech::{Capabilities, RecognitionAlternative};

    fn state() -> AppState {
        AppState::new(&SessionConfig::default(), Capabilities::all())
    }

    fn final_result(text: &str) -> SessionEvent {
        SessionEvent::RecognitionResult(RecognitionBatch::new(
            vec![RecognitionAlternative::final_text(text)],
            0,
        ))
    }

    fn interim_result(text: &str) -> SessionEvent {
        SessionEvent::RecognitionResult(RecognitionBatch::new(
            vec![RecognitionAlternative::interim(text)],
            0,
        ))
    }

    #[test]
    fn dictation_is_appended_to_transcript() {
        let mut st = state();
        let effects = update(&mut st, final_result("hello world"));
        assert!(effects.is_empty());
        assert_eq!(st.transcript, vec!["hello world"]);
    }

    #[test]
    fn commands_are_not_appended() {
        let mut st = state();
        update(&mut st, final_result("set rate to 1.2"));
        assert!(st.transcript.is_empty());
        assert!((st.rate_multiplier() - 1.2).abs() < 1e-6);
    }

    #[test]
    fn interim_results_never_run_commands() {
        let mut st = state();
        for text in ["set rate to 2", "change character to robot", "speak", "stop"] {
            let effects = update(&mut st, interim_result(text));
            assert!(effects.is_empty(), "{text}");
        }
        assert_eq!(st.rate_multiplier(), 1.0);
        assert_eq!(st.selected_character_id(), "hulk");
        assert!(st.transcript.is_empty());
        assert_eq!(st.interim_text, "stop");
    }

    #[test]
    fn mixed_batch_only_interprets_finals() {
        let mut st = state();
        let batch = RecognitionBatch::new(
            vec![
                RecognitionAlternative::final_text("stale"),
                RecognitionAlternative::final_text("set pitch to 0.5"),
                RecognitionAlternative::interim("speak"),
            ],
            1,
        );
        let effects = update(&mut st, SessionEvent::RecognitionResult(batch));
        assert_eq!(st.pitch_multiplier(), 0.5);
        assert_eq!(effects.len(), 1);
        assert_eq!(st.interim_text, "speak");
    }

    #[test]
    fn recognition_lifecycle_emits_status() {
        let mut st = state();
        let effects = update(&mut st, SessionEvent::RecognitionStarted);
        assert_eq!(st.recognition, RecognitionState::Listening);
        assert_eq!(effects, vec![Effect::Status(StatusUpdate::active("Listening…"))]);

        st.interim_text = "partial".into();
        let effects = update(&mut st, SessionEvent::RecognitionEnded);
        assert_eq!(st.recognition, RecognitionState::Idle);
        assert!(st.interim_text.is_empty());
        assert_eq!(effects, vec![Effect::Status(StatusUpdate::idle("Idle"))]);

        let effects = update(&mut st, SessionEvent::RecognitionError("no-speech".into()));
        assert_eq!(effects, vec![Effect::Status(StatusUpdate::idle("Error: no-speech"))]);
    }

    #[test]
    fn toggle_listening_follows_recognition_state() {
        let mut st = state();
        assert_eq!(
            update(&mut st, SessionEvent::ToggleListening),
            vec![Effect::StartRecognition]
        );
        update(&mut st, SessionEvent::RecognitionStarted);
        assert_eq!(
            update(&mut st, SessionEvent::ToggleListening),
            vec![Effect::StopRecognition]
        );
    }

    #[test]
    fn toggle_listening_without_recognition_reports_unsupported() {
        let caps = Capabilities {
            recognition: false,
            synthesis: true,
        };
        let mut st = AppState::new(&SessionConfig::default(), caps);
        let effects = update(&mut st, SessionEvent::ToggleListening);
        assert_eq!(
            effects,
            vec![Effect::Status(StatusUpdate::idle(UNSUPPORTED_RECOGNITION))]
        );
        assert_eq!(
            SpeechError::Unsupported(RECOGNITION_CAPABILITY).to_string(),
            UNSUPPORTED_RECOGNITION
        );
    }

    #[test]
    fn voices_changed_replaces_inventory() {
        let mut st = state();
        update(
            &mut st,
            SessionEvent::VoicesChanged(vec![VoiceDescriptor::new("Alex", "en-US")]),
        );
        update(&mut st, SessionEvent::VoicesChanged(Vec::new()));
        assert!(st.voices.is_empty());
        assert_eq!(st.voices.generation(), 2);
    }

    #[test]
    fn user_settings_are_clamped() {
        let mut st = state();
        update(&mut st, SessionEvent::SetRate(0.0));
        update(&mut st, SessionEvent::SetPitch(3.0));
        assert_eq!(st.rate_multiplier(), 0.5);
        assert_eq!(st.pitch_multiplier(), 2.0);
    }

    #[test]
    fn typed_text_is_spoken_instead_of_transcript() {
        let mut st = state();
        st.append_transcript("transcript");
        let effects = update(&mut st, SessionEvent::Speak(Some("  typed  ".into())));
        assert!(matches!(&effects[1], Effect::Speak(req) if req.text == "typed"));
    }

    #[test]
    fn select_character_event_ignores_unknown_ids() {
        let mut st = state();
        update(&mut st, SessionEvent::SelectCharacter("alien".into()));
        update(&mut st, SessionEvent::SelectCharacter("martian".into()));
        assert_eq!(st.selected_character_id(), "alien");
    }

    #[test]
    fn set_language_changes_voice_filter() {
        let mut st = state();
        st.voices.replace(vec![
            VoiceDescriptor::new("Zira", "en-US"),
            VoiceDescriptor::new("Thomas", "fr-FR"),
        ]);
        update(&mut st, SessionEvent::SetLanguage("fr".into()));
        let effects = update(&mut st, SessionEvent::Speak(Some("bonjour".into())));
        match &effects[1] {
            Effect::Speak(req) => {
                assert_eq!(req.voice.as_ref().unwrap().name, "Thomas");
                assert_eq!(req.language.as_deref(), Some("fr"));
            }
            other => panic!("expected Speak, got {other:?}"),
        }
    }

    #[test]
    fn clear_and_stop() {
        let mut st = state();
        st.append_transcript("x");
        update(&mut st, SessionEvent::ClearTranscript);
        assert!(st.transcript.is_empty());
        assert_eq!(
            update(&mut st, SessionEvent::StopSpeaking),
            vec![Effect::CancelSpeech]
        );
    }
}
