//! Voice command interpreter.
//!
//! [`interpret`] recognises a command in a finalized utterance without
//! touching any state.  [`execute`] interprets and then applies the command
//! to an [`AppState`], pushing the resulting [`Effect`]s.
//!
//! Interim recognition results must never reach this module; the session
//! only passes final text.

pub mod grammar;

pub use grammar::{interpret, Command};

use crate::session::{speak_effects, AppState, Effect};
use crate::speech::StatusUpdate;

/// Interpret `utterance` and apply it if it is a command.
///
/// Returns `true` when the utterance was a command (the caller must then not
/// add it to the transcript), `false` for plain dictation.
pub fn execute(state: &mut AppState, utterance: &str, effects: &mut Vec<Effect>) -> bool {
    match interpret(utterance) {
        Some(command) => {
            log::debug!("command: {command:?}");
            effects.extend(apply(&command, state));
            true
        }
        None => false,
    }
}

/// Apply an already-recognised command.
pub fn apply(command: &Command, state: &mut AppState) -> Vec<Effect> {
    match command {
        Command::SelectCharacter(profile) => {
            state.select_character(profile.id);
            vec![Effect::Status(StatusUpdate::idle(format!(
                "Character: {}",
                profile.display_name
            )))]
        }
        Command::SetRate(value) => {
            let rate = state.set_rate_multiplier(*value);
            vec![Effect::Status(StatusUpdate::idle(format!("Rate: {rate}")))]
        }
        Command::SetPitch(value) => {
            let pitch = state.set_pitch_multiplier(*value);
            vec![Effect::Status(StatusUpdate::idle(format!("Pitch: {pitch}")))]
        }
        Command::Speak => {
            let text = state.transcript_text();
            speak_effects(state, &text)
        }
        Command::Stop => {
            if state.capabilities.synthesis {
                vec![Effect::CancelSpeech]
            } else {
                Vec::new()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
