//! Spoken command grammar.
//!
//! Patterns are tried in a fixed order against the lower-cased utterance and
//! the first one that matches *and resolves* wins:
//!
//! | # | Pattern                                   | Command            |
//! |---|-------------------------------------------|--------------------|
//! | 1 | `change character to <name>`              | `SelectCharacter`  |
//! | 2 | `set rate to <number>`                    | `SetRate`          |
//! | 3 | `set pitch to <number>`                   | `SetPitch`         |
//! | 4 | `speak` / `play` / `start voice` (word)   | `Speak`            |
//! | 5 | `stop` / `silence` (word)                 | `Stop`             |
//!
//! A character name that does not resolve is not a command; matching
//! continues with pattern 2.

use std::sync::LazyLock;

use regex::Regex;

use crate::character::{find_by_spoken_name, CharacterProfile};

static CHANGE_CHARACTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"change\s+character\s+to\s+([a-z\s]+)").expect("valid regex")
});

static SET_RATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"set\s+rate\s+to\s+([0-9]+(?:\.[0-9]+)?)").expect("valid regex")
});

static SET_PITCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"set\s+pitch\s+to\s+([0-9]+(?:\.[0-9]+)?)").expect("valid regex")
});

static SPEAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(speak|play|start voice)\b").expect("valid regex"));

static STOP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(stop|silence)\b").expect("valid regex"));

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// A recognised control command.  Numeric arguments are raw (unclamped).
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SelectCharacter(&'static CharacterProfile),
    SetRate(f32),
    SetPitch(f32),
    Speak,
    Stop,
}

/// Parse `utterance` into a [`Command`], or `None` if it is plain dictation.
///
/// ```rust
/// use voice_characterizer::command::{interpret, Command};
///
/// assert_eq!(interpret("Set Rate to 1.5"), Some(Command::SetRate(1.5)));
/// assert_eq!(interpret("hello world"), None);
/// ```
pub fn interpret(utterance: &str) -> Option<Command> {
    let t = utterance.to_lowercase();

    if let Some(profile) = CHANGE_CHARACTER
        .captures(&t)
        .and_then(|caps| find_by_spoken_name(caps[1].trim()))
    {
        return Some(Command::SelectCharacter(profile));
    }

    if let Some(rate) = numeric_argument(&SET_RATE, &t) {
        return Some(Command::SetRate(rate));
    }

    if let Some(pitch) = numeric_argument(&SET_PITCH, &t) {
        return Some(Command::SetPitch(pitch));
    }

    if SPEAK.is_match(&t) {
        return Some(Command::Speak);
    }

    if STOP.is_match(&t) {
        return Some(Command::Stop);
    }

    None
}

fn numeric_argument(pattern: &Regex, text: &str) -> Option<f32> {
    pattern
        .captures(text)
        .and_then(|caps| caps[1].parse::<f32>().ok())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::find;

    fn selects(utterance: &str) -> Option<&'static str> {
        match interpret(utterance) {
            Some(Command::SelectCharacter(c)) => Some(c.id),
            _ => None,
        }
    }

    #[test]
    fn change_character_by_display_name() {
        assert_eq!(selects("change character to Robot"), Some("robot"));
        assert_eq!(selects("Change Character To Darth Vader"), Some("vader"));
        assert_eq!(selects("please change  character   to news anchor"), Some("anchor"));
    }

    #[test]
    fn change_character_by_squashed_id() {
        assert_eq!(selects("change character to iron man"), Some("ironman"));
        assert_eq!(selects("change character to ironman"), Some("ironman"));
    }

    #[test]
    fn change_character_returns_catalog_profile() {
        assert_eq!(
            interpret("change character to wizard"),
            Some(Command::SelectCharacter(find("wizard").unwrap()))
        );
    }

    #[test]
    fn unknown_character_is_not_a_command() {
        assert_eq!(interpret("change character to spider man"), None);
    }

    #[test]
    fn unknown_character_falls_through_to_later_patterns() {
        assert_eq!(interpret("change character to batman and stop"), Some(Command::Stop));
    }

    #[test]
    fn name_capture_stops_at_non_letters() {
        // Digits end the capture; "hulk" still resolves.
        assert_eq!(selects("change character to hulk 2"), Some("hulk"));
    }

    #[test]
    fn set_rate_parses_number() {
        assert_eq!(interpret("set rate to 1.2"), Some(Command::SetRate(1.2)));
        assert_eq!(interpret("SET RATE TO 3"), Some(Command::SetRate(3.0)));
    }

    #[test]
    fn set_pitch_parses_number() {
        assert_eq!(interpret("set pitch to 0.8"), Some(Command::SetPitch(0.8)));
        assert_eq!(interpret("set pitch to 5"), Some(Command::SetPitch(5.0)));
    }

    #[test]
    fn malformed_number_is_not_a_command() {
        assert_eq!(interpret("set rate to fast"), None);
        assert_eq!(interpret("set pitch to high"), None);
    }

    #[test]
    fn malformed_rate_falls_through_to_speak() {
        assert_eq!(interpret("set rate to fast then speak"), Some(Command::Speak));
    }

    #[test]
    fn speak_words_match_on_word_boundaries() {
        assert_eq!(interpret("please speak now"), Some(Command::Speak));
        assert_eq!(interpret("play"), Some(Command::Speak));
        assert_eq!(interpret("start voice"), Some(Command::Speak));
        assert_eq!(interpret("speaker test"), None);
        assert_eq!(interpret("display this"), None);
    }

    #[test]
    fn stop_words_match_on_word_boundaries() {
        assert_eq!(interpret("stop"), Some(Command::Stop));
        assert_eq!(interpret("Silence!"), Some(Command::Stop));
        assert_eq!(interpret("unstoppable force"), None);
    }

    #[test]
    fn speak_wins_over_stop() {
        assert_eq!(interpret("stop and speak"), Some(Command::Speak));
    }

    #[test]
    fn character_wins_over_rate() {
        assert_eq!(selects("change character to robot set rate to 2"), None);
        // "robot set rate to " is captured as the name and does not resolve,
        // so the rate pattern applies.
        assert_eq!(
            interpret("change character to robot set rate to 2"),
            Some(Command::SetRate(2.0))
        );
        assert_eq!(selects("set rate to 2 change character to robot"), Some("robot"));
    }

    #[test]
    fn plain_dictation_is_not_a_command() {
        assert_eq!(interpret("hello world"), None);
        assert_eq!(interpret(""), None);
    }
}
