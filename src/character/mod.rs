//! Character presets.
//!
//! A [`CharacterProfile`] biases the synthesis rate and pitch and carries an
//! ordered list of voice-name hints used by the voice selector.  The built-in
//! catalog is a fixed static table of ten profiles; see [`catalog`].
//!
//! # Quick start
//!
//! ```rust
//! use voice_characterizer::character::{find_by_spoken_name, resolve};
//!
//! let vader = find_by_spoken_name("darth vader").unwrap();
//! assert_eq!(vader.id, "vader");
//!
//! // Unknown ids fall back to the first catalog entry.
//! assert_eq!(resolve("nobody").id, "hulk");
//! ```

pub mod catalog;

pub use catalog::{catalog, find, find_by_spoken_name, resolve, CHARACTERS};

// ---------------------------------------------------------------------------
// CharacterProfile
// ---------------------------------------------------------------------------

/// A named preset that biases synthesis rate/pitch.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterProfile {
    /// Stable, unique identifier (lower-case, no whitespace).
    pub id: &'static str,
    /// Human-readable name shown in the character grid.
    pub display_name: &'static str,
    /// Base speaking rate, multiplied with the user's rate multiplier.
    pub base_rate: f32,
    /// Base pitch, multiplied with the user's pitch multiplier.
    pub base_pitch: f32,
    /// Voice-name substrings in priority order.  The first hint that matches
    /// an available voice wins.
    pub voice_hints: &'static [&'static str],
}

impl CharacterProfile {
    /// First letter of the display name, used as the grid avatar.
    pub fn initial(&self) -> char {
        self.display_name.chars().next().unwrap_or('?')
    }

    /// One-line `"rate 0.90, pitch 0.70"` summary for list views.
    pub fn summary(&self) -> String {
        format!("rate {:.2}, pitch {:.2}", self.base_rate, self.base_pitch)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_is_first_letter_of_display_name() {
        assert_eq!(find("ironman").unwrap().initial(), 'I');
        assert_eq!(find("anchor").unwrap().initial(), 'N');
    }

    #[test]
    fn summary_uses_two_decimals() {
        assert_eq!(find("hulk").unwrap().summary(), "rate 0.90, pitch 0.70");
        assert_eq!(find("ironman").unwrap().summary(), "rate 1.15, pitch 1.00");
    }
}
