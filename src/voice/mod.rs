//! Synthesis voices: descriptors, inventory, selection and rate/pitch
//! composition.
//!
//! # Overview
//!
//! ```text
//! VoicesChanged(Vec<VoiceDescriptor>) ──▶ VoiceInventory::replace  (generation += 1)
//!
//! speak:
//!   CharacterProfile + LanguagePreference + inventory
//!        └─▶ select_voice ──▶ Option<&VoiceDescriptor>
//!   CharacterProfile + multipliers
//!        └─▶ compose      ──▶ SynthesisParams { rate, pitch }
//! ```

pub mod compositor;
pub mod inventory;
pub mod selector;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use compositor::{clamp, compose, SynthesisParams, PITCH_RANGE, RATE_RANGE};
pub use inventory::{InventoryError, VoiceInventory};
pub use selector::select_voice;

// ---------------------------------------------------------------------------
// VoiceDescriptor
// ---------------------------------------------------------------------------

/// A synthesis voice offered by the host platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceDescriptor {
    /// Platform voice name, e.g. `"Google UK English Male"`.
    pub name: String,
    /// BCP-47 language tag, e.g. `"en-GB"`.
    #[serde(rename = "lang")]
    pub language_tag: String,
}

impl VoiceDescriptor {
    pub fn new(name: impl Into<String>, language_tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language_tag: language_tag.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// LanguagePreference
// ---------------------------------------------------------------------------

/// Either let the character's hints decide (`Auto`) or restrict voices to a
/// language tag prefix.
///
/// Serialised as the plain string `"auto"` or the tag itself.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LanguagePreference {
    #[default]
    Auto,
    Tag(String),
}

impl LanguagePreference {
    /// The tag to filter by and to pass as a synthesis language override, or
    /// `None` for `Auto`.
    pub fn tag(&self) -> Option<&str> {
        match self {
            LanguagePreference::Auto => None,
            LanguagePreference::Tag(tag) => Some(tag),
        }
    }
}

impl From<&str> for LanguagePreference {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() || s == "auto" {
            LanguagePreference::Auto
        } else {
            LanguagePreference::Tag(s.to_string())
        }
    }
}

impl From<String> for LanguagePreference {
    fn from(s: String) -> Self {
        LanguagePreference::from(s.as_str())
    }
}

impl From<LanguagePreference> for String {
    fn from(pref: LanguagePreference) -> Self {
        pref.to_string()
    }
}

impl fmt::Display for LanguagePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguagePreference::Auto => f.write_str("auto"),
            LanguagePreference::Tag(tag) => f.write_str(tag),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
