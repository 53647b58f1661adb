//! The built-in character catalog and lookup helpers.

use super::CharacterProfile;

// ---------------------------------------------------------------------------
// Static catalog
// ---------------------------------------------------------------------------

/// The fixed catalog.  The first entry is the fallback for unknown ids.
pub static CHARACTERS: &[CharacterProfile] = &[
    CharacterProfile {
        id: "hulk",
        display_name: "Hulk",
        base_rate: 0.9,
        base_pitch: 0.7,
        voice_hints: &["Zira", "Samantha", "Google US English", "en-US"],
    },
    CharacterProfile {
        id: "ironman",
        display_name: "Iron Man",
        base_rate: 1.15,
        base_pitch: 1.0,
        voice_hints: &["Daniel", "Google UK English Male", "en-GB", "en-US"],
    },
    CharacterProfile {
        id: "vader",
        display_name: "Darth Vader",
        base_rate: 0.85,
        base_pitch: 0.5,
        voice_hints: &["Google UK English Male", "Alex", "en-GB", "en-US"],
    },
    CharacterProfile {
        id: "robot",
        display_name: "Robot",
        base_rate: 1.0,
        base_pitch: 1.4,
        voice_hints: &["Google US English", "en-US", "en-GB"],
    },
    CharacterProfile {
        id: "wizard",
        display_name: "Wizard",
        base_rate: 0.95,
        base_pitch: 1.2,
        voice_hints: &["Victoria", "en-GB", "en-US"],
    },
    CharacterProfile {
        id: "child",
        display_name: "Child",
        base_rate: 1.2,
        base_pitch: 1.6,
        voice_hints: &["Google US English", "en-US"],
    },
    CharacterProfile {
        id: "giant",
        display_name: "Giant",
        base_rate: 0.8,
        base_pitch: 0.6,
        voice_hints: &["Alex", "en-US", "en-GB"],
    },
    CharacterProfile {
        id: "whisper",
        display_name: "Whisper",
        base_rate: 0.95,
        base_pitch: 1.1,
        voice_hints: &["Samantha", "en-US"],
    },
    CharacterProfile {
        id: "anchor",
        display_name: "News Anchor",
        base_rate: 1.0,
        base_pitch: 0.95,
        voice_hints: &["Daniel", "Google UK English Male", "en-GB"],
    },
    CharacterProfile {
        id: "alien",
        display_name: "Alien",
        base_rate: 1.05,
        base_pitch: 1.8,
        voice_hints: &["Google US English", "en-US"],
    },
];

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// All built-in profiles in display order.
pub fn catalog() -> &'static [CharacterProfile] {
    CHARACTERS
}

/// Find a profile by exact id.
pub fn find(id: &str) -> Option<&'static CharacterProfile> {
    CHARACTERS.iter().find(|c| c.id == id)
}

/// Resolve `id` to a profile, falling back to the first catalog entry.
pub fn resolve(id: &str) -> &'static CharacterProfile {
    find(id).unwrap_or(&CHARACTERS[0])
}

/// Resolve a name as spoken in a "change character to …" command.
///
/// Matches the display name case-insensitively, or the id formed by removing
/// all whitespace from `name` (so "iron man" and "ironman" both work).
pub fn find_by_spoken_name(name: &str) -> Option<&'static CharacterProfile> {
    let name = name.trim().to_lowercase();
    let squashed: String = name.chars().filter(|c| !c.is_whitespace()).collect();
    CHARACTERS
        .iter()
        .find(|c| c.display_name.to_lowercase() == name || c.id == squashed)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
