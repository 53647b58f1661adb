//! Character-aware voice selection.

use crate::character::CharacterProfile;

use super::{LanguagePreference, VoiceDescriptor};

/// Pick the best voice for `character` from `voices`.
///
/// 1. No voices at all → `None`; the platform default voice is used.
/// 2. With a language tag, the candidate pool is restricted to voices whose
///    tag starts with it (case-sensitive); with `Auto` the pool is the full
///    list.
/// 3. Hints are tried in declared order; the first pool voice whose name
///    contains the hint (case-insensitive) is returned.
/// 4. Otherwise the first pool voice, or the first voice overall when the
///    language filter left the pool empty.
///
/// Ties are broken by list order, so identical inputs give identical output.
///
/// # Example
/// ```rust
/// use voice_characterizer::character::find;
/// use voice_characterizer::voice::{select_voice, LanguagePreference, VoiceDescriptor};
///
/// let voices = vec![
///     VoiceDescriptor::new("Alex", "en-US"),
///     VoiceDescriptor::new("Daniel", "en-GB"),
/// ];
/// let ironman = find("ironman").unwrap();
/// let v = select_voice(ironman, &LanguagePreference::Auto, &voices).unwrap();
/// assert_eq!(v.name, "Daniel");
/// ```
pub fn select_voice<'a>(
    character: &CharacterProfile,
    preference: &LanguagePreference,
    voices: &'a [VoiceDescriptor],
) -> Option<&'a VoiceDescriptor> {
    let first = voices.first()?;

    let pool: Vec<&VoiceDescriptor> = match preference.tag() {
        Some(tag) => voices
            .iter()
            .filter(|v| v.language_tag.starts_with(tag))
            .collect(),
        None => voices.iter().collect(),
    };

    for hint in character.voice_hints {
        let hint = hint.to_lowercase();
        if let Some(v) = pool.iter().find(|v| v.name.to_lowercase().contains(&hint)) {
            return Some(*v);
        }
    }

    Some(pool.first().copied().unwrap_or(first))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
