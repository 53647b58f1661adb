//! The platform's current voice list.
//!
//! Voice lists arrive asynchronously and are replaced wholesale; the
//! generation counter lets callers tell two lists apart without comparing
//! contents.

use std::path::Path;

use thiserror::Error;

use super::VoiceDescriptor;

/// Errors from loading a voice inventory file.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("cannot read voice inventory {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid voice inventory JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The most recent voice list reported by the platform.
#[derive(Debug, Clone, Default)]
pub struct VoiceInventory {
    voices: Vec<VoiceDescriptor>,
    generation: u64,
}

impl VoiceInventory {
    /// An empty inventory, as seen before the platform finishes loading.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list and bump the generation.
    pub fn replace(&mut self, voices: Vec<VoiceDescriptor>) {
        self.voices = voices;
        self.generation += 1;
    }

    pub fn voices(&self) -> &[VoiceDescriptor] {
        &self.voices
    }

    /// Number of replacements seen so far (0 = never populated).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }

    /// Parse a JSON array of `{"name": …, "lang": …}` objects.
    pub fn parse_json(json: &str) -> Result<Vec<VoiceDescriptor>, InventoryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a voice list from a JSON file.
    pub fn load_json(path: &Path) -> Result<Vec<VoiceDescriptor>, InventoryError> {
        let data = std::fs::read_to_string(path).map_err(|source| InventoryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse_json(&data)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
