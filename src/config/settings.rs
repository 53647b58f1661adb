//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files.  Settings only describe
//! how a session starts; session state itself is never written back.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;
use crate::speech::RecognitionConfig;
use crate::voice::LanguagePreference;

// ---------------------------------------------------------------------------
// SessionConfig
// ---------------------------------------------------------------------------

/// Initial session values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Character id selected at startup.  Unknown ids fall back to the first
    /// catalog entry.
    pub default_character: String,
    /// Initial rate multiplier, clamped to 0.5 – 2.0.
    pub rate_multiplier: f32,
    /// Initial pitch multiplier, clamped to 0.0 – 2.0.
    pub pitch_multiplier: f32,
    /// `"auto"` or a language tag prefix such as `"en-GB"`.
    pub language: LanguagePreference,
    /// Capacity of the session event channel.
    pub event_queue: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_character: "hulk".into(),
            rate_multiplier: 1.0,
            pitch_multiplier: 1.0,
            language: LanguagePreference::Auto,
            event_queue: 32,
        }
    }
}

// ---------------------------------------------------------------------------
// VoicesConfig
// ---------------------------------------------------------------------------

/// Where the console front-end finds its voice inventory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoicesConfig {
    /// JSON voice list.  `None` means `voices.json` in the config directory,
    /// if present.
    pub inventory_file: Option<PathBuf>,
}

impl VoicesConfig {
    /// The inventory file to load, if any.
    pub fn resolve_inventory_file(&self) -> Option<PathBuf> {
        match &self.inventory_file {
            Some(path) => Some(path.clone()),
            None => {
                let default = AppPaths::new().voices_file;
                default.exists().then_some(default)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use voice_characterizer::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Initial session values.
    pub session: SessionConfig,
    /// Settings passed to the platform recognizer.
    pub recognition: RecognitionConfig,
    /// Voice inventory source.
    pub voices: VoicesConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Write this configuration to `path`, creating parent directories as
    /// needed.  Used to generate a starter `settings.toml`.
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
