//! Cross-platform application paths using the `dirs` crate.
//!
//! Config dir (settings + voice inventory):
//!   Windows: %APPDATA%\voice-characterizer\
//!   macOS:   ~/Library/Application Support/voice-characterizer/
//!   Linux:   ~/.config/voice-characterizer/

use std::path::PathBuf;

/// Holds all resolved application directory/file paths.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Directory for `settings.toml` and `voices.json`.
    pub config_dir: PathBuf,
    /// Full path to `settings.toml`.
    pub settings_file: PathBuf,
    /// Full path to the default voice inventory, `voices.json`.
    pub voices_file: PathBuf,
}

impl AppPaths {
    const APP_NAME: &'static str = "voice-characterizer";

    /// Resolves all paths using the `dirs` crate, falling back to the
    /// current directory if the platform has no config directory.
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::APP_NAME);

        let settings_file = config_dir.join("settings.toml");
        let voices_file = config_dir.join("voices.json");

        Self {
            config_dir,
            settings_file,
            voices_file,
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
