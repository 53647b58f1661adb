//! Configuration module for the voice characterizer.
//!
//! Provides `AppConfig` (top-level settings), its sub-configs, `AppPaths`
//! for cross-platform directories, and TOML loading via `AppConfig::load`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, SessionConfig, VoicesConfig};
