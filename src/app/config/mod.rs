// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[display]` - Chunk text size
//! - `[backend]` - Summarization endpoint and timeout
//! - `[speech]` - Text-to-speech endpoint and voice parameters
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Set `FOCUS_LENS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use focus_lens::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings ignored: {key}");
//! }
//! println!("text size: {}", config.text_size());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Reading settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Chunk text size in points.
    #[serde(default = "default_text_size", skip_serializing_if = "Option::is_none")]
    pub text_size: Option<f32>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            text_size: default_text_size(),
        }
    }
}

/// Summarization backend settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    /// Endpoint receiving `{"content": ...}` and answering `{"chunks": [...]}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summarize_url: Option<String>,

    /// Request timeout in seconds.
    #[serde(
        default = "default_request_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            summarize_url: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Text-to-speech settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeechConfig {
    /// Whether the play-audio button is active at all.
    #[serde(default = "default_speech_enabled")]
    pub enabled: bool,

    /// Base URL of the TTS service; requests go to `{endpoint}/generate`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Voice identifier forwarded to the TTS service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,

    /// Speech rate in words per minute.
    #[serde(default = "default_speech_rate", skip_serializing_if = "Option::is_none")]
    pub rate: Option<u32>,

    /// Volume (0.0 to 1.0).
    #[serde(
        default = "default_speech_volume",
        skip_serializing_if = "Option::is_none"
    )]
    pub volume: Option<f32>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: default_speech_enabled(),
            endpoint: None,
            voice: None,
            rate: default_speech_rate(),
            volume: default_speech_volume(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub speech: SpeechConfig,
}

impl Config {
    /// Chunk text size, clamped so a hand-edited file cannot request unreadable text.
    #[must_use]
    pub fn text_size(&self) -> f32 {
        self.display
            .text_size
            .unwrap_or(DEFAULT_TEXT_SIZE)
            .clamp(MIN_TEXT_SIZE, MAX_TEXT_SIZE)
    }

    /// Summarization request timeout, clamped to the supported range.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .backend
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    /// Speech volume, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn speech_volume(&self) -> f32 {
        self.speech
            .volume
            .unwrap_or(DEFAULT_SPEECH_VOLUME)
            .clamp(MIN_SPEECH_VOLUME, MAX_SPEECH_VOLUME)
    }

    /// Speech rate in words per minute.
    #[must_use]
    pub fn speech_rate(&self) -> u32 {
        self.speech.rate.unwrap_or(DEFAULT_SPEECH_RATE)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_text_size() -> Option<f32> {
    Some(DEFAULT_TEXT_SIZE)
}

fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn default_speech_enabled() -> bool {
    true
}

fn default_speech_rate() -> Option<u32> {
    Some(DEFAULT_SPEECH_RATE)
}

fn default_speech_volume() -> Option<f32> {
    Some(DEFAULT_SPEECH_VOLUME)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            display: DisplayConfig {
                text_size: Some(22.0),
            },
            backend: BackendConfig {
                summarize_url: Some("http://localhost:5000/api/text/summarize".to_string()),
                request_timeout_secs: Some(30),
            },
            speech: SpeechConfig {
                enabled: true,
                endpoint: Some("http://localhost:8000/api/tts".to_string()),
                voice: Some("alex".to_string()),
                rate: Some(180),
                volume: Some(0.5),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_uses_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_fills_missing_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[speech]\nendpoint = \"http://tts\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("partial config loads");
        assert_eq!(loaded.speech.endpoint.as_deref(), Some("http://tts"));
        assert!(loaded.speech.enabled);
        assert_eq!(loaded.speech_rate(), DEFAULT_SPEECH_RATE);
        assert_eq!(loaded.text_size(), DEFAULT_TEXT_SIZE);
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::default();
        config.display.text_size = Some(200.0);
        config.backend.request_timeout_secs = Some(0);
        config.speech.volume = Some(3.0);

        assert_eq!(config.text_size(), MAX_TEXT_SIZE);
        assert_eq!(config.request_timeout(), Duration::from_secs(MIN_REQUEST_TIMEOUT_SECS));
        assert_eq!(config.speech_volume(), MAX_SPEECH_VOLUME);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }
}
