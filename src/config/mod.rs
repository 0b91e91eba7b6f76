// SPDX-License-Identifier: MPL-2.0
//! This module handles the viewer's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[playback]` - Tick granularity, media failure fallback, initial mute
//! - `[gestures]` - Tap zone width and drag thresholds
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory to `load_with_override()`/`save_with_override()`
//! 3. Set `CHEKMATE_STORIES_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use chekmate_stories::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.playback.start_muted = Some(true);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::story::{
    DismissThreshold, FallbackDuration, SwipeThreshold, TapZoneFraction, TickInterval,
};
use crate::error::{Error, Result};
use crate::story::{GestureConfig, PlaybackOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "ChekMateStories";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "CHEKMATE_STORIES_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Story playback settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybackConfig {
    /// Interval between progress ticks (milliseconds).
    #[serde(
        default = "default_tick_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub tick_interval_ms: Option<u64>,

    /// Display time left to an item whose media failed to load (milliseconds).
    #[serde(
        default = "default_fallback_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub fallback_duration_ms: Option<u64>,

    /// Whether the viewer opens muted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_muted: Option<bool>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            fallback_duration_ms: default_fallback_duration_ms(),
            start_muted: Some(false),
        }
    }
}

/// Gesture settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GesturesConfig {
    /// Width of each side tap zone as a fraction of the viewport.
    #[serde(
        default = "default_tap_zone_fraction",
        skip_serializing_if = "Option::is_none"
    )]
    pub tap_zone_fraction: Option<f32>,

    /// Horizontal drag distance that counts as a swipe (pixels).
    #[serde(
        default = "default_swipe_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold_px: Option<f32>,

    /// Downward drag distance that dismisses the viewer (pixels).
    #[serde(
        default = "default_dismiss_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub dismiss_threshold_px: Option<f32>,
}

impl Default for GesturesConfig {
    fn default() -> Self {
        Self {
            tap_zone_fraction: default_tap_zone_fraction(),
            swipe_threshold_px: default_swipe_threshold_px(),
            dismiss_threshold_px: default_dismiss_threshold_px(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Viewer configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Story playback settings.
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// Gesture settings.
    #[serde(default)]
    pub gestures: GesturesConfig,
}

impl Config {
    /// Tick source period, clamped to the supported range.
    #[must_use]
    pub fn tick_interval(&self) -> TickInterval {
        self.playback
            .tick_interval_ms
            .map(TickInterval::new)
            .unwrap_or_default()
    }

    /// Transition tunables derived from the `[playback]` section.
    #[must_use]
    pub fn playback_options(&self) -> PlaybackOptions {
        PlaybackOptions {
            fallback: self
                .playback
                .fallback_duration_ms
                .map(FallbackDuration::new)
                .unwrap_or_default(),
            start_muted: self.playback.start_muted.unwrap_or(false),
        }
    }

    /// Gesture mapping derived from the `[gestures]` section.
    #[must_use]
    pub fn gesture_config(&self) -> GestureConfig {
        GestureConfig {
            tap_zone: self
                .gestures
                .tap_zone_fraction
                .map(TapZoneFraction::new)
                .unwrap_or_default(),
            swipe: self
                .gestures
                .swipe_threshold_px
                .map(SwipeThreshold::new)
                .unwrap_or_default(),
            dismiss: self
                .gestures
                .dismiss_threshold_px
                .map(DismissThreshold::new)
                .unwrap_or_default(),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_tick_interval_ms() -> Option<u64> {
    Some(DEFAULT_TICK_INTERVAL_MS)
}

fn default_fallback_duration_ms() -> Option<u64> {
    Some(DEFAULT_FALLBACK_DURATION_MS)
}

fn default_tap_zone_fraction() -> Option<f32> {
    Some(DEFAULT_TAP_ZONE_FRACTION)
}

fn default_swipe_threshold_px() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD_PX)
}

fn default_dismiss_threshold_px() -> Option<f32> {
    Some(DEFAULT_DISMISS_THRESHOLD_PX)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory.
///
/// # Resolution Order
///
/// 1. `override_path` parameter (if `Some`)
/// 2. `CHEKMATE_STORIES_CONFIG_DIR` environment variable (if set and non-empty)
/// 3. Platform-specific config directory with the app name appended
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR).filter(|dir| !dir.is_empty()) {
        return Some(PathBuf::from(dir));
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the config file path with an optional directory override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
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
/// default config with a warning message explaining what went wrong.
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
                    return (
                        Config::default(),
                        Some(format!("failed to load {}: {err}", path.display())),
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

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

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
    use approx::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            playback: PlaybackConfig {
                tick_interval_ms: Some(50),
                fallback_duration_ms: Some(2_000),
                start_muted: Some(true),
            },
            gestures: GesturesConfig {
                tap_zone_fraction: Some(0.25),
                swipe_threshold_px: Some(70.0),
                dismiss_threshold_px: Some(120.0),
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
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[playback\n")
            .expect("failed to write broken config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [gestures]
            swipe_threshold_px = 90.0
            "#,
        )
        .expect("partial config should parse");

        assert_eq!(config.playback, PlaybackConfig::default());
        assert_eq!(config.gestures.swipe_threshold_px, Some(90.0));
        assert_eq!(
            config.gestures.dismiss_threshold_px,
            Some(DEFAULT_DISMISS_THRESHOLD_PX)
        );
    }

    #[test]
    fn derived_settings_are_clamped() {
        let mut config = Config::default();
        config.playback.tick_interval_ms = Some(1);
        config.playback.fallback_duration_ms = Some(60_000);
        config.gestures.tap_zone_fraction = Some(0.9);

        assert_eq!(config.tick_interval().millis(), MIN_TICK_INTERVAL_MS);
        assert_eq!(
            config.playback_options().fallback.millis(),
            MAX_FALLBACK_DURATION_MS
        );
        assert_abs_diff_eq!(
            config.gesture_config().tap_zone.value(),
            MAX_TAP_ZONE_FRACTION
        );
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        save_with_override(&Config::default(), Some(temp_dir.path().to_path_buf()))
            .expect("save should succeed");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }
}
