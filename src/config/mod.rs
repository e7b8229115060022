// SPDX-License-Identifier: MPL-2.0
//! Application configuration, loaded from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[site]` - Texts shown in the header, hero, footer and window title
//! - `[manifest]` - Where the image list comes from and the HTTP user agent
//! - `[display]` - Reveal animation, back-to-top threshold, columns, cache
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` CLI flag or `ICED_FOLIO_CONFIG_DIR` environment variable
//! 3. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::config;
//!
//! let (config, _warning) = config::load();
//! println!("manifest: {}", config.manifest.source);
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::Result;
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
}

/// Texts describing the gallery itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Full site title; the header shows its first word.
    pub title: String,
    pub subtitle: String,
    /// Hero headline.
    pub tagline: String,
    pub description: String,
    pub window_title: String,
    pub footer_text: String,
    /// Text of the status chip above the hero headline.
    pub badge: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_SITE_TITLE.to_string(),
            subtitle: DEFAULT_SITE_SUBTITLE.to_string(),
            tagline: DEFAULT_SITE_TAGLINE.to_string(),
            description: DEFAULT_SITE_DESCRIPTION.to_string(),
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            footer_text: DEFAULT_FOOTER_TEXT.to_string(),
            badge: DEFAULT_BADGE.to_string(),
        }
    }
}

impl SiteConfig {
    /// First word of the title, used as the header brand.
    #[must_use]
    pub fn brand(&self) -> &str {
        self.title.split_whitespace().next().unwrap_or_default()
    }
}

/// Manifest location and request settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ManifestConfig {
    /// `http(s)` URL or local file path.
    pub source: String,
    pub user_agent: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_MANIFEST_SOURCE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(
        default = "default_reveal_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub reveal_duration_ms: Option<u64>,

    #[serde(
        default = "default_back_to_top_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub back_to_top_threshold: Option<f32>,

    #[serde(default = "default_max_columns", skip_serializing_if = "Option::is_none")]
    pub max_columns: Option<usize>,

    #[serde(
        default = "default_image_cache_mb",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_cache_mb: Option<u32>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            reveal_duration_ms: default_reveal_duration_ms(),
            back_to_top_threshold: default_back_to_top_threshold(),
            max_columns: default_max_columns(),
            image_cache_mb: default_image_cache_mb(),
        }
    }
}

impl DisplayConfig {
    #[must_use]
    pub fn reveal_duration(&self) -> Duration {
        let ms = self
            .reveal_duration_ms
            .unwrap_or(DEFAULT_REVEAL_DURATION_MS)
            .min(MAX_REVEAL_DURATION_MS);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn back_to_top_threshold(&self) -> f32 {
        let value = self
            .back_to_top_threshold
            .unwrap_or(DEFAULT_BACK_TO_TOP_THRESHOLD);
        if value.is_finite() {
            value.clamp(0.0, MAX_BACK_TO_TOP_THRESHOLD)
        } else {
            DEFAULT_BACK_TO_TOP_THRESHOLD
        }
    }

    #[must_use]
    pub fn max_columns(&self) -> usize {
        self.max_columns
            .unwrap_or(DEFAULT_MAX_COLUMNS)
            .clamp(MIN_MAX_COLUMNS, MAX_MAX_COLUMNS)
    }

    #[must_use]
    pub fn image_cache_bytes(&self) -> usize {
        let mb = self
            .image_cache_mb
            .unwrap_or(DEFAULT_IMAGE_CACHE_MB)
            .clamp(MIN_IMAGE_CACHE_MB, MAX_IMAGE_CACHE_MB);
        mb as usize * 1024 * 1024
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_reveal_duration_ms() -> Option<u64> {
    Some(DEFAULT_REVEAL_DURATION_MS)
}

fn default_back_to_top_threshold() -> Option<f32> {
    Some(DEFAULT_BACK_TO_TOP_THRESHOLD)
}

fn default_max_columns() -> Option<usize> {
    Some(DEFAULT_MAX_COLUMNS)
}

fn default_image_cache_mb() -> Option<u32> {
    Some(DEFAULT_IMAGE_CACHE_MB)
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the resolved config directory.
///
/// Returns the config and an optional warning key. A missing file yields the
/// defaults silently; an unreadable one yields the defaults plus a warning.
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
                    tracing::warn!(path = %path.display(), error = %err, "using default configuration");
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
///
/// # Errors
///
/// Returns [`Error::Io`](crate::error::Error::Io) if the file cannot be read
/// and [`Error::Config`](crate::error::Error::Config) if it
/// is not valid TOML for this schema.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
