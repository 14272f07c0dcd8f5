//! Site configuration module.
//!
//! Handles loading, validating, and merging the optional `config.toml` that
//! sits next to the recipes. Stock defaults are overridden by whatever keys
//! the file sets.
//!
//! ## Config File Location
//!
//! ```text
//! recipes/
//! ├── config.toml     # Optional, never treated as a recipe
//! ├── pasta.md
//! └── salad.md
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Recipes"         # Index heading and page title prefix
//!
//! [colors.dark]             # Default scheme
//! primary = "#E2E8F0"
//! secondary = "#CBD5E0"
//! accent = "#B794F4"
//! background = "#1A202C"
//! surface = "#2D3748"
//! text = "#F7FAFC"
//! muted = "#A0AEC0"
//! border = "#4A5568"
//!
//! [colors.light]            # prefers-color-scheme: light
//! primary = "#2D3748"
//! secondary = "#4A5568"
//! accent = "#553C9A"
//! background = "#ffffff"
//! surface = "#F7FAFC"
//! text = "#1A202C"
//! muted = "#718096"
//! border = "#E2E8F0"
//!
//! [publish]
//! workers = 5               # Concurrent uploads
//! # region = "us-east-1"    # Overrides AWS_REGION
//! # endpoint = "https://..." # S3-compatible endpoint (R2, MinIO, ...)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults; a config file only needs the values it changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title shown on the index page and prefixed to every page title.
    pub title: String,
    /// Color schemes for dark (default) and light modes.
    pub colors: ColorConfig,
    /// Upload settings for the publish phase.
    pub publish: PublishConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Recipes".to_string(),
            colors: ColorConfig::default(),
            publish: PublishConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        if self.publish.workers == 0 {
            return Err(ConfigError::Validation(
                "publish.workers must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Publish-phase settings.
///
/// Credentials always come from the environment (`AWS_ACCESS_KEY_ID`,
/// `AWS_SECRET_ACCESS_KEY`, ...); they never belong in a file next to the
/// recipes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PublishConfig {
    /// Number of concurrent upload workers.
    pub workers: usize,
    /// Bucket region. When absent, `AWS_REGION` / `AWS_DEFAULT_REGION` apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Custom endpoint for S3-compatible stores.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            workers: crate::publish::DEFAULT_WORKERS,
            region: None,
            endpoint: None,
        }
    }
}

/// Color configuration for dark and light modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Default scheme.
    pub dark: ColorScheme,
    /// Scheme used under `prefers-color-scheme: light`.
    pub light: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            dark: ColorScheme::default_dark(),
            light: ColorScheme::default_light(),
        }
    }
}

/// Individual color scheme.
///
/// Has no single default: dark and light differ. A partial scheme only
/// deserializes after [`merge_toml`] has filled in the stock values, which
/// [`resolve_config`] does.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorScheme {
    /// Headings and recipe names.
    pub primary: String,
    /// Body text.
    pub secondary: String,
    /// Links and tag highlights.
    pub accent: String,
    pub background: String,
    /// Cards and the tag box.
    pub surface: String,
    pub text: String,
    /// Tag text.
    pub muted: String,
    pub border: String,
}

impl ColorScheme {
    pub fn default_dark() -> Self {
        Self {
            primary: "#E2E8F0".to_string(),
            secondary: "#CBD5E0".to_string(),
            accent: "#B794F4".to_string(),
            background: "#1A202C".to_string(),
            surface: "#2D3748".to_string(),
            text: "#F7FAFC".to_string(),
            muted: "#A0AEC0".to_string(),
            border: "#4A5568".to_string(),
        }
    }

    pub fn default_light() -> Self {
        Self {
            primary: "#2D3748".to_string(),
            secondary: "#4A5568".to_string(),
            accent: "#553C9A".to_string(),
            background: "#ffffff".to_string(),
            surface: "#F7FAFC".to_string(),
            text: "#1A202C".to_string(),
            muted: "#718096".to_string(),
            border: "#E2E8F0".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the recipes directory.
///
/// A missing file yields the stock defaults.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(dir)?)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Recipe Site Configuration
# =========================
# Place this file next to your recipes as config.toml.
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Shown as the index page heading and prefixed to every page title.
title = "Recipes"

# ---------------------------------------------------------------------------
# Colors - Dark mode (default)
# ---------------------------------------------------------------------------
[colors.dark]
primary = "#E2E8F0"       # Headings, recipe names
secondary = "#CBD5E0"     # Body text
accent = "#B794F4"        # Links, tag highlights
background = "#1A202C"
surface = "#2D3748"       # Cards, tag box
text = "#F7FAFC"
muted = "#A0AEC0"         # Tag text
border = "#4A5568"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
primary = "#2D3748"
secondary = "#4A5568"
accent = "#553C9A"
background = "#ffffff"
surface = "#F7FAFC"
text = "#1A202C"
muted = "#718096"
border = "#E2E8F0"

# ---------------------------------------------------------------------------
# Publishing (only used with --bucket)
# ---------------------------------------------------------------------------
[publish]
# Number of files uploaded concurrently.
workers = 5

# Credentials are read from AWS_ACCESS_KEY_ID / AWS_SECRET_ACCESS_KEY.
# region = "us-east-1"
# endpoint = "https://<account>.r2.cloudflarestorage.com"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    color-scheme: dark light;
{dark}
}}

@media (prefers-color-scheme: light) {{
    :root {{
{light}
    }}
}}"#,
        dark = scheme_properties(&colors.dark, "    "),
        light = scheme_properties(&colors.light, "        "),
    )
}

fn scheme_properties(scheme: &ColorScheme, indent: &str) -> String {
    [
        ("primary", &scheme.primary),
        ("secondary", &scheme.secondary),
        ("accent", &scheme.accent),
        ("background", &scheme.background),
        ("surface", &scheme.surface),
        ("text", &scheme.text),
        ("muted", &scheme.muted),
        ("border", &scheme.border),
    ]
    .iter()
    .map(|(name, value)| format!("{indent}--{name}: {value};"))
    .collect::<Vec<_>>()
    .join("\n")
}
