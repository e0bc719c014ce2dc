//! Site configuration module.
//!
//! Handles loading, validating, and merging `curriculum.toml`. Stock defaults
//! reproduce the original 100-day site exactly; a user file only needs the
//! keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "100 Days of Data Engineering"
//! home_url = "../index.html"
//! repository_url = "https://github.com/trivikrama1988/100-Days-of-Data-Engineering/tree/main"
//!
//! [assets]
//! stylesheet = "../styles.css"
//! icon_font = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css"
//! script = "../assets/js/day-navigation.js"
//!
//! [curriculum]
//! total_days = 100          # Last day that gets a "next" link
//! excerpt_chars = 80        # Index card excerpt length
//!
//! [progress]
//! storage_key = "de_progress"  # localStorage key shared by all pages
//! ```
//!
//! ## Partial Configuration
//!
//! ```toml
//! # Only rename the site
//! [site]
//! title = "100 Days of Platform Engineering"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `curriculum.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Titles and outbound links.
    pub site: SiteInfo,
    /// Shared stylesheet/script references (not produced by this tool).
    pub assets: AssetsConfig,
    /// Curriculum length and index card settings.
    pub curriculum: CurriculumConfig,
    /// Browser-side progress tracking.
    pub progress: ProgressConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.curriculum.total_days == 0 {
            return Err(ConfigError::Validation(
                "curriculum.total_days must be at least 1".into(),
            ));
        }
        if self.curriculum.excerpt_chars == 0 {
            return Err(ConfigError::Validation(
                "curriculum.excerpt_chars must be at least 1".into(),
            ));
        }
        if self.progress.storage_key.trim().is_empty() {
            return Err(ConfigError::Validation(
                "progress.storage_key must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    /// Appended to every page `<title>`.
    pub title: String,
    /// Target of the home icon, relative to the output directory.
    pub home_url: String,
    /// Base URL of the curriculum repository tree; day folders hang off it.
    pub repository_url: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "100 Days of Data Engineering".into(),
            home_url: "../index.html".into(),
            repository_url:
                "https://github.com/trivikrama1988/100-Days-of-Data-Engineering/tree/main".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetsConfig {
    pub stylesheet: String,
    pub icon_font: String,
    pub script: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            stylesheet: "../styles.css".into(),
            icon_font: "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css"
                .into(),
            script: "../assets/js/day-navigation.js".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurriculumConfig {
    /// Number of days in the curriculum. Bounds "next" links and progress bars.
    pub total_days: u32,
    /// Exercise excerpt length on index cards, in characters.
    pub excerpt_chars: usize,
}

impl Default for CurriculumConfig {
    fn default() -> Self {
        Self {
            total_days: 100,
            excerpt_chars: 80,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProgressConfig {
    /// `localStorage` key holding the JSON completion map.
    pub storage_key: String,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            storage_key: "de_progress".into(),
        }
    }
}

/// Returns the stock default config as a `toml::Value::Table`.
///
/// Base layer for merging user overrides on top.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
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

/// Read a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file doesn't exist; a missing config is not an
/// error, the stock defaults apply.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `path`, falling back to stock defaults when absent.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    resolve_config(load_raw_config(path)?)
}

/// Returns a fully-commented stock `curriculum.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# curriculum-site configuration
# =============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site
# ---------------------------------------------------------------------------
[site]
# Appended to every page title: "Day 1: Linux Kernel - <title>".
title = "100 Days of Data Engineering"

# Home icon target, relative to the generated day pages.
home_url = "../index.html"

# Base of the curriculum repository tree. Each day links to
# <repository_url>/<phase>/day-NN-<topic-slug>.
repository_url = "https://github.com/trivikrama1988/100-Days-of-Data-Engineering/tree/main"

# ---------------------------------------------------------------------------
# Shared assets (referenced, not generated)
# ---------------------------------------------------------------------------
[assets]
stylesheet = "../styles.css"
icon_font = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css"
script = "../assets/js/day-navigation.js"

# ---------------------------------------------------------------------------
# Curriculum
# ---------------------------------------------------------------------------
[curriculum]
# Last day number. Day pages below this link to the next day, and the
# footer progress bar is day * 100 / total_days percent.
total_days = 100

# Characters of exercise text shown on index cards before "...".
excerpt_chars = 80

# ---------------------------------------------------------------------------
# Progress tracking
# ---------------------------------------------------------------------------
[progress]
# localStorage key for the completion map shared by all generated pages.
storage_key = "de_progress"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_valid() {
        SiteConfig::default().validate().unwrap();
    }

    #[test]
    fn defaults_match_original_site() {
        let c = SiteConfig::default();
        assert_eq!(c.curriculum.total_days, 100);
        assert_eq!(c.curriculum.excerpt_chars, 80);
        assert_eq!(c.progress.storage_key, "de_progress");
        assert_eq!(c.assets.stylesheet, "../styles.css");
    }

    #[test]
    fn stock_config_toml_parses_to_defaults() {
        let value: toml::Value = toml::from_str(stock_config_toml()).unwrap();
        let config = resolve_config(Some(value)).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn missing_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("curriculum.toml")).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("curriculum.toml");
        fs::write(&path, "[site]\ntitle = \"30 Days of Rust\"\n\n[curriculum]\ntotal_days = 30\n")
            .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.site.title, "30 Days of Rust");
        assert_eq!(config.curriculum.total_days, 30);
        assert_eq!(config.curriculum.excerpt_chars, 80);
        assert_eq!(config.site.home_url, "../index.html");
    }

    #[test]
    fn unknown_key_rejected() {
        let overlay: toml::Value = toml::from_str("[site]\ntitel = \"typo\"\n").unwrap();
        let result = resolve_config(Some(overlay));
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_section_rejected() {
        let overlay: toml::Value = toml::from_str("[theme]\ndark = true\n").unwrap();
        assert!(resolve_config(Some(overlay)).is_err());
    }

    #[test]
    fn zero_total_days_rejected() {
        let overlay: toml::Value = toml::from_str("[curriculum]\ntotal_days = 0\n").unwrap();
        let result = resolve_config(Some(overlay));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn zero_excerpt_rejected() {
        let overlay: toml::Value = toml::from_str("[curriculum]\nexcerpt_chars = 0\n").unwrap();
        assert!(matches!(
            resolve_config(Some(overlay)),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn blank_storage_key_rejected() {
        let overlay: toml::Value = toml::from_str("[progress]\nstorage_key = \"  \"\n").unwrap();
        assert!(matches!(
            resolve_config(Some(overlay)),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("curriculum.toml");
        fs::write(&path, "[site\ntitle = ").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn merge_overlay_wins_and_base_preserved() {
        let base: toml::Value = toml::from_str("a = 1\n[t]\nx = 1\ny = 2\n").unwrap();
        let overlay: toml::Value = toml::from_str("[t]\ny = 3\nz = 4\n").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["a"].as_integer(), Some(1));
        assert_eq!(merged["t"]["x"].as_integer(), Some(1));
        assert_eq!(merged["t"]["y"].as_integer(), Some(3));
        assert_eq!(merged["t"]["z"].as_integer(), Some(4));
    }
}
