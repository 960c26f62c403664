//! Client configuration.
//!
//! Read once at startup from `<config dir>/mauto/config.json`. Every field
//! has a default, so a missing file or a partial file is fine.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::Category;

/// Draft context offered before the user types their own.
pub const DEFAULT_DRAFT_CONTEXT: &str = "I haven't heard back yet. Keep it short and polite.";

/// Initial panel widths. Not persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Initial window width.
    pub viewport_width: f32,
    /// Initial window height.
    pub viewport_height: f32,
    /// Navigation rail width.
    pub nav_width: f32,
    /// Email list column width.
    pub list_width: f32,
    /// Attachment sidebar width.
    pub sidebar_width: f32,
    /// Attachment preview panel width.
    pub preview_width: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1440.0,
            viewport_height: 900.0,
            nav_width: 250.0,
            list_width: 380.0,
            sidebar_width: 360.0,
            preview_width: 560.0,
        }
    }
}

/// Settings for the triage client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Root of the triage API, e.g. `http://localhost:8000/api`.
    pub api_base_url: String,
    /// Wait after triggering a sync before the list is refetched.
    pub sync_settle_delay_ms: u64,
    /// Category shown at startup.
    pub default_category: Category,
    /// Initial context hint for draft generation.
    pub default_draft_context: String,
    /// Initial panel widths.
    pub layout: LayoutConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000/api".to_string(),
            sync_settle_delay_ms: 2000,
            default_category: Category::Jobs,
            default_draft_context: DEFAULT_DRAFT_CONTEXT.to_string(),
            layout: LayoutConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Default location of the configuration file.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mauto")
            .join("config.json")
    }

    /// Loads configuration from `path`, falling back to defaults if the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if it holds invalid values.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Config loaded from {:?}", path);
        Ok(config)
    }

    /// Settle delay as a [`Duration`].
    #[must_use]
    pub const fn sync_settle_delay(&self) -> Duration {
        Duration::from_millis(self.sync_settle_delay_ms)
    }

    fn validate(&self) -> Result<()> {
        let base = self.api_base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(Error::Config(format!(
                "api_base_url must be an http(s) URL, got {:?}",
                self.api_base_url
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("mauto-config-{}-{name}.json", std::process::id()))
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = ClientConfig::load_from(&temp_path("missing")).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.sync_settle_delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let path = temp_path("partial");
        std::fs::write(
            &path,
            r#"{"api_base_url": "https://triage.example.com/api", "default_category": "others", "layout": {"nav_width": 300}}"#,
        )
        .unwrap();

        let config = ClientConfig::load_from(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.api_base_url, "https://triage.example.com/api");
        assert_eq!(config.default_category, Category::Others);
        assert!((config.layout.nav_width - 300.0).abs() < f32::EPSILON);
        assert!((config.layout.list_width - 380.0).abs() < f32::EPSILON);
        assert_eq!(config.default_draft_context, DEFAULT_DRAFT_CONTEXT);
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let path = temp_path("invalid");
        std::fs::write(&path, r#"{"api_base_url": "localhost:8000"}"#).unwrap();

        let result = ClientConfig::load_from(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = temp_path("malformed");
        std::fs::write(&path, "{ nope").unwrap();

        let result = ClientConfig::load_from(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(Error::Serde(_))));
    }
}
