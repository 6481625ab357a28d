// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::context::AppContext;
use anyhow::{Context, Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::time::Duration;

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}
fn default_events_path() -> String {
    "data/milongas.json".to_string()
}
fn default_teachers_path() -> String {
    "data/teachers.json".to_string()
}

fn default_viewport_width() -> u32 {
    1024
}
fn default_narrow_viewport_max() -> u32 {
    600
}
fn default_visible_narrow() -> usize {
    2
}
fn default_visible_wide() -> usize {
    5
}

fn default_announce_clear_secs() -> u64 {
    5
}

fn default_site_url() -> String {
    "https://tangotübingen.de/".to_string()
}
fn default_address_country() -> String {
    "DE".to_string()
}
fn default_user_agent() -> String {
    format!("tangoboard/{}", env!("CARGO_PKG_VERSION"))
}
fn default_page_title() -> String {
    "Tango in Tübingen".to_string()
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_events_path")]
    pub events_path: String,
    #[serde(default = "default_teachers_path")]
    pub teachers_path: String,

    /// Width of the display the page is rendered for, in CSS pixels.
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,
    #[serde(default = "default_narrow_viewport_max")]
    pub narrow_viewport_max: u32,
    #[serde(default = "default_visible_narrow")]
    pub default_visible_narrow: usize,
    #[serde(default = "default_visible_wide")]
    pub default_visible_wide: usize,

    #[serde(default = "default_announce_clear_secs")]
    pub announce_clear_secs: u64,

    /// Fallback offer URL for events without their own page.
    #[serde(default = "default_site_url")]
    pub site_url: String,
    #[serde(default = "default_address_country")]
    pub address_country: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_page_title")]
    pub page_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            events_path: default_events_path(),
            teachers_path: default_teachers_path(),
            viewport_width: default_viewport_width(),
            narrow_viewport_max: default_narrow_viewport_max(),
            default_visible_narrow: default_visible_narrow(),
            default_visible_wide: default_visible_wide(),
            announce_clear_secs: default_announce_clear_secs(),
            site_url: default_site_url(),
            address_country: default_address_country(),
            user_agent: default_user_agent(),
            page_title: default_page_title(),
        }
    }
}

impl Config {
    /// Load the configuration from disk using an explicit context.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Like `load`, but a missing file yields the defaults.
    /// A file that exists and cannot be parsed is still an error.
    pub fn load_or_default(ctx: &dyn AppContext) -> Result<Self> {
        match Self::load(ctx) {
            Ok(config) => Ok(config),
            Err(e) if Self::is_missing_config_error(&e) => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Detects whether an error means the config file was missing, either via the
    /// explicit message or an underlying IO `NotFound` anywhere in the chain.
    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }

        err.chain().any(|cause| {
            cause
                .downcast_ref::<std::io::Error>()
                .is_some_and(|io_err| io_err.kind() == std::io::ErrorKind::NotFound)
        })
    }

    /// Save configuration using an explicit context.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&path, toml_str)
            .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
        Ok(())
    }

    /// Number of milongas shown before any "show more", derived from the viewport.
    /// Batch size for "show more"; never 0, or the button would do nothing.
    pub fn default_visible(&self) -> usize {
        let count = if self.viewport_width <= self.narrow_viewport_max {
            self.default_visible_narrow
        } else {
            self.default_visible_wide
        };
        count.max(1)
    }

    pub fn announce_clear_after(&self) -> Duration {
        Duration::from_secs(self.announce_clear_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TestContext;

    #[test]
    fn test_missing_file_yields_defaults() {
        let ctx = TestContext::new();
        let err = Config::load(&ctx).unwrap_err();
        assert!(Config::is_missing_config_error(&err));

        let config = Config::load_or_default(&ctx).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let ctx = TestContext::new();
        let path = ctx.get_config_file_path().unwrap();
        fs::write(&path, "base_url = \"https://example.org\"\nviewport_width = 400\n").unwrap();

        let config = Config::load(&ctx).unwrap();
        assert_eq!(config.base_url, "https://example.org");
        assert_eq!(config.events_path, "data/milongas.json");
        assert_eq!(config.default_visible(), 2);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let ctx = TestContext::new();
        let path = ctx.get_config_file_path().unwrap();
        fs::write(&path, "viewport_width = \"wide\"").unwrap();

        let err = Config::load_or_default(&ctx).unwrap_err();
        assert!(!Config::is_missing_config_error(&err));
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_save_then_load() {
        let ctx = TestContext::new();
        let config = Config {
            viewport_width: 320,
            announce_clear_secs: 3,
            ..Config::default()
        };
        config.save(&ctx).unwrap();

        let loaded = Config::load(&ctx).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.announce_clear_after(), Duration::from_secs(3));
    }

    #[test]
    fn test_default_visible_breakpoint() {
        let mut config = Config::default();
        config.viewport_width = 600;
        assert_eq!(config.default_visible(), 2);
        config.viewport_width = 601;
        assert_eq!(config.default_visible(), 5);
    }

    #[test]
    fn test_default_visible_at_least_one() {
        let mut config = Config {
            default_visible_narrow: 0,
            default_visible_wide: 0,
            ..Config::default()
        };
        config.viewport_width = 375;
        assert_eq!(config.default_visible(), 1);
        config.viewport_width = 1280;
        assert_eq!(config.default_visible(), 1);
    }
}
