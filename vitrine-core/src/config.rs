//! src/config.rs
//! ============================================================================
//! # Config: Application Configuration Loader and Saver
//!
//! Manages all user-editable settings for the catalog browser. Loads and
//! saves settings as TOML from the proper cross-platform config path using
//! the [`directories`](https://docs.rs/directories) crate.
//!
//! ## Features
//! - XDG-compliant config discovery and writing (Linux, macOS, Windows)
//! - Robust defaulting if no config file exists
//! - Async load/save for smooth integration with Tokio

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use tokio::fs as TokioFs;

/// Default catalog endpoint the store is fetched from.
pub const DEFAULT_ENDPOINT: &str = "https://closet-recruiting-api.azurewebsites.net/api/data";

/// App theme (color scheme) selector.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,

    Light,

    Dark,
}

/// Main configuration struct for the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Catalog endpoint fetched once at startup.
    pub endpoint: String,

    /// Inactivity window before a search keystroke is committed.
    #[serde(with = "humantime_serde")]
    pub debounce_delay: Duration,

    /// Settling delay before the pagination sentinel is acted upon.
    #[serde(with = "humantime_serde")]
    pub settle_delay: Duration,

    /// Upper bound of the price-ceiling slider.
    pub price_ceiling_max: u32,

    /// Step the price-ceiling slider moves by.
    pub price_ceiling_step: u32,

    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            debounce_delay: Duration::from_millis(300),
            settle_delay: Duration::from_millis(300),
            price_ceiling_max: 999,
            price_ceiling_step: 5,
            theme: Theme::Default,
        }
    }
}

impl Config {
    /// Loads config from TOML file at the XDG-compliant app config dir, or
    /// returns defaults.
    ///
    /// The config is expected at `$XDG_CONFIG_HOME/Vitrine/config.toml`
    /// (Linux), or equivalent on Windows/macOS.
    pub async fn load() -> anyhow::Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            info!("Loading config from {}", path.display());
            let text = TokioFs::read_to_string(&path).await?;
            let cfg: Self = toml::from_str(&text)?;

            Ok(cfg)
        } else {
            info!(
                "No config file found at {}, using default configuration. Creating it now.",
                path.display()
            );

            let default_config = Self::default();
            default_config.save().await?;

            Ok(default_config)
        }
    }

    /// Saves config to TOML file at the XDG-compliant app config dir.
    pub async fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path()?;

        info!("Saving config to {}", path.display());

        if let Some(parent) = path.parent() {
            TokioFs::create_dir_all(parent).await?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        TokioFs::write(&path, toml_str).await?;

        Ok(())
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> anyhow::Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "vitrine", "Vitrine")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory."))?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_product_behavior() {
        let cfg = Config::default();
        assert_eq!(cfg.debounce_delay, Duration::from_millis(300));
        assert_eq!(cfg.settle_delay, Duration::from_millis(300));
        assert_eq!(cfg.price_ceiling_max, 999);
        assert_eq!(cfg.price_ceiling_step, 5);
    }

    #[test]
    fn roundtrips_through_toml() {
        let cfg = Config::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.endpoint, cfg.endpoint);
        assert_eq!(back.debounce_delay, cfg.debounce_delay);
        assert_eq!(back.price_ceiling_max, cfg.price_ceiling_max);
    }
}
