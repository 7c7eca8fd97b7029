use crate::core::frontier::DEFAULT_RISK_AVERSION;
use crate::core::overlay::{DEFAULT_SAMPLES, OverlayOptions};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

pub const DEFAULT_YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct YahooProviderConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub yahoo: Option<YahooProviderConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            yahoo: Some(YahooProviderConfig {
                base_url: DEFAULT_YAHOO_BASE_URL.to_string(),
            }),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct OverlayConfig {
    pub samples: usize,
    pub risk_aversion: f64,
    pub risk_free_rate: f64,
    pub show_assets: bool,
    pub show_base_frontier: bool,
    /// Fixed seed for the random portfolio cloud; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        OverlayConfig {
            samples: DEFAULT_SAMPLES,
            risk_aversion: DEFAULT_RISK_AVERSION,
            risk_free_rate: 0.02,
            show_assets: true,
            show_base_frontier: true,
            seed: None,
        }
    }
}

impl OverlayConfig {
    pub fn options(&self) -> OverlayOptions {
        OverlayOptions {
            samples: self.samples,
            risk_aversion: self.risk_aversion,
            show_assets: self.show_assets,
            show_base_frontier: self.show_base_frontier,
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub overlay: OverlayConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "ndxfolio", "ndxfolio")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn yahoo_base_url(&self) -> &str {
        self.providers
            .yahoo
            .as_ref()
            .map_or(DEFAULT_YAHOO_BASE_URL, |p| &p.base_url)
    }
}
