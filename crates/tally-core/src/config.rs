//! Stats engine configuration
//!
//! Config is loaded with a layered resolution:
//! 1. An explicit path, when one is given and exists
//! 2. The override in the data dir (~/.local/share/tally/config/stats.toml)
//! 3. Embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/stats.toml");

/// Top-N days reported per user unless configured otherwise
pub const DEFAULT_TOP_DAYS_LIMIT: usize = 3;

/// Months averaged by the forecaster unless configured otherwise
pub const DEFAULT_FORECAST_WINDOW: usize = 3;

/// Tunables for the stats engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsConfig {
    /// Maximum number of days in each user's top-days list
    pub top_days_limit: usize,
    /// Number of most recent months averaged for the forecast
    pub forecast_window: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            top_days_limit: DEFAULT_TOP_DAYS_LIMIT,
            forecast_window: DEFAULT_FORECAST_WINDOW,
        }
    }
}

impl StatsConfig {
    /// Load from the data-dir override, falling back to embedded defaults
    pub fn load() -> Result<Self> {
        load_config(None)
    }

    /// Load from `path` if it exists, otherwise resolve as [`StatsConfig::load`]
    pub fn load_from(path: &Path) -> Result<Self> {
        load_config(Some(path))
    }

    /// Parse config from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        parse_config(content)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("tally").join("config").join("stats.toml"))
}

fn load_config(override_path: Option<&Path>) -> Result<StatsConfig> {
    let explicit = override_path.filter(|p| p.exists()).map(Path::to_path_buf);
    if let Some(path) = override_path {
        if explicit.is_none() {
            warn!("Config file {} not found, using defaults", path.display());
        }
    }

    let path = explicit.or_else(|| default_config_path().filter(|p| p.exists()));

    let content = match path {
        Some(path) => {
            debug!("Loading stats config from {}", path.display());
            fs::read_to_string(&path)?
        }
        None => DEFAULT_CONFIG.to_string(),
    };

    parse_config(&content)
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    top_days: Option<RawTopDays>,
    forecast: Option<RawForecast>,
}

#[derive(Debug, Deserialize)]
struct RawTopDays {
    limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct RawForecast {
    window: Option<usize>,
}

fn parse_config(content: &str) -> Result<StatsConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = StatsConfig::default();

    if let Some(limit) = raw.top_days.and_then(|t| t.limit) {
        config.top_days_limit = limit;
    }

    if let Some(window) = raw.forecast.and_then(|f| f.window) {
        if window == 0 {
            warn!("forecast.window = 0 is not meaningful, using 1");
        }
        config.forecast_window = window.max(1);
    }

    Ok(config)
}
