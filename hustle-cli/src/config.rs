//! TOML configuration holding the starting input record.
//!
//! ```toml
//! [defaults]
//! hours_per_week = 10
//! hustle_type = "rideshare"
//! hourly_rate = 20
//! monthly_expenses = 50
//! ```
//!
//! Every key is optional; missing keys fall back to the built-in defaults.

use std::path::{Path, PathBuf};

use hustle_core::HustleInput;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "hustle-estimator.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    pub hours_per_week: Option<Decimal>,
    pub hustle_type: Option<String>,
    pub hourly_rate: Option<Decimal>,
    pub monthly_expenses: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
}

impl Config {
    pub fn from_toml_str(
        contents: &str,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads configuration.
    ///
    /// With an explicit path the file must exist. Without one, the default
    /// file is read if present and built-in defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let p = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !p.exists() {
                    debug!("no {DEFAULT_CONFIG_FILE} found; using built-in defaults");
                    return Ok(Self::default());
                }
                p
            }
        };

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml_str(&contents, &path)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// The starting record: built-in defaults overlaid with configured keys.
    pub fn starting_input(&self) -> HustleInput {
        let base = HustleInput::default();
        let d = &self.defaults;
        HustleInput {
            hours_per_week: d.hours_per_week.unwrap_or(base.hours_per_week),
            hustle_type: d.hustle_type.clone().unwrap_or(base.hustle_type),
            hourly_rate: d.hourly_rate.unwrap_or(base.hourly_rate),
            monthly_expenses: d.monthly_expenses.unwrap_or(base.monthly_expenses),
        }
    }
}
