//! Configuration schema definitions and loading.
//!
//! Defines the configuration structure: general settings (logging) and the
//! tuning of modem aggregation. All configurations are serializable to/from
//! TOML format and every field has a default, so a missing or partial file is
//! fine.

mod aggregation;
mod general;
mod paths;


pub use aggregation::AggregationConfig;
pub use general::{GeneralConfig, LogFormat, LogLevel};
pub use paths::ConfigPaths;

use std::{fs, path::Path};

use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{Result, SnapshotError};

/// Main configuration structure.
///
/// Represents the complete configuration schema that can be loaded
/// from TOML files. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Modem query settings.
    #[serde(default)]
    pub aggregation: AggregationConfig,
}

impl Config {
    /// JSON Schema of the configuration file.
    pub fn schema() -> Schema {
        schema_for!(Config)
    }

    /// Load the configuration from the default location.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    /// Returns error if the config directory cannot be determined, or the file
    /// exists but cannot be read, parsed or validated.
    #[instrument]
    pub fn load() -> Result<Self> {
        let path = ConfigPaths::main_config()?;
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load the configuration from an explicit file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed or validated.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| SnapshotError::io(e, path))?;
        Self::from_toml_str(&content, Some(path))
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    /// Returns error if the TOML is malformed or a value is out of range.
    pub fn from_toml_str(content: &str, path: Option<&Path>) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| SnapshotError::toml_parse(e, path))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.aggregation.max_concurrent_devices == 0 {
            return Err(SnapshotError::ConfigValidation {
                component: "aggregation".to_string(),
                details: "max_concurrent_devices must be at least 1".to_string(),
            });
        }

        if self.aggregation.sub_query_timeout_ms == 0 {
            return Err(SnapshotError::ConfigValidation {
                component: "aggregation".to_string(),
                details: "sub_query_timeout_ms must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}
