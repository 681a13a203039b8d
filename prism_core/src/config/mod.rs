//! Lab configuration, loadable from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::events::IntensityThresholds;
use crate::scorer::ScorerConfig;

/// Failure to load a lab configuration.
#[derive(Debug, Error)]
pub enum LabError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("intensity thresholds out of order: firm {firm} > radical {radical}")]
    IntensityOrder { firm: u8, radical: u8 },
}

/// Settings for the interactive lab. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// Quiet period after the last keystroke before re-scoring.
    pub debounce_ms: u64,

    pub scorer: ScorerConfig,

    pub intensity: IntensityThresholds,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 350,
            scorer: ScorerConfig::default(),
            intensity: IntensityThresholds::default(),
        }
    }
}

impl LabConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, LabError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints serde cannot express.
    pub fn validate(&self) -> Result<(), LabError> {
        if !self.intensity.is_ordered() {
            return Err(LabError::IntensityOrder {
                firm: self.intensity.firm,
                radical: self.intensity.radical,
            });
        }
        Ok(())
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LabError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
