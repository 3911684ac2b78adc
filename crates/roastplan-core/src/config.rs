//! TOML-based planner configuration.
//!
//! Tuning knobs for the engine:
//! - Margin band width around predictions
//! - Per-task roast threshold and aggregate warning threshold
//! - Optional fixed seed for roast wording
//! - Optional custom calibration table
//!
//! The core only parses TOML text; reading config files from disk is left
//! to the shell so the engine itself performs no I/O.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::plan::{DEFAULT_ROAST_THRESHOLD, DEFAULT_TOTAL_THRESHOLD};
use crate::predict::{CalibrationTable, DEFAULT_MARGIN_RATIO};

/// Planner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Margin band width as a fraction of the predicted value.
    #[serde(default = "default_margin_ratio")]
    pub margin_ratio: f64,
    /// Per-task overrun ratio above which a roast line is added.
    #[serde(default = "default_roast_threshold")]
    pub roast_threshold: f64,
    /// Aggregate overrun ratio above which the closing warning is added.
    #[serde(default = "default_total_threshold")]
    pub total_threshold: f64,
    /// Fixed seed for roast wording (None = entropy).
    #[serde(default)]
    pub roast_seed: Option<u64>,
    /// Custom calibration table; the builtin eight-point table when absent.
    #[serde(default)]
    pub calibration: Option<CalibrationTable>,
}

// Default functions
fn default_margin_ratio() -> f64 {
    DEFAULT_MARGIN_RATIO
}
fn default_roast_threshold() -> f64 {
    DEFAULT_ROAST_THRESHOLD
}
fn default_total_threshold() -> f64 {
    DEFAULT_TOTAL_THRESHOLD
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            margin_ratio: default_margin_ratio(),
            roast_threshold: default_roast_threshold(),
            total_threshold: default_total_threshold(),
            roast_seed: None,
            calibration: None,
        }
    }
}

impl PlannerConfig {
    /// Parse from TOML text and validate.
    ///
    /// Missing keys fall back to their defaults, so the empty string
    /// parses to `PlannerConfig::default()`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or a value is out
    /// of range.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: PlannerConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges. The calibration table itself is validated when
    /// the predictor is fitted on it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.margin_ratio.is_finite() || !(0.0..1.0).contains(&self.margin_ratio) {
            return Err(ConfigError::InvalidValue {
                key: "margin_ratio".to_string(),
                message: format!("must be in [0, 1), got {}", self.margin_ratio),
            });
        }
        if !self.roast_threshold.is_finite() || self.roast_threshold <= 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "roast_threshold".to_string(),
                message: format!("must be a positive number, got {}", self.roast_threshold),
            });
        }
        if !self.total_threshold.is_finite() || self.total_threshold <= 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "total_threshold".to_string(),
                message: format!("must be a positive number, got {}", self.total_threshold),
            });
        }
        Ok(())
    }

    /// The calibration table to fit on.
    pub fn calibration_table(&self) -> CalibrationTable {
        self.calibration.clone().unwrap_or_default()
    }
}
