//! Duration prediction from calibration data.
//!
//! A least-squares line is fitted once over a small calibration table of
//! estimated vs actual hours, then reused for every prediction. Each
//! prediction carries a symmetric margin band around the point value so
//! callers can show a best/worst range instead of a single number.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default margin band width as a fraction of the predicted value.
pub const DEFAULT_MARGIN_RATIO: f64 = 0.25;

/// Calibration samples the predictor is fitted on.
///
/// Two parallel columns: what was estimated and what it actually took,
/// both in hours. The builtin table encodes the usual drift of optimistic
/// estimates, actuals running ahead of estimates and pulling further away
/// as tasks grow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationTable {
    pub estimated: Vec<f64>,
    pub actual: Vec<f64>,
}

impl CalibrationTable {
    /// The builtin eight-point table.
    pub fn builtin() -> Self {
        Self {
            estimated: vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0],
            actual: vec![1.4, 2.6, 3.2, 4.8, 5.5, 7.1, 8.3, 9.2],
        }
    }

    pub fn len(&self) -> usize {
        self.estimated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.estimated.is_empty()
    }

    /// Check that a least-squares fit over this table is well defined.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.estimated.len() != self.actual.len() {
            return Err(ConfigError::CalibrationMismatch {
                estimates: self.estimated.len(),
                actuals: self.actual.len(),
            });
        }
        if self.estimated.len() < 2 {
            return Err(ConfigError::CalibrationTooSmall {
                points: self.estimated.len(),
            });
        }
        if self
            .estimated
            .iter()
            .chain(self.actual.iter())
            .any(|v| !v.is_finite())
        {
            return Err(ConfigError::CalibrationNotFinite);
        }
        let first = self.estimated[0];
        if self.estimated.iter().all(|&x| x == first) {
            return Err(ConfigError::CalibrationDegenerate);
        }
        Ok(())
    }
}

impl Default for CalibrationTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Point prediction with its margin band, all in hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub predicted: f64,
    pub lower: f64,
    pub upper: f64,
}

/// Capability to turn a duration estimate into a prediction with margins.
///
/// The plan composer and chart builder depend on this seam only, so a
/// different model or margin policy can be swapped in without touching
/// either of them.
pub trait Predictor {
    fn predict(&self, estimated_hours: f64) -> Prediction;
}

/// Ordinary least-squares line over a calibration table.
///
/// Fitted once at construction; predictions afterwards are a single
/// multiply-add and never fail. The raw line is used as-is: no clamping,
/// so very small estimates can predict proportionally large overruns and
/// a pathological table could even predict negative hours.
#[derive(Debug, Clone)]
pub struct LinearPredictor {
    slope: f64,
    intercept: f64,
    margin_ratio: f64,
}

impl LinearPredictor {
    /// Fit on a calibration table with the default margin ratio.
    pub fn fit(table: &CalibrationTable) -> Result<Self, ConfigError> {
        Self::with_margin(table, DEFAULT_MARGIN_RATIO)
    }

    /// Fit on a calibration table with a custom margin ratio.
    pub fn with_margin(table: &CalibrationTable, margin_ratio: f64) -> Result<Self, ConfigError> {
        if !margin_ratio.is_finite() || !(0.0..1.0).contains(&margin_ratio) {
            return Err(ConfigError::InvalidValue {
                key: "margin_ratio".to_string(),
                message: format!("must be in [0, 1), got {margin_ratio}"),
            });
        }
        table.validate()?;

        let n = table.estimated.len() as f64;
        let mean_est = table.estimated.iter().sum::<f64>() / n;
        let mean_act = table.actual.iter().sum::<f64>() / n;

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for (x, y) in table.estimated.iter().zip(table.actual.iter()) {
            sxx += (x - mean_est) * (x - mean_est);
            sxy += (x - mean_est) * (y - mean_act);
        }

        // sxx > 0 after the degenerate check in validate()
        let slope = sxy / sxx;
        let intercept = mean_act - slope * mean_est;

        Ok(Self {
            slope,
            intercept,
            margin_ratio,
        })
    }

    /// Slope of the fitted line (predicted hours per estimated hour).
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Intercept of the fitted line in hours.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn margin_ratio(&self) -> f64 {
        self.margin_ratio
    }
}

impl Predictor for LinearPredictor {
    fn predict(&self, estimated_hours: f64) -> Prediction {
        let predicted = self.slope * estimated_hours + self.intercept;
        let margin = predicted * self.margin_ratio;
        Prediction {
            predicted,
            lower: predicted - margin,
            upper: predicted + margin,
        }
    }
}
