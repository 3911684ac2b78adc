//! Core error types for roastplan-core.
//!
//! This module defines the error hierarchy using thiserror: one top-level
//! error with focused sub-errors for task validation, priority parsing,
//! and configuration problems.

use thiserror::Error;

/// Core error type for roastplan-core.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Task validation errors
    #[error("Invalid task: {0}")]
    Task(#[from] InvalidTaskError),

    /// Priority parsing errors
    #[error("Invalid priority: {0}")]
    Priority(#[from] InvalidPriorityError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Task validation errors.
///
/// Raised only at the add-task boundary; every task that exists in a store
/// has already passed these checks.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidTaskError {
    /// Task name is empty or whitespace only
    #[error("Task name must not be empty")]
    EmptyName,

    /// Estimate is zero or negative
    #[error("Estimated hours must be positive, got {hours}")]
    NonPositiveHours { hours: f64 },

    /// Estimate is NaN or infinite
    #[error("Estimated hours must be a finite number")]
    NonFiniteHours,
}

/// Priority text outside the closed three-value scale.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown priority '{0}' (expected high, medium or low)")]
pub struct InvalidPriorityError(pub String);

/// Configuration-specific errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Calibration columns differ in length
    #[error("Calibration table is malformed: {estimates} estimates vs {actuals} actuals")]
    CalibrationMismatch { estimates: usize, actuals: usize },

    /// Not enough calibration points to fit a line
    #[error("Calibration table needs at least 2 points, got {points}")]
    CalibrationTooSmall { points: usize },

    /// All calibration estimates identical, the fit would divide by zero
    #[error("Calibration table is degenerate: all estimates are identical")]
    CalibrationDegenerate,

    /// Calibration contains NaN or infinite samples
    #[error("Calibration table contains non-finite values")]
    CalibrationNotFinite,

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for PlannerError
pub type Result<T, E = PlannerError> = std::result::Result<T, E>;
