//! Chart-ready series data.
//!
//! Flattens tasks into parallel vectors a plotting surface can consume
//! directly: one label plus predicted/lower/upper values per task, in
//! insertion order. No pixels are produced here, only numbers and labels.

use serde::{Deserialize, Serialize};

use crate::predict::Predictor;
use crate::task::Task;

/// Longest label rendered before truncation.
pub const MAX_LABEL_CHARS: usize = 15;

/// Parallel per-task series for a margin chart.
///
/// All four vectors always have the same length, index i describing the
/// i-th task as inserted. Unlike the plan text, no priority ordering is
/// applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub predicted: Vec<f64>,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

impl ChartSeries {
    /// Build the series for `tasks` using `predictor`.
    pub fn from_tasks<P: Predictor>(tasks: &[Task], predictor: &P) -> Self {
        let mut series = Self {
            labels: Vec::with_capacity(tasks.len()),
            predicted: Vec::with_capacity(tasks.len()),
            lower: Vec::with_capacity(tasks.len()),
            upper: Vec::with_capacity(tasks.len()),
        };

        for task in tasks {
            let pred = predictor.predict(task.estimated_hours);
            series.labels.push(truncate_label(&task.name));
            series.predicted.push(pred.predicted);
            series.lower.push(pred.lower);
            series.upper.push(pred.upper);
        }

        series
    }

    /// Number of points in the series.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Shorten a task name for axis display.
///
/// Counts characters, not bytes, so multi-byte names are cut cleanly.
/// Names of exactly the limit pass through untouched.
fn truncate_label(name: &str) -> String {
    if name.chars().count() > MAX_LABEL_CHARS {
        let head: String = name.chars().take(MAX_LABEL_CHARS).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}
