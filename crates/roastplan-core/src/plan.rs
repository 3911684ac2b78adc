//! Roast plan rendering.
//!
//! Composes the plain-text plan a UI shell displays verbatim: tasks in
//! priority order with predicted durations and margin bands, a roast line
//! under every task whose prediction runs well past its estimate, and a
//! totals footer with an aggregate warning when the whole plan drifts.

use crate::predict::Predictor;
use crate::roast::RoastGenerator;
use crate::task::Task;

/// Per-task overrun ratio above which a roast line is added.
pub const DEFAULT_ROAST_THRESHOLD: f64 = 1.15;

/// Aggregate overrun ratio above which the closing warning is added.
pub const DEFAULT_TOTAL_THRESHOLD: f64 = 1.2;

/// Shown instead of a plan when no tasks have been added.
pub const EMPTY_PLAN_MESSAGE: &str = "No tasks yet. Add some to get roasted!";

/// Renders the roast plan text.
#[derive(Debug, Clone)]
pub struct PlanComposer {
    roast_threshold: f64,
    total_threshold: f64,
}

impl PlanComposer {
    /// Composer with the default thresholds.
    pub fn new() -> Self {
        Self::with_thresholds(DEFAULT_ROAST_THRESHOLD, DEFAULT_TOTAL_THRESHOLD)
    }

    /// Composer with custom per-task and aggregate thresholds.
    pub fn with_thresholds(roast_threshold: f64, total_threshold: f64) -> Self {
        Self {
            roast_threshold,
            total_threshold,
        }
    }

    /// Render the plan for `tasks`.
    ///
    /// Tasks are ordered high, medium, low with insertion order preserved
    /// inside each band. Both thresholds compare strictly: a prediction
    /// sitting exactly on the line draws no roast and no warning.
    pub fn compose<P: Predictor>(
        &self,
        tasks: &[Task],
        predictor: &P,
        roaster: &mut RoastGenerator,
    ) -> String {
        if tasks.is_empty() {
            return EMPTY_PLAN_MESSAGE.to_string();
        }

        let mut ordered: Vec<&Task> = tasks.iter().collect();
        ordered.sort_by_key(|t| t.priority.rank());

        let mut plan = String::from("AI Powered Roast Plan:\n\n");
        let mut total_est = 0.0;
        let mut total_pred = 0.0;

        for (i, task) in ordered.iter().enumerate() {
            let pred = predictor.predict(task.estimated_hours);
            total_est += task.estimated_hours;
            total_pred += pred.predicted;

            plan.push_str(&format!(
                "{}. {} ({})\n",
                i + 1,
                task.name,
                task.priority.label()
            ));
            plan.push_str(&format!(
                "   Est: {}h → Predicted: {:.1}h (Margins: {:.1}-{:.1}h)\n",
                task.estimated_hours, pred.predicted, pred.lower, pred.upper
            ));
            if pred.predicted > task.estimated_hours * self.roast_threshold {
                plan.push_str(&format!("   🔥 {}\n", roaster.generate()));
            }
            plan.push('\n');
        }

        plan.push_str(&format!(
            "Total Est: {:.1}h | Realistic (ML): {:.1}h\n",
            total_est, total_pred
        ));
        if total_pred > total_est * self.total_threshold {
            plan.push_str(
                "\nYou're underestimating big time. AI says: Adjust or fail spectacularly.",
            );
        }

        plan
    }
}

impl Default for PlanComposer {
    fn default() -> Self {
        Self::new()
    }
}
