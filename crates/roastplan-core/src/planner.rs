//! Planner engine facade.
//!
//! Owns the task store, the fitted predictor, and the roast generator, and
//! exposes the operations a UI shell drives: add a task, render the plan,
//! derive the chart series. Construction fits the predictor once; after
//! that every operation is infallible except task validation.

use crate::chart::ChartSeries;
use crate::config::PlannerConfig;
use crate::error::Result;
use crate::plan::PlanComposer;
use crate::predict::LinearPredictor;
use crate::roast::RoastGenerator;
use crate::task::{Priority, Task, TaskStore};

/// The planning engine.
pub struct Planner {
    store: TaskStore,
    predictor: LinearPredictor,
    roaster: RoastGenerator,
    composer: PlanComposer,
}

impl Planner {
    /// Build a planner with an empty task store.
    pub fn new(config: &PlannerConfig) -> Result<Self> {
        Self::with_store(config, TaskStore::new())
    }

    /// Build a planner over an existing store.
    pub fn with_store(config: &PlannerConfig, store: TaskStore) -> Result<Self> {
        config.validate()?;
        let table = config.calibration_table();
        let predictor = LinearPredictor::with_margin(&table, config.margin_ratio)?;
        let roaster = match config.roast_seed {
            Some(seed) => RoastGenerator::with_seed(seed),
            None => RoastGenerator::new(),
        };
        let composer =
            PlanComposer::with_thresholds(config.roast_threshold, config.total_threshold);

        Ok(Self {
            store,
            predictor,
            roaster,
            composer,
        })
    }

    // ── Operations ──────────────────────────────────────────────────────

    /// Validate and append a task.
    pub fn add_task(
        &mut self,
        name: &str,
        estimated_hours: f64,
        priority: Priority,
    ) -> Result<()> {
        let task = Task::new(name, estimated_hours, priority)?;
        self.store.add(task);
        Ok(())
    }

    /// Render the roast plan for the current tasks.
    ///
    /// Takes `&mut self` because roast wording advances the generator's
    /// RNG; two consecutive calls on an unseeded planner may word their
    /// roasts differently while all numbers stay identical.
    pub fn generate_plan(&mut self) -> String {
        self.composer
            .compose(self.store.tasks(), &self.predictor, &mut self.roaster)
    }

    /// Chart series for the current tasks, in insertion order.
    pub fn chart_series(&self) -> ChartSeries {
        ChartSeries::from_tasks(self.store.tasks(), &self.predictor)
    }

    // ── Queries ─────────────────────────────────────────────────────────

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// The fitted predictor.
    pub fn predictor(&self) -> &LinearPredictor {
        &self.predictor
    }

    /// Drop all tasks.
    pub fn clear_tasks(&mut self) {
        self.store.clear();
    }
}
