//! # Roastplan Core Library
//!
//! This library provides the core planning logic for Roastplan, a task
//! planner that turns optimistic duration estimates into "realistic"
//! predictions and roasts the user when the two drift apart. All operations
//! are available through the [`Planner`] facade so a CLI binary or desktop
//! shell stays a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Predictor**: A least-squares line fitted once over a small
//!   calibration table of estimated vs actual hours
//! - **Plan Composer**: Renders the priority-ordered plan text with margin
//!   bands, roast lines and a totals footer
//! - **Chart Builder**: Flattens tasks into parallel series for an external
//!   plotting surface
//! - **Roast Generator**: Seeded template-and-filler one-liners
//!
//! ## Key Components
//!
//! - [`Planner`]: Engine facade owning store, predictor and roaster
//! - [`LinearPredictor`]: Fitted prediction model behind the [`Predictor`] trait
//! - [`PlanComposer`]: Plan text rendering
//! - [`ChartSeries`]: Chart-ready parallel vectors
//! - [`PlannerConfig`]: TOML-backed tuning knobs

pub mod task;
pub mod predict;
pub mod roast;
pub mod plan;
pub mod chart;
pub mod planner;
pub mod config;
pub mod error;

pub use task::{Priority, Task, TaskStore};
pub use predict::{CalibrationTable, LinearPredictor, Prediction, Predictor};
pub use roast::RoastGenerator;
pub use plan::{PlanComposer, EMPTY_PLAN_MESSAGE};
pub use chart::ChartSeries;
pub use planner::Planner;
pub use config::PlannerConfig;
pub use error::{ConfigError, InvalidPriorityError, InvalidTaskError, PlannerError};
