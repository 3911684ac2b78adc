//! CLI command implementations and shared input parsing.

use std::path::Path;

use roastplan_core::{Planner, PlannerConfig, Priority};

pub mod chart;
pub mod plan;
pub mod roast;

/// Parse a task spec of the form `NAME:HOURS[:PRIORITY]`.
///
/// Fields are split from the right so task names may contain colons. A
/// two-field spec defaults the priority to medium; a three-field spec whose
/// last field is not a known priority reports the unknown priority rather
/// than misreading it as hours.
pub fn parse_task_spec(spec: &str) -> Result<(String, f64, Priority), Box<dyn std::error::Error>> {
    let (rest, last) = spec
        .rsplit_once(':')
        .ok_or(format!("invalid task spec '{spec}', expected NAME:HOURS[:PRIORITY]"))?;

    match last.parse::<Priority>() {
        Ok(priority) => {
            let (name, hours) = rest
                .rsplit_once(':')
                .ok_or(format!("invalid task spec '{spec}', expected NAME:HOURS[:PRIORITY]"))?;
            Ok((name.to_string(), parse_hours(hours, spec)?, priority))
        }
        Err(unknown_priority) => {
            // Two-field form with `last` as hours, unless the field before
            // it already parses as hours; then `last` was meant as the
            // priority and that is the mistake to report.
            let three_fields_with_hours = rest
                .rsplit_once(':')
                .is_some_and(|(_, hours)| hours.trim().parse::<f64>().is_ok());
            if three_fields_with_hours && last.trim().parse::<f64>().is_err() {
                return Err(unknown_priority.into());
            }
            Ok((rest.to_string(), parse_hours(last, spec)?, Priority::default()))
        }
    }
}

fn parse_hours(field: &str, spec: &str) -> Result<f64, Box<dyn std::error::Error>> {
    field
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid hours '{field}' in task spec '{spec}'").into())
}

/// Read a TOML config file, or fall back to defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<PlannerConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
            Ok(PlannerConfig::from_toml_str(&content)?)
        }
        None => Ok(PlannerConfig::default()),
    }
}

/// Build a planner holding the parsed task specs.
pub fn build_planner(
    config: &PlannerConfig,
    specs: &[String],
) -> Result<Planner, Box<dyn std::error::Error>> {
    let mut planner = Planner::new(config)?;
    for spec in specs {
        let (name, hours, priority) = parse_task_spec(spec)?;
        planner.add_task(&name, hours, priority)?;
    }
    Ok(planner)
}
