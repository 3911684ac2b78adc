//! Chart command: emit per-task series as JSON for an external plotting
//! surface.

use std::path::Path;

pub fn run(specs: &[String], config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(config_path)?;
    let planner = super::build_planner(&config, specs)?;
    println!("{}", serde_json::to_string_pretty(&planner.chart_series())?);
    Ok(())
}
