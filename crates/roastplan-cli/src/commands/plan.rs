//! Plan command: compose and print the roast plan.

use std::path::Path;

pub fn run(
    specs: &[String],
    seed: Option<u64>,
    config_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = super::load_config(config_path)?;
    if let Some(seed) = seed {
        config.roast_seed = Some(seed);
    }

    let mut planner = super::build_planner(&config, specs)?;
    println!("{}", planner.generate_plan());
    Ok(())
}
