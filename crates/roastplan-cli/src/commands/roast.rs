//! Roast command: print standalone roast lines.

use roastplan_core::RoastGenerator;

pub fn run(seed: Option<u64>, count: usize) -> Result<(), Box<dyn std::error::Error>> {
    let mut roaster = match seed {
        Some(seed) => RoastGenerator::with_seed(seed),
        None => RoastGenerator::new(),
    };

    for _ in 0..count {
        println!("{}", roaster.generate());
    }
    Ok(())
}
