use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "roastplan-cli", version, about = "Roastplan CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose the roast plan for a set of tasks
    Plan {
        /// Task spec NAME:HOURS[:PRIORITY], repeatable
        #[arg(long = "task", value_name = "SPEC")]
        tasks: Vec<String>,
        /// Fixed seed for roast wording (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,
        /// Path to a TOML config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Emit chart series for a set of tasks as JSON
    Chart {
        /// Task spec NAME:HOURS[:PRIORITY], repeatable
        #[arg(long = "task", value_name = "SPEC")]
        tasks: Vec<String>,
        /// Path to a TOML config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print standalone roast lines
    Roast {
        /// Fixed seed for reproducible wording
        #[arg(long)]
        seed: Option<u64>,
        /// Number of roasts to print
        #[arg(long, default_value = "1")]
        count: usize,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Plan {
            tasks,
            seed,
            config,
        } => commands::plan::run(&tasks, seed, config.as_deref()),
        Commands::Chart { tasks, config } => commands::chart::run(&tasks, config.as_deref()),
        Commands::Roast { seed, count } => commands::roast::run(seed, count),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
