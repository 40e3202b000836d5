//! CLI for bellsim — a hidden-variable Bell-test experiment in your terminal.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bellsim")]
#[command(about = "bellsim — a hidden-variable Bell-test experiment in your terminal")]
#[command(version = bellsim_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one measurement series at a fixed pair of detector angles
    Run {
        /// Detector angle 1 in degrees
        #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
        angle1: f64,

        /// Detector angle 2 in degrees
        #[arg(long, default_value = "22.5", allow_hyphen_values = true)]
        angle2: f64,

        /// Number of trials in the series
        #[arg(long, default_value = "100000")]
        trials: u32,

        /// Generator seed (defaults to the strategy's fixed demo seed)
        #[arg(long)]
        seed: Option<u64>,

        /// Random source strategy
        #[arg(long, default_value = "lcg64", value_parser = ["lcg64", "lehmer16"])]
        generator: String,

        /// Also print the 8-counter frequency table
        #[arg(long)]
        table: bool,

        /// Print a machine-readable JSON report instead of the text table
        #[arg(long)]
        json: bool,
    },

    /// The four canonical Bell-test angle pairs, nominal vs. measured
    Pairs {
        /// Number of trials per series
        #[arg(long, default_value = "10000")]
        trials: u32,

        /// Generator seed (defaults to the strategy's fixed demo seed)
        #[arg(long)]
        seed: Option<u64>,

        /// Random source strategy
        #[arg(long, default_value = "lcg64", value_parser = ["lcg64", "lehmer16"])]
        generator: String,

        /// Print a machine-readable JSON report instead of the text table
        #[arg(long)]
        json: bool,
    },

    /// Sweep detector angle 1 in 11.25° steps at a fixed angle separation
    Sweep {
        /// Angle separation angle2 - angle1 in degrees
        #[arg(long, default_value = "22.5", allow_hyphen_values = true)]
        delta: f64,

        /// Number of sweep positions
        #[arg(long, default_value = "33")]
        steps: u32,

        /// Number of trials per series
        #[arg(long, default_value = "100000")]
        trials: u32,

        /// Generator seed (defaults to the strategy's fixed demo seed)
        #[arg(long)]
        seed: Option<u64>,

        /// Random source strategy
        #[arg(long, default_value = "lcg64", value_parser = ["lcg64", "lehmer16"])]
        generator: String,

        /// Print a machine-readable JSON report instead of the text table
        #[arg(long)]
        json: bool,
    },

    /// List the registered random-source strategies
    Generators,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            angle1,
            angle2,
            trials,
            seed,
            generator,
            table,
            json,
        } => commands::run::run(commands::run::RunCommandConfig {
            angle1_deg: angle1,
            angle2_deg: angle2,
            trials,
            seed,
            generator: &generator,
            show_table: table,
            json,
        }),
        Commands::Pairs {
            trials,
            seed,
            generator,
            json,
        } => commands::pairs::run(trials, seed, &generator, json),
        Commands::Sweep {
            delta,
            steps,
            trials,
            seed,
            generator,
            json,
        } => commands::sweep::run(commands::sweep::SweepCommandConfig {
            delta_deg: delta,
            steps,
            trials,
            seed,
            generator: &generator,
            json,
        }),
        Commands::Generators => commands::generators::run(),
    }
}
