use serde::Serialize;

use super::SeriesRow;

/// Sweep step for detector angle 1: π/16 in degrees.
const STEP_DEG: f64 = 11.25;

pub struct SweepCommandConfig<'a> {
    pub delta_deg: f64,
    pub steps: u32,
    pub trials: u32,
    pub seed: Option<u64>,
    pub generator: &'a str,
    pub json: bool,
}

#[derive(Serialize)]
struct SweepReport<'a> {
    generator: &'a str,
    seed: Option<u64>,
    delta_deg: f64,
    series: Vec<SeriesRow>,
}

pub fn run(config: SweepCommandConfig) {
    if config.trials == 0 {
        eprintln!("--trials must be positive.");
        std::process::exit(1);
    }
    if config.steps == 0 {
        eprintln!("--steps must be positive.");
        std::process::exit(1);
    }

    let kind = super::generator_kind(config.generator);
    let mut rng = kind.build(config.seed);

    let series: Vec<SeriesRow> = (0..config.steps)
        .map(|i| {
            let angle1 = i as f64 * STEP_DEG;
            super::measure_series(rng.as_mut(), angle1, angle1 + config.delta_deg, config.trials)
        })
        .collect();

    if config.json {
        let report = SweepReport {
            generator: config.generator,
            seed: config.seed,
            delta_deg: config.delta_deg,
            series,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("report serialization")
        );
        return;
    }

    println!(
        "🔔 bellsim — sweep, angle2 - angle1 = {:.2}° ({} trials per position, generator {})\n",
        config.delta_deg, config.trials, config.generator
    );
    super::print_row_header();
    for row in &series {
        super::print_row(row);
    }
}
