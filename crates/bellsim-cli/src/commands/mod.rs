//! Subcommand implementations and shared driver plumbing.

pub mod generators;
pub mod pairs;
pub mod run;
pub mod sweep;

use bellsim_core::{GeneratorKind, RandomSource, estimate_correlation, nominal_correlation,
    run_series};
use serde::Serialize;

/// Resolve a generator name from the command line.
pub(crate) fn generator_kind(name: &str) -> GeneratorKind {
    match GeneratorKind::parse(name) {
        Some(kind) => kind,
        None => {
            eprintln!("Unknown generator '{name}'.");
            std::process::exit(1);
        }
    }
}

/// One measured series, angles in degrees, ready for printing or JSON.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SeriesRow {
    pub angle1_deg: f64,
    pub angle2_deg: f64,
    pub trials: u32,
    pub nominal: f64,
    pub measured: f64,
}

/// Run one series and reduce it to a report row. The generator state evolves
/// across calls, so a multi-series run shares one stream end to end.
pub(crate) fn measure_series(
    rng: &mut dyn RandomSource,
    angle1_deg: f64,
    angle2_deg: f64,
    trials: u32,
) -> SeriesRow {
    let phi1 = angle1_deg.to_radians();
    let phi2 = angle2_deg.to_radians();
    let table = run_series(rng, phi1, phi2, trials);
    SeriesRow {
        angle1_deg,
        angle2_deg,
        trials,
        nominal: nominal_correlation(phi1, phi2),
        measured: estimate_correlation(&table, phi1, phi2),
    }
}

pub(crate) fn print_row_header() {
    println!(
        "  {:>10} {:>10} {:>12} {:>12} {:>10}",
        "angle1", "angle2", "nominal", "measured", "error"
    );
    println!("  {}", "-".repeat(58));
}

pub(crate) fn print_row(row: &SeriesRow) {
    println!(
        "  {:>9.2}° {:>9.2}° {:>12.5} {:>12.5} {:>10.5}",
        row.angle1_deg,
        row.angle2_deg,
        row.nominal,
        row.measured,
        (row.measured - row.nominal).abs()
    );
}
