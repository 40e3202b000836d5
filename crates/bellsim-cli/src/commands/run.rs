use bellsim_core::{FrequencyTable, Orientation, Tag, estimate_correlation, nominal_correlation,
    run_series};
use serde::Serialize;

pub struct RunCommandConfig<'a> {
    pub angle1_deg: f64,
    pub angle2_deg: f64,
    pub trials: u32,
    pub seed: Option<u64>,
    pub generator: &'a str,
    pub show_table: bool,
    pub json: bool,
}

#[derive(Serialize)]
struct RunReport<'a> {
    generator: &'a str,
    seed: Option<u64>,
    angle1_deg: f64,
    angle2_deg: f64,
    trials: u32,
    nominal: f64,
    measured: f64,
    table: &'a FrequencyTable,
}

pub fn run(config: RunCommandConfig) {
    if config.trials == 0 {
        eprintln!("--trials must be positive.");
        std::process::exit(1);
    }

    let kind = super::generator_kind(config.generator);
    let mut rng = kind.build(config.seed);

    let phi1 = config.angle1_deg.to_radians();
    let phi2 = config.angle2_deg.to_radians();
    let table = run_series(rng.as_mut(), phi1, phi2, config.trials);
    let measured = estimate_correlation(&table, phi1, phi2);
    let nominal = nominal_correlation(phi1, phi2);

    if config.json {
        let report = RunReport {
            generator: config.generator,
            seed: config.seed,
            angle1_deg: config.angle1_deg,
            angle2_deg: config.angle2_deg,
            trials: config.trials,
            nominal,
            measured,
            table: &table,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("report serialization")
        );
        return;
    }

    println!("🔔 bellsim — single series\n");
    println!("  angle1          {:>9.2}°", config.angle1_deg);
    println!("  angle2          {:>9.2}°", config.angle2_deg);
    println!("  trials          {:>9}", config.trials);
    println!("  generator       {:>9}", config.generator);
    println!();
    println!("  nominal corr    {:>+9.5}", nominal);
    println!("  measured corr   {:>+9.5}", measured);
    println!("  abs error       {:>9.5}", (measured - nominal).abs());

    if config.show_table {
        println!();
        println!("  {:<12} {:>5} {:>5} {:>10}", "orientation", "tag1", "tag2", "count");
        println!("  {}", "-".repeat(36));
        for orientation in Orientation::ALL {
            for tag1 in Tag::ALL {
                for tag2 in Tag::ALL {
                    println!(
                        "  {:<12} {:>5} {:>5} {:>10}",
                        orientation.to_string(),
                        tag1.to_string(),
                        tag2.to_string(),
                        table.count(orientation, tag1, tag2)
                    );
                }
            }
        }
        println!("  {}", "-".repeat(36));
        println!("  {:<24} {:>10}", "total", table.total());
    }
}
