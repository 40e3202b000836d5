use bellsim_core::GeneratorKind;

pub fn run() {
    println!("🔔 bellsim — registered random-source strategies\n");
    for kind in GeneratorKind::all() {
        let info = kind.info();
        println!("  {} — {}", info.name, info.description);
        println!("      recurrence:   {}", info.algorithm);
        println!("      default seed: {}", info.default_seed);
        println!();
    }
    println!("Streams from different strategies are not bit-compatible;");
    println!("never mix them within one run.");
}
