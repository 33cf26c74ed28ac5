//! Demo Fallback Example
//!
//! Shows the opt-in demo helpers: synthetic readings from a seeded RNG and
//! the random PM2.5 substitute for readings with nothing usable.
//!
//! ## What You'll Learn
//!
//! - Driving `SampleGenerator` with a reproducible seed
//! - The difference between `aggregate` and `aggregate_with_demo_fallback`
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 04_demo_fallback --features demo
//! ```

use aqikit_core::{
    aggregate, aggregate_with_demo_fallback, CoreResult, PollutantReading, SampleGenerator, Standard,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> CoreResult<()> {
    println!("aqikit Demo Fallback Example");
    println!("============================\n");

    let mut samples = SampleGenerator::new(StdRng::seed_from_u64(2024));

    println!("Synthetic readings:");
    for _ in 0..3 {
        let reading = samples.reading();
        let result = aggregate(&reading, Standard::Epa)?;
        let values: Vec<String> = reading
            .iter()
            .map(|(p, v)| format!("{}={}", p, v))
            .collect();
        println!("  {} → {} {}", values.join(" "), result.index, result.label());
    }

    println!("\nEmpty reading:");
    let empty = PollutantReading::new();
    match aggregate(&empty, Standard::Epa) {
        Ok(result) => println!("  aggregate: {}", result.index),
        Err(e) => println!("  aggregate: {}", e),
    }

    let demo = aggregate_with_demo_fallback(&empty, Standard::Epa, &mut samples)?;
    println!(
        "  demo fallback: {} {} (made-up PM2.5, do not publish)",
        demo.index,
        demo.label()
    );

    Ok(())
}
