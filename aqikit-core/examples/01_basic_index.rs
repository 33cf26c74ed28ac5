//! Basic Index Example
//!
//! Computes EPA and NAQI indices for a handful of readings and shows where
//! each pollutant lands on its breakpoint table.
//!
//! ## What You'll Learn
//!
//! - Looking up a single sub-index from a breakpoint table
//! - Aggregating a reading into an overall index and category
//! - How quantization gaps and the top of the scale are handled
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_index
//! ```

use aqikit_core::{aggregate, compute_index, AqiError, Pollutant, PollutantReading, Standard};

fn main() {
    println!("aqikit Basic Index Example");
    println!("==========================\n");

    println!("EPA PM2.5 sub-indices:");
    println!("----------------------");
    demo_single_lookups();

    println!("\n\nWhole readings:");
    println!("---------------");
    demo_aggregation();
}

fn demo_single_lookups() {
    let Some(table) = Standard::Epa.table(Pollutant::Pm25) else {
        println!("  No EPA PM2.5 table");
        return;
    };

    let cases = [
        (4.5, "Clean morning"),
        (9.0, "Top of Good"),
        (9.05, "Inside the 9.0/9.1 gap"),
        (12.0, "Typical city"),
        (55.4, "Top of Sensitive Groups"),
        (175.0, "Wildfire smoke"),
        (400.0, "Beyond the table"),
    ];

    for (concentration, note) in cases {
        let index = compute_index(concentration, &table);
        println!("  {:>6.2} µg/m³ → {:>3}  ({})", concentration, index, note);
    }
}

fn demo_aggregation() {
    let readings: [(&str, &[(Pollutant, f64)]); 3] = [
        ("Delhi winter", &[(Pollutant::Pm25, 180.0), (Pollutant::Pm10, 320.0), (Pollutant::No2, 90.0)]),
        ("Coastal town", &[(Pollutant::Pm25, 6.0), (Pollutant::O3, 0.041)]),
        ("Ammonia only", &[(Pollutant::Nh3, 450.0)]),
    ];

    for (place, pairs) in readings {
        let reading: PollutantReading = pairs.iter().copied().collect();
        println!("  {}:", place);

        for standard in [Standard::Epa, Standard::Naqi] {
            match aggregate(&reading, standard) {
                Ok(result) => {
                    println!(
                        "    {:<12} {:>3} {:<32} dominant {}",
                        standard.display_name(),
                        result.index,
                        result.label(),
                        result.dominant_pollutant.display_name()
                    );
                }
                Err(AqiError::NoValidPollutants { .. }) => {
                    println!("    {:<12} no pollutant covered by this standard", standard.display_name());
                }
                Err(e) => println!("    {:<12} error: {}", standard.display_name(), e),
            }
        }
    }
}
