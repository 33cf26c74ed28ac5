//! Custom Tables Example
//!
//! Builds a calculator around a caller-supplied table set and shows what
//! validation rejects.
//!
//! ## What You'll Learn
//!
//! - Defining breakpoints and a revision for a custom standard
//! - Swapping a table set into an `AqiCalculator`
//! - Choosing half-up instead of half-even rounding
//! - Handling `TableError` at construction time
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_custom_tables
//! ```

use aqikit_core::{
    AqiCalculator, Breakpoint, Pollutant, PollutantReading, Rounding, Standard, StandardTables,
    TableRevision, TableResult,
};

/// Pre-2024 EPA PM2.5 breakpoints ("Good" ended at 12.0)
const EPA_2012_PM25: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 12.0, 0, 50),
    Breakpoint::new(12.1, 35.4, 51, 100),
    Breakpoint::new(35.5, 55.4, 101, 150),
    Breakpoint::new(55.5, 150.4, 151, 200),
    Breakpoint::new(150.5, 250.4, 201, 300),
    Breakpoint::new(250.5, 500.4, 301, 500),
];

const BROKEN_PM25: [Breakpoint; 2] = [
    Breakpoint::new(0.0, 12.0, 0, 50),
    Breakpoint::new(10.0, 35.4, 51, 100),
];

fn main() -> TableResult<()> {
    println!("aqikit Custom Tables Example");
    println!("============================\n");

    let legacy = StandardTables::new(
        Standard::Epa,
        TableRevision { name: "EPA-2012-12", published: "2012-12-14" },
        Standard::Epa.categories().entries(),
        &[(Pollutant::Pm25, &EPA_2012_PM25)],
    )?;

    let current = AqiCalculator::default();
    let previous = AqiCalculator::default().with_tables(&legacy);

    let mut reading = PollutantReading::new();
    for concentration in [8.0, 12.0, 20.0, 100.0] {
        reading.insert(Pollutant::Pm25, concentration);

        let now = current.aggregate(&reading, Standard::Epa).map(|r| r.index);
        let then = previous.aggregate(&reading, Standard::Epa).map(|r| r.index);
        println!(
            "  PM2.5 {:>5.1}: {} {:?}, {} {:?}",
            concentration,
            current.tables(Standard::Epa).revision().name,
            now,
            previous.tables(Standard::Epa).revision().name,
            then
        );
    }

    println!("\n  Rounding a tie (NAQI PM10 2.5 µg/m³):");
    if let Some(table) = Standard::Naqi.table(Pollutant::Pm10) {
        for rounding in [Rounding::HalfEven, Rounding::HalfUp] {
            let calc = AqiCalculator::default().with_rounding(rounding);
            println!("    {:?}: {}", rounding, calc.compute_index(2.5, &table));
        }
    }

    println!("\n  Overlapping brackets:");
    match StandardTables::new(
        Standard::Epa,
        TableRevision { name: "broken", published: "2025-01-01" },
        Standard::Epa.categories().entries(),
        &[(Pollutant::Pm25, &BROKEN_PM25)],
    ) {
        Ok(_) => println!("    accepted (unexpected)"),
        Err(e) => println!("    rejected: {}", e),
    }

    Ok(())
}
