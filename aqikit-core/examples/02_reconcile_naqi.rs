//! Reconciliation Example
//!
//! Estimates the Indian NAQI for a station that only publishes EPA
//! sub-indices, and shows the concentration each step implies.
//!
//! ## What You'll Learn
//!
//! - Inverting an index back to a concentration
//! - Carrying EPA sub-indices across to NAQI
//! - Why gas estimates are rough (no unit conversion between scales)
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_reconcile_naqi
//! ```

use aqikit_core::{reconcile, Pollutant, PollutantMap};

fn main() {
    println!("aqikit Reconciliation Example");
    println!("=============================\n");

    // As a station feed would report them
    let epa_indices: PollutantMap<f64> = [
        (Pollutant::Pm25, 150.0),
        (Pollutant::Pm10, 68.0),
        (Pollutant::O3, 100.0),
        (Pollutant::No2, 22.0),
    ]
    .into_iter()
    .collect();

    let naqi = reconcile(&epa_indices);

    println!("  {:<6} {:>8} {:>14} {:>8}", "", "EPA", "concentration", "NAQI");
    for (pollutant, epa) in epa_indices.iter() {
        let concentration = naqi.estimated_concentrations.get(pollutant);
        let sub_index = naqi.per_pollutant_index.get(pollutant);
        match (concentration, sub_index) {
            (Some(c), Some(i)) => {
                println!("  {:<6} {:>8.0} {:>14.2} {:>8}", pollutant.display_name(), epa, c, i)
            }
            _ => println!("  {:<6} {:>8.0} {:>14} {:>8}", pollutant.display_name(), epa, "-", "-"),
        }
    }

    println!();
    match (naqi.index, naqi.dominant_pollutant) {
        (Some(index), Some(dominant)) => {
            println!("  NAQI {} ({}), driven by {}", index, naqi.label(), dominant.display_name());
            println!("  {}", naqi.message());
        }
        _ => println!("  {}", naqi.message()),
    }

    println!("\n  Note: O₃ goes across as 0.07 and NAQI reads it in µg/m³, so it scores 0.");
}
