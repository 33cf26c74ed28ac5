//! End-to-end checks across aggregation, reconciliation and serialization
//!
//! Mirrors how a station report is assembled: an EPA reading is aggregated,
//! its sub-indices are carried over to NAQI, and both results are published
//! as JSON.

use aqikit_core::{
    aggregate, reconcile, reconcile_between, AqiCalculator, Breakpoint, Pollutant, PollutantMap,
    PollutantReading, Rounding, Standard, StandardTables, TableError, TableRevision,
};
use serde_json::json;

fn reading(pairs: &[(Pollutant, f64)]) -> PollutantReading {
    pairs.iter().copied().collect()
}

#[test]
fn epa_reading_to_naqi_estimate() {
    let epa = aggregate(&reading(&[(Pollutant::Pm25, 55.4), (Pollutant::Pm10, 54.0)]), Standard::Epa)
        .unwrap();
    assert_eq!(epa.index, 150);
    assert_eq!(epa.dominant_pollutant, Pollutant::Pm25);
    assert_eq!(epa.label(), "Unhealthy for Sensitive Groups");

    let naqi = reconcile(&epa.per_pollutant_index.map(|i| *i as f64));
    assert_eq!(naqi.per_pollutant_index.get(Pollutant::Pm25), Some(&92));
    // PM10 index 50 inverts to 54 µg/m³, also 54 on the NAQI scale
    assert_eq!(naqi.per_pollutant_index.get(Pollutant::Pm10), Some(&54));
    assert_eq!(naqi.index, Some(92));
    assert_eq!(naqi.dominant_pollutant, Some(Pollutant::Pm25));
    assert_eq!(naqi.label(), "Satisfactory");
}

#[test]
fn reconcile_is_a_pure_function() {
    let input: PollutantMap<f64> = [(Pollutant::Co, 120.0), (Pollutant::No2, 75.0)].into_iter().collect();
    assert_eq!(reconcile(&input), reconcile(&input));
    assert_eq!(
        reconcile(&input),
        reconcile_between(&input, Standard::Epa, Standard::Naqi)
    );
}

#[test]
fn unknown_wire_keys_are_dropped_on_input() {
    let reading: PollutantReading =
        serde_json::from_value(json!({ "pm25": 12.0, "PM10": 54.0, "benzene": 3.1 })).unwrap();
    assert_eq!(reading.keys().collect::<Vec<_>>(), vec![Pollutant::Pm25, Pollutant::Pm10]);

    let from_pairs = PollutantReading::from_pairs([("pm25", 12.0), ("pm1", 8.0)]);
    assert_eq!(from_pairs.len(), 1);
}

#[test]
fn results_serialize_with_wire_identifiers() {
    let epa = aggregate(&reading(&[(Pollutant::Pm25, 12.0), (Pollutant::Pm10, 54.0)]), Standard::Epa)
        .unwrap();
    let value = serde_json::to_value(epa).unwrap();

    assert_eq!(value["standard"], "epa");
    assert_eq!(value["index"], 56);
    assert_eq!(value["dominant_pollutant"], "pm25");
    assert_eq!(value["category"]["label"], "Moderate");
    assert_eq!(value["category"]["color"], "#ffff00");
    assert_eq!(value["per_pollutant_index"], json!({ "pm25": 56, "pm10": 50 }));

    let naqi = serde_json::to_value(reconcile(&PollutantMap::new())).unwrap();
    assert_eq!(naqi["index"], serde_json::Value::Null);
    assert_eq!(naqi["dominant_pollutant"], serde_json::Value::Null);
    assert_eq!(naqi["category"]["label"], "Unknown");
    assert_eq!(naqi["category"]["message"], "Unable to calculate Indian NAQI");
}

#[test]
fn custom_revision_flows_through_the_calculator() {
    // A stricter PM2.5 table, e.g. for a regional advisory
    const STRICT_PM25: [Breakpoint; 2] = [
        Breakpoint::new(0.0, 5.0, 0, 50),
        Breakpoint::new(5.1, 100.0, 51, 500),
    ];
    let strict = StandardTables::new(
        Standard::Epa,
        TableRevision { name: "strict-pm", published: "2025-06-01" },
        Standard::Epa.categories().entries(),
        &[(Pollutant::Pm25, &STRICT_PM25)],
    )
    .unwrap();

    let calc = AqiCalculator::default().with_tables(&strict).with_rounding(Rounding::HalfUp);
    let result = calc.aggregate(&reading(&[(Pollutant::Pm25, 5.0), (Pollutant::Pm10, 500.0)]), Standard::Epa)
        .unwrap();

    // PM10 has no table in the strict set
    assert_eq!(result.per_pollutant_index.len(), 1);
    assert_eq!(result.index, 50);
    assert_eq!(calc.tables(Standard::Epa).revision().name, "strict-pm");

    // NAQI side still uses the built-ins
    let naqi = calc.reconcile(&result.per_pollutant_index.map(|i| *i as f64));
    assert_eq!(naqi.estimated_concentrations.get(Pollutant::Pm25), Some(&5.0));
    assert_eq!(naqi.index, Some(8));
}

#[test]
fn broken_custom_tables_are_rejected() {
    const GAPLESS_OVERLAP: [Breakpoint; 2] = [
        Breakpoint::new(0.0, 12.0, 0, 50),
        Breakpoint::new(11.0, 35.4, 51, 100),
    ];
    let result = StandardTables::new(
        Standard::Epa,
        TableRevision { name: "broken", published: "2025-06-01" },
        Standard::Epa.categories().entries(),
        &[(Pollutant::Pm25, &GAPLESS_OVERLAP)],
    );
    assert_eq!(
        result,
        Err(TableError::OverlappingConcentration { pollutant: Pollutant::Pm25, position: 1 })
    );
}

#[test]
fn custom_tables_cannot_leave_the_index_scale() {
    const PAST_CEILING: [Breakpoint; 1] = [Breakpoint::new(0.0, 10.0, 0, 900)];
    let result = StandardTables::new(
        Standard::Epa,
        TableRevision { name: "stretched", published: "2025-06-01" },
        Standard::Epa.categories().entries(),
        &[(Pollutant::Pm25, &PAST_CEILING)],
    );
    assert_eq!(
        result,
        Err(TableError::IndexPastCeiling {
            pollutant: Pollutant::Pm25,
            position: 0,
            index_high: 900,
            ceiling: 500,
        })
    );
}
