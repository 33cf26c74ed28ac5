//! Throughput of the lookup, aggregation and reconciliation paths

use aqikit_core::{aggregate, compute_index, invert_index, reconcile, Pollutant, PollutantMap, PollutantReading, Standard};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_lookup(c: &mut Criterion) {
    let Some(table) = Standard::Epa.table(Pollutant::Pm25) else {
        return;
    };

    c.bench_function("compute_index/epa_pm25", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for step in 0..400 {
                acc += compute_index(black_box(step as f64 * 0.9), &table) as u32;
            }
            acc
        })
    });

    c.bench_function("invert_index/epa_pm25", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for index in 0..=500 {
                acc += invert_index(black_box(index as f64), &table).unwrap_or(0.0);
            }
            acc
        })
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let reading: PollutantReading = [
        (Pollutant::Pm25, 48.2),
        (Pollutant::Pm10, 120.0),
        (Pollutant::O3, 0.061),
        (Pollutant::Co, 3.1),
        (Pollutant::No2, 44.0),
        (Pollutant::So2, 12.0),
    ]
    .into_iter()
    .collect();

    c.bench_function("aggregate/epa_six_pollutants", |b| {
        b.iter(|| aggregate(black_box(&reading), Standard::Epa))
    });

    let indices: PollutantMap<f64> = match aggregate(&reading, Standard::Epa) {
        Ok(result) => result.per_pollutant_index.map(|i| *i as f64),
        Err(_) => PollutantMap::new(),
    };

    c.bench_function("reconcile/epa_to_naqi", |b| b.iter(|| reconcile(black_box(&indices))));
}

criterion_group!(benches, bench_lookup, bench_pipeline);
criterion_main!(benches);
