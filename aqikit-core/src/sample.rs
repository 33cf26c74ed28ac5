//! Synthetic readings for demos
//!
//! Nothing in the calculation path calls into this module. It exists for
//! dashboards and walkthroughs that need plausible numbers when no station is
//! reachable, and it only draws from the RNG the caller hands in, so seeded
//! runs are reproducible.
//!
//! ```
//! use aqikit_core::{aggregate, SampleGenerator, Standard};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut samples = SampleGenerator::new(StdRng::seed_from_u64(7));
//! let result = aggregate(&samples.reading(), Standard::Epa)?;
//! assert!(result.index <= 500);
//! # Ok::<(), aqikit_core::AqiError>(())
//! ```

use rand::Rng;

use crate::aggregate::AqiResult;
use crate::calculator::AqiCalculator;
use crate::errors::{AqiError, CoreResult};
use crate::pollutant::{Pollutant, PollutantReading};
use crate::standard::Standard;

/// Exclusive upper bound of each synthetic concentration, in the EPA units
const SAMPLE_RANGES: [(Pollutant, f64); 6] = [
    (Pollutant::Pm25, 150.0),
    (Pollutant::Pm10, 250.0),
    (Pollutant::O3, 0.1),
    (Pollutant::Co, 15.0),
    (Pollutant::No2, 200.0),
    (Pollutant::So2, 150.0),
];

/// PM2.5 drawn when a reading has nothing usable
const FALLBACK_PM25_MAX: f64 = 100.0;

/// Random readings from a caller-supplied RNG
#[derive(Debug, Clone)]
pub struct SampleGenerator<R: Rng> {
    rng: R,
}

impl<R: Rng> SampleGenerator<R> {
    /// Wrap `rng`
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Give the RNG back
    pub fn into_inner(self) -> R {
        self.rng
    }

    /// One uniform draw per EPA pollutant
    ///
    /// Ozone is kept to four decimals (ppm), everything else to two.
    pub fn reading(&mut self) -> PollutantReading {
        SAMPLE_RANGES
            .iter()
            .map(|&(pollutant, max)| {
                let decimals = if pollutant == Pollutant::O3 { 4 } else { 2 };
                (pollutant, self.draw(max, decimals))
            })
            .collect()
    }

    /// PM2.5 in `[0, 100)` µg/m³
    pub fn fallback_pm25(&mut self) -> f64 {
        self.draw(FALLBACK_PM25_MAX, 2)
    }

    fn draw(&mut self, max: f64, decimals: i32) -> f64 {
        let scale = libm::pow(10.0, decimals as f64);
        // Truncate so the upper bound stays exclusive
        libm::floor(self.rng.gen_range(0.0..max) * scale) / scale
    }
}

impl<'t> AqiCalculator<'t> {
    /// [`AqiCalculator::aggregate`], but a reading with nothing usable gets a
    /// random PM2.5
    ///
    /// For demos only: the result describes made-up air. Every substitution is
    /// logged at warn level.
    pub fn aggregate_with_demo_fallback<R: Rng>(
        &self,
        reading: &PollutantReading,
        standard: Standard,
        samples: &mut SampleGenerator<R>,
    ) -> CoreResult<AqiResult> {
        match self.aggregate(reading, standard) {
            Err(AqiError::NoValidPollutants { .. }) => {
                let pm25 = samples.fallback_pm25();
                log_warn!("No usable {} pollutants, substituting demo PM2.5 {}", standard, pm25);

                let mut fallback = PollutantReading::new();
                fallback.insert(Pollutant::Pm25, pm25);
                self.aggregate(&fallback, standard)
            }
            other => other,
        }
    }
}

/// [`crate::aggregate`] with the demo PM2.5 fallback, on the built-in tables
pub fn aggregate_with_demo_fallback<R: Rng>(
    reading: &PollutantReading,
    standard: Standard,
    samples: &mut SampleGenerator<R>,
) -> CoreResult<AqiResult> {
    AqiCalculator::default().aggregate_with_demo_fallback(reading, standard, samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generator(seed: u64) -> SampleGenerator<StdRng> {
        SampleGenerator::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn readings_stay_in_range() {
        let mut samples = generator(42);
        for _ in 0..500 {
            let reading = samples.reading();
            assert_eq!(reading.len(), 6);
            assert!(!reading.contains(Pollutant::Nh3));

            for (pollutant, max) in SAMPLE_RANGES {
                let v = *reading.get(pollutant).unwrap();
                assert!((0.0..max).contains(&v), "{} = {}", pollutant, v);
            }
        }
    }

    #[test]
    fn ozone_has_four_decimals() {
        let mut samples = generator(1);
        for _ in 0..100 {
            let o3 = *samples.reading().get(Pollutant::O3).unwrap();
            let scaled = o3 * 10_000.0;
            assert!((scaled - scaled.round()).abs() < 1e-6);
        }
    }

    #[test]
    fn same_seed_same_readings() {
        let mut a = generator(9);
        let mut b = generator(9);
        assert_eq!(a.reading(), b.reading());
        assert_eq!(a.fallback_pm25(), b.fallback_pm25());
    }

    #[test]
    fn fallback_only_kicks_in_without_data() {
        let mut samples = generator(3);

        let mut reading = PollutantReading::new();
        reading.insert(Pollutant::Pm25, 12.0);
        let real = aggregate_with_demo_fallback(&reading, Standard::Epa, &mut samples).unwrap();
        assert_eq!(real.index, 56);

        let demo = aggregate_with_demo_fallback(&PollutantReading::new(), Standard::Epa, &mut samples).unwrap();
        assert_eq!(demo.dominant_pollutant, Pollutant::Pm25);
        assert_eq!(demo.per_pollutant_index.len(), 1);
        // PM2.5 below 100 µg/m³ never reaches Very Unhealthy
        assert!(demo.index <= 200);
    }

    #[test]
    fn fallback_uses_the_callers_tables() {
        use crate::breakpoint::Breakpoint;
        use crate::standard::{StandardTables, TableRevision};

        // Index is five times the concentration
        const LINEAR_PM25: [Breakpoint; 1] = [Breakpoint::new(0.0, 100.0, 0, 500)];
        let linear = StandardTables::new(
            Standard::Epa,
            TableRevision { name: "linear-pm", published: "2025-06-01" },
            Standard::Epa.categories().entries(),
            &[(Pollutant::Pm25, &LINEAR_PM25)],
        )
        .unwrap();
        let calc = AqiCalculator::default().with_tables(&linear);

        let mut reading = PollutantReading::new();
        reading.insert(Pollutant::Pm25, 12.0);
        let real = calc.aggregate_with_demo_fallback(&reading, Standard::Epa, &mut generator(5)).unwrap();
        assert_eq!(real.index, 60);

        // PM10 has no table in the linear set, so the fallback fires
        let mut pm10_only = PollutantReading::new();
        pm10_only.insert(Pollutant::Pm10, 54.0);
        let pm25 = generator(5).fallback_pm25();
        let table = linear.table(Pollutant::Pm25).unwrap();

        let demo = calc.aggregate_with_demo_fallback(&pm10_only, Standard::Epa, &mut generator(5)).unwrap();
        assert_eq!(demo.index, calc.compute_index(pm25, &table));
        assert_eq!(demo.per_pollutant_index.len(), 1);
    }
}
