//! OpenAQ measurement lists
//!
//! A location's latest measurements look like:
//!
//! ```json
//! {
//!   "station_id": 361378,
//!   "station_name": "R K Puram, Delhi - DPCC",
//!   "measurements": [
//!     { "parameter": "pm25", "value": 35.5, "unit": "µg/m³" },
//!     { "parameter": "o3", "value": 41.0, "unit": "ppb" }
//!   ]
//! }
//! ```
//!
//! Parameters are matched case-insensitively, with the aliases `pm2.5` and
//! `ozone`. Unknown parameters and null values are skipped. O₃ in ppb and CO
//! in mg/m³ are converted to ppm, the unit of the EPA tables.

use aqikit_core::units::{normalize_for_epa, ConcentrationUnit};
use aqikit_core::{AqiCalculator, Pollutant, PollutantReading, Standard};
use log::debug;
use serde::Deserialize;

use crate::report::AqiReport;
use crate::FeedResult;

/// One sensor value
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Measurement {
    /// Upstream parameter name (`pm25`, `pm2.5`, `ozone`, ...)
    pub parameter: String,
    /// Latest value; sensors without a recent value report `null`
    #[serde(default)]
    pub value: Option<f64>,
    /// Upstream unit string
    #[serde(default)]
    pub unit: String,
    /// ISO 8601 time of the value
    #[serde(default)]
    pub datetime: Option<String>,
}

impl Measurement {
    /// Pollutant this parameter names, if any
    pub fn pollutant(&self) -> Option<Pollutant> {
        let name = self.parameter.trim();
        if name.eq_ignore_ascii_case("pm2.5") {
            Some(Pollutant::Pm25)
        } else if name.eq_ignore_ascii_case("ozone") {
            Some(Pollutant::O3)
        } else {
            // Scored on the EPA tables, which have no NH₃
            name.parse().ok().filter(|p| *p != Pollutant::Nh3)
        }
    }
}

/// Latest measurements of one location
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationLatest {
    /// OpenAQ location id
    pub station_id: u64,
    /// Location name
    #[serde(default)]
    pub station_name: Option<String>,
    /// Sensor values
    #[serde(default)]
    pub measurements: Vec<Measurement>,
}

impl LocationLatest {
    /// Parse a latest-measurements document
    pub fn from_json(body: &str) -> FeedResult<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Concentrations ready for the EPA tables
    pub fn reading(&self) -> PollutantReading {
        measurements_to_reading(&self.measurements)
    }

    /// EPA report for this location
    pub fn report(&self, calculator: &AqiCalculator<'_>) -> FeedResult<AqiReport> {
        let result = calculator.aggregate(&self.reading(), Standard::Epa)?;
        Ok(AqiReport::from(&result))
    }
}

/// Map measurements onto pollutants, converting units for the EPA tables
///
/// A later measurement of the same pollutant replaces an earlier one.
pub fn measurements_to_reading(measurements: &[Measurement]) -> PollutantReading {
    let mut reading = PollutantReading::new();

    for m in measurements {
        let Some(pollutant) = m.pollutant() else {
            debug!("Skipping OpenAQ parameter {:?}", m.parameter);
            continue;
        };
        let Some(value) = m.value else {
            debug!("Skipping {} without a value", pollutant);
            continue;
        };

        let unit = m.unit.parse::<ConcentrationUnit>().ok();
        reading.insert(pollutant, normalize_for_epa(pollutant, value, unit));
    }

    reading
}
