//! Concentration units and the conversions applied before EPA lookups
//!
//! The breakpoint tables do not check units; the caller promises each value
//! is already in the unit its table expects (see
//! [`Standard::expected_unit`](crate::Standard::expected_unit)). Measurement
//! feeds rarely agree on units, so this module carries the two conversions
//! needed to bring common feed units onto the EPA tables:
//!
//! | Pollutant | Feed unit | EPA unit | Conversion |
//! |-----------|-----------|----------|------------|
//! | O₃        | ppb       | ppm      | ÷ 1000     |
//! | CO        | mg/m³     | ppm      | ÷ 1.145 (25 °C, 1 atm) |
//!
//! Anything else passes through unchanged.

use core::fmt;
use core::str::FromStr;

use thiserror_no_std::Error;

use crate::pollutant::Pollutant;

/// ppb per ppm
pub const PPB_PER_PPM: f64 = 1000.0;

/// mg/m³ of CO per ppm at 25 °C and 1 atm.
///
/// Source: molar mass 28.01 g/mol over molar volume 24.45 L/mol
pub const CO_MG_M3_PER_PPM: f64 = 1.145;

/// Units concentrations are reported in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConcentrationUnit {
    /// µg/m³
    MicrogramsPerCubicMeter,
    /// mg/m³
    MilligramsPerCubicMeter,
    /// Parts per million by volume
    PartsPerMillion,
    /// Parts per billion by volume
    PartsPerBillion,
}

impl ConcentrationUnit {
    /// Canonical symbol
    pub const fn symbol(self) -> &'static str {
        match self {
            ConcentrationUnit::MicrogramsPerCubicMeter => "µg/m³",
            ConcentrationUnit::MilligramsPerCubicMeter => "mg/m³",
            ConcentrationUnit::PartsPerMillion => "ppm",
            ConcentrationUnit::PartsPerBillion => "ppb",
        }
    }
}

impl fmt::Display for ConcentrationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unit string not recognized
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Unknown concentration unit")]
pub struct UnknownUnit;

impl FromStr for ConcentrationUnit {
    type Err = UnknownUnit;

    /// Lenient: feeds spell µg/m³ as `µg/m³`, `μg/m³` (Greek mu), `ug/m3`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let lower = |needle: &str| {
            s.len() >= needle.len()
                && s.char_indices().any(|(i, _)| {
                    s.get(i..i + needle.len())
                        .map_or(false, |w| w.eq_ignore_ascii_case(needle))
                })
        };

        if lower("ppb") {
            Ok(ConcentrationUnit::PartsPerBillion)
        } else if lower("ppm") {
            Ok(ConcentrationUnit::PartsPerMillion)
        } else if lower("mg") {
            Ok(ConcentrationUnit::MilligramsPerCubicMeter)
        } else if lower("µg") || lower("μg") || lower("ug") {
            Ok(ConcentrationUnit::MicrogramsPerCubicMeter)
        } else {
            Err(UnknownUnit)
        }
    }
}

/// Bring a feed value onto the EPA table's unit for `pollutant`
///
/// ```
/// use aqikit_core::units::{normalize_for_epa, ConcentrationUnit};
/// use aqikit_core::Pollutant;
///
/// assert_eq!(normalize_for_epa(Pollutant::O3, 68.0, Some(ConcentrationUnit::PartsPerBillion)), 0.068);
/// assert_eq!(normalize_for_epa(Pollutant::Pm25, 35.5, None), 35.5);
/// ```
pub fn normalize_for_epa(pollutant: Pollutant, value: f64, unit: Option<ConcentrationUnit>) -> f64 {
    match (pollutant, unit) {
        (Pollutant::O3, Some(ConcentrationUnit::PartsPerBillion)) => value / PPB_PER_PPM,
        (Pollutant::Co, Some(ConcentrationUnit::MilligramsPerCubicMeter)) => value / CO_MG_M3_PER_PPM,
        _ => value,
    }
}
