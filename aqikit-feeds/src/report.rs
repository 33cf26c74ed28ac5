//! JSON report shapes served to the frontend
//!
//! Reports key pollutants by display name and flatten the category into
//! top-level fields:
//!
//! ```json
//! {
//!   "aqi": 56, "category": "Moderate", "color": "#ffff00",
//!   "dominant_pollutant": "PM2.5", "message": "...", "standard": "epa",
//!   "individual_aqis": { "PM2.5": 56, "PM10": 50 }
//! }
//! ```

use aqikit_core::{AqiResult, PollutantMap, ReconciledResult, Standard};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Unit label attached to estimated concentrations
pub const CONCENTRATION_UNIT_LABEL: &str = "μg/m³";

/// Pollutant map serialized with display names as keys, in declaration order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayKeyed<T>(pub PollutantMap<T>);

impl<T: Serialize> Serialize for DisplayKeyed<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (pollutant, value) in self.0.iter() {
            map.serialize_entry(pollutant.display_name(), value)?;
        }
        map.end()
    }
}

/// Overall index of a reading
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AqiReport {
    /// Overall index
    pub aqi: u16,
    /// Category label
    pub category: &'static str,
    /// Category color
    pub color: &'static str,
    /// Display name of the dominant pollutant
    pub dominant_pollutant: &'static str,
    /// Health message
    pub message: &'static str,
    /// Standard identifier
    pub standard: Standard,
    /// Sub-index per pollutant
    pub individual_aqis: DisplayKeyed<u16>,
}

impl From<&AqiResult> for AqiReport {
    fn from(result: &AqiResult) -> Self {
        Self {
            aqi: result.index,
            category: result.label(),
            color: result.color(),
            dominant_pollutant: result.dominant_pollutant.display_name(),
            message: result.message(),
            standard: result.standard,
            individual_aqis: DisplayKeyed(result.per_pollutant_index),
        }
    }
}

/// NAQI estimated from another standard's sub-indices
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct NaqiReport {
    /// Overall estimate, `null` when nothing could be carried over
    pub naqi: Option<u16>,
    /// Category label, "Unknown" without an estimate
    pub naqi_category: &'static str,
    /// Category color
    pub naqi_color: &'static str,
    /// Health message
    pub naqi_message: &'static str,
    /// Display name of the dominant pollutant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub naqi_dominant: Option<&'static str>,
    /// Estimated sub-index per pollutant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub individual_naqi: Option<DisplayKeyed<u16>>,
    /// Implied concentrations, formatted with their unit
    pub concentrations: DisplayKeyed<String>,
}

impl From<&ReconciledResult> for NaqiReport {
    fn from(result: &ReconciledResult) -> Self {
        let available = result.is_available();
        Self {
            naqi: result.index,
            naqi_category: result.label(),
            naqi_color: result.color(),
            naqi_message: result.message(),
            naqi_dominant: result.dominant_pollutant.map(|p| p.display_name()),
            individual_naqi: available.then_some(DisplayKeyed(result.per_pollutant_index)),
            concentrations: DisplayKeyed(result.estimated_concentrations.map(|c| format_concentration(*c))),
        }
    }
}

/// `55.4` → `"55.4 μg/m³"`; whole numbers keep one decimal (`"9.0 μg/m³"`)
pub fn format_concentration(value: f64) -> String {
    format!("{:?} {}", value, CONCENTRATION_UNIT_LABEL)
}
