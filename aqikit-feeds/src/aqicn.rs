//! AQICN station feeds
//!
//! ## Input
//!
//! A feed response wraps the station in a status envelope:
//!
//! ```json
//! {
//!   "status": "ok",
//!   "data": {
//!     "idx": 2553, "aqi": 152, "dominentpol": "pm25",
//!     "city": { "name": "Anand Vihar, Delhi", "url": "https://aqicn.org/...", "geo": [28.64, 77.31] },
//!     "iaqi": { "pm25": { "v": 152 }, "no2": { "v": 31.4 }, "t": { "v": 17.0 } },
//!     "time": { "s": "2026-01-11 18:00:00", "tz": "+05:30" }
//!   }
//! }
//! ```
//!
//! On failure `status` is `"error"` and `data` is a message string. The
//! overall `aqi` is `"-"` when the station has no current value.
//!
//! ## Output
//!
//! Every `iaqi` entry is kept as a display measurement (weather keys `t`, `h`,
//! `w`, `p`, `wg` included). The pollutant entries are EPA sub-indices; they
//! are reconciled to NAQI, and the NAQI estimate becomes the displayed index
//! when one exists. Otherwise the report falls back to the feed's EPA index.

use aqikit_core::constants::{AQI_CEILING, UNKNOWN_COLOR, UNKNOWN_LABEL};
use aqikit_core::{AqiCalculator, Category, Pollutant, PollutantMap, Standard};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::report::{DisplayKeyed, NaqiReport};
use crate::{FeedError, FeedResult};

/// Standard label when the NAQI estimate is shown
pub const NAQI_LABEL: &str = "NAQI (India)";

/// Standard label when the feed's EPA index is shown
pub const EPA_LABEL: &str = "EPA (US)";

/// EPA message when the feed has no overall index
pub const NO_DATA_MESSAGE: &str = "No air quality data available for this location.";

/// Station position
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    /// Degrees north
    pub latitude: f64,
    /// Degrees east
    pub longitude: f64,
}

/// One `iaqi` entry, ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedMeasurement {
    /// Upstream key (`pm25`, `t`, ...)
    pub parameter: String,
    /// Human-readable name
    pub display_name: String,
    /// Reported value
    pub value: f64,
    /// `AQI` for pollutants, a physical unit for weather
    pub unit: &'static str,
}

/// Parsed station feed
#[derive(Debug, Clone, PartialEq)]
pub struct StationFeed {
    /// AQICN station index
    pub station_id: Option<i64>,
    /// Station name
    pub station_name: String,
    /// Station page
    pub station_url: String,
    /// Station position, when published
    pub coordinates: Option<Coordinates>,
    /// Overall EPA index, `None` for `"-"` or anything non-numeric
    pub aqi: Option<u16>,
    /// Dominant pollutant as named upstream
    pub dominant_pollutant: Option<String>,
    /// EPA sub-index per recognized pollutant
    pub sub_indices: PollutantMap<f64>,
    /// Every `iaqi` entry, pollutants and weather
    pub measurements: Vec<FeedMeasurement>,
    /// Local measurement time
    pub measurement_time: String,
    /// Station UTC offset
    pub timezone: String,
}

#[derive(Deserialize)]
struct Envelope {
    status: String,
    #[serde(default)]
    data: Value,
}

#[derive(Deserialize, Default)]
struct RawStation {
    #[serde(default)]
    idx: Option<i64>,
    #[serde(default)]
    aqi: Value,
    #[serde(default)]
    dominentpol: Option<String>,
    #[serde(default)]
    city: RawCity,
    #[serde(default)]
    iaqi: Map<String, Value>,
    #[serde(default)]
    time: RawTime,
}

#[derive(Deserialize, Default)]
struct RawCity {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    url: String,
    #[serde(default)]
    geo: Vec<Option<f64>>,
}

#[derive(Deserialize, Default)]
struct RawTime {
    #[serde(default)]
    s: String,
    #[serde(default)]
    tz: String,
}

impl StationFeed {
    /// Parse a feed response
    pub fn from_json(body: &str) -> FeedResult<Self> {
        let envelope: Envelope = serde_json::from_str(body)?;
        if envelope.status != "ok" {
            let message = match envelope.data {
                Value::String(message) => message,
                _ => "Unknown error".to_string(),
            };
            return Err(FeedError::Upstream(message));
        }

        let raw: RawStation = serde_json::from_value(envelope.data)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawStation) -> Self {
        let mut sub_indices = PollutantMap::new();
        let mut measurements = Vec::with_capacity(raw.iaqi.len());

        for (parameter, entry) in raw.iaqi {
            let Some(value) = entry.get("v").and_then(Value::as_f64) else {
                debug!("Skipping iaqi entry {:?} without a numeric value", parameter);
                continue;
            };

            match parameter.parse::<Pollutant>() {
                Ok(pollutant) => {
                    sub_indices.insert(pollutant, value);
                }
                Err(_) => debug!("iaqi {:?} kept for display only", parameter),
            }

            measurements.push(FeedMeasurement {
                display_name: display_name(&parameter),
                unit: display_unit(&parameter),
                parameter,
                value,
            });
        }

        let coordinates = match raw.city.geo.as_slice() {
            [Some(latitude), Some(longitude), ..] => Some(Coordinates {
                latitude: *latitude,
                longitude: *longitude,
            }),
            _ => None,
        };

        Self {
            station_id: raw.idx,
            station_name: raw.city.name.unwrap_or_else(|| "Unknown Station".to_string()),
            station_url: raw.city.url,
            coordinates,
            aqi: parse_overall_index(&raw.aqi),
            dominant_pollutant: raw.dominentpol.filter(|p| !p.is_empty()),
            sub_indices,
            measurements,
            measurement_time: raw.time.s,
            timezone: raw.time.tz,
        }
    }
}

/// Whole numbers and digit strings; `"-"` and anything else is "no value"
fn parse_overall_index(value: &Value) -> Option<u16> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|v| u16::try_from(v).ok()),
        Value::String(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => s.parse().ok(),
        _ => None,
    }
}

fn display_name(parameter: &str) -> String {
    let name = match parameter {
        "pm25" => "PM2.5",
        "pm10" => "PM10",
        "o3" => "Ozone (O₃)",
        "no2" => "Nitrogen Dioxide (NO₂)",
        "so2" => "Sulfur Dioxide (SO₂)",
        "co" => "Carbon Monoxide (CO)",
        "t" => "Temperature",
        "h" => "Humidity",
        "w" => "Wind",
        "p" => "Pressure",
        "wg" => "Wind Gust",
        other => return other.to_uppercase(),
    };
    name.to_string()
}

fn display_unit(parameter: &str) -> &'static str {
    match parameter {
        "t" => "°C",
        "h" => "%",
        "w" | "wg" => "m/s",
        "p" => "hPa",
        _ => "AQI",
    }
}

/// Station report served to the frontend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationReport {
    /// AQICN station index
    pub station_id: Option<i64>,
    /// Station name
    pub station_name: String,
    /// Station page
    pub station_url: String,
    /// Station position
    pub coordinates: Option<Coordinates>,
    /// Displayed index: NAQI estimate, else the feed's EPA index
    pub aqi: Option<u16>,
    /// Displayed category label
    pub category: &'static str,
    /// Displayed category color
    pub color: &'static str,
    /// Displayed health message
    pub message: &'static str,
    /// [`NAQI_LABEL`] or [`EPA_LABEL`]
    pub aqi_standard: &'static str,
    /// Feed's overall EPA index
    pub epa_aqi: Option<u16>,
    /// EPA category label
    pub epa_category: &'static str,
    /// EPA category color
    pub epa_color: &'static str,
    /// Estimated NAQI sub-indices
    pub naqi_breakdown: Option<DisplayKeyed<u16>>,
    /// Concentrations implied by the EPA sub-indices
    pub concentrations: DisplayKeyed<String>,
    /// Display name of the NAQI dominant pollutant, else the upstream one
    pub dominant_pollutant: String,
    /// Every `iaqi` entry
    pub measurements: Vec<FeedMeasurement>,
    /// Local measurement time
    pub measurement_time: String,
}

impl StationReport {
    /// Build the report for `feed`
    pub fn build(feed: &StationFeed, calculator: &AqiCalculator<'_>) -> Self {
        let epa = match feed.aqi {
            Some(index) => calculator.categorize(index, Standard::Epa),
            None => Category::new(AQI_CEILING, UNKNOWN_LABEL, UNKNOWN_COLOR, NO_DATA_MESSAGE),
        };

        let reconciled = calculator.reconcile(&feed.sub_indices);
        let naqi = NaqiReport::from(&reconciled);

        let (aqi, category, aqi_standard) = match reconciled.index {
            Some(index) => (Some(index), reconciled.category, NAQI_LABEL),
            None => (feed.aqi, epa, EPA_LABEL),
        };

        let dominant_pollutant = naqi
            .naqi_dominant
            .map(str::to_string)
            .or_else(|| feed.dominant_pollutant.clone())
            .unwrap_or_else(|| UNKNOWN_LABEL.to_string());

        Self {
            station_id: feed.station_id,
            station_name: feed.station_name.clone(),
            station_url: feed.station_url.clone(),
            coordinates: feed.coordinates,
            aqi,
            category: category.label,
            color: category.color,
            message: category.message,
            aqi_standard,
            epa_aqi: feed.aqi,
            epa_category: epa.label,
            epa_color: epa.color,
            naqi_breakdown: naqi.individual_naqi,
            concentrations: naqi.concentrations,
            dominant_pollutant,
            measurements: feed.measurements.clone(),
            measurement_time: feed.measurement_time.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELHI: &str = r#"{
        "status": "ok",
        "data": {
            "idx": 2553,
            "aqi": 150,
            "dominentpol": "pm25",
            "city": {"name": "Anand Vihar, Delhi", "url": "https://aqicn.org/city/delhi/anand-vihar", "geo": [28.647, 77.316]},
            "iaqi": {
                "pm25": {"v": 150},
                "pm10": {"v": 100},
                "o3": {"v": 100},
                "t": {"v": 17.5},
                "h": {"v": 62},
                "wg": {"v": 3.1}
            },
            "time": {"s": "2026-01-11 18:00:00", "tz": "+05:30"}
        }
    }"#;

    #[test]
    fn parse_feed() {
        let feed = StationFeed::from_json(DELHI).unwrap();
        assert_eq!(feed.station_id, Some(2553));
        assert_eq!(feed.aqi, Some(150));
        assert_eq!(feed.station_name, "Anand Vihar, Delhi");
        assert_eq!(feed.coordinates, Some(Coordinates { latitude: 28.647, longitude: 77.316 }));
        assert_eq!(feed.timezone, "+05:30");

        assert_eq!(feed.sub_indices.len(), 3);
        assert_eq!(feed.sub_indices.get(Pollutant::Pm10), Some(&100.0));

        // Weather stays for display
        assert_eq!(feed.measurements.len(), 6);
        let temperature = feed.measurements.iter().find(|m| m.parameter == "t").unwrap();
        assert_eq!((temperature.display_name.as_str(), temperature.unit), ("Temperature", "°C"));
        let pm25 = feed.measurements.iter().find(|m| m.parameter == "pm25").unwrap();
        assert_eq!((pm25.display_name.as_str(), pm25.unit), ("PM2.5", "AQI"));
    }

    #[test]
    fn upstream_errors_surface() {
        let err = StationFeed::from_json(r#"{"status": "error", "data": "Unknown station"}"#).unwrap_err();
        assert!(matches!(err, FeedError::Upstream(ref m) if m == "Unknown station"));

        let err = StationFeed::from_json(r#"{"status": "nope"}"#).unwrap_err();
        assert!(matches!(err, FeedError::Upstream(ref m) if m == "Unknown error"));

        assert!(matches!(StationFeed::from_json("<html>"), Err(FeedError::Json(_))));
    }

    #[test]
    fn overall_index_forms() {
        assert_eq!(parse_overall_index(&Value::from(87)), Some(87));
        assert_eq!(parse_overall_index(&Value::from("87")), Some(87));
        assert_eq!(parse_overall_index(&Value::from("-")), None);
        assert_eq!(parse_overall_index(&Value::from(87.5)), None);
        assert_eq!(parse_overall_index(&Value::Null), None);
    }

    #[test]
    fn report_prefers_naqi() {
        let feed = StationFeed::from_json(DELHI).unwrap();
        let report = StationReport::build(&feed, &AqiCalculator::default());

        // PM10 100 → 154 µg/m³ → NAQI 136 beats PM2.5's 92
        assert_eq!(report.aqi, Some(136));
        assert_eq!(report.aqi_standard, NAQI_LABEL);
        assert_eq!(report.category, "Moderate");
        assert_eq!(report.color, "#ff9933");
        assert_eq!(report.dominant_pollutant, "PM10");

        assert_eq!(report.epa_aqi, Some(150));
        assert_eq!(report.epa_category, "Unhealthy for Sensitive Groups");
        assert_eq!(report.epa_color, "#ff7e00");
    }

    #[test]
    fn report_falls_back_to_epa() {
        let body = r#"{"status":"ok","data":{"aqi":"42","dominentpol":"nh3",
            "city":{"name":"Farm"},"iaqi":{"nh3":{"v":42},"t":{"v":30}}}}"#;
        let feed = StationFeed::from_json(body).unwrap();
        let report = StationReport::build(&feed, &AqiCalculator::default());

        assert_eq!(report.aqi, Some(42));
        assert_eq!(report.aqi_standard, EPA_LABEL);
        assert_eq!(report.category, "Good");
        assert_eq!(report.color, "#00e400");
        assert_eq!(report.naqi_breakdown, None);
        assert_eq!(report.dominant_pollutant, "nh3");
        assert_eq!(report.coordinates, None);
    }

    #[test]
    fn report_without_any_index() {
        let body = r#"{"status":"ok","data":{"aqi":"-","city":{"name":"Quiet"},"iaqi":{}}}"#;
        let feed = StationFeed::from_json(body).unwrap();
        let report = StationReport::build(&feed, &AqiCalculator::default());

        assert_eq!(report.aqi, None);
        assert_eq!(report.category, "Unknown");
        assert_eq!(report.color, "#808080");
        assert_eq!(report.message, NO_DATA_MESSAGE);
        assert_eq!(report.dominant_pollutant, "Unknown");
    }
}
