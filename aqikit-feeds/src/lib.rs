//! Payload Adapters for Air Quality Feeds
//!
//! ## Overview
//!
//! The engine in `aqikit-core` only knows concentrations and indices. Real
//! data arrives as third-party JSON, and results leave as JSON for a web
//! frontend. This crate sits on both edges. It does no network I/O: callers
//! fetch the documents however they like and hand the bytes in.
//!
//! ### OpenAQ (`openaq`)
//!
//! Measurement lists with raw concentrations. Parameter names vary
//! (`pm2.5`, `ozone`, ...) and units depend on the station, so each value is
//! mapped to a [`Pollutant`](aqikit_core::Pollutant) and normalized onto the
//! EPA table units before aggregation.
//!
//! ### AQICN (`aqicn`)
//!
//! Station feeds that already carry EPA sub-indices (`iaqi`) and an overall
//! EPA index. The sub-indices are reconciled to NAQI, which becomes the
//! displayed value when it can be estimated.
//!
//! ### Reports (`report`)
//!
//! The JSON shapes served to the frontend. Pollutants are keyed by display
//! name (`PM2.5`, `NO₂`) there, not by wire identifier.
//!
//! ## Example Usage
//!
//! ```rust
//! use aqikit_core::AqiCalculator;
//! use aqikit_feeds::aqicn::{StationFeed, StationReport};
//!
//! let body = r#"{"status":"ok","data":{"aqi":150,"idx":1,
//!     "city":{"name":"Anand Vihar, Delhi","url":"","geo":[28.6,77.3]},
//!     "iaqi":{"pm25":{"v":150},"t":{"v":21.5}},"time":{"s":"","tz":"+05:30"}}}"#;
//!
//! let feed = StationFeed::from_json(body)?;
//! let report = StationReport::build(&feed, &AqiCalculator::default());
//! assert_eq!(report.aqi, Some(92));
//! assert_eq!(report.aqi_standard, "NAQI (India)");
//! # Ok::<(), aqikit_feeds::FeedError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod aqicn;
pub mod openaq;
pub mod report;

use aqikit_core::AqiError;
use thiserror::Error;

pub use report::{AqiReport, NaqiReport};

/// Result type for feed adapters
pub type FeedResult<T> = Result<T, FeedError>;

/// Feed adapter errors
#[derive(Debug, Error)]
pub enum FeedError {
    /// Document is not the JSON we expected
    #[error("Malformed feed: {0}")]
    Json(#[from] serde_json::Error),

    /// Upstream answered with a non-`ok` status
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Index calculation failed
    #[error(transparent)]
    Core(#[from] AqiError),
}
