//! Breakpoint interpolation engine for air quality indices
//!
//! Turns raw pollutant concentrations into a normalized 0-500 index under the
//! US EPA or the Indian NAQI standard, and estimates one standard's index from
//! the other's by round-tripping through the implied concentration.
//!
//! Key constraints:
//! - Pure and synchronous, no I/O
//! - No heap allocation (runs under `no_std`)
//! - Tables are immutable statics, validated once
//!
//! ```
//! use aqikit_core::{aggregate, reconcile, Pollutant, PollutantReading, Standard};
//!
//! let mut reading = PollutantReading::new();
//! reading.insert(Pollutant::Pm25, 12.0);
//! reading.insert(Pollutant::Pm10, 54.0);
//!
//! let result = aggregate(&reading, Standard::Epa)?;
//! assert_eq!(result.index, 56);
//! assert_eq!(result.dominant_pollutant, Pollutant::Pm25);
//! assert_eq!(result.label(), "Moderate");
//!
//! // Estimate the Indian index from EPA sub-indices
//! let naqi = reconcile(&result.per_pollutant_index.map(|i| *i as f64));
//! assert!(naqi.index.is_some());
//! # Ok::<(), aqikit_core::AqiError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Optional logging, compiled out without the `log` feature
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
#[allow(unused_macros)]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
#[allow(unused_macros)]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub mod aggregate;
pub mod breakpoint;
pub mod calculator;
pub mod category;
pub mod constants;
pub mod errors;
pub mod pollutant;
pub mod reconcile;
pub mod standard;
pub mod units;

#[cfg(feature = "demo")]
pub mod sample;

// Public API
pub use aggregate::{aggregate, compute_sub_indices, AqiResult};
pub use breakpoint::{compute_index, invert_index, Breakpoint, BreakpointTable, Rounding};
pub use calculator::AqiCalculator;
pub use category::{categorize, Category, CategoryTable};
pub use errors::{AqiError, CoreResult, TableError, TableResult};
pub use pollutant::{Pollutant, PollutantMap, PollutantReading, UnknownPollutant};
pub use reconcile::{reconcile, reconcile_between, NaqiResult, ReconciledResult};
pub use standard::{Standard, StandardTables, TableRevision};

#[cfg(feature = "demo")]
pub use sample::{aggregate_with_demo_fallback, SampleGenerator};

/// Crate version, for reports that record which engine produced them
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
