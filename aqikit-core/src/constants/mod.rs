//! Constants for aqikit Core
//!
//! Every published number the engine relies on lives here: the breakpoint
//! tables, the category bands with their colors and health messages, and the
//! handful of scale limits the interpolator needs.
//!
//! ## Organization
//!
//! Constants are grouped by standard:
//! - **EPA**: US EPA AQI tables (2024 PM NAAQS revision)
//! - **NAQI**: Indian National Air Quality Index tables (CPCB)
//!
//! Scale-wide limits and sentinel values are defined in this file.
//!
//! ## Usage Guidelines
//!
//! 1. Never edit a published table in place. A new revision is a new set of
//!    constants with its own [`crate::TableRevision`].
//! 2. Keep the quantization gaps between brackets exactly as published.
//! 3. Record units next to every table; they differ per pollutant and
//!    per standard.

/// US EPA breakpoint and category tables.
pub mod epa;

/// Indian NAQI breakpoint and category tables.
pub mod naqi;

pub use epa::{EPA_CATEGORIES, EPA_REVISION};
pub use naqi::{NAQI_CATEGORIES, NAQI_REVISION};

// ===== INDEX SCALE =====

/// Top of the index scale.
///
/// Concentrations above the last bracket clamp here instead of being
/// extrapolated. The last category band of both standards ends here too.
///
/// Source: EPA Technical Assistance Document (2024), CPCB NAQI (2014)
pub const AQI_CEILING: u16 = 500;

/// Bottom of the index scale.
pub const AQI_FLOOR: u16 = 0;

/// Inverted concentrations are reported to two decimal places.
pub const INVERSE_DECIMAL_SCALE: f64 = 100.0;

// ===== SENTINELS =====

/// Label used when no index could be produced.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Neutral gray for "no index".
pub const UNKNOWN_COLOR: &str = "#808080";
