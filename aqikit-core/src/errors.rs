//! Error Types for Index Calculation and Table Construction
//!
//! ## Design Philosophy
//!
//! Most bad input is not an error here. The index scale already has a defined
//! answer for the awkward cases:
//!
//! - Negative or NaN concentration: sub-index `0`
//! - Concentration above the top bracket: sub-index `500`
//! - Pollutant without a table under the chosen standard: skipped
//! - Index that cannot be inverted: `None`, the pollutant is left out of the
//!   reconciled result
//!
//! What remains are the two conditions a caller has to decide about:
//!
//! 1. **No usable pollutant** in a reading. Aggregation has nothing to take the
//!    maximum of. The caller picks the fallback policy (report "no data",
//!    try another station, or opt into the demo generator).
//! 2. **Misconfigured table**. Brackets that overlap or run backwards would
//!    make the interpolation ambiguous. These are rejected when the table is
//!    built, never in the middle of a calculation.
//!
//! Errors are small `Copy` enums with `&'static str` payloads at most, so they
//! stay usable without an allocator.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use aqikit_core::{aggregate, AqiError, PollutantReading, Standard};
//!
//! let reading = PollutantReading::new();
//! match aggregate(&reading, Standard::Epa) {
//!     Ok(result) => {
//!         // publish(result);
//!     }
//!     Err(AqiError::NoValidPollutants { .. }) => {
//!         // Nothing measured - show "no data" rather than a made-up index
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

use crate::pollutant::Pollutant;
use crate::standard::Standard;

/// Result type for index calculations
pub type CoreResult<T> = Result<T, AqiError>;

/// Result type for table construction
pub type TableResult<T> = Result<T, TableError>;

/// Calculation errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AqiError {
    /// Reading had no pollutant with a table under the requested standard
    #[error("No valid pollutants for {standard}")]
    NoValidPollutants {
        /// Standard the aggregation was requested for
        standard: Standard,
    },

    /// A caller-supplied table set failed validation
    #[error("Invalid table: {0}")]
    Table(TableError),
}

impl From<TableError> for AqiError {
    fn from(err: TableError) -> Self {
        AqiError::Table(err)
    }
}

/// Table construction errors
///
/// `position` is the zero-based bracket (or category entry) that broke the rule.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TableError {
    /// Table has no brackets at all
    #[error("Breakpoint table for {pollutant} is empty")]
    Empty {
        /// Pollutant the table was built for
        pollutant: Pollutant,
    },

    /// First bracket starts below zero concentration
    #[error("Breakpoint table for {pollutant} starts at negative concentration {conc_low}")]
    NegativeOrigin {
        /// Pollutant the table was built for
        pollutant: Pollutant,
        /// Offending lower bound
        conc_low: f64,
    },

    /// Bracket with `low >= high` on either axis
    #[error("Bracket {position} for {pollutant} is empty or inverted")]
    InvertedBracket {
        /// Pollutant the table was built for
        pollutant: Pollutant,
        /// Offending bracket
        position: usize,
    },

    /// Bracket starts at or below the previous bracket's upper concentration
    #[error("Bracket {position} for {pollutant} overlaps the previous concentration range")]
    OverlappingConcentration {
        /// Pollutant the table was built for
        pollutant: Pollutant,
        /// Offending bracket
        position: usize,
    },

    /// Bracket starts at or below the previous bracket's upper index
    #[error("Bracket {position} for {pollutant} does not increase the index")]
    NonIncreasingIndex {
        /// Pollutant the table was built for
        pollutant: Pollutant,
        /// Offending bracket
        position: usize,
    },

    /// Bracket reaches past the top of the index scale
    #[error("Bracket {position} for {pollutant} ends at index {index_high}, above {ceiling}")]
    IndexPastCeiling {
        /// Pollutant the table was built for
        pollutant: Pollutant,
        /// Offending bracket
        position: usize,
        /// Upper index of the bracket
        index_high: u16,
        /// Top of the scale
        ceiling: u16,
    },

    /// Category thresholds not strictly increasing
    #[error("Category {position} for {standard} does not raise the threshold")]
    NonIncreasingThreshold {
        /// Standard the categories were built for
        standard: Standard,
        /// Offending entry
        position: usize,
    },

    /// Category table empty or not terminating at the top of the scale
    #[error("Categories for {standard} must end at {expected}")]
    UnterminatedCategories {
        /// Standard the categories were built for
        standard: Standard,
        /// Required final threshold
        expected: u16,
    },

    /// Pollutant appears twice in one table set
    #[error("Duplicate {pollutant} table for {standard}")]
    DuplicateTable {
        /// Standard of the table set
        standard: Standard,
        /// Pollutant listed twice
        pollutant: Pollutant,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for AqiError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NoValidPollutants { standard } =>
                defmt::write!(fmt, "No valid pollutants for {}", standard.as_str()),
            Self::Table(err) =>
                defmt::write!(fmt, "Invalid table: {}", err),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TableError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Empty { pollutant } =>
                defmt::write!(fmt, "Empty table for {}", pollutant.as_str()),
            Self::NegativeOrigin { pollutant, conc_low } =>
                defmt::write!(fmt, "{} table starts at {}", pollutant.as_str(), conc_low),
            Self::InvertedBracket { pollutant, position } =>
                defmt::write!(fmt, "{} bracket {} inverted", pollutant.as_str(), position),
            Self::OverlappingConcentration { pollutant, position } =>
                defmt::write!(fmt, "{} bracket {} overlaps", pollutant.as_str(), position),
            Self::NonIncreasingIndex { pollutant, position } =>
                defmt::write!(fmt, "{} bracket {} index not increasing", pollutant.as_str(), position),
            Self::IndexPastCeiling { pollutant, position, index_high, .. } =>
                defmt::write!(fmt, "{} bracket {} ends at index {}", pollutant.as_str(), position, index_high),
            Self::NonIncreasingThreshold { standard, position } =>
                defmt::write!(fmt, "{} category {} threshold not increasing", standard.as_str(), position),
            Self::UnterminatedCategories { standard, expected } =>
                defmt::write!(fmt, "{} categories must end at {}", standard.as_str(), expected),
            Self::DuplicateTable { standard, pollutant } =>
                defmt::write!(fmt, "Duplicate {} table for {}", pollutant.as_str(), standard.as_str()),
        }
    }
}
