//! Breakpoint Tables and Piecewise-Linear Interpolation
//!
//! ## Background
//!
//! Both the US EPA AQI and the Indian NAQI publish, per pollutant, a table of
//! concentration brackets and the index range each bracket maps to. Within a
//! bracket the index is a straight line through the bracket's corners:
//!
//! ```text
//!         I_hi - I_lo
//! I  =  ------------- × (C - C_lo) + I_lo
//!         C_hi - C_lo
//! ```
//!
//! The inverse uses the same corners with the axes swapped:
//!
//! ```text
//!         C_hi - C_lo
//! C  =  ------------- × (I - I_lo) + C_lo
//!         I_hi - I_lo
//! ```
//!
//! ## Quantization Gaps
//!
//! Published tables are not contiguous. Concentrations are reported at a fixed
//! precision, so one bracket ends at `9.0` and the next starts at `9.1`:
//!
//! ```text
//! EPA PM2.5 (µg/m³)
//!   0.0 ──────── 9.0 │gap│ 9.1 ──────── 35.4 │gap│ 35.5 ── ...
//!   0 ────────── 50        51 ────────── 100        101 ─── ...
//! ```
//!
//! The tables are kept exactly as published. Lookups treat a value that lands
//! in a gap as the start of the next bracket up, which keeps the mapping
//! monotone (`9.0 → 50`, `9.05 → 51`, `9.1 → 51`). Index gaps (`50 < I < 51`)
//! invert the same way.
//!
//! ## Edges of the Scale
//!
//! - Negative or NaN concentration: index `0`, the table is not consulted
//! - Above the last bracket: index clamped to `500`, never extrapolated
//! - Inverting an index above the last bracket: extrapolated with the last
//!   bracket's slope, never clamped
//!
//! ## Rounding
//!
//! Index values are reported as integers. [`Rounding::HalfEven`] is the
//! default; `HalfUp` is available through
//! [`crate::AqiCalculator::with_rounding`]. Inverted
//! concentrations are rounded to two decimal places with the same rule.

use crate::constants::{AQI_CEILING, INVERSE_DECIMAL_SCALE};
use crate::errors::{TableError, TableResult};
use crate::pollutant::Pollutant;

/// Rounding rule for reported values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rounding {
    /// Ties go to the even neighbour (`2.5 → 2`, `3.5 → 4`)
    #[default]
    HalfEven,
    /// Ties go away from zero (`2.5 → 3`)
    HalfUp,
}

impl Rounding {
    /// Round to the nearest integer under this rule
    pub fn round(self, value: f64) -> f64 {
        match self {
            Rounding::HalfEven => libm::rint(value),
            Rounding::HalfUp => libm::round(value),
        }
    }

    /// Round to two decimal places under this rule
    pub fn round_hundredths(self, value: f64) -> f64 {
        self.round(value * INVERSE_DECIMAL_SCALE) / INVERSE_DECIMAL_SCALE
    }
}

/// One bracket of a breakpoint table
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoint {
    /// Lowest concentration in the bracket
    pub conc_low: f64,
    /// Highest concentration in the bracket
    pub conc_high: f64,
    /// Index at `conc_low`
    pub index_low: u16,
    /// Index at `conc_high`
    pub index_high: u16,
}

impl Breakpoint {
    /// Create a bracket
    pub const fn new(conc_low: f64, conc_high: f64, index_low: u16, index_high: u16) -> Self {
        Self { conc_low, conc_high, index_low, index_high }
    }

    /// Index per unit of concentration
    fn index_slope(&self) -> f64 {
        (self.index_high - self.index_low) as f64 / (self.conc_high - self.conc_low)
    }

    /// Concentration per index point
    fn conc_slope(&self) -> f64 {
        (self.conc_high - self.conc_low) / (self.index_high - self.index_low) as f64
    }

    /// Unrounded index at `concentration`
    fn interpolate(&self, concentration: f64) -> f64 {
        self.index_low as f64 + self.index_slope() * (concentration - self.conc_low)
    }

    /// Unrounded concentration at `index`
    fn extrapolate_concentration(&self, index: f64) -> f64 {
        self.conc_low + self.conc_slope() * (index - self.index_low as f64)
    }
}

/// Ordered, non-overlapping brackets for one pollutant under one standard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakpointTable<'a> {
    pollutant: Pollutant,
    brackets: &'a [Breakpoint],
}

impl<'a> BreakpointTable<'a> {
    /// Build a table, rejecting empty, overlapping or descending brackets
    pub fn new(pollutant: Pollutant, brackets: &'a [Breakpoint]) -> TableResult<Self> {
        let table = Self { pollutant, brackets };
        table.validate()?;
        Ok(table)
    }

    /// Built-in tables, checked by the test suite rather than at runtime
    pub(crate) const fn from_static(pollutant: Pollutant, brackets: &'a [Breakpoint]) -> Self {
        Self { pollutant, brackets }
    }

    /// Pollutant this table covers
    pub fn pollutant(&self) -> Pollutant {
        self.pollutant
    }

    /// The brackets, ascending
    pub fn brackets(&self) -> &'a [Breakpoint] {
        self.brackets
    }

    /// Check the construction invariants
    pub fn validate(&self) -> TableResult<()> {
        let pollutant = self.pollutant;
        let first = self.brackets.first().ok_or(TableError::Empty { pollutant })?;

        if !(first.conc_low >= 0.0) {
            return Err(TableError::NegativeOrigin { pollutant, conc_low: first.conc_low });
        }

        for (position, bracket) in self.brackets.iter().enumerate() {
            // Written so that NaN bounds fail too
            if !(bracket.conc_low < bracket.conc_high) || bracket.index_low >= bracket.index_high {
                return Err(TableError::InvertedBracket { pollutant, position });
            }
            if bracket.index_high > AQI_CEILING {
                return Err(TableError::IndexPastCeiling {
                    pollutant,
                    position,
                    index_high: bracket.index_high,
                    ceiling: AQI_CEILING,
                });
            }

            if position > 0 {
                let prev = &self.brackets[position - 1];
                if !(bracket.conc_low > prev.conc_high) {
                    return Err(TableError::OverlappingConcentration { pollutant, position });
                }
                if bracket.index_low <= prev.index_high {
                    return Err(TableError::NonIncreasingIndex { pollutant, position });
                }
            }
        }

        Ok(())
    }

    /// Sub-index for `concentration`
    pub fn compute_index(&self, concentration: f64, rounding: Rounding) -> u16 {
        // Also catches NaN
        if !(concentration >= 0.0) {
            return 0;
        }

        // First bracket whose upper bound reaches the concentration. Shared
        // boundaries resolve to the lower bracket.
        let Some(bracket) = self.brackets.iter().find(|b| concentration <= b.conc_high) else {
            log_debug!(
                "{} concentration {} above top bracket, clamped to {}",
                self.pollutant, concentration, AQI_CEILING
            );
            return AQI_CEILING;
        };

        if concentration < bracket.conc_low {
            log_debug!(
                "{} concentration {} in quantization gap, using {}",
                self.pollutant, concentration, bracket.conc_low
            );
            return bracket.index_low;
        }

        let index = rounding.round(bracket.interpolate(concentration));
        // Guard the cast against tables that reach past the scale
        index.clamp(0.0, u16::MAX as f64) as u16
    }

    /// Estimated concentration for `index`, or `None` below the table
    pub fn invert_index(&self, index: f64, rounding: Rounding) -> Option<f64> {
        let first = self.brackets.first()?;
        let last = self.brackets.last()?;

        // Also catches NaN
        if !(index >= first.index_low as f64) {
            return None;
        }

        let concentration = match self.brackets.iter().find(|b| index <= b.index_high as f64) {
            Some(bracket) if index < bracket.index_low as f64 => bracket.conc_low,
            Some(bracket) => bracket.extrapolate_concentration(index),
            // Above the scale: keep going along the last bracket
            None => last.extrapolate_concentration(index),
        };

        Some(rounding.round_hundredths(concentration))
    }
}

/// Sub-index for `concentration` using half-even rounding
///
/// # Examples
///
/// ```
/// use aqikit_core::{compute_index, Pollutant, Standard};
///
/// let table = Standard::Epa.table(Pollutant::Pm25).unwrap();
/// assert_eq!(compute_index(9.0, &table), 50);
/// assert_eq!(compute_index(9.1, &table), 51);
/// assert_eq!(compute_index(-5.0, &table), 0);
/// assert_eq!(compute_index(1000.0, &table), 500);
/// ```
pub fn compute_index(concentration: f64, table: &BreakpointTable<'_>) -> u16 {
    table.compute_index(concentration, Rounding::default())
}

/// Estimated concentration for `index` using half-even rounding
///
/// # Examples
///
/// ```
/// use aqikit_core::{invert_index, Pollutant, Standard};
///
/// let table = Standard::Epa.table(Pollutant::Pm25).unwrap();
/// assert_eq!(invert_index(150.0, &table), Some(55.4));
/// assert_eq!(invert_index(-1.0, &table), None);
/// ```
pub fn invert_index(index: f64, table: &BreakpointTable<'_>) -> Option<f64> {
    table.invert_index(index, Rounding::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standard::Standard;

    fn epa(pollutant: Pollutant) -> BreakpointTable<'static> {
        Standard::Epa.table(pollutant).unwrap()
    }

    fn naqi(pollutant: Pollutant) -> BreakpointTable<'static> {
        Standard::Naqi.table(pollutant).unwrap()
    }

    #[test]
    fn epa_pm25_reference_values() {
        // Same points as the AirNow concentration calculator
        let table = epa(Pollutant::Pm25);
        assert_eq!(compute_index(0.0, &table), 0);
        assert_eq!(compute_index(4.5, &table), 25);
        assert_eq!(compute_index(9.0, &table), 50);
        assert_eq!(compute_index(12.0, &table), 56);
        assert_eq!(compute_index(35.5, &table), 101);
        assert_eq!(compute_index(45.0, &table), 124);
        assert_eq!(compute_index(55.4, &table), 150);
        assert_eq!(compute_index(55.5, &table), 151);
        assert_eq!(compute_index(90.0, &table), 175);
        assert_eq!(compute_index(125.4, &table), 200);
        assert_eq!(compute_index(125.5, &table), 201);
        assert_eq!(compute_index(175.0, &table), 250);
        assert_eq!(compute_index(225.4, &table), 300);
        assert_eq!(compute_index(225.5, &table), 301);
        assert_eq!(compute_index(325.4, &table), 500);
    }

    #[test]
    fn shared_boundary_resolves_to_lower_bracket() {
        let table = epa(Pollutant::Pm25);
        assert_eq!(compute_index(9.0, &table), 50);
        assert_eq!(compute_index(9.1, &table), 51);

        let table = epa(Pollutant::Pm10);
        assert_eq!(compute_index(54.0, &table), 50);
        assert_eq!(compute_index(55.0, &table), 51);
    }

    #[test]
    fn quantization_gap_takes_next_bracket_start() {
        let table = epa(Pollutant::Pm25);
        assert_eq!(compute_index(9.05, &table), 51);
        assert_eq!(compute_index(35.45, &table), 101);

        let table = naqi(Pollutant::Co);
        assert_eq!(compute_index(1.05, &table), 51);
    }

    #[test]
    fn negative_and_nan_concentration_yield_zero() {
        for p in Pollutant::ALL {
            if let Some(table) = Standard::Naqi.table(p) {
                assert_eq!(compute_index(-5.0, &table), 0);
                assert_eq!(compute_index(f64::NAN, &table), 0);
            }
        }
    }

    #[test]
    fn above_top_bracket_clamps_to_ceiling() {
        assert_eq!(compute_index(325.5, &epa(Pollutant::Pm25)), 500);
        assert_eq!(compute_index(10_000.0, &epa(Pollutant::Pm25)), 500);
        assert_eq!(compute_index(f64::INFINITY, &naqi(Pollutant::Nh3)), 500);

        // EPA ozone tops out at 300 in the 8-hour table, still clamps to 500
        assert_eq!(compute_index(0.200, &epa(Pollutant::O3)), 300);
        assert_eq!(compute_index(0.201, &epa(Pollutant::O3)), 500);
    }

    #[test]
    fn rounding_rule_is_pinned() {
        // NAQI PM10 first bracket has slope exactly 1
        let table = naqi(Pollutant::Pm10);
        assert_eq!(table.compute_index(2.5, Rounding::HalfEven), 2);
        assert_eq!(table.compute_index(3.5, Rounding::HalfEven), 4);
        assert_eq!(table.compute_index(2.5, Rounding::HalfUp), 3);
        assert_eq!(compute_index(2.5, &table), 2);
    }

    #[test]
    fn invert_within_brackets() {
        let table = epa(Pollutant::Pm25);
        assert_eq!(invert_index(0.0, &table), Some(0.0));
        assert_eq!(invert_index(50.0, &table), Some(9.0));
        assert_eq!(invert_index(51.0, &table), Some(9.1));
        assert_eq!(invert_index(150.0, &table), Some(55.4));

        let table = epa(Pollutant::O3);
        assert_eq!(invert_index(100.0, &table), Some(0.07));
    }

    #[test]
    fn invert_index_gap_resolves_to_next_bracket_start() {
        let table = epa(Pollutant::Pm25);
        assert_eq!(invert_index(50.5, &table), Some(9.1));
    }

    #[test]
    fn invert_above_table_extrapolates_last_slope() {
        // Last EPA PM2.5 bracket: 225.5..325.4 over 301..500
        let table = epa(Pollutant::Pm25);
        let expected = 225.5 + (325.4 - 225.5) / 199.0 * (600.0 - 301.0);
        assert_eq!(invert_index(600.0, &table), Some(Rounding::HalfEven.round_hundredths(expected)));

        // EPA ozone has no bracket above 300
        let table = epa(Pollutant::O3);
        assert_eq!(invert_index(400.0, &table), Some(0.29));
    }

    #[test]
    fn invert_below_table_is_not_found() {
        let table = naqi(Pollutant::So2);
        assert_eq!(invert_index(-0.5, &table), None);
        assert_eq!(invert_index(f64::NAN, &table), None);
    }

    #[test]
    fn construction_rejects_bad_tables() {
        const OVERLAP: [Breakpoint; 2] = [
            Breakpoint::new(0.0, 10.0, 0, 50),
            Breakpoint::new(10.0, 20.0, 51, 100),
        ];
        assert_eq!(
            BreakpointTable::new(Pollutant::Pm25, &OVERLAP),
            Err(TableError::OverlappingConcentration { pollutant: Pollutant::Pm25, position: 1 })
        );

        const DESCENDING_INDEX: [Breakpoint; 2] = [
            Breakpoint::new(0.0, 10.0, 0, 50),
            Breakpoint::new(10.1, 20.0, 50, 100),
        ];
        assert_eq!(
            BreakpointTable::new(Pollutant::Co, &DESCENDING_INDEX),
            Err(TableError::NonIncreasingIndex { pollutant: Pollutant::Co, position: 1 })
        );

        const INVERTED: [Breakpoint; 1] = [Breakpoint::new(5.0, 1.0, 0, 50)];
        assert_eq!(
            BreakpointTable::new(Pollutant::O3, &INVERTED),
            Err(TableError::InvertedBracket { pollutant: Pollutant::O3, position: 0 })
        );

        const NEGATIVE: [Breakpoint; 1] = [Breakpoint::new(-1.0, 1.0, 0, 50)];
        assert_eq!(
            BreakpointTable::new(Pollutant::No2, &NEGATIVE),
            Err(TableError::NegativeOrigin { pollutant: Pollutant::No2, conc_low: -1.0 })
        );

        assert_eq!(
            BreakpointTable::new(Pollutant::So2, &[]),
            Err(TableError::Empty { pollutant: Pollutant::So2 })
        );
    }

    #[test]
    fn construction_rejects_index_past_ceiling() {
        const TOO_HIGH: [Breakpoint; 2] = [
            Breakpoint::new(0.0, 10.0, 0, 50),
            Breakpoint::new(10.1, 20.0, 51, 900),
        ];
        assert_eq!(
            BreakpointTable::new(Pollutant::Pm25, &TOO_HIGH),
            Err(TableError::IndexPastCeiling {
                pollutant: Pollutant::Pm25,
                position: 1,
                index_high: 900,
                ceiling: 500,
            })
        );

        // Reaching the ceiling exactly is fine
        const AT_CEILING: [Breakpoint; 1] = [Breakpoint::new(0.0, 10.0, 0, 500)];
        assert!(BreakpointTable::new(Pollutant::Pm25, &AT_CEILING).is_ok());
    }

    #[test]
    fn builtin_tables_pass_validation() {
        for standard in [Standard::Epa, Standard::Naqi] {
            for p in Pollutant::ALL {
                if let Some(table) = standard.table(p) {
                    assert_eq!(table.validate(), Ok(()), "{} {}", standard, p);
                }
            }
        }
    }
}
