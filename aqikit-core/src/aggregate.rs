//! Combining sub-indices into one reported index
//!
//! The reported index of a reading is the worst of its per-pollutant
//! sub-indices. The pollutant that produced it is the *dominant* pollutant;
//! when two pollutants tie, the one with the smaller wire identifier wins, so
//! the answer does not depend on the order the reading was built in.
//!
//! A reading with nothing usable under the requested standard is an error
//! ([`AqiError::NoValidPollutants`]). Pollutants the standard has no table for
//! (NH₃ under EPA) are skipped, not rejected.

use crate::calculator::AqiCalculator;
use crate::category::Category;
use crate::errors::{AqiError, CoreResult};
use crate::pollutant::{Pollutant, PollutantMap, PollutantReading};
use crate::standard::Standard;

/// Index of one reading under one standard
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AqiResult {
    /// Standard the index was computed under
    pub standard: Standard,
    /// Overall index, the largest sub-index
    pub index: u16,
    /// Band the overall index falls in
    pub category: Category,
    /// Pollutant with the largest sub-index
    pub dominant_pollutant: Pollutant,
    /// Sub-index of every pollutant that had a table
    pub per_pollutant_index: PollutantMap<u16>,
}

impl AqiResult {
    /// Category label
    pub fn label(&self) -> &'static str {
        self.category.label
    }

    /// Category color
    pub fn color(&self) -> &'static str {
        self.category.color
    }

    /// Category health message
    pub fn message(&self) -> &'static str {
        self.category.message
    }
}

impl<'t> AqiCalculator<'t> {
    /// Sub-index for every pollutant of `reading` covered by `standard`
    pub fn compute_sub_indices(&self, reading: &PollutantReading, standard: Standard) -> PollutantMap<u16> {
        let tables = self.tables(standard);
        let rounding = self.rounding();

        reading
            .iter()
            .filter_map(|(pollutant, &concentration)| match tables.table(pollutant) {
                Some(table) => Some((pollutant, table.compute_index(concentration, rounding))),
                None => {
                    log_debug!("No {} table for {}, skipped", standard, pollutant);
                    None
                }
            })
            .collect()
    }

    /// Overall index of `reading` under `standard`
    pub fn aggregate(&self, reading: &PollutantReading, standard: Standard) -> CoreResult<AqiResult> {
        let per_pollutant_index = self.compute_sub_indices(reading, standard);
        let (dominant_pollutant, index) = per_pollutant_index
            .max_entry()
            .ok_or(AqiError::NoValidPollutants { standard })?;

        Ok(AqiResult {
            standard,
            index,
            category: self.categorize(index, standard),
            dominant_pollutant,
            per_pollutant_index,
        })
    }
}

/// Sub-indices of `reading` under the built-in `standard` tables
pub fn compute_sub_indices(reading: &PollutantReading, standard: Standard) -> PollutantMap<u16> {
    AqiCalculator::default().compute_sub_indices(reading, standard)
}

/// Overall index of `reading` under the built-in `standard` tables
///
/// ```
/// use aqikit_core::{aggregate, AqiError, Pollutant, PollutantReading, Standard};
///
/// let reading: PollutantReading = [(Pollutant::Pm25, 12.0), (Pollutant::Pm10, 54.0)]
///     .into_iter()
///     .collect();
/// let result = aggregate(&reading, Standard::Epa)?;
/// assert_eq!((result.index, result.dominant_pollutant), (56, Pollutant::Pm25));
///
/// let empty = PollutantReading::new();
/// assert_eq!(
///     aggregate(&empty, Standard::Epa),
///     Err(AqiError::NoValidPollutants { standard: Standard::Epa })
/// );
/// # Ok::<(), AqiError>(())
/// ```
pub fn aggregate(reading: &PollutantReading, standard: Standard) -> CoreResult<AqiResult> {
    AqiCalculator::default().aggregate(reading, standard)
}
