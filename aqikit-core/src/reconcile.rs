//! Cross-Standard Reconciliation
//!
//! ## Overview
//!
//! Stations usually publish one national index and nothing else. To show a
//! second standard's index for the same air, each reported sub-index is walked
//! back to the concentration it implies on the source scale, and that
//! concentration is run forward through the target scale:
//!
//! ```text
//!  EPA sub-index ──invert──▶ concentration ──compute──▶ NAQI sub-index
//!      150       (EPA PM2.5)    55.4 µg/m³   (NAQI PM2.5)       92
//! ```
//!
//! The per-pollutant results are then aggregated like any other reading: the
//! worst sub-index wins, ties go to the smaller identifier.
//!
//! ## Units
//!
//! The concentration is handed across **without unit conversion**. For the
//! particulates both standards use µg/m³ and the estimate is sound. For gases
//! the scales disagree (EPA O₃ is in ppm, NAQI O₃ in µg/m³), so the estimate
//! is only a rough one: EPA O₃ index 100 is 0.07 ppm, which NAQI reads as
//! 0.07 µg/m³ and scores 0. Callers that need a faithful gas estimate should
//! convert concentrations themselves and use [`crate::aggregate`].
//!
//! ## Failure
//!
//! A pollutant is left out when the source standard has no table for it, the
//! target standard has none, or the index cannot be inverted (negative, NaN).
//! If nothing is left the result carries no index and an "Unknown" category
//! whose message names the target standard.

use crate::calculator::AqiCalculator;
use crate::category::Category;
use crate::constants::{AQI_CEILING, UNKNOWN_COLOR, UNKNOWN_LABEL};
use crate::pollutant::{Pollutant, PollutantMap};
use crate::standard::Standard;

/// Estimated index under a target standard
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReconciledResult {
    /// Standard the input sub-indices were reported under
    pub source: Standard,
    /// Standard of the estimate
    pub target: Standard,
    /// Overall estimated index, `None` when no pollutant could be carried over
    pub index: Option<u16>,
    /// Band of the estimate, or the "Unknown" band
    pub category: Category,
    /// Pollutant with the largest estimated sub-index
    pub dominant_pollutant: Option<Pollutant>,
    /// Estimated sub-index per carried-over pollutant
    pub per_pollutant_index: PollutantMap<u16>,
    /// Concentration each source sub-index implies, in the source table's unit
    pub estimated_concentrations: PollutantMap<f64>,
}

/// EPA to NAQI estimate
pub type NaqiResult = ReconciledResult;

impl ReconciledResult {
    /// Whether an index could be estimated
    pub fn is_available(&self) -> bool {
        self.index.is_some()
    }

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

/// Band reported when no estimate is possible
pub const fn unavailable_category(target: Standard) -> Category {
    let message = match target {
        Standard::Naqi => "Unable to calculate Indian NAQI",
        Standard::Epa => "Unable to calculate US EPA AQI",
    };
    Category::new(AQI_CEILING, UNKNOWN_LABEL, UNKNOWN_COLOR, message)
}

impl<'t> AqiCalculator<'t> {
    /// Estimate NAQI from EPA sub-indices
    pub fn reconcile(&self, epa_indices: &PollutantMap<f64>) -> NaqiResult {
        self.reconcile_between(epa_indices, Standard::Epa, Standard::Naqi)
    }

    /// Estimate the `to` index from sub-indices reported under `from`
    pub fn reconcile_between(
        &self,
        indices: &PollutantMap<f64>,
        from: Standard,
        to: Standard,
    ) -> ReconciledResult {
        let source = self.tables(from);
        let target = self.tables(to);

        let mut per_pollutant_index = PollutantMap::new();
        let mut estimated_concentrations = PollutantMap::new();

        for (pollutant, &index) in indices.iter() {
            let (Some(source_table), Some(target_table)) = (source.table(pollutant), target.table(pollutant)) else {
                log_debug!("{} not covered by both {} and {}, skipped", pollutant, from, to);
                continue;
            };

            let Some(concentration) = self.invert_index(index, &source_table) else {
                log_debug!("{} index {} for {} cannot be inverted, skipped", from, index, pollutant);
                continue;
            };

            estimated_concentrations.insert(pollutant, concentration);
            per_pollutant_index.insert(pollutant, self.compute_index(concentration, &target_table));
        }

        let (index, category, dominant_pollutant) = match per_pollutant_index.max_entry() {
            Some((dominant, index)) => (Some(index), self.categorize(index, to), Some(dominant)),
            None => (None, unavailable_category(to), None),
        };

        ReconciledResult {
            source: from,
            target: to,
            index,
            category,
            dominant_pollutant,
            per_pollutant_index,
            estimated_concentrations,
        }
    }
}

/// Estimate NAQI from EPA sub-indices using the built-in tables
///
/// ```
/// use aqikit_core::{reconcile, Pollutant, PollutantMap};
///
/// let epa: PollutantMap<f64> = [(Pollutant::Pm25, 150.0)].into_iter().collect();
/// let naqi = reconcile(&epa);
/// assert_eq!(naqi.index, Some(92));
/// assert_eq!(naqi.label(), "Satisfactory");
/// assert_eq!(naqi.estimated_concentrations.get(Pollutant::Pm25), Some(&55.4));
/// ```
pub fn reconcile(epa_indices: &PollutantMap<f64>) -> NaqiResult {
    AqiCalculator::default().reconcile(epa_indices)
}

/// Estimate the `to` index from `from` sub-indices using the built-in tables
pub fn reconcile_between(indices: &PollutantMap<f64>, from: Standard, to: Standard) -> ReconciledResult {
    AqiCalculator::default().reconcile_between(indices, from, to)
}
