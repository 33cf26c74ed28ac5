//! Index categories: label, color and health message per band
//!
//! Each standard splits the 0-500 scale into six bands. A band is identified
//! by its inclusive upper threshold; the last band also catches anything above
//! the scale, so categorizing is total over every non-negative index.

use crate::constants::AQI_CEILING;
use crate::errors::{TableError, TableResult};
use crate::standard::Standard;

/// One band of a category table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Category {
    /// Highest index in this band (inclusive)
    pub upper_threshold: u16,
    /// Band name ("Good", "Moderate", ...)
    pub label: &'static str,
    /// Display color as `#rrggbb`
    pub color: &'static str,
    /// Health message for the band
    pub message: &'static str,
}

impl Category {
    /// Create a band
    pub const fn new(
        upper_threshold: u16,
        label: &'static str,
        color: &'static str,
        message: &'static str,
    ) -> Self {
        Self { upper_threshold, label, color, message }
    }

    /// `(label, color, message)`
    pub fn as_tuple(&self) -> (&'static str, &'static str, &'static str) {
        (self.label, self.color, self.message)
    }
}

/// Ascending category bands for one standard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTable<'a> {
    standard: Standard,
    entries: &'a [Category],
}

impl<'a> CategoryTable<'a> {
    /// Build a table; thresholds must rise strictly and end at 500
    pub fn new(standard: Standard, entries: &'a [Category]) -> TableResult<Self> {
        let table = Self { standard, entries };
        table.validate()?;
        Ok(table)
    }

    pub(crate) const fn from_static(standard: Standard, entries: &'a [Category]) -> Self {
        Self { standard, entries }
    }

    /// Standard the bands belong to
    pub fn standard(&self) -> Standard {
        self.standard
    }

    /// The bands, ascending
    pub fn entries(&self) -> &'a [Category] {
        self.entries
    }

    /// Check the construction invariants
    pub fn validate(&self) -> TableResult<()> {
        let standard = self.standard;
        for (position, pair) in self.entries.windows(2).enumerate() {
            if pair[1].upper_threshold <= pair[0].upper_threshold {
                return Err(TableError::NonIncreasingThreshold { standard, position: position + 1 });
            }
        }

        match self.entries.last() {
            Some(last) if last.upper_threshold == AQI_CEILING => Ok(()),
            _ => Err(TableError::UnterminatedCategories { standard, expected: AQI_CEILING }),
        }
    }

    /// Band containing `index`; anything above the last threshold gets the last band
    pub fn categorize(&self, index: u16) -> Category {
        self.entries
            .iter()
            .find(|c| index <= c.upper_threshold)
            .or_else(|| self.entries.last())
            .copied()
            // Only reachable for an unvalidated empty table
            .unwrap_or(Category::new(AQI_CEILING, "", "", ""))
    }
}

/// Band for `index` under `standard`'s built-in categories
///
/// ```
/// use aqikit_core::{categorize, Standard};
///
/// assert_eq!(categorize(50, Standard::Epa).as_tuple().0, "Good");
/// assert_eq!(categorize(51, Standard::Epa).color, "#ffff00");
/// assert_eq!(categorize(150, Standard::Naqi).label, "Moderate");
/// ```
pub fn categorize(index: u16, standard: Standard) -> Category {
    standard.categories().categorize(index)
}
