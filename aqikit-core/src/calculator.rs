//! Explicit calculator configuration
//!
//! Every calculation needs the same three inputs besides the data: the EPA
//! table set, the NAQI table set and a rounding rule. [`AqiCalculator`] holds
//! them so callers build the configuration once and pass it by reference;
//! there is no global table registry to mutate.
//!
//! The free functions at the crate root ([`crate::aggregate`],
//! [`crate::reconcile`], ...) run against [`AqiCalculator::default`], which
//! carries the built-in tables and half-even rounding.
//!
//! ```
//! use aqikit_core::{AqiCalculator, Pollutant, Rounding, Standard};
//!
//! let calc = AqiCalculator::default().with_rounding(Rounding::HalfUp);
//! let table = Standard::Naqi.table(Pollutant::Pm10).unwrap();
//! assert_eq!(calc.compute_index(2.5, &table), 3);
//! ```
//!
//! Aggregation and reconciliation methods live next to their result types in
//! [`crate::aggregate`] and [`crate::reconcile`].

use crate::breakpoint::{BreakpointTable, Rounding};
use crate::category::Category;
use crate::standard::{Standard, StandardTables};

/// Table sets and rounding rule used by every calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AqiCalculator<'t> {
    epa: &'t StandardTables<'t>,
    naqi: &'t StandardTables<'t>,
    rounding: Rounding,
}

impl Default for AqiCalculator<'static> {
    fn default() -> Self {
        Self::new(Standard::Epa.tables(), Standard::Naqi.tables())
    }
}

impl<'t> AqiCalculator<'t> {
    /// Calculator over two table sets, with half-even rounding
    ///
    /// Each set is slotted by its own [`StandardTables::standard`], so the
    /// argument order only matters when both sets claim the same standard
    /// (the later one wins).
    pub fn new(first: &'t StandardTables<'t>, second: &'t StandardTables<'t>) -> Self {
        let calc = Self {
            epa: Standard::Epa.tables(),
            naqi: Standard::Naqi.tables(),
            rounding: Rounding::default(),
        };
        calc.with_tables(first).with_tables(second)
    }

    /// Replace the table set for `tables.standard()`
    pub fn with_tables(mut self, tables: &'t StandardTables<'t>) -> Self {
        match tables.standard() {
            Standard::Epa => self.epa = tables,
            Standard::Naqi => self.naqi = tables,
        }
        self
    }

    /// Set the rounding rule
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Rounding rule in use
    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Table set for `standard`
    pub fn tables(&self, standard: Standard) -> &'t StandardTables<'t> {
        match standard {
            Standard::Epa => self.epa,
            Standard::Naqi => self.naqi,
        }
    }

    /// Sub-index for `concentration` under this calculator's rounding
    pub fn compute_index(&self, concentration: f64, table: &BreakpointTable<'_>) -> u16 {
        table.compute_index(concentration, self.rounding)
    }

    /// Estimated concentration for `index` under this calculator's rounding
    pub fn invert_index(&self, index: f64, table: &BreakpointTable<'_>) -> Option<f64> {
        table.invert_index(index, self.rounding)
    }

    /// Band for `index` in this calculator's `standard` categories
    pub fn categorize(&self, index: u16, standard: Standard) -> Category {
        self.tables(standard).categories().categorize(index)
    }
}
