//! National standards and their versioned table sets
//!
//! A [`StandardTables`] bundles everything one standard needs: a breakpoint
//! table per pollutant it covers, its category bands, and the revision those
//! numbers were taken from. The revision is part of the identity of a table
//! set; two sets with the same numbers but different revisions are different
//! sets.
//!
//! The built-in sets ([`StandardTables::EPA`], [`StandardTables::NAQI`]) are
//! `static` data. Custom sets go through [`StandardTables::new`], which
//! validates every table before handing the set out.

use core::fmt;

use crate::breakpoint::{Breakpoint, BreakpointTable};
use crate::category::{Category, CategoryTable};
use crate::constants::epa::{
    EPA_CATEGORIES, EPA_CO, EPA_NO2, EPA_O3, EPA_PM10, EPA_PM25, EPA_REVISION, EPA_SO2,
};
use crate::constants::naqi::{
    NAQI_CATEGORIES, NAQI_CO, NAQI_NH3, NAQI_NO2, NAQI_O3, NAQI_PM10, NAQI_PM25,
    NAQI_REVISION, NAQI_SO2,
};
use crate::errors::{TableError, TableResult};
use crate::pollutant::{Pollutant, POLLUTANT_COUNT};
use crate::units::ConcentrationUnit;

/// Index standards supported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Standard {
    /// US Environmental Protection Agency AQI
    Epa,
    /// Indian National Air Quality Index
    Naqi,
}

impl Standard {
    /// Wire identifier (`"epa"`, `"naqi"`)
    pub const fn as_str(self) -> &'static str {
        match self {
            Standard::Epa => "epa",
            Standard::Naqi => "naqi",
        }
    }

    /// Human-readable name
    pub const fn display_name(self) -> &'static str {
        match self {
            Standard::Epa => "US EPA AQI",
            Standard::Naqi => "Indian NAQI",
        }
    }

    /// Built-in table set
    pub fn tables(self) -> &'static StandardTables<'static> {
        match self {
            Standard::Epa => &StandardTables::EPA,
            Standard::Naqi => &StandardTables::NAQI,
        }
    }

    /// Built-in breakpoint table for `pollutant`, if this standard covers it
    pub fn table(self, pollutant: Pollutant) -> Option<BreakpointTable<'static>> {
        self.tables().table(pollutant)
    }

    /// Built-in category bands
    pub fn categories(self) -> CategoryTable<'static> {
        self.tables().categories()
    }

    /// Unit the built-in table for `pollutant` expects
    pub const fn expected_unit(self, pollutant: Pollutant) -> Option<ConcentrationUnit> {
        use ConcentrationUnit::*;
        match (self, pollutant) {
            (_, Pollutant::Pm25 | Pollutant::Pm10) => Some(MicrogramsPerCubicMeter),
            (Standard::Epa, Pollutant::O3 | Pollutant::Co) => Some(PartsPerMillion),
            (Standard::Epa, Pollutant::No2 | Pollutant::So2) => Some(PartsPerBillion),
            (Standard::Epa, Pollutant::Nh3) => None,
            (Standard::Naqi, Pollutant::Co) => Some(MilligramsPerCubicMeter),
            (Standard::Naqi, _) => Some(MicrogramsPerCubicMeter),
        }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a table set's numbers come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableRevision {
    /// Revision name, e.g. `"EPA-2024-02"`
    pub name: &'static str,
    /// Publication date (ISO 8601)
    pub published: &'static str,
}

/// All tables of one standard at one revision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardTables<'a> {
    standard: Standard,
    revision: TableRevision,
    breakpoints: [Option<BreakpointTable<'a>>; POLLUTANT_COUNT],
    categories: CategoryTable<'a>,
}

impl StandardTables<'static> {
    /// US EPA, 2024 PM revision
    pub const EPA: StandardTables<'static> = StandardTables {
        standard: Standard::Epa,
        revision: EPA_REVISION,
        breakpoints: [
            Some(BreakpointTable::from_static(Pollutant::Pm25, &EPA_PM25)),
            Some(BreakpointTable::from_static(Pollutant::Pm10, &EPA_PM10)),
            Some(BreakpointTable::from_static(Pollutant::O3, &EPA_O3)),
            Some(BreakpointTable::from_static(Pollutant::Co, &EPA_CO)),
            Some(BreakpointTable::from_static(Pollutant::No2, &EPA_NO2)),
            Some(BreakpointTable::from_static(Pollutant::So2, &EPA_SO2)),
            None,
        ],
        categories: CategoryTable::from_static(Standard::Epa, &EPA_CATEGORIES),
    };

    /// Indian NAQI (CPCB)
    pub const NAQI: StandardTables<'static> = StandardTables {
        standard: Standard::Naqi,
        revision: NAQI_REVISION,
        breakpoints: [
            Some(BreakpointTable::from_static(Pollutant::Pm25, &NAQI_PM25)),
            Some(BreakpointTable::from_static(Pollutant::Pm10, &NAQI_PM10)),
            Some(BreakpointTable::from_static(Pollutant::O3, &NAQI_O3)),
            Some(BreakpointTable::from_static(Pollutant::Co, &NAQI_CO)),
            Some(BreakpointTable::from_static(Pollutant::No2, &NAQI_NO2)),
            Some(BreakpointTable::from_static(Pollutant::So2, &NAQI_SO2)),
            Some(BreakpointTable::from_static(Pollutant::Nh3, &NAQI_NH3)),
        ],
        categories: CategoryTable::from_static(Standard::Naqi, &NAQI_CATEGORIES),
    };
}

impl<'a> StandardTables<'a> {
    /// Build and validate a custom table set
    ///
    /// Pollutants not listed in `tables` are not covered by the set and are
    /// skipped during aggregation, like NH₃ under EPA.
    pub fn new(
        standard: Standard,
        revision: TableRevision,
        categories: &'a [Category],
        tables: &[(Pollutant, &'a [Breakpoint])],
    ) -> TableResult<Self> {
        let categories = CategoryTable::new(standard, categories)?;
        let mut breakpoints = [None; POLLUTANT_COUNT];

        for (pollutant, brackets) in tables {
            let slot = &mut breakpoints[pollutant.index()];
            if slot.is_some() {
                return Err(TableError::DuplicateTable { standard, pollutant: *pollutant });
            }
            *slot = Some(BreakpointTable::new(*pollutant, brackets)?);
        }

        Ok(Self { standard, revision, breakpoints, categories })
    }

    /// Standard these tables implement
    pub fn standard(&self) -> Standard {
        self.standard
    }

    /// Revision the numbers come from
    pub fn revision(&self) -> TableRevision {
        self.revision
    }

    /// Breakpoint table for `pollutant`, if covered
    pub fn table(&self, pollutant: Pollutant) -> Option<BreakpointTable<'a>> {
        self.breakpoints[pollutant.index()]
    }

    /// Category bands
    pub fn categories(&self) -> CategoryTable<'a> {
        self.categories
    }

    /// Pollutants with a table, in declaration order
    pub fn pollutants(&self) -> impl Iterator<Item = Pollutant> + '_ {
        Pollutant::ALL.into_iter().filter(|p| self.breakpoints[p.index()].is_some())
    }

    /// Validate every table in the set
    pub fn validate(&self) -> TableResult<()> {
        self.categories.validate()?;
        self.breakpoints.iter().flatten().try_for_each(|t| t.validate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_sets_are_valid() {
        assert_eq!(StandardTables::EPA.validate(), Ok(()));
        assert_eq!(StandardTables::NAQI.validate(), Ok(()));
    }

    #[test]
    fn builtin_tables_sit_in_their_own_slot() {
        for standard in [Standard::Epa, Standard::Naqi] {
            for p in standard.tables().pollutants() {
                assert_eq!(standard.table(p).map(|t| t.pollutant()), Some(p));
            }
        }
    }

    #[test]
    fn nh3_is_naqi_only() {
        assert!(Standard::Epa.table(Pollutant::Nh3).is_none());
        assert!(Standard::Naqi.table(Pollutant::Nh3).is_some());
        assert_eq!(Standard::Epa.tables().pollutants().count(), 6);
        assert_eq!(Standard::Naqi.tables().pollutants().count(), 7);
    }

    #[test]
    fn revisions_identify_the_sets() {
        assert_eq!(Standard::Epa.tables().revision().name, "EPA-2024-02");
        assert_eq!(Standard::Naqi.tables().revision().name, "CPCB-NAQI-2014");
    }

    #[test]
    fn expected_units_follow_the_tables() {
        assert_eq!(Standard::Epa.expected_unit(Pollutant::O3), Some(ConcentrationUnit::PartsPerMillion));
        assert_eq!(Standard::Epa.expected_unit(Pollutant::So2), Some(ConcentrationUnit::PartsPerBillion));
        assert_eq!(Standard::Epa.expected_unit(Pollutant::Nh3), None);
        assert_eq!(
            Standard::Naqi.expected_unit(Pollutant::Co),
            Some(ConcentrationUnit::MilligramsPerCubicMeter)
        );
        assert_eq!(
            Standard::Naqi.expected_unit(Pollutant::O3),
            Some(ConcentrationUnit::MicrogramsPerCubicMeter)
        );
    }

    #[test]
    fn custom_set_rejects_duplicates() {
        let revision = TableRevision { name: "test", published: "2025-01-01" };
        let result = StandardTables::new(
            Standard::Epa,
            revision,
            &EPA_CATEGORIES,
            &[(Pollutant::Pm25, &EPA_PM25), (Pollutant::Pm25, &EPA_PM25)],
        );
        assert_eq!(
            result,
            Err(TableError::DuplicateTable { standard: Standard::Epa, pollutant: Pollutant::Pm25 })
        );
    }

    #[test]
    fn custom_set_covers_only_listed_pollutants() {
        let revision = TableRevision { name: "pm-only", published: "2025-01-01" };
        let tables = StandardTables::new(
            Standard::Epa,
            revision,
            &EPA_CATEGORIES,
            &[(Pollutant::Pm25, &EPA_PM25)],
        )
        .unwrap();

        assert_eq!(tables.pollutants().collect::<Vec<_>>(), vec![Pollutant::Pm25]);
        assert_eq!(tables.revision(), revision);
    }
}
