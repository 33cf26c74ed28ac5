//! US EPA AQI Tables
//!
//! Breakpoints from the Technical Assistance Document for the Reporting of
//! Daily Air Quality, as amended by the February 2024 PM NAAQS revision
//! (PM2.5 "Good" ends at 9.0 µg/m³, "Hazardous" tops out at 325.4 µg/m³).
//!
//! Units:
//! - PM2.5, PM10: µg/m³ (24-hr)
//! - O₃: ppm (8-hr)
//! - CO: ppm (8-hr)
//! - NO₂, SO₂: ppb (1-hr)
//!
//! The 8-hour ozone table stops at 300; higher ozone is reported from the
//! 1-hour table, which this engine does not carry.

use crate::breakpoint::Breakpoint;
use crate::category::Category;
use crate::standard::TableRevision;

/// Identity of this table set.
pub const EPA_REVISION: TableRevision = TableRevision {
    name: "EPA-2024-02",
    published: "2024-02-07",
};

/// PM2.5 (µg/m³, 24-hr)
pub const EPA_PM25: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 9.0, 0, 50),        // Good
    Breakpoint::new(9.1, 35.4, 51, 100),     // Moderate
    Breakpoint::new(35.5, 55.4, 101, 150),   // Unhealthy for Sensitive Groups
    Breakpoint::new(55.5, 125.4, 151, 200),  // Unhealthy
    Breakpoint::new(125.5, 225.4, 201, 300), // Very Unhealthy
    Breakpoint::new(225.5, 325.4, 301, 500), // Hazardous
];

/// PM10 (µg/m³, 24-hr)
pub const EPA_PM10: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 54.0, 0, 50),
    Breakpoint::new(55.0, 154.0, 51, 100),
    Breakpoint::new(155.0, 254.0, 101, 150),
    Breakpoint::new(255.0, 354.0, 151, 200),
    Breakpoint::new(355.0, 424.0, 201, 300),
    Breakpoint::new(425.0, 604.0, 301, 500),
];

/// O₃ (ppm, 8-hr)
pub const EPA_O3: [Breakpoint; 5] = [
    Breakpoint::new(0.000, 0.054, 0, 50),
    Breakpoint::new(0.055, 0.070, 51, 100),
    Breakpoint::new(0.071, 0.085, 101, 150),
    Breakpoint::new(0.086, 0.105, 151, 200),
    Breakpoint::new(0.106, 0.200, 201, 300),
];

/// CO (ppm, 8-hr)
pub const EPA_CO: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 4.4, 0, 50),
    Breakpoint::new(4.5, 9.4, 51, 100),
    Breakpoint::new(9.5, 12.4, 101, 150),
    Breakpoint::new(12.5, 15.4, 151, 200),
    Breakpoint::new(15.5, 30.4, 201, 300),
    Breakpoint::new(30.5, 50.4, 301, 500),
];

/// NO₂ (ppb, 1-hr)
pub const EPA_NO2: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 53.0, 0, 50),
    Breakpoint::new(54.0, 100.0, 51, 100),
    Breakpoint::new(101.0, 360.0, 101, 150),
    Breakpoint::new(361.0, 649.0, 151, 200),
    Breakpoint::new(650.0, 1249.0, 201, 300),
    Breakpoint::new(1250.0, 2049.0, 301, 500),
];

/// SO₂ (ppb, 1-hr)
pub const EPA_SO2: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 35.0, 0, 50),
    Breakpoint::new(36.0, 75.0, 51, 100),
    Breakpoint::new(76.0, 185.0, 101, 150),
    Breakpoint::new(186.0, 304.0, 151, 200),
    Breakpoint::new(305.0, 604.0, 201, 300),
    Breakpoint::new(605.0, 1004.0, 301, 500),
];

/// EPA category bands.
///
/// Colors and messages as published by AirNow.
pub const EPA_CATEGORIES: [Category; 6] = [
    Category::new(
        50,
        "Good",
        "#00e400",
        "Air quality is satisfactory, and air pollution poses little or no risk.",
    ),
    Category::new(
        100,
        "Moderate",
        "#ffff00",
        "Air quality is acceptable. However, there may be a risk for some people, particularly those who are unusually sensitive to air pollution.",
    ),
    Category::new(
        150,
        "Unhealthy for Sensitive Groups",
        "#ff7e00",
        "Members of sensitive groups may experience health effects. The general public is less likely to be affected.",
    ),
    Category::new(
        200,
        "Unhealthy",
        "#ff0000",
        "Some members of the general public may experience health effects; members of sensitive groups may experience more serious health effects.",
    ),
    Category::new(
        300,
        "Very Unhealthy",
        "#8f3f97",
        "Health alert: The risk of health effects is increased for everyone.",
    ),
    Category::new(
        500,
        "Hazardous",
        "#7e0023",
        "Health warning of emergency conditions: everyone is more likely to be affected.",
    ),
];
