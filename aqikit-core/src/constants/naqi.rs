//! Indian NAQI Tables
//!
//! Breakpoints of the National Air Quality Index published by the Central
//! Pollution Control Board (CPCB), as also used by SAFAR.
//!
//! Units:
//! - PM2.5, PM10, NO₂, SO₂, NH₃: µg/m³ (24-hr)
//! - O₃: µg/m³ (8-hr)
//! - CO: mg/m³ (8-hr)
//!
//! NAQI bands are wider than EPA's above 100 (101-200 is a single
//! "Moderate" band) and the scale has a separate 301-400 "Very Poor" band.

use crate::breakpoint::Breakpoint;
use crate::category::Category;
use crate::standard::TableRevision;

/// Identity of this table set.
pub const NAQI_REVISION: TableRevision = TableRevision {
    name: "CPCB-NAQI-2014",
    published: "2014-10-17",
};

/// PM2.5 (µg/m³, 24-hr)
pub const NAQI_PM25: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 30.0, 0, 50),       // Good
    Breakpoint::new(31.0, 60.0, 51, 100),    // Satisfactory
    Breakpoint::new(61.0, 90.0, 101, 200),   // Moderate
    Breakpoint::new(91.0, 120.0, 201, 300),  // Poor
    Breakpoint::new(121.0, 250.0, 301, 400), // Very Poor
    Breakpoint::new(251.0, 500.0, 401, 500), // Severe
];

/// PM10 (µg/m³, 24-hr)
pub const NAQI_PM10: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 50.0, 0, 50),
    Breakpoint::new(51.0, 100.0, 51, 100),
    Breakpoint::new(101.0, 250.0, 101, 200),
    Breakpoint::new(251.0, 350.0, 201, 300),
    Breakpoint::new(351.0, 430.0, 301, 400),
    Breakpoint::new(431.0, 600.0, 401, 500),
];

/// O₃ (µg/m³, 8-hr)
pub const NAQI_O3: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 50.0, 0, 50),
    Breakpoint::new(51.0, 100.0, 51, 100),
    Breakpoint::new(101.0, 168.0, 101, 200),
    Breakpoint::new(169.0, 208.0, 201, 300),
    Breakpoint::new(209.0, 748.0, 301, 400),
    Breakpoint::new(749.0, 1000.0, 401, 500),
];

/// CO (mg/m³, 8-hr)
pub const NAQI_CO: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 1.0, 0, 50),
    Breakpoint::new(1.1, 2.0, 51, 100),
    Breakpoint::new(2.1, 10.0, 101, 200),
    Breakpoint::new(10.1, 17.0, 201, 300),
    Breakpoint::new(17.1, 34.0, 301, 400),
    Breakpoint::new(34.1, 50.0, 401, 500),
];

/// NO₂ (µg/m³, 24-hr)
pub const NAQI_NO2: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 40.0, 0, 50),
    Breakpoint::new(41.0, 80.0, 51, 100),
    Breakpoint::new(81.0, 180.0, 101, 200),
    Breakpoint::new(181.0, 280.0, 201, 300),
    Breakpoint::new(281.0, 400.0, 301, 400),
    Breakpoint::new(401.0, 600.0, 401, 500),
];

/// SO₂ (µg/m³, 24-hr)
pub const NAQI_SO2: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 40.0, 0, 50),
    Breakpoint::new(41.0, 80.0, 51, 100),
    Breakpoint::new(81.0, 380.0, 101, 200),
    Breakpoint::new(381.0, 800.0, 201, 300),
    Breakpoint::new(801.0, 1600.0, 301, 400),
    Breakpoint::new(1601.0, 2400.0, 401, 500),
];

/// NH₃ (µg/m³, 24-hr). No EPA counterpart.
pub const NAQI_NH3: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 200.0, 0, 50),
    Breakpoint::new(201.0, 400.0, 51, 100),
    Breakpoint::new(401.0, 800.0, 101, 200),
    Breakpoint::new(801.0, 1200.0, 201, 300),
    Breakpoint::new(1201.0, 1800.0, 301, 400),
    Breakpoint::new(1801.0, 2400.0, 401, 500),
];

/// NAQI category bands.
///
/// Colors and health statements as published by CPCB.
pub const NAQI_CATEGORIES: [Category; 6] = [
    Category::new(50, "Good", "#009966", "Minimal impact on health."),
    Category::new(100, "Satisfactory", "#ffde33", "Minor breathing discomfort to sensitive people."),
    Category::new(
        200,
        "Moderate",
        "#ff9933",
        "Breathing discomfort to people with lungs, asthma and heart diseases.",
    ),
    Category::new(300, "Poor", "#ff0000", "Breathing discomfort to most people on prolonged exposure."),
    Category::new(
        400,
        "Very Poor",
        "#990066",
        "Respiratory illness on prolonged exposure. Effect may be felt even in healthy people.",
    ),
    Category::new(
        500,
        "Severe",
        "#7e0023",
        "Affects healthy people and seriously affects those with existing diseases. Avoid outdoor activities.",
    ),
];
