//! Per-color lookup tables, indexed by color code

use crate::color::BandColor;

/// Multiplier band scale factors (black 10^0 through white 10^9, silver, gold)
const MULTIPLIERS: [f64; 12] = [
    1.0,
    10.0,
    100.0,
    1_000.0,
    10_000.0,
    100_000.0,
    1_000_000.0,
    10_000_000.0,
    100_000_000.0,
    1_000_000_000.0,
    0.1,  // Silver
    0.01, // Gold
];

/// Tolerance as a fraction of the resistance
const TOLERANCES: [Option<f64>; 12] = [
    None,         // Black
    Some(0.01),   // Brown   1%
    Some(0.02),   // Red     2%
    None,         // Orange
    None,         // Yellow
    Some(0.005),  // Green   0.5%
    Some(0.0025), // Blue    0.25%
    Some(0.001),  // Violet  0.1%
    Some(0.0005), // Grey    0.05%
    None,         // White
    Some(0.1),    // Silver  10%
    Some(0.05),   // Gold    5%
];

/// Temperature coefficients in ppm/°C
const TEMP_COEFFICIENTS: [Option<u32>; 12] = [
    None,      // Black
    Some(100), // Brown
    Some(50),  // Red
    Some(15),  // Orange
    Some(25),  // Yellow
    None,      // Green
    Some(10),  // Blue
    Some(5),   // Violet
    None,      // Grey
    Some(1),   // White
    None,      // Silver
    None,      // Gold
];

/// Scale factor selected by a multiplier band
pub fn multiplier(color: BandColor) -> f64 {
    MULTIPLIERS[color.code() as usize]
}

/// Tolerance fraction selected by a tolerance band, if the color has one
pub fn tolerance_fraction(color: BandColor) -> Option<f64> {
    TOLERANCES[color.code() as usize]
}

/// Temperature coefficient (ppm/°C) selected by the sixth band, if the color has one
pub fn temp_coefficient(color: BandColor) -> Option<u32> {
    TEMP_COEFFICIENTS[color.code() as usize]
}
