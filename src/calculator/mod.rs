//! Resistor value calculation from color bands

mod tables;

pub use tables::{multiplier, temp_coefficient, tolerance_fraction};

use serde::Serialize;
use tracing::debug;

use crate::color::BandColor;
use crate::error::CalculationError;

/// Smallest and largest band counts with a defined layout
pub const MIN_BANDS: usize = 4;
pub const MAX_BANDS: usize = 6;

/// Electrical properties decoded from a band sequence
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Resistor {
    /// Nominal resistance in ohms
    pub resistance: f64,
    /// Symmetric tolerance in ohms (±)
    pub tolerance: f64,
    /// Temperature coefficient in ppm/°C, 6-band resistors only
    pub temp_coefficient: Option<u32>,
}

impl Resistor {
    /// Lowest resistance within tolerance
    pub fn min(&self) -> f64 {
        self.resistance - self.tolerance
    }

    /// Highest resistance within tolerance
    pub fn max(&self) -> f64 {
        self.resistance + self.tolerance
    }
}

/// Calculate a resistor from band slots as selected by a user.
///
/// Unset slots are skipped: only the order of the set bands matters, so
/// `[brown, black, -, red, gold]` reads the same as `[brown, black, red, gold]`.
pub fn calculate(slots: &[Option<BandColor>]) -> Result<Resistor, CalculationError> {
    let colors: Vec<BandColor> = slots.iter().flatten().copied().collect();
    calculate_colors(&colors)
}

/// Calculate a resistor from a compact band sequence
pub fn calculate_colors(bands: &[BandColor]) -> Result<Resistor, CalculationError> {
    debug!(count = bands.len(), "calculating resistor");

    let (digits, multiplier_band, tolerance_band, temp_band) = match *bands {
        [_, _, mult, tol] => (&bands[..2], mult, tol, None),
        [_, _, _, mult, tol] => (&bands[..3], mult, tol, None),
        [_, _, _, mult, tol, temp] => (&bands[..3], mult, tol, Some(temp)),
        _ => {
            debug!(count = bands.len(), "unsupported band count");
            return Err(CalculationError::MissingBands { found: bands.len() });
        }
    };

    let base = base_resistance(digits)?;
    let resistance = base * multiplier(multiplier_band);

    let fraction = tolerance_fraction(tolerance_band).ok_or_else(|| {
        debug!(color = %tolerance_band, "no tolerance for color");
        CalculationError::InvalidToleranceColor {
            color: tolerance_band,
        }
    })?;
    let tolerance = resistance * fraction;

    let temp_coefficient = match temp_band {
        Some(color) => Some(temp_coefficient(color).ok_or_else(|| {
            debug!(color = %color, "no temperature coefficient for color");
            CalculationError::InvalidTempCoefficientColor { color }
        })?),
        None => None,
    };

    Ok(Resistor {
        resistance,
        tolerance,
        temp_coefficient,
    })
}

/// Combine significant-digit bands into their base value.
///
/// The first digit must be 1-9, the following ones 0-9.
fn base_resistance(digits: &[BandColor]) -> Result<f64, CalculationError> {
    let mut value = 0.0;
    for (i, &color) in digits.iter().enumerate() {
        let digit = match color.digit() {
            Some(0) if i == 0 => None,
            d => d,
        };
        let Some(digit) = digit else {
            debug!(position = i + 1, color = %color, "invalid digit band");
            return Err(CalculationError::InvalidResistanceColor {
                position: i + 1,
                color,
            });
        };
        value = value * 10.0 + f64::from(digit);
    }
    Ok(value)
}

#[cfg(test)]
mod tests;
