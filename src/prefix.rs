//! Metric prefix scaling for display

use std::fmt;

use serde::Serialize;

use crate::calculator::Resistor;

/// Decimal places kept on the scaled resistance
pub const DISPLAY_DECIMALS: i32 = 3;

/// Metric prefix applied to ohms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Prefix {
    #[serde(rename = "")]
    None,
    #[serde(rename = "K")]
    Kilo,
    #[serde(rename = "M")]
    Mega,
    #[serde(rename = "G")]
    Giga,
}

impl Prefix {
    pub fn symbol(self) -> &'static str {
        match self {
            Prefix::None => "",
            Prefix::Kilo => "K",
            Prefix::Mega => "M",
            Prefix::Giga => "G",
        }
    }

    /// Ohms per prefixed unit
    pub fn factor(self) -> f64 {
        match self {
            Prefix::None => 1.0,
            Prefix::Kilo => 1e3,
            Prefix::Mega => 1e6,
            Prefix::Giga => 1e9,
        }
    }

    /// Prefix for an unscaled resistance.
    ///
    /// Ranges are open on both ends, so exactly 1 MΩ and 1 GΩ stay unprefixed.
    pub fn for_resistance(ohms: f64) -> Prefix {
        if ohms > 999.0 && ohms < 1e6 {
            Prefix::Kilo
        } else if ohms > 1e6 && ohms < 1e9 {
            Prefix::Mega
        } else if ohms > 1e9 && ohms < 1e12 {
            Prefix::Giga
        } else {
            Prefix::None
        }
    }
}

/// Resistor values scaled for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrefixedValues {
    pub prefix: Prefix,
    /// Resistance in prefixed units, rounded to three decimals
    pub resistance: f64,
    /// Tolerance in prefixed units
    pub tolerance: f64,
    pub temp_coefficient: Option<u32>,
}

impl PrefixedValues {
    /// Resistance back in ohms
    pub fn to_ohms(&self) -> f64 {
        self.resistance * self.prefix.factor()
    }

    /// Scaled (min, max) bounds within tolerance
    pub fn range(&self) -> (f64, f64) {
        (
            self.resistance - self.tolerance,
            self.resistance + self.tolerance,
        )
    }

    /// Unit label, e.g. "KΩ"
    pub fn unit(&self) -> String {
        format!("{}Ω", self.prefix.symbol())
    }
}

impl fmt::Display for PrefixedValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.unit();
        write!(
            f,
            "{:.3} {} ±{:.3} {}",
            self.resistance, unit, self.tolerance, unit
        )?;
        if let Some(ppm) = self.temp_coefficient {
            write!(f, " {} ppm/°C", ppm)?;
        }
        Ok(())
    }
}

/// Scale a resistor into K/M/G units for display
pub fn format_prefixed(resistor: &Resistor) -> PrefixedValues {
    let prefix = Prefix::for_resistance(resistor.resistance);
    let factor = prefix.factor();
    PrefixedValues {
        prefix,
        resistance: round_to(resistor.resistance / factor, DISPLAY_DECIMALS),
        tolerance: resistor.tolerance / factor,
        temp_coefficient: resistor.temp_coefficient,
    }
}

/// Round half away from zero to a number of decimal places
fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
