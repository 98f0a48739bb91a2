use std::path::PathBuf;

use thiserror::Error;

use crate::color::BandColor;

/// Why a band sequence could not be turned into a resistor.
///
/// Only the first offending band is reported, scanning left to right.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculationError {
    #[error("Not enough bands to calculate a result (expected 4, 5 or 6, found {found})")]
    MissingBands { found: usize },

    #[error(
        "Band {position} can't consist of the colors {} (got {color})",
        forbidden_digit_colors(.position)
    )]
    InvalidResistanceColor { position: usize, color: BandColor },

    #[error("There is no tolerance associated to the color {color}")]
    InvalidToleranceColor { color: BandColor },

    #[error("There is no temperature coefficient associated to the color {color}")]
    InvalidTempCoefficientColor { color: BandColor },
}

fn forbidden_digit_colors(position: &usize) -> &'static str {
    if *position == 1 {
        "black, silver or gold"
    } else {
        "silver or gold"
    }
}

impl CalculationError {
    /// Human-readable message for display
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    #[error("Unknown band color '{0}' (expected black, brown, red, orange, yellow, green, blue, violet, grey, white, silver, gold or '-' for an empty band)")]
    UnknownColor(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
