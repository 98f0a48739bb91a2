//! Resistor band color definitions

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ParseColorError;

/// One of the twelve standard resistor band colors.
///
/// The declaration order is the color code order: the numeric code of a color
/// is its position here, and every lookup table in the crate is indexed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BandColor {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Grey,
    White,
    Silver,
    Gold,
}

/// Terminal swatch for a band: background and contrasting text color (RGB)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub background: (u8, u8, u8),
    pub text: (u8, u8, u8),
}

const BLACK: (u8, u8, u8) = (0x00, 0x00, 0x00);
const WHITE: (u8, u8, u8) = (0xFF, 0xFF, 0xFF);

/// Swatches in color code order
const SWATCHES: [Swatch; 12] = [
    Swatch { background: BLACK, text: WHITE },
    Swatch { background: (0x8B, 0x45, 0x13), text: BLACK }, // Saddle brown
    Swatch { background: (0xFF, 0x00, 0x00), text: BLACK },
    Swatch { background: (0xFF, 0x8C, 0x00), text: BLACK }, // Dark orange
    Swatch { background: (0xFF, 0xFF, 0x00), text: BLACK },
    Swatch { background: (0x00, 0xFF, 0x00), text: BLACK },
    Swatch { background: (0x00, 0x00, 0xFF), text: WHITE },
    Swatch { background: (0x80, 0x00, 0x80), text: WHITE }, // Purple
    Swatch { background: (0x88, 0x88, 0x88), text: BLACK },
    Swatch { background: WHITE, text: BLACK },
    Swatch { background: (0xC0, 0xC0, 0xC0), text: BLACK },
    Swatch { background: (0xFF, 0xD7, 0x00), text: BLACK },
];

impl BandColor {
    /// All colors in color code order
    pub const ALL: [BandColor; 12] = [
        BandColor::Black,
        BandColor::Brown,
        BandColor::Red,
        BandColor::Orange,
        BandColor::Yellow,
        BandColor::Green,
        BandColor::Blue,
        BandColor::Violet,
        BandColor::Grey,
        BandColor::White,
        BandColor::Silver,
        BandColor::Gold,
    ];

    /// Numeric color code (0 for black through 11 for gold)
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<BandColor> {
        Self::ALL.get(code as usize).copied()
    }

    /// Digit value, if this color may appear in a significant-digit band
    pub fn digit(self) -> Option<u8> {
        match self.code() {
            code @ 0..=9 => Some(code),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BandColor::Black => "black",
            BandColor::Brown => "brown",
            BandColor::Red => "red",
            BandColor::Orange => "orange",
            BandColor::Yellow => "yellow",
            BandColor::Green => "green",
            BandColor::Blue => "blue",
            BandColor::Violet => "violet",
            BandColor::Grey => "grey",
            BandColor::White => "white",
            BandColor::Silver => "silver",
            BandColor::Gold => "gold",
        }
    }

    pub fn swatch(self) -> Swatch {
        SWATCHES[self.code() as usize]
    }
}

impl fmt::Display for BandColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BandColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "gray" => return Ok(BandColor::Grey),
            "purple" => return Ok(BandColor::Violet),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| ParseColorError::UnknownColor(s.to_string()))
    }
}

/// Tokens that leave a band slot unset
const UNSET_TOKENS: [&str; 4] = ["-", "_", "none", "clear"];

/// Parse one band slot; unset tokens yield `None`
pub fn parse_slot(s: &str) -> Result<Option<BandColor>, ParseColorError> {
    let token = s.trim();
    if UNSET_TOKENS.iter().any(|t| t.eq_ignore_ascii_case(token)) {
        return Ok(None);
    }
    token.parse().map(Some)
}
