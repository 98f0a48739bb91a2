//! Resistor color code calculator
//!
//! Decodes 4, 5 and 6 band resistor color codes into resistance, tolerance
//! and temperature coefficient, and scales results into K/M/G units for display.
//!
//! ```
//! use rescode::{BandColor::*, calculate, format_prefixed};
//!
//! let resistor = calculate(&[Some(Brown), Some(Black), Some(Red), Some(Gold)]).unwrap();
//! let display = format_prefixed(&resistor);
//! assert_eq!(display.to_string(), "1.000 KΩ ±0.050 KΩ");
//! ```

pub mod calculator;
pub mod color;
pub mod config;
pub mod error;
pub mod logging;
pub mod prefix;

pub use calculator::{Resistor, calculate, calculate_colors};
pub use color::{BandColor, parse_slot};
pub use error::{CalculationError, ConfigError, ParseColorError};
pub use prefix::{Prefix, PrefixedValues, format_prefixed};
