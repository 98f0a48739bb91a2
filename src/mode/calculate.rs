//! Resistor calculation mode

use rescode::config::OutputFormat;
use rescode::{BandColor, calculate, format_prefixed, parse_slot};
use tracing::info;

use crate::output::{print_bands, print_error, print_json, print_values, print_values_compact};

use super::OutputOptions;

/// Parse band arguments into slots, exiting on an unknown color
fn parse_slots(args: &[String]) -> Vec<Option<BandColor>> {
    args.iter()
        .map(|arg| {
            parse_slot(arg).unwrap_or_else(|e| {
                print_error(&e.to_string());
                std::process::exit(1);
            })
        })
        .collect()
}

/// Calculate and print a resistor from band color arguments
pub fn run_calculate(band_args: &[String], options: &OutputOptions) {
    let slots = parse_slots(band_args);

    let resistor = calculate(&slots).unwrap_or_else(|e| {
        print_error(&e.message());
        std::process::exit(1);
    });
    let values = format_prefixed(&resistor);
    info!(
        ohms = resistor.resistance,
        prefix = values.prefix.symbol(),
        "calculated resistor"
    );

    match options.format {
        OutputFormat::Json => print_json(&values),
        OutputFormat::Text if options.quiet => print_values_compact(&values),
        OutputFormat::Text => {
            print_bands(&slots);
            print_values(&values);
        }
    }
}
