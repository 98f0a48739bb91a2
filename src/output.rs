use colored::*;
use rescode::calculator::{multiplier, temp_coefficient, tolerance_fraction};
use rescode::{BandColor, PrefixedValues};

/// Width of the color name column in the legend
const NAME_WIDTH: usize = 8;

fn style_label(label: &str) -> ColoredString {
    label.bold()
}

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

/// Color name painted with the band's own colors
fn swatch(color: BandColor, width: usize) -> ColoredString {
    let s = color.swatch();
    let (br, bg, bb) = s.background;
    let (tr, tg, tb) = s.text;
    format!(" {:<width$} ", color.name(), width = width)
        .truecolor(tr, tg, tb)
        .on_truecolor(br, bg, bb)
}

/// Print the band slots as entered, empty slots shown as "-"
pub(crate) fn print_bands(slots: &[Option<BandColor>]) {
    print!("{}", style_label("Bands:"));
    for slot in slots {
        match slot {
            Some(color) => print!(" {}", swatch(*color, 0)),
            None => print!(" {}", "-".dimmed()),
        }
    }
    println!();
    println!();
}

pub(crate) fn print_values(values: &PrefixedValues) {
    let unit = values.unit();
    let (min, max) = values.range();

    println!(
        "{} {:.3} {}",
        style_label("Resistance: "),
        values.resistance,
        unit
    );
    println!(
        "{} ±{:.3} {} ({:.3} {} - {:.3} {})",
        style_label("Tolerance:  "),
        values.tolerance,
        unit,
        min,
        unit,
        max,
        unit
    );
    if let Some(ppm) = values.temp_coefficient {
        println!("{} {} ppm/°C", style_label("Temp. coeff:"), ppm);
    }
}

pub(crate) fn print_values_compact(values: &PrefixedValues) {
    println!("{}", values);
}

pub(crate) fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => print_error(&format!("Failed to serialize result: {}", e)),
    }
}

pub(crate) fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Format a multiplier as "×1", "×100", "×1K", "×0.01"
pub(crate) fn format_multiplier(factor: f64) -> String {
    let (value, suffix) = if factor >= 1e9 {
        (factor / 1e9, "G")
    } else if factor >= 1e6 {
        (factor / 1e6, "M")
    } else if factor >= 1e3 {
        (factor / 1e3, "K")
    } else {
        (factor, "")
    };
    format!("×{}{}", value, suffix)
}

/// Format a tolerance fraction as a percentage, e.g. 0.0025 -> "±0.25%"
pub(crate) fn format_tolerance(fraction: Option<f64>) -> String {
    match fraction {
        // Round away binary noise such as 0.0025 * 100 = 0.25000000000000006
        Some(f) => format!("±{}%", (f * 100.0 * 1e6).round() / 1e6),
        None => "-".to_string(),
    }
}

pub(crate) fn print_legend_header() {
    println!(
        "{:<w$}  {:>5}  {:<10}  {:<9}  {}",
        "Color",
        "Digit",
        "Multiplier",
        "Tolerance",
        "Temp. coeff",
        w = NAME_WIDTH + 2
    );
}

pub(crate) fn print_legend_row(color: BandColor) {
    let digit = color
        .digit()
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());
    let temp = temp_coefficient(color)
        .map(|ppm| format!("{} ppm/°C", ppm))
        .unwrap_or_else(|| "-".to_string());
    println!(
        "{}  {:>5}  {:<10}  {:<9}  {}",
        swatch(color, NAME_WIDTH),
        digit,
        format_multiplier(multiplier(color)),
        format_tolerance(tolerance_fraction(color)),
        temp
    );
}

pub(crate) fn print_legend_notes() {
    println!("Bands are read left to right: 2 or 3 digits, multiplier, tolerance,");
    println!("and on 6-band resistors a temperature coefficient.");
    println!("The first digit can't be black, silver or gold.");
}
