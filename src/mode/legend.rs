//! Color code legend mode

use rescode::BandColor;

use crate::output::{print_legend_header, print_legend_notes, print_legend_row, print_separator};

/// Print the color code table
pub fn run_legend(quiet: bool) {
    print_legend_header();
    print_separator(60);
    for color in BandColor::ALL {
        print_legend_row(color);
    }

    if !quiet {
        println!();
        print_legend_notes();
    }
}
