mod mode;
mod output;

use std::path::PathBuf;

use clap::Parser;
use rescode::calculator::MAX_BANDS;
use rescode::config::{Config, OutputFormat};
use rescode::logging::init_logger;

use mode::OutputOptions;
use output::{print_error, print_warning};

#[derive(Parser)]
#[command(
    name = "rescode",
    version,
    about = "Resistor color code calculator for 4, 5 and 6 band resistors",
    after_help = "Examples:
  rescode brown black red gold                  4-band resistor (1 KΩ ±5%)
  rescode yellow violet black black brown       5-band resistor
  rescode red violet green orange blue red      6-band with temperature coefficient
  rescode brown black - red gold                Empty band slots are skipped
  rescode --json brown black red gold           JSON output
  rescode --legend                              Show the color code table"
)]
struct Args {
    /// Band colors from left to right (4 to 6 bands). Use '-' for an empty slot.
    #[arg(required_unless_present = "legend", value_name = "BAND")]
    bands: Vec<String>,

    /// Show the color code table
    #[arg(short, long)]
    legend: bool,

    /// Suppress explanations (show values only)
    #[arg(short, long)]
    quiet: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Read settings from a TOML file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let config = Config::load(args.config.as_deref()).unwrap_or_else(|e| {
        print_error(&e.to_string());
        std::process::exit(1);
    });

    init_logger(&config.logging.level, args.verbose);

    // Handle --no-color
    if args.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // Validate slot count
    if args.bands.len() > MAX_BANDS {
        print_error(&format!("Too many bands specified (max {})", MAX_BANDS));
        std::process::exit(1);
    }

    // Validate option combinations
    if args.legend && !args.bands.is_empty() {
        print_error("--legend cannot be used with band colors");
        std::process::exit(1);
    }

    if args.legend && args.json {
        print_error("--json cannot be used with --legend");
        std::process::exit(1);
    }

    let options = OutputOptions {
        quiet: args.quiet || config.output.quiet,
        format: if args.json {
            OutputFormat::Json
        } else {
            config.output.format
        },
    };

    if args.quiet && options.format == OutputFormat::Json {
        print_warning("--quiet has no effect on JSON output");
    }

    // Dispatch to appropriate mode
    if args.legend {
        mode::run_legend(options.quiet);
    } else {
        mode::run_calculate(&args.bands, &options);
    }
}
