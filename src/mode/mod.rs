//! CLI mode implementations

mod calculate;
mod legend;

pub use calculate::run_calculate;
pub use legend::run_legend;

use rescode::config::OutputFormat;

/// Output settings after merging config file and flags
pub struct OutputOptions {
    pub quiet: bool,
    pub format: OutputFormat,
}
