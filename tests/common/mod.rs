//! Common test utilities

use std::path::{Path, PathBuf};

/// Write a TOML config file into `dir` and return its path
pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("rescode.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

/// Parse a number out of output such as "1.000 KΩ"
pub fn leading_number(s: &str) -> f64 {
    s.split_whitespace()
        .next()
        .and_then(|t| t.trim_start_matches('±').parse().ok())
        .unwrap_or_else(|| panic!("no number in {:?}", s))
}
