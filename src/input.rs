//! Input acquisition for the CLI.
//!
//! Reads the compact meminfo section from a file or stdin and hands the
//! lines to the parser. The library itself never touches files.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Reads all text from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            let text = fs::read_to_string(p)
                .with_context(|| format!("Failed to read input file {}", p.display()))?;
            debug!("Read {} bytes from {}", text.len(), p.display());
            Ok(text)
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read compact meminfo from stdin")?;
            debug!("Read {} bytes from stdin", text.len());
            Ok(text)
        }
    }
}

/// Writes `content` to `path`, or to stdout when `path` is `None` or `-`.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(p) if p.as_os_str() != "-" => fs::write(p, content)
            .with_context(|| format!("Failed to write output file {}", p.display())),
        _ => {
            println!("{}", content.trim_end_matches('\n'));
            Ok(())
        }
    }
}
