//! Parse command implementation.
//!
//! Converts compact meminfo lines into the report document.

use std::path::Path;
use std::time::Instant;

use android_meminfo::{CompactMemInfoParser, MemInfoReport};
use tracing::info;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::input::{read_input, write_output};

/// Encodes a report document in the configured format.
pub fn render_report(
    report: &MemInfoReport,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    Ok(match format {
        OutputFormat::Json => report.to_json_string(pretty)?,
        OutputFormat::Yaml => serde_yaml::to_string(&report.to_document())?,
    })
}

/// Parses the input and writes the document.
pub fn command_parse(
    input: Option<&Path>,
    output: Option<&Path>,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;

    let start = Instant::now();
    let report = CompactMemInfoParser::new().parse_str(&text);
    info!(
        "Parsed {} processes (lost RAM {} kB) in {:.2}ms",
        report.len(),
        report.lost_ram(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    let content = render_report(&report, config.output_format(), config.pretty())?;
    write_output(output, &content)?;
    Ok(())
}
