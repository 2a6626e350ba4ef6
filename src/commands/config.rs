//! Config command implementation.
//!
//! Generates configuration files in various formats.

use std::path::PathBuf;

use crate::cli::ConfigFormat;
use crate::config::{default_config_file_name, render_config, Config};
use crate::input::write_output;

/// Generates configuration files.
pub fn command_config(
    output: Option<PathBuf>,
    format: ConfigFormat,
    commented: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output.unwrap_or_else(|| PathBuf::from(default_config_file_name(&format)));
    let content = generate_config(&format, commented)?;

    write_output(Some(&output), &content)?;
    if output.to_string_lossy() != "-" {
        println!("✅ Configuration written to: {}", output.display());
    }

    Ok(())
}

/// Renders the default configuration, with a comment header for YAML if asked.
fn generate_config(
    format: &ConfigFormat,
    commented: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    let content = render_config(&Config::default(), format)?;
    Ok(match format {
        ConfigFormat::Yaml if commented => add_config_comments(content),
        _ => content,
    })
}

/// Adds comments to YAML configuration.
fn add_config_comments(yaml: String) -> String {
    let comments = r#"# Android Compact Meminfo Converter Configuration
# ================================================
#
# Output
# ------
# output_format: "json"        # json or yaml
# pretty: true                 # Pretty-print JSON documents
#
# Logging
# -------
# log_level: "info"            # off, error, warn, info, debug, trace
#                              # debug also lists every dropped line
"#;

    format!("{comments}\n{yaml}")
}
