//! CLI arguments and subcommands for android-meminfo.
//!
//! This module defines the command-line interface structure using the clap library,
//! including all flags, options, and subcommands.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Log level options for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Configuration format options for output
#[derive(Debug, Clone, ValueEnum)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

/// Document encodings for parsed reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Main CLI arguments structure
#[derive(Parser, Debug)]
#[command(
    name = "android-meminfo",
    about = "Convert the compact meminfo section of an Android dump into a JSON document",
    long_about = "Convert the compact meminfo section of an Android dump into a JSON document.\n\n\
                  Reads `dumpsys meminfo -c` style lines (proc, lostram, oom, cat, ...) from a \
                  file or stdin, keeps per-process PSS/swap facts and the lost RAM figure, and \
                  writes them as a { processes, lostRam } document. Malformed lines are skipped.",
    version,
    propagate_version = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Input file with compact meminfo lines ("-" or omitted = stdin)
    #[arg(short = 'i', long, global = true)]
    pub input: Option<PathBuf>,

    /// Write the document (or generated config) to this file instead of stdout
    #[arg(short = 'o', long, global = true)]
    pub output: Option<PathBuf>,

    /// Document encoding (overrides config)
    #[arg(short = 'f', long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long, conflicts_with = "compact", global = true)]
    pub pretty: bool,

    /// Single-line JSON output
    #[arg(long, conflicts_with = "pretty", global = true)]
    pub compact: bool,

    /// Log level (overrides config, default: info)
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Config file (YAML/JSON/TOML)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable all config file loading
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Print effective merged config and exit
    #[arg(long)]
    pub show_config: bool,

    /// Output format for --show-config
    #[arg(long, value_enum, default_value = "yaml")]
    pub config_format: ConfigFormat,

    /// Validate config and exit (return code 1 on error)
    #[arg(long)]
    pub check_config: bool,
}

/// Subcommands for additional functionality
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse input and write the report document (default)
    Parse,

    /// Print the recorded fields of a single process
    Query {
        /// Process id to look up
        #[arg(short = 'p', long)]
        pid: u32,
    },

    /// Generate configuration files (written to --output, "-" = stdout)
    Config {
        /// Config file format; also picks the default file extension
        #[arg(long, value_enum, default_value = "yaml")]
        config_format: ConfigFormat,

        /// Include comments and examples
        #[arg(long)]
        commented: bool,
    },
}
