//! android-meminfo - version 0.1.0
//!
//! Converts the compact meminfo section of an Android dump into a JSON document.
//! This is the main entry point that resolves configuration and dispatches subcommands.

mod cli;
mod commands;
mod config;
mod input;

use clap::Parser;
use tracing::{debug, info, Level};

use cli::{Args, Commands, LogLevel};
use commands::{command_config, command_parse, command_query};
use config::{config_source, resolve_config, show_config, validate_effective_config, Config};

/// Initializes tracing logging subsystem with configured log level.
fn setup_logging(config: &Config) {
    let log_level = match config.log_level() {
        LogLevel::Off => return,
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    };

    // Logs go to stderr so stdout stays a clean document
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("⚠️  Failed to set tracing subscriber: {}", e);
        return;
    }

    debug!("Logging initialized with level: {:?}", config.log_level());
}

/// Resolves and validates configuration.
/// Exits the process with error code 1 if validation fails.
fn load_validated_config(args: &Args) -> Result<Config, Box<dyn std::error::Error>> {
    let config = resolve_config(args)?;
    if let Err(e) = validate_effective_config(&config) {
        eprintln!("❌ Configuration invalid: {}", e);
        std::process::exit(1);
    }
    Ok(config)
}

/// Main application entry point.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Early config resolution for show/check modes
    if args.show_config || args.check_config {
        let config = resolve_config(&args)?;

        if args.check_config {
            if let Err(e) = validate_effective_config(&config) {
                eprintln!("❌ Configuration invalid: {}", e);
                std::process::exit(1);
            }
            println!("✅ Configuration is valid");
            return Ok(());
        }

        return show_config(&config, args.config_format.clone());
    }

    // Config generation does not need an effective config
    if let Some(Commands::Config {
        config_format,
        commented,
    }) = &args.command
    {
        return command_config(args.output.clone(), config_format.clone(), *commented);
    }

    let config = load_validated_config(&args)?;
    setup_logging(&config);
    if let Some(path) = config_source(&args) {
        info!("Loaded configuration from: {}", path.display());
    }

    let input = args.input.as_deref();
    match &args.command {
        None | Some(Commands::Parse) => command_parse(input, args.output.as_deref(), &config),
        Some(Commands::Query { pid }) => command_query(input, *pid),
        Some(Commands::Config { .. }) => unreachable!("Config handled above"),
    }
}
