//! Configuration management for android-meminfo.
//!
//! This module handles loading, merging, and validating configuration from files
//! and CLI arguments. It supports YAML, JSON, and TOML formats.

use crate::cli::{Args, ConfigFormat, LogLevel, OutputFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Default configuration constants
pub const DEFAULT_OUTPUT_FORMAT: &str = "json";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Base name of a generated config file in the working directory.
pub const LOCAL_CONFIG_STEM: &str = "android-meminfo";

const DEFAULT_CONFIG_PATHS: [&str; 5] = [
    "/etc/android-meminfo/config.yaml",
    "/etc/android-meminfo/config.yml",
    "android-meminfo.yaml",
    "android-meminfo.json",
    "android-meminfo.toml",
];

/// Effective configuration; every field falls back to a default when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// "json" | "yaml"
    #[serde(alias = "output-format")]
    pub output_format: Option<String>,
    /// Pretty-print JSON documents
    pub pretty: Option<bool>,
    /// off, error, warn, info, debug, trace
    #[serde(alias = "log-level")]
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: Some(DEFAULT_OUTPUT_FORMAT.into()),
            pretty: Some(true),
            log_level: Some(DEFAULT_LOG_LEVEL.into()),
        }
    }
}

impl Config {
    /// Output encoding; assumes the config has been validated.
    pub fn output_format(&self) -> OutputFormat {
        match self.output_format.as_deref() {
            Some("yaml") => OutputFormat::Yaml,
            _ => OutputFormat::Json,
        }
    }

    pub fn pretty(&self) -> bool {
        self.pretty.unwrap_or(true)
    }

    /// Log level; assumes the config has been validated.
    pub fn log_level(&self) -> LogLevel {
        self.log_level
            .as_deref()
            .and_then(parse_log_level)
            .unwrap_or(LogLevel::Info)
    }
}

fn parse_log_level(s: &str) -> Option<LogLevel> {
    match s {
        "off" => Some(LogLevel::Off),
        "error" => Some(LogLevel::Error),
        "warn" => Some(LogLevel::Warn),
        "info" => Some(LogLevel::Info),
        "debug" => Some(LogLevel::Debug),
        "trace" => Some(LogLevel::Trace),
        _ => None,
    }
}

fn log_level_name(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Off => "off",
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}

/// Validate effective config (used by --check-config and at startup)
pub fn validate_effective_config(cfg: &Config) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(format) = cfg.output_format.as_deref() {
        if format != "json" && format != "yaml" {
            return Err(format!(
                "Invalid output_format '{}', expected 'json' or 'yaml'",
                format
            )
            .into());
        }
    }

    if let Some(level) = cfg.log_level.as_deref() {
        if parse_log_level(level).is_none() {
            return Err(format!(
                "Invalid log_level '{}', expected one of off/error/warn/info/debug/trace",
                level
            )
            .into());
        }
    }

    Ok(())
}

/// Resolves configuration from CLI args, config file, and defaults.
/// This enforces precedence: CLI (if provided) > config file > default.
pub fn resolve_config(args: &Args) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if args.no_config {
        Config::default()
    } else {
        load_config(args.config.as_deref())?
    };

    if let Some(format) = args.format {
        config.output_format = Some(
            match format {
                OutputFormat::Json => "json",
                OutputFormat::Yaml => "yaml",
            }
            .into(),
        );
    }

    if args.pretty {
        config.pretty = Some(true);
    }
    if args.compact {
        config.pretty = Some(false);
    }

    if let Some(level) = args.log_level {
        config.log_level = Some(log_level_name(level).into());
    }

    Ok(config)
}

/// File name `config` writes when no output path is given. The extension
/// matches the format so the file loads back with the right parser.
pub fn default_config_file_name(format: &ConfigFormat) -> String {
    let ext = match format {
        ConfigFormat::Yaml => "yaml",
        ConfigFormat::Json => "json",
        ConfigFormat::Toml => "toml",
    };
    format!("{LOCAL_CONFIG_STEM}.{ext}")
}

/// First existing default config file; relative entries resolve against `base`.
pub fn find_default_config(base: &Path) -> Option<PathBuf> {
    DEFAULT_CONFIG_PATHS
        .iter()
        .map(|p| base.join(p))
        .find(|p| p.exists())
}

/// Config file that `resolve_config` reads for these args, if any.
pub fn config_source(args: &Args) -> Option<PathBuf> {
    if args.no_config {
        return None;
    }
    args.config
        .clone()
        .or_else(|| find_default_config(Path::new(".")))
}

/// Loads a config file, trying the default locations when no path is given.
/// Missing fields keep their defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match find_default_config(Path::new(".")) {
            Some(p) => p,
            None => return Ok(Config::default()),
        },
    };

    if !path.exists() {
        return Err(format!("Config file not found: {}", path.display()).into());
    }

    let content = fs::read_to_string(&path)?;

    let loaded: Config = match path.extension().and_then(|s| s.to_str()) {
        Some("json") => serde_json::from_str(&content)?,
        Some("toml") => toml::from_str(&content)?,
        // Default to YAML
        _ => serde_yaml::from_str(&content)?,
    };

    Ok(merge_with_defaults(loaded))
}

fn merge_with_defaults(loaded: Config) -> Config {
    let defaults = Config::default();
    Config {
        output_format: loaded.output_format.or(defaults.output_format),
        pretty: loaded.pretty.or(defaults.pretty),
        log_level: loaded.log_level.or(defaults.log_level),
    }
}

/// Renders a config in the requested format.
pub fn render_config(
    config: &Config,
    format: &ConfigFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    Ok(match format {
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        ConfigFormat::Toml => toml::to_string_pretty(config)?,
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
    })
}

/// Shows configuration in requested format
pub fn show_config(config: &Config, format: ConfigFormat) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", render_config(config, &format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::tempdir;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["android-meminfo", "--no-config"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(validate_effective_config(&config).is_ok());
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert!(config.pretty());
        assert_eq!(config.log_level(), LogLevel::Info);
    }

    #[test]
    fn test_validate_rejects_unknown_values() {
        let config = Config {
            output_format: Some("xml".into()),
            ..Config::default()
        };
        assert!(validate_effective_config(&config).is_err());

        let config = Config {
            log_level: Some("loud".into()),
            ..Config::default()
        };
        assert!(validate_effective_config(&config).is_err());
    }

    #[test]
    fn test_cli_overrides_config() {
        let config = resolve_config(&args(&[
            "--format",
            "yaml",
            "--compact",
            "--log-level",
            "debug",
        ]))
        .unwrap();
        assert_eq!(config.output_format(), OutputFormat::Yaml);
        assert!(!config.pretty());
        assert_eq!(config.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_load_yaml_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("meminfo.yaml");
        fs::write(&path, "output_format: yaml\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.output_format(), OutputFormat::Yaml);
        assert_eq!(config.pretty, Some(true));
        assert_eq!(config.log_level.as_deref(), Some(DEFAULT_LOG_LEVEL));
    }

    #[test]
    fn test_load_json_and_toml() {
        let dir = tempdir().unwrap();

        let json = dir.path().join("meminfo.json");
        fs::write(&json, r#"{"pretty": false, "log_level": "warn"}"#).unwrap();
        let config = load_config(Some(&json)).unwrap();
        assert!(!config.pretty());
        assert_eq!(config.log_level(), LogLevel::Warn);

        let toml_path = dir.path().join("meminfo.toml");
        fs::write(&toml_path, "output_format = \"yaml\"\n").unwrap();
        let config = load_config(Some(&toml_path)).unwrap();
        assert_eq!(config.output_format(), OutputFormat::Yaml);
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let dir = tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("absent.yaml"))).is_err());
    }

    #[test]
    fn test_generated_default_files_autoload() {
        for format in [ConfigFormat::Yaml, ConfigFormat::Json, ConfigFormat::Toml] {
            let dir = tempdir().unwrap();
            let path = dir.path().join(default_config_file_name(&format));
            fs::write(&path, render_config(&Config::default(), &format).unwrap()).unwrap();

            let found = find_default_config(dir.path()).expect("generated file is a default path");
            assert_eq!(found, path);
            let config = load_config(Some(&found)).unwrap();
            assert_eq!(config, Config::default(), "format {format:?}");
        }
    }

    #[test]
    fn test_config_source_follows_flags() {
        assert_eq!(config_source(&args(&["-c", "custom.toml"])), None);

        let explicit = Args::try_parse_from(["android-meminfo", "-c", "custom.toml"]).unwrap();
        assert_eq!(config_source(&explicit), Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_render_config_roundtrip_yaml() {
        let config = Config::default();
        let text = render_config(&config, &ConfigFormat::Yaml).unwrap();
        let back: Config = serde_yaml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
