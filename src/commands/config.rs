use std::fs;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs, ConfigOutputFormat};
use crate::config::{Config, validate_config};
use crate::naming::PatternComposer;
use crate::report::print_error;
use crate::{ArchiveGuardError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::load_config;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), *format, cli),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(e.error_type(), &e.message());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// Besides the TOML syntax and value ranges, every naming pattern is
/// compiled so a broken regex is caught before a run.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, has
/// out-of-range values or an invalid naming pattern.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(ArchiveGuardError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&content)?;

    validate_config(&config)?;
    let naming = &config.naming;
    PatternComposer::new(
        &naming.fund_pattern,
        &naming.inventory_pattern,
        &naming.unit_pattern,
        &naming.delimiter,
    )
    .compose()?;

    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: ConfigOutputFormat, cli: &Cli) -> i32 {
    match run_config_show_impl(config_path, format, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(e.error_type(), &e.message());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded or serialization fails.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigOutputFormat,
    cli: &Cli,
) -> Result<String> {
    let config = load_config(config_path, cli.no_config)?;

    match format {
        ConfigOutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        ConfigOutputFormat::Text => format_config_text(&config),
    }
}

/// Render the configuration as TOML under a heading.
///
/// # Errors
/// Returns an error if the configuration cannot be serialized.
pub fn format_config_text(config: &Config) -> Result<String> {
    let body = toml::to_string_pretty(config)?;
    Ok(format!("=== Effective Configuration ===\n\n{body}"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
