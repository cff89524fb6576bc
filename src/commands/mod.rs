pub mod check;
pub mod config;
pub mod init;

use std::path::Path;

use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::Result;

pub use check::{apply_cli_overrides, build_reporter, run_check, run_check_impl};
pub use config::{format_config_text, run_config, run_config_show_impl, run_config_validate_impl};
pub use init::{generate_config_template, run_init, run_init_impl};

/// Load the configuration for a command.
///
/// `--no-config` wins over everything; an explicit path is loaded directly;
/// otherwise the usual search order applies.
///
/// # Errors
/// Returns an error if the selected file cannot be read, parsed or validated.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}
