use std::fs;

use crate::cli::InitArgs;
use crate::config::{
    DEFAULT_DELIMITER, DEFAULT_EXTENSION, DEFAULT_FUND_PATTERN, DEFAULT_INVENTORY_PATTERN,
    DEFAULT_NUMBER_LENGTH, DEFAULT_UNIT_PATTERN,
};
use crate::integrity::DEFAULT_TOOL;
use crate::report::print_error;
use crate::{ArchiveGuardError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error(e.error_type(), &e.message());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ArchiveGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    format!(
        r#"# archive-guard configuration file

# Log every violation and keep validating instead of stopping at the first one.
# The run still exits with code 0; check the log for violations.
continue_on_error = false

[source]
# Source roots; each one contains fund directories.
roots = []

# Archive roots checked for units that were already ingested
# (<dest>/<fund>/<inventory>/<unit>).
destinations = []

# Directory base names skipped at fund, inventory and unit level.
exclude = []

[naming]
# Regex fragments. Inventory names are <fund><delimiter><inventory_pattern>,
# unit names are <inventory><delimiter><unit_pattern>; whole names must match.
fund_pattern = '{DEFAULT_FUND_PATTERN}'
inventory_pattern = '{DEFAULT_INVENTORY_PATTERN}'
unit_pattern = '{DEFAULT_UNIT_PATTERN}'
delimiter = "{DEFAULT_DELIMITER}"

[images]
# Allowed extensions; the leading dot is optional.
extensions = ["{DEFAULT_EXTENSION}"]

# Zero-padded width of the image index (000000, 000001, ...).
number_length = {DEFAULT_NUMBER_LENGTH}

# Expect <archive_prefix>-<unit>-<index><ext> instead of <index><ext>.
prefix = false
archive_prefix = ""

# Run an external tool on every image; a non-zero exit marks it corrupt.
verify = false
tool = "{DEFAULT_TOOL}"
# tool_dir = "/usr/local/bin"

[log]
# Append log lines to this file.
# file = "archive-guard.log"
verbose = false
debug = false
"#
    )
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
