use crate::cli::{CheckArgs, Cli};
use crate::config::Config;
use crate::context::ValidationContext;
use crate::report::{ConsoleSink, FileSink, Reporter, SeverityFilter, print_error};
use crate::traversal::Validator;
use crate::{ArchiveGuardError, EXIT_CONFIG_ERROR, Result};

use super::load_config;

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_error(e.error_type(), &e.message());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Runs a validation and maps its outcome to an exit code.
///
/// # Errors
/// Returns an error if the configuration is invalid, no source root is
/// configured, the integrity tool or log file is unavailable, or a directory
/// cannot be read.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);
    if config.source.roots.is_empty() {
        return Err(ArchiveGuardError::Config(
            "No source roots configured. Pass them to `check` or set source.roots.".to_string(),
        ));
    }

    // 3. Resolve patterns, naming and the integrity tool before touching the tree
    let ctx = ValidationContext::from_config(&config)?;

    // 4. Wire up console and log file
    let mut reporter = build_reporter(&config, cli)?;

    // 5. Traverse
    let outcome = Validator::new(&ctx).run(&mut reporter)?;
    tracing::debug!(
        violations = outcome.violations().len(),
        exit_code = outcome.exit_code(),
        "validation run complete"
    );

    Ok(outcome.exit_code())
}

/// Merge command line values into the loaded configuration.
///
/// Sources, destinations and extensions replace the configured lists when
/// given; exclusions extend them.
pub fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if !args.sources.is_empty() {
        config.source.roots.clone_from(&args.sources);
    }
    if !args.destinations.is_empty() {
        config.source.destinations.clone_from(&args.destinations);
    }
    config.source.exclude.extend(args.exclude.iter().cloned());

    let naming = &mut config.naming;
    for (value, target) in [
        (&args.fund_pattern, &mut naming.fund_pattern),
        (&args.inventory_pattern, &mut naming.inventory_pattern),
        (&args.unit_pattern, &mut naming.unit_pattern),
        (&args.delimiter, &mut naming.delimiter),
    ] {
        if let Some(value) = value {
            target.clone_from(value);
        }
    }

    let images = &mut config.images;
    if let Some(ext) = &args.ext {
        images.extensions.clone_from(ext);
    }
    if let Some(number_length) = args.number_length {
        images.number_length = number_length;
    }
    if let Some(archive_prefix) = &args.archive_prefix {
        images.archive_prefix.clone_from(archive_prefix);
    }
    if let Some(tool) = &args.image_tool {
        images.tool.clone_from(tool);
    }
    if args.tool_dir.is_some() {
        images.tool_dir.clone_from(&args.tool_dir);
    }
    images.prefix |= args.prefix;
    images.verify |= args.verify_images;

    if args.log_file.is_some() {
        config.log.file.clone_from(&args.log_file);
    }
    config.continue_on_error |= args.continue_on_error;
}

/// Console plus the optional log file, both honoring the same verbosity.
///
/// # Errors
/// Returns `LogFile` if the configured log file cannot be opened.
pub fn build_reporter(config: &Config, cli: &Cli) -> Result<Reporter> {
    let filter = SeverityFilter::new(
        config.log.verbose || cli.verbose >= 1,
        config.log.debug || cli.verbose >= 2,
    );

    let mut reporter = Reporter::new().with_sink(filter, ConsoleSink::new(cli.color.into()));
    if let Some(path) = &config.log.file {
        tracing::debug!(path = %path.display(), "appending to log file");
        reporter = reporter.with_sink(filter, FileSink::open(path)?);
    }
    Ok(reporter)
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
