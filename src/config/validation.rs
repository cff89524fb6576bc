//! Semantic validation of a parsed configuration.

use indexmap::IndexSet;

use crate::error::{ArchiveGuardError, Result};

use super::Config;

/// Widest supported image index.
pub const MAX_NUMBER_LENGTH: usize = 20;

/// Check values that parse but cannot describe a valid run.
///
/// # Errors
/// Returns a `Config` error describing the first invalid value.
pub fn validate_config(config: &Config) -> Result<()> {
    let images = &config.images;
    if !(1..=MAX_NUMBER_LENGTH).contains(&images.number_length) {
        return Err(ArchiveGuardError::Config(format!(
            "Invalid images.number_length value: {}. Use a width between 1 and {MAX_NUMBER_LENGTH}.",
            images.number_length
        )));
    }

    if config.naming.delimiter.is_empty() {
        return Err(ArchiveGuardError::Config(
            "naming.delimiter must not be empty".to_string(),
        ));
    }

    if images.extensions.is_empty() {
        return Err(ArchiveGuardError::Config(
            "images.extensions must list at least one extension".to_string(),
        ));
    }

    if let Some(i) = images
        .extensions
        .iter()
        .position(|ext| ext.trim_start_matches('.').is_empty())
    {
        return Err(ArchiveGuardError::Config(format!(
            "Empty extension at images.extensions[{i}]"
        )));
    }

    Ok(())
}

/// Normalize extensions to start with a dot, dropping duplicates but keeping
/// the configured order.
#[must_use]
pub fn normalize_extensions(extensions: &[String]) -> IndexSet<String> {
    extensions
        .iter()
        .map(|ext| {
            if ext.starts_with('.') {
                ext.clone()
            } else {
                format!(".{ext}")
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
