//! Immutable per-run configuration shared by every check.

use std::path::PathBuf;

use indexmap::IndexSet;

use crate::config::{Config, normalize_extensions, validate_config};
use crate::error::Result;
use crate::integrity::{ExternalTool, ImageVerifier};
use crate::naming::{ImageNaming, LevelRules, PatternComposer};
use crate::policy::ErrorPolicy;

/// Base names skipped at fund, inventory and unit level.
///
/// Membership is exact string equality and ignores the level, so a name
/// excluded for funds is excluded for inventories and units as well.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: IndexSet<String>,
}

impl ExclusionSet {
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

/// Everything a validation run needs, resolved before traversal starts.
pub struct ValidationContext {
    pub roots: Vec<PathBuf>,
    pub destinations: Vec<PathBuf>,
    pub exclusions: ExclusionSet,
    pub rules: LevelRules,
    pub naming: ImageNaming,
    pub policy: ErrorPolicy,
    verifier: Option<Box<dyn ImageVerifier>>,
}

impl ValidationContext {
    /// Build the context, compiling patterns and locating the integrity tool.
    ///
    /// # Errors
    /// Returns a configuration error (`Config`, `InvalidPattern` or
    /// `MissingTool`); these are fatal regardless of the error policy.
    pub fn from_config(config: &Config) -> Result<Self> {
        validate_config(config)?;

        let naming_cfg = &config.naming;
        let rules = PatternComposer::new(
            &naming_cfg.fund_pattern,
            &naming_cfg.inventory_pattern,
            &naming_cfg.unit_pattern,
            &naming_cfg.delimiter,
        )
        .compose()?;

        let images = &config.images;
        let verifier: Option<Box<dyn ImageVerifier>> = if images.verify {
            let tool = ExternalTool::locate(&images.tool, images.tool_dir.as_deref())?;
            Some(Box::new(tool))
        } else {
            None
        };

        Ok(Self {
            roots: config.source.roots.clone(),
            destinations: config.source.destinations.clone(),
            exclusions: ExclusionSet::new(config.source.exclude.iter().cloned()),
            rules,
            naming: ImageNaming {
                prefixing: images.prefix,
                archive_prefix: images.archive_prefix.clone(),
                delimiter: naming_cfg.delimiter.clone(),
                number_length: images.number_length,
                extensions: normalize_extensions(&images.extensions),
            },
            policy: ErrorPolicy::from_continue_flag(config.continue_on_error),
            verifier,
        })
    }

    /// Replace the integrity verifier (`None` disables integrity checks).
    #[cfg(test)]
    #[must_use]
    pub fn with_verifier(mut self, verifier: Option<Box<dyn ImageVerifier>>) -> Self {
        self.verifier = verifier;
        self
    }

    #[must_use]
    pub fn verifier(&self) -> Option<&dyn ImageVerifier> {
        self.verifier.as_deref()
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
