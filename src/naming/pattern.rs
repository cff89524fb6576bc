//! Composition of the fund, inventory and unit name rules.
//!
//! Directory names at each level are formed by joining the ancestors' labels
//! with the delimiter (`42` → `42-1_А` → `42-1_А-7_Б`), so each level's rule
//! embeds the rules of the levels above it.

use std::fmt;

use regex::Regex;

use crate::error::{ArchiveGuardError, Result};

/// Hierarchy level of a directory under a source root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Fund,
    Inventory,
    Unit,
}

impl Level {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fund => "fund",
            Self::Inventory => "inventory",
            Self::Unit => "unit",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compiled name rule for one level.
#[derive(Debug, Clone)]
pub struct LevelRule {
    level: Level,
    pattern: String,
    matcher: Regex,
}

impl LevelRule {
    fn compile(level: Level, pattern: String) -> Result<Self> {
        let anchored = format!("^(?:{pattern})$");
        let matcher =
            Regex::new(&anchored).map_err(|e| ArchiveGuardError::invalid_pattern(&pattern, e))?;
        Ok(Self {
            level,
            pattern,
            matcher,
        })
    }

    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Composed pattern without anchors.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// True if the whole of `name` matches the composed pattern.
    #[must_use]
    pub fn is_full_match(&self, name: &str) -> bool {
        self.matcher.is_match(name)
    }
}

/// The three composed rules.
#[derive(Debug, Clone)]
pub struct LevelRules {
    pub fund: LevelRule,
    pub inventory: LevelRule,
    pub unit: LevelRule,
}

/// Builds [`LevelRules`] from per-level fragments and a literal delimiter.
#[derive(Debug, Clone)]
pub struct PatternComposer {
    fund: String,
    inventory: String,
    unit: String,
    delimiter: String,
}

impl PatternComposer {
    #[must_use]
    pub fn new(fund: &str, inventory: &str, unit: &str, delimiter: &str) -> Self {
        Self {
            fund: fund.to_string(),
            inventory: inventory.to_string(),
            unit: unit.to_string(),
            delimiter: delimiter.to_string(),
        }
    }

    /// Compose and compile the three rules.
    ///
    /// # Errors
    /// Returns `InvalidPattern` naming the offending fragment if any fragment
    /// is not a valid regular expression on its own.
    pub fn compose(&self) -> Result<LevelRules> {
        for fragment in [&self.fund, &self.inventory, &self.unit] {
            Regex::new(fragment).map_err(|e| ArchiveGuardError::invalid_pattern(fragment, e))?;
        }

        let delimiter = regex::escape(&self.delimiter);
        let fund = format!("(?:{})", self.fund);
        let inventory = format!("{fund}{delimiter}(?:{})", self.inventory);
        let unit = format!("{inventory}{delimiter}(?:{})", self.unit);

        Ok(LevelRules {
            fund: LevelRule::compile(Level::Fund, fund)?,
            inventory: LevelRule::compile(Level::Inventory, inventory)?,
            unit: LevelRule::compile(Level::Unit, unit)?,
        })
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
