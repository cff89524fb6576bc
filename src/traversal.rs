//! Depth-first walk over source roots, funds, inventories, units and images.
//!
//! Each directory's children are visited in natural order and every subtree
//! is finished before its next sibling is entered. Every violation goes
//! through the [`ViolationLog`]; under [`ErrorPolicy::AbortOnFirst`] the
//! first one unwinds the whole walk.
//!
//! [`ErrorPolicy::AbortOnFirst`]: crate::policy::ErrorPolicy::AbortOnFirst

use std::ops::ControlFlow;

use crate::checker::{
    ImageSequenceValidator, Subject, UnitIdentity, Violation, ViolationKind, check_destinations,
    check_directory, check_not_empty,
};
use crate::context::ValidationContext;
use crate::error::Result;
use crate::naming::{Level, LevelRule};
use crate::path::{ArchivalPath, list_children};
use crate::policy::ViolationLog;
use crate::report::Reporter;
use crate::{EXIT_SUCCESS, EXIT_VIOLATION};

/// Return early with `Break` when a nested step asked to stop.
macro_rules! proceed {
    ($flow:expr) => {
        if $flow.is_break() {
            return Ok(ControlFlow::Break(()));
        }
    };
}

/// Result of a validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every root was traversed without a violation.
    Success,
    /// Every root was traversed; violations were recorded along the way.
    CompletedWithViolations(Vec<Violation>),
    /// The run stopped at this violation.
    Aborted(Violation),
}

impl Outcome {
    /// Process exit code for this outcome. Recorded violations in a
    /// continue-on-error run do not fail the process.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Success | Self::CompletedWithViolations(_) => EXIT_SUCCESS,
            Self::Aborted(_) => EXIT_VIOLATION,
        }
    }

    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Success => &[],
            Self::CompletedWithViolations(violations) => violations,
            Self::Aborted(violation) => std::slice::from_ref(violation),
        }
    }
}

/// Walks the configured roots and applies every check.
pub struct Validator<'a> {
    ctx: &'a ValidationContext,
}

impl<'a> Validator<'a> {
    #[must_use]
    pub const fn new(ctx: &'a ValidationContext) -> Self {
        Self { ctx }
    }

    /// Validate every configured source root.
    ///
    /// # Errors
    /// Returns an error if a directory cannot be listed or the reporter
    /// cannot write. Violations are not errors; they shape the [`Outcome`].
    pub fn run(&self, reporter: &mut Reporter) -> Result<Outcome> {
        reporter.info("Validation started")?;

        let mut log = ViolationLog::new(self.ctx.policy, reporter);
        let flow = self.scan_sources(&mut log)?;

        if flow.is_break() {
            log.reporter().info("Validation aborted")?;
        } else {
            log.reporter().info("Validation finished")?;
        }

        let mut recorded = log.into_recorded();
        Ok(match (flow, recorded.is_empty()) {
            (ControlFlow::Break(()), _) => recorded.pop().map_or(Outcome::Success, Outcome::Aborted),
            (ControlFlow::Continue(()), true) => Outcome::Success,
            (ControlFlow::Continue(()), false) => Outcome::CompletedWithViolations(recorded),
        })
    }

    fn scan_sources(&self, log: &mut ViolationLog<'_>) -> Result<ControlFlow<()>> {
        for root in &self.ctx.roots {
            let root = ArchivalPath::new(root);
            log.reporter()
                .info(&format!("Checking source root: {}", root.path().display()))?;

            if !root.is_dir() {
                let violation = Violation::new(
                    root.path(),
                    root.name(),
                    Subject::Root,
                    ViolationKind::NotADirectory,
                );
                proceed!(log.report(violation)?);
                continue;
            }

            for fund in list_children(root.path())? {
                proceed!(self.scan_fund(&fund, log)?);
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn scan_fund(&self, fund: &ArchivalPath, log: &mut ViolationLog<'_>) -> Result<ControlFlow<()>> {
        if self.skip_excluded(fund, Level::Fund, log)? {
            return Ok(ControlFlow::Continue(()));
        }

        proceed!(Self::check_level(fund, &self.ctx.rules.fund, "", log)?);
        if !fund.is_dir() {
            return Ok(ControlFlow::Continue(()));
        }

        for inventory in list_children(fund.path())? {
            proceed!(self.scan_inventory(fund, &inventory, log)?);
        }
        Ok(ControlFlow::Continue(()))
    }

    fn scan_inventory(
        &self,
        fund: &ArchivalPath,
        inventory: &ArchivalPath,
        log: &mut ViolationLog<'_>,
    ) -> Result<ControlFlow<()>> {
        if self.skip_excluded(inventory, Level::Inventory, log)? {
            return Ok(ControlFlow::Continue(()));
        }

        let rule = &self.ctx.rules.inventory;
        proceed!(Self::check_level(inventory, rule, fund.name(), log)?);
        if !inventory.is_dir() {
            return Ok(ControlFlow::Continue(()));
        }

        for unit in list_children(inventory.path())? {
            let identity = UnitIdentity::new(fund.name(), inventory.name(), unit.name());
            proceed!(self.scan_unit(&unit, &identity, log)?);
        }
        Ok(ControlFlow::Continue(()))
    }

    fn scan_unit(
        &self,
        unit: &ArchivalPath,
        identity: &UnitIdentity,
        log: &mut ViolationLog<'_>,
    ) -> Result<ControlFlow<()>> {
        if self.skip_excluded(unit, Level::Unit, log)? {
            return Ok(ControlFlow::Continue(()));
        }

        proceed!(log.report_all(check_destinations(unit, identity, &self.ctx.destinations))?);

        let rule = &self.ctx.rules.unit;
        proceed!(Self::check_level(unit, rule, &identity.inventory, log)?);
        if !unit.is_dir() {
            return Ok(ControlFlow::Continue(()));
        }

        let entries = list_children(unit.path())?;
        log.reporter().verbose(&format!(
            "Checking {} image(s) in {}",
            entries.len(),
            unit.path().display()
        ))?;

        let validator = ImageSequenceValidator::new(&self.ctx.naming, self.ctx.verifier());
        for (index, entry) in entries.iter().enumerate() {
            log.reporter()
                .debug(&format!("Checking image #{index}: {}", entry.path().display()))?;
            proceed!(log.report_all(validator.check_entry(unit.name(), index, entry))?);
            proceed!(log.report_all(validator.verify_entry(entry))?);
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Name checks for one directory, then its emptiness. The directory is
    /// only read once the name checks let the walk continue.
    fn check_level(
        dir: &ArchivalPath,
        rule: &LevelRule,
        required_prefix: &str,
        log: &mut ViolationLog<'_>,
    ) -> Result<ControlFlow<()>> {
        proceed!(log.report_all(check_directory(dir, rule, required_prefix))?);
        log.report_all(check_not_empty(dir, rule)?)
    }

    /// Announce the check of `dir`, or skip it when its name is excluded.
    fn skip_excluded(
        &self,
        dir: &ArchivalPath,
        level: Level,
        log: &mut ViolationLog<'_>,
    ) -> Result<bool> {
        let path = dir.path().display();
        if self.ctx.exclusions.contains(dir.name()) {
            log.reporter()
                .info(&format!("Skipping excluded {level}: {path}"))?;
            return Ok(true);
        }

        log.reporter().info(&format!("Checking {level}: {path}"))?;
        Ok(false)
    }
}

#[cfg(test)]
#[path = "traversal_tests.rs"]
mod tests;
