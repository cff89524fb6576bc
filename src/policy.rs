//! What happens after a violation: report it, then stop or keep going.

use std::ops::ControlFlow;

use crate::checker::Violation;
use crate::error::Result;
use crate::report::Reporter;

/// Error handling strategy for a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop the whole run at the first violation.
    #[default]
    AbortOnFirst,
    /// Record every violation and traverse everything.
    CollectAndContinue,
}

impl ErrorPolicy {
    #[must_use]
    pub const fn from_continue_flag(continue_on_error: bool) -> Self {
        if continue_on_error {
            Self::CollectAndContinue
        } else {
            Self::AbortOnFirst
        }
    }

    /// Verdict after one violation has been reported.
    #[must_use]
    pub const fn verdict(self) -> ControlFlow<()> {
        match self {
            Self::AbortOnFirst => ControlFlow::Break(()),
            Self::CollectAndContinue => ControlFlow::Continue(()),
        }
    }
}

/// Reports violations through a [`Reporter`] and records them, applying an
/// [`ErrorPolicy`] to decide whether traversal may continue.
pub struct ViolationLog<'r> {
    policy: ErrorPolicy,
    reporter: &'r mut Reporter,
    recorded: Vec<Violation>,
}

impl<'r> ViolationLog<'r> {
    #[must_use]
    pub const fn new(policy: ErrorPolicy, reporter: &'r mut Reporter) -> Self {
        Self {
            policy,
            reporter,
            recorded: Vec::new(),
        }
    }

    /// Report `violation` and return whether traversal may continue.
    ///
    /// # Errors
    /// Returns an error if the reporter cannot write the message.
    pub fn report(&mut self, violation: Violation) -> Result<ControlFlow<()>> {
        self.reporter.error(&violation.to_string())?;
        self.recorded.push(violation);
        Ok(self.policy.verdict())
    }

    /// Report every violation in order, stopping at the first `Break`.
    ///
    /// # Errors
    /// Returns an error if the reporter cannot write a message.
    pub fn report_all(
        &mut self,
        violations: impl IntoIterator<Item = Violation>,
    ) -> Result<ControlFlow<()>> {
        for violation in violations {
            if self.report(violation)?.is_break() {
                return Ok(ControlFlow::Break(()));
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    pub fn reporter(&mut self) -> &mut Reporter {
        self.reporter
    }

    #[must_use]
    pub fn into_recorded(self) -> Vec<Violation> {
        self.recorded
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
