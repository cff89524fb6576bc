use std::cell::RefCell;
use std::rc::Rc;

use super::{LogSink, Severity};
use crate::error::Result;

/// Sink that keeps messages in memory. Clones share the same buffer, so a
/// clone kept by the caller sees everything written through the reporter.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Rc<RefCell<Vec<(Severity, String)>>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> Vec<(Severity, String)> {
        self.entries.borrow().clone()
    }

    /// Messages of the given severity, in order.
    #[must_use]
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl LogSink for MemorySink {
    fn write(&mut self, severity: Severity, message: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .push((severity, message.to_string()));
        Ok(())
    }
}
