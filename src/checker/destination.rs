use std::path::{Path, PathBuf};

use crate::naming::Level;
use crate::path::ArchivalPath;

use super::violation::{Subject, Violation, ViolationKind};

/// Names of the fund, inventory and unit a unit directory belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitIdentity {
    pub fund: String,
    pub inventory: String,
    pub unit: String,
}

impl UnitIdentity {
    #[must_use]
    pub fn new(fund: &str, inventory: &str, unit: &str) -> Self {
        Self {
            fund: fund.to_string(),
            inventory: inventory.to_string(),
            unit: unit.to_string(),
        }
    }

    /// `fund/inventory/unit` below `root`.
    #[must_use]
    pub fn under(&self, root: &Path) -> PathBuf {
        root.join(&self.fund).join(&self.inventory).join(&self.unit)
    }
}

/// Report one `AlreadyExists` violation per destination root that already
/// holds the unit's `fund/inventory/unit` path.
#[must_use]
pub fn check_destinations(
    unit: &ArchivalPath,
    identity: &UnitIdentity,
    destinations: &[PathBuf],
) -> Vec<Violation> {
    destinations
        .iter()
        .map(|root| identity.under(root))
        .filter(|candidate| candidate.exists())
        .map(|destination| {
            Violation::new(
                unit.path(),
                unit.name(),
                Subject::Directory(Level::Unit),
                ViolationKind::AlreadyExists { destination },
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "destination_tests.rs"]
mod tests;
