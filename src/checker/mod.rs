//! Checks applied to entries of an archival tree.
//!
//! Every checker is a pure function of the entry and the run configuration
//! and returns the violations it found. Deciding whether to stop after a
//! violation is left to [`crate::policy`].

mod destination;
mod directory;
mod images;
mod violation;

pub use destination::{UnitIdentity, check_destinations};
pub use directory::{check_directory, check_not_empty};
pub use images::ImageSequenceValidator;
pub use violation::{Subject, Violation, ViolationKind};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
