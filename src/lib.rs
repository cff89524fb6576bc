pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod integrity;
pub mod naming;
pub mod path;
pub mod policy;
pub mod report;
pub mod traversal;

pub use error::{ArchiveGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATION: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
