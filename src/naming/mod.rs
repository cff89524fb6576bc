//! Name-level rules shared by every hierarchy level.
//!
//! - [`natural`]: human ordering of directory and file names
//! - [`pattern`]: fund/inventory/unit pattern composition
//! - [`image_name`]: expected file name for an image at a given index

mod image_name;
mod natural;
mod pattern;

pub use image_name::ImageNaming;
pub use natural::{natural_cmp, natural_key};
pub use pattern::{Level, LevelRule, LevelRules, PatternComposer};
