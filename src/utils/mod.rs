//! Utility modules shared by the pipeline and the CLI.

pub mod html;
pub mod path;
pub mod plural;

pub use plural::{plural_count, plural_s};
