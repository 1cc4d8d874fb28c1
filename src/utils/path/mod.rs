//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`, `resolve_path`)
//! - [`route`]: Request path helpers (`strip_query_fragment`, `decoded_segments`)

pub mod fs;
pub mod route;

pub use fs::{normalize_path, resolve_path};
