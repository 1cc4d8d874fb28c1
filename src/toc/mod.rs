//! Table of contents: active-heading tracking and navigation markup.

pub mod nav;
pub mod tracker;

pub use nav::render_toc;
pub use tracker::DEFAULT_OFFSET;
