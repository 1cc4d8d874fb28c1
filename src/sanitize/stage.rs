//! HTML values tagged with how far through the pipeline they are.
//!
//! ```text
//! RawHtml ──sanitize──▶ SanitizedHtml ──rewrite──▶ RewrittenHtml ──sanitize──▶ SafeHtml
//! ```
//!
//! Only this module's pipeline can mint the later stages, so a `SafeHtml`
//! has always been through the final sanitize pass.

use std::fmt;

use serde::Serialize;

/// Untrusted HTML as stored on a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawHtml(String);

impl RawHtml {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Output of the first sanitize pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedHtml(String);

impl SanitizedHtml {
    pub(super) fn new(html: String) -> Self {
        Self(html)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Markup produced by a rewrite step; must be sanitized again before use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenHtml(String);

impl RewrittenHtml {
    pub(super) fn new(html: String) -> Self {
        Self(html)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// HTML that passed the final sanitize pass and may be written to a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SafeHtml(String);

impl SafeHtml {
    pub(super) fn new(html: String) -> Self {
        Self(html)
    }

    /// The fail-safe body: nothing at all.
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
