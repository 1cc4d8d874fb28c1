//! `[site]` section configuration.
//!
//! The locale list is closed: documents in any other locale are scanned but
//! never routed.
//!
//! ```toml
//! [site]
//! title = "Blog"
//! locales = ["en", "zh", "ja"]
//! default_locale = "en"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Site identity and locales.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteSectionConfig {
    /// Shown in page titles and on index pages.
    pub title: String,

    /// Supported locales, in display order.
    pub locales: Vec<String>,

    /// Locale served without a path prefix.
    pub default_locale: String,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: "Blog".into(),
            locales: vec!["en".into(), "zh".into(), "ja".into()],
            default_locale: "en".into(),
        }
    }
}

impl SiteSectionConfig {
    pub fn is_supported(&self, locale: &str) -> bool {
        self.locales.iter().any(|l| l == locale)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.locales.is_empty() {
            diag.error(Self::FIELDS.locales, "at least one locale is required");
            return;
        }

        for (i, locale) in self.locales.iter().enumerate() {
            if locale.is_empty() || locale.contains(['/', '\\', '?', '#']) {
                diag.error(
                    Self::FIELDS.locales,
                    format!("`{locale}` cannot be used as a path segment"),
                );
            } else if self.locales[..i].contains(locale) {
                diag.error(Self::FIELDS.locales, format!("`{locale}` is listed twice"));
            }
        }

        if !self.is_supported(&self.default_locale) {
            diag.error_with_hint(
                Self::FIELDS.default_locale,
                format!("`{}` is not in `site.locales`", self.default_locale),
                format!("use one of: {}", self.locales.join(", ")),
            );
        }
    }
}
