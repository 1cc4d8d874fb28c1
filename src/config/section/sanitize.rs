//! `[sanitize]` section configuration.
//!
//! Extends the built-in allow-lists. Executable tags and `on*` attributes
//! are refused whatever is listed here.
//!
//! ```toml
//! [sanitize]
//! extra_tags = ["img"]
//! extra_attributes = ["src", "alt"]
//! enhance_code_blocks = true
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::sanitize::{SanitizeError, SanitizePolicy, is_event_handler};

/// HTML sanitizer settings.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "sanitize")]
pub struct SanitizeConfig {
    /// Tags allowed on top of the defaults.
    pub extra_tags: Vec<String>,

    /// Attributes allowed on top of the defaults.
    pub extra_attributes: Vec<String>,

    /// Turn code blocks into widgets with a language label and copy button.
    pub enhance_code_blocks: bool,
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        Self {
            extra_tags: Vec::new(),
            extra_attributes: Vec::new(),
            enhance_code_blocks: true,
        }
    }
}

impl SanitizeConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for attr in self.extra_attributes.iter().filter(|a| is_event_handler(a)) {
            diag.warn(
                Self::FIELDS.extra_attributes,
                format!("event handler `{attr}` is never allowed"),
            );
        }

        if let Err(SanitizeError::InvalidName { kind, name }) = SanitizePolicy::from_config(self) {
            let field = match kind {
                "tag" => Self::FIELDS.extra_tags,
                _ => Self::FIELDS.extra_attributes,
            };
            diag.error_with_hint(
                field,
                format!("invalid {kind} name `{name}`"),
                "names start with a letter and use letters, digits, `-` or `_`",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn validate(extra: &str) -> ConfigDiagnostics {
        let config = test_parse_config(extra);
        let mut diag = ConfigDiagnostics::new();
        config.sanitize.validate(&mut diag);
        diag
    }

    #[test]
    fn test_sanitize_defaults() {
        let config = test_parse_config("");
        assert!(config.sanitize.extra_tags.is_empty());
        assert!(config.sanitize.enhance_code_blocks);
    }

    #[test]
    fn test_event_handler_warns() {
        let diag = validate("[sanitize]\nextra_attributes = [\"onclick\", \"title\"]");
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_invalid_tag_is_error() {
        let diag = validate("[sanitize]\nextra_tags = [\"my tag\"]");
        assert_eq!(diag.errors()[0].field, SanitizeConfig::FIELDS.extra_tags);
    }
}
