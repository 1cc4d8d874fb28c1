//! `[content]` section configuration.
//!
//! Documents live at `<dir>/<type>/<locale>/<name>.<ext>`:
//!
//! ```toml
//! [content]
//! dir = "content"
//! type = "blog"
//! extensions = ["mdx"]    # add "md" to pick up plain markdown too
//! ```

use std::path::PathBuf;

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Content source.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "content")]
pub struct ContentConfig {
    /// Content root, relative to the config file.
    pub dir: PathBuf,

    /// Content type; the first directory level under the root.
    #[serde(rename = "type")]
    #[config(name = "type")]
    pub content_type: String,

    /// File extensions read as documents, without the dot.
    pub extensions: Vec<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: "content".into(),
            content_type: "blog".into(),
            extensions: vec!["mdx".into()],
        }
    }
}

impl ContentConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let ty = &self.content_type;
        if ty.is_empty() || ty.contains(['/', '\\']) || ty == "." || ty == ".." {
            diag.error(
                Self::FIELDS.content_type,
                format!("`{ty}` is not a single directory name"),
            );
        }

        if self.extensions.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.extensions,
                "no extensions configured, nothing would be scanned",
                "extensions = [\"mdx\"]",
            );
        }
        for ext in &self.extensions {
            if ext.is_empty() || ext.starts_with('.') {
                diag.error_with_hint(
                    Self::FIELDS.extensions,
                    format!("invalid extension `{ext}`"),
                    "write extensions without the leading dot, e.g. \"md\"",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::path::Path;

    fn errors(extra: &str) -> usize {
        let config = test_parse_config(extra);
        let mut diag = ConfigDiagnostics::new();
        config.content.validate(&mut diag);
        diag.len()
    }

    #[test]
    fn test_content_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.content.dir, Path::new("content"));
        assert_eq!(config.content.content_type, "blog");
        assert_eq!(config.content.extensions, vec!["mdx"]);
    }

    #[test]
    fn test_type_key_is_renamed() {
        let config = test_parse_config("[content]\ntype = \"notes\"\nextensions = [\"mdx\", \"md\"]");
        assert_eq!(config.content.content_type, "notes");
        assert_eq!(config.content.extensions, vec!["mdx", "md"]);
        assert_eq!(ContentConfig::FIELDS.content_type.as_str(), "content.type");
    }

    #[test]
    fn test_validate_content() {
        assert_eq!(errors(""), 0);
        assert_eq!(errors("[content]\ntype = \"a/b\""), 1);
        assert_eq!(errors("[content]\nextensions = []"), 1);
        assert_eq!(errors("[content]\nextensions = [\".md\", \"\"]"), 2);
    }
}
