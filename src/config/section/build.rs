//! `[build]` section configuration.
//!
//! ```toml
//! [build]
//! output = "public"
//! ```

use std::path::PathBuf;

use macros::Config;
use serde::{Deserialize, Serialize};

/// Static build settings.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "build")]
pub struct BuildConfig {
    /// Output directory, relative to the config file.
    pub output: PathBuf,

    /// Remove the output directory before building (`--clean`).
    #[serde(skip)]
    #[config(skip)]
    pub clean: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: "public".into(),
            clean: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::config::test_parse_config;

    #[test]
    fn test_build_output() {
        let config = test_parse_config("[build]\noutput = \"dist\"");
        assert_eq!(config.build.output, Path::new("dist"));
        assert!(!config.build.clean);
    }

    #[test]
    fn test_clean_is_not_a_config_field() {
        let (_, ignored) =
            crate::config::SiteConfig::parse_with_ignored("[build]\nclean = true").unwrap();
        assert_eq!(ignored, vec!["build.clean".to_string()]);
    }
}
