//! `[toc]` section configuration.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::toc::DEFAULT_OFFSET;

/// Table-of-contents tracking.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "toc")]
pub struct TocConfig {
    /// Distance in pixels below the viewport top at which a heading
    /// becomes active, and above which a clicked heading is placed.
    pub offset: f64,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
        }
    }
}

impl TocConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.offset.is_finite() || self.offset < 0.0 {
            diag.error(
                Self::FIELDS.offset,
                format!("must be a non-negative number, got {}", self.offset),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_toc_offset() {
        assert_eq!(test_parse_config("").toc.offset, 100.0);
        assert_eq!(test_parse_config("[toc]\noffset = 64.0").toc.offset, 64.0);
    }

    #[test]
    fn test_negative_offset_rejected() {
        let config = test_parse_config("[toc]\noffset = -1.0");
        let mut diag = ConfigDiagnostics::new();
        config.toc.validate(&mut diag);
        assert_eq!(diag.errors()[0].field, TocConfig::FIELDS.offset);
    }
}
