//! Tag and attribute allow-lists.

use thiserror::Error;

use crate::config::SanitizeConfig;
use crate::log;

/// Tags kept by default: formatting, lists, headings, quotes, code,
/// tables, containers and the copy button.
pub const DEFAULT_TAGS: &[&str] = &[
    "b", "i", "em", "strong", "a", "p", "br", "ul", "ol", "li", "h1", "h2", "h3", "h4", "h5",
    "h6", "blockquote", "code", "pre", "hr", "span", "div", "table", "thead", "tbody", "tr", "td",
    "th", "button",
];

/// Attributes kept by default on any allowed tag.
pub const DEFAULT_ATTRIBUTES: &[&str] = &[
    "href",
    "src",
    "alt",
    "class",
    "style",
    "target",
    "rel",
    "colspan",
    "rowspan",
    "id",
    "data-language",
    "data-code",
];

/// Tags that can run or load code; never allowed, whatever the config says.
const FORBIDDEN_TAGS: &[&str] = &[
    "script", "style", "iframe", "frame", "frameset", "object", "embed", "applet", "base", "link",
    "meta", "form", "noscript", "template", "svg", "math",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SanitizeError {
    #[error("invalid {kind} name `{name}` in sanitize allow-list")]
    InvalidName { kind: &'static str, name: String },
}

/// Event-handler attributes (`onclick`, `onerror`, ...).
pub fn is_event_handler(name: &str) -> bool {
    name.get(..2).is_some_and(|p| p.eq_ignore_ascii_case("on"))
}

fn is_forbidden_tag(name: &str) -> bool {
    FORBIDDEN_TAGS.iter().any(|t| t.eq_ignore_ascii_case(name))
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Effective allow-lists for one sanitizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizePolicy {
    tags: Vec<String>,
    attributes: Vec<String>,
}

impl Default for SanitizePolicy {
    fn default() -> Self {
        Self {
            tags: DEFAULT_TAGS.iter().map(|s| s.to_string()).collect(),
            attributes: DEFAULT_ATTRIBUTES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SanitizePolicy {
    /// Default lists extended by user entries.
    ///
    /// Executable tags and event-handler attributes are dropped with a log
    /// line; malformed names are an error.
    pub fn with_extra(
        extra_tags: &[String],
        extra_attributes: &[String],
    ) -> Result<Self, SanitizeError> {
        let mut policy = Self::default();

        for tag in extra_tags {
            let tag = checked_name("tag", tag)?;
            if is_forbidden_tag(&tag) {
                log!("sanitize"; "refusing to allow <{}>", tag);
            } else if !policy.tags.contains(&tag) {
                policy.tags.push(tag);
            }
        }

        for attr in extra_attributes {
            let attr = checked_name("attribute", attr)?;
            if is_event_handler(&attr) {
                log!("sanitize"; "refusing to allow event handler `{}`", attr);
            } else if !policy.attributes.contains(&attr) {
                policy.attributes.push(attr);
            }
        }

        Ok(policy)
    }

    pub fn from_config(config: &SanitizeConfig) -> Result<Self, SanitizeError> {
        Self::with_extra(&config.extra_tags, &config.extra_attributes)
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }
}

fn checked_name(kind: &'static str, name: &str) -> Result<String, SanitizeError> {
    let name = name.trim();
    if !is_valid_name(name) {
        return Err(SanitizeError::InvalidName {
            kind,
            name: name.to_string(),
        });
    }
    Ok(name.to_ascii_lowercase())
}
