//! Document slug: the composite `type/locale/name` primary key.

use std::fmt;

use serde::Serialize;

/// Composite document identifier `"<type>/<locale>/<name>"`.
///
/// None of the three segments may contain `/`, so the split is unambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    pub fn new(content_type: &str, locale: &str, name: &str) -> Self {
        Self(format!("{content_type}/{locale}/{name}"))
    }

    /// Parse a slug string. Returns `None` unless it has exactly three
    /// non-empty segments.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split('/');
        let (ty, locale, name) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() || ty.is_empty() || locale.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self::new(ty, locale, name))
    }

    fn segment(&self, index: usize) -> &str {
        self.0.split('/').nth(index).unwrap_or_default()
    }

    pub fn content_type(&self) -> &str {
        self.segment(0)
    }

    pub fn locale(&self) -> &str {
        self.segment(1)
    }

    pub fn name(&self) -> &str {
        self.segment(2)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_segments() {
        let slug = Slug::new("blog", "zh", "hello-world");
        assert_eq!(slug.as_str(), "blog/zh/hello-world");
        assert_eq!(slug.content_type(), "blog");
        assert_eq!(slug.locale(), "zh");
        assert_eq!(slug.name(), "hello-world");
    }

    #[test]
    fn test_slug_parse() {
        assert_eq!(
            Slug::parse("blog/en/post"),
            Some(Slug::new("blog", "en", "post"))
        );
        assert!(Slug::parse("blog/en").is_none());
        assert!(Slug::parse("blog/en/a/b").is_none());
        assert!(Slug::parse("blog//post").is_none());
    }
}
