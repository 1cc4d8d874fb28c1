//! The rendered document record.

use serde::Serialize;

use super::slug::Slug;
use crate::sanitize::RawHtml;

/// A level 2..6 heading as it appears in the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub level: u8,
    pub id: String,
    pub text: String,
}

/// One rendered document.
///
/// `content` is converter output with heading ids assigned and level-1
/// headings removed. It is untrusted until it has passed the sanitizer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub slug: Slug,
    #[serde(rename = "type")]
    pub content_type: String,
    pub locale: String,
    pub title: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
    pub tags: Vec<String>,
    pub author: String,
    pub content: RawHtml,
    pub headings: Vec<Heading>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_names() {
        let doc = Document {
            slug: Slug::new("blog", "en", "a"),
            content_type: "blog".into(),
            locale: "en".into(),
            title: "A".into(),
            description: String::new(),
            created_at: "2024-01-01".into(),
            updated_at: String::new(),
            tags: vec!["x".into()],
            author: String::new(),
            content: RawHtml::new("<p>a</p>"),
            headings: vec![],
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["slug"], "blog/en/a");
        assert_eq!(json["type"], "blog");
        assert_eq!(json["createdAt"], "2024-01-01");
        assert_eq!(json["content"], "<p>a</p>");
        assert!(json.get("content_type").is_none());
    }
}
