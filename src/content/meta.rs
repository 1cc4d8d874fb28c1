//! Metadata fields of a document.

/// Typed metadata read from a document's block.
///
/// Every field degrades to its default when missing or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocMeta {
    /// `None` means the caller falls back to the file name.
    pub title: Option<String>,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
    pub tags: Vec<String>,
    pub author: String,
}

impl DocMeta {
    /// Parse `key: value` lines. Each field is looked up independently.
    pub fn parse(block: &str) -> Self {
        let text = |key| field(block, key).unwrap_or_default();
        Self {
            title: field(block, "title"),
            description: text("description"),
            created_at: text("createdAt"),
            updated_at: text("updatedAt"),
            tags: field(block, "tags").map(|v| parse_tags(&v)).unwrap_or_default(),
            author: text("author"),
        }
    }
}

/// Value of the first line whose key is exactly `key`.
///
/// Only the remainder of that line is read; multi-line values are not
/// supported. An empty value counts as absent.
fn field(block: &str, key: &str) -> Option<String> {
    let value = block.lines().find_map(|line| {
        line.trim_start()
            .strip_prefix(key)
            .and_then(|rest| rest.strip_prefix(':'))
    })?;
    let value = strip_quotes(value);
    (!value.is_empty()).then(|| value.to_string())
}

/// Trim whitespace and one matching pair of surrounding `'` or `"`.
fn strip_quotes(value: &str) -> &str {
    let value = value.trim();
    ['"', '\'']
        .into_iter()
        .find_map(|q| value.strip_prefix(q)?.strip_suffix(q))
        .unwrap_or(value)
        .trim()
}

/// Split a comma-separated tag list; blank entries are dropped.
fn parse_tags(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(strip_quotes)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
