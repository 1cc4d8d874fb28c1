//! Metadata block detection.
//!
//! A block is recognized only at the very start of the file:
//!
//! ```text
//! ---
//! title: Hello
//! tags: a, b
//! ---
//! body...
//! ```

use super::meta::DocMeta;

const SENTINEL: &str = "---";

/// A source file split into its metadata block and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frontmatter<'a> {
    /// Lines between the sentinels, if a block was found.
    pub block: Option<&'a str>,
    /// Everything after the closing sentinel line, trimmed.
    pub body: &'a str,
}

/// Split `source` into metadata block and body.
///
/// Without an opening sentinel on the first line, or without a closing
/// one, the whole file is body.
pub fn split(source: &str) -> Frontmatter<'_> {
    detect(source).unwrap_or(Frontmatter {
        block: None,
        body: source.trim(),
    })
}

fn detect(source: &str) -> Option<Frontmatter<'_>> {
    let first_end = source.find('\n')?;
    if source[..first_end].trim_end_matches('\r') != SENTINEL {
        return None;
    }
    let rest = &source[first_end + 1..];

    // The closing sentinel starts a line; an empty block closes immediately.
    let (block, after) = if rest.starts_with(SENTINEL) {
        ("", &rest[SENTINEL.len()..])
    } else {
        let close = rest.find("\n---")?;
        (&rest[..close], &rest[close + 1 + SENTINEL.len()..])
    };

    // Anything left on the closing line is not body.
    let body = after.split_once('\n').map_or("", |(_, body)| body);

    Some(Frontmatter {
        block: Some(block.trim_end_matches('\r')),
        body: body.trim(),
    })
}

/// Parse metadata and return it with the body.
///
/// Never fails: a missing block yields `DocMeta::default()`.
pub fn extract(source: &str) -> (DocMeta, &str) {
    let fm = split(source);
    let meta = fm.block.map(DocMeta::parse).unwrap_or_default();
    (meta, fm.body)
}
