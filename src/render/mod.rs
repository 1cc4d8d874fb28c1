//! Markdown rendering: converter output plus heading anchors.

pub mod heading;
pub mod markdown;

use crate::content::{Document, ScannedFile, Slug, frontmatter};
use crate::sanitize::RawHtml;

use heading::{AnnotatedHtml, annotate};
use markdown::render_markdown;

pub use markdown::MarkdownOptions;

/// Build a [`Document`] from a scanned file.
///
/// Infallible: bad metadata degrades to defaults, and the title falls back
/// to the file name.
pub fn render_document(file: &ScannedFile, content_type: &str, options: &MarkdownOptions) -> Document {
    let (meta, body) = frontmatter::extract(&file.source);
    let AnnotatedHtml { html, headings } = annotate(&render_markdown(body, options));

    Document {
        slug: Slug::new(content_type, &file.locale, &file.name),
        content_type: content_type.to_string(),
        locale: file.locale.clone(),
        title: meta.title.unwrap_or_else(|| file.name.clone()),
        description: meta.description,
        created_at: meta.created_at,
        updated_at: meta.updated_at,
        tags: meta.tags,
        author: meta.author,
        content: RawHtml::new(html),
        headings,
    }
}
