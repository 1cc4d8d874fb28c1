//! TOC navigation markup.

use std::fmt::Write;

use crate::content::Heading;
use crate::utils::html::{escape, escape_attr};

/// Render the TOC as a `<nav>`; empty when there are no headings.
///
/// The reading-line offset is exposed as `data-offset` for the client.
pub fn render_toc(headings: &[Heading], active: Option<&str>, offset: f64) -> String {
    if headings.is_empty() {
        return String::new();
    }

    let mut out = format!("<nav class=\"toc\" data-offset=\"{offset}\"><ul>");
    for heading in headings {
        let class = if active == Some(heading.id.as_str()) {
            " class=\"active\""
        } else {
            ""
        };
        let _ = write!(
            out,
            "<li class=\"toc-level-{}\"><a href=\"#{}\"{}>{}</a></li>",
            heading.level,
            escape_attr(&heading.id),
            class,
            escape(&heading.text),
        );
    }
    out.push_str("</ul></nav>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(level: u8, id: &str, text: &str) -> Heading {
        Heading {
            level,
            id: id.into(),
            text: text.into(),
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(render_toc(&[], None, 100.0), "");
    }

    #[test]
    fn test_entries_and_active() {
        let headings = [heading(2, "a", "A & B"), heading(3, "b", "<b>")];
        let html = render_toc(&headings, Some("b"), 100.0);
        assert_eq!(
            html,
            "<nav class=\"toc\" data-offset=\"100\"><ul>\
             <li class=\"toc-level-2\"><a href=\"#a\">A &amp; B</a></li>\
             <li class=\"toc-level-3\"><a href=\"#b\" class=\"active\">&lt;b&gt;</a></li>\
             </ul></nav>"
        );
    }
}
