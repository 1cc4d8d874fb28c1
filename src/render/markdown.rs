//! Markdown to HTML conversion using pulldown-cmark.

use pulldown_cmark::{Options, Parser, html};

/// Options for markdown conversion
#[derive(Debug, Clone)]
pub struct MarkdownOptions {
    /// Enable tables extension
    pub tables: bool,
    /// Enable strikethrough extension
    pub strikethrough: bool,
    /// Enable task lists extension
    pub task_lists: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            task_lists: false,
        }
    }
}

impl MarkdownOptions {
    /// Convert to pulldown-cmark Options
    fn to_pulldown_options(&self) -> Options {
        let mut opts = Options::empty();
        if self.tables {
            opts.insert(Options::ENABLE_TABLES);
        }
        if self.strikethrough {
            opts.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.task_lists {
            opts.insert(Options::ENABLE_TASKLISTS);
        }
        opts
    }
}

/// Render markdown to an HTML string.
///
/// Inline HTML in the source is passed through; the sanitizer deals with it.
pub fn render_markdown(markdown: &str, options: &MarkdownOptions) -> String {
    let parser = Parser::new_ext(markdown, options.to_pulldown_options());
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(md: &str) -> String {
        render_markdown(md, &MarkdownOptions::default())
    }

    #[test]
    fn test_basic_paragraph() {
        assert_eq!(render("Hello *world*"), "<p>Hello <em>world</em></p>\n");
    }

    #[test]
    fn test_fenced_code_escapes_content() {
        let html = render("```html\n<div>\n```");
        assert_eq!(
            html,
            "<pre><code class=\"language-html\">&lt;div&gt;\n</code></pre>\n"
        );
    }

    #[test]
    fn test_table() {
        let html = render("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_tables_disabled() {
        let opts = MarkdownOptions {
            tables: false,
            ..MarkdownOptions::default()
        };
        let html = render_markdown("| a | b |\n|---|---|", &opts);
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn test_lists_links_quotes() {
        let html = render("- [x](https://example.com)\n\n> quoted");
        assert!(html.contains("<ul>"));
        assert!(html.contains(r#"<a href="https://example.com">x</a>"#));
        assert!(html.contains("<blockquote>"));
    }
}
