//! Code-block enhancer: upgrade inert wrappers into copyable widgets.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::rewrite::decode_uri_component;
use super::stage::{RewrittenHtml, SafeHtml};
use crate::log;
use crate::utils::html::{escape, escape_attr, unescape};

static WRAPPER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)<div class="code-block-wrapper" data-code="([^"]*)" data-language="([^"]*)"><pre>.*?</pre></div>"#,
    )
    .unwrap()
});

/// Label shown for a block: its own language, else `mdx` when the code
/// mentions mdx, else `text`.
pub fn display_language<'a>(language: &'a str, code: &str) -> &'a str {
    match language {
        "" if code.contains("mdx") => "mdx",
        "" => "text",
        lang => lang,
    }
}

/// Replace each wrapper with a container holding the code, a copy button
/// and a language label.
///
/// Already-upgraded blocks no longer match, so running this twice changes
/// nothing. A wrapper whose payload does not decode is left as it is.
pub fn enhance_code_blocks(html: &SafeHtml) -> RewrittenHtml {
    let out = WRAPPER_RE.replace_all(html.as_str(), |caps: &Captures| {
        let payload = &caps[1];
        let Some(code) = decode_uri_component(payload) else {
            log!("sanitize"; "undecodable code block payload, leaving wrapper in place");
            return caps[0].to_string();
        };
        let language = unescape(&caps[2]);
        let label = escape_attr(display_language(&language, &code)).into_owned();
        format!(
            "<div class=\"code-block-container\">\
             <div class=\"code-block-header\">\
             <span class=\"code-block-language\">{label}</span>\
             <button class=\"code-block-copy\" data-code=\"{payload}\">Copy</button>\
             </div>\
             <pre><code class=\"language-{label}\">{code}</code></pre>\
             </div>",
            code = escape(&code),
        )
    });
    RewrittenHtml::new(out.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enhance(html: &str) -> String {
        enhance_code_blocks(&SafeHtml::new(html.to_string()))
            .as_str()
            .to_string()
    }

    fn wrapper(payload: &str, language: &str) -> String {
        format!(
            "<div class=\"code-block-wrapper\" data-code=\"{payload}\" data-language=\"{language}\">\
             <pre><code>ignored</code></pre></div>"
        )
    }

    #[test]
    fn test_display_language() {
        assert_eq!(display_language("rust", "fn x() {}"), "rust");
        assert_eq!(display_language("", "import x from 'a.mdx'"), "mdx");
        assert_eq!(display_language("", "plain"), "text");
    }

    #[test]
    fn test_enhance_builds_widget() {
        let out = enhance(&wrapper("%3Cdiv%3E", "html"));
        assert!(out.starts_with("<div class=\"code-block-container\">"));
        assert!(out.contains("<span class=\"code-block-language\">html</span>"));
        assert!(out.contains("<button class=\"code-block-copy\" data-code=\"%3Cdiv%3E\">Copy</button>"));
        assert!(out.contains("<code class=\"language-html\">&lt;div&gt;</code>"));
        assert!(!out.contains("code-block-wrapper"));
    }

    #[test]
    fn test_enhance_language_fallback() {
        assert!(enhance(&wrapper("x", "")).contains(">text</span>"));
        assert!(enhance(&wrapper("uses%20mdx", "")).contains(">mdx</span>"));
    }

    #[test]
    fn test_enhance_is_idempotent() {
        let once = enhance(&wrapper("a%20b", "rust"));
        assert_eq!(enhance(&once), once);
    }

    #[test]
    fn test_undecodable_payload_kept() {
        let html = wrapper("%FF", "rust");
        assert_eq!(enhance(&html), html);
    }
}
