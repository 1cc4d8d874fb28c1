//! Code-block rewrite: `<pre><code>` into an inert wrapper.
//!
//! The wrapper carries the decoded source, URI-component encoded, in
//! `data-code` and the fence language in `data-language`:
//!
//! ```text
//! <div class="code-block-wrapper" data-code="%3Cdiv%3E" data-language="html">
//!   <pre><code class="language-html">&lt;div&gt;</code></pre>
//! </div>
//! ```

use std::borrow::Cow;
use std::sync::LazyLock;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use regex::{Captures, Regex};

use super::stage::{RewrittenHtml, SanitizedHtml};
use crate::utils::html::{escape_attr, unescape};

/// Characters `encodeURIComponent` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

static CODE_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<pre><code(?:\s+class=["']language-([^"']*)["'])?>(.*?)</code></pre>"#)
        .unwrap()
});

/// Percent-encode like `encodeURIComponent`.
pub fn encode_uri_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// Inverse of [`encode_uri_component`]. `None` if the bytes are not UTF-8.
pub fn decode_uri_component(s: &str) -> Option<String> {
    percent_decode_str(s)
        .decode_utf8()
        .ok()
        .map(Cow::into_owned)
}

/// Wrap every `<pre><code>` block.
pub fn rewrite_code_blocks(html: &SanitizedHtml) -> RewrittenHtml {
    let out = CODE_BLOCK_RE.replace_all(html.as_str(), |caps: &Captures| {
        let language = unescape(caps.get(1).map_or("", |m| m.as_str()));
        let language = escape_attr(&language);
        let content = &caps[2];
        let payload = encode_uri_component(&unescape(content));
        let class = if language.is_empty() {
            String::new()
        } else {
            format!(" class=\"language-{language}\"")
        };
        format!(
            "<div class=\"code-block-wrapper\" data-code=\"{payload}\" data-language=\"{language}\">\
             <pre><code{class}>{content}</code></pre></div>"
        )
    });
    RewrittenHtml::new(out.into_owned())
}
