//! Allow-list sanitizer with the code-block rewrite between two passes.
//!
//! ```text
//! RawHtml
//!   │ sanitize        drop disallowed tags, attributes, url schemes
//!   ▼
//! SanitizedHtml
//!   │ rewrite         <pre><code> → code-block-wrapper
//!   ▼
//! RewrittenHtml
//!   │ sanitize        the wrapper is new markup, check it too
//!   ▼
//! SafeHtml ──enhance──▶ RewrittenHtml ──sanitize──▶ SafeHtml   (optional)
//! ```
//!
//! Sanitization runs synchronously before any byte of a page is produced,
//! so a reader only ever sees `SafeHtml`.

pub mod enhance;
pub mod policy;
pub mod rewrite;
mod stage;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Arc, LazyLock};

use ammonia::Builder;
use parking_lot::Mutex;
use rustc_hash::FxHashSet;

use crate::config::SanitizeConfig;
use crate::log;

pub use enhance::enhance_code_blocks;
pub use policy::{SanitizeError, SanitizePolicy, is_event_handler};
pub use rewrite::{decode_uri_component, rewrite_code_blocks};
pub use stage::{RawHtml, RewrittenHtml, SafeHtml, SanitizedHtml};

/// HTML sanitizer bound to one policy.
///
/// The ammonia builder is assembled once and shared by clones.
#[derive(Clone)]
pub struct Sanitizer {
    policy: SanitizePolicy,
    builder: Arc<Builder<'static>>,
    enhance: bool,
}

impl fmt::Debug for Sanitizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sanitizer")
            .field("policy", &self.policy)
            .field("enhance", &self.enhance)
            .finish_non_exhaustive()
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new(SanitizePolicy::default())
    }
}

impl Sanitizer {
    pub fn new(policy: SanitizePolicy) -> Self {
        let builder = Arc::new(build_cleaner(&policy));
        Self {
            policy,
            builder,
            enhance: false,
        }
    }

    /// Build from the `[sanitize]` section.
    pub fn from_config(config: &SanitizeConfig) -> Result<Self, SanitizeError> {
        Ok(Self::new(SanitizePolicy::from_config(config)?).with_enhance(config.enhance_code_blocks))
    }

    /// Also upgrade code-block wrappers into widgets.
    pub fn with_enhance(mut self, enhance: bool) -> Self {
        self.enhance = enhance;
        self
    }

    pub fn policy(&self) -> &SanitizePolicy {
        &self.policy
    }

    fn clean(&self, html: &str) -> String {
        self.builder.clean(html).to_string()
    }

    /// First pass over untrusted input.
    pub fn sanitize(&self, raw: &RawHtml) -> SanitizedHtml {
        SanitizedHtml::new(self.clean(raw.as_str()))
    }

    /// Final pass over rewritten markup.
    pub fn finish(&self, html: &RewrittenHtml) -> SafeHtml {
        SafeHtml::new(self.clean(html.as_str()))
    }

    /// The whole pipeline: sanitize, rewrite code blocks, sanitize again,
    /// then optionally enhance and sanitize once more.
    pub fn render(&self, raw: &RawHtml) -> SafeHtml {
        let sanitized = self.sanitize(raw);
        let rewritten = rewrite_code_blocks(&sanitized);
        let safe = self.finish(&rewritten);
        if self.enhance {
            self.finish(&enhance_code_blocks(&safe))
        } else {
            safe
        }
    }
}

fn build_cleaner(policy: &SanitizePolicy) -> Builder<'static> {
    let tags: HashSet<&'static str> = policy.tags().iter().map(|t| intern(t)).collect();
    let attributes: HashSet<&'static str> = policy
        .attributes()
        .iter()
        .filter(|name| !is_event_handler(name))
        .map(|name| intern(name))
        .collect();

    let mut builder = Builder::default();
    builder
        .tags(tags)
        .generic_attributes(attributes)
        .tag_attributes(HashMap::new())
        .link_rel(None);
    builder
}

/// Allow-list names as `'static` strings for the builder.
///
/// Each distinct name is leaked once per process; names only come from
/// the built-in lists and configuration.
fn intern(name: &str) -> &'static str {
    static NAMES: LazyLock<Mutex<FxHashSet<&'static str>>> = LazyLock::new(Default::default);

    let mut names = NAMES.lock();
    if let Some(&known) = names.get(name) {
        return known;
    }
    let leaked: &'static str = Box::leak(name.to_owned().into_boxed_str());
    names.insert(leaked);
    leaked
}

/// Render a body, or nothing when no sanitizer could be built.
pub fn render_or_empty(sanitizer: Option<&Sanitizer>, raw: &RawHtml) -> SafeHtml {
    match sanitizer {
        Some(sanitizer) => sanitizer.render(raw),
        None => SafeHtml::empty(),
    }
}

/// Build the configured sanitizer, logging instead of failing.
pub fn sanitizer_or_log(config: &SanitizeConfig) -> Option<Sanitizer> {
    Sanitizer::from_config(config)
        .map_err(|e| log!("error"; "{}; page bodies will be empty", e))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(html: &str) -> String {
        Sanitizer::default().sanitize(&RawHtml::new(html)).as_str().to_string()
    }

    fn with_extra(tags: &[&str], attrs: &[&str]) -> Sanitizer {
        let config = SanitizeConfig {
            extra_tags: tags.iter().map(|s| s.to_string()).collect(),
            extra_attributes: attrs.iter().map(|s| s.to_string()).collect(),
            enhance_code_blocks: false,
        };
        Sanitizer::from_config(&config).unwrap()
    }

    #[test]
    fn test_builder_built_once_and_shared() {
        let sanitizer = with_extra(&["img"], &["title"]);
        let copy = sanitizer.clone();
        assert!(Arc::ptr_eq(&sanitizer.builder, &copy.builder));

        let raw = RawHtml::new(r#"<p title="t">a</p><img src="x.png"><pre><code>b</code></pre>"#);
        let first = sanitizer.render(&raw);
        assert_eq!(copy.render(&raw), first);
        assert!(first.as_str().contains(r#"<p title="t">a</p>"#));
        assert!(first.as_str().contains("<img"));
    }

    #[test]
    fn test_intern_reuses_names() {
        let a = intern(&String::from("data-x"));
        let b = intern(&String::from("data-x"));
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_script_removed_with_content() {
        assert_eq!(clean("<script>alert(1)</script><p>ok</p>"), "<p>ok</p>");
    }

    #[test]
    fn test_event_handler_removed() {
        assert_eq!(clean(r#"<p onclick="steal()">hi</p>"#), "<p>hi</p>");
    }

    #[test]
    fn test_onerror_stripped_all_variants() {
        let sanitizer = with_extra(&["img"], &[]);
        for input in [
            r#"<img src=x onerror="evil()">"#,
            r#"<img src=x onerror='evil()'>"#,
            r#"<img src=x onerror=evil()>"#,
            r#"<IMG SRC=x ONERROR="evil()">"#,
            r#"<img src=x OnError="evil()">"#,
        ] {
            let out = sanitizer.sanitize(&RawHtml::new(input));
            let out = out.as_str();
            assert!(out.contains("<img"), "img dropped for {input}: {out}");
            assert!(out.contains(r#"src="x""#), "src dropped for {input}: {out}");
            assert!(!out.to_ascii_lowercase().contains("onerror"), "{input}: {out}");
        }
    }

    #[test]
    fn test_configured_handlers_still_stripped() {
        let sanitizer = with_extra(&[], &["onmouseover", "ONCLICK", "title"]);
        let out = sanitizer.sanitize(&RawHtml::new(
            r#"<p title="t" onmouseover="x()" onclick="y()">z</p>"#,
        ));
        assert_eq!(out.as_str(), r#"<p title="t">z</p>"#);
    }

    #[test]
    fn test_configured_script_still_removed() {
        let sanitizer = with_extra(&["script"], &[]);
        let out = sanitizer.sanitize(&RawHtml::new("<script>x()</script><b>ok</b>"));
        assert_eq!(out.as_str(), "<b>ok</b>");
    }

    #[test]
    fn test_javascript_url_removed() {
        let out = clean(r#"<a href="javascript:alert(1)">x</a>"#);
        assert!(!out.contains("javascript"));
        assert!(out.contains(">x</a>"));
    }

    #[test]
    fn test_allowed_markup_kept() {
        let html = r#"<h2 id="intro">Intro</h2><p><a href="/en/blog/a" target="_blank">a</a></p><table><tbody><tr><td colspan="2">c</td></tr></tbody></table>"#;
        assert_eq!(clean(html), html);
    }

    #[test]
    fn test_disallowed_tag_unwrapped() {
        assert_eq!(clean("<section><p>x</p></section>"), "<p>x</p>");
    }

    #[test]
    fn test_code_block_round_trip() {
        let sanitizer = Sanitizer::default();
        let safe = sanitizer.render(&RawHtml::new("<pre><code>&lt;div&gt;</code></pre>"));
        let out = safe.as_str();
        assert!(out.contains(r#"<div class="code-block-wrapper" data-code="%3Cdiv%3E" data-language="">"#));
        assert!(out.contains("<pre><code>&lt;div&gt;</code></pre>"));
        assert_eq!(decode_uri_component("%3Cdiv%3E").unwrap(), "<div>");
    }

    #[test]
    fn test_render_from_markdown_fence() {
        let sanitizer = Sanitizer::default();
        let raw = RawHtml::new("<pre><code class=\"language-html\">&lt;div&gt;\n</code></pre>\n");
        let out = sanitizer.render(&raw);
        assert!(out.as_str().contains(r#"data-code="%3Cdiv%3E%0A" data-language="html""#));
        assert!(out.as_str().contains(r#"<code class="language-html">"#));
    }

    #[test]
    fn test_author_supplied_wrapper_is_checked() {
        let raw = RawHtml::new(
            r#"<div class="code-block-wrapper" data-code="x" onclick="evil()"><pre><code>y</code></pre></div>"#,
        );
        let out = Sanitizer::default().render(&raw);
        assert!(!out.as_str().contains("onclick"));
    }

    #[test]
    fn test_render_with_enhance() {
        let sanitizer = Sanitizer::default().with_enhance(true);
        let out = sanitizer.render(&RawHtml::new("<pre><code class=\"language-rust\">let a = 1;</code></pre>"));
        let out = out.as_str();
        assert!(out.contains(r#"<div class="code-block-container">"#));
        assert!(out.contains(r#"<button class="code-block-copy" data-code="let%20a%20%3D%201%3B">Copy</button>"#));
        assert!(out.contains(r#"<span class="code-block-language">rust</span>"#));
        assert!(!out.contains("code-block-wrapper"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let sanitizer = Sanitizer::default().with_enhance(true);
        let raw = RawHtml::new("<h2 id=\"a\">A</h2><pre><code>x</code></pre>");
        assert_eq!(sanitizer.render(&raw), sanitizer.render(&raw));
    }

    #[test]
    fn test_render_or_empty() {
        let raw = RawHtml::new("<p>x</p>");
        assert!(render_or_empty(None, &raw).is_empty());
        assert_eq!(render_or_empty(Some(&Sanitizer::default()), &raw).as_str(), "<p>x</p>");
    }

    #[test]
    fn test_sanitizer_or_log_invalid_config() {
        let config = SanitizeConfig {
            extra_tags: vec!["not a tag".into()],
            ..SanitizeConfig::default()
        };
        assert!(sanitizer_or_log(&config).is_none());
    }
}
