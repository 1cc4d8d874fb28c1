//! Heading anchors for rendered HTML.
//!
//! Every `h1`..`h6` gets a stable `id` derived from its text. Ids are unique
//! within one document and depend only on the document's own headings, in
//! order, so re-rendering yields the same anchors.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use rustc_hash::FxHashSet;

use crate::content::Heading;
use crate::utils::html::strip_tags;

/// Opening level, attributes, inner HTML, closing level. Tag names match
/// in any case and are written back lower-case.
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h([1-6])(\s[^>]*)?>(.*?)</h([1-6])\s*>").unwrap());

static ID_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\s+id\s*=\s*(?:"[^"]*"|'[^']*'|[^\s>]+)"#).unwrap()
});

static ID_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?:^|\s)id="([^"]*)""#).unwrap());

static LEVEL_ONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h1(?:\s[^>]*)?>.*?</h1\s*>\n?").unwrap());

/// Word characters are ASCII only; other letters drop out of the candidate.
static NON_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").unwrap());

static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s_-]+").unwrap());

/// Result of annotating one document's HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedHtml {
    /// HTML with ids assigned and level-1 headings removed.
    pub html: String,
    /// Level 2..6 headings in document order.
    pub headings: Vec<Heading>,
}

/// Assign ids, collect the table of contents, drop level-1 headings.
pub fn annotate(html: &str) -> AnnotatedHtml {
    let with_ids = assign_ids(html);
    let headings = collect_headings(&with_ids);
    let html = LEVEL_ONE_RE.replace_all(&with_ids, "").into_owned();
    AnnotatedHtml { html, headings }
}

/// Rewrite every heading tag to carry a unique `id`.
///
/// Existing `id` attributes are replaced; other attributes are kept.
/// Level-1 headings take part so their ids stay reserved.
pub fn assign_ids(html: &str) -> String {
    let mut ids = IdContext::default();

    HEADING_RE
        .replace_all(html, |caps: &Captures| {
            let level = &caps[1];
            if level != &caps[4] {
                return caps[0].to_string();
            }
            let attrs = caps.get(2).map_or("", |m| m.as_str());
            let attrs = ID_ATTR_RE.replace_all(attrs, "");
            let inner = &caps[3];
            let id = ids.assign(&strip_tags(inner), level);
            format!("<h{level} id=\"{id}\"{attrs}>{inner}</h{level}>")
        })
        .into_owned()
}

/// Collect level 2..6 headings that carry an id, in document order.
pub fn collect_headings(html: &str) -> Vec<Heading> {
    HEADING_RE
        .captures_iter(html)
        .filter_map(|caps| {
            let level = caps[1].parse::<u8>().ok().filter(|l| *l >= 2)?;
            let id = ID_VALUE_RE.captures(caps.get(2)?.as_str())?[1].to_string();
            Some(Heading {
                level,
                id,
                text: strip_tags(&caps[3]).trim().to_string(),
            })
        })
        .collect()
}

/// Derive an anchor candidate from heading text.
///
/// Lower-cases, drops everything but ASCII word characters, whitespace and `-`,
/// joins separator runs with one `-`, and trims `-` from both ends.
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let kept = NON_WORD_RE.replace_all(&lower, "");
    let joined = SEPARATOR_RE.replace_all(&kept, "-");
    joined.trim_matches('-').to_string()
}

/// Ids already handed out within a single document.
#[derive(Debug, Default)]
struct IdContext {
    used: FxHashSet<String>,
}

impl IdContext {
    fn assign(&mut self, text: &str, level: &str) -> String {
        let mut base = slugify(text);
        if base.is_empty() {
            base = format!("heading-{level}");
        }

        let mut id = base.clone();
        let mut n = 0;
        while self.used.contains(&id) {
            n += 1;
            id = format!("{base}-{n}");
        }
        self.used.insert(id.clone());
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    fn ids(html: &str) -> Vec<String> {
        annotate(html).headings.into_iter().map(|h| h.id).collect()
    }

    #[test]
    fn test_duplicate_headings_get_suffixes() {
        let html = "<h2>Intro</h2>\n<h2>Intro</h2>\n<h2>Intro</h2>\n";
        assert_eq!(ids(html), vec!["intro", "intro-1", "intro-2"]);
    }

    #[test]
    fn test_suffix_skips_literal_heading() {
        let html = "<h2>Intro</h2><h2>Intro 1</h2><h2>Intro</h2><h2>Intro 1</h2>";
        assert_eq!(ids(html), vec!["intro", "intro-1", "intro-2", "intro-1-1"]);
    }

    #[test]
    fn test_uniqueness_across_levels() {
        let html = "<h2>Setup</h2><h3>Setup</h3><h4>Setup</h4>";
        assert_eq!(ids(html), vec!["setup", "setup-1", "setup-2"]);
    }

    #[test]
    fn test_level_one_ids_are_reserved() {
        let out = annotate("<h1>Intro</h1>\n<h2>Intro</h2>\n");
        assert_eq!(out.html, "<h2 id=\"intro-1\">Intro</h2>\n");
        assert_eq!(out.headings[0].id, "intro-1");
    }

    #[test]
    fn test_empty_candidate_uses_level_default() {
        let html = "<h2>!!!</h2><h3>?</h3><h2></h2>";
        assert_eq!(ids(html), vec!["heading-2", "heading-3", "heading-2-1"]);
    }

    #[test]
    fn test_nested_tags_and_entities() {
        let out = annotate("<h2>Using <code>Vec&lt;T&gt;</code> &amp; friends</h2>");
        assert_eq!(out.headings[0].id, "using-vect-friends");
        assert_eq!(out.headings[0].text, "Using Vec<T> & friends");
    }

    #[test]
    fn test_existing_id_replaced_other_attrs_kept() {
        let out = assign_ids(r#"<h2 class="x" id="custom">Title</h2>"#);
        assert_eq!(out, r#"<h2 id="title" class="x">Title</h2>"#);
    }

    #[test]
    fn test_no_headings_leaves_body_unchanged() {
        let html = "<p>just text</p>\n<pre><code>x</code></pre>\n";
        let out = annotate(html);
        assert_eq!(out.html, html);
        assert!(out.headings.is_empty());
    }

    #[test]
    fn test_all_level_one_removed() {
        let out = annotate("<h1>A</h1>\n<p>x</p>\n<h1 class=\"t\">B</h1>\n");
        assert_eq!(out.html, "<p>x</p>\n");
        assert!(out.headings.is_empty());
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  Hello_World -- Again  "), "hello-world-again");
        assert_eq!(slugify("What's new?"), "whats-new");
        assert_eq!(slugify("你好 世界"), "");
        assert_eq!(slugify("Rust 入门 guide"), "rust-guide");
        assert_eq!(slugify("Café"), "caf");
        assert_eq!(slugify("--edge--"), "edge");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_cjk_headings_fall_back_to_level_default() {
        let html = "<h2>你好</h2><h2>世界</h2><h3>入门</h3>";
        assert_eq!(ids(html), vec!["heading-2", "heading-2-1", "heading-3"]);
    }

    #[test]
    fn test_uppercase_tags_are_annotated() {
        let out = annotate(
            "<H1>Title</H1>\n<H2>Intro</H2>\n<h2>Intro</h2>\n<h3 CLASS=\"x\">Usage</H3>\n",
        );
        assert_eq!(
            out.html,
            "<h2 id=\"intro\">Intro</h2>\n<h2 id=\"intro-1\">Intro</h2>\n<h3 id=\"usage\" CLASS=\"x\">Usage</h3>\n"
        );
        let ids: Vec<_> = out.headings.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["intro", "intro-1", "usage"]);
    }

    #[test]
    fn test_uppercase_id_attribute_replaced() {
        let out = assign_ids(r#"<H2 ID="old">New</H2>"#);
        assert_eq!(out, r#"<h2 id="new">New</h2>"#);
    }

    #[test]
    fn test_annotation_is_deterministic() {
        let html = "<h2>A</h2><h3>B</h3><h2>A</h2><h1>T</h1><h2>T</h2>";
        assert_eq!(annotate(html), annotate(html));
    }

    #[test]
    fn test_parallel_annotation_is_isolated() {
        let html = "<h2>Intro</h2><h2>Intro</h2><h3>Usage</h3>";
        let expected = annotate(html);
        let results: Vec<_> = (0..64).into_par_iter().map(|_| annotate(html)).collect();
        assert!(results.iter().all(|r| *r == expected));
    }
}
