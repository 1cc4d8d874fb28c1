//! Page shells around sanitized document bodies.
//!
//! The only dynamic HTML inserted unescaped is the `SafeHtml` body and the
//! TOC markup, whose text is escaped when it is built.

use std::fmt::Write;

use crate::config::SiteConfig;
use crate::content::{DocRoute, Document};
use crate::embed::page::{
    DOCUMENT_HTML, DocumentVars, INDEX_HTML, IndexVars, REDIRECT_HTML, RedirectVars,
};
use crate::sanitize::{Sanitizer, render_or_empty, sanitizer_or_log};
use crate::toc::render_toc;
use crate::utils::html::{escape, escape_attr};

/// Renders document and index pages for one configuration.
pub struct PageRenderer<'a> {
    config: &'a SiteConfig,
    sanitizer: Option<Sanitizer>,
}

impl<'a> PageRenderer<'a> {
    /// A sanitizer that cannot be built is logged once; bodies render empty.
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            config,
            sanitizer: sanitizer_or_log(&config.sanitize),
        }
    }

    /// `/<locale>/<type>`
    pub fn index_url(&self, locale: &str) -> String {
        format!("/{}/{}", locale, self.config.content.content_type)
    }

    /// Full page for one document.
    pub fn document(&self, doc: &Document) -> String {
        let body = render_or_empty(self.sanitizer.as_ref(), &doc.content);
        let toc = render_toc(&doc.headings, None, self.config.toc.offset);
        let index_url = self.index_url(&doc.locale);

        DOCUMENT_HTML.render(&DocumentVars {
            lang: &escape_attr(&doc.locale),
            site_title: &escape(&self.config.site.title),
            index_url: &escape_attr(&index_url),
            locales: &self.locale_links(&doc.locale),
            title: &escape(&doc.title),
            description: &escape_attr(&doc.description),
            meta: &meta_line(doc),
            body: body.as_str(),
            toc: &toc,
        })
    }

    /// Listing of one locale's documents, in corpus order.
    pub fn index<'d>(&self, locale: &str, docs: impl IntoIterator<Item = &'d Document>) -> String {
        let mut posts = String::new();
        for doc in docs {
            let href = DocRoute::from_slug(&doc.slug).public_path();
            let _ = write!(
                posts,
                "<li><a href=\"{}\">{}</a>",
                escape_attr(&href),
                escape(&doc.title)
            );
            if !doc.description.is_empty() {
                let _ = write!(posts, "<p>{}</p>", escape(&doc.description));
            }
            posts.push_str("</li>");
        }
        let posts = if posts.is_empty() {
            "<p>No posts found.</p>".to_string()
        } else {
            format!("<ul class=\"posts\">{posts}</ul>")
        };

        INDEX_HTML.render(&IndexVars {
            lang: &escape_attr(locale),
            site_title: &escape(&self.config.site.title),
            index_url: &escape_attr(&self.index_url(locale)),
            locales: &self.locale_links(locale),
            posts: &posts,
        })
    }

    /// Links to every supported locale's index.
    fn locale_links(&self, current: &str) -> String {
        let mut out = String::new();
        for locale in &self.config.site.locales {
            let class = if locale == current { " class=\"current\"" } else { "" };
            let _ = write!(
                out,
                "<a href=\"{}\"{}>{}</a>",
                escape_attr(&self.index_url(locale)),
                class,
                escape(locale)
            );
        }
        out
    }
}

/// Redirect page for static hosting of `/`.
pub fn redirect(target: &str) -> String {
    REDIRECT_HTML.render(&RedirectVars {
        target: &escape_attr(target),
    })
}

/// Date, author and tags, each escaped; empty parts are skipped.
fn meta_line(doc: &Document) -> String {
    let mut parts = Vec::new();
    if !doc.created_at.is_empty() {
        parts.push(format!("<time>{}</time>", escape(&doc.created_at)));
    }
    if !doc.updated_at.is_empty() {
        parts.push(format!("updated <time>{}</time>", escape(&doc.updated_at)));
    }
    if !doc.author.is_empty() {
        parts.push(escape(&doc.author).into_owned());
    }
    if !doc.tags.is_empty() {
        let tags: String = doc
            .tags
            .iter()
            .map(|t| format!("<span>#{}</span>", escape(t)))
            .collect();
        parts.push(format!("<span class=\"tags\">{tags}</span>"));
    }
    parts.join(" · ")
}
