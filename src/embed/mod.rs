//! Embedded static resources for folio.
//!
//! - `template` - Template types for typed variable injection
//! - `page` - Page shells (document, locale index, redirect)
//! - `init` - Files written by `folio init`
//!
//! ```ignore
//! use embed::page::{REDIRECT_HTML, RedirectVars};
//!
//! let html = REDIRECT_HTML.render(&RedirectVars { target: "/en/blog" });
//! ```

mod template;

pub use template::{Template, TemplateVars, fill};

pub mod page {
    use super::{Template, TemplateVars, fill};

    /// Shared stylesheet inlined into every page.
    pub const STYLE_CSS: &str = include_str!("page/style.css");

    /// Document page script: active TOC entry tracking and copy buttons.
    pub const CLIENT_JS: &str = include_str!("page/client.js");

    /// Variables for document.html. Every value is already escaped HTML.
    pub struct DocumentVars<'a> {
        pub lang: &'a str,
        pub site_title: &'a str,
        pub index_url: &'a str,
        pub locales: &'a str,
        pub title: &'a str,
        pub description: &'a str,
        pub meta: &'a str,
        pub body: &'a str,
        pub toc: &'a str,
    }

    impl TemplateVars for DocumentVars<'_> {
        fn apply(&self, content: &str) -> String {
            fill(
                content,
                &[
                    ("__LANG__", self.lang),
                    ("__SITE_TITLE__", self.site_title),
                    ("__INDEX_URL__", self.index_url),
                    ("__LOCALES__", self.locales),
                    ("__TITLE__", self.title),
                    ("__DESCRIPTION__", self.description),
                    ("__STYLE__", STYLE_CSS),
                    ("__META__", self.meta),
                    ("__BODY__", self.body),
                    ("__TOC__", self.toc),
                    ("__SCRIPT__", CLIENT_JS),
                ],
            )
        }
    }

    pub const DOCUMENT_HTML: Template<DocumentVars<'static>> =
        Template::new(include_str!("page/document.html"));

    /// Variables for index.html. Every value is already escaped HTML.
    pub struct IndexVars<'a> {
        pub lang: &'a str,
        pub site_title: &'a str,
        pub index_url: &'a str,
        pub locales: &'a str,
        pub posts: &'a str,
    }

    impl TemplateVars for IndexVars<'_> {
        fn apply(&self, content: &str) -> String {
            fill(
                content,
                &[
                    ("__LANG__", self.lang),
                    ("__SITE_TITLE__", self.site_title),
                    ("__INDEX_URL__", self.index_url),
                    ("__LOCALES__", self.locales),
                    ("__STYLE__", STYLE_CSS),
                    ("__POSTS__", self.posts),
                ],
            )
        }
    }

    pub const INDEX_HTML: Template<IndexVars<'static>> =
        Template::new(include_str!("page/index.html"));

    /// Variables for redirect.html.
    pub struct RedirectVars<'a> {
        pub target: &'a str,
    }

    impl TemplateVars for RedirectVars<'_> {
        fn apply(&self, content: &str) -> String {
            fill(content, &[("__TARGET__", self.target)])
        }
    }

    /// Static stand-in for the server's `/` redirect.
    pub const REDIRECT_HTML: Template<RedirectVars<'static>> =
        Template::new(include_str!("page/redirect.html"));
}

pub mod init {
    /// Sample post written under the default locale.
    pub const HELLO_MDX: &str = include_str!("init/hello.mdx");
}
