//! What the preview server answers, independent of the socket.

use crate::config::SiteConfig;
use crate::content::{Corpus, RouteMatch, route::resolve_request_path};
use crate::page::PageRenderer;

/// Outcome of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Page(String),
    Redirect(String),
    NotFound,
}

/// Resolve a request target and render the page it names.
///
/// The corpus is rebuilt for every request so edits show up on reload.
pub fn reply(target: &str, config: &SiteConfig) -> Reply {
    let content_type = &config.content.content_type;
    let Some(matched) = resolve_request_path(target, &config.site, content_type) else {
        return Reply::NotFound;
    };

    let renderer = PageRenderer::new(config);
    match matched {
        RouteMatch::Root => Reply::Redirect(renderer.index_url(&config.site.default_locale)),
        RouteMatch::Index { locale } => {
            let corpus = Corpus::load(config);
            Reply::Page(renderer.index(&locale, corpus.by_locale(&locale)))
        }
        RouteMatch::Document(route) => {
            let corpus = Corpus::load(config);
            match corpus.find_route(&route) {
                Ok(doc) => Reply::Page(renderer.document(doc)),
                Err(_) => Reply::NotFound,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn site() -> (TempDir, SiteConfig) {
        let dir = TempDir::new().unwrap();
        for (rel, source) in [
            ("blog/en/hello.mdx", "---\ntitle: Hello\n---\n## Part one\nbody"),
            ("blog/zh/你好.mdx", "---\ntitle: 你好\n---\n正文"),
            ("blog/fr/salut.mdx", "salut"),
        ] {
            let path = dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, source).unwrap();
        }
        let mut config = SiteConfig::default();
        config.content.dir = dir.path().to_path_buf();
        (dir, config)
    }

    fn page(reply: Reply) -> String {
        match reply {
            Reply::Page(html) => html,
            other => panic!("expected a page, got {other:?}"),
        }
    }

    #[test]
    fn test_root_redirects_to_default_index() {
        let (_dir, config) = site();
        assert_eq!(reply("/", &config), Reply::Redirect("/en/blog".into()));
    }

    #[test]
    fn test_document_routes() {
        let (_dir, config) = site();
        let prefixed = page(reply("/en/blog/hello", &config));
        assert!(prefixed.contains("<h1>Hello</h1>"));
        assert!(prefixed.contains("href=\"#part-one\""));
        assert_eq!(page(reply("/blog/hello?x=1", &config)), prefixed);
        assert!(page(reply("/zh/blog/%E4%BD%A0%E5%A5%BD", &config)).contains("正文"));
    }

    #[test]
    fn test_not_found() {
        let (_dir, config) = site();
        assert_eq!(reply("/en/blog/missing", &config), Reply::NotFound);
        assert_eq!(reply("/ja/blog/hello", &config), Reply::NotFound);
        assert_eq!(reply("/fr/blog/salut", &config), Reply::NotFound);
        assert_eq!(reply("/en/other/hello", &config), Reply::NotFound);
    }

    #[test]
    fn test_index_pages() {
        let (_dir, config) = site();
        assert!(page(reply("/en/blog", &config)).contains("/en/blog/hello"));
        assert!(page(reply("/blog", &config)).contains("/en/blog/hello"));
        assert!(page(reply("/ja", &config)).contains("No posts found."));
    }

    #[test]
    fn test_edits_show_up_without_restart() {
        let (dir, config) = site();
        assert_eq!(reply("/en/blog/new", &config), Reply::NotFound);
        fs::write(dir.path().join("blog/en/new.mdx"), "fresh").unwrap();
        assert!(page(reply("/en/blog/new", &config)).contains("fresh"));
    }
}
