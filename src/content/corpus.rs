//! The corpus: every document of one content type, immutable once built.

use std::sync::Arc;

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::Serialize;
use thiserror::Error;

use super::document::Document;
use super::route::DocRoute;
use super::scan::{ScannedFile, scan_documents};
use super::slug::Slug;
use crate::config::SiteConfig;
use crate::render::{MarkdownOptions, render_document};
use crate::{debug, log};

/// The only negative outcome a corpus lookup has.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("no document with slug `{slug}`")]
    NotFound { slug: String },
}

/// One statically generated document page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticPath {
    pub locale: String,
    /// Path segments after `/<locale>/<type>/`.
    pub slug: Vec<String>,
}

/// Immutable snapshot of rendered documents in scan order.
///
/// Cloning shares the documents.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    docs: Arc<[Document]>,
    index: Arc<FxHashMap<Slug, usize>>,
}

impl Corpus {
    /// Scan and render the configured content type.
    ///
    /// A missing or unreadable content root gives an empty corpus.
    pub fn load(config: &SiteConfig) -> Self {
        let files = scan_documents(
            &config.content.dir,
            &config.content.content_type,
            &config.content.extensions,
        );
        Self::from_scanned(
            &files,
            &config.content.content_type,
            &MarkdownOptions::default(),
            || {},
        )
    }

    /// Render scanned files in parallel, keeping their order.
    ///
    /// `on_rendered` runs once per document, from worker threads.
    pub fn from_scanned<F>(
        files: &[ScannedFile],
        content_type: &str,
        options: &MarkdownOptions,
        on_rendered: F,
    ) -> Self
    where
        F: Fn() + Sync,
    {
        let docs: Vec<Document> = files
            .par_iter()
            .map(|file| {
                let doc = render_document(file, content_type, options);
                on_rendered();
                doc
            })
            .collect();
        Self::from_documents(docs)
    }

    /// Index documents by slug. A repeated slug keeps the first document.
    pub fn from_documents(docs: Vec<Document>) -> Self {
        let mut index = FxHashMap::default();
        let mut kept = Vec::with_capacity(docs.len());

        for doc in docs {
            if index.contains_key(&doc.slug) {
                log!("corpus"; "duplicate slug `{}`, keeping the first", doc.slug);
                continue;
            }
            index.insert(doc.slug.clone(), kept.len());
            kept.push(doc);
        }

        debug!("corpus"; "indexed {} documents", kept.len());
        Self {
            docs: kept.into(),
            index: Arc::new(index),
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.docs
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Look a document up by its `type/locale/name` slug.
    pub fn find(&self, slug: &str) -> Result<&Document, LookupError> {
        Slug::parse(slug)
            .and_then(|s| self.index.get(&s))
            .map(|&i| &self.docs[i])
            .ok_or_else(|| LookupError::NotFound {
                slug: slug.to_string(),
            })
    }

    /// Look up the document a route points at.
    pub fn find_route(&self, route: &DocRoute) -> Result<&Document, LookupError> {
        self.find(route.slug().as_str())
    }

    /// Documents of one locale, in corpus order.
    pub fn by_locale<'a>(&'a self, locale: &str) -> impl Iterator<Item = &'a Document> {
        self.docs.iter().filter(move |d| d.locale == locale)
    }

    /// Distinct locales in order of first appearance.
    pub fn locales(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for doc in self.docs.iter() {
            if !seen.contains(&doc.locale.as_str()) {
                seen.push(&doc.locale);
            }
        }
        seen
    }

    /// One entry per document, for static generation.
    pub fn static_paths(&self) -> Vec<StaticPath> {
        self.docs
            .iter()
            .map(|doc| StaticPath {
                locale: doc.locale.clone(),
                slug: vec![doc.slug.name().to_string()],
            })
            .collect()
    }

    /// Documents whose locale is outside `supported`. They are kept in the
    /// corpus but no route reaches them.
    pub fn unsupported_locales(&self, supported: &[String]) -> Vec<&Document> {
        self.docs
            .iter()
            .filter(|doc| !supported.contains(&doc.locale))
            .collect()
    }
}
