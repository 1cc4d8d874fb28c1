//! Static build: one page per routed document, locale indexes, and the
//! corpus as JSON.
//!
//! ```text
//! <output>/
//! ├── index.html                       redirect to the default index
//! ├── documents.json                   every document, scan order
//! ├── <type>/index.html                default-locale index (unprefixed)
//! ├── <type>/<name>/index.html         default-locale documents (unprefixed)
//! └── <locale>/<type>/
//!     ├── index.html                   locale index
//!     └── <name>/index.html            document page
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::config::SiteConfig;
use crate::content::{Corpus, Document, scan_documents};
use crate::logger::ProgressLine;
use crate::page::{PageRenderer, redirect};
use crate::render::MarkdownOptions;
use crate::utils::{plural_count, plural_s};
use crate::{debug, log};

/// Corpus JSON written next to the pages.
pub const DOCUMENTS_JSON: &str = "documents.json";

/// Build the whole site into `config.build.output`.
pub fn build_site(config: &SiteConfig) -> Result<Corpus> {
    let output = &config.build.output;
    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clean '{}'", output.display()))?;
    }

    let content_type = &config.content.content_type;
    let files = scan_documents(&config.content.dir, content_type, &config.content.extensions);
    let progress = ProgressLine::new(&[("render", files.len()), ("write", files.len())]);

    let corpus = Corpus::from_scanned(&files, content_type, &MarkdownOptions::default(), || {
        progress.inc("render")
    });
    warn_unsupported_locales(&corpus, config);

    let renderer = PageRenderer::new(config);
    let routed: Vec<&Document> = corpus
        .documents()
        .iter()
        .filter(|doc| config.site.is_supported(&doc.locale))
        .collect();

    routed.par_iter().try_for_each(|doc| {
        write_document(output, doc, &renderer, config)?;
        progress.inc("write");
        Ok::<_, anyhow::Error>(())
    })?;
    progress.finish();

    write_indexes(output, &corpus, &renderer, config)?;
    write_json(&output.join(DOCUMENTS_JSON), corpus.documents())?;

    log!(
        "build";
        "{} in {} written to {}",
        plural_count(routed.len(), "page"),
        plural_count(config.site.locales.len(), "locale"),
        config.root_relative(output).display()
    );
    Ok(corpus)
}

/// Log documents whose locale has no route.
pub fn warn_unsupported_locales(corpus: &Corpus, config: &SiteConfig) {
    let stray = corpus.unsupported_locales(&config.site.locales);
    if stray.is_empty() {
        return;
    }
    log!(
        "warn";
        "{} with unsupported locale{}, not routed:",
        plural_count(stray.len(), "document"),
        plural_s(stray.len())
    );
    for doc in stray {
        eprintln!("- {} ({})", doc.slug, doc.locale);
    }
}

fn write_document(
    output: &Path,
    doc: &Document,
    renderer: &PageRenderer<'_>,
    config: &SiteConfig,
) -> Result<()> {
    let html = renderer.document(doc);
    let name = doc.slug.name();
    write_page(&page_dir(output, &doc.locale, &doc.content_type).join(name), &html)?;
    if doc.locale == config.site.default_locale {
        write_page(&output.join(&doc.content_type).join(name), &html)?;
    }
    Ok(())
}

fn write_indexes(
    output: &Path,
    corpus: &Corpus,
    renderer: &PageRenderer<'_>,
    config: &SiteConfig,
) -> Result<()> {
    let content_type = &config.content.content_type;
    for locale in &config.site.locales {
        let html = renderer.index(locale, corpus.by_locale(locale));
        write_page(&page_dir(output, locale, content_type), &html)?;
        if *locale == config.site.default_locale {
            write_page(&output.join(content_type), &html)?;
        }
    }

    let root = renderer.index_url(&config.site.default_locale);
    write_page(output, &redirect(&root))
}

fn page_dir(output: &Path, locale: &str, content_type: &str) -> PathBuf {
    output.join(locale).join(content_type)
}

/// Write `<dir>/index.html`, creating parents.
fn write_page(dir: &Path, html: &str) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create '{}'", dir.display()))?;
    let path = dir.join("index.html");
    fs::write(&path, html).with_context(|| format!("Failed to write '{}'", path.display()))?;
    debug!("build"; "wrote {}", path.display());
    Ok(())
}

fn write_json(path: &Path, docs: &[Document]) -> Result<()> {
    let json = serde_json::to_string_pretty(docs)?;
    fs::write(path, json).with_context(|| format!("Failed to write '{}'", path.display()))
}
