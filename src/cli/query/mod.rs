//! Query command: print documents as JSON.

mod output;

use anyhow::Result;

use crate::cli::args::QueryArgs;
use crate::config::SiteConfig;
use crate::content::{Corpus, Document};
use crate::log;
use crate::utils::plural_count;

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let corpus = Corpus::load(config);
    let docs = select(&corpus, args)?;
    log!("query"; "found {}", plural_count(docs.len(), "document"));
    output::output_results(&docs, args)
}

/// Documents picked by `--slug` or `--locale`, or all of them.
///
/// An unknown slug is an error naming the slug.
fn select<'a>(corpus: &'a Corpus, args: &QueryArgs) -> Result<Vec<&'a Document>> {
    if let Some(slug) = &args.slug {
        return Ok(vec![corpus.find(slug)?]);
    }
    Ok(match &args.locale {
        Some(locale) => corpus.by_locale(locale).collect(),
        None => corpus.documents().iter().collect(),
    })
}
