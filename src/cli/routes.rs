//! Routes command: the static path list as JSON.

use anyhow::Result;

use crate::cli::build::warn_unsupported_locales;
use crate::config::SiteConfig;
use crate::content::{Corpus, StaticPath};

/// Print one `{ locale, slug }` entry per routed document.
pub fn run_routes(config: &SiteConfig, pretty: bool) -> Result<()> {
    let corpus = Corpus::load(config);
    warn_unsupported_locales(&corpus, config);

    let paths = routed_paths(&corpus, config);
    let json = if pretty {
        serde_json::to_string_pretty(&paths)?
    } else {
        serde_json::to_string(&paths)?
    };
    println!("{json}");
    Ok(())
}

/// Static paths restricted to supported locales.
fn routed_paths(corpus: &Corpus, config: &SiteConfig) -> Vec<StaticPath> {
    corpus
        .static_paths()
        .into_iter()
        .filter(|path| config.site.is_supported(&path.locale))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_routed_paths_skip_unsupported() {
        let dir = TempDir::new().unwrap();
        for rel in ["blog/en/a.mdx", "blog/de/b.mdx", "blog/ja/c.mdx", "blog/en/skip.txt"] {
            let path = dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "body").unwrap();
        }
        let mut config = SiteConfig::default();
        config.content.dir = dir.path().to_path_buf();

        let paths = routed_paths(&Corpus::load(&config), &config);
        let json = serde_json::to_string(&paths).unwrap();
        assert_eq!(
            json,
            r#"[{"locale":"en","slug":["a"]},{"locale":"ja","slug":["c"]}]"#
        );
    }
}
