//! Files written by `folio init`.

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::{
    BuildConfig, ContentConfig, SanitizeConfig, ServeConfig, SiteConfig, SiteSectionConfig,
    TocConfig,
};
use crate::embed::init::HELLO_MDX;

/// Default config filename
const CONFIG_FILE: &str = "folio.toml";

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Generate folio.toml content with comments
pub fn generate_config_template() -> String {
    let sections = [
        ContentConfig::template_with_header(),
        SiteSectionConfig::template_with_header(),
        SanitizeConfig::template_with_header(),
        TocConfig::template_with_header(),
        BuildConfig::template_with_header(),
        ServeConfig::template_with_header(),
    ];

    let mut out = format!(
        "# folio configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    );
    out.push_str(&sections.join("\n"));
    out
}

/// Write default folio.toml configuration
pub fn write_config(root: &Path) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(())
}

/// Write .gitignore and .ignore with the output directory, unless present
pub fn write_ignore_files(root: &Path, output_dir: &Path) -> Result<()> {
    let output_pattern = Path::new("/").join(output_dir);
    let content = [
        output_pattern.to_string_lossy().into_owned(),
        ".DS_Store".to_string(),
    ]
    .join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}

/// Write `<content>/<type>/<default-locale>/hello.mdx`
pub fn write_sample_post(config: &SiteConfig) -> Result<PathBuf> {
    let dir = config
        .content
        .dir
        .join(&config.content.content_type)
        .join(&config.site.default_locale);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory '{}'", dir.display()))?;

    let ext = config
        .content
        .extensions
        .first()
        .map_or("mdx", String::as_str);
    let path = dir.join(format!("hello.{ext}"));
    if !path.exists() {
        fs::write(&path, HELLO_MDX)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
    }
    Ok(path)
}
