//! Site initialization module.
//!
//! - [`validate`]: Pre-initialization validation
//! - [`config`]: Config template, ignore files and the sample post

mod config;
mod validate;

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};
use std::fs;

pub use validate::InitMode;

/// Create a new blog: `folio.toml`, ignore files and one sample post.
///
/// With `dry_run`, only prints the config template to stdout.
pub fn new_site(site_config: &SiteConfig, has_name: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template());
        return Ok(());
    }

    let root = site_config.get_root();
    let mode = if has_name {
        InitMode::NewDir
    } else {
        InitMode::CurrentDir
    };
    validate::validate_target(root, mode)?;

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create root directory '{}'", root.display()))?;

    config::write_config(root)?;
    let output_dir = site_config.root_relative(&site_config.build.output);
    config::write_ignore_files(root, &output_dir)?;
    let post = config::write_sample_post(site_config)?;

    log!("init"; "blog initialized, first post at {}", site_config.root_relative(&post).display());
    Ok(())
}
