//! Site configuration management for `folio.toml`.
//!
//! ```text
//! config/
//! ├── section/       # One struct per TOML section
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # Config file discovery
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! | Section      | Purpose                                         |
//! |--------------|-------------------------------------------------|
//! | `[content]`  | Content root, content type, file extensions     |
//! | `[site]`     | Site title, supported locales, default locale   |
//! | `[sanitize]` | Allow-list extensions, code-block widgets       |
//! | `[toc]`      | Active-heading offset                           |
//! | `[build]`    | Output directory                                |
//! | `[serve]`    | Preview server interface and port               |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    BuildConfig, ContentConfig, SanitizeConfig, ServeConfig, SiteSectionConfig, TocConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands},
    log,
    utils::path::{normalize_path, resolve_path},
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory, the parent of the config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub site: SiteSectionConfig,

    #[serde(default)]
    pub sanitize: SanitizeConfig,

    #[serde(default)]
    pub toc: TocConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub serve: ServeConfig,
}

impl SiteConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// Searches upward from cwd for the config file; the project root is the
    /// file's parent directory. `init` starts from defaults instead.
    pub fn load(cli: &Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        if !cli.is_init() && !exists {
            anyhow::bail!(ConfigError::Validation(format!(
                "config file '{}' not found, run 'folio init' to create a new project",
                cli.config.display()
            )));
        }

        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        config.config_path = config_path;
        config.finalize(cli)?;

        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let path = match &cli.command {
            Commands::Init { name: Some(name), .. } => cwd.join(name).join(&cli.config),
            Commands::Init { name: None, .. } => cwd.join(&cli.config),
            _ => match find_config_file(&cli.config) {
                Some(path) => return Ok((path, true)),
                None => cwd.join(&cli.config),
            },
        };
        let exists = path.exists();
        Ok((path, exists))
    }

    /// Set the root, apply CLI overrides and make paths absolute.
    fn finalize(&mut self, cli: &Cli) -> Result<()> {
        let root = match &cli.command {
            Commands::Init { name: Some(name), .. } => std::env::current_dir()?.join(name),
            Commands::Init { name: None, .. } => std::env::current_dir()?,
            _ => self
                .config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };

        self.apply_command_options(cli);
        self.normalize_paths(&root);
        Ok(())
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) =
            Self::parse_with_ignored(&content).map_err(ConfigError::Toml)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), toml::de::Error> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // CLI overrides
    // ========================================================================

    fn apply_command_options(&mut self, cli: &Cli) {
        Self::update_option(&mut self.content.dir, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        match &cli.command {
            Commands::Build { clean } => self.build.clean = *clean,
            Commands::Serve { interface, port } => {
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
            }
            _ => {}
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Make root, content and output absolute.
    fn normalize_paths(&mut self, root: &Path) {
        let root = normalize_path(root);
        self.config_path = normalize_path(&self.config_path);
        self.content.dir = resolve_path(&self.content.dir, &root);
        self.build.output = resolve_path(&self.build.output, &root);
        self.root = root;
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate every section, collecting all errors at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.content.validate(&mut diag);
        self.site.validate(&mut diag);
        self.sanitize.validate(&mut diag);
        self.toc.validate(&mut diag);
        self.validate_paths(&mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// The output directory must not swallow the content or the project.
    fn validate_paths(&self, diag: &mut ConfigDiagnostics) {
        let output = &self.build.output;
        if output == &self.root || self.content.dir.starts_with(output) {
            diag.error_with_hint(
                BuildConfig::FIELDS.output,
                format!("`{}` would overwrite the project sources", output.display()),
                "build.output = \"public\"",
            );
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse a config snippet. Panics on unknown fields to catch typos in tests.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
