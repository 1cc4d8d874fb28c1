//! Checks on the target directory before anything is written.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Where `init` writes.
#[derive(Debug, Clone, Copy)]
pub enum InitMode {
    /// `folio init`: the current directory, which may only hold dotfiles
    CurrentDir,
    /// `folio init <name>`: a new directory that must not exist yet
    NewDir,
}

pub fn validate_target(root: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir => {
            if let Some(name) = first_visible_entry(root)? {
                bail!(
                    "Current directory is not empty (found `{name}`).\n\
                     Use `folio init <name>` to create in a new subdirectory."
                );
            }
        }
        InitMode::NewDir => {
            if root.exists() {
                bail!(
                    "Directory '{}' already exists.\n\
                     Choose a different name or remove the existing directory.",
                    root.display()
                );
            }
        }
    }
    Ok(())
}

/// First entry that is not a dotfile, so a fresh `git init` still counts
/// as empty.
fn first_visible_entry(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let entries = fs::read_dir(path)
        .with_context(|| format!("Failed to read directory '{}'", path.display()))?;

    Ok(entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .find(|name| !name.starts_with('.')))
}
