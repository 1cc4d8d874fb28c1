//! Document store scanner.
//!
//! Walks `<root>/<type>/<locale>/*.<ext>`. Nothing here fails: a missing
//! root, an unreadable locale directory or file only shrinks the result.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{debug, log};

/// A document file read from disk, not yet parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    /// Name of the locale directory the file lives in.
    pub locale: String,
    /// File name without its extension.
    pub name: String,
    pub path: PathBuf,
    pub source: String,
}

/// Enumerate documents of one content type.
///
/// Locales and files are returned in name order so repeated scans of the
/// same tree agree.
pub fn scan_documents(root: &Path, content_type: &str, extensions: &[String]) -> Vec<ScannedFile> {
    let type_dir = root.join(content_type);
    let Some(locales) = sorted_entries(&type_dir) else {
        debug!("scan"; "no content at {}", type_dir.display());
        return Vec::new();
    };

    let mut files = Vec::new();
    for locale_dir in locales.into_iter().filter(|p| p.is_dir()) {
        let Some(locale) = file_name(&locale_dir) else {
            continue;
        };
        let Some(entries) = sorted_entries(&locale_dir) else {
            continue;
        };

        for path in entries {
            if !path.is_file() || !has_extension(&path, extensions) {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if !is_route_segment(name) {
                log!("scan"; "skipping {}: name is not a usable url segment", path.display());
                continue;
            }
            match read_source(&path) {
                Ok(source) => files.push(ScannedFile {
                    locale: locale.to_string(),
                    name: name.to_string(),
                    path: path.clone(),
                    source,
                }),
                Err(e) => log!("scan"; "skipping {}: {}", path.display(), e),
            }
        }
    }
    files
}

/// Directory entries sorted by path, or `None` if unreadable.
fn sorted_entries(dir: &Path) -> Option<Vec<PathBuf>> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    entries.sort();
    Some(entries)
}

fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|s| s.to_str())
}

/// A document name becomes one path segment of its page url and output
/// directory, so dot segments and url delimiters are refused.
fn is_route_segment(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '#', '?', '%'])
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}

/// Read a file as text. Invalid UTF-8 is replaced rather than rejected.
fn read_source(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            debug!("scan"; "{} is not valid utf-8, decoding lossily", path.display());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    })
}
