//! Formatting route-list files in place.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use hubreach_parser::format_source;

use crate::input::LoadError;

/// What [`fmt_file`] did with one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FmtOutcome {
    /// The file was already formatted.
    Unchanged,
    /// The file was rewritten.
    Rewritten,
    /// Check mode only: the file would be rewritten.
    NeedsFormatting,
}

/// Expand directories into their `.routes` files, sorted by path. Other
/// paths are kept as given.
///
/// # Errors
///
/// Returns the I/O error of the first directory that cannot be read.
pub fn collect_route_files(paths: &[PathBuf]) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut entries: Vec<PathBuf> = fs::read_dir(path)?
                .filter_map(Result::ok)
                .map(|entry| entry.path())
                .filter(|p| p.extension().is_some_and(|ext| ext == "routes"))
                .collect();
            entries.sort();
            files.extend(entries);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

/// Format the route-list file at `path`, keeping its comments and line
/// order. With `check` the file is never written.
///
/// # Errors
///
/// Returns a [`LoadError`] if the file cannot be read, written or parsed.
pub fn fmt_file(path: &Path, check: bool) -> Result<FmtOutcome, LoadError> {
    let content = fs::read_to_string(path)?;
    let formatted = format_source(&content)?;
    if formatted == content {
        return Ok(FmtOutcome::Unchanged);
    }
    if check {
        return Ok(FmtOutcome::NeedsFormatting);
    }
    fs::write(path, formatted)?;
    tracing::debug!(path = %path.display(), "rewrote route list");
    Ok(FmtOutcome::Rewritten)
}
