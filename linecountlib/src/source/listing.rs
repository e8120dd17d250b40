//! Non-recursive discovery: a directory's immediate files, or a glob.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LinecountError;
use crate::Result;

/// List the immediate entries of `dir`, skipping subdirectories.
///
/// Returned paths are `dir` joined with each entry name, sorted by name.
/// Symlinks are kept whatever they point to; an unreadable target fails
/// later, when the file is opened.
pub fn list_dir(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let enumeration_error = |source: std::io::Error| LinecountError::Enumeration {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(enumeration_error)? {
        let entry = entry.map_err(enumeration_error)?;
        let file_type = entry.file_type().map_err(enumeration_error)?;
        if file_type.is_dir() {
            continue;
        }
        files.push(dir.join(entry.file_name()));
    }

    files.sort();
    Ok(files)
}

/// Expand a shell-style glob pattern.
///
/// Matches are returned as the glob crate yields them (alphabetical), and
/// may include directories; those fail when opened and are skipped then.
pub fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob::glob(pattern).map_err(|e| LinecountError::InvalidGlob {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    paths
        .map(|entry| {
            entry.map_err(|e| LinecountError::InvalidGlob {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })
        })
        .collect()
}
