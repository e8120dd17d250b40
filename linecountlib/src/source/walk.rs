//! Recursive discovery.
//!
//! The walk hands each entry to a visitor as soon as it is found, so files
//! can be queued for counting while the rest of the tree is still being read.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::LinecountError;

/// One step of a recursive walk.
#[derive(Debug)]
pub enum WalkEvent<'a> {
    /// A directory was entered (the root included).
    Directory(&'a Path),
    /// A non-directory entry: regular file, symlink, socket, ...
    File(PathBuf),
    /// An entry could not be read. The walk carries on past it.
    Error(LinecountError),
}

/// Walk the tree under `root`, reporting every entry to `visit`.
///
/// Entries within a directory are visited in file-name order. Symlinks are
/// not followed. Errors never stop the walk; a missing `root`
/// produces a single [`WalkEvent::Error`] and nothing else.
pub fn walk_tree(root: impl AsRef<Path>, mut visit: impl FnMut(WalkEvent<'_>)) {
    let root = root.as_ref();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        match entry {
            Ok(entry) if entry.file_type().is_dir() => {
                visit(WalkEvent::Directory(entry.path()));
            }
            Ok(entry) => visit(WalkEvent::File(entry.into_path())),
            Err(err) => {
                let path = err.path().unwrap_or(root).to_path_buf();
                let message = match err.io_error() {
                    Some(io) => io.to_string(),
                    None => err.to_string(),
                };
                visit(WalkEvent::Error(LinecountError::Walk { path, message }));
            }
        }
    }
}
