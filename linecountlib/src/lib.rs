//! # linecountlib
//!
//! Counts newline-delimited lines across many text files at once.
//!
//! ## Overview
//!
//! Files are discovered one of three ways (a directory's immediate files, a
//! glob pattern, or a recursive walk) and handed to a fixed pool of worker
//! threads. Each worker reads its file in 32 KiB chunks, rejects anything
//! that is not UTF-8, and adds the number of `\n` bytes to a shared total.
//!
//! - **Separator counting**: a final line with no `\n` is not counted
//! - **Per-file isolation**: a file that cannot be opened or is not text is
//!   logged and skipped; the rest of the run is unaffected
//! - **Order independence**: the total does not depend on which worker
//!   finishes first
//!
//! ## Example
//!
//! ```rust
//! use linecountlib::{count_lines, run, Mode, RunOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // Count a single stream
//! assert_eq!(count_lines("one\ntwo\nthree".as_bytes()).unwrap(), 2);
//!
//! // Count a directory
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("a.txt"), "1\n2\n").unwrap();
//! fs::write(dir.path().join("b.txt"), "3\n").unwrap();
//!
//! let mut out = Vec::new();
//! let summary = run(&RunOptions::new(dir.path()), &mut out).unwrap();
//! assert_eq!(summary.total, 3);
//! assert_eq!(String::from_utf8(out).unwrap(), "num files: 2\n");
//!
//! // Or walk the whole tree
//! let options = RunOptions::new(dir.path()).mode(Mode::Recursive);
//! let summary = run(&options, &mut Vec::new()).unwrap();
//! assert_eq!(summary.files_submitted, 2);
//! ```

pub mod dispatch;
pub mod error;
pub mod options;
pub mod pending;
pub mod run;
pub mod scanner;
pub mod source;

pub use dispatch::{Dispatcher, LineTally, DEFAULT_WORKERS};
pub use error::{LinecountError, ScanError};
pub use options::{Mode, RunOptions};
pub use pending::{PendingGuard, PendingWork};
pub use run::{run, RunSummary};
pub use scanner::{count_file, count_lines, count_lines_with_capacity, DEFAULT_CHUNK_SIZE};
pub use source::{expand_glob, list_dir, walk_tree, WalkEvent};

/// Result type for linecountlib operations
pub type Result<T> = std::result::Result<T, LinecountError>;
