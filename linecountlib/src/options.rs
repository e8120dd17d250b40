//! Run configuration.
//!
//! Everything a run needs is carried in [`RunOptions`], built once from the
//! command line and passed down explicitly.

use std::path::PathBuf;

use crate::dispatch::DEFAULT_WORKERS;

/// How candidate files are discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Immediate files of a directory (default)
    #[default]
    Flat,
    /// Expand the input as a glob pattern
    Glob,
    /// Walk the whole subtree under the input
    Recursive,
}

impl Mode {
    /// Pick a mode from the two CLI switches.
    ///
    /// Returns `None` when both are set: the combination has no meaning.
    pub fn from_flags(recursive: bool, glob: bool) -> Option<Self> {
        match (recursive, glob) {
            (true, true) => None,
            (true, false) => Some(Mode::Recursive),
            (false, true) => Some(Mode::Glob),
            (false, false) => Some(Mode::Flat),
        }
    }
}

/// Options for a counting run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory, glob pattern or walk root, depending on `mode`
    pub input: PathBuf,
    /// Discovery mode
    pub mode: Mode,
    /// Size of the worker pool
    pub workers: usize,
}

impl RunOptions {
    /// Options for `input` in flat mode with the default pool size.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            mode: Mode::default(),
            workers: DEFAULT_WORKERS,
        }
    }

    /// Set the discovery mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the pool size.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }
}
