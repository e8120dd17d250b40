//! High-level counting API.
//!
//! Ties discovery to the worker pool: pick the files according to the
//! [`Mode`], feed them to a [`Dispatcher`] and return the aggregate.

use std::io::Write;

use crate::dispatch::Dispatcher;
use crate::options::{Mode, RunOptions};
use crate::source::{expand_glob, list_dir, walk_tree, WalkEvent};
use crate::Result;

/// Outcome of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Newlines across every file that was scanned successfully
    pub total: u64,
    /// Paths handed to the worker pool
    pub files_submitted: usize,
    /// Paths that failed to open or scan
    pub files_skipped: usize,
}

/// Count lines in the files selected by `options`.
///
/// Discovery diagnostics go to `out`: `num files: <N>` in flat and glob
/// mode; in recursive mode a `recursive search` banner, every directory
/// visited and every entry that could not be read.
///
/// Fails only when discovery fails in flat or glob mode, or when the pool
/// cannot be started. Per-file problems are logged and leave the total
/// untouched.
///
/// # Example
///
/// ```rust,ignore
/// use linecountlib::{run, Mode, RunOptions};
///
/// let summary = run(&RunOptions::new("logs").mode(Mode::Recursive), &mut std::io::stdout())?;
/// println!("total lines: {}", summary.total);
/// ```
pub fn run(options: &RunOptions, out: &mut impl Write) -> Result<RunSummary> {
    match options.mode {
        Mode::Flat => {
            let files = list_dir(&options.input)?;
            count_listed(files, options, out)
        }
        Mode::Glob => {
            let files = expand_glob(&options.input.to_string_lossy())?;
            count_listed(files, options, out)
        }
        Mode::Recursive => count_recursive(options, out),
    }
}

fn count_listed(
    files: Vec<std::path::PathBuf>,
    options: &RunOptions,
    out: &mut impl Write,
) -> Result<RunSummary> {
    writeln!(out, "num files: {}", files.len())?;

    let mut dispatcher = Dispatcher::new(options.workers)?;
    for file in files {
        dispatcher.submit(file);
    }
    Ok(summarize(dispatcher))
}

fn count_recursive(options: &RunOptions, out: &mut impl Write) -> Result<RunSummary> {
    writeln!(out, "recursive search")?;

    let mut dispatcher = Dispatcher::new(options.workers)?;
    let mut written = Ok(());
    walk_tree(&options.input, |event| match event {
        WalkEvent::Directory(dir) => {
            if written.is_ok() {
                written = writeln!(out, "{}", dir.display());
            }
        }
        WalkEvent::File(file) => dispatcher.submit(file),
        WalkEvent::Error(err) => {
            if written.is_ok() {
                written = writeln!(out, "{err}");
            }
        }
    });

    let summary = summarize(dispatcher);
    written?;
    Ok(summary)
}

fn summarize(dispatcher: Dispatcher) -> RunSummary {
    let files_submitted = dispatcher.submitted();
    let tally = dispatcher.finish();
    RunSummary {
        total: tally.total(),
        files_submitted,
        files_skipped: tally.skipped(),
    }
}
