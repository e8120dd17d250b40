//! Worker pool dispatcher.
//!
//! A fixed set of worker threads drain a shared queue of file paths. Each
//! worker opens and scans one file at a time and folds the count into a
//! shared [`LineTally`]. Per-file failures are logged and skipped; they never
//! reach the caller.
//!
//! Every submitted path carries a [`PendingGuard`], so each submission is
//! matched by exactly one completion no matter how its task ends.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, warn};

use crate::error::{LinecountError, ScanError};
use crate::pending::{PendingGuard, PendingWork};
use crate::scanner::count_file;
use crate::Result;

/// Number of worker threads used by [`Dispatcher::with_default_workers`].
pub const DEFAULT_WORKERS: usize = 100;

/// Shared result of a run. Only ever mutated with atomic adds.
#[derive(Debug, Default)]
pub struct LineTally {
    total: AtomicU64,
    completed: AtomicUsize,
    skipped: AtomicUsize,
}

impl LineTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of newline counts of every successfully scanned file.
    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Acquire)
    }

    /// Tasks finished, successful or not.
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Acquire)
    }

    /// Tasks that failed to open or scan.
    pub fn skipped(&self) -> usize {
        self.skipped.load(Ordering::Acquire)
    }

    fn record(&self, outcome: &std::result::Result<u64, ScanError>) {
        match outcome {
            Ok(lines) => {
                self.total.fetch_add(*lines, Ordering::AcqRel);
            }
            Err(_) => {
                self.skipped.fetch_add(1, Ordering::AcqRel);
            }
        }
        self.completed.fetch_add(1, Ordering::AcqRel);
    }
}

/// One queued file. The guard drops when the task is done with it.
struct Task {
    path: PathBuf,
    _pending: PendingGuard,
}

/// Bounded-concurrency executor for per-file line counting.
///
/// ```rust,ignore
/// let mut dispatcher = Dispatcher::new(8)?;
/// dispatcher.submit("notes.txt");
/// let tally = dispatcher.finish();
/// println!("{}", tally.total());
/// ```
#[derive(Debug)]
pub struct Dispatcher {
    sender: Option<Sender<Task>>,
    workers: Vec<JoinHandle<()>>,
    pending: Arc<PendingWork>,
    tally: Arc<LineTally>,
    submitted: usize,
}

impl Dispatcher {
    /// Start a pool of `workers` threads.
    pub fn new(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(LinecountError::PoolConstruction(
                "worker count must be greater than zero".to_string(),
            ));
        }

        let (sender, receiver) = crossbeam_channel::unbounded::<Task>();
        let tally = Arc::new(LineTally::new());

        let mut dispatcher = Self {
            sender: Some(sender),
            workers: Vec::with_capacity(workers),
            pending: PendingWork::new(),
            tally: Arc::clone(&tally),
            submitted: 0,
        };

        for id in 0..workers {
            let receiver = receiver.clone();
            let tally = Arc::clone(&tally);
            let handle = thread::Builder::new()
                .name(format!("linecount-worker-{id}"))
                .spawn(move || worker_loop(receiver, tally))
                .map_err(|e| LinecountError::PoolConstruction(e.to_string()))?;
            dispatcher.workers.push(handle);
        }

        debug!(workers, "worker pool started");
        Ok(dispatcher)
    }

    /// Start a pool of [`DEFAULT_WORKERS`] threads.
    pub fn with_default_workers() -> Result<Self> {
        Self::new(DEFAULT_WORKERS)
    }

    /// Queue a file for counting. Never waits for a free worker.
    pub fn submit(&mut self, path: impl Into<PathBuf>) {
        let task = Task {
            path: path.into(),
            _pending: self.pending.add(),
        };
        self.submitted += 1;

        let Some(sender) = &self.sender else {
            return;
        };
        // Only fails once every worker is gone; the returned task drops its
        // guard here, so the submission still completes.
        if let Err(err) = sender.send(task) {
            warn!("no workers left to count {}", err.into_inner().path.display());
        }
    }

    /// Number of paths submitted so far.
    pub fn submitted(&self) -> usize {
        self.submitted
    }

    /// The shared tally. Final only after [`Dispatcher::wait`] returns.
    pub fn tally(&self) -> &LineTally {
        &self.tally
    }

    /// Block until every submitted path has been processed.
    pub fn wait(&self) {
        self.pending.wait();
    }

    /// Wait for all work, stop the workers and hand back the tally.
    pub fn finish(mut self) -> Arc<LineTally> {
        self.wait();
        self.shutdown();
        Arc::clone(&self.tally)
    }

    fn shutdown(&mut self) {
        // Closing the queue ends every worker's recv loop.
        self.sender.take();
        for handle in self.workers.drain(..) {
            if handle.join().is_err() {
                warn!("worker thread panicked");
            }
        }
        debug!(
            submitted = self.submitted,
            completed = self.tally.completed(),
            "worker pool stopped"
        );
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        if self.sender.is_some() {
            self.shutdown();
        }
    }
}

fn worker_loop(receiver: Receiver<Task>, tally: Arc<LineTally>) {
    while let Ok(task) = receiver.recv() {
        let outcome = count_file(&task.path);
        if let Err(err) = &outcome {
            log_skip(&task.path, err);
        }
        tally.record(&outcome);
    }
}

fn log_skip(path: &Path, err: &ScanError) {
    match err {
        ScanError::Open { .. } => warn!("{err}"),
        _ => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_else(|| path.to_string_lossy());
            warn!("{err}: {name}");
        }
    }
}
