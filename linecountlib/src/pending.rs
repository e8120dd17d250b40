//! Pending-work counter.
//!
//! Tracks submitted-but-unfinished tasks. The submitter calls [`PendingWork::add`]
//! before handing a task to a worker; the worker holds the returned
//! [`PendingGuard`] and the count drops when the guard does, on every exit
//! path. [`PendingWork::wait`] blocks until the count reaches zero.
//!
//! Mutex + Condvar rather than atomics: waiting has to block, not spin.

use std::sync::{Arc, Condvar, Mutex, MutexGuard};

#[derive(Debug, Default)]
pub struct PendingWork {
    outstanding: Mutex<usize>,
    zero: Condvar,
}

impl PendingWork {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Lock with poison recovery; `done` runs from `Drop`.
    fn lock(&self) -> MutexGuard<'_, usize> {
        match self.outstanding.lock() {
            Ok(guard) => guard,
            Err(poison) => poison.into_inner(),
        }
    }

    /// Record one more outstanding task.
    pub fn add(self: &Arc<Self>) -> PendingGuard {
        *self.lock() += 1;
        PendingGuard {
            pending: Arc::clone(self),
        }
    }

    fn done(&self) {
        let mut outstanding = self.lock();
        debug_assert!(*outstanding > 0, "PendingWork released more than added");
        *outstanding = outstanding.saturating_sub(1);
        if *outstanding == 0 {
            self.zero.notify_all();
        }
    }

    /// Number of tasks not yet finished. A snapshot; may be stale.
    pub fn outstanding(&self) -> usize {
        *self.lock()
    }

    /// Block until every added task has finished.
    pub fn wait(&self) {
        let mut outstanding = self.lock();
        while *outstanding > 0 {
            outstanding = match self.zero.wait(outstanding) {
                Ok(guard) => guard,
                Err(poison) => poison.into_inner(),
            };
        }
    }
}

/// One outstanding task. Dropping it marks the task finished.
#[must_use = "dropping the guard immediately marks the task finished"]
#[derive(Debug)]
pub struct PendingGuard {
    pending: Arc<PendingWork>,
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.pending.done();
    }
}
