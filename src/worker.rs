//! Per-worker progress records.

use std::io::{self, Write};

/// The progress of one worker, as tracked by a
/// [`MultiBarDisplay`](crate::MultiBarDisplay).
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerState {
    /// Assigned once, by the worker itself, on first contact.
    pub(crate) id: Option<usize>,
    /// Usually within `[0, 100]`, but never rejected when outside of it.
    pub(crate) percent: f64,
    /// Recomputed from `percent` on every render pass.
    pub(crate) done: bool,
}

impl WorkerState {
    /// An unassigned worker with no progress.
    pub fn new() -> WorkerState {
        WorkerState {
            id: None,
            percent: 0.0,
            done: false,
        }
    }

    /// The worker's id, or `None` if it hasn't checked in yet.
    pub fn id(&self) -> Option<usize> {
        self.id
    }

    /// Last reported progress, in percent.
    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Set the progress directly, without drawing.
    pub fn set_percent(&mut self, percent: f64) {
        self.percent = percent;
    }

    /// Was this worker at or above 100% during the last render pass?
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Write the `Thread <id>: ` line prefix. Unassigned workers show `-1`.
    pub(crate) fn write_prefix<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.id {
            Some(id) => write!(out, "Thread {:3}: ", id),
            None => write!(out, "Thread {:3}: ", -1),
        }
    }
}

impl Default for WorkerState {
    fn default() -> Self {
        WorkerState::new()
    }
}

/// A worker slot handle for use with [`MultiBarDisplay`](crate::MultiBarDisplay).
///
/// Like a bar index, this has no meaningful methods of its own. Progress is
/// reported through the owning display:
///
/// ```
/// use threadbars::MultiBarDisplay;
///
/// let mut display = MultiBarDisplay::new(Vec::new(), 2, 20);
/// let worker = display.worker(1).unwrap();
/// display.update(&worker, 50.0).unwrap();
/// ```
///
/// This type can only be constructed via
/// [`MultiBarDisplay::worker`](crate::MultiBarDisplay::worker).
#[derive(Debug, PartialEq, Eq)]
pub struct Worker(pub(crate) usize);

impl Worker {
    /// The id (and slot) of this worker.
    pub fn id(&self) -> usize {
        self.0
    }
}
