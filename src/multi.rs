//! One bar per worker, redrawn in place.

use crate::ansi;
use crate::bar;
use crate::error::{Error, Result};
use crate::worker::{Worker, WorkerState};
use std::io::{Stdout, Write};
use tracing::{debug, trace};

/// Draw every worker's bar once, then rewind the cursor to the top of the
/// block unless every worker is done.
///
/// Does nothing at all if `all_done` is already set. Otherwise each worker's
/// `done` flag is recomputed from its percent as its line is drawn, and
/// `all_done` is then recomputed from those fresh flags. When some worker is
/// still running, the cursor is moved up `workers.len()` lines so that the
/// next pass overwrites this one instead of scrolling.
///
/// ```
/// use threadbars::{multi, WorkerState};
///
/// let mut workers = vec![WorkerState::new(); 2];
/// workers[0].set_percent(100.0);
/// workers[1].set_percent(100.0);
///
/// let mut out = Vec::new();
/// let mut all_done = false;
/// multi::render_pass(&mut out, &mut workers, 10, &mut all_done).unwrap();
/// assert!(all_done);
/// ```
pub fn render_pass<W: Write>(
    out: &mut W,
    workers: &mut [WorkerState],
    bar_width: usize,
    all_done: &mut bool,
) -> Result<()> {
    if *all_done {
        return Ok(());
    }

    for w in workers.iter_mut() {
        w.write_prefix(out)?;
        bar::write_bar(out, w.percent, bar_width)?;
        out.write_all(b"\n")?;
        w.done = w.percent >= 100.0;
    }

    *all_done = workers.iter().all(|w| w.done);

    if *all_done {
        debug!("All {} workers done. Releasing the display region.", workers.len());
    } else {
        ansi::write_cursor_up(out, workers.len())?;
    }

    out.flush()?;
    Ok(())
}

/// A fixed block of per-worker bars sharing one terminal region.
///
/// `MultiBarDisplay` does not implement [`Clone`] and holds no locks of its
/// own. Share it between threads in the usual way, so that only one render
/// pass can touch the terminal at a time:
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use threadbars::MultiBarDisplay;
///
/// let display = Arc::new(Mutex::new(MultiBarDisplay::new(Vec::new(), 4, 20)));
///
/// let handles: Vec<_> = (0..4)
///     .map(|id| {
///         let d = Arc::clone(&display);
///         std::thread::spawn(move || {
///             let worker = d.lock().unwrap().worker(id).unwrap();
///             for step in 1..=10 {
///                 d.lock().unwrap().update(&worker, step as f64 * 10.0).unwrap();
///             }
///         })
///     })
///     .collect();
///
/// for h in handles {
///     h.join().unwrap();
/// }
///
/// assert!(display.lock().unwrap().all_done());
/// ```
pub struct MultiBarDisplay<W: Write> {
    /// Where the block is drawn.
    out: W,
    /// One slot per worker. Never resized.
    workers: Vec<WorkerState>,
    /// Width of every bar body.
    bar_width: usize,
    /// Latched once a pass sees every worker done.
    all_done: bool,
}

impl MultiBarDisplay<Stdout> {
    /// A display drawing to `Stdout`.
    pub fn stdout(num_workers: usize, bar_width: usize) -> MultiBarDisplay<Stdout> {
        MultiBarDisplay::new(std::io::stdout(), num_workers, bar_width)
    }
}

impl<W: Write> MultiBarDisplay<W> {
    /// Start a session for a fixed number of workers. Nothing is drawn yet.
    pub fn new(out: W, num_workers: usize, bar_width: usize) -> MultiBarDisplay<W> {
        MultiBarDisplay {
            out,
            workers: vec![WorkerState::new(); num_workers],
            bar_width,
            all_done: false,
        }
    }

    /// Check in as worker `id` and receive a handle to its slot.
    ///
    /// The id is recorded the first time; later calls for the same id return
    /// an equivalent handle.
    pub fn worker(&mut self, id: usize) -> Result<Worker> {
        let count = self.workers.len();
        let slot = self
            .workers
            .get_mut(id)
            .ok_or(Error::NoSuchWorker { id, count })?;

        if slot.id.is_none() {
            trace!("Worker {} checked in.", id);
            slot.id = Some(id);
        }

        Ok(Worker(id))
    }

    /// Set a worker's progress, but don't draw it.
    ///
    /// Fails if the handle came from a display with more workers.
    pub fn set(&mut self, worker: &Worker, percent: f64) -> Result<()> {
        let count = self.workers.len();
        let slot = self
            .workers
            .get_mut(worker.0)
            .ok_or(Error::NoSuchWorker {
                id: worker.0,
                count,
            })?;

        slot.percent = percent;
        Ok(())
    }

    /// Run one render pass over every worker.
    ///
    /// A no-op once [`MultiBarDisplay::all_done`] has been observed.
    pub fn render_pass(&mut self) -> Result<()> {
        render_pass(
            &mut self.out,
            &mut self.workers,
            self.bar_width,
            &mut self.all_done,
        )
    }

    /// Set a worker's progress and immediately redraw the block.
    pub fn update(&mut self, worker: &Worker, percent: f64) -> Result<()> {
        self.set(worker, percent)?;
        self.render_pass()
    }

    /// Was the given worker done as of the last render pass?
    ///
    /// A handle with no slot in this display is never done.
    pub fn is_done(&self, worker: &Worker) -> bool {
        self.workers.get(worker.0).map_or(false, |w| w.done)
    }

    /// Has a render pass seen every worker done?
    pub fn all_done(&self) -> bool {
        self.all_done
    }

    /// The worker slots, in display order.
    pub fn workers(&self) -> &[WorkerState] {
        &self.workers
    }

    /// Emit a final newline, handing the terminal back to normal output.
    pub fn release(&mut self) -> Result<()> {
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
