//! Colored per-thread progress bars, redrawn in place.
//!
//! # Features
//!
//! - One bar per worker, all drawn in a fixed block that never scrolls.
//! - A single carriage-return bar for sequential work.
//! - A fixed four-color ramp: red, yellow, green, then blue when complete.
//! - Reliable "everyone is done" detection under concurrent updates.
//! - Draws to any [`Write`](std::io::Write), not just `Stdout`.
//!
//! # Usage
//!
//! ## Multi Bars
//!
//! [`MultiBarDisplay`] owns one slot per worker for the whole session. Each
//! worker checks in once with [`MultiBarDisplay::worker`] to receive a
//! [`Worker`] handle, and then reports its progress through the display.
//! Every report redraws the entire block and moves the cursor back to its
//! top, until all workers have reached 100%.
//!
//! `MultiBarDisplay` is not [`Clone`] and holds no locks, and so must be
//! wrapped in the usual [concurrent sharing types][arcmutex] before being
//! passed between threads. The lock is what keeps two redraws from
//! interleaving on the terminal:
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use threadbars::{MultiBarDisplay, Worker};
//! use rayon::prelude::*;
//!
//! let display = Arc::new(Mutex::new(MultiBarDisplay::stdout(4, 40)));
//!
//! (0..4).into_par_iter().for_each_with(display, |d, n| {
//!   let worker: Worker = d.lock().unwrap().worker(n).unwrap();
//!
//!   for step in 1..=10 {
//!     // ... Your logic ...
//!
//!     d.lock().unwrap().update(&worker, step as f64 * 10.0).unwrap();
//!   }
//! });
//! ```
//!
//! Once a render pass has seen every worker at or above 100%, the display
//! latches: further calls to [`MultiBarDisplay::render_pass`] or
//! [`MultiBarDisplay::update`] leave the terminal alone. Call
//! [`MultiBarDisplay::release`] to move past the block afterwards.
//!
//! ## Single Bars
//!
//! For sequential work there is [`SingleBar`], which overwrites its own line
//! with a carriage return and needs no locking:
//!
//! ```
//! use threadbars::SingleBar;
//!
//! let mut single = SingleBar::stdout(40);
//!
//! for step in 0..=50 {
//!   single.update(step, 50).unwrap();
//! }
//!
//! single.release().unwrap();
//! ```
//!
//! ## Worker Counts
//!
//! [`config::num_workers`] honours `OMP_NUM_THREADS` when it's set, and
//! otherwise uses the platform's available parallelism.
//!
//! # Caveats
//!
//! - Your terminal must support ANSI codes.
//! - The number of workers is fixed for the life of a display.
//! - Bar widths are fixed. The terminal's size is never consulted.
//! - Progress above 100% draws a full, uncolored bar labelled `100.0 %`.
//!
//! [arcmutex]: https://doc.rust-lang.org/stable/book/ch16-03-shared-state.html?#atomic-reference-counting-with-arct

pub mod ansi;
pub mod bar;
pub mod color;
pub mod config;
pub mod error;
pub mod multi;
pub mod single;
pub mod worker;

pub use color::ColorTier;
pub use error::{Error, Result};
pub use multi::MultiBarDisplay;
pub use single::SingleBar;
pub use worker::{Worker, WorkerState};
