//! Errors that can occur while drawing bars.

use std::io;
use thiserror::Error;

/// Errors that can happen when using `threadbars`.
#[derive(Error, Debug)]
pub enum Error {
    /// Writing to or flushing the terminal failed.
    ///
    /// Failed writes are never retried. The region is left in whatever state
    /// the partial write produced.
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// A worker id outside of the session's fixed worker count.
    #[error("No worker slot {id}: the display was created with {count} workers")]
    NoSuchWorker { id: usize, count: usize },
}

/// Result type alias for operations that can fail with a `threadbars` error.
pub type Result<T> = std::result::Result<T, Error>;
