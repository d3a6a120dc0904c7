//! Environment-driven settings: how many workers to draw, and how wide.

use std::num::NonZeroUsize;
use tracing::{debug, warn};

/// The variable consulted for an explicit worker count.
pub const NUM_THREADS_VAR: &str = "OMP_NUM_THREADS";

/// The assumed terminal width. There is no auto-detection.
pub const TERMINAL_LEN: usize = 79;

/// Bar width that fits `Progress: [...] 100.0 %` into [`TERMINAL_LEN`].
pub const SINGLE_BAR_WIDTH: usize = TERMINAL_LEN - 20;

/// Bar width that fits `Thread   0: [...] 100.0 %` into [`TERMINAL_LEN`].
pub const MULTI_BAR_WIDTH: usize = TERMINAL_LEN - 22;

/// The number of workers to draw bars for, read from [`NUM_THREADS_VAR`].
pub fn num_workers() -> usize {
    num_workers_from(NUM_THREADS_VAR)
}

/// Like [`num_workers`], but consulting the given variable.
///
/// Falls back to the platform's available parallelism when the variable is
/// absent or doesn't parse to a positive count. Always positive.
pub fn num_workers_from(var: &str) -> usize {
    match std::env::var(var) {
        Ok(raw) => match parse_count(&raw) {
            Some(n) => {
                debug!("Using {} workers from {}.", n, var);
                n
            }
            None => {
                warn!("Ignoring {}={:?}: not a positive count.", var, raw);
                default_parallelism()
            }
        },
        Err(_) => default_parallelism(),
    }
}

/// Permissively parse a worker count.
///
/// Leading whitespace and a sign are skipped, then as many digits as are
/// present are read and the rest ignored, so `"4 threads"` is `4`. Inputs
/// that don't reach a positive number yield `None`.
///
/// ```
/// use threadbars::config::parse_count;
///
/// assert_eq!(parse_count(" 8"), Some(8));
/// assert_eq!(parse_count("12abc"), Some(12));
/// assert_eq!(parse_count("abc"), None);
/// assert_eq!(parse_count("-3"), None);
/// ```
pub fn parse_count(raw: &str) -> Option<usize> {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let n: usize = s[..end].parse().ok()?;

    if negative || n == 0 {
        None
    } else {
        Some(n)
    }
}

fn default_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}
