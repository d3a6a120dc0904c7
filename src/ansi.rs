//! The ANSI control sequences written to the terminal.

use std::io::{self, Write};

/// Reset all styling.
pub const RESET: &str = "\x1B[0m";
pub const BRIGHT_RED: &str = "\x1B[91m";
pub const BRIGHT_GREEN: &str = "\x1B[92m";
pub const BRIGHT_YELLOW: &str = "\x1B[93m";
pub const BRIGHT_BLUE: &str = "\x1B[94m";
/// Available to callers, but never chosen by [`crate::color::ColorTier`].
pub const BRIGHT_MAGENTA: &str = "\x1B[95m";

/// Move the cursor to the start of the line `n` rows above.
pub fn write_cursor_up<W: Write>(out: &mut W, n: usize) -> io::Result<()> {
    write!(out, "\x1B[{}F", n)
}
