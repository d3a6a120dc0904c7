//! A lone bar for sequential work.

use crate::bar;
use crate::error::Result;
use std::io::{Stdout, Write};

/// A single `Progress:` bar, redrawn over itself with a carriage return.
///
/// ```
/// use threadbars::SingleBar;
///
/// let mut single = SingleBar::new(Vec::new(), 10);
/// single.update(50, 100).unwrap();
///
/// let out = String::from_utf8(single.into_inner()).unwrap();
/// assert!(out.starts_with("\rProgress: ["));
/// assert!(out.ends_with("     ]  50.0 %"));
/// ```
pub struct SingleBar<W: Write> {
    out: W,
    bar_width: usize,
}

impl SingleBar<Stdout> {
    /// A bar drawing to `Stdout`.
    pub fn stdout(bar_width: usize) -> SingleBar<Stdout> {
        SingleBar::new(std::io::stdout(), bar_width)
    }
}

impl<W: Write> SingleBar<W> {
    pub fn new(out: W, bar_width: usize) -> SingleBar<W> {
        SingleBar { out, bar_width }
    }

    /// Draw the bar at `current_step` out of `total_steps`.
    ///
    /// A `total_steps` of zero is not guarded against: the resulting `NaN` or
    /// infinite percentage is drawn as-is.
    pub fn update(&mut self, current_step: u64, total_steps: u64) -> Result<()> {
        let percent = current_step as f64 / total_steps as f64 * 100.0;

        self.out.write_all(b"\rProgress: ")?;
        bar::write_bar(&mut self.out, percent, self.bar_width)?;

        // Very important, or the output won't appear fluid.
        self.out.flush()?;
        Ok(())
    }

    /// Move past the bar's line so later output doesn't overwrite it.
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ansi;

    fn drawn(current: u64, total: u64, width: usize) -> String {
        let mut s = SingleBar::new(Vec::new(), width);
        s.update(current, total).unwrap();
        String::from_utf8(s.into_inner()).unwrap()
    }

    #[test]
    fn halfway() {
        let yellow = format!("{}#{}", ansi::BRIGHT_YELLOW, ansi::RESET);
        assert_eq!(
            drawn(50, 100, 10),
            format!("\rProgress: [{}     ]  50.0 %", yellow.repeat(5))
        );
    }

    #[test]
    fn complete() {
        let blue = format!("{}#{}", ansi::BRIGHT_BLUE, ansi::RESET);
        assert_eq!(
            drawn(100, 100, 10),
            format!("\rProgress: [{}] 100.0 %", blue.repeat(10))
        );
    }

    #[test]
    fn overshoot_is_capped() {
        let plain = format!("#{}", ansi::RESET);
        assert_eq!(
            drawn(132, 100, 10),
            format!("\rProgress: [{}] 100.0 %", plain.repeat(10))
        );
    }

    #[test]
    fn zero_total_passes_nan_through() {
        assert_eq!(drawn(0, 0, 3), "\rProgress: [   ]   NaN %");
    }

    #[test]
    fn repeated_updates_share_a_line() {
        let mut s = SingleBar::new(Vec::new(), 5);
        for i in 0..=4 {
            s.update(i, 4).unwrap();
        }
        s.release().unwrap();
        let out = String::from_utf8(s.into_inner()).unwrap();
        assert_eq!(out.matches('\r').count(), 5);
        assert_eq!(out.matches('\n').count(), 1);
        assert!(out.ends_with("] 100.0 %\n"));
    }
}
