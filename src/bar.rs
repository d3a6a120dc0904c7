//! Rendering of a single bar body.
//!
//! A bar body looks like `[###       ]  30.0 %`, where each `#` carries its
//! own color escape and a trailing reset. The line prefix (`Progress: ` or
//! `Thread   2: `) and the line ending are the caller's business.

use crate::ansi;
use crate::color::ColorTier;
use std::io::{self, Write};

const FILLED: char = '#';
const BLANK: char = ' ';

/// The number of filled glyphs for a given percentage.
///
/// This is `floor(percent * width / 100)` clamped into `[0, width]`. The
/// percentage is used as given, so anything over 100 saturates at a full bar
/// and anything negative or `NaN` yields an empty one. An overfull bar is
/// thus drawn full and uncolored, while its label stops at 100.
///
/// ```
/// use threadbars::bar::fill_count;
///
/// assert_eq!(fill_count(50.0, 10), 5);
/// assert_eq!(fill_count(132.0, 10), 10);
/// ```
pub fn fill_count(percent: f64, width: usize) -> usize {
    // `as` saturates: negatives and NaN become 0, infinity becomes MAX.
    let raw = (percent * width as f64 / 100.0).floor() as usize;
    raw.min(width)
}

/// The value printed in the percentage label. Capped at 100.
pub fn label_percent(percent: f64) -> f64 {
    if percent > 100.0 {
        100.0
    } else {
        percent
    }
}

/// Write one bar body for `percent` at the given `width`.
///
/// Fill count and color are taken from the raw `percent`; only the label is
/// capped. A `width` of zero draws `[]` followed by the label.
pub fn write_bar<W: Write>(out: &mut W, percent: f64, width: usize) -> io::Result<()> {
    let fill = fill_count(percent, width);
    let color = ColorTier::for_percent(percent).escape();

    out.write_all(b"[")?;
    for _ in 0..fill {
        if let Some(c) = color {
            out.write_all(c.as_bytes())?;
        }
        write!(out, "{}{}", FILLED, ansi::RESET)?;
    }
    for _ in fill..width {
        write!(out, "{}", BLANK)?;
    }
    write!(out, "] {:5.1} %", label_percent(percent))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(percent: f64, width: usize) -> String {
        let mut out = Vec::new();
        write_bar(&mut out, percent, width).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn fill_is_floored_and_bounded() {
        for w in 1..=40 {
            for p in 0..=100 {
                let p = p as f64;
                let f = fill_count(p, w);
                assert_eq!(f, (p * w as f64 / 100.0).floor() as usize);
                assert!(f <= w);
            }
        }
        assert_eq!(fill_count(33.3, 7), 2);
        assert_eq!(fill_count(-20.0, 10), 0);
        assert_eq!(fill_count(f64::NAN, 10), 0);
        assert_eq!(fill_count(f64::INFINITY, 10), 10);
    }

    #[test]
    fn half_full() {
        let red = format!("{}#{}", ansi::BRIGHT_RED, ansi::RESET);
        let yellow = format!("{}#{}", ansi::BRIGHT_YELLOW, ansi::RESET);
        assert_eq!(render(50.0, 10), format!("[{}     ]  50.0 %", yellow.repeat(5)));
        assert_eq!(render(10.0, 10), format!("[{}         ]  10.0 %", red));
    }

    #[test]
    fn full_is_blue() {
        let blue = format!("{}#{}", ansi::BRIGHT_BLUE, ansi::RESET);
        assert_eq!(render(100.0, 10), format!("[{}] 100.0 %", blue.repeat(10)));
    }

    #[test]
    fn overfull_is_uncolored_and_capped() {
        let plain = format!("#{}", ansi::RESET);
        assert_eq!(render(132.0, 10), format!("[{}] 100.0 %", plain.repeat(10)));
    }

    #[test]
    fn empty_and_degenerate() {
        assert_eq!(render(0.0, 4), "[    ]   0.0 %");
        assert_eq!(render(75.0, 0), "[]  75.0 %");
        assert_eq!(render(-3.0, 3), "[   ]  -3.0 %");
    }
}
