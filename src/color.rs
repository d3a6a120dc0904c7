//! Mapping a percentage onto the four-color ramp.

use crate::ansi;

/// The color bucket a bar's filled segment is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTier {
    /// From 0% up to (but not including) 33%.
    Red,
    /// From 33% up to (but not including) 66%.
    Yellow,
    /// From 66% up to (but not including) 100%.
    Green,
    /// Exactly 100%.
    Blue,
    /// Anything else: negative, above 100, or `NaN`.
    None,
}

impl ColorTier {
    /// Classify a percentage. Total over every `f64`.
    ///
    /// ```
    /// use threadbars::ColorTier;
    ///
    /// assert_eq!(ColorTier::for_percent(10.0), ColorTier::Red);
    /// assert_eq!(ColorTier::for_percent(100.0), ColorTier::Blue);
    /// assert_eq!(ColorTier::for_percent(132.0), ColorTier::None);
    /// ```
    pub fn for_percent(percent: f64) -> ColorTier {
        if percent < 0.0 {
            ColorTier::None
        } else if percent < 33.0 {
            ColorTier::Red
        } else if percent < 66.0 {
            ColorTier::Yellow
        } else if percent < 100.0 {
            ColorTier::Green
        } else if percent == 100.0 {
            ColorTier::Blue
        } else {
            ColorTier::None
        }
    }

    /// The escape sequence that switches to this tier's color, if any.
    pub fn escape(self) -> Option<&'static str> {
        match self {
            ColorTier::Red => Some(ansi::BRIGHT_RED),
            ColorTier::Yellow => Some(ansi::BRIGHT_YELLOW),
            ColorTier::Green => Some(ansi::BRIGHT_GREEN),
            ColorTier::Blue => Some(ansi::BRIGHT_BLUE),
            ColorTier::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges() {
        assert_eq!(ColorTier::for_percent(0.0), ColorTier::Red);
        assert_eq!(ColorTier::for_percent(32.99), ColorTier::Red);
        assert_eq!(ColorTier::for_percent(33.0), ColorTier::Yellow);
        assert_eq!(ColorTier::for_percent(65.99), ColorTier::Yellow);
        assert_eq!(ColorTier::for_percent(66.0), ColorTier::Green);
        assert_eq!(ColorTier::for_percent(99.99), ColorTier::Green);
        assert_eq!(ColorTier::for_percent(100.0), ColorTier::Blue);
        assert_eq!(ColorTier::for_percent(100.01), ColorTier::None);
    }

    #[test]
    fn out_of_range() {
        assert_eq!(ColorTier::for_percent(-5.0), ColorTier::None);
        assert_eq!(ColorTier::for_percent(-0.0), ColorTier::Red);
        assert_eq!(ColorTier::for_percent(f64::NAN), ColorTier::None);
        assert_eq!(ColorTier::for_percent(f64::INFINITY), ColorTier::None);
        assert_eq!(ColorTier::for_percent(f64::NEG_INFINITY), ColorTier::None);
    }

    #[test]
    fn escapes() {
        assert_eq!(ColorTier::Blue.escape(), Some("\x1B[94m"));
        assert_eq!(ColorTier::Yellow.escape(), Some("\x1B[93m"));
        assert_eq!(ColorTier::None.escape(), None);
    }
}
