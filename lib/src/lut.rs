//! Brightness to character lookup
//!
//! A [`Palette`] is an ordered ramp of characters, darkest first. Quantizing
//! a brightness value picks the ramp position proportional to that value.

use crate::error::AsciiError;
use std::fmt;
use std::str::FromStr;

/// Default ramp from darkest (`@`) to lightest (space)
pub const DEFAULT_PALETTE: &str = "@#S%?*+;:,.- ";

/// Ordered character ramp, darkest first
///
/// Always holds at least two characters, so every brightness maps to a
/// well-defined index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    chars: Vec<char>,
}

impl Palette {
    /// Build a palette from a darkest-to-lightest string
    ///
    /// # Errors
    /// Returns [`AsciiError::InvalidPalette`] if the string holds fewer than
    /// two characters or contains a line break.
    pub fn new(ramp: &str) -> Result<Self, AsciiError> {
        let chars: Vec<char> = ramp.chars().collect();
        if chars.len() < 2 {
            return Err(AsciiError::InvalidPalette(format!(
                "need at least 2 characters, got {}",
                chars.len()
            )));
        }
        if chars.iter().any(|&c| c == '\n' || c == '\r') {
            return Err(AsciiError::InvalidPalette(
                "line breaks cannot be used as glyphs".to_string(),
            ));
        }
        Ok(Self { chars })
    }

    /// Characters in darkest-to-lightest order
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Never true for a palette built through `new`
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn darkest(&self) -> char {
        self.chars[0]
    }

    pub fn lightest(&self) -> char {
        self.chars[self.chars.len() - 1]
    }

    /// Palette index for a brightness value
    ///
    /// Values outside `[0, 255]` are clamped first. The index is
    /// `floor(value / 255 * (len - 1))`, clamped to the valid range.
    pub fn index_of(&self, value: i32) -> usize {
        let value = value.clamp(0, 255);
        let last = self.chars.len() - 1;

        let scaled = (f64::from(value) / 255.0 * last as f64).floor();
        (scaled.max(0.0) as usize).min(last)
    }

    /// Map a brightness value to its character
    ///
    /// # Arguments
    /// * `value` - Brightness, nominally 0 (black) to 255 (white)
    ///
    /// # Returns
    /// The palette character for this brightness
    pub fn quantize(&self, value: i32) -> char {
        self.chars[self.index_of(value)]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            chars: DEFAULT_PALETTE.chars().collect(),
        }
    }
}

impl FromStr for Palette {
    type Err = AsciiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Palette::new(s)
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
