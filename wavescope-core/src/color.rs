//! Hex color values as accepted on the command line.
//!
//! Colors arrive as `#RRGGBB` strings. Once validated they are held as
//! [`HexColor`], which can be rendered in the engine's numeric literal
//! notation (`0xRRGGBB`) or decomposed into channels for filters that take
//! per-channel options.

use crate::error::{CoreError, CoreResult};
use std::fmt;

/// A validated `#RRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl HexColor {
    /// Parses `value`, which must be `#` followed by exactly six hex digits
    /// (either case). `name` identifies the parameter in the error.
    pub fn parse(name: &'static str, value: &str) -> CoreResult<Self> {
        let invalid = || CoreError::InvalidHexColor {
            name,
            value: value.to_string(),
        };

        let digits = value.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self {
            red: channel(0)?,
            green: channel(2)?,
            blue: channel(4)?,
        })
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    /// Exchanges the red and blue channels.
    ///
    /// Only the volume meter color goes through this: ffmpeg's `showvolume`
    /// reads its color expression with red and blue inverted.
    #[must_use]
    pub fn swap_red_blue(self) -> Self {
        Self {
            red: self.blue,
            green: self.green,
            blue: self.red,
        }
    }

    /// Renders the color as `0xrrggbb`, the notation ffmpeg options accept.
    pub fn engine_literal(&self) -> String {
        format!("0x{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Channel intensities scaled to 0..=1 and rounded to two decimals.
    pub fn ratios(&self) -> [String; 3] {
        [self.red, self.green, self.blue].map(|c| format!("{:.2}", f64::from(c) / 255.0))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}
