//! Hex color strings and their RGB triples.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as an uppercase `#RRGGBB` string.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl std::str::FromStr for Rgb {
    type Err = InvalidColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

/// A string that is not a `#RGB` or `#RRGGBB` hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid color: {input:?} is not a #RGB or #RRGGBB hex value")]
pub struct InvalidColor {
    /// The input exactly as the caller supplied it
    pub input: String,
}

impl InvalidColor {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

/// Normalize a hex color to six hex digits without the leading `#`.
///
/// A single leading `#` is stripped and the short `RGB` form is expanded by
/// doubling each digit (`abc` -> `aabbcc`). Digit case is preserved.
pub fn normalize_hex(input: &str) -> Result<String, InvalidColor> {
    let digits = input.strip_prefix('#').unwrap_or(input);

    let expanded: String = if digits.chars().count() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    if expanded.len() == 6 && expanded.bytes().all(|b| b.is_ascii_hexdigit()) {
        Ok(expanded)
    } else {
        Err(InvalidColor::new(input))
    }
}

/// Parse a `#RGB` / `#RRGGBB` string into its RGB triple.
pub fn parse_hex(input: &str) -> Result<Rgb, InvalidColor> {
    let digits = normalize_hex(input)?;

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| InvalidColor::new(input))
    };

    Ok(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}
