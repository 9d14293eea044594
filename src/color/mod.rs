//! Color parsing and WCAG 2.1 luminance math.
//!
//! Provides the primitives the contrast calculator is built on:
//! - Hex normalization and parsing (`#RGB` / `#RRGGBB`)
//! - Relative luminance per the WCAG 2.1 gamma-correction formula
//! - Raw contrast ratio between two RGB triples

pub mod hex;
pub mod luminance;

pub use hex::{normalize_hex, parse_hex, InvalidColor, Rgb};
pub use luminance::{
    contrast_ratio_rgb, linearize, ratio_from_luminance, relative_luminance, MAX_CONTRAST_RATIO,
    MIN_CONTRAST_RATIO,
};
