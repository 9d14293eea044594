//! Relative luminance and contrast ratio per WCAG 2.1.
//!
//! https://www.w3.org/TR/WCAG21/#dfn-relative-luminance

use super::hex::Rgb;

/// Lowest possible contrast ratio (a color against itself).
pub const MIN_CONTRAST_RATIO: f64 = 1.0;

/// Highest possible contrast ratio (black against white).
pub const MAX_CONTRAST_RATIO: f64 = 21.0;

/// Linearize a normalized sRGB channel value (0.0 - 1.0).
pub fn linearize(value: f64) -> f64 {
    if value <= 0.03928 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Calculate relative luminance of a color, in [0, 1].
pub fn relative_luminance(color: Rgb) -> f64 {
    let r = linearize(f64::from(color.r) / 255.0);
    let g = linearize(f64::from(color.g) / 255.0);
    let b = linearize(f64::from(color.b) / 255.0);

    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Contrast ratio between two luminance values, in [1, 21].
pub fn ratio_from_luminance(a: f64, b: f64) -> f64 {
    let (lighter, darker) = if a > b { (a, b) } else { (b, a) };

    (lighter + 0.05) / (darker + 0.05)
}

/// Calculate contrast ratio between two colors.
/// Returns a value between 1 and 21 (21 being black on white).
pub fn contrast_ratio_rgb(a: Rgb, b: Rgb) -> f64 {
    ratio_from_luminance(relative_luminance(a), relative_luminance(b))
}
