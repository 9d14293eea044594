//! Contrast Engine - WCAG 2.1 Accessibility Math
//!
//! Computes WCAG 2.1 relative luminance and contrast ratios for hex colors,
//! selects the best text color for a background from a fixed gray ramp, and
//! validates whole palettes against per-hierarchy contrast thresholds.
//! Results are memoized in a bounded cache owned by each calculator.

pub mod accessibility;
pub mod color;
pub mod contrast;
pub mod storage;

// Re-export commonly used types
pub use accessibility::{AccessibilityReport, Palette, PaletteColor};
pub use color::{InvalidColor, Rgb};
pub use contrast::{ContrastCalculator, OptimalTextColor, TextHierarchy, WcagLevel};
pub use storage::config::EngineConfig;
