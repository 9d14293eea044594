//! Palette accessibility validation.
//!
//! This module provides:
//! - The role -> color palette input model
//! - A compliance report over every role and text hierarchy

pub mod palette;
pub mod report;

// Re-export primary types
pub use palette::{Palette, PaletteColor};
pub use report::{AccessibilityReport, Recommendation, RecommendationKind, Severity, Violation};
