//! WCAG contrast engine.
//!
//! This module provides:
//! - Text hierarchy thresholds (minimum and preferred ratios)
//! - The fixed white-to-black text color ramp
//! - Optimal text color selection for a background
//! - A bounded FIFO-batch memoization cache

pub mod cache;
pub mod calculator;
pub mod candidates;
pub mod hierarchy;
pub mod result;

// Re-export primary types
pub use cache::{CacheKey, CacheStats, CacheValue, ContrastCache};
pub use calculator::ContrastCalculator;
pub use candidates::{TextColorCandidate, TEXT_COLOR_CANDIDATES};
pub use hierarchy::TextHierarchy;
pub use result::{OptimalTextColor, WcagLevel, AAA_RATIO, AA_RATIO};
