//! WCAG conformance levels and optimal-text search results.

use serde::{Deserialize, Serialize};

use super::hierarchy::TextHierarchy;

/// Ratio needed for WCAG AA (normal text).
pub const AA_RATIO: f64 = 4.5;

/// Ratio needed for WCAG AAA (normal text).
pub const AAA_RATIO: f64 = 7.0;

/// WCAG conformance tier for normal-size text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WcagLevel {
    Aaa,
    Aa,
    Fail,
}

impl WcagLevel {
    /// Level reached by a contrast ratio.
    pub fn for_ratio(ratio: f64) -> Self {
        if ratio >= AAA_RATIO {
            WcagLevel::Aaa
        } else if ratio >= AA_RATIO {
            WcagLevel::Aa
        } else {
            WcagLevel::Fail
        }
    }
}

impl std::fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WcagLevel::Aaa => write!(f, "AAA"),
            WcagLevel::Aa => write!(f, "AA"),
            WcagLevel::Fail => write!(f, "FAIL"),
        }
    }
}

/// Best text color for a background at a given hierarchy level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalTextColor {
    /// Chosen text color, uppercase `#RRGGBB`
    pub color: String,
    /// Candidate name (`white`, `gray-700`, ...)
    pub name: String,
    /// Contrast ratio against the background, rounded to 2 decimals
    pub ratio: f64,
    /// Whether the ratio meets the hierarchy's minimum
    #[serde(rename = "compliant")]
    pub is_compliant: bool,
    pub level: WcagLevel,
    pub hierarchy: TextHierarchy,
    /// Minimum ratio that applied
    pub required_ratio: f64,
    /// Set when no candidate met the minimum and the fallback was used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
