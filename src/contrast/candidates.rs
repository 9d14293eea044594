//! Fixed ramp of text colors the optimal-text search chooses from.

use crate::color::Rgb;

/// A text color the optimal-text search may pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextColorCandidate {
    /// Short name (`white`, `gray-500`, ...)
    pub name: &'static str,
    /// Uppercase `#RRGGBB`
    pub hex: &'static str,
    pub rgb: Rgb,
    /// 1 (most preferred) to 12 (least preferred)
    pub priority: u8,
}

impl TextColorCandidate {
    const fn new(name: &'static str, hex: &'static str, rgb: Rgb, priority: u8) -> Self {
        Self {
            name,
            hex,
            rgb,
            priority,
        }
    }
}

/// White to black, ordered by priority.
pub const TEXT_COLOR_CANDIDATES: [TextColorCandidate; 12] = [
    TextColorCandidate::new("white", "#FFFFFF", Rgb::new(0xFF, 0xFF, 0xFF), 1),
    TextColorCandidate::new("gray-50", "#F8FAFC", Rgb::new(0xF8, 0xFA, 0xFC), 2),
    TextColorCandidate::new("gray-100", "#F1F5F9", Rgb::new(0xF1, 0xF5, 0xF9), 3),
    TextColorCandidate::new("gray-200", "#E2E8F0", Rgb::new(0xE2, 0xE8, 0xF0), 4),
    TextColorCandidate::new("gray-300", "#CBD5E1", Rgb::new(0xCB, 0xD5, 0xE1), 5),
    TextColorCandidate::new("gray-400", "#94A3B8", Rgb::new(0x94, 0xA3, 0xB8), 6),
    TextColorCandidate::new("gray-500", "#64748B", Rgb::new(0x64, 0x74, 0x8B), 7),
    TextColorCandidate::new("gray-600", "#475569", Rgb::new(0x47, 0x55, 0x69), 8),
    TextColorCandidate::new("gray-700", "#334155", Rgb::new(0x33, 0x41, 0x55), 9),
    TextColorCandidate::new("gray-800", "#1E293B", Rgb::new(0x1E, 0x29, 0x3B), 10),
    TextColorCandidate::new("gray-900", "#0F172A", Rgb::new(0x0F, 0x17, 0x2A), 11),
    TextColorCandidate::new("black", "#000000", Rgb::new(0x00, 0x00, 0x00), 12),
];

/// Candidate used when nothing on the ramp meets the required ratio.
pub fn fallback_candidate() -> &'static TextColorCandidate {
    &TEXT_COLOR_CANDIDATES[TEXT_COLOR_CANDIDATES.len() - 1]
}

/// Score of a candidate that already meets the minimum ratio.
///
/// 70% closeness to the preferred ratio, 30% ramp priority.
pub fn candidate_score(ratio: f64, preferred: f64, priority: u8) -> f64 {
    let closeness = 1.0 - (ratio - preferred).abs() / preferred;
    let rank = f64::from(13 - priority) / 12.0;

    0.7 * closeness + 0.3 * rank
}
