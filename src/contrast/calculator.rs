//! Cached WCAG contrast calculator.
//!
//! Every operation is a pure function of its inputs; the calculator only owns
//! a bounded memoization cache. Malformed colors never cause a panic or an
//! error on the soft entry points: contrast falls back to
//! [`MIN_CONTRAST_RATIO`] and text-color selection falls back to the last
//! ramp candidate with a warning.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::color::{self, InvalidColor, Rgb, MIN_CONTRAST_RATIO};
use crate::storage::config::EngineConfig;

use super::cache::{CacheKey, CacheStats, CacheValue, ContrastCache};
use super::candidates::{candidate_score, fallback_candidate, TextColorCandidate, TEXT_COLOR_CANDIDATES};
use super::hierarchy::TextHierarchy;
use super::result::{round2, OptimalTextColor, WcagLevel, AAA_RATIO, AA_RATIO};

/// WCAG contrast calculator with a shared, bounded cache.
///
/// The cache sits behind a mutex so a calculator can be shared between
/// threads. A racing miss only causes a redundant recomputation.
#[derive(Debug, Default)]
pub struct ContrastCalculator {
    cache: Mutex<ContrastCache>,
}

impl ContrastCalculator {
    /// Create a calculator with the default cache bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator sized from configuration.
    pub fn with_config(config: &EngineConfig) -> Self {
        Self::with_cache(ContrastCache::new(
            config.cache.max_entries,
            config.cache.eviction_batch,
        ))
    }

    /// Create a calculator around an existing cache.
    pub fn with_cache(cache: ContrastCache) -> Self {
        Self {
            cache: Mutex::new(cache),
        }
    }

    fn cache(&self) -> MutexGuard<'_, ContrastCache> {
        // The cache only holds pure outputs, so a poisoned lock is still consistent.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lookup(&self, key: &CacheKey) -> Option<CacheValue> {
        self.cache().get(key)
    }

    fn store(&self, key: CacheKey, value: CacheValue) {
        self.cache().insert(key, value);
    }

    /// Parse a `#RGB` / `#RRGGBB` color, caching by the literal input.
    pub fn parse(&self, hex: &str) -> Result<Rgb, InvalidColor> {
        let key = CacheKey::Parse(hex.to_string());
        if let Some(CacheValue::Parse(parsed)) = self.lookup(&key) {
            return parsed.ok_or_else(|| InvalidColor::new(hex));
        }

        let parsed = color::parse_hex(hex);
        self.store(key, CacheValue::Parse(parsed.as_ref().ok().copied()));
        parsed
    }

    /// Relative luminance of an RGB triple.
    pub fn luminance(&self, rgb: Rgb) -> f64 {
        let key = CacheKey::Luminance(rgb);
        if let Some(CacheValue::Luminance(value)) = self.lookup(&key) {
            return value;
        }

        let value = color::relative_luminance(rgb);
        self.store(key, CacheValue::Luminance(value));
        value
    }

    /// Relative luminance of a hex color, or `None` if it is malformed.
    pub fn relative_luminance_of(&self, hex: &str) -> Option<f64> {
        self.parse(hex).ok().map(|rgb| self.luminance(rgb))
    }

    /// Contrast ratio between two hex colors, in [1, 21].
    ///
    /// Returns [`MIN_CONTRAST_RATIO`] when either color is malformed.
    pub fn contrast_ratio(&self, a: &str, b: &str) -> f64 {
        let key = CacheKey::Contrast(a.to_string(), b.to_string());
        if let Some(CacheValue::Contrast(ratio)) = self.lookup(&key) {
            return ratio;
        }

        let ratio = match (self.parse(a), self.parse(b)) {
            (Ok(rgb_a), Ok(rgb_b)) => {
                color::ratio_from_luminance(self.luminance(rgb_a), self.luminance(rgb_b))
            }
            (Err(err), _) | (_, Err(err)) => {
                tracing::warn!("{}; falling back to minimum contrast", err);
                MIN_CONTRAST_RATIO
            }
        };

        self.store(key, CacheValue::Contrast(ratio));
        ratio
    }

    /// Contrast ratio that reports malformed input instead of falling back.
    pub fn try_contrast_ratio(&self, a: &str, b: &str) -> Result<f64, InvalidColor> {
        self.parse(a)?;
        self.parse(b)?;
        Ok(self.contrast_ratio(a, b))
    }

    /// Check if a color pair meets WCAG AA (4.5:1 for normal text).
    pub fn meets_aa(&self, a: &str, b: &str) -> bool {
        self.contrast_ratio(a, b) >= AA_RATIO
    }

    /// Check if a color pair meets WCAG AAA (7:1 for normal text).
    pub fn meets_aaa(&self, a: &str, b: &str) -> bool {
        self.contrast_ratio(a, b) >= AAA_RATIO
    }

    pub fn min_contrast_for(hierarchy: TextHierarchy) -> f64 {
        hierarchy.min_contrast()
    }

    pub fn preferred_contrast_for(hierarchy: TextHierarchy) -> f64 {
        hierarchy.preferred_contrast()
    }

    /// Pick the best text color from the candidate ramp for a background.
    ///
    /// Among candidates meeting the hierarchy's minimum ratio, the one scoring
    /// highest on closeness to the preferred ratio and ramp priority wins;
    /// ties go to the earlier candidate. If none qualifies, black is returned
    /// as non-compliant with a warning.
    pub fn optimal_text_color(&self, background: &str, hierarchy: TextHierarchy) -> OptimalTextColor {
        let key = CacheKey::OptimalText(background.to_string(), hierarchy);
        if let Some(CacheValue::OptimalText(result)) = self.lookup(&key) {
            return result;
        }

        let result = self.search_text_color(background, hierarchy);
        self.store(key, CacheValue::OptimalText(result.clone()));
        result
    }

    fn search_text_color(&self, background: &str, hierarchy: TextHierarchy) -> OptimalTextColor {
        let min_ratio = hierarchy.min_contrast();
        let preferred = hierarchy.preferred_contrast();

        let mut best: Option<(&TextColorCandidate, f64, f64)> = None;
        for candidate in TEXT_COLOR_CANDIDATES.iter() {
            let ratio = self.contrast_ratio(candidate.hex, background);
            if ratio < min_ratio {
                continue;
            }

            let score = candidate_score(ratio, preferred, candidate.priority);
            if best.map_or(true, |(_, _, best_score)| score > best_score) {
                best = Some((candidate, ratio, score));
            }
        }

        let (candidate, ratio, warning) = match best {
            Some((candidate, ratio, _)) => (candidate, ratio, None),
            None => {
                let fallback = fallback_candidate();
                let ratio = self.contrast_ratio(fallback.hex, background);
                let warning = if self.parse(background).is_err() {
                    format!(
                        "Invalid background color {:?}; using {} as fallback text color",
                        background, fallback.name
                    )
                } else {
                    format!(
                        "No text color reaches {:.1}:1 for {} text on {}; using {} at {:.2}:1",
                        min_ratio, hierarchy, background, fallback.name, ratio
                    )
                };
                tracing::warn!("{}", warning);
                (fallback, ratio, Some(warning))
            }
        };

        OptimalTextColor {
            color: candidate.hex.to_string(),
            name: candidate.name.to_string(),
            ratio: round2(ratio),
            is_compliant: ratio >= min_ratio,
            level: WcagLevel::for_ratio(ratio),
            hierarchy,
            required_ratio: min_ratio,
            warning,
        }
    }

    /// Drop all cached results.
    pub fn clear_cache(&self) {
        self.cache().clear();
        tracing::debug!("Contrast cache cleared");
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache().stats()
    }
}
