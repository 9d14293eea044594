//! Palette-wide accessibility validation.
//!
//! Runs the optimal-text search for every color role at every text hierarchy
//! and tabulates compliance. No new math lives here.

use serde::{Deserialize, Serialize};

use crate::contrast::{ContrastCalculator, TextHierarchy, WcagLevel};

use super::palette::Palette;

/// Below this ratio a violation is critical.
pub const CRITICAL_RATIO: f64 = 3.0;

/// Below this ratio a violation is high severity.
pub const HIGH_RATIO: f64 = 4.5;

/// AAA share (percent) below which an enhancement is suggested.
pub const AAA_TARGET_PCT: f64 = 50.0;

/// How bad a contrast violation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
}

impl Severity {
    pub fn for_ratio(ratio: f64) -> Self {
        if ratio < CRITICAL_RATIO {
            Severity::Critical
        } else if ratio < HIGH_RATIO {
            Severity::High
        } else {
            Severity::Medium
        }
    }
}

/// A role/hierarchy pair whose best text color misses the minimum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub role: String,
    /// Background color as given in the palette
    pub color: String,
    pub hierarchy: TextHierarchy,
    /// Text color the search settled on
    pub text_color: String,
    pub ratio: f64,
    pub required_ratio: f64,
    pub severity: Severity,
}

/// Category of advisory recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    /// At least one combination is below 3:1
    Critical,
    /// Not every combination is compliant
    Compliance,
    /// Less than half of combinations reach AAA
    Enhancement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub message: String,
}

/// Compliance summary for a whole palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityReport {
    pub total_combinations: usize,
    pub compliant_count: usize,
    /// Combinations at exactly AA (not AAA)
    pub aa_count: usize,
    pub aaa_count: usize,
    /// Percent of combinations meeting their minimum
    pub compliance_rate: f64,
    /// Percent of combinations reaching AAA
    pub aaa_rate: f64,
    pub is_compliant: bool,
    pub violations: Vec<Violation>,
    pub recommendations: Vec<Recommendation>,
}

impl AccessibilityReport {
    pub fn critical_violations(&self) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(|v| v.severity == Severity::Critical)
    }
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        100.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

fn recommendations_for(
    compliance_rate: f64,
    aaa_rate: f64,
    violations: &[Violation],
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    let critical = violations
        .iter()
        .filter(|v| v.severity == Severity::Critical)
        .count();
    if critical > 0 {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Critical,
            message: format!(
                "{} combination(s) fall below 3:1 and are unreadable for many users; replace those palette colors",
                critical
            ),
        });
    }

    if compliance_rate < 100.0 {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Compliance,
            message: format!(
                "Only {:.1}% of combinations meet their minimum contrast; adjust the colors listed in violations",
                compliance_rate
            ),
        });
    }

    if aaa_rate < AAA_TARGET_PCT {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Enhancement,
            message: format!(
                "{:.1}% of combinations reach AAA; darken or lighten backgrounds for stronger contrast",
                aaa_rate
            ),
        });
    }

    recommendations
}

impl ContrastCalculator {
    /// Validate every role of a palette against every text hierarchy.
    pub fn validate_accessibility(&self, palette: &Palette) -> AccessibilityReport {
        let mut total = 0;
        let mut compliant = 0;
        let mut aa = 0;
        let mut aaa = 0;
        let mut violations = Vec::new();

        for (role, color) in palette.iter() {
            for hierarchy in TextHierarchy::ALL {
                let result = self.optimal_text_color(&color.hex, hierarchy);
                total += 1;

                match result.level {
                    WcagLevel::Aaa => aaa += 1,
                    WcagLevel::Aa => aa += 1,
                    WcagLevel::Fail => {}
                }

                if result.is_compliant {
                    compliant += 1;
                } else {
                    violations.push(Violation {
                        role: role.to_string(),
                        color: color.hex.clone(),
                        hierarchy,
                        text_color: result.color,
                        ratio: result.ratio,
                        required_ratio: result.required_ratio,
                        severity: Severity::for_ratio(result.ratio),
                    });
                }
            }
        }

        let compliance_rate = percent(compliant, total);
        let aaa_rate = percent(aaa, total);
        let recommendations = recommendations_for(compliance_rate, aaa_rate, &violations);

        tracing::info!(
            "Validated {} combinations: {} compliant, {} violations",
            total,
            compliant,
            violations.len()
        );

        AccessibilityReport {
            total_combinations: total,
            compliant_count: compliant,
            aa_count: aa,
            aaa_count: aaa,
            compliance_rate,
            aaa_rate,
            is_compliant: compliant == total,
            violations,
            recommendations,
        }
    }
}
