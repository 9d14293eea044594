//! Integration tests for palette-wide accessibility validation.

use contrast_engine::accessibility::{RecommendationKind, Severity};
use contrast_engine::{ContrastCalculator, Palette, PaletteColor, TextHierarchy};

/// A medical spa palette as the theme customizer ships it.
fn spa_palette() -> Palette {
    let json = r##"{
        "primary":    { "hex": "#1B365D", "name": "Medical Blue" },
        "secondary":  { "hex": "#2D5F3F", "name": "Sage" },
        "accent":     { "hex": "#C9A96E", "name": "Champagne" },
        "background": { "hex": "#FFFFFF" },
        "surface":    { "hex": "#F8FAFC" }
    }"##;
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_counts_every_role_and_hierarchy() {
    let calc = ContrastCalculator::new();
    let report = calc.validate_accessibility(&spa_palette());

    assert_eq!(report.total_combinations, 5 * TextHierarchy::ALL.len());
    assert_eq!(
        report.compliant_count + report.violations.len(),
        report.total_combinations
    );
    assert!(report.aa_count + report.aaa_count <= report.total_combinations);
}

#[test]
fn test_violations_match_recomputed_results() {
    let calc = ContrastCalculator::new();
    let palette = spa_palette();
    let report = calc.validate_accessibility(&palette);

    for violation in &report.violations {
        let color = palette.get(&violation.role).unwrap();
        let result = calc.optimal_text_color(&color.hex, violation.hierarchy);
        assert!(!result.is_compliant);
        assert_eq!(result.ratio, violation.ratio);
        assert_eq!(violation.severity, Severity::for_ratio(violation.ratio));
    }
}

#[test]
fn test_all_unreadable_palette_is_critical() {
    let calc = ContrastCalculator::new();
    let mut palette = Palette::new();
    palette.insert("primary", PaletteColor::new("#zzzzzz"));
    palette.insert("background", PaletteColor::new("white"));

    let report = calc.validate_accessibility(&palette);
    assert!(!report.is_compliant);
    assert_eq!(report.compliance_rate, 0.0);
    assert!(report
        .violations
        .iter()
        .any(|v| v.severity == Severity::Critical));
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.kind == RecommendationKind::Critical));
}

#[test]
fn test_mixed_palette_recommendations() {
    let calc = ContrastCalculator::new();
    let palette = Palette::new()
        .with_color("background", "#FFFFFF")
        .with_color("surface", "#777777");

    let report = calc.validate_accessibility(&palette);
    assert!(!report.is_compliant);
    assert!(report.critical_violations().next().is_none());

    let kinds: Vec<RecommendationKind> = report.recommendations.iter().map(|r| r.kind).collect();
    assert!(kinds.contains(&RecommendationKind::Compliance));
    assert!(!kinds.contains(&RecommendationKind::Critical));
}

#[test]
fn test_report_json_round_trip() {
    let calc = ContrastCalculator::new();
    let report = calc.validate_accessibility(&spa_palette());

    let json = serde_json::to_string(&report).unwrap();
    let parsed: contrast_engine::AccessibilityReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);
}
