//! Unit tests for contrast ratio computation.

use contrast_engine::color::MIN_CONTRAST_RATIO;
use contrast_engine::{ContrastCalculator, TextHierarchy, WcagLevel};

const SAMPLE_COLORS: [&str; 10] = [
    "#FFFFFF", "#000000", "#1B365D", "#F8FAFC", "#64748B", "#ff0000", "#00ff00", "#0000ff",
    "#767676", "#C9A96E",
];

#[test]
fn test_color_against_itself_is_one() {
    let calc = ContrastCalculator::new();
    for color in SAMPLE_COLORS {
        assert_eq!(calc.contrast_ratio(color, color), 1.0, "{color}");
    }
}

#[test]
fn test_symmetry() {
    let calc = ContrastCalculator::new();
    for a in SAMPLE_COLORS {
        for b in SAMPLE_COLORS {
            assert_eq!(calc.contrast_ratio(a, b), calc.contrast_ratio(b, a), "{a} vs {b}");
        }
    }
}

#[test]
fn test_ratio_bounds() {
    let calc = ContrastCalculator::new();
    for a in SAMPLE_COLORS {
        for b in SAMPLE_COLORS {
            let ratio = calc.contrast_ratio(a, b);
            assert!((1.0..=21.0 + 1e-9).contains(&ratio), "{a} vs {b}: {ratio}");
        }
    }
}

#[test]
fn test_black_white_maximum() {
    let calc = ContrastCalculator::new();
    assert!((calc.contrast_ratio("#FFFFFF", "#000000") - 21.0).abs() < 1e-9);
    assert_eq!(calc.contrast_ratio("#000000", "#000000"), 1.0);
}

#[test]
fn test_short_and_long_forms_agree() {
    let calc = ContrastCalculator::new();
    assert_eq!(calc.contrast_ratio("#fff", "#1B365D"), calc.contrast_ratio("#ffffff", "#1B365D"));
}

#[test]
fn test_medical_blue_on_white() {
    let calc = ContrastCalculator::new();
    let ratio = calc.contrast_ratio("#1B365D", "#FFFFFF");
    // Palette data quotes ~12.4:1; the exact WCAG 2.1 value is 12.12:1
    assert!((ratio - 12.4).abs() < 0.5, "got {ratio}");
    assert_eq!(WcagLevel::for_ratio(ratio), WcagLevel::Aaa);
}

#[test]
fn test_invalid_input_never_panics() {
    let calc = ContrastCalculator::new();
    assert_eq!(calc.contrast_ratio("notacolor", "#fff"), MIN_CONTRAST_RATIO);
    assert_eq!(calc.contrast_ratio("#fff", "rgb(0,0,0)"), MIN_CONTRAST_RATIO);
    assert_eq!(calc.contrast_ratio("", ""), MIN_CONTRAST_RATIO);
    assert!(calc.try_contrast_ratio("notacolor", "#fff").is_err());
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    let calc = ContrastCalculator::new();
    for a in SAMPLE_COLORS {
        let first = calc.contrast_ratio(a, "#C9A96E").to_bits();
        let second = calc.contrast_ratio(a, "#C9A96E").to_bits();
        assert_eq!(first, second);
    }
}

#[test]
fn test_min_never_exceeds_preferred() {
    for hierarchy in TextHierarchy::ALL {
        assert!(
            ContrastCalculator::min_contrast_for(hierarchy)
                <= ContrastCalculator::preferred_contrast_for(hierarchy)
        );
    }
    assert_eq!(ContrastCalculator::min_contrast_for(TextHierarchy::from("unknown")), 4.5);
    assert_eq!(ContrastCalculator::preferred_contrast_for(TextHierarchy::from("unknown")), 7.0);
}
