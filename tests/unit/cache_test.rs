//! Unit tests for the contrast cache bound and statistics.

use contrast_engine::contrast::ContrastCache;
use contrast_engine::{ContrastCalculator, EngineConfig};

#[test]
fn test_default_bound() {
    let calc = ContrastCalculator::new();
    let stats = calc.cache_stats();
    assert_eq!(stats.size, 0);
    assert_eq!(stats.max_size, 1000);
    assert_eq!(stats.utilization_pct, 0.0);
}

#[test]
fn test_size_stays_within_bound_under_load() {
    let calc = ContrastCalculator::new();
    for i in 0..600u32 {
        let color = format!("#{:06X}", i * 27_961);
        calc.contrast_ratio(&color, "#FFFFFF");
        assert!(calc.cache_stats().size <= 1000);
    }
    assert!(calc.cache_stats().size > 900);
}

#[test]
fn test_configured_bound() {
    let mut config = EngineConfig::default();
    config.cache.max_entries = 20;
    config.cache.eviction_batch = 5;

    let calc = ContrastCalculator::with_config(&config);
    for i in 0..200u32 {
        calc.contrast_ratio(&format!("#{:06X}", i), "#000");
    }

    let stats = calc.cache_stats();
    assert_eq!(stats.max_size, 20);
    assert!(stats.size <= 20);
    assert!(stats.utilization_pct <= 100.0);
}

#[test]
fn test_results_unchanged_by_eviction() {
    let tiny = ContrastCalculator::with_cache(ContrastCache::new(4, 2));
    let reference = ContrastCalculator::new();

    for i in 0..50u32 {
        let color = format!("#{:06X}", i * 333_331 % 0xFFFFFF);
        assert_eq!(
            tiny.contrast_ratio(&color, "#1B365D"),
            reference.contrast_ratio(&color, "#1B365D")
        );
    }
}

#[test]
fn test_clear_cache_resets_size() {
    let calc = ContrastCalculator::new();
    calc.contrast_ratio("#111111", "#ffffff");
    calc.contrast_ratio("#111111", "#ffffff");
    assert!(calc.cache_stats().hits >= 1);

    calc.clear_cache();
    let stats = calc.cache_stats();
    assert_eq!(stats.size, 0);
    assert_eq!(stats.hits, 0);
}
