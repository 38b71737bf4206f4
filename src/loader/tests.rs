//! Tests for config loader module

use super::*;
use crate::error::Error;
use crate::pagination::{Bias, CountConfig, DistanceMetric, GenerationConfig, RangeConfig};
use pretty_assertions::assert_eq;
use std::io::Write;

// ============================================================================
// Tagged Form
// ============================================================================

#[test]
fn test_load_tagged_range_config() {
    let yaml = r"
mode: range
window_size: 5
truncate: true
distance_from: center
";

    let config = load_config_from_str(yaml).unwrap();
    assert_eq!(
        config,
        GenerationConfig::Range(RangeConfig {
            window_size: 5,
            truncate: true,
            distance_from: DistanceMetric::Center,
        })
    );
}

#[test]
fn test_load_tagged_range_defaults() {
    let config = load_config_from_str("mode: range").unwrap();
    assert_eq!(config, GenerationConfig::Range(RangeConfig::default()));
}

#[test]
fn test_load_tagged_count_config() {
    let yaml = r"
mode: count
count: 7
bias: left
";

    let config = load_config_from_str(yaml).unwrap();
    assert_eq!(
        config,
        GenerationConfig::Count(CountConfig::new(7).with_bias(Bias::Left))
    );
}

#[test]
fn test_load_tagged_count_default_count() {
    let config = load_config_from_str("mode: count").unwrap();
    assert_eq!(config, GenerationConfig::Count(CountConfig::new(8)));
}

#[test]
fn test_load_json_config() {
    let json = r#"{"mode": "count", "count": 9}"#;
    let config = load_config_from_str(json).unwrap();
    assert_eq!(config, GenerationConfig::Count(CountConfig::new(9)));
}

#[test]
fn test_load_unknown_mode_fails() {
    let result = load_config_from_str("mode: spiral");
    assert!(matches!(result, Err(Error::Config { .. })));
}

#[test]
fn test_load_tagged_range_rejects_count_fields() {
    let err = load_config_from_str("mode: range\ncount: 3\nbias: left").unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().contains("'count'"));
}

#[test]
fn test_load_tagged_count_rejects_range_fields() {
    let yaml = r"
mode: count
count: 7
window_size: 4
truncate: true
";
    let err = load_config_from_str(yaml).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().contains("for mode 'count'"));
}

#[test]
fn test_load_tagged_rejects_misspelled_field() {
    let err = load_config_from_str("mode: range\nwindwo_size: 5").unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().contains("'windwo_size'"));
}

#[test]
fn test_load_tagged_accepts_aliases() {
    let config = load_config_from_str("mode: range\nrange: 5\ndistanceFrom: center").unwrap();
    assert_eq!(
        config,
        GenerationConfig::Range(RangeConfig::new(5).with_distance(DistanceMetric::Center))
    );
}

// ============================================================================
// Flat Form
// ============================================================================

#[test]
fn test_load_flat_range_options() {
    let yaml = r"
range: 7
distanceFrom: center
";

    let config = load_config_from_str(yaml).unwrap();
    assert_eq!(
        config,
        GenerationConfig::Range(RangeConfig::new(7).with_distance(DistanceMetric::Center))
    );
}

#[test]
fn test_load_flat_count_options() {
    let config = load_config_from_str("count: 6").unwrap();
    assert_eq!(config, GenerationConfig::Count(CountConfig::new(6)));
}

#[test]
fn test_load_flat_rejects_unknown_field() {
    let result = load_config_from_str("window: 5");
    assert!(result.is_err());
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_load_even_window_fails() {
    let err = load_config_from_str("mode: range\nwindow_size: 4").unwrap_err();
    assert!(err.to_string().contains("window size must be odd"));
}

#[test]
fn test_load_small_count_fails() {
    let err = load_config_from_str("count: 4").unwrap_err();
    assert!(err.to_string().contains("count must be at least 5"));
}

#[test]
fn test_load_malformed_yaml_fails() {
    let result = load_config_from_str("mode: [range");
    assert!(matches!(result, Err(Error::YamlParse(_))));
}

// ============================================================================
// Options Resolution
// ============================================================================

#[test]
fn test_options_default_is_range_mode() {
    let config = GenerationOptions::default().into_config().unwrap();
    assert_eq!(config, GenerationConfig::Range(RangeConfig::default()));
}

#[test]
fn test_options_count_selects_count_mode() {
    let options = GenerationOptions {
        count: Some(7),
        bias: Some(Bias::Left),
        ..Default::default()
    };
    assert_eq!(
        options.into_config().unwrap(),
        GenerationConfig::Count(CountConfig::new(7).with_bias(Bias::Left))
    );
}

#[test]
fn test_options_zero_count_still_selects_count_mode() {
    let options = GenerationOptions {
        count: Some(0),
        ..Default::default()
    };
    let config = options.into_config().unwrap();
    assert_eq!(config.mode(), "count");
    assert!(config.validate().is_err());
}

#[test]
fn test_options_mixed_modes_rejected() {
    let options = GenerationOptions {
        count: Some(7),
        truncate: Some(true),
        ..Default::default()
    };
    assert!(matches!(options.into_config(), Err(Error::Config { .. })));

    let options = GenerationOptions {
        bias: Some(Bias::Right),
        ..Default::default()
    };
    assert!(matches!(options.into_config(), Err(Error::Config { .. })));
}

#[test]
fn test_options_from_config() {
    let config = GenerationConfig::Range(RangeConfig::new(5).truncated());
    let options = GenerationOptions::from(config);
    assert_eq!(options.range, Some(5));
    assert_eq!(options.truncate, Some(true));
    assert_eq!(options.count, None);
    assert_eq!(options.into_config().unwrap(), config);
}

// ============================================================================
// File Loading
// ============================================================================

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mode: count\ncount: 11\nbias: right").unwrap();

    let config = load_config(file.path()).unwrap();
    assert_eq!(config, GenerationConfig::Count(CountConfig::new(11)));
}

#[test]
fn test_load_config_missing_file() {
    let result = load_config("/nonexistent/pagemark.yaml");
    assert!(matches!(result, Err(Error::FileNotFound { .. })));
}
