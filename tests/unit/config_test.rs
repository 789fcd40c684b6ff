//! Tests for configuration validation

use parking_grid::config::{DiagnosticsConfig, LotConfig, CONFIG_PATH_ENV};

fn layout() -> Vec<Vec<Vec<u8>>> {
    vec![vec![vec![4, 4, 2, 2], vec![2, 4, 2, 0]]]
}

#[test]
fn test_lot_config_validation() {
    let valid = LotConfig::new(layout());
    assert!(valid.validate().is_ok());
    assert_eq!(valid.diagnostics, DiagnosticsConfig::Tracing);
}

#[test]
fn test_lot_config_invalid_strategy() {
    let mut invalid = LotConfig::new(layout());
    invalid.default_strategy = 2;
    let err = invalid.validate().unwrap_err();
    assert!(err.contains("default_strategy"), "{err}");
}

#[test]
fn test_lot_config_invalid_layout() {
    let jagged = LotConfig::new(vec![vec![vec![2, 2], vec![2]]]);
    assert!(jagged.validate().is_err());

    let bad_code = LotConfig::new(vec![vec![vec![2, 5]]]);
    assert!(bad_code.validate().unwrap_err().contains("unknown spot kind 5"));

    let empty = LotConfig::new(Vec::new());
    assert!(empty.validate().is_err());
}

#[test]
fn test_lot_config_from_json() {
    let json = r#"{
        "layout": [[[4, 4, 2, 2], [2, 4, 2, 0]], [[2, 2, 2, 2], [0, 0, 4, 4]]],
        "default_strategy": 1,
        "diagnostics": "null"
    }"#;

    let config = LotConfig::from_json_str(json).unwrap();
    assert_eq!(config.layout.len(), 2);
    assert_eq!(config.default_strategy, 1);
    assert_eq!(config.diagnostics, DiagnosticsConfig::Null);
}

#[test]
fn test_lot_config_from_json_defaults() {
    let config = LotConfig::from_json_str(r#"{ "layout": [[[2]]] }"#).unwrap();
    assert_eq!(config.default_strategy, 0);
    assert_eq!(config.diagnostics, DiagnosticsConfig::Tracing);

    assert!(LotConfig::from_json_str("{ \"layout\": 3 }").unwrap_err().starts_with("parse error"));
    assert!(LotConfig::from_json_str(r#"{ "layout": [[[2]]], "default_strategy": 5 }"#).is_err());
}

#[test]
fn test_lot_config_from_file_and_env() {
    let path = std::env::temp_dir().join(format!("parking_grid_config_{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "layout": [[[2, 4]]], "default_strategy": 1 }"#).unwrap();

    let from_file = LotConfig::from_json_file(&path).unwrap();
    assert_eq!(from_file.layout, vec![vec![vec![2, 4]]]);

    std::env::set_var(CONFIG_PATH_ENV, &path);
    let from_env = LotConfig::from_env().unwrap();
    assert_eq!(from_env.default_strategy, 1);
    std::env::remove_var(CONFIG_PATH_ENV);

    std::fs::remove_file(&path).unwrap();
    assert!(LotConfig::from_json_file(&path).is_err());
}
