//! Tests for builder modules

use std::cell::RefCell;
use std::rc::Rc;

use parking_grid::builders::{build_lot, LotBuilder};
use parking_grid::config::{DiagnosticsConfig, LotConfig};
use parking_grid::core::{AllocationStrategy, InMemorySink, VehicleType};

#[test]
fn test_lot_builder_defaults() {
    let config = LotConfig::new(vec![vec![vec![4, 2]], vec![vec![2, 2]]]);
    let builder = LotBuilder::new(config);
    assert_eq!(builder.config().default_strategy, 0);

    let lot = builder.build().unwrap();
    assert_eq!(lot.grid().floors(), 2);
    assert_eq!(lot.default_strategy(), AllocationStrategy::LowestIndex);
    assert_eq!(lot.free_count(1, 2).unwrap(), 2);
}

#[test]
fn test_lot_builder_applies_default_strategy() {
    let mut config = LotConfig::new(vec![vec![vec![4, 2]], vec![vec![2, 2]]]);
    config.default_strategy = 1;
    config.diagnostics = DiagnosticsConfig::Null;

    let mut lot = build_lot(&config).unwrap();
    assert_eq!(lot.default_strategy(), AllocationStrategy::MaxFreeFloor);
    assert_eq!(lot.park_default(VehicleType::TwoWheeler, "a", "ta").unwrap(), "1-0-0");
}

#[test]
fn test_lot_builder_custom_sink() {
    let sink = Rc::new(RefCell::new(InMemorySink::new(4)));
    let mut lot = LotBuilder::new(LotConfig::new(vec![vec![vec![2]]]))
        .with_sink(Box::new(Rc::clone(&sink)))
        .build()
        .unwrap();
    assert!(!lot.release("0-0-0"));
    assert_eq!(sink.borrow().lines().len(), 1);
}

#[test]
fn test_lot_builder_rejects_invalid_config() {
    let mut config = LotConfig::new(vec![vec![vec![2]]]);
    config.default_strategy = 3;
    let err = LotBuilder::new(config).build().err().unwrap();
    assert!(err.to_string().contains("invalid strategy: 3"));

    let err = build_lot(&LotConfig::new(vec![vec![vec![1]]])).err().unwrap();
    assert!(err.to_string().starts_with("config invalid"));
}
