//! Tests for error types

use parking_grid::core::{AllocationError, LayoutError};

#[test]
fn test_duplicate_vehicle_error() {
    let err = AllocationError::DuplicateVehicle("bh234".to_string());
    assert_eq!(format!("{}", err), "duplicate vehicle: bh234");
}

#[test]
fn test_no_available_spot_error() {
    let err = AllocationError::NoAvailableSpot(4);
    assert_eq!(format!("{}", err), "no available spot for 4-wheeler");
}

#[test]
fn test_invalid_strategy_error() {
    let err = AllocationError::InvalidStrategy(7);
    assert_eq!(format!("{}", err), "invalid strategy: 7");
}

#[test]
fn test_unknown_spot_error() {
    let err = AllocationError::UnknownSpot("9-9-9".to_string());
    assert_eq!(format!("{}", err), "unknown spot: 9-9-9");
}

#[test]
fn test_invalid_floor_or_type_error() {
    let err = AllocationError::InvalidFloorOrType {
        floor: 6,
        vehicle_type: 3,
    };
    assert_eq!(format!("{}", err), "invalid floor or type: floor 6, type 3");
}

#[test]
fn test_layout_errors() {
    assert_eq!(format!("{}", LayoutError::Empty), "layout is empty");
    assert_eq!(
        format!("{}", LayoutError::NonUniform { floor: 2 }),
        "non-uniform layout at floor 2"
    );
    let err = LayoutError::UnknownKind {
        code: 3,
        floor: 0,
        row: 1,
        col: 2,
    };
    assert_eq!(format!("{}", err), "unknown spot kind 3 at 0-1-2");
}
