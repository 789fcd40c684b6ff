//! Error types for allocation and layout operations.

use thiserror::Error;

/// Errors produced by the allocation facade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// Vehicle number or ticket already has an active allocation.
    #[error("duplicate vehicle: {0}")]
    DuplicateVehicle(String),
    /// Strategy found no eligible free spot.
    #[error("no available spot for {0}-wheeler")]
    NoAvailableSpot(u8),
    /// Strategy id outside the known set.
    #[error("invalid strategy: {0}")]
    InvalidStrategy(u8),
    /// Vehicle type code outside {2, 4}.
    #[error("invalid vehicle type: {0}")]
    InvalidVehicleType(u8),
    /// Release on a spot id with no active occupant. Malformed, nonexistent and
    /// currently free spots are reported identically.
    #[error("unknown spot: {0}")]
    UnknownSpot(String),
    /// Free-count query with a floor out of range or a type outside {2, 4}.
    #[error("invalid floor or type: floor {floor}, type {vehicle_type}")]
    InvalidFloorOrType {
        /// Requested floor.
        floor: usize,
        /// Requested vehicle type code.
        vehicle_type: u8,
    },
    /// Coordinate outside the grid bounds. Internal callers never produce this.
    #[error("coordinate out of range: {0}")]
    OutOfRange(String),
}

/// Errors produced while building a grid from a layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Layout has no floors, rows or columns.
    #[error("layout is empty")]
    Empty,
    /// More floors than the lot supports.
    #[error("too many floors: {0}")]
    TooManyFloors(usize),
    /// Rows times columns exceeds the per-floor limit.
    #[error("floor area too large: {0} spots")]
    FloorTooLarge(usize),
    /// A floor or row disagrees with the shape of floor 0.
    #[error("non-uniform layout at floor {floor}")]
    NonUniform {
        /// First floor whose shape differs.
        floor: usize,
    },
    /// Spot code outside {0, 2, 4}.
    #[error("unknown spot kind {code} at {floor}-{row}-{col}")]
    UnknownKind {
        /// Offending code.
        code: u8,
        /// Floor index.
        floor: usize,
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
    },
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
