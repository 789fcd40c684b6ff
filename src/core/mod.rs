//! Core allocation engine: grid model, counters, indices, strategies and facade.

pub mod diagnostics;
pub mod error;
pub mod free_count;
pub mod grid;
pub mod index;
pub mod lot;
pub mod snapshot;
pub mod strategy;

pub use diagnostics::{DiagnosticSink, InMemorySink, NullSink, TracingSink};
pub use error::{AllocationError, AppResult, LayoutError};
pub use free_count::FreeCountTracker;
pub use grid::{GridModel, SpotCoordinate, SpotKind, VehicleType, MAX_FLOORS, MAX_FLOOR_AREA};
pub use index::{OccupancyIndex, OccupantRecord, VehicleIndex};
pub use lot::ParkingLot;
pub use snapshot::{FloorSnapshot, LotSnapshot, TypeCount};
pub use strategy::{AllocationStrategy, SelectFn};
