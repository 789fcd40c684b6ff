//! # Parking Grid
//!
//! Allocation engine for a multi-floor parking lot laid out as a fixed
//! floor x row x column grid of spots.
//!
//! Each spot is inactive, a two-wheeler spot or a four-wheeler spot. Requests
//! ask for a spot of one type and name a strategy that decides which free spot
//! they get. The lot keeps four indices in step on every allocation and release:
//!
//! - **Grid model**: immutable spot kinds and per-floor capacities
//! - **Free-count tracker**: free spots per floor and type
//! - **Occupancy index**: spot -> occupant record
//! - **Vehicle index**: vehicle number or ticket -> spot
//!
//! so that for every floor and type, `free + occupied == capacity`.
//!
//! ## Strategies
//!
//! - `0` / [`core::AllocationStrategy::LowestIndex`]: first free spot in
//!   floor, row, column order.
//! - `1` / [`core::AllocationStrategy::MaxFreeFloor`]: the floor with the most
//!   free spots of the type (lowest floor on ties), then its first free spot.
//!
//! ## Usage
//!
//! ```rust
//! use parking_grid::core::{AllocationStrategy, ParkingLot, VehicleType};
//!
//! let mut lot = ParkingLot::new(&[vec![
//!     vec![4, 4, 2, 2],
//!     vec![2, 4, 2, 0],
//!     vec![0, 2, 2, 2],
//!     vec![4, 4, 4, 0],
//! ]])?;
//!
//! let spot = lot.allocate(
//!     VehicleType::TwoWheeler,
//!     "bh234",
//!     "tkt4534",
//!     AllocationStrategy::LowestIndex,
//! )?;
//! assert_eq!(spot, "0-0-2");
//! assert_eq!(lot.search("tkt4534").as_deref(), Some("0-0-2"));
//! assert_eq!(lot.free_count(0, 2)?, 6);
//!
//! assert!(lot.release(&spot));
//! assert_eq!(lot.free_count(0, 2)?, 7);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Lots can also be built from JSON configuration, see [`config::LotConfig`]
//! and [`builders::LotBuilder`].

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core allocation engine and capacity accounting.
pub mod core;
/// Configuration models for layout, strategy and diagnostics.
pub mod config;
/// Builders to construct lots from configuration.
pub mod builders;
/// Shared utilities.
pub mod util;
