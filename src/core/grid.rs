//! Immutable grid model: spot kinds per coordinate and derived capacities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{AllocationError, LayoutError};

/// Maximum number of floors a lot may declare.
pub const MAX_FLOORS: usize = 5;
/// Maximum rows times columns per floor.
pub const MAX_FLOOR_AREA: usize = 10_000;

/// Kind of a single grid cell, fixed for the lifetime of the lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpotKind {
    /// Not a parking spot. Never allocated.
    Inactive,
    /// Spot for two-wheelers.
    TwoWheeler,
    /// Spot for four-wheelers.
    FourWheeler,
}

impl SpotKind {
    /// Decode a layout code (0, 2 or 4).
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Inactive),
            2 => Some(Self::TwoWheeler),
            4 => Some(Self::FourWheeler),
            _ => None,
        }
    }

    /// Layout code of this kind.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Inactive => 0,
            Self::TwoWheeler => 2,
            Self::FourWheeler => 4,
        }
    }
}

/// Vehicle type a request asks a spot for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    /// Two-wheeler, code 2.
    TwoWheeler,
    /// Four-wheeler, code 4.
    FourWheeler,
}

impl VehicleType {
    /// Every vehicle type, in code order.
    pub const ALL: [Self; 2] = [Self::TwoWheeler, Self::FourWheeler];

    /// Wheel count used as the external type code.
    #[must_use]
    pub const fn wheels(self) -> u8 {
        match self {
            Self::TwoWheeler => 2,
            Self::FourWheeler => 4,
        }
    }

    /// Decode an external type code.
    #[must_use]
    pub const fn from_wheels(wheels: u8) -> Option<Self> {
        match wheels {
            2 => Some(Self::TwoWheeler),
            4 => Some(Self::FourWheeler),
            _ => None,
        }
    }

    /// Spot kind that accepts this vehicle type.
    #[must_use]
    pub const fn spot_kind(self) -> SpotKind {
        match self {
            Self::TwoWheeler => SpotKind::TwoWheeler,
            Self::FourWheeler => SpotKind::FourWheeler,
        }
    }

    pub(crate) const fn slot(self) -> usize {
        match self {
            Self::TwoWheeler => 0,
            Self::FourWheeler => 1,
        }
    }
}

impl TryFrom<u8> for VehicleType {
    type Error = AllocationError;

    fn try_from(wheels: u8) -> Result<Self, Self::Error> {
        Self::from_wheels(wheels).ok_or(AllocationError::InvalidVehicleType(wheels))
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-wheeler", self.wheels())
    }
}

/// Position of a spot. Ordering is (floor, row, col), which is the scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpotCoordinate {
    /// Floor index.
    pub floor: usize,
    /// Row index within the floor.
    pub row: usize,
    /// Column index within the row.
    pub col: usize,
}

impl SpotCoordinate {
    /// Build a coordinate.
    #[must_use]
    pub const fn new(floor: usize, row: usize, col: usize) -> Self {
        Self { floor, row, col }
    }

    /// Canonical spot id, `"{floor}-{row}-{col}"`.
    #[must_use]
    pub fn spot_id(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SpotCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.floor, self.row, self.col)
    }
}

impl FromStr for SpotCoordinate {
    type Err = AllocationError;

    /// Parses exactly three decimal, non-padded components separated by single hyphens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || AllocationError::UnknownSpot(s.to_string());
        let mut parts = s.split('-');
        let mut next = || -> Result<usize, AllocationError> {
            let part = parts.next().ok_or_else(unknown)?;
            let canonical = !part.is_empty()
                && part.bytes().all(|b| b.is_ascii_digit())
                && (part == "0" || !part.starts_with('0'));
            if !canonical {
                return Err(unknown());
            }
            part.parse().map_err(|_| unknown())
        };
        let coord = Self::new(next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(unknown());
        }
        Ok(coord)
    }
}

/// Immutable floor x row x column layout with per-floor capacities.
#[derive(Debug, Clone)]
pub struct GridModel {
    floors: usize,
    rows: usize,
    cols: usize,
    kinds: Vec<SpotKind>,
    capacity: Vec<[usize; 2]>,
}

impl GridModel {
    /// Build a grid from layout codes indexed `[floor][row][col]`.
    ///
    /// Every floor must share the shape of floor 0; jagged input is rejected
    /// rather than guessed at.
    pub fn new(layout: &[Vec<Vec<u8>>]) -> Result<Self, LayoutError> {
        let floors = layout.len();
        let rows = layout.first().map_or(0, Vec::len);
        let cols = layout
            .first()
            .and_then(|floor| floor.first())
            .map_or(0, Vec::len);
        if floors == 0 || rows == 0 || cols == 0 {
            return Err(LayoutError::Empty);
        }
        if floors > MAX_FLOORS {
            return Err(LayoutError::TooManyFloors(floors));
        }
        if rows * cols > MAX_FLOOR_AREA {
            return Err(LayoutError::FloorTooLarge(rows * cols));
        }

        let mut kinds = Vec::with_capacity(floors * rows * cols);
        let mut capacity = vec![[0usize; 2]; floors];
        for (floor, grid) in layout.iter().enumerate() {
            if grid.len() != rows || grid.iter().any(|row| row.len() != cols) {
                return Err(LayoutError::NonUniform { floor });
            }
            for (row, cells) in grid.iter().enumerate() {
                for (col, &code) in cells.iter().enumerate() {
                    let kind = SpotKind::from_code(code).ok_or(LayoutError::UnknownKind {
                        code,
                        floor,
                        row,
                        col,
                    })?;
                    match kind {
                        SpotKind::TwoWheeler => capacity[floor][VehicleType::TwoWheeler.slot()] += 1,
                        SpotKind::FourWheeler => capacity[floor][VehicleType::FourWheeler.slot()] += 1,
                        SpotKind::Inactive => {}
                    }
                    kinds.push(kind);
                }
            }
        }

        Ok(Self {
            floors,
            rows,
            cols,
            kinds,
            capacity,
        })
    }

    /// Number of floors.
    #[must_use]
    pub const fn floors(&self) -> usize {
        self.floors
    }

    /// Rows per floor.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Columns per row.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the coordinate lies inside the declared bounds.
    #[must_use]
    pub const fn contains(&self, coord: SpotCoordinate) -> bool {
        coord.floor < self.floors && coord.row < self.rows && coord.col < self.cols
    }

    /// Kind of the spot at `coord`.
    pub fn kind_at(&self, coord: SpotCoordinate) -> Result<SpotKind, AllocationError> {
        if !self.contains(coord) {
            return Err(AllocationError::OutOfRange(coord.to_string()));
        }
        Ok(self.kinds[self.offset(coord)])
    }

    /// Static number of spots of `vehicle` type on `floor`.
    pub fn capacity(&self, floor: usize, vehicle: VehicleType) -> Result<usize, AllocationError> {
        self.capacity
            .get(floor)
            .map(|slots| slots[vehicle.slot()])
            .ok_or_else(|| AllocationError::OutOfRange(format!("floor {floor}")))
    }

    /// Spots of one floor in row-major order. Empty for floors out of range.
    pub fn floor_spots(
        &self,
        floor: usize,
    ) -> impl Iterator<Item = (SpotCoordinate, SpotKind)> + '_ {
        let area = self.rows * self.cols;
        let start = floor.min(self.floors) * area;
        let end = floor.saturating_add(1).min(self.floors) * area;
        self.kinds[start..end]
            .iter()
            .enumerate()
            .map(move |(i, &kind)| {
                (
                    SpotCoordinate::new(floor, i / self.cols, i % self.cols),
                    kind,
                )
            })
    }

    /// Every spot in floor-major, row-major order.
    pub fn spots(&self) -> impl Iterator<Item = (SpotCoordinate, SpotKind)> + '_ {
        (0..self.floors).flat_map(move |floor| self.floor_spots(floor))
    }

    const fn offset(&self, coord: SpotCoordinate) -> usize {
        (coord.floor * self.rows + coord.row) * self.cols + coord.col
    }
}
