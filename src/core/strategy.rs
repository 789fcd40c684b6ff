//! Spot selection strategies.
//!
//! Each strategy is a plain function over read-only views of the lot. Picking
//! one is a table lookup by id; nothing here mutates state.

use serde::{Deserialize, Serialize};

use crate::core::{
    AllocationError, FreeCountTracker, GridModel, OccupancyIndex, SpotCoordinate, VehicleType,
};

/// Signature shared by every strategy.
pub type SelectFn =
    fn(&GridModel, &OccupancyIndex, &FreeCountTracker, VehicleType) -> Option<SpotCoordinate>;

/// Available allocation strategies, keyed by their external id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationStrategy {
    /// Id 0: first free spot in floor, row, column order.
    LowestIndex,
    /// Id 1: lowest free spot on the floor with the most free spots.
    MaxFreeFloor,
}

const STRATEGIES: [SelectFn; 2] = [lowest_index, max_free_floor];

impl AllocationStrategy {
    /// External id of the strategy.
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::LowestIndex => 0,
            Self::MaxFreeFloor => 1,
        }
    }

    /// Pick a spot for `vehicle`, or `None` when nothing fits.
    #[must_use]
    pub fn select(
        self,
        grid: &GridModel,
        occupancy: &OccupancyIndex,
        free: &FreeCountTracker,
        vehicle: VehicleType,
    ) -> Option<SpotCoordinate> {
        STRATEGIES[usize::from(self.id())](grid, occupancy, free, vehicle)
    }
}

impl TryFrom<u8> for AllocationStrategy {
    type Error = AllocationError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Self::LowestIndex),
            1 => Ok(Self::MaxFreeFloor),
            other => Err(AllocationError::InvalidStrategy(other)),
        }
    }
}

/// First free spot of the requested kind in floor-major, row-major order.
#[must_use]
pub fn lowest_index(
    grid: &GridModel,
    occupancy: &OccupancyIndex,
    _free: &FreeCountTracker,
    vehicle: VehicleType,
) -> Option<SpotCoordinate> {
    (0..grid.floors()).find_map(|floor| first_free_on_floor(grid, occupancy, floor, vehicle))
}

/// Floor with the highest free count (lowest floor on ties), then its first
/// free spot. Floors are compared through the tracker only.
#[must_use]
pub fn max_free_floor(
    grid: &GridModel,
    occupancy: &OccupancyIndex,
    free: &FreeCountTracker,
    vehicle: VehicleType,
) -> Option<SpotCoordinate> {
    let mut best: Option<(usize, usize)> = None;
    for floor in 0..free.floors() {
        let count = free.get(floor, vehicle).unwrap_or_default();
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((floor, count));
        }
    }
    match best {
        Some((floor, count)) if count > 0 => first_free_on_floor(grid, occupancy, floor, vehicle),
        _ => None,
    }
}

fn first_free_on_floor(
    grid: &GridModel,
    occupancy: &OccupancyIndex,
    floor: usize,
    vehicle: VehicleType,
) -> Option<SpotCoordinate> {
    let wanted = vehicle.spot_kind();
    grid.floor_spots(floor)
        .find(|&(coord, kind)| kind == wanted && !occupancy.is_occupied(coord))
        .map(|(coord, _)| coord)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OccupantRecord;

    fn occupy(
        occupancy: &mut OccupancyIndex,
        free: &mut FreeCountTracker,
        spot: SpotCoordinate,
        vehicle: VehicleType,
    ) {
        occupancy.place(OccupantRecord {
            vehicle_type: vehicle,
            vehicle_number: format!("v{spot}"),
            ticket_id: format!("t{spot}"),
            spot,
        });
        free.decrement(spot.floor, vehicle);
    }

    #[test]
    fn strategy_ids() {
        assert_eq!(AllocationStrategy::try_from(0).unwrap(), AllocationStrategy::LowestIndex);
        assert_eq!(AllocationStrategy::try_from(1).unwrap(), AllocationStrategy::MaxFreeFloor);
        assert_eq!(
            AllocationStrategy::try_from(2).unwrap_err(),
            AllocationError::InvalidStrategy(2)
        );
        assert_eq!(AllocationStrategy::MaxFreeFloor.id(), 1);
    }

    #[test]
    fn lowest_index_skips_occupied_and_other_kinds() {
        let grid = GridModel::new(&[vec![vec![4, 2, 2]], vec![vec![2, 0, 4]]]).unwrap();
        let mut occupancy = OccupancyIndex::new();
        let mut free = FreeCountTracker::new(&grid);
        let v = VehicleType::TwoWheeler;

        assert_eq!(
            lowest_index(&grid, &occupancy, &free, v),
            Some(SpotCoordinate::new(0, 0, 1))
        );
        occupy(&mut occupancy, &mut free, SpotCoordinate::new(0, 0, 1), v);
        occupy(&mut occupancy, &mut free, SpotCoordinate::new(0, 0, 2), v);
        assert_eq!(
            lowest_index(&grid, &occupancy, &free, v),
            Some(SpotCoordinate::new(1, 0, 0))
        );
        occupy(&mut occupancy, &mut free, SpotCoordinate::new(1, 0, 0), v);
        assert_eq!(lowest_index(&grid, &occupancy, &free, v), None);
    }

    #[test]
    fn max_free_floor_prefers_emptier_floor_then_lowest_on_ties() {
        let grid = GridModel::new(&[
            vec![vec![2, 2, 0]],
            vec![vec![2, 2, 2]],
            vec![vec![2, 2, 2]],
        ])
        .unwrap();
        let mut occupancy = OccupancyIndex::new();
        let mut free = FreeCountTracker::new(&grid);
        let v = VehicleType::TwoWheeler;

        // floors 1 and 2 tie at 3, floor 1 wins
        let first = max_free_floor(&grid, &occupancy, &free, v).unwrap();
        assert_eq!(first, SpotCoordinate::new(1, 0, 0));
        occupy(&mut occupancy, &mut free, first, v);

        assert_eq!(
            AllocationStrategy::MaxFreeFloor.select(&grid, &occupancy, &free, v),
            Some(SpotCoordinate::new(2, 0, 0))
        );
    }

    #[test]
    fn max_free_floor_none_when_every_floor_is_full() {
        let grid = GridModel::new(&[vec![vec![4, 2]], vec![vec![0, 0]]]).unwrap();
        let mut occupancy = OccupancyIndex::new();
        let mut free = FreeCountTracker::new(&grid);
        occupy(
            &mut occupancy,
            &mut free,
            SpotCoordinate::new(0, 0, 0),
            VehicleType::FourWheeler,
        );
        assert_eq!(
            max_free_floor(&grid, &occupancy, &free, VehicleType::FourWheeler),
            None
        );
        assert_eq!(
            max_free_floor(&grid, &occupancy, &free, VehicleType::TwoWheeler),
            Some(SpotCoordinate::new(0, 0, 1))
        );
    }
}
