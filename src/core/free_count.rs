//! Per-floor, per-type free spot counters.

use crate::core::{GridModel, VehicleType};

/// Mutable `(floor, type) -> free` table seeded from grid capacities.
///
/// Counts never leave `0..=capacity`; crossing either bound means the facade
/// mutated the indices out of step and is treated as a fatal defect.
#[derive(Debug, Clone)]
pub struct FreeCountTracker {
    free: Vec<[usize; 2]>,
    capacity: Vec<[usize; 2]>,
}

impl FreeCountTracker {
    /// Start with every active spot free.
    #[must_use]
    pub fn new(grid: &GridModel) -> Self {
        let capacity: Vec<[usize; 2]> = (0..grid.floors())
            .map(|floor| {
                VehicleType::ALL.map(|vehicle| grid.capacity(floor, vehicle).unwrap_or_default())
            })
            .collect();
        Self {
            free: capacity.clone(),
            capacity,
        }
    }

    /// Free spots of `vehicle` type on `floor`, `None` if the floor is unknown.
    #[must_use]
    pub fn get(&self, floor: usize, vehicle: VehicleType) -> Option<usize> {
        self.free.get(floor).map(|slots| slots[vehicle.slot()])
    }

    /// Number of floors tracked.
    #[must_use]
    pub fn floors(&self) -> usize {
        self.free.len()
    }

    /// Record one spot becoming occupied.
    ///
    /// # Panics
    /// If the count is already zero or the floor is unknown.
    pub fn decrement(&mut self, floor: usize, vehicle: VehicleType) {
        let slot = &mut self.free[floor][vehicle.slot()];
        assert!(*slot > 0, "free count underflow at floor {floor} for {vehicle}");
        *slot -= 1;
    }

    /// Record one spot becoming free.
    ///
    /// # Panics
    /// If the count already equals capacity or the floor is unknown.
    pub fn increment(&mut self, floor: usize, vehicle: VehicleType) {
        let cap = self.capacity[floor][vehicle.slot()];
        let slot = &mut self.free[floor][vehicle.slot()];
        assert!(*slot < cap, "free count overflow at floor {floor} for {vehicle}");
        *slot += 1;
    }
}
