//! Serializable point-in-time view of a lot.

use serde::{Deserialize, Serialize};

/// Capacity and free count for one vehicle type on one floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCount {
    /// Static number of spots.
    pub capacity: usize,
    /// Spots currently free.
    pub free: usize,
}

/// State of one floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorSnapshot {
    /// Floor index.
    pub floor: usize,
    /// Two-wheeler counts.
    pub two_wheeler: TypeCount,
    /// Four-wheeler counts.
    pub four_wheeler: TypeCount,
    /// Occupied spot ids in scan order.
    pub occupied: Vec<String>,
}

/// State of every floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotSnapshot {
    /// Per-floor entries, lowest floor first.
    pub floors: Vec<FloorSnapshot>,
}

impl LotSnapshot {
    /// Total occupied spots across floors.
    #[must_use]
    pub fn occupied_total(&self) -> usize {
        self.floors.iter().map(|f| f.occupied.len()).sum()
    }
}
