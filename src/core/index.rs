//! Occupancy and vehicle indices.
//!
//! The occupancy index owns each [`OccupantRecord`]. The vehicle index maps both
//! the vehicle number and the ticket id to the record's spot, so it never holds
//! a second copy of the record.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::{SpotCoordinate, VehicleType};

/// Data bound to a spot while a vehicle is parked there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupantRecord {
    /// Type the vehicle asked for.
    pub vehicle_type: VehicleType,
    /// Vehicle registration number.
    pub vehicle_number: String,
    /// Ticket issued for this stay.
    pub ticket_id: String,
    /// Where the vehicle is parked.
    pub spot: SpotCoordinate,
}

impl OccupantRecord {
    /// Canonical spot id of the record.
    #[must_use]
    pub fn spot_id(&self) -> String {
        self.spot.to_string()
    }
}

/// Spot -> occupant. Source of truth for whether a spot is taken.
#[derive(Debug, Default)]
pub struct OccupancyIndex {
    occupants: HashMap<SpotCoordinate, OccupantRecord>,
}

impl OccupancyIndex {
    /// Empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a vehicle currently holds `spot`.
    #[must_use]
    pub fn is_occupied(&self, spot: SpotCoordinate) -> bool {
        self.occupants.contains_key(&spot)
    }

    /// Active record at `spot`.
    #[must_use]
    pub fn get(&self, spot: SpotCoordinate) -> Option<&OccupantRecord> {
        self.occupants.get(&spot)
    }

    /// Bind `record` to its spot. The spot must be free.
    pub(crate) fn place(&mut self, record: OccupantRecord) {
        let previous = self.occupants.insert(record.spot, record);
        debug_assert!(previous.is_none(), "spot placed twice");
    }

    /// Unbind and return the record at `spot`.
    pub(crate) fn remove(&mut self, spot: SpotCoordinate) -> Option<OccupantRecord> {
        self.occupants.remove(&spot)
    }

    /// Number of occupied spots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.occupants.len()
    }

    /// Whether no spot is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    /// Iterate active records in no particular order.
    pub fn records(&self) -> impl Iterator<Item = &OccupantRecord> {
        self.occupants.values()
    }
}

/// Vehicle number or ticket id -> spot of the active record.
#[derive(Debug, Default)]
pub struct VehicleIndex {
    keys: HashMap<String, SpotCoordinate>,
}

impl VehicleIndex {
    /// Empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spot registered under `key`, whether it is a vehicle number or a ticket.
    #[must_use]
    pub fn find_by_key(&self, key: &str) -> Option<SpotCoordinate> {
        self.keys.get(key).copied()
    }

    /// Whether `key` belongs to an active record.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains_key(key)
    }

    /// Register both keys of `record`.
    pub(crate) fn register(&mut self, record: &OccupantRecord) {
        self.keys.insert(record.vehicle_number.clone(), record.spot);
        self.keys.insert(record.ticket_id.clone(), record.spot);
    }

    /// Drop both keys of `record`.
    pub(crate) fn unregister(&mut self, record: &OccupantRecord) {
        self.keys.remove(&record.vehicle_number);
        self.keys.remove(&record.ticket_id);
    }

    /// Number of registered keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no key is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
