//! Allocation facade tying the grid, tracker and indices together.

use std::cell::RefCell;

use crate::core::{
    AllocationError, AllocationStrategy, DiagnosticSink, FloorSnapshot, FreeCountTracker,
    GridModel, LayoutError, LotSnapshot, OccupancyIndex, OccupantRecord, SpotCoordinate,
    TracingSink, TypeCount, VehicleIndex, VehicleType,
};

/// Multi-floor parking lot.
///
/// Allocation and release apply their index and counter updates as one unit:
/// either every update lands or, on failure, none does. The lot is
/// single-threaded; callers that share it across threads must serialize
/// `allocate`/`release` behind one lock.
pub struct ParkingLot {
    grid: GridModel,
    free: FreeCountTracker,
    occupancy: OccupancyIndex,
    vehicles: VehicleIndex,
    default_strategy: AllocationStrategy,
    sink: RefCell<Box<dyn DiagnosticSink>>,
}

impl ParkingLot {
    /// Build a lot from layout codes indexed `[floor][row][col]`.
    pub fn new(layout: &[Vec<Vec<u8>>]) -> Result<Self, LayoutError> {
        GridModel::new(layout).map(Self::from_grid)
    }

    /// Build an empty lot over an existing grid.
    #[must_use]
    pub fn from_grid(grid: GridModel) -> Self {
        Self {
            free: FreeCountTracker::new(&grid),
            grid,
            occupancy: OccupancyIndex::new(),
            vehicles: VehicleIndex::new(),
            default_strategy: AllocationStrategy::LowestIndex,
            sink: RefCell::new(Box::new(TracingSink::new())),
        }
    }

    /// Replace the diagnostic sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Box<dyn DiagnosticSink>) -> Self {
        self.sink = RefCell::new(sink);
        self
    }

    /// Strategy used by [`Self::park_default`].
    #[must_use]
    pub fn with_default_strategy(mut self, strategy: AllocationStrategy) -> Self {
        self.default_strategy = strategy;
        self
    }

    /// Underlying grid.
    #[must_use]
    pub const fn grid(&self) -> &GridModel {
        &self.grid
    }

    /// Strategy used by [`Self::park_default`].
    #[must_use]
    pub const fn default_strategy(&self) -> AllocationStrategy {
        self.default_strategy
    }

    /// Park a vehicle and return its spot id.
    ///
    /// Fails with `DuplicateVehicle` if the vehicle number or ticket is already
    /// active, or `NoAvailableSpot` if the strategy finds nothing. Neither
    /// failure touches lot state.
    pub fn allocate(
        &mut self,
        vehicle: VehicleType,
        vehicle_number: &str,
        ticket_id: &str,
        strategy: AllocationStrategy,
    ) -> Result<String, AllocationError> {
        self.trace_start(&format!(
            "allocate {vehicle} {vehicle_number} {ticket_id} strategy {}: ",
            strategy.id()
        ));
        let result = self.commit(vehicle, vehicle_number, ticket_id, strategy);
        self.trace_result(&result);
        result
    }

    /// [`Self::allocate`] over raw codes: `wheels` in {2, 4}, `strategy_id` in {0, 1}.
    ///
    /// Checks run in order: duplicate vehicle, strategy id, vehicle type.
    pub fn park(
        &mut self,
        wheels: u8,
        vehicle_number: &str,
        ticket_id: &str,
        strategy_id: u8,
    ) -> Result<String, AllocationError> {
        self.trace_start(&format!(
            "park {wheels} {vehicle_number} {ticket_id} strategy {strategy_id}: "
        ));
        let result = self.ensure_not_parked(vehicle_number, ticket_id).and_then(|()| {
            let strategy = AllocationStrategy::try_from(strategy_id).inspect_err(|_| {
                tracing::error!("invalid parking strategy {}", strategy_id);
            })?;
            let vehicle = VehicleType::try_from(wheels)?;
            self.commit(vehicle, vehicle_number, ticket_id, strategy)
        });
        self.trace_result(&result);
        result
    }

    /// [`Self::allocate`] with the lot's default strategy.
    pub fn park_default(
        &mut self,
        vehicle: VehicleType,
        vehicle_number: &str,
        ticket_id: &str,
    ) -> Result<String, AllocationError> {
        self.allocate(vehicle, vehicle_number, ticket_id, self.default_strategy)
    }

    /// Free the spot `spot_id`. Returns `false` if nothing is parked there,
    /// including when the id does not name a spot at all.
    pub fn release(&mut self, spot_id: &str) -> bool {
        self.try_release(spot_id).is_ok()
    }

    /// Free the spot `spot_id` and hand back the record that occupied it.
    pub fn try_release(&mut self, spot_id: &str) -> Result<OccupantRecord, AllocationError> {
        self.trace_start(&format!("release {spot_id}: "));
        let result = self.vacate(spot_id);
        match &result {
            Ok(record) => {
                tracing::info!("vehicle {} removed from {}", record.vehicle_number, spot_id);
                self.trace_end(&format!("freed from {}", record.vehicle_number));
            }
            Err(e) => {
                tracing::warn!("spot {} not found", spot_id);
                self.trace_end(&format!("failed: {e}"));
            }
        }
        result
    }

    /// Spot id of the vehicle whose number or ticket equals `query`.
    ///
    /// Vehicle numbers are consulted before tickets; both live in one index.
    #[must_use]
    pub fn search(&self, query: &str) -> Option<String> {
        self.trace_start(&format!("search {query}: "));
        let found = self.vehicles.find_by_key(query).map(|spot| spot.spot_id());
        match &found {
            Some(spot_id) => {
                tracing::info!("vehicle {} found at {}", query, spot_id);
                self.trace_end(spot_id);
            }
            None => {
                tracing::warn!("vehicle {} not found", query);
                self.trace_end("not found");
            }
        }
        found
    }

    /// Free spots for vehicle type code `wheels` on `floor`.
    pub fn free_count(&self, floor: usize, wheels: u8) -> Result<usize, AllocationError> {
        self.trace_start(&format!("free count floor {floor} type {wheels}: "));
        let count = VehicleType::from_wheels(wheels)
            .and_then(|vehicle| self.free.get(floor, vehicle))
            .ok_or(AllocationError::InvalidFloorOrType {
                floor,
                vehicle_type: wheels,
            });
        match &count {
            Ok(n) => self.trace_end(&n.to_string()),
            Err(e) => self.trace_end(&format!("failed: {e}")),
        }
        count
    }

    /// Static capacity for `vehicle` on `floor`.
    pub fn capacity(&self, floor: usize, vehicle: VehicleType) -> Result<usize, AllocationError> {
        self.grid
            .capacity(floor, vehicle)
            .map_err(|_| AllocationError::InvalidFloorOrType {
                floor,
                vehicle_type: vehicle.wheels(),
            })
    }

    /// Occupied spots for `vehicle` on `floor`, counted from the occupancy index.
    pub fn occupied_count(
        &self,
        floor: usize,
        vehicle: VehicleType,
    ) -> Result<usize, AllocationError> {
        if floor >= self.grid.floors() {
            return Err(AllocationError::InvalidFloorOrType {
                floor,
                vehicle_type: vehicle.wheels(),
            });
        }
        Ok(self
            .occupancy
            .records()
            .filter(|r| r.spot.floor == floor && r.vehicle_type == vehicle)
            .count())
    }

    /// Record currently parked at `spot_id`.
    #[must_use]
    pub fn occupant(&self, spot_id: &str) -> Option<&OccupantRecord> {
        let spot: SpotCoordinate = spot_id.parse().ok()?;
        self.occupancy.get(spot)
    }

    /// Number of parked vehicles.
    #[must_use]
    pub fn parked(&self) -> usize {
        self.occupancy.len()
    }

    /// Capacity, free counts and occupied spots of every floor.
    #[must_use]
    pub fn snapshot(&self) -> LotSnapshot {
        let floors = (0..self.grid.floors())
            .map(|floor| {
                let counts = |vehicle: VehicleType| TypeCount {
                    capacity: self.grid.capacity(floor, vehicle).unwrap_or_default(),
                    free: self.free.get(floor, vehicle).unwrap_or_default(),
                };
                let occupied = self
                    .grid
                    .floor_spots(floor)
                    .filter(|&(spot, _)| self.occupancy.is_occupied(spot))
                    .map(|(spot, _)| spot.spot_id())
                    .collect();
                FloorSnapshot {
                    floor,
                    two_wheeler: counts(VehicleType::TwoWheeler),
                    four_wheeler: counts(VehicleType::FourWheeler),
                    occupied,
                }
            })
            .collect();
        LotSnapshot { floors }
    }

    fn ensure_not_parked(&self, vehicle_number: &str, ticket_id: &str) -> Result<(), AllocationError> {
        for key in [vehicle_number, ticket_id] {
            if self.vehicles.contains(key) {
                tracing::warn!(
                    "vehicle {} or ticket {} is already parked",
                    vehicle_number,
                    ticket_id
                );
                return Err(AllocationError::DuplicateVehicle(key.to_string()));
            }
        }
        Ok(())
    }

    fn commit(
        &mut self,
        vehicle: VehicleType,
        vehicle_number: &str,
        ticket_id: &str,
        strategy: AllocationStrategy,
    ) -> Result<String, AllocationError> {
        self.ensure_not_parked(vehicle_number, ticket_id)?;

        let Some(spot) = strategy.select(&self.grid, &self.occupancy, &self.free, vehicle) else {
            tracing::info!("no available spot for vehicle type {}", vehicle.wheels());
            return Err(AllocationError::NoAvailableSpot(vehicle.wheels()));
        };

        let record = OccupantRecord {
            vehicle_type: vehicle,
            vehicle_number: vehicle_number.to_string(),
            ticket_id: ticket_id.to_string(),
            spot,
        };
        self.vehicles.register(&record);
        self.free.decrement(spot.floor, vehicle);
        self.occupancy.place(record);

        let spot_id = spot.spot_id();
        tracing::info!("vehicle {} parked at {}", vehicle_number, spot_id);
        Ok(spot_id)
    }

    fn vacate(&mut self, spot_id: &str) -> Result<OccupantRecord, AllocationError> {
        let spot: SpotCoordinate = spot_id.parse()?;
        let record = self
            .occupancy
            .remove(spot)
            .ok_or_else(|| AllocationError::UnknownSpot(spot_id.to_string()))?;
        self.vehicles.unregister(&record);
        self.free.increment(spot.floor, record.vehicle_type);
        Ok(record)
    }

    fn trace_start(&self, text: &str) {
        self.sink.borrow_mut().fragment(text);
    }

    fn trace_end(&self, text: &str) {
        self.sink.borrow_mut().line(text);
    }

    fn trace_result(&self, result: &Result<String, AllocationError>) {
        match result {
            Ok(spot_id) => self.trace_end(spot_id),
            Err(e) => self.trace_end(&format!("failed: {e}")),
        }
    }
}
