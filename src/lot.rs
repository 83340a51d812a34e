use crate::error::{LotError, LotResult};
use crate::slot::{Slot, SlotNumber};
use crate::ticket::Ticket;
use crate::vehicle::Vehicle;
use parking_lot::RwLock;
use std::collections::BTreeSet;
use tracing::{debug, info, warn};


struct Partitions {
    // slot `n` lives at index `n - 1`
    slots: Vec<Slot>,
    available: BTreeSet<SlotNumber>,
    occupied: BTreeSet<SlotNumber>,
}

impl Partitions {
    fn slot(&self, number: SlotNumber) -> &Slot {
        &self.slots[number as usize - 1]
    }

    fn slot_mut(&mut self, number: SlotNumber) -> &mut Slot {
        &mut self.slots[number as usize - 1]
    }

    fn occupants(&self) -> impl Iterator<Item = (SlotNumber, &Vehicle)> {
        self.occupied
            .iter()
            .filter_map(|n| self.slot(*n).vehicle().map(|v| (*n, v)))
    }
}

/// A single-floor lot with a fixed set of slots handed out nearest-first.
///
/// `reserve` and `leave` take the write lock for the whole check-select-move sequence, so
/// no two callers can be given the same slot and readers never see a slot in both (or
/// neither) partition.
pub struct ParkingLot {
    num_slots: u32,
    num_floors: u32,
    state: RwLock<Partitions>,
}

impl ParkingLot {
    const FLOOR: u32 = 1;

    pub fn new(num_slots: i64) -> LotResult<ParkingLot> {
        let count = u32::try_from(num_slots)
            .ok()
            .filter(|n| *n > 0)
            .ok_or(LotError::InvalidConfiguration(num_slots))?;

        let slots = (1..=count)
            .map(|n| Slot::new(n, Self::FLOOR))
            .collect::<Vec<Slot>>();
        let available = slots.iter().map(|s| s.number).collect();

        info!(slots = count, "parking lot created");
        Ok(ParkingLot {
            num_slots: count,
            num_floors: 1,
            state: RwLock::new(Partitions {
                slots,
                available,
                occupied: BTreeSet::new(),
            }),
        })
    }

    pub fn num_slots(&self) -> u32 {
        self.num_slots
    }

    pub fn num_floors(&self) -> u32 {
        self.num_floors
    }

    /// Parks `vehicle` in the lowest-numbered free slot.
    pub fn reserve(&self, vehicle: Vehicle) -> LotResult<Ticket> {
        if vehicle.is_blank() {
            warn!(%vehicle, "rejected vehicle without registration number or color");
            return Err(LotError::InvalidArgument);
        }

        let mut state = self.state.write();
        let Some(nearest) = state.available.pop_first() else {
            warn!(registration = %vehicle.registration_number, "lot is full");
            return Err(LotError::LotFull);
        };

        let ticket = Ticket::issue(nearest, &vehicle);
        state.slot_mut(nearest).reserve(vehicle);
        state.occupied.insert(nearest);

        debug!(slot = nearest, registration = %ticket.registration_number, "slot reserved");
        Ok(ticket)
    }

    /// Frees an occupied slot and returns it, now empty.
    pub fn leave(&self, slot_number: SlotNumber) -> LotResult<Slot> {
        let mut state = self.state.write();
        if !state.occupied.remove(&slot_number) {
            warn!(slot = slot_number, "leave for a slot that is not occupied");
            return Err(LotError::SlotNotFound(slot_number));
        }

        let slot = state.slot_mut(slot_number);
        slot.clear();
        let freed = slot.clone();
        state.available.insert(slot_number);

        debug!(slot = slot_number, "slot released");
        Ok(freed)
    }

    pub fn is_full(&self) -> bool {
        self.state.read().available.is_empty()
    }

    pub fn available_count(&self) -> usize {
        self.state.read().available.len()
    }

    pub fn occupied_count(&self) -> usize {
        self.state.read().occupied.len()
    }

    /// Free slots, lowest number first.
    pub fn available_slots(&self) -> Vec<Slot> {
        let state = self.state.read();
        state.available.iter().map(|n| state.slot(*n).clone()).collect()
    }

    /// Occupied slots with their vehicles, lowest number first.
    pub fn occupied_slots(&self) -> Vec<Slot> {
        let state = self.state.read();
        state.occupied.iter().map(|n| state.slot(*n).clone()).collect()
    }

    /// One ticket per parked vehicle, as if re-issued now.
    pub fn tickets(&self) -> Vec<Ticket> {
        let state = self.state.read();
        state.occupied.iter().filter_map(|n| state.slot(*n).ticket()).collect()
    }

    pub fn registration_numbers_by_color(&self, color: &str) -> Vec<String> {
        self.state
            .read()
            .occupants()
            .filter(|(_, v)| v.has_color(color))
            .map(|(_, v)| v.registration_number.to_string())
            .collect()
    }

    pub fn slot_numbers_by_color(&self, color: &str) -> Vec<SlotNumber> {
        self.state
            .read()
            .occupants()
            .filter(|(_, v)| v.has_color(color))
            .map(|(n, _)| n)
            .collect()
    }

    /// Registration numbers are not checked for uniqueness on `reserve`; with duplicates the
    /// lowest slot wins.
    pub fn slot_number_by_registration_number(&self, registration_number: &str) -> Option<SlotNumber> {
        self.state
            .read()
            .occupants()
            .find(|(_, v)| v.has_registration_number(registration_number))
            .map(|(n, _)| n)
    }
}
