use crate::ticket::Ticket;
use crate::vehicle::Vehicle;
use serde::Serialize;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

pub type SlotNumber = u32;

/// A numbered parking space.
///
/// Identity, equality and ordering are by floor and slot number only; the occupant is state.
#[derive(Clone, Debug, Serialize)]
pub struct Slot {
    pub number: SlotNumber,
    pub floor: u32,
    vehicle: Option<Vehicle>,
}

impl Slot {
    pub fn new(number: SlotNumber, floor: u32) -> Self {
        Slot {
            number,
            floor,
            vehicle: None,
        }
    }

    pub fn vehicle(&self) -> Option<&Vehicle> {
        self.vehicle.as_ref()
    }

    pub(crate) fn reserve(&mut self, vehicle: Vehicle) {
        self.vehicle = Some(vehicle);
    }

    pub(crate) fn clear(&mut self) {
        self.vehicle = None;
    }

    pub fn ticket(&self) -> Option<Ticket> {
        self.vehicle.as_ref().map(|v| Ticket::issue(self.number, v))
    }
}

impl PartialEq for Slot {
    fn eq(&self, other: &Self) -> bool {
        self.floor == other.floor && self.number == other.number
    }
}

impl Eq for Slot {}

impl Hash for Slot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.floor.hash(state);
        self.number.hash(state);
    }
}

impl PartialOrd for Slot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Slot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.number
            .cmp(&other.number)
            .then(self.floor.cmp(&other.floor))
    }
}
