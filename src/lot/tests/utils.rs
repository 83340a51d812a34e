use crate::lot::ParkingLot;
use crate::slot::SlotNumber;
use crate::vehicle::Vehicle;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use std::collections::BTreeSet;

pub fn car(registration_number: &str, color: &str) -> Vehicle {
    Vehicle::new(registration_number, color)
}

pub fn lot(num_slots: i64) -> ParkingLot {
    ParkingLot::new(num_slots).unwrap()
}

/// Parks each `(registration, color)` in order and returns the assigned slot numbers.
pub fn park_all(lot: &ParkingLot, cars: &[(&str, &str)]) -> Vec<SlotNumber> {
    cars.iter()
        .map(|(reg, color)| lot.reserve(car(reg, color)).unwrap().slot_number)
        .collect()
}

pub fn available_numbers(lot: &ParkingLot) -> Vec<SlotNumber> {
    lot.available_slots().iter().map(|s| s.number).collect()
}

pub fn occupied_numbers(lot: &ParkingLot) -> Vec<SlotNumber> {
    lot.occupied_slots().iter().map(|s| s.number).collect()
}

/// Available and occupied are disjoint and together cover `1..=num_slots`; only occupied
/// slots carry a vehicle.
pub fn assert_partitioned(lot: &ParkingLot) {
    let available = lot.available_slots();
    let occupied = lot.occupied_slots();

    assert!(available.iter().all(|s| s.vehicle().is_none()));
    assert!(occupied.iter().all(|s| s.vehicle().is_some()));

    let free: BTreeSet<_> = available.iter().map(|s| s.number).collect();
    let taken: BTreeSet<_> = occupied.iter().map(|s| s.number).collect();
    assert!(free.is_disjoint(&taken), "slot in both partitions");

    let all: BTreeSet<_> = free.union(&taken).copied().collect();
    let universe: BTreeSet<_> = (1..=lot.num_slots()).collect();
    assert_eq!(universe, all);
    assert_eq!(lot.is_full(), free.is_empty());
}

#[derive(Clone, Debug)]
pub enum Op {
    Reserve(Vehicle),
    Leave(SlotNumber),
}

pub fn arb_color() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("White"), Just("black"), Just("RED"), Just("Blue")]
}

pub fn arb_op(max_slot: SlotNumber) -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..1000u32, arb_color()).prop_map(|(n, c)| Op::Reserve(car(&format!("KA-01-{:04}", n), c))),
        (1..=max_slot + 1).prop_map(Op::Leave),
    ]
}
