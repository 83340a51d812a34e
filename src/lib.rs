//! A single-floor parking lot: numbered slots handed out nearest-first, released on departure
//! and searchable by the parked vehicle's colour or registration number.

pub mod command;
pub mod error;
pub mod lot;
pub mod scenario;
pub mod session;
pub mod slot;
pub mod ticket;
pub mod vehicle;

pub use error::{LotError, LotResult};
pub use lot::ParkingLot;
pub use slot::{Slot, SlotNumber};
pub use ticket::Ticket;
pub use vehicle::Vehicle;
