use crate::slot::SlotNumber;
use crate::vehicle::{Color, RegistrationNumber, Vehicle};
use serde::{Deserialize, Serialize};
use std::fmt;
use tabled::Tabled;

/// Receipt handed out by a successful reservation. The lot keeps no copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Tabled)]
pub struct Ticket {
    #[tabled(rename = "Slot No.")]
    pub slot_number: SlotNumber,
    #[tabled(rename = "Registration No")]
    pub registration_number: RegistrationNumber,
    #[tabled(rename = "Colour")]
    pub color: Color,
}

impl Ticket {
    pub(crate) fn issue(slot_number: SlotNumber, vehicle: &Vehicle) -> Self {
        Ticket {
            slot_number,
            registration_number: vehicle.registration_number.clone(),
            color: vehicle.color.clone(),
        }
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "slot {}: {} ({})",
            self.slot_number, self.registration_number, self.color
        )
    }
}
