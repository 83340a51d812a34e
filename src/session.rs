use crate::command::Command;
use crate::error::LotError;
use crate::lot::ParkingLot;
use tabled::Table;
use tabled::settings::{Alignment, Style};
use tracing::info;

pub const HELP: &str = "
Available Commands:
  create_parking_lot <n>                              - Open a fresh lot with <n> slots
  park <registration> <colour>                        - Park a car in the nearest free slot
  leave <slot>                                        - Free slot <slot>
  status                                              - List parked cars in a table
  registration_numbers_for_cars_with_colour <colour>  - Registration numbers of cars with <colour>
  slot_numbers_for_cars_with_colour <colour>          - Slots holding cars with <colour>
  slot_number_for_registration_number <registration> - Slot holding car <registration>
  help / ?                                            - Show this help menu
  exit / quit                                         - Leave the console
";

#[derive(Debug, PartialEq)]
pub enum Outcome {
    Message(String),
    Failure(String),
    Exit,
}

/// Holds the lot the console is currently operating on.
#[derive(Default)]
pub struct Session {
    lot: Option<ParkingLot>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lot(lot: ParkingLot) -> Self {
        Session { lot: Some(lot) }
    }

    pub fn lot(&self) -> Option<&ParkingLot> {
        self.lot.as_ref()
    }

    /// Parses and executes one line. Parse errors are reported like any other failure.
    pub fn run_line(&mut self, line: &str) -> Outcome {
        match line.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(e) => Outcome::Failure(e.to_string()),
        }
    }

    pub fn execute(&mut self, command: Command) -> Outcome {
        match command {
            Command::Create { slots } => match ParkingLot::new(slots) {
                Ok(lot) => {
                    if self.lot.is_some() {
                        info!(slots, "replacing parking lot");
                    }
                    let message = format!("Created a parking lot with {} slots", lot.num_slots());
                    self.lot = Some(lot);
                    Outcome::Message(message)
                }
                Err(e) => Outcome::Failure(e.to_string()),
            },
            Command::Help => Outcome::Message(HELP.to_string()),
            Command::Exit => Outcome::Exit,
            Command::Park(vehicle) => self.on_lot(|lot| match lot.reserve(vehicle) {
                Ok(ticket) => Outcome::Message(format!("Allocated slot number: {}", ticket.slot_number)),
                Err(LotError::LotFull) => Outcome::Failure("Sorry, parking lot is full".to_string()),
                Err(e) => Outcome::Failure(e.to_string()),
            }),
            Command::Leave { slot } => self.on_lot(|lot| match lot.leave(slot) {
                Ok(freed) => Outcome::Message(format!("Slot number {} is free", freed.number)),
                Err(e) => Outcome::Failure(e.to_string()),
            }),
            Command::Status => self.on_lot(status),
            Command::RegistrationNumbersByColor(color) => {
                self.on_lot(|lot| listing(lot.registration_numbers_by_color(&color)))
            }
            Command::SlotNumbersByColor(color) => {
                self.on_lot(|lot| listing(lot.slot_numbers_by_color(&color)))
            }
            Command::SlotNumberByRegistrationNumber(reg) => {
                self.on_lot(|lot| listing(lot.slot_number_by_registration_number(&reg)))
            }
        }
    }

    fn on_lot(&self, f: impl FnOnce(&ParkingLot) -> Outcome) -> Outcome {
        match &self.lot {
            Some(lot) => f(lot),
            None => Outcome::Failure("No parking lot has been created".to_string()),
        }
    }
}

fn status(lot: &ParkingLot) -> Outcome {
    let tickets = lot.tickets();
    if tickets.is_empty() {
        return Outcome::Message("Parking lot is empty".to_string());
    }
    let mut table = Table::new(&tickets);
    table.with(Style::rounded());
    table.with(Alignment::left());
    Outcome::Message(table.to_string())
}

fn listing<T: ToString>(values: impl IntoIterator<Item = T>) -> Outcome {
    let rendered: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
    if rendered.is_empty() {
        Outcome::Failure("Not found".to_string())
    } else {
        Outcome::Message(rendered.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::Vehicle;

    fn message(s: &str) -> Outcome {
        Outcome::Message(s.to_string())
    }

    fn failure(s: &str) -> Outcome {
        Outcome::Failure(s.to_string())
    }

    #[test]
    fn requires_a_lot() {
        let mut session = Session::new();
        assert_eq!(failure("No parking lot has been created"), session.run_line("park A White"));
        assert_eq!(failure("No parking lot has been created"), session.run_line("status"));
        assert!(session.lot().is_none());
    }

    #[test]
    fn full_transcript() {
        let mut session = Session::new();

        assert_eq!(message("Created a parking lot with 6 slots"), session.run_line("create_parking_lot 6"));
        assert_eq!(message("Allocated slot number: 1"), session.run_line("park KA-01-HH-1234 White"));
        assert_eq!(message("Allocated slot number: 2"), session.run_line("park KA-01-HH-9999 White"));
        assert_eq!(message("Allocated slot number: 3"), session.run_line("park KA-01-BB-0001 Black"));
        assert_eq!(message("Allocated slot number: 4"), session.run_line("park KA-01-HH-7777 Red"));
        assert_eq!(message("Allocated slot number: 5"), session.run_line("park KA-01-HH-2701 Blue"));
        assert_eq!(message("Allocated slot number: 6"), session.run_line("park KA-01-HH-3141 Black"));
        assert_eq!(message("Slot number 4 is free"), session.run_line("leave 4"));
        assert_eq!(message("Allocated slot number: 4"), session.run_line("park KA-01-P-333 White"));
        assert_eq!(failure("Sorry, parking lot is full"), session.run_line("park DL-12-AA-9999 White"));
        assert_eq!(
            message("KA-01-HH-1234, KA-01-HH-9999, KA-01-P-333"),
            session.run_line("registration_numbers_for_cars_with_colour White")
        );
        assert_eq!(message("1, 2, 4"), session.run_line("slot_numbers_for_cars_with_colour White"));
        assert_eq!(message("6"), session.run_line("slot_number_for_registration_number KA-01-HH-3141"));
        assert_eq!(failure("Not found"), session.run_line("slot_number_for_registration_number MH-04-AY-1111"));
        assert_eq!(Outcome::Exit, session.run_line("exit"));
    }

    #[test]
    fn status_table() {
        let mut session = Session::new();
        session.run_line("create_parking_lot 3");
        assert_eq!(message("Parking lot is empty"), session.run_line("status"));

        session.run_line("park KA-01-HH-1234 White");
        session.run_line("park KA-01-HH-9999 Black");

        let Outcome::Message(table) = session.run_line("status") else {
            panic!("status should render a table");
        };
        assert!(table.contains("Slot No."));
        assert!(table.contains("KA-01-HH-1234"));
        assert!(table.contains("Black"));
    }

    #[test]
    fn errors_are_rendered() {
        let mut session = Session::with_lot(ParkingLot::new(2).unwrap());

        assert_eq!(failure("Slot number 2 is not occupied"), session.run_line("leave 2"));
        assert_eq!(failure("Unknown command: fly"), session.run_line("fly"));
        assert_eq!(
            failure("Number of slots in the parking lot must be greater than zero (got 0)"),
            session.run_line("create_parking_lot 0")
        );
        // the failed create keeps the previous lot
        assert_eq!(Some(2), session.lot().map(|l| l.num_slots()));
    }

    #[test]
    fn create_replaces_lot() {
        let mut session = Session::new();
        session.run_line("create_parking_lot 1");
        session.run_line("park A White");
        session.run_line("create_parking_lot 2");

        let lot = session.lot().unwrap();
        assert_eq!(2, lot.available_count());
        assert_eq!(Some(1), lot.reserve(Vehicle::new("B", "Red")).ok().map(|t| t.slot_number));
    }
}
