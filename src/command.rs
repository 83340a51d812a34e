use crate::slot::SlotNumber;
use crate::vehicle::Vehicle;
use std::str::FromStr;
use thiserror::Error;

pub const KEYWORDS: &[&str] = &[
    "create_parking_lot",
    "park",
    "leave",
    "status",
    "registration_numbers_for_cars_with_colour",
    "slot_numbers_for_cars_with_colour",
    "slot_number_for_registration_number",
    "help",
    "exit",
];

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Create { slots: i64 },
    Park(Vehicle),
    Leave { slot: SlotNumber },
    Status,
    RegistrationNumbersByColor(String),
    SlotNumbersByColor(String),
    SlotNumberByRegistrationNumber(String),
    Help,
    Exit,
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("Unknown command: {0}")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("Not a number: {0}")]
    Number(String),
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((keyword, args)) = parts.split_first() else {
            return Err(ParseError::Empty);
        };

        match (keyword.to_ascii_lowercase().as_str(), args) {
            ("create_parking_lot", [n]) => Ok(Command::Create { slots: number(n)? }),
            ("create_parking_lot", _) => Err(ParseError::Usage("create_parking_lot <slots>")),
            ("park", [reg, color]) => Ok(Command::Park(Vehicle::new(reg, color))),
            ("park", _) => Err(ParseError::Usage("park <registration_number> <colour>")),
            ("leave", [slot]) => Ok(Command::Leave { slot: number(slot)? }),
            ("leave", _) => Err(ParseError::Usage("leave <slot_number>")),
            ("status", []) => Ok(Command::Status),
            ("status", _) => Err(ParseError::Usage("status")),
            ("registration_numbers_for_cars_with_colour", [color]) => {
                Ok(Command::RegistrationNumbersByColor(color.to_string()))
            }
            ("registration_numbers_for_cars_with_colour", _) => Err(ParseError::Usage(
                "registration_numbers_for_cars_with_colour <colour>",
            )),
            ("slot_numbers_for_cars_with_colour", [color]) => {
                Ok(Command::SlotNumbersByColor(color.to_string()))
            }
            ("slot_numbers_for_cars_with_colour", _) => {
                Err(ParseError::Usage("slot_numbers_for_cars_with_colour <colour>"))
            }
            ("slot_number_for_registration_number", [reg]) => {
                Ok(Command::SlotNumberByRegistrationNumber(reg.to_string()))
            }
            ("slot_number_for_registration_number", _) => Err(ParseError::Usage(
                "slot_number_for_registration_number <registration_number>",
            )),
            ("help" | "?", _) => Ok(Command::Help),
            ("exit" | "quit", _) => Ok(Command::Exit),
            _ => Err(ParseError::Unknown(keyword.to_string())),
        }
    }
}

fn number<T: FromStr>(s: &str) -> Result<T, ParseError> {
    s.parse::<T>().map_err(|_| ParseError::Number(s.to_string()))
}
