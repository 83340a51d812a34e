use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

pub type RegistrationNumber = Arc<str>;
pub type Color = Arc<str>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub registration_number: RegistrationNumber,
    pub color: Color,
}

impl Vehicle {
    pub fn new(registration_number: &str, color: &str) -> Self {
        Vehicle {
            registration_number: Arc::from(registration_number),
            color: Arc::from(color),
        }
    }

    /// A vehicle missing either attribute cannot be parked.
    pub fn is_blank(&self) -> bool {
        self.registration_number.trim().is_empty() || self.color.trim().is_empty()
    }

    pub fn has_color(&self, color: &str) -> bool {
        eq_ignore_case(&self.color, color)
    }

    pub fn has_registration_number(&self, registration_number: &str) -> bool {
        eq_ignore_case(&self.registration_number, registration_number)
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.registration_number, self.color)
    }
}
