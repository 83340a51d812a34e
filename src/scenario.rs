use crate::error::LotError;
use crate::lot::ParkingLot;
use crate::vehicle::Vehicle;
use serde::Deserialize;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("io: {0}")]
    Io(#[from] io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Lot(#[from] LotError),
}

/// Lot size plus the vehicles already parked when the shell opens.
#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub slots: i64,
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
}

impl Scenario {
    pub fn load_from_file(path: &Path) -> Result<Self, ScenarioError> {
        let data = std::fs::read_to_string(path)?;
        let scenario = Self::from_json(&data)?;
        info!(path = %path.display(), slots = scenario.slots, vehicles = scenario.vehicles.len(), "scenario loaded");
        Ok(scenario)
    }

    pub fn from_json(data: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Creates the lot and parks every vehicle in file order.
    pub fn build(self) -> Result<ParkingLot, ScenarioError> {
        let lot = ParkingLot::new(self.slots)?;
        for vehicle in self.vehicles {
            lot.reserve(vehicle)?;
        }
        Ok(lot)
    }
}
