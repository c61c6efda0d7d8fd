use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Training;
use crate::services::read_package;

/// Raw sensor package: a workout tag plus its positional readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub tag: String,
    pub readings: Vec<f64>,
}

impl WorkoutRecord {
    pub fn new(tag: impl Into<String>, readings: Vec<f64>) -> Self {
        Self {
            tag: tag.into(),
            readings,
        }
    }

    /// Built-in demo packages
    pub fn sample_packages() -> Vec<Self> {
        vec![
            Self::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
            Self::new("RUN", vec![15000.0, 1.0, 75.0]),
            Self::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ]
    }

    pub fn to_training(&self) -> Result<Training> {
        read_package(&self.tag, &self.readings)
    }
}
