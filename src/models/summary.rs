use std::fmt;

use serde::Serialize;

/// Computed figures for one workout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingSummary {
    pub training_type: &'static str,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

impl TrainingSummary {
    /// Human-readable summary line
    pub fn get_message(&self) -> String {
        self.to_string()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

// Field order, labels and three-digit precision are fixed; downstream
// consumers match on this exact line.
impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
