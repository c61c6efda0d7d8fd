use tracing::debug;

use crate::error::{Result, TrainingError};
use crate::models::{Modality, Training};

/// Build the training described by a sensor package.
///
/// The tag selects the workout type and the readings are unpacked
/// positionally into that type's fields:
///
/// - `SWM`: action, duration, weight, pool length, pool count
/// - `RUN`: action, duration, weight
/// - `WLK`: action, duration, weight, height
pub fn read_package(tag: &str, readings: &[f64]) -> Result<Training> {
    let modality: Modality = tag.parse()?;

    if readings.len() != modality.arity() {
        return Err(TrainingError::ArityMismatch {
            modality,
            expected: modality.arity(),
            actual: readings.len(),
        });
    }

    debug!(%modality, ?readings, "Dispatching sensor package");

    let (action, duration, weight) = (readings[0], readings[1], readings[2]);

    match modality {
        Modality::Running => Training::running(action, duration, weight),
        Modality::Walking => Training::walking(action, duration, weight, readings[3]),
        Modality::Swimming => {
            Training::swimming(action, duration, weight, readings[3], readings[4])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_read_running_package() {
        let training = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();

        assert_eq!(training, Training::running(15000.0, 1.0, 75.0).unwrap());
    }

    #[test]
    fn test_read_walking_package() {
        let training = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();

        assert_eq!(training, Training::walking(9000.0, 1.0, 75.0, 180.0).unwrap());
    }

    #[test]
    fn test_read_swimming_package() {
        let training = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();

        assert_eq!(training, Training::swimming(720.0, 1.0, 80.0, 25.0, 40.0).unwrap());
    }

    #[test]
    fn test_unknown_tag() {
        let result = read_package("XYZ", &[1.0, 2.0, 3.0]);

        assert_eq!(result, Err(TrainingError::UnknownModality("XYZ".to_string())));
    }

    #[test]
    fn test_too_few_readings() {
        let result = read_package("SWM", &[720.0, 1.0, 80.0]);

        assert_eq!(
            result,
            Err(TrainingError::ArityMismatch {
                modality: Modality::Swimming,
                expected: 5,
                actual: 3,
            })
        );
    }

    #[test]
    fn test_too_many_readings() {
        let result = read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]);

        assert_matches!(
            result,
            Err(TrainingError::ArityMismatch { expected: 3, actual: 4, .. })
        );
    }

    #[test]
    fn test_fractional_readings_are_accepted() {
        let summary = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 12.5])
            .unwrap()
            .show_training_info();

        assert!((summary.speed - 0.3125).abs() < 1e-9);
        assert!(summary
            .get_message()
            .ends_with("Дистанция: 0.994 км; Ср. скорость: 0.312 км/ч; Потрачено ккал: 226.000."));

        let running = read_package("RUN", &[100.5, 1.0, 75.0]).unwrap();
        assert_eq!(running, Training::running(100.5, 1.0, 75.0).unwrap());
    }

    #[test]
    fn test_zero_duration_is_rejected() {
        let result = read_package("WLK", &[9000.0, 0.0, 75.0, 180.0]);

        assert_matches!(
            result,
            Err(TrainingError::DomainError { field: "длительность", .. })
        );
    }
}
