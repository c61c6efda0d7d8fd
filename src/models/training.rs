use crate::error::{Result, TrainingError};
use crate::models::{Modality, TrainingSummary};

/// Conversion factors shared by every workout type
pub mod constants {
    pub const M_IN_KM: f64 = 1000.0;
    pub const MIN_IN_H: f64 = 60.0;

    pub mod running {
        pub const LEN_STEP: f64 = 0.65;
        pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
        pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;
    }

    pub mod walking {
        pub const LEN_STEP: f64 = 0.65;
        pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
        pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
        pub const KMH_IN_MSEC: f64 = 0.278;
        pub const CM_IN_M: f64 = 100.0;
    }

    pub mod swimming {
        /// One stroke, in meters
        pub const LEN_STROKE: f64 = 1.38;
        pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
        pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;
    }
}

use constants::{running, swimming, walking, M_IN_KM, MIN_IN_H};

/// Readings common to every workout type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Workout {
    action: f64,
    duration_h: f64,
    weight_kg: f64,
}

impl Workout {
    /// Validate the shared readings.
    ///
    /// Duration is a divisor in every speed formula, so it must be strictly
    /// positive; action and weight only have to be non-negative finite numbers.
    pub fn new(action: f64, duration_h: f64, weight_kg: f64) -> Result<Self> {
        Ok(Self {
            action: non_negative("действия", action)?,
            duration_h: positive("длительность", duration_h)?,
            weight_kg: non_negative("вес", weight_kg)?,
        })
    }

    /// Steps or strokes counted by the sensor
    pub fn action(&self) -> f64 {
        self.action
    }

    pub fn duration_h(&self) -> f64 {
        self.duration_h
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

/// A single workout, ready to be evaluated
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Training {
    Running(Workout),
    Walking {
        workout: Workout,
        height_cm: f64,
    },
    Swimming {
        workout: Workout,
        pool_length_m: f64,
        pool_count: f64,
    },
}

impl Training {
    pub fn running(action: f64, duration_h: f64, weight_kg: f64) -> Result<Self> {
        Ok(Training::Running(Workout::new(action, duration_h, weight_kg)?))
    }

    pub fn walking(action: f64, duration_h: f64, weight_kg: f64, height_cm: f64) -> Result<Self> {
        Ok(Training::Walking {
            workout: Workout::new(action, duration_h, weight_kg)?,
            height_cm: positive("рост", height_cm)?,
        })
    }

    pub fn swimming(
        action: f64,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_count: f64,
    ) -> Result<Self> {
        Ok(Training::Swimming {
            workout: Workout::new(action, duration_h, weight_kg)?,
            pool_length_m: non_negative("длина бассейна", pool_length_m)?,
            pool_count: non_negative("количество бассейнов", pool_count)?,
        })
    }

    pub fn modality(&self) -> Modality {
        match self {
            Training::Running(_) => Modality::Running,
            Training::Walking { .. } => Modality::Walking,
            Training::Swimming { .. } => Modality::Swimming,
        }
    }

    pub fn workout(&self) -> &Workout {
        match self {
            Training::Running(workout)
            | Training::Walking { workout, .. }
            | Training::Swimming { workout, .. } => workout,
        }
    }

    fn step_length(&self) -> f64 {
        match self {
            Training::Running(_) => running::LEN_STEP,
            Training::Walking { .. } => walking::LEN_STEP,
            Training::Swimming { .. } => swimming::LEN_STROKE,
        }
    }

    /// Distance covered, in kilometers
    pub fn distance(&self) -> f64 {
        self.workout().action * self.step_length() / M_IN_KM
    }

    /// Mean speed, in km/h
    ///
    /// Swimming measures speed from pool laps rather than from strokes, so
    /// its speed does not depend on the action count.
    pub fn mean_speed(&self) -> f64 {
        match self {
            Training::Swimming {
                workout,
                pool_length_m,
                pool_count,
            } => pool_length_m * pool_count / M_IN_KM / workout.duration_h,
            _ => self.distance() / self.workout().duration_h,
        }
    }

    /// Calories spent during the workout, in kcal
    pub fn spent_calories(&self) -> f64 {
        let speed = self.mean_speed();
        match self {
            Training::Running(workout) => {
                (running::CALORIES_MEAN_SPEED_MULTIPLIER * speed
                    + running::CALORIES_MEAN_SPEED_SHIFT)
                    * workout.weight_kg
                    / M_IN_KM
                    * workout.duration_h
                    * MIN_IN_H
            }
            Training::Walking { workout, height_cm } => {
                (walking::CALORIES_WEIGHT_MULTIPLIER * workout.weight_kg
                    + ((walking::KMH_IN_MSEC * speed).powi(2) / (height_cm / walking::CM_IN_M))
                        * walking::CALORIES_SPEED_HEIGHT_MULTIPLIER
                        * workout.weight_kg)
                    * (MIN_IN_H * workout.duration_h)
            }
            Training::Swimming { workout, .. } => {
                (speed + swimming::CALORIES_MEAN_SPEED_SHIFT)
                    * swimming::CALORIES_WEIGHT_MULTIPLIER
                    * workout.weight_kg
                    * workout.duration_h
            }
        }
    }

    /// Evaluate the workout into its summary record
    pub fn show_training_info(&self) -> TrainingSummary {
        TrainingSummary {
            training_type: self.modality().display_name(),
            duration: self.workout().duration_h,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(TrainingError::domain(field, value, "значение должно быть конечным числом"));
    }
    if value <= 0.0 {
        return Err(TrainingError::domain(field, value, "значение должно быть больше нуля"));
    }
    Ok(value)
}

fn non_negative(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(TrainingError::domain(field, value, "значение должно быть конечным числом"));
    }
    if value < 0.0 {
        return Err(TrainingError::domain(field, value, "значение не может быть отрицательным"));
    }
    Ok(value)
}
