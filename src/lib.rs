// Library exports for the fitness tracker core
// The CLI crate and the integration tests build on these modules

pub mod error;
pub mod models;
pub mod services;

pub use error::TrainingError;
pub use models::{Modality, Training, TrainingSummary, WorkoutRecord};
pub use services::{process_packages, read_package, OutputFormat};
