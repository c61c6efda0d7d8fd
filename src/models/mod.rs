pub mod modality;
pub mod record;
pub mod summary;
pub mod training;

pub use modality::Modality;
pub use record::WorkoutRecord;
pub use summary::TrainingSummary;
pub use training::{Training, Workout};
