use std::fmt;
use std::str::FromStr;

use crate::error::TrainingError;

/// Workout type reported by the sensor package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modality {
    Running,
    Walking,
    Swimming,
}

impl Modality {
    pub const ALL: [Modality; 3] = [Modality::Swimming, Modality::Running, Modality::Walking];

    /// Three-letter tag used by the sensor packages
    pub fn tag(&self) -> &'static str {
        match self {
            Modality::Running => "RUN",
            Modality::Walking => "WLK",
            Modality::Swimming => "SWM",
        }
    }

    /// Name printed in the summary line
    pub fn display_name(&self) -> &'static str {
        match self {
            Modality::Running => "Running",
            Modality::Walking => "SportsWalking",
            Modality::Swimming => "Swimming",
        }
    }

    /// Number of positional readings a package of this type carries
    pub fn arity(&self) -> usize {
        match self {
            Modality::Running => 3,
            Modality::Walking => 4,
            Modality::Swimming => 5,
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Modality {
    type Err = TrainingError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Modality::ALL
            .into_iter()
            .find(|modality| modality.tag() == tag)
            .ok_or_else(|| TrainingError::UnknownModality(tag.to_string()))
    }
}
