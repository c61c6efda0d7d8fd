use thiserror::Error;

use crate::models::Modality;

/// Failures that can occur while turning a record into a training summary.
///
/// Every variant is terminal for the record being processed only; the batch
/// driver reports it and moves on to the next record.
// Messages share the language of the summary line.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrainingError {
    #[error("Неизвестный тип тренировки: {0}")]
    UnknownModality(String),

    #[error("Тип тренировки {modality}: ожидается показаний: {expected}, получено: {actual}")]
    ArityMismatch {
        modality: Modality,
        expected: usize,
        actual: usize,
    },

    #[error("Некорректный показатель «{field}» = {value}: {reason}")]
    DomainError {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl TrainingError {
    pub(crate) fn domain(field: &'static str, value: f64, reason: &'static str) -> Self {
        TrainingError::DomainError {
            field,
            value,
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, TrainingError>;
