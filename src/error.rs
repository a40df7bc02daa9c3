use thiserror::Error;

use crate::models::{ExerciseLinkType, WorkoutState};

/// Typed failures surfaced by the domain services.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("{entity} not found: {identifier}")]
    NotFound { entity: String, identifier: String },

    #[error("a {0} link to this exercise already exists")]
    DuplicateLink(ExerciseLinkType),

    #[error("this would create a circular reference between the two exercises")]
    CircularReference,

    #[error("invalid workout state transition: {from} -> {to}")]
    InvalidStateTransition {
        from: WorkoutState,
        to: WorkoutState,
    },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }

    pub fn not_found(entity: impl Into<String>, identifier: impl Into<String>) -> Self {
        DomainError::NotFound {
            entity: entity.into(),
            identifier: identifier.into(),
        }
    }
}
