// Business logic services

pub mod exercise_link_service;
pub mod link_compatibility_service;
pub mod link_validation_service;
pub mod reference_data_service;
pub mod workout_state_service;

pub use exercise_link_service::ExerciseLinkService;
pub use link_compatibility_service::{muscle_group_overlap, rank_alternatives, ScoredCandidate};
pub use link_validation_service::LinkValidationService;
pub use reference_data_service::{ReferenceDataProvider, ReferenceDataService};
pub use workout_state_service::{can_transition, can_transition_values, WorkoutStateService};
