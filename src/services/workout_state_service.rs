use chrono::Utc;
use tracing::info;

use crate::error::DomainError;
use crate::models::{WorkoutState, WorkoutTemplate};

/// The fixed lifecycle: drafts can be published or archived, production
/// templates can only be archived, and archived templates can be revived
/// back to draft. Same-state "transitions" are not allowed.
pub fn can_transition(from: WorkoutState, to: WorkoutState) -> bool {
    use WorkoutState::*;
    matches!(
        (from, to),
        (Draft, Production) | (Draft, Archived) | (Production, Archived) | (Archived, Draft)
    )
}

/// String-level variant used where states arrive as raw reference values.
/// Comparison is case-insensitive; unrecognized states never transition.
pub fn can_transition_values(from: &str, to: &str) -> bool {
    match (WorkoutState::from_value(from), WorkoutState::from_value(to)) {
        (Some(from), Some(to)) => can_transition(from, to),
        _ => false,
    }
}

#[derive(Debug, Default)]
pub struct WorkoutStateService;

impl WorkoutStateService {
    pub fn new() -> Self {
        WorkoutStateService
    }

    /// Moves a template to the target state if the lifecycle allows it.
    pub fn change_state(
        &self,
        template: &mut WorkoutTemplate,
        target: WorkoutState,
    ) -> Result<(), DomainError> {
        if !can_transition(template.workout_state, target) {
            return Err(DomainError::InvalidStateTransition {
                from: template.workout_state,
                to: target,
            });
        }

        info!(
            template_id = %template.id,
            from = %template.workout_state,
            to = %target,
            "workout template state changed"
        );
        template.workout_state = target;
        template.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_allowed_transitions() {
        use WorkoutState::*;
        assert!(can_transition(Draft, Production));
        assert!(can_transition(Draft, Archived));
        assert!(can_transition(Production, Archived));
        assert!(can_transition(Archived, Draft));
    }

    #[test]
    fn test_forbidden_transitions() {
        use WorkoutState::*;
        assert!(!can_transition(Production, Draft));
        assert!(!can_transition(Archived, Production));
        assert!(!can_transition(Draft, Draft));
        assert!(!can_transition(Production, Production));
        assert!(!can_transition(Archived, Archived));
    }

    #[test]
    fn test_value_level_check_is_case_insensitive() {
        assert!(can_transition_values("DRAFT", "PRODUCTION"));
        assert!(can_transition_values("draft", "production"));
        assert!(can_transition_values("Archived", "Draft"));
        assert!(!can_transition_values("PRODUCTION", "DRAFT"));
        assert!(!can_transition_values("DRAFT", "DRAFT"));
    }

    #[test]
    fn test_unknown_states_never_transition() {
        assert!(!can_transition_values("PUBLISHED", "PRODUCTION"));
        assert!(!can_transition_values("DRAFT", "LIVE"));
        assert!(!can_transition_values("", ""));
    }

    #[test]
    fn test_change_state_applies_valid_transition() {
        let service = WorkoutStateService::new();
        let mut template = WorkoutTemplate::new("template-1", "Test Template");

        service
            .change_state(&mut template, WorkoutState::Production)
            .unwrap();
        assert_eq!(template.workout_state, WorkoutState::Production);
    }

    #[test]
    fn test_change_state_rejects_invalid_transition() {
        let service = WorkoutStateService::new();
        let mut template = WorkoutTemplate::new("template-1", "Test Template");
        template.workout_state = WorkoutState::Production;

        let result = service.change_state(&mut template, WorkoutState::Draft);
        assert_matches!(
            result,
            Err(DomainError::InvalidStateTransition {
                from: WorkoutState::Production,
                to: WorkoutState::Draft,
            })
        );
        assert_eq!(template.workout_state, WorkoutState::Production);
    }
}
