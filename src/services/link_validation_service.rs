use crate::error::DomainError;
use crate::models::{Exercise, ExerciseLink, ExerciseLinkType};

/// Validation rules for creating exercise links. The rules mirror the
/// backend's: REST exercises never link, only Workout/Warmup/Cooldown typed
/// exercises may link, no self references, no duplicates of an active link,
/// no direct circular references, and alternatives must share a type.
#[derive(Debug, Default)]
pub struct LinkValidationService;

impl LinkValidationService {
    pub fn new() -> Self {
        LinkValidationService
    }

    /// Whether an exercise is allowed to have links at all.
    pub fn validate_exercise_can_link(&self, exercise: &Exercise) -> Result<(), DomainError> {
        if exercise.is_rest() {
            return Err(DomainError::validation(
                "REST exercises cannot have relationships with other exercises",
            ));
        }

        let can_link = exercise.has_type("workout")
            || exercise.has_type("warmup")
            || exercise.has_type("cooldown");
        if !can_link {
            return Err(DomainError::validation(format!(
                "only exercises of type Workout, Warmup, or Cooldown can have links; \
                 this exercise has types: {}",
                exercise
                    .exercise_types
                    .iter()
                    .map(|t| t.value.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )));
        }

        Ok(())
    }

    /// Alternative links additionally require the two exercises to share at
    /// least one exercise type.
    pub fn validate_alternative_compatibility(
        &self,
        source: &Exercise,
        target: &Exercise,
    ) -> Result<(), DomainError> {
        if source.id == target.id {
            return Err(DomainError::validation(
                "an exercise cannot be an alternative to itself",
            ));
        }

        let source_types = source.type_values();
        let target_types = target.type_values();
        if source_types.is_empty() {
            return Err(DomainError::validation(
                "source exercise must have at least one exercise type",
            ));
        }
        if target_types.is_empty() {
            return Err(DomainError::validation(
                "target exercise must have at least one exercise type",
            ));
        }

        let shares_type = source_types.iter().any(|t| target_types.contains(t));
        if !shares_type {
            return Err(DomainError::validation(
                "alternative exercises must share at least one exercise type",
            ));
        }

        Ok(())
    }

    pub fn validate_no_duplicate(
        &self,
        existing: &[ExerciseLink],
        target_exercise_id: &str,
        link_type: ExerciseLinkType,
    ) -> Result<(), DomainError> {
        let duplicate = existing.iter().any(|link| {
            link.target_exercise_id == target_exercise_id
                && link.link_type == link_type
                && link.is_active
        });
        if duplicate {
            return Err(DomainError::DuplicateLink(link_type));
        }
        Ok(())
    }

    /// Direct cycle check: the target must not already link back to the
    /// source. Deeper graph traversal is left to the backend.
    pub fn validate_no_circular_reference(
        &self,
        source_exercise_id: &str,
        target_links: &[ExerciseLink],
    ) -> Result<(), DomainError> {
        let cycles = target_links
            .iter()
            .any(|link| link.target_exercise_id == source_exercise_id && link.is_active);
        if cycles {
            return Err(DomainError::CircularReference);
        }
        Ok(())
    }

    /// Full pre-flight validation for a new link.
    pub fn validate_create_link(
        &self,
        source: &Exercise,
        target: &Exercise,
        link_type: ExerciseLinkType,
        existing_links: &[ExerciseLink],
        target_links: &[ExerciseLink],
    ) -> Result<(), DomainError> {
        self.validate_exercise_can_link(source)?;

        if source.id == target.id {
            return Err(DomainError::validation(
                "an exercise cannot be linked to itself",
            ));
        }

        if link_type == ExerciseLinkType::Alternative {
            self.validate_alternative_compatibility(source, target)?;
        }

        self.validate_no_duplicate(existing_links, &target.id, link_type)?;
        self.validate_no_circular_reference(&source.id, target_links)?;

        Ok(())
    }
}
