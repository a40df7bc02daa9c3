use serde::{Deserialize, Serialize};

use super::exercise_link::ExerciseLinkType;
use super::reference_data::ReferenceData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MuscleRole {
    #[serde(rename = "primary")]
    Primary,
    #[serde(rename = "secondary")]
    Secondary,
    #[serde(rename = "stabilizer")]
    Stabilizer,
}

impl MuscleRole {
    /// Parses the role from a reference value, case-insensitively.
    pub fn from_value(value: &str) -> Option<MuscleRole> {
        match value.to_lowercase().as_str() {
            "primary" => Some(MuscleRole::Primary),
            "secondary" => Some(MuscleRole::Secondary),
            "stabilizer" => Some(MuscleRole::Stabilizer),
            _ => None,
        }
    }
}

/// A muscle group paired with the role it plays in an exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuscleGroupAssignment {
    pub muscle_group: ReferenceData,
    pub role: MuscleRole,
}

impl MuscleGroupAssignment {
    pub fn new(muscle_group: ReferenceData, role: MuscleRole) -> Self {
        MuscleGroupAssignment { muscle_group, role }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub difficulty: Option<ReferenceData>,
    pub exercise_types: Vec<ReferenceData>,
    pub muscle_groups: Vec<MuscleGroupAssignment>,
    pub is_active: bool,
}

impl Exercise {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Exercise {
            id: id.into(),
            name: name.into(),
            description: None,
            difficulty: None,
            exercise_types: Vec::new(),
            muscle_groups: Vec::new(),
            is_active: true,
        }
    }

    /// Case-insensitive check against the exercise's type values.
    pub fn has_type(&self, type_value: &str) -> bool {
        self.exercise_types
            .iter()
            .any(|t| t.value.eq_ignore_ascii_case(type_value))
    }

    /// REST exercises are excluded from all linking.
    pub fn is_rest(&self) -> bool {
        self.has_type("rest")
    }

    /// Lower-cased type values, for set comparisons between exercises.
    pub fn type_values(&self) -> Vec<String> {
        self.exercise_types
            .iter()
            .map(|t| t.value.to_lowercase())
            .collect()
    }

    /// Lower-cased muscle group values for the given role.
    pub fn muscles_with_role(&self, role: MuscleRole) -> Vec<String> {
        self.muscle_groups
            .iter()
            .filter(|mg| mg.role == role)
            .map(|mg| mg.muscle_group.value.to_lowercase())
            .collect()
    }

    /// The linking contexts this exercise participates in, derived from its
    /// types. Exercises without any recognized context default to Workout.
    pub fn link_contexts(&self) -> Vec<ExerciseLinkType> {
        let mut contexts = Vec::new();
        if self.has_type("workout") {
            contexts.push(ExerciseLinkType::Workout);
        }
        if self.has_type("warmup") {
            contexts.push(ExerciseLinkType::Warmup);
        }
        if self.has_type("cooldown") {
            contexts.push(ExerciseLinkType::Cooldown);
        }
        if contexts.is_empty() {
            contexts.push(ExerciseLinkType::Workout);
        }
        contexts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise_with_types(types: &[&str]) -> Exercise {
        let mut exercise = Exercise::new("exercise-1", "Push-ups");
        exercise.exercise_types = types
            .iter()
            .enumerate()
            .map(|(i, t)| ReferenceData::new(format!("type-{}", i), *t))
            .collect();
        exercise
    }

    #[test]
    fn test_has_type_is_case_insensitive() {
        let exercise = exercise_with_types(&["Workout"]);
        assert!(exercise.has_type("workout"));
        assert!(exercise.has_type("WORKOUT"));
        assert!(!exercise.has_type("warmup"));
    }

    #[test]
    fn test_rest_detection() {
        assert!(exercise_with_types(&["REST"]).is_rest());
        assert!(!exercise_with_types(&["Workout"]).is_rest());
    }

    #[test]
    fn test_link_contexts_follow_types() {
        let exercise = exercise_with_types(&["Workout", "Warmup"]);
        assert_eq!(
            exercise.link_contexts(),
            vec![ExerciseLinkType::Workout, ExerciseLinkType::Warmup]
        );
    }

    #[test]
    fn test_link_contexts_default_to_workout() {
        let exercise = exercise_with_types(&[]);
        assert_eq!(exercise.link_contexts(), vec![ExerciseLinkType::Workout]);
    }
}
