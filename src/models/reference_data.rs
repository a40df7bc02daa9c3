use serde::{Deserialize, Serialize};
use std::fmt;

/// A single row of a reference table (difficulty level, equipment, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub id: String,
    pub value: String,
    pub description: Option<String>,
}

impl ReferenceData {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        ReferenceData {
            id: id.into(),
            value: value.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// The reference tables served by the admin API. The string form is the
/// segment used inside cache keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceTable {
    BodyParts,
    DifficultyLevels,
    Equipment,
    ExerciseTypes,
    KineticChainTypes,
    MetricTypes,
    MovementPatterns,
    MuscleGroups,
    MuscleRoles,
    WorkoutCategories,
    WorkoutObjectives,
    WorkoutStates,
}

impl ReferenceTable {
    pub const ALL: [ReferenceTable; 12] = [
        ReferenceTable::BodyParts,
        ReferenceTable::DifficultyLevels,
        ReferenceTable::Equipment,
        ReferenceTable::ExerciseTypes,
        ReferenceTable::KineticChainTypes,
        ReferenceTable::MetricTypes,
        ReferenceTable::MovementPatterns,
        ReferenceTable::MuscleGroups,
        ReferenceTable::MuscleRoles,
        ReferenceTable::WorkoutCategories,
        ReferenceTable::WorkoutObjectives,
        ReferenceTable::WorkoutStates,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceTable::BodyParts => "BodyParts",
            ReferenceTable::DifficultyLevels => "DifficultyLevels",
            ReferenceTable::Equipment => "Equipment",
            ReferenceTable::ExerciseTypes => "ExerciseTypes",
            ReferenceTable::KineticChainTypes => "KineticChainTypes",
            ReferenceTable::MetricTypes => "MetricTypes",
            ReferenceTable::MovementPatterns => "MovementPatterns",
            ReferenceTable::MuscleGroups => "MuscleGroups",
            ReferenceTable::MuscleRoles => "MuscleRoles",
            ReferenceTable::WorkoutCategories => "WorkoutCategories",
            ReferenceTable::WorkoutObjectives => "WorkoutObjectives",
            ReferenceTable::WorkoutStates => "WorkoutStates",
        }
    }
}

impl fmt::Display for ReferenceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
