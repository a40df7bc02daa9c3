use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The four relationship kinds supported by exercise linking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseLinkType {
    #[serde(rename = "warmup")]
    Warmup,
    #[serde(rename = "cooldown")]
    Cooldown,
    #[serde(rename = "alternative")]
    Alternative,
    #[serde(rename = "workout")]
    Workout,
}

impl ExerciseLinkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseLinkType::Warmup => "warmup",
            ExerciseLinkType::Cooldown => "cooldown",
            ExerciseLinkType::Alternative => "alternative",
            ExerciseLinkType::Workout => "workout",
        }
    }

    pub fn from_value(value: &str) -> Option<ExerciseLinkType> {
        match value.to_lowercase().as_str() {
            "warmup" => Some(ExerciseLinkType::Warmup),
            "cooldown" => Some(ExerciseLinkType::Cooldown),
            "alternative" => Some(ExerciseLinkType::Alternative),
            "workout" => Some(ExerciseLinkType::Workout),
            _ => None,
        }
    }

    /// Warmup and cooldown links carry a display order; alternatives and
    /// workout links are unordered collections.
    pub fn is_ordered(&self) -> bool {
        matches!(self, ExerciseLinkType::Warmup | ExerciseLinkType::Cooldown)
    }
}

impl fmt::Display for ExerciseLinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLink {
    pub id: Uuid,
    pub source_exercise_id: String,
    pub target_exercise_id: String,
    pub target_exercise_name: String,
    pub link_type: ExerciseLinkType,
    pub display_order: u32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExerciseLink {
    pub target_exercise_id: String,
    pub link_type: ExerciseLinkType,
    pub display_order: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateExerciseLink {
    pub display_order: Option<u32>,
    pub is_active: Option<bool>,
}
