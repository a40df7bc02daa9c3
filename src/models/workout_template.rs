use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::reference_data::ReferenceData;

/// Lifecycle stage of a workout template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutState {
    #[serde(rename = "DRAFT")]
    Draft,
    #[serde(rename = "PRODUCTION")]
    Production,
    #[serde(rename = "ARCHIVED")]
    Archived,
}

impl WorkoutState {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutState::Draft => "DRAFT",
            WorkoutState::Production => "PRODUCTION",
            WorkoutState::Archived => "ARCHIVED",
        }
    }

    /// Parses a state value case-insensitively. Unknown values yield None
    /// rather than an error so callers can treat them as "no transition".
    pub fn from_value(value: &str) -> Option<WorkoutState> {
        match value.to_uppercase().as_str() {
            "DRAFT" => Some(WorkoutState::Draft),
            "PRODUCTION" => Some(WorkoutState::Production),
            "ARCHIVED" => Some(WorkoutState::Archived),
            _ => None,
        }
    }
}

impl fmt::Display for WorkoutState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<ReferenceData>,
    pub difficulty: Option<ReferenceData>,
    pub workout_state: WorkoutState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkoutTemplate {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        WorkoutTemplate {
            id: id.into(),
            name: name.into(),
            description: None,
            category: None,
            difficulty: None,
            workout_state: WorkoutState::Draft,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value_is_case_insensitive() {
        assert_eq!(WorkoutState::from_value("draft"), Some(WorkoutState::Draft));
        assert_eq!(
            WorkoutState::from_value("Production"),
            Some(WorkoutState::Production)
        );
        assert_eq!(
            WorkoutState::from_value("ARCHIVED"),
            Some(WorkoutState::Archived)
        );
    }

    #[test]
    fn test_from_value_rejects_unknown_states() {
        assert_eq!(WorkoutState::from_value("PUBLISHED"), None);
        assert_eq!(WorkoutState::from_value(""), None);
    }

    #[test]
    fn test_new_templates_start_in_draft() {
        let template = WorkoutTemplate::new("template-1", "Upper Body Strength");
        assert_eq!(template.workout_state, WorkoutState::Draft);
    }
}
