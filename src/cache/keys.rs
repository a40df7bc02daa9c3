//! Cache key layout for reference-table lookups.
//!
//! Every key is namespaced under `ReferenceTable:{table}:` so a whole table
//! can be invalidated with a single prefix removal. Value-based keys are
//! lower-cased to keep lookups case-insensitive.

use crate::models::ReferenceTable;

const KEY_PREFIX: &str = "ReferenceTable";

/// Key for the full contents of a table.
pub fn get_all_key(table: ReferenceTable) -> String {
    format!("{}:{}:GetAll", KEY_PREFIX, table)
}

/// Key for a single row looked up by id.
pub fn get_by_id_key(table: ReferenceTable, id: &str) -> String {
    format!("{}:{}:GetById:{}", KEY_PREFIX, table, id)
}

/// Key for a single row looked up by value. The value segment is
/// lower-cased; an absent value leaves the segment empty.
pub fn get_by_value_key(table: ReferenceTable, value: Option<&str>) -> String {
    let normalized = value.map(str::to_lowercase).unwrap_or_default();
    format!("{}:{}:GetByValue:{}", KEY_PREFIX, table, normalized)
}

/// Prefix shared by every key of a table, used for bulk invalidation.
pub fn table_pattern(table: ReferenceTable) -> String {
    format!("{}:{}:", KEY_PREFIX, table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_get_all_key_format() {
        assert_eq!(
            get_all_key(ReferenceTable::DifficultyLevels),
            "ReferenceTable:DifficultyLevels:GetAll"
        );
    }

    #[test]
    fn test_get_by_id_key_format() {
        assert_eq!(
            get_by_id_key(ReferenceTable::Equipment, "equipment-12345"),
            "ReferenceTable:Equipment:GetById:equipment-12345"
        );
    }

    #[test]
    fn test_get_by_value_key_format() {
        assert_eq!(
            get_by_value_key(ReferenceTable::MuscleGroups, Some("Biceps")),
            "ReferenceTable:MuscleGroups:GetByValue:biceps"
        );
    }

    #[test]
    fn test_get_by_value_key_normalizes_case() {
        let expected = "ReferenceTable:BodyParts:GetByValue:chest";
        assert_eq!(get_by_value_key(ReferenceTable::BodyParts, Some("CHEST")), expected);
        assert_eq!(get_by_value_key(ReferenceTable::BodyParts, Some("Chest")), expected);
        assert_eq!(get_by_value_key(ReferenceTable::BodyParts, Some("chest")), expected);
    }

    #[test]
    fn test_get_by_value_key_handles_missing_value() {
        assert_eq!(
            get_by_value_key(ReferenceTable::MetricTypes, None),
            "ReferenceTable:MetricTypes:GetByValue:"
        );
    }

    #[test]
    fn test_table_pattern_format() {
        assert_eq!(
            table_pattern(ReferenceTable::MovementPatterns),
            "ReferenceTable:MovementPatterns:"
        );
    }

    #[test]
    fn test_all_keys_share_the_table_pattern() {
        for table in ReferenceTable::ALL {
            let pattern = table_pattern(table);
            assert!(get_all_key(table).starts_with(&pattern));
            assert!(get_by_id_key(table, "test-id").starts_with(&pattern));
            assert!(get_by_value_key(table, Some("test-value")).starts_with(&pattern));
            assert!(get_all_key(table).ends_with(":GetAll"));
        }
    }
}
