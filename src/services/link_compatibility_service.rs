//! Compatibility scoring for alternative-exercise suggestions.
//!
//! The score is a weighted muscle-group overlap between two exercises:
//! primary-to-primary matches weigh 0.6, secondary-to-secondary 0.3, and
//! cross matches (primary against secondary) 0.1, normalized by the larger
//! muscle count and expressed as a 0-100 percentage.

use std::collections::HashSet;

use crate::models::{Exercise, MuscleRole};

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub exercise: Exercise,
    pub score: u8,
}

fn muscle_set(exercise: &Exercise, role: MuscleRole) -> HashSet<String> {
    exercise.muscles_with_role(role).into_iter().collect()
}

/// Weighted muscle-group overlap percentage between two exercises, 0-100.
pub fn muscle_group_overlap(source: &Exercise, target: &Exercise) -> u8 {
    let source_primary = muscle_set(source, MuscleRole::Primary);
    let source_secondary = muscle_set(source, MuscleRole::Secondary);
    let target_primary = muscle_set(target, MuscleRole::Primary);
    let target_secondary = muscle_set(target, MuscleRole::Secondary);

    let source_total = source_primary.len() + source_secondary.len();
    let target_total = target_primary.len() + target_secondary.len();
    let max_muscles = source_total.max(target_total);
    if max_muscles == 0 {
        return 0;
    }

    let primary_overlap = source_primary.intersection(&target_primary).count();
    let secondary_overlap = source_secondary.intersection(&target_secondary).count();
    let cross_overlap = source_primary.intersection(&target_secondary).count()
        + source_secondary.intersection(&target_primary).count();

    let weighted = (primary_overlap as f64) * 0.6
        + (secondary_overlap as f64) * 0.3
        + (cross_overlap as f64) * 0.1;
    let percentage = (weighted / max_muscles as f64 * 100.0).round();

    percentage.clamp(0.0, 100.0) as u8
}

fn same_difficulty(source: &Exercise, target: &Exercise) -> bool {
    match (&source.difficulty, &target.difficulty) {
        (Some(a), Some(b)) => a.value.eq_ignore_ascii_case(&b.value),
        _ => false,
    }
}

/// Scores candidates against the source exercise and returns them ordered
/// best-first: by overlap score, then matching difficulty, then name.
pub fn rank_alternatives(source: &Exercise, candidates: Vec<Exercise>) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .map(|exercise| {
            let score = muscle_group_overlap(source, &exercise);
            ScoredCandidate { exercise, score }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| {
                same_difficulty(source, &b.exercise).cmp(&same_difficulty(source, &a.exercise))
            })
            .then_with(|| a.exercise.name.cmp(&b.exercise.name))
    });
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MuscleGroupAssignment, ReferenceData};

    fn exercise_with_muscles(
        id: &str,
        name: &str,
        primary: &[&str],
        secondary: &[&str],
    ) -> Exercise {
        let mut exercise = Exercise::new(id, name);
        exercise.muscle_groups = primary
            .iter()
            .map(|m| {
                MuscleGroupAssignment::new(ReferenceData::new(*m, *m), MuscleRole::Primary)
            })
            .chain(secondary.iter().map(|m| {
                MuscleGroupAssignment::new(ReferenceData::new(*m, *m), MuscleRole::Secondary)
            }))
            .collect();
        exercise
    }

    #[test]
    fn test_identical_primary_muscles_score_sixty() {
        let push_ups = exercise_with_muscles("ex-1", "Push-ups", &["Chest"], &[]);
        let incline = exercise_with_muscles("ex-2", "Incline Push-ups", &["Chest"], &[]);
        assert_eq!(muscle_group_overlap(&push_ups, &incline), 60);
    }

    #[test]
    fn test_disjoint_muscles_score_zero() {
        let push_ups = exercise_with_muscles("ex-1", "Push-ups", &["Chest"], &[]);
        let squats = exercise_with_muscles("ex-2", "Squats", &["Quadriceps"], &[]);
        assert_eq!(muscle_group_overlap(&push_ups, &squats), 0);
    }

    #[test]
    fn test_no_muscles_score_zero() {
        let a = exercise_with_muscles("ex-1", "A", &[], &[]);
        let b = exercise_with_muscles("ex-2", "B", &[], &[]);
        assert_eq!(muscle_group_overlap(&a, &b), 0);
    }

    #[test]
    fn test_overlap_is_case_insensitive() {
        let a = exercise_with_muscles("ex-1", "A", &["CHEST"], &[]);
        let b = exercise_with_muscles("ex-2", "B", &["chest"], &[]);
        assert_eq!(muscle_group_overlap(&a, &b), 60);
    }

    #[test]
    fn test_cross_matches_weigh_less_than_direct_matches() {
        let source = exercise_with_muscles("ex-1", "Source", &["Chest"], &["Triceps"]);
        let direct = exercise_with_muscles("ex-2", "Direct", &["Chest"], &["Triceps"]);
        // Swapped roles only produce cross matches.
        let crossed = exercise_with_muscles("ex-3", "Crossed", &["Triceps"], &["Chest"]);

        assert!(muscle_group_overlap(&source, &direct) > muscle_group_overlap(&source, &crossed));
    }

    #[test]
    fn test_rank_orders_best_match_first() {
        let source = exercise_with_muscles("source-1", "Push-ups", &["Chest"], &[]);
        let squats = exercise_with_muscles("ex-1", "Squats", &["Quadriceps"], &[]);
        let incline = exercise_with_muscles("ex-2", "Incline Push-ups", &["Chest"], &[]);

        let ranked = rank_alternatives(&source, vec![squats, incline]);
        assert_eq!(ranked[0].exercise.name, "Incline Push-ups");
        assert_eq!(ranked[1].exercise.name, "Squats");
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn test_rank_breaks_ties_by_matching_difficulty() {
        let mut source = exercise_with_muscles("source-1", "Push-ups", &["Chest"], &[]);
        source.difficulty = Some(ReferenceData::new("1", "Beginner"));

        let mut same = exercise_with_muscles("ex-1", "Wall Push-ups", &["Chest"], &[]);
        same.difficulty = Some(ReferenceData::new("1", "Beginner"));
        let mut harder = exercise_with_muscles("ex-2", "Archer Push-ups", &["Chest"], &[]);
        harder.difficulty = Some(ReferenceData::new("3", "Advanced"));

        let ranked = rank_alternatives(&source, vec![harder, same]);
        assert_eq!(ranked[0].exercise.name, "Wall Push-ups");
    }
}
