use chrono::Utc;
use std::collections::HashMap;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::DomainError;
use crate::models::{
    CreateExerciseLink, Exercise, ExerciseLink, ExerciseLinkType, UpdateExerciseLink,
};
use crate::services::link_compatibility_service::{rank_alternatives, ScoredCandidate};
use crate::services::link_validation_service::LinkValidationService;

/// Manages the four-way link collection of one exercise: warmups, cooldowns,
/// alternatives, and workout relationships. Warmup and cooldown views are
/// ordered by display order; the other two are plain collections.
pub struct ExerciseLinkService {
    exercise: Exercise,
    links: Vec<ExerciseLink>,
    validation: LinkValidationService,
}

impl ExerciseLinkService {
    pub fn for_exercise(exercise: Exercise) -> Self {
        Self::with_links(exercise, Vec::new())
    }

    pub fn with_links(exercise: Exercise, links: Vec<ExerciseLink>) -> Self {
        ExerciseLinkService {
            exercise,
            links,
            validation: LinkValidationService::new(),
        }
    }

    pub fn exercise(&self) -> &Exercise {
        &self.exercise
    }

    pub fn links(&self) -> &[ExerciseLink] {
        &self.links
    }

    fn links_of_type(&self, link_type: ExerciseLinkType) -> Vec<&ExerciseLink> {
        let mut links: Vec<&ExerciseLink> = self
            .links
            .iter()
            .filter(|l| l.link_type == link_type && l.is_active)
            .collect();
        if link_type.is_ordered() {
            links.sort_by_key(|l| l.display_order);
        }
        links
    }

    pub fn warmup_links(&self) -> Vec<&ExerciseLink> {
        self.links_of_type(ExerciseLinkType::Warmup)
    }

    pub fn cooldown_links(&self) -> Vec<&ExerciseLink> {
        self.links_of_type(ExerciseLinkType::Cooldown)
    }

    pub fn alternative_links(&self) -> Vec<&ExerciseLink> {
        self.links_of_type(ExerciseLinkType::Alternative)
    }

    pub fn workout_links(&self) -> Vec<&ExerciseLink> {
        self.links_of_type(ExerciseLinkType::Workout)
    }

    pub fn link_count(&self, link_type: ExerciseLinkType) -> usize {
        self.links_of_type(link_type).len()
    }

    /// Validates and adds a link to the target exercise. `target_links` are
    /// the target's own outgoing links, needed for the circular check.
    pub fn create_link(
        &mut self,
        target: &Exercise,
        request: CreateExerciseLink,
        target_links: &[ExerciseLink],
    ) -> Result<ExerciseLink, DomainError> {
        if target.id != request.target_exercise_id {
            return Err(DomainError::validation(
                "target exercise does not match the link request",
            ));
        }

        self.validation.validate_create_link(
            &self.exercise,
            target,
            request.link_type,
            &self.links,
            target_links,
        )?;

        let display_order = match request.display_order {
            Some(order) => order,
            None if request.link_type.is_ordered() => self.next_display_order(request.link_type),
            None => 0,
        };

        let now = Utc::now();
        let link = ExerciseLink {
            id: Uuid::new_v4(),
            source_exercise_id: self.exercise.id.clone(),
            target_exercise_id: target.id.clone(),
            target_exercise_name: target.name.clone(),
            link_type: request.link_type,
            display_order,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        info!(
            source = %self.exercise.id,
            target = %target.id,
            link_type = %link.link_type,
            "exercise link created"
        );
        self.links.push(link.clone());
        Ok(link)
    }

    fn next_display_order(&self, link_type: ExerciseLinkType) -> u32 {
        self.links_of_type(link_type)
            .last()
            .map(|l| l.display_order.saturating_add(1))
            .unwrap_or(0)
    }

    pub fn update_link(
        &mut self,
        link_id: Uuid,
        update: UpdateExerciseLink,
    ) -> Result<&ExerciseLink, DomainError> {
        let link = self
            .links
            .iter_mut()
            .find(|l| l.id == link_id)
            .ok_or_else(|| DomainError::not_found("exercise link", link_id.to_string()))?;

        if let Some(order) = update.display_order {
            link.display_order = order;
        }
        if let Some(active) = update.is_active {
            link.is_active = active;
        }
        link.updated_at = Utc::now();
        Ok(link)
    }

    pub fn remove_link(&mut self, link_id: Uuid) -> Result<ExerciseLink, DomainError> {
        let position = self
            .links
            .iter()
            .position(|l| l.id == link_id)
            .ok_or_else(|| DomainError::not_found("exercise link", link_id.to_string()))?;
        let removed = self.links.remove(position);
        info!(
            source = %removed.source_exercise_id,
            target = %removed.target_exercise_id,
            link_type = %removed.link_type,
            "exercise link removed"
        );
        Ok(removed)
    }

    /// Applies new display orders to links of one type. Ids not present in
    /// the collection are ignored. Returns the number of links updated.
    pub fn reorder_links(
        &mut self,
        link_type: ExerciseLinkType,
        new_orders: &HashMap<Uuid, u32>,
    ) -> usize {
        let now = Utc::now();
        let mut updated = 0;
        for link in self
            .links
            .iter_mut()
            .filter(|l| l.link_type == link_type)
        {
            if let Some(&order) = new_orders.get(&link.id) {
                if link.display_order != order {
                    link.display_order = order;
                    link.updated_at = now;
                    updated += 1;
                }
            }
        }
        debug!(link_type = %link_type, updated, "exercise links reordered");
        updated
    }

    /// Filters a pool of exercises down to valid targets for a link slot and
    /// ranks them by compatibility. Excludes the source itself, inactive
    /// exercises, REST exercises, and anything already linked with the same
    /// type. Ordered slots require the candidate to carry the matching type;
    /// alternatives require a shared type. The optional name filter is a
    /// case-insensitive substring match.
    pub fn link_candidates(
        &self,
        pool: &[Exercise],
        link_type: ExerciseLinkType,
        name_filter: Option<&str>,
    ) -> Vec<ScoredCandidate> {
        let linked: Vec<&str> = self
            .links_of_type(link_type)
            .iter()
            .map(|l| l.target_exercise_id.as_str())
            .collect();
        let name_filter = name_filter.map(str::to_lowercase);

        let candidates: Vec<Exercise> = pool
            .iter()
            .filter(|candidate| candidate.id != self.exercise.id)
            .filter(|candidate| candidate.is_active && !candidate.is_rest())
            .filter(|candidate| !linked.contains(&candidate.id.as_str()))
            .filter(|candidate| self.fits_slot(candidate, link_type))
            .filter(|candidate| match &name_filter {
                Some(filter) => candidate.name.to_lowercase().contains(filter),
                None => true,
            })
            .cloned()
            .collect();

        rank_alternatives(&self.exercise, candidates)
    }

    fn fits_slot(&self, candidate: &Exercise, link_type: ExerciseLinkType) -> bool {
        match link_type {
            ExerciseLinkType::Warmup => candidate.has_type("warmup"),
            ExerciseLinkType::Cooldown => candidate.has_type("cooldown"),
            ExerciseLinkType::Workout => candidate.has_type("workout"),
            ExerciseLinkType::Alternative => {
                let source_types = self.exercise.type_values();
                candidate
                    .type_values()
                    .iter()
                    .any(|t| source_types.contains(t))
            }
        }
    }
}
