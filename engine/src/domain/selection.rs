//! Selection state for pending bulk operations.
//!
//! A selection is always scoped to one candidate pool. The central invariant
//! is that an already-assigned candidate can never become selected: eligibility
//! is enforced at the point of selection, not deferred to submission. When the
//! pool changes under an active bulk flow the selection is rebuilt from the
//! new pool, never merged, so stale ids from a previous pool cannot survive.

use std::collections::BTreeSet;

use crate::domain::candidate::{Candidate, UserId};

/// Chosen candidate ids for a pending bulk operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: BTreeSet<UserId>,
    bulk_mode: bool,
}

impl SelectionState {
    /// An empty selection outside bulk mode.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: BTreeSet::new(),
            bulk_mode: false,
        }
    }

    /// Enters bulk mode and auto-selects every eligible candidate in `pool`.
    pub fn begin_bulk(&mut self, pool: &[Candidate]) {
        self.bulk_mode = true;
        self.auto_select_eligible(pool);
    }

    /// Leaves bulk mode and discards the selection.
    pub fn end_bulk(&mut self) {
        self.bulk_mode = false;
        self.selected.clear();
    }

    /// Whether a bulk flow is in progress.
    #[must_use]
    pub const fn is_bulk_mode(&self) -> bool {
        self.bulk_mode
    }

    /// Rebuilds the selection from every candidate not yet assigned.
    ///
    /// This replaces the previous selection wholesale; ids absent from `pool`
    /// are dropped even if they were selected before.
    pub fn auto_select_eligible(&mut self, pool: &[Candidate]) {
        self.selected = pool
            .iter()
            .filter(|candidate| !candidate.already_assigned())
            .map(Candidate::user_id)
            .collect();
    }

    /// Selects every eligible candidate, as an explicit user action.
    pub fn select_all_eligible(&mut self, pool: &[Candidate]) {
        self.auto_select_eligible(pool);
    }

    /// Flips membership for one candidate.
    ///
    /// A no-op when the id is not in `pool` or the candidate is already
    /// assigned.
    pub fn toggle(&mut self, user_id: UserId, pool: &[Candidate]) {
        let eligible = pool
            .iter()
            .any(|candidate| candidate.user_id() == user_id && !candidate.already_assigned());
        if !eligible {
            return;
        }
        if !self.selected.remove(&user_id) {
            self.selected.insert(user_id);
        }
    }

    /// Empties the selection without leaving bulk mode.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Re-scopes the selection after the pool changed.
    ///
    /// In bulk mode the auto-select behaviour re-runs over the new pool.
    /// Outside bulk mode existing choices are kept where the new pool still
    /// lists them as eligible and dropped otherwise.
    pub fn replace_pool(&mut self, pool: &[Candidate]) {
        if self.bulk_mode {
            self.auto_select_eligible(pool);
        } else {
            self.selected.retain(|user_id| {
                pool.iter().any(|candidate| {
                    candidate.user_id() == *user_id && !candidate.already_assigned()
                })
            });
        }
    }

    /// Whether `user_id` is currently selected.
    #[must_use]
    pub fn contains(&self, user_id: UserId) -> bool {
        self.selected.contains(&user_id)
    }

    /// Number of selected candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// The selected ids in ascending order.
    #[must_use]
    pub fn selected_ids(&self) -> Vec<UserId> {
        self.selected.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn student(assigned: bool) -> Candidate {
        Candidate::student(
            UserId::new(Uuid::new_v4()),
            "Ada Lovelace",
            "ada.lovelace@example.edu",
            2024,
            "Mathematics",
        )
        .with_already_assigned(assigned)
    }

    #[test]
    fn auto_select_skips_assigned_candidates() {
        let eligible = student(false);
        let assigned = student(true);
        let pool = vec![eligible.clone(), assigned.clone()];

        let mut selection = SelectionState::new();
        selection.auto_select_eligible(&pool);

        assert!(selection.contains(eligible.user_id()));
        assert!(!selection.contains(assigned.user_id()));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn toggle_flips_membership_for_eligible_candidates() {
        let candidate = student(false);
        let pool = vec![candidate.clone()];
        let mut selection = SelectionState::new();

        selection.toggle(candidate.user_id(), &pool);
        assert!(selection.contains(candidate.user_id()));

        selection.toggle(candidate.user_id(), &pool);
        assert!(!selection.contains(candidate.user_id()));
    }

    #[test]
    fn toggle_ignores_assigned_candidates() {
        let candidate = student(true);
        let pool = vec![candidate.clone()];
        let mut selection = SelectionState::new();

        selection.toggle(candidate.user_id(), &pool);

        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_ignores_ids_outside_the_pool() {
        let pool = vec![student(false)];
        let stranger = UserId::new(Uuid::new_v4());
        let mut selection = SelectionState::new();

        selection.toggle(stranger, &pool);

        assert!(selection.is_empty());
    }

    #[test]
    fn pool_changes_in_bulk_mode_rebuild_the_selection() {
        let first_pool = vec![student(false), student(false)];
        let mut selection = SelectionState::new();
        selection.begin_bulk(&first_pool);
        assert_eq!(selection.len(), 2);

        let survivor = student(false);
        let second_pool = vec![survivor.clone()];
        selection.replace_pool(&second_pool);

        assert_eq!(selection.selected_ids(), vec![survivor.user_id()]);
    }

    #[test]
    fn pool_changes_outside_bulk_mode_keep_surviving_choices() {
        let kept = student(false);
        let dropped = student(false);
        let pool = vec![kept.clone(), dropped.clone()];
        let mut selection = SelectionState::new();
        selection.toggle(kept.user_id(), &pool);
        selection.toggle(dropped.user_id(), &pool);

        selection.replace_pool(&[kept.clone()]);

        assert_eq!(selection.selected_ids(), vec![kept.user_id()]);
    }

    #[test]
    fn candidates_that_became_assigned_are_dropped_on_replace() {
        let candidate = student(false);
        let pool = vec![candidate.clone()];
        let mut selection = SelectionState::new();
        selection.toggle(candidate.user_id(), &pool);

        let refreshed = vec![candidate.clone().with_already_assigned(true)];
        selection.replace_pool(&refreshed);

        assert!(selection.is_empty());
    }

    #[test]
    fn ending_bulk_mode_discards_the_selection() {
        let pool = vec![student(false)];
        let mut selection = SelectionState::new();
        selection.begin_bulk(&pool);
        assert!(selection.is_bulk_mode());
        assert!(!selection.is_empty());

        selection.end_bulk();

        assert!(!selection.is_bulk_mode());
        assert!(selection.is_empty());
    }

    #[test]
    fn clear_keeps_bulk_mode_active() {
        let pool = vec![student(false)];
        let mut selection = SelectionState::new();
        selection.begin_bulk(&pool);

        selection.clear();

        assert!(selection.is_bulk_mode());
        assert!(selection.is_empty());
    }

    #[test]
    fn selected_ids_are_sorted_and_stable() {
        let mut pool = vec![student(false), student(false), student(false)];
        let mut selection = SelectionState::new();
        selection.select_all_eligible(&pool);

        pool.sort_by_key(Candidate::user_id);
        let expected: Vec<UserId> = pool.iter().map(Candidate::user_id).collect();
        assert_eq!(selection.selected_ids(), expected);
    }
}
