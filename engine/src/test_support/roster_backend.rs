//! In-memory roster backend implementing every engine port.
//!
//! One struct stands in for both the directory and the roster service so
//! integration tests can drive whole flows, outages included, without a
//! network. Wrap it in an `Arc` and hand clones to each service.
//!
//! An injected directory outage takes down the filtered listing only; the
//! coarse role listing stays up so the degraded fallback path can be
//! exercised end to end.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::candidate::{Candidate, RoleDetail, RosterRole, UserId};
use crate::domain::course::CourseId;
use crate::domain::filter::ServerFilter;
use crate::domain::ports::{
    CandidateDirectory, DirectoryError, RosterMutation, RosterMutationError, RosterQuery,
    RosterQueryError,
};
use crate::domain::roster::{AssignmentDisplay, AssignmentRecord};

#[derive(Debug, Clone)]
struct StoredAssignment {
    course_id: CourseId,
    role: RosterRole,
    display: AssignmentDisplay,
}

#[derive(Debug)]
struct BackendState {
    directory: Vec<Candidate>,
    assignments: Vec<StoredAssignment>,
    directory_outage: bool,
    mutation_outage: bool,
    query_outage: bool,
    rejections: HashMap<UserId, String>,
    assigned_at: DateTime<Utc>,
}

impl Default for BackendState {
    fn default() -> Self {
        Self {
            directory: Vec::new(),
            assignments: Vec::new(),
            directory_outage: false,
            mutation_outage: false,
            query_outage: false,
            rejections: HashMap::new(),
            assigned_at: DateTime::UNIX_EPOCH,
        }
    }
}

/// Scriptable in-memory directory and roster service.
#[derive(Debug, Default)]
pub struct InMemoryRosterBackend {
    state: Mutex<BackendState>,
}

impl InMemoryRosterBackend {
    /// Create an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add candidates to the directory population.
    pub fn seed_candidates(&self, candidates: impl IntoIterator<Item = Candidate>) {
        self.state().directory.extend(candidates);
    }

    /// Record an existing assignment for `candidate` on `course_id`.
    pub fn seed_assignment(&self, course_id: CourseId, candidate: &Candidate) {
        let mut state = self.state();
        let assigned_at = state.assigned_at;
        let display = display_for(candidate, assigned_at);
        state.assignments.push(StoredAssignment {
            course_id,
            role: candidate.role(),
            display,
        });
    }

    /// Make the filtered directory listing fail.
    pub fn set_directory_outage(&self, outage: bool) {
        self.state().directory_outage = outage;
    }

    /// Make assignment mutations fail with a transport error.
    pub fn set_mutation_outage(&self, outage: bool) {
        self.state().mutation_outage = outage;
    }

    /// Make roster listings fail with a transport error.
    pub fn set_query_outage(&self, outage: bool) {
        self.state().query_outage = outage;
    }

    /// Script a business rejection for every assignment of `user_id`.
    pub fn reject_assignments_for(&self, user_id: UserId, reason: impl Into<String>) {
        self.state().rejections.insert(user_id, reason.into());
    }

    /// Timestamp stamped onto subsequently created assignments.
    pub fn set_assigned_at(&self, assigned_at: DateTime<Utc>) {
        self.state().assigned_at = assigned_at;
    }

    fn state(&self) -> MutexGuard<'_, BackendState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn display_for(candidate: &Candidate, assigned_at: DateTime<Utc>) -> AssignmentDisplay {
    AssignmentDisplay {
        user_id: candidate.user_id(),
        display_name: candidate.display_name().to_owned(),
        email: candidate.email().to_owned(),
        assigned_at,
    }
}

fn matches_filter(candidate: &Candidate, filter: &ServerFilter) -> bool {
    match candidate.detail() {
        RoleDetail::Student { cohort, department } => {
            filter.cohort.is_none_or(|wanted| wanted == *cohort)
                && filter
                    .department
                    .as_deref()
                    .is_none_or(|wanted| wanted == department)
        }
        RoleDetail::Teacher { .. } => filter.is_empty(),
    }
}

#[async_trait]
impl CandidateDirectory for InMemoryRosterBackend {
    async fn list_eligible(
        &self,
        course_id: CourseId,
        role: RosterRole,
        filter: &ServerFilter,
    ) -> Result<Vec<Candidate>, DirectoryError> {
        let state = self.state();
        if state.directory_outage {
            return Err(DirectoryError::unavailable("injected directory outage"));
        }
        let pool = state
            .directory
            .iter()
            .filter(|candidate| candidate.role() == role && matches_filter(candidate, filter))
            .map(|candidate| {
                let assigned = state.assignments.iter().any(|assignment| {
                    assignment.course_id == course_id
                        && assignment.role == role
                        && assignment.display.user_id == candidate.user_id()
                });
                candidate.clone().with_already_assigned(assigned)
            })
            .collect();
        Ok(pool)
    }

    async fn list_all_of_role(&self, role: RosterRole) -> Result<Vec<Candidate>, DirectoryError> {
        let state = self.state();
        Ok(state
            .directory
            .iter()
            .filter(|candidate| candidate.role() == role)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl RosterMutation for InMemoryRosterBackend {
    async fn create_assignment(
        &self,
        course_id: CourseId,
        user_id: UserId,
        role: RosterRole,
    ) -> Result<AssignmentRecord, RosterMutationError> {
        let mut state = self.state();
        if state.mutation_outage {
            return Err(RosterMutationError::unavailable("injected roster outage"));
        }
        if let Some(reason) = state.rejections.get(&user_id) {
            return Err(RosterMutationError::rejected(reason.clone()));
        }
        let duplicate = state.assignments.iter().any(|assignment| {
            assignment.course_id == course_id
                && assignment.role == role
                && assignment.display.user_id == user_id
        });
        if duplicate {
            return Err(RosterMutationError::duplicate_assignment());
        }
        let assigned_at = state.assigned_at;
        let display = state
            .directory
            .iter()
            .find(|candidate| candidate.user_id() == user_id)
            .map_or_else(
                || AssignmentDisplay {
                    user_id,
                    display_name: format!("user {user_id}"),
                    email: format!("{user_id}@example.invalid"),
                    assigned_at,
                },
                |candidate| display_for(candidate, assigned_at),
            );
        state.assignments.push(StoredAssignment {
            course_id,
            role,
            display,
        });
        Ok(AssignmentRecord {
            course_id,
            user_id,
            assigned_at,
        })
    }

    async fn delete_assignment(
        &self,
        course_id: CourseId,
        user_id: UserId,
        role: RosterRole,
    ) -> Result<(), RosterMutationError> {
        let mut state = self.state();
        if state.mutation_outage {
            return Err(RosterMutationError::unavailable("injected roster outage"));
        }
        let position = state
            .assignments
            .iter()
            .position(|assignment| {
                assignment.course_id == course_id
                    && assignment.role == role
                    && assignment.display.user_id == user_id
            })
            .ok_or_else(RosterMutationError::missing_assignment)?;
        state.assignments.remove(position);
        Ok(())
    }
}

#[async_trait]
impl RosterQuery for InMemoryRosterBackend {
    async fn list_assigned(
        &self,
        course_id: CourseId,
        role: RosterRole,
    ) -> Result<Vec<AssignmentDisplay>, RosterQueryError> {
        let state = self.state();
        if state.query_outage {
            return Err(RosterQueryError::unavailable("injected roster outage"));
        }
        Ok(state
            .assignments
            .iter()
            .filter(|assignment| assignment.course_id == course_id && assignment.role == role)
            .map(|assignment| assignment.display.clone())
            .collect())
    }
}
