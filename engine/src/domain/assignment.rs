//! Assignment execution against the roster service.
//!
//! Single and bulk assignment share the same per-target pipeline: gate on the
//! course lifecycle, re-validate against a fresh roster snapshot, then issue
//! one mutation call. Bulk execution fans the pipeline out per target and
//! aggregates outcomes instead of aborting; one target's rejection never
//! touches another's call.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use futures_util::future::join_all;
use mockable::Clock;
use tracing::info;

use crate::domain::batch::BatchReport;
use crate::domain::candidate::{RosterRole, UserId};
use crate::domain::course::{Course, CourseId};
use crate::domain::error::Error;
use crate::domain::ports::{
    RosterMutation, RosterMutationError, RosterQuery, RosterQueryError,
};
use crate::domain::roster::AssignmentRecord;

/// Domain service executing assignment mutations.
#[derive(Clone)]
pub struct AssignmentService<M, Q> {
    mutation: Arc<M>,
    roster: Arc<Q>,
    clock: Arc<dyn Clock>,
}

impl<M, Q> AssignmentService<M, Q> {
    /// Create a new executor over the given ports and clock.
    #[must_use]
    pub const fn new(mutation: Arc<M>, roster: Arc<Q>, clock: Arc<dyn Clock>) -> Self {
        Self {
            mutation,
            roster,
            clock,
        }
    }
}

impl<M, Q> AssignmentService<M, Q>
where
    M: RosterMutation,
    Q: RosterQuery,
{
    /// Assign one user to `course` in `role`.
    ///
    /// The eligibility check runs against a roster snapshot fetched here, not
    /// against whatever pool the caller rendered from; a stale UI cannot
    /// smuggle a duplicate past the check.
    ///
    /// # Errors
    ///
    /// [`Error::CourseCompleted`] when the course no longer accepts
    /// assignments, [`Error::AlreadyAssigned`] when the user is on the roster
    /// already, [`Error::AssignmentRejected`] carrying the upstream message
    /// verbatim, or [`Error::UpstreamUnavailable`] on transport failure.
    pub async fn assign_one(
        &self,
        course: &Course,
        user_id: UserId,
        role: RosterRole,
    ) -> Result<AssignmentRecord, Error> {
        let today = self.today();
        if !course.accepts_assignments_on(today) {
            return Err(Error::course_completed(course.id()));
        }
        let assigned = self.fetch_assigned_ids(course.id(), role).await?;
        if assigned.contains(&user_id) {
            return Err(Error::already_assigned(user_id));
        }
        self.mutation
            .create_assignment(course.id(), user_id, role)
            .await
            .map_err(|err| Self::map_mutation_error(user_id, err))
    }

    /// Assign every user in `user_ids` to `course` in `role`.
    ///
    /// Never fails as a whole: each target settles independently and the
    /// report carries one slot per requested target, in request order. The
    /// gate date and the roster snapshot are read once per invocation, so
    /// every target in a batch sees the same course state even if the calls
    /// run across a date boundary. Targets may execute concurrently.
    ///
    /// On return the caller's candidate pool and roster view are stale and
    /// should be refreshed; the executor does not refresh them itself.
    pub async fn assign_many(
        &self,
        course: &Course,
        user_ids: &[UserId],
        role: RosterRole,
    ) -> BatchReport {
        let today = self.today();
        if !course.accepts_assignments_on(today) {
            let reason = Error::course_completed(course.id());
            return Self::report_uniform_failure(user_ids, &reason);
        }
        let snapshot = match self.fetch_assigned_ids(course.id(), role).await {
            Ok(snapshot) => snapshot,
            Err(err) => return Self::report_uniform_failure(user_ids, &err),
        };

        let snapshot_ref = &snapshot;
        let attempts = user_ids.iter().map(|&user_id| async move {
            if snapshot_ref.contains(&user_id) {
                return (user_id, Err(Error::already_assigned(user_id)));
            }
            let outcome = self
                .mutation
                .create_assignment(course.id(), user_id, role)
                .await
                .map_err(|err| Self::map_mutation_error(user_id, err));
            (user_id, outcome)
        });
        let report = BatchReport::from_outcomes(join_all(attempts).await);
        info!(course = %course.id(), summary = %report.summary(), "bulk assignment settled");
        report
    }

    /// Remove one user's assignment from `course`.
    ///
    /// Deliberately not gated on the lifecycle: administrators can always
    /// unassign, even from a completed course.
    ///
    /// # Errors
    ///
    /// [`Error::NotAssigned`] when no matching assignment exists, or
    /// [`Error::UpstreamUnavailable`] on transport failure.
    pub async fn remove_one(
        &self,
        course: &Course,
        user_id: UserId,
        role: RosterRole,
    ) -> Result<(), Error> {
        self.mutation
            .delete_assignment(course.id(), user_id, role)
            .await
            .map_err(|err| Self::map_mutation_error(user_id, err))
    }

    fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }

    async fn fetch_assigned_ids(
        &self,
        course_id: CourseId,
        role: RosterRole,
    ) -> Result<HashSet<UserId>, Error> {
        let roster = self
            .roster
            .list_assigned(course_id, role)
            .await
            .map_err(Self::map_roster_error)?;
        Ok(roster.into_iter().map(|row| row.user_id).collect())
    }

    fn report_uniform_failure(user_ids: &[UserId], reason: &Error) -> BatchReport {
        BatchReport::from_outcomes(
            user_ids
                .iter()
                .map(|&user_id| (user_id, Err(reason.clone())))
                .collect(),
        )
    }

    fn map_mutation_error(user_id: UserId, error: RosterMutationError) -> Error {
        match error {
            RosterMutationError::Rejected { reason } => Error::assignment_rejected(reason),
            RosterMutationError::DuplicateAssignment => Error::already_assigned(user_id),
            RosterMutationError::MissingAssignment => Error::not_assigned(user_id),
            RosterMutationError::Unavailable { message } => Error::roster_unavailable(message),
        }
    }

    fn map_roster_error(error: RosterQueryError) -> Error {
        match error {
            RosterQueryError::Unavailable { message }
            | RosterQueryError::MalformedResponse { message } => Error::roster_unavailable(message),
        }
    }
}

#[cfg(test)]
#[path = "assignment_tests.rs"]
mod tests;
