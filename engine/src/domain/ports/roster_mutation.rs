//! Port abstraction for roster mutations.
//!
//! One call per target: the engine deliberately has no bulk primitive here,
//! so a batch of assignments degrades per target instead of all-or-nothing.
//! Implementations must:
//! - Create at most one assignment per (course, user, role) triple.
//! - Report an existing triple as [`RosterMutationError::DuplicateAssignment`].
//! - Report a missing triple on delete as
//!   [`RosterMutationError::MissingAssignment`].

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::candidate::{RosterRole, UserId};
use crate::domain::course::CourseId;
use crate::domain::roster::AssignmentRecord;

define_port_error! {
    /// Failures raised by roster mutation adapters.
    pub enum RosterMutationError {
        /// The roster service refused the mutation for a business reason.
        Rejected { reason: String } => "roster service rejected the mutation: {reason}",
        /// An assignment for this user already exists on the course.
        DuplicateAssignment => "assignment already exists",
        /// No assignment for this user exists on the course.
        MissingAssignment => "no matching assignment exists",
        /// The roster service could not be reached at all.
        Unavailable { message: String } => "roster request failed: {message}",
    }
}

/// Port for creating and deleting individual assignments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RosterMutation: Send + Sync {
    /// Assign `user_id` to `course_id` in `role`, returning the stored record.
    async fn create_assignment(
        &self,
        course_id: CourseId,
        user_id: UserId,
        role: RosterRole,
    ) -> Result<AssignmentRecord, RosterMutationError>;

    /// Remove the assignment of `user_id` on `course_id` in `role`.
    async fn delete_assignment(
        &self,
        course_id: CourseId,
        user_id: UserId,
        role: RosterRole,
    ) -> Result<(), RosterMutationError>;
}

/// Fixture mutation port accepting every call.
#[derive(Debug, Clone, Copy)]
pub struct FixtureRosterMutation {
    /// Timestamp stamped onto created records.
    pub assigned_at: chrono::DateTime<chrono::Utc>,
}

impl Default for FixtureRosterMutation {
    fn default() -> Self {
        Self {
            assigned_at: chrono::DateTime::UNIX_EPOCH,
        }
    }
}

#[async_trait]
impl RosterMutation for FixtureRosterMutation {
    async fn create_assignment(
        &self,
        course_id: CourseId,
        user_id: UserId,
        _role: RosterRole,
    ) -> Result<AssignmentRecord, RosterMutationError> {
        Ok(AssignmentRecord {
            course_id,
            user_id,
            assigned_at: self.assigned_at,
        })
    }

    async fn delete_assignment(
        &self,
        _course_id: CourseId,
        _user_id: UserId,
        _role: RosterRole,
    ) -> Result<(), RosterMutationError> {
        Ok(())
    }
}
