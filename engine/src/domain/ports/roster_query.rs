//! Port abstraction for reading the current roster.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::candidate::RosterRole;
use crate::domain::course::CourseId;
use crate::domain::roster::AssignmentDisplay;

define_port_error! {
    /// Failures raised by roster query adapters.
    pub enum RosterQueryError {
        /// The roster service could not be reached at all.
        Unavailable { message: String } => "roster request failed: {message}",
        /// The roster service answered with an unreadable payload.
        MalformedResponse { message: String } => "roster response malformed: {message}",
    }
}

/// Port for listing who is currently assigned to a course.
///
/// Rosters in this domain are bounded in the hundreds, so the port returns
/// the full roster in one call and pagination happens locally.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RosterQuery: Send + Sync {
    /// List every assignment of `role` on `course_id`, in roster order.
    async fn list_assigned(
        &self,
        course_id: CourseId,
        role: RosterRole,
    ) -> Result<Vec<AssignmentDisplay>, RosterQueryError>;
}

/// Fixture query returning a canned roster for every call.
#[derive(Debug, Default, Clone)]
pub struct FixtureRosterQuery {
    /// Rows returned by every listing call.
    pub assignments: Vec<AssignmentDisplay>,
}

#[async_trait]
impl RosterQuery for FixtureRosterQuery {
    async fn list_assigned(
        &self,
        _course_id: CourseId,
        _role: RosterRole,
    ) -> Result<Vec<AssignmentDisplay>, RosterQueryError> {
        Ok(self.assignments.clone())
    }
}
