//! Port abstraction for the user directory.
//!
//! The directory owns the user population. [`CandidateDirectory::list_eligible`]
//! is the primary lookup and applies the server-evaluated filter upstream;
//! [`CandidateDirectory::list_all_of_role`] is the coarse fallback used when
//! the filtered endpoint is unreachable, returning the whole role population
//! unfiltered and unannotated.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::candidate::{Candidate, RosterRole};
use crate::domain::course::CourseId;
use crate::domain::filter::ServerFilter;

define_port_error! {
    /// Failures raised by directory adapters.
    pub enum DirectoryError {
        /// The directory could not be reached at all.
        Unavailable { message: String } => "directory request failed: {message}",
        /// The directory answered with a payload the adapter could not read.
        MalformedResponse { message: String } => "directory response malformed: {message}",
    }
}

/// Port for listing candidate users from the directory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CandidateDirectory: Send + Sync {
    /// List users of `role` eligible for `course_id`, narrowed by `filter`,
    /// each annotated with whether they already hold an assignment there.
    async fn list_eligible(
        &self,
        course_id: CourseId,
        role: RosterRole,
        filter: &ServerFilter,
    ) -> Result<Vec<Candidate>, DirectoryError>;

    /// List every user of `role`, ignoring course and filter.
    ///
    /// Fallback lookup only; the returned candidates carry no assignment
    /// annotation and the caller is expected to derive one itself.
    async fn list_all_of_role(&self, role: RosterRole) -> Result<Vec<Candidate>, DirectoryError>;
}

/// Fixture directory returning a canned candidate list for every call.
#[derive(Debug, Default, Clone)]
pub struct FixtureCandidateDirectory {
    /// Candidates returned by both listing operations.
    pub candidates: Vec<Candidate>,
}

#[async_trait]
impl CandidateDirectory for FixtureCandidateDirectory {
    async fn list_eligible(
        &self,
        _course_id: CourseId,
        _role: RosterRole,
        _filter: &ServerFilter,
    ) -> Result<Vec<Candidate>, DirectoryError> {
        Ok(self.candidates.clone())
    }

    async fn list_all_of_role(&self, _role: RosterRole) -> Result<Vec<Candidate>, DirectoryError> {
        Ok(self.candidates.clone())
    }
}
