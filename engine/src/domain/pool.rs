//! Candidate pool building with a directory-outage fallback.
//!
//! The primary path asks the directory for a filtered, annotated candidate
//! list. When the directory cannot serve it the service degrades instead of
//! failing: it lists the whole role population and derives the assignment
//! annotation locally from the roster, so bulk flows stay usable during a
//! directory outage. The degraded pool is unfiltered; only when the fallback
//! itself fails does the caller see an error.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::warn;

use crate::config::EngineConfig;
use crate::domain::candidate::{Candidate, RosterRole, UserId};
use crate::domain::course::CourseId;
use crate::domain::error::Error;
use crate::domain::filter::PoolFilter;
use crate::domain::ports::{
    CandidateDirectory, DirectoryError, RosterQuery, RosterQueryError,
};

/// Domain service building candidate pools for assignment flows.
#[derive(Clone)]
pub struct CandidatePoolService<D, Q> {
    directory: Arc<D>,
    roster: Arc<Q>,
    fallback_enabled: bool,
}

impl<D, Q> CandidatePoolService<D, Q> {
    /// Create a new pool service with the fallback enabled.
    #[must_use]
    pub const fn new(directory: Arc<D>, roster: Arc<Q>) -> Self {
        Self {
            directory,
            roster,
            fallback_enabled: true,
        }
    }

    /// Create a pool service honouring the engine configuration.
    #[must_use]
    pub const fn from_config(directory: Arc<D>, roster: Arc<Q>, config: &EngineConfig) -> Self {
        Self::new(directory, roster).with_directory_fallback(config.directory_fallback_enabled)
    }

    /// Enable or disable the degraded fallback pool.
    #[must_use]
    pub const fn with_directory_fallback(mut self, enabled: bool) -> Self {
        self.fallback_enabled = enabled;
        self
    }
}

impl<D, Q> CandidatePoolService<D, Q>
where
    D: CandidateDirectory,
    Q: RosterQuery,
{
    /// Build the candidate pool for `course_id` and `role`.
    ///
    /// Only the server-evaluated half of `filter` participates here; the
    /// free-text query narrows the returned pool locally via
    /// [`apply_query`](crate::domain::filter::apply_query) so query edits
    /// never refetch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UpstreamUnavailable`] when the directory cannot be
    /// reached and the fallback is disabled or also fails.
    pub async fn build_pool(
        &self,
        course_id: CourseId,
        role: RosterRole,
        filter: &PoolFilter,
    ) -> Result<Vec<Candidate>, Error> {
        let server_filter = filter.server_filter();
        match self
            .directory
            .list_eligible(course_id, role, &server_filter)
            .await
        {
            Ok(pool) => Ok(pool),
            Err(err) if self.fallback_enabled => {
                warn!(
                    error = %err,
                    course = %course_id,
                    "filtered directory listing failed; serving unfiltered fallback pool"
                );
                self.build_fallback_pool(course_id, role).await
            }
            Err(err) => Err(Self::map_directory_error(err)),
        }
    }

    /// List the whole role population and annotate it from the roster.
    async fn build_fallback_pool(
        &self,
        course_id: CourseId,
        role: RosterRole,
    ) -> Result<Vec<Candidate>, Error> {
        let population = self
            .directory
            .list_all_of_role(role)
            .await
            .map_err(Self::map_directory_error)?;
        let assigned = self.fetch_assigned_ids(course_id, role).await?;
        Ok(population
            .into_iter()
            .map(|candidate| {
                let is_assigned = assigned.contains(&candidate.user_id());
                candidate.with_already_assigned(is_assigned)
            })
            .collect())
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

    fn map_directory_error(error: DirectoryError) -> Error {
        match error {
            DirectoryError::Unavailable { message }
            | DirectoryError::MalformedResponse { message } => {
                Error::directory_unavailable(message)
            }
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
#[path = "pool_tests.rs"]
mod tests;
