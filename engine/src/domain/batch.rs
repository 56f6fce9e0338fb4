//! Aggregated outcome of a bulk assignment.
//!
//! A batch never collapses into a single error: every target settles on its
//! own and the report records one slot per requested target, in request
//! order, regardless of the order the underlying calls completed in.

use serde::Serialize;

use crate::domain::candidate::UserId;
use crate::domain::error::Error;
use crate::domain::roster::AssignmentRecord;

/// One failed target within a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchFailure {
    /// The target that failed.
    pub user_id: UserId,
    /// Why it failed.
    pub reason: Error,
}

/// Per-target outcomes of one bulk assignment invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    total: usize,
    succeeded: Vec<UserId>,
    failed: Vec<BatchFailure>,
}

impl BatchReport {
    /// Folds settled per-target outcomes into a report.
    ///
    /// Outcomes must arrive in request order; the report preserves it so a
    /// caller can correlate slots with its original target list.
    #[must_use]
    pub fn from_outcomes(outcomes: Vec<(UserId, Result<AssignmentRecord, Error>)>) -> Self {
        let total = outcomes.len();
        let mut succeeded = Vec::new();
        let mut failed = Vec::new();
        for (user_id, outcome) in outcomes {
            match outcome {
                Ok(_) => succeeded.push(user_id),
                Err(reason) => failed.push(BatchFailure { user_id, reason }),
            }
        }
        Self {
            total,
            succeeded,
            failed,
        }
    }

    /// Number of targets requested.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Targets whose assignment was created, in request order.
    #[must_use]
    pub fn succeeded(&self) -> &[UserId] {
        &self.succeeded
    }

    /// Targets that failed, with their reasons, in request order.
    #[must_use]
    pub fn failed(&self) -> &[BatchFailure] {
        &self.failed
    }

    /// Number of successful targets.
    #[must_use]
    pub const fn succeeded_count(&self) -> usize {
        self.succeeded.len()
    }

    /// Number of failed targets.
    #[must_use]
    pub const fn failed_count(&self) -> usize {
        self.failed.len()
    }

    /// Whether every target succeeded. Vacuously true for an empty batch.
    #[must_use]
    pub const fn is_complete_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// One-line description suitable for logging.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "assigned {} of {} targets ({} failed)",
            self.succeeded_count(),
            self.total,
            self.failed_count(),
        )
    }
}
