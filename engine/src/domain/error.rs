//! Engine error taxonomy.
//!
//! Every fallible operation in the engine resolves to one of these variants.
//! Port-level errors are mapped into this taxonomy at the service boundary so
//! callers reason about five outcomes, not one enum per upstream. The enum
//! serializes with a `code` tag so batch reports stay machine-readable.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::domain::candidate::UserId;
use crate::domain::course::CourseId;

/// The upstream system an [`Error::UpstreamUnavailable`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpstreamService {
    /// The user directory that supplies candidate pools.
    Directory,
    /// The roster service that stores assignments.
    Roster,
}

impl fmt::Display for UpstreamService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory => f.write_str("directory service"),
            Self::Roster => f.write_str("roster service"),
        }
    }
}

/// Failures surfaced by engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "code", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Error {
    /// The course has completed and no longer accepts new assignments.
    #[error("course {course_id} has completed and no longer accepts assignments")]
    CourseCompleted {
        /// The completed course.
        course_id: CourseId,
    },

    /// The user already holds an assignment on this course.
    #[error("user {user_id} is already assigned to this course")]
    AlreadyAssigned {
        /// The user whose assignment already exists.
        user_id: UserId,
    },

    /// The user holds no assignment on this course.
    #[error("user {user_id} is not assigned to this course")]
    NotAssigned {
        /// The user without an assignment.
        user_id: UserId,
    },

    /// The roster service refused the assignment; the upstream message is
    /// carried through unchanged.
    #[error("assignment rejected: {reason}")]
    AssignmentRejected {
        /// Upstream rejection message, verbatim.
        reason: String,
    },

    /// An upstream system could not be reached.
    #[error("{service} is unavailable: {message}")]
    UpstreamUnavailable {
        /// Which upstream failed.
        service: UpstreamService,
        /// Transport-level detail.
        message: String,
    },
}

impl Error {
    /// The course refuses new assignments because it has completed.
    #[must_use]
    pub const fn course_completed(course_id: CourseId) -> Self {
        Self::CourseCompleted { course_id }
    }

    /// The user is already on the roster.
    #[must_use]
    pub const fn already_assigned(user_id: UserId) -> Self {
        Self::AlreadyAssigned { user_id }
    }

    /// The user is not on the roster.
    #[must_use]
    pub const fn not_assigned(user_id: UserId) -> Self {
        Self::NotAssigned { user_id }
    }

    /// The roster service rejected the assignment with `reason`.
    #[must_use]
    pub fn assignment_rejected(reason: impl Into<String>) -> Self {
        Self::AssignmentRejected {
            reason: reason.into(),
        }
    }

    /// The directory could not be reached.
    #[must_use]
    pub fn directory_unavailable(message: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            service: UpstreamService::Directory,
            message: message.into(),
        }
    }

    /// The roster service could not be reached.
    #[must_use]
    pub fn roster_unavailable(message: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            service: UpstreamService::Roster,
            message: message.into(),
        }
    }
}
