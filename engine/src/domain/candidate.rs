//! Assignable users and their role projections.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a portal user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Wraps a raw UUID.
    #[must_use]
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The role a user holds on a course roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RosterRole {
    /// Enrolled learner.
    Student,
    /// Assigned teaching staff.
    Teacher,
}

impl fmt::Display for RosterRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student => f.write_str("student"),
            Self::Teacher => f.write_str("teacher"),
        }
    }
}

/// Role-specific detail attached to a candidate.
///
/// Serialises with a `role` tag so a candidate row carries its role inline:
/// `{"role": "student", "cohort": 2024, "department": "Physics"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum RoleDetail {
    /// Student detail: intake year and department.
    Student {
        /// Intake year the student belongs to.
        cohort: u16,
        /// Department the student is enrolled with.
        department: String,
    },
    /// Teacher detail: teaching specialization.
    Teacher {
        /// The teacher's specialization.
        specialization: String,
    },
}

impl RoleDetail {
    /// The roster role this detail belongs to.
    #[must_use]
    pub const fn role(&self) -> RosterRole {
        match self {
            Self::Student { .. } => RosterRole::Student,
            Self::Teacher { .. } => RosterRole::Teacher,
        }
    }
}

/// A user eligible (or not) for assignment to one course.
///
/// Candidates are read-only projections produced by the directory: the
/// `already_assigned` flag is relative to a single course and is the only
/// field the engine itself ever rewrites (when annotating a fallback pool).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    user_id: UserId,
    display_name: String,
    email: String,
    #[serde(flatten)]
    detail: RoleDetail,
    already_assigned: bool,
}

impl Candidate {
    /// Creates a student candidate, not yet assigned.
    #[must_use]
    pub fn student(
        user_id: UserId,
        display_name: impl Into<String>,
        email: impl Into<String>,
        cohort: u16,
        department: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            display_name: display_name.into(),
            email: email.into(),
            detail: RoleDetail::Student {
                cohort,
                department: department.into(),
            },
            already_assigned: false,
        }
    }

    /// Creates a teacher candidate, not yet assigned.
    #[must_use]
    pub fn teacher(
        user_id: UserId,
        display_name: impl Into<String>,
        email: impl Into<String>,
        specialization: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            display_name: display_name.into(),
            email: email.into(),
            detail: RoleDetail::Teacher {
                specialization: specialization.into(),
            },
            already_assigned: false,
        }
    }

    /// Returns a copy of this candidate with the assignment flag set.
    #[must_use]
    pub const fn with_already_assigned(mut self, already_assigned: bool) -> Self {
        self.already_assigned = already_assigned;
        self
    }

    /// The candidate's user id.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// The candidate's display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The candidate's email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Role-specific detail.
    #[must_use]
    pub const fn detail(&self) -> &RoleDetail {
        &self.detail
    }

    /// The candidate's roster role.
    #[must_use]
    pub const fn role(&self) -> RosterRole {
        self.detail.role()
    }

    /// Whether the candidate already holds an assignment on the course the
    /// pool was built for.
    #[must_use]
    pub const fn already_assigned(&self) -> bool {
        self.already_assigned
    }
}
