//! Roster rows: assignment records and their display projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::candidate::UserId;
use crate::domain::course::CourseId;

/// A stored assignment linking one user to one course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRecord {
    /// The course the user is assigned to.
    pub course_id: CourseId,
    /// The assigned user.
    pub user_id: UserId,
    /// When the assignment was created.
    pub assigned_at: DateTime<Utc>,
}

/// A roster row enriched for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDisplay {
    /// The assigned user.
    pub user_id: UserId,
    /// Name shown on the roster.
    pub display_name: String,
    /// Contact address shown on the roster.
    pub email: String,
    /// When the assignment was created.
    pub assigned_at: DateTime<Utc>,
}

/// Drops duplicate rows for the same user, keeping the first occurrence.
///
/// Upstream responses occasionally repeat a user after a retried mutation;
/// the roster treats the user as assigned once. Row order is preserved.
#[must_use]
pub fn dedupe_assignments(rows: Vec<AssignmentDisplay>) -> Vec<AssignmentDisplay> {
    let mut seen = std::collections::HashSet::new();
    rows.into_iter()
        .filter(|row| seen.insert(row.user_id))
        .collect()
}
