//! Candidate pool filtering.
//!
//! A [`PoolFilter`] splits into two halves with different lifetimes: `cohort`
//! and `department` are evaluated by the directory service, so changing them
//! invalidates the fetched pool; `query` is evaluated locally over the pool
//! already in hand and never triggers a refetch. [`apply_query`] is the local
//! half, a pure function so it can run on every keystroke.

use serde::{Deserialize, Serialize};

use crate::domain::candidate::Candidate;

/// Narrowing criteria for a candidate pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct PoolFilter {
    /// Restrict students to one cohort year. Ignored for teacher pools.
    pub cohort: Option<u16>,
    /// Restrict students to one department. Ignored for teacher pools.
    pub department: Option<String>,
    /// Free-text search over name and email, applied locally.
    pub query: Option<String>,
}

impl PoolFilter {
    /// The half of the filter the directory service evaluates.
    #[must_use]
    pub fn server_filter(&self) -> ServerFilter {
        ServerFilter {
            cohort: self.cohort,
            department: self.department.clone(),
        }
    }

    /// Whether moving from `self` to `next` invalidates a fetched pool.
    ///
    /// Only the server-evaluated half matters; a query edit narrows the
    /// existing pool in place.
    #[must_use]
    pub fn requires_refetch(&self, next: &Self) -> bool {
        self.server_filter() != next.server_filter()
    }
}

/// The server-evaluated half of a [`PoolFilter`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct ServerFilter {
    /// Restrict students to one cohort year.
    pub cohort: Option<u16>,
    /// Restrict students to one department.
    pub department: Option<String>,
}

impl ServerFilter {
    /// Whether the filter narrows anything at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cohort.is_none() && self.department.is_none()
    }
}

/// Narrows `pool` by case-insensitive substring match on name or email.
///
/// A blank or whitespace-only query returns the pool unchanged. Input order
/// is preserved; the pool itself is never mutated.
#[must_use]
pub fn apply_query(pool: &[Candidate], query: &str) -> Vec<Candidate> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return pool.to_vec();
    }
    pool.iter()
        .filter(|candidate| {
            candidate.display_name().to_lowercase().contains(&needle)
                || candidate.email().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
