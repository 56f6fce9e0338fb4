//! Paged view over one course roster.
//!
//! Rosters in this domain stay bounded in the hundreds, so the view fetches
//! the full roster once and pages over it locally; page turns never touch the
//! network. The view is deliberately passive: executors do not refresh it,
//! callers do, after their mutations settle.

use std::sync::Arc;

use pagination::{Page, PageRequest, PaginationError};

use crate::config::EngineConfig;
use crate::domain::candidate::RosterRole;
use crate::domain::course::CourseId;
use crate::domain::error::Error;
use crate::domain::ports::{RosterQuery, RosterQueryError};
use crate::domain::roster::{AssignmentDisplay, dedupe_assignments};

/// Client-side paged view of who is assigned to one course.
#[derive(Debug, Clone)]
pub struct RosterView<Q> {
    roster: Arc<Q>,
    course_id: CourseId,
    role: RosterRole,
    request: PageRequest,
    cache: Vec<AssignmentDisplay>,
}

impl<Q> RosterView<Q> {
    /// Create a view over `course_id` and `role`, starting on page 1.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError`] when `page_size` is zero.
    pub fn new(
        roster: Arc<Q>,
        course_id: CourseId,
        role: RosterRole,
        page_size: usize,
    ) -> Result<Self, PaginationError> {
        Ok(Self {
            roster,
            course_id,
            role,
            request: PageRequest::new(1, page_size)?,
            cache: Vec::new(),
        })
    }

    /// Create a view using the configured page size.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError`] when the configured page size is zero.
    pub fn from_config(
        roster: Arc<Q>,
        course_id: CourseId,
        role: RosterRole,
        config: &EngineConfig,
    ) -> Result<Self, PaginationError> {
        Self::new(roster, course_id, role, config.roster_page_size)
    }

    /// The page currently presented.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.request.page()
    }

    /// Rows per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.request.page_size()
    }

    /// Total rows across all pages.
    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.cache.len()
    }

    /// Slice out the current page.
    #[must_use]
    pub fn current(&self) -> Page<AssignmentDisplay> {
        Page::slice(&self.cache, &self.request)
    }

    /// Slice out an arbitrary page without moving the view.
    ///
    /// Out-of-range numbers clamp to the nearest valid page.
    #[must_use]
    pub fn page(&self, page: usize) -> Page<AssignmentDisplay> {
        Page::slice(&self.cache, &self.request.with_page(page))
    }

    /// Move the view to `page`, clamping to the nearest valid page.
    pub fn go_to(&mut self, page: usize) -> Page<AssignmentDisplay> {
        let result = Page::slice(&self.cache, &self.request.with_page(page));
        self.request = self.request.with_page(result.page());
        result
    }

    /// Move one page forward, stopping at the last page.
    pub fn next_page(&mut self) -> Page<AssignmentDisplay> {
        self.go_to(self.request.page().saturating_add(1))
    }

    /// Move one page back, stopping at the first page.
    pub fn previous_page(&mut self) -> Page<AssignmentDisplay> {
        self.go_to(self.request.page().saturating_sub(1))
    }
}

impl<Q> RosterView<Q>
where
    Q: RosterQuery,
{
    /// Refetch the roster and collapse duplicate rows.
    ///
    /// When the refreshed roster's size differs from the cached one — an
    /// assignment or removal completed since the last fetch — the view
    /// resets to page 1; otherwise the current page is kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UpstreamUnavailable`] when the roster service cannot
    /// be reached.
    pub async fn refresh(&mut self) -> Result<(), Error> {
        let rows = self
            .roster
            .list_assigned(self.course_id, self.role)
            .await
            .map_err(map_query_error)?;
        let deduped = dedupe_assignments(rows);
        if deduped.len() != self.cache.len() {
            self.request = self.request.with_page(1);
        }
        self.cache = deduped;
        Ok(())
    }
}

fn map_query_error(error: RosterQueryError) -> Error {
    match error {
        RosterQueryError::Unavailable { message }
        | RosterQueryError::MalformedResponse { message } => Error::roster_unavailable(message),
    }
}
