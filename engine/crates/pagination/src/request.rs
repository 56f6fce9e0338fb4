//! Validated page requests.

use serde::{Deserialize, Serialize};

use crate::error::PaginationError;

/// A validated request for one page of a collection.
///
/// Page numbers are 1-based. A request is only constructible with a non-zero
/// page size, so downstream arithmetic never divides by zero. Page zero is
/// treated as a request for the first page rather than an error, matching the
/// clamping behaviour applied at the other end of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PageRequestDraft")]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    /// Creates a request for `page` with `page_size` items per page.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::ZeroPageSize`] when `page_size` is zero.
    pub const fn new(page: usize, page_size: usize) -> Result<Self, PaginationError> {
        if page_size == 0 {
            return Err(PaginationError::ZeroPageSize);
        }
        Ok(Self {
            page: clamp_page(page),
            page_size,
        })
    }

    /// The requested 1-based page number.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// The number of items per page. Never zero.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns a copy of this request pointing at `page`.
    #[must_use]
    pub const fn with_page(self, page: usize) -> Self {
        Self {
            page: clamp_page(page),
            page_size: self.page_size,
        }
    }
}

const fn clamp_page(page: usize) -> usize {
    if page == 0 { 1 } else { page }
}

/// Unvalidated payload shape accepted on deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct PageRequestDraft {
    page: usize,
    page_size: usize,
}

impl TryFrom<PageRequestDraft> for PageRequest {
    type Error = PaginationError;

    fn try_from(draft: PageRequestDraft) -> Result<Self, Self::Error> {
        Self::new(draft.page, draft.page_size)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn rejects_zero_page_size() {
        assert_eq!(PageRequest::new(1, 0), Err(PaginationError::ZeroPageSize));
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(7, 7)]
    fn clamps_page_zero_to_one(#[case] requested: usize, #[case] expected: usize) {
        let request = PageRequest::new(requested, 10).expect("non-zero page size");
        assert_eq!(request.page(), expected);
    }

    #[test]
    fn with_page_preserves_page_size() {
        let request = PageRequest::new(1, 25).expect("non-zero page size");
        let moved = request.with_page(3);
        assert_eq!(moved.page(), 3);
        assert_eq!(moved.page_size(), 25);
    }

    #[test]
    fn deserializes_valid_payload() {
        let request: PageRequest =
            serde_json::from_str(r#"{"page": 2, "pageSize": 10}"#).expect("valid payload");
        assert_eq!(request.page(), 2);
        assert_eq!(request.page_size(), 10);
    }

    #[test]
    fn deserialization_rejects_zero_page_size() {
        let result: Result<PageRequest, _> = serde_json::from_str(r#"{"page": 1, "pageSize": 0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serializes_to_camel_case() {
        let request = PageRequest::new(2, 10).expect("non-zero page size");
        let json = serde_json::to_string(&request).expect("serialize");
        assert!(json.contains("\"pageSize\":10"));
    }
}
