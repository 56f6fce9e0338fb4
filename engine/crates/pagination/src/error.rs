//! Error types for pagination requests.

use thiserror::Error;

/// Errors raised when constructing a [`crate::PageRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// The requested page size was zero.
    #[error("page size must be at least 1")]
    ZeroPageSize,
}
