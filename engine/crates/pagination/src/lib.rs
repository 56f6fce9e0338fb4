//! Client-side pagination primitives.
//!
//! This crate provides the page envelope used when a caller holds a complete
//! collection in memory and slices it for display: a validated [`PageRequest`]
//! (1-based page number plus a non-zero page size) and a [`Page`] snapshot
//! carrying the sliced items together with the totals a view needs to render
//! navigation.
//!
//! Out-of-range requests never fail: a page number past the end clamps to the
//! last page and page zero clamps to the first. The only rejected input is a
//! zero page size, reported as [`PaginationError::ZeroPageSize`].
//!
//! # Example
//!
//! ```
//! use pagination::{Page, PageRequest};
//!
//! let items: Vec<u32> = (1..=12).collect();
//! let request = PageRequest::new(2, 10).expect("non-zero page size");
//! let page = Page::slice(&items, &request);
//!
//! assert_eq!(page.items(), &[11, 12]);
//! assert_eq!(page.total_pages(), 2);
//! ```

mod error;
mod page;
mod request;

pub use error::PaginationError;
pub use page::Page;
pub use request::PageRequest;
