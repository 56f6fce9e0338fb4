//! The page envelope returned to callers.

use serde::{Deserialize, Serialize};

use crate::request::PageRequest;

/// One page of a collection, together with the totals a view needs.
///
/// `page` is the effective 1-based page number after clamping, which may be
/// lower than the requested one when the request pointed past the end.
/// `total_pages` is always at least 1, so page 1 exists even for an empty
/// collection (its `items` are then empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    items: Vec<T>,
    page: usize,
    page_size: usize,
    total_items: usize,
    total_pages: usize,
}

impl<T> Page<T> {
    /// Slices `items` according to `request`, clamping out-of-range pages.
    ///
    /// The source collection is borrowed and the selected window cloned, so
    /// the caller keeps its cache intact for subsequent page requests.
    #[must_use]
    pub fn slice(items: &[T], request: &PageRequest) -> Self
    where
        T: Clone,
    {
        let page_size = request.page_size();
        let total_items = items.len();
        let total_pages = total_pages_for(total_items, page_size);
        let page = request.page().min(total_pages);
        let offset = page.saturating_sub(1).saturating_mul(page_size);
        let window = items.iter().skip(offset).take(page_size).cloned().collect();
        Self {
            items: window,
            page,
            page_size,
            total_items,
            total_pages,
        }
    }

    /// The items on this page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the page, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// The effective 1-based page number.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// The page size the slice was taken with.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// The size of the whole collection.
    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    /// The number of pages in the whole collection. At least 1.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// The number of items on this page.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page carries no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a page follows this one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether a page precedes this one.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }
}

// `page_size` is non-zero by `PageRequest` construction.
fn total_pages_for(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size).max(1)
}
