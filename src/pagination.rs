//! Pagination utilities for gallery listings.
//!
//! The upstream search endpoint reports no totals, so the end of a listing
//! is inferred from a short page: a page with fewer items than requested is
//! the last one.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::{GalleryError, Result};

/// Number of items requested per page.
///
/// Zero is rejected when the value is constructed, so every request and
/// merge downstream can rely on a positive size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageSize(NonZeroU32);

impl PageSize {
    /// The gallery's default page size.
    pub const DEFAULT: PageSize = PageSize(match NonZeroU32::new(10) {
        Some(n) => n,
        None => unreachable!(),
    });

    /// Create a page size.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::InvalidPageSize`] for zero.
    pub fn new(size: u32) -> Result<Self> {
        NonZeroU32::new(size)
            .map(Self)
            .ok_or(GalleryError::InvalidPageSize(size))
    }

    /// The size as a plain integer.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for PageSize {
    type Error = GalleryError;

    fn try_from(size: u32) -> Result<Self> {
        Self::new(size)
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> u32 {
        size.get()
    }
}

/// A page of results from the Cat API.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "T: Serialize")]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Page number that was requested.
    pub page: u32,
    /// Number of items that were requested.
    pub limit: PageSize,
    /// Whether this page came back short, meaning no later page exists.
    pub exhausted: bool,
}

impl<T> Page<T> {
    /// Create a new page from items and the request that produced them.
    #[must_use]
    pub fn new(items: Vec<T>, page: u32, limit: PageSize) -> Self {
        let exhausted = is_short_page(items.len(), limit);
        Self {
            items,
            page,
            limit,
            exhausted,
        }
    }

    /// Map the items to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            limit: self.limit,
            exhausted: self.exhausted,
        }
    }

    /// Returns true if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the items in this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Query parameters for paginated requests.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PaginationParams {
    /// Number of items per page.
    pub limit: u32,
    /// Page number.
    pub page: u32,
}

impl PaginationParams {
    /// Create pagination params for a specific page.
    #[must_use]
    pub fn for_page(page: u32, limit: PageSize) -> Self {
        Self {
            limit: limit.get(),
            page,
        }
    }
}

fn is_short_page(len: usize, page_size: PageSize) -> bool {
    len < page_size.get() as usize
}

/// Append a freshly fetched page to an existing list.
///
/// Returns the merged list (existing items followed by the new page, in
/// order, without deduplication) and whether the new page was short.
#[must_use]
pub fn append_page<T>(mut existing: Vec<T>, new_page: Vec<T>, page_size: PageSize) -> (Vec<T>, bool) {
    let exhausted = is_short_page(new_page.len(), page_size);
    existing.extend(new_page);
    (existing, exhausted)
}

/// Caller-owned state of an incrementally loaded listing.
///
/// Starts from an already fetched first page and only grows through
/// [`Collection::absorb`]. A fetch that fails must simply not be absorbed,
/// which leaves the page counter and the items as they were.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    page: u32,
    page_size: PageSize,
    exhausted: bool,
}

impl<T> Collection<T> {
    /// Create a collection whose first page has already been fetched.
    #[must_use]
    pub fn new(first_page: Vec<T>, page_size: PageSize) -> Self {
        let (items, exhausted) = append_page(Vec::new(), first_page, page_size);
        Self {
            items,
            page: 1,
            page_size,
            exhausted,
        }
    }

    /// Create a collection from the first fetched [`Page`].
    #[must_use]
    pub fn from_page(page: Page<T>) -> Self {
        Self::new(page.items, page.limit)
    }

    /// Items loaded so far, in fetch order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items loaded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing has been loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Last successfully loaded page number.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Page size used for every request of this collection.
    #[must_use]
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Whether a short page has been seen.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Page number to request next, or `None` once exhausted.
    #[must_use]
    pub fn next_page(&self) -> Option<u32> {
        if self.exhausted {
            None
        } else {
            self.page.checked_add(1)
        }
    }

    /// Merge a successfully fetched page and advance the page counter.
    ///
    /// A collection whose page counter cannot advance any further is
    /// marked exhausted.
    pub fn absorb(&mut self, new_page: Vec<T>) {
        let existing = std::mem::take(&mut self.items);
        let (merged, exhausted) = append_page(existing, new_page, self.page_size);
        self.items = merged;
        match self.page.checked_add(1) {
            Some(next) => {
                self.page = next;
                self.exhausted = exhausted;
            }
            None => self.exhausted = true,
        }
    }

    /// Consume the collection, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
