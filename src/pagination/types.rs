//! Pagination value types.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_PAGE, DEFAULT_PER_PAGE, MAX_PER_PAGE};
use crate::request::QueryEncodable;

/// Request-side paging cursor.
///
/// Out-of-range inputs are clamped instead of rejected: a page of `0`
/// becomes [`DEFAULT_PAGE`], a page size of `0` becomes
/// [`DEFAULT_PER_PAGE`] and anything above [`MAX_PER_PAGE`] is capped.
///
/// `Pagination` is an immutable value; the `with_*` methods return a new
/// value, so one instance can seed several iterators safely.
///
/// ```rust
/// use bunnynet::Pagination;
///
/// let p = Pagination::new().with_page(0).with_per_page(5000);
/// assert_eq!(p.page(), 1);
/// assert_eq!(p.per_page(), 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pagination {
    page: u32,
    per_page: u32,
}

impl Pagination {
    /// Creates a cursor at the first page with the default page size.
    pub const fn new() -> Self {
        Self { page: DEFAULT_PAGE, per_page: DEFAULT_PER_PAGE }
    }

    /// Returns a copy pointing at `page`.
    #[must_use]
    pub const fn with_page(self, page: u32) -> Self {
        Self { page: if page < 1 { DEFAULT_PAGE } else { page }, ..self }
    }

    /// Returns a copy with `per_page` items per page.
    #[must_use]
    pub const fn with_per_page(self, per_page: u32) -> Self {
        let per_page = if per_page < 1 {
            DEFAULT_PER_PAGE
        } else if per_page > MAX_PER_PAGE {
            MAX_PER_PAGE
        } else {
            per_page
        };
        Self { per_page, ..self }
    }

    /// The 1-based page number.
    #[inline]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// The page size.
    #[inline]
    pub const fn per_page(&self) -> u32 {
        self.per_page
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Pagination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pagination{{Page: {}, PerPage: {}}}", self.page, self.per_page)
    }
}

impl QueryEncodable for Pagination {
    fn to_query_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        if self.page > 0 {
            params.insert("page".to_owned(), self.page.to_string());
        }
        if self.per_page > 0 {
            params.insert("perPage".to_owned(), self.per_page.to_string());
        }
        params
    }
}

/// One page of a remote collection.
///
/// `has_more_items` alone decides whether another page exists; it is never
/// inferred from `items.len()` or `total_items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Items on this page, in server order.
    #[serde(rename = "Items")]
    pub items: Vec<T>,

    /// The page number the server returned.
    #[serde(rename = "CurrentPage", default)]
    pub current_page: u32,

    /// Size of the whole collection.
    #[serde(rename = "TotalItems", default)]
    pub total_items: u64,

    /// Whether a further page exists.
    #[serde(rename = "HasMoreItems", default)]
    pub has_more_items: bool,
}

impl<T> PaginatedResponse<T> {
    /// Returns the page metadata without the items.
    pub fn page_info(&self) -> PageInfo {
        PageInfo {
            current_page: self.current_page,
            total_items: self.total_items,
            has_more_items: self.has_more_items,
        }
    }
}

/// Page metadata derived from a [`PaginatedResponse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageInfo {
    /// The page number the server returned.
    pub current_page: u32,
    /// Size of the whole collection.
    pub total_items: u64,
    /// Whether a further page exists.
    pub has_more_items: bool,
}

impl PageInfo {
    /// Number of pages at `per_page` items each, or `0` when `per_page` is 0.
    pub fn total_pages(&self, per_page: u32) -> u64 {
        if per_page == 0 {
            return 0;
        }
        self.total_items.div_ceil(u64::from(per_page))
    }

    /// The following page, if the server reported one.
    pub fn next_page(&self) -> Option<u32> {
        if !self.has_more_items {
            return None;
        }
        self.current_page.checked_add(1)
    }

    /// The preceding page, or `None` on the first page.
    pub fn previous_page(&self) -> Option<u32> {
        if self.current_page <= 1 {
            return None;
        }
        Some(self.current_page - 1)
    }

    /// Whether this is page 1.
    pub fn is_first_page(&self) -> bool {
        self.current_page <= 1
    }

    /// Whether the server reported no further page.
    pub fn is_last_page(&self) -> bool {
        !self.has_more_items
    }
}
