//! Lazy iteration over a remote paginated collection.

use std::fmt;
use std::future::Future;

use futures::FutureExt;
use futures::future::BoxFuture;

use super::types::{PageInfo, PaginatedResponse, Pagination};
use crate::config::DEFAULT_PAGE;
use crate::{Error, Result};

type FetchPage<T> =
    Box<dyn FnMut(u32, u32) -> BoxFuture<'static, Result<PaginatedResponse<T>>> + Send>;

/// Where a [`PageIterator`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IteratorState {
    /// Constructed or reset; nothing fetched yet.
    Fresh,
    /// The last fetch succeeded.
    HasPage,
    /// The server reported no further page.
    Exhausted,
    /// The last fetch failed. No further fetch is attempted until
    /// [`PageIterator::reset`].
    Failed,
}

/// A pull-based cursor over a remote paginated collection.
///
/// Each call to [`next`](Self::next) fetches at most one page through the
/// fetch function given at construction. The cursor always points at the
/// page that would be requested next, and `has_more_items` of the last
/// page is consulted lazily on the following call.
///
/// The first failure freezes the iterator: later calls return `false`
/// without fetching, and the error stays available through
/// [`error`](Self::error) until [`reset`](Self::reset).
///
/// `next` takes `&mut self`, so fetches on one iterator can never overlap.
///
/// ## Example
///
/// ```rust,no_run
/// # async fn example(client: bunnynet::Client) -> bunnynet::Result<()> {
/// let mut zones = client.dns_zones().pages(50, None);
/// while zones.next().await {
///     for zone in zones.items() {
///         println!("{}", zone.domain);
///     }
/// }
/// if let Some(err) = zones.error() {
///     return Err(err.clone());
/// }
/// # Ok(())
/// # }
/// ```
pub struct PageIterator<T> {
    fetch: FetchPage<T>,
    pagination: Pagination,
    current: Option<PaginatedResponse<T>>,
    error: Option<Error>,
    state: IteratorState,
}

impl<T> PageIterator<T> {
    /// Creates an iterator starting at `page` with `per_page` items per page.
    ///
    /// Both values are clamped like [`Pagination`].
    pub fn new<F, Fut>(mut fetch: F, page: u32, per_page: u32) -> Self
    where
        F: FnMut(u32, u32) -> Fut + Send + 'static,
        Fut: Future<Output = Result<PaginatedResponse<T>>> + Send + 'static,
    {
        Self {
            fetch: Box::new(move |page, per_page| fetch(page, per_page).boxed()),
            pagination: Pagination::new().with_page(page).with_per_page(per_page),
            current: None,
            error: None,
            state: IteratorState::Fresh,
        }
    }

    /// Advances to the next page.
    ///
    /// Returns `true` when a page was fetched and it contains at least one
    /// item. Returns `false` when the collection is exhausted, when the
    /// fetch failed (see [`error`](Self::error)), or when the fetched page
    /// is empty.
    pub async fn next(&mut self) -> bool {
        match self.state {
            IteratorState::Failed | IteratorState::Exhausted => return false,
            IteratorState::HasPage => {
                if self.current.as_ref().is_some_and(|page| !page.has_more_items) {
                    tracing::trace!(page = self.pagination.page(), "page iterator exhausted");
                    self.state = IteratorState::Exhausted;
                    return false;
                }
            },
            IteratorState::Fresh => {},
        }

        let page = self.pagination.page();
        let per_page = self.pagination.per_page();
        tracing::trace!(page, per_page, "fetching page");

        match (self.fetch)(page, per_page).await {
            Ok(response) => {
                let has_items = !response.items.is_empty();
                self.current = Some(response);
                self.pagination = self.pagination.with_page(page.saturating_add(1));
                self.state = IteratorState::HasPage;
                has_items
            },
            Err(err) => {
                tracing::trace!(page, error = %err, "page fetch failed");
                self.error = Some(err);
                self.state = IteratorState::Failed;
                false
            },
        }
    }

    /// Items of the current page; empty before the first fetch.
    pub fn items(&self) -> &[T] {
        self.current.as_ref().map(|page| page.items.as_slice()).unwrap_or_default()
    }

    /// Metadata of the current page, if one has been fetched.
    pub fn page_info(&self) -> Option<PageInfo> {
        self.current.as_ref().map(PaginatedResponse::page_info)
    }

    /// The error that froze this iterator.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> IteratorState {
        self.state
    }

    /// The cursor: the page that the next fetch will request.
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Rewinds to page 1 and forgets the current page and error.
    ///
    /// The fetch function and page size are kept.
    pub fn reset(&mut self) {
        self.pagination = self.pagination.with_page(DEFAULT_PAGE);
        self.current = None;
        self.error = None;
        self.state = IteratorState::Fresh;
    }

    /// Fetches the whole collection from page 1.
    ///
    /// # Errors
    ///
    /// Returns the first fetch error. Items collected before the failure
    /// are discarded.
    pub async fn all_items(&mut self) -> Result<Vec<T>>
    where
        T: Clone,
    {
        self.reset();
        let mut items = Vec::new();
        while self.next().await {
            items.extend_from_slice(self.items());
        }
        match self.error {
            Some(ref err) => Err(err.clone()),
            None => Ok(items),
        }
    }
}

impl<T> fmt::Debug for PageIterator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageIterator")
            .field("pagination", &self.pagination)
            .field("state", &self.state)
            .field("page_info", &self.page_info())
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}
