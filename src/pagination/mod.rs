//! Pagination over remote collections.
//!
//! - [`Pagination`]: request-side cursor, clamped to the API's bounds
//! - [`PaginatedResponse`]: one decoded page plus collection metadata
//! - [`PageInfo`]: read-only navigation view of a page
//! - [`PageIterator`]: lazy, pull-based iteration built from a page-fetch
//!   function
//!
//! Every listing service exposes three conventions on top of these: a
//! single page (`list`), an iterator (`pages`) and the whole collection
//! (`list_all`).

mod iterator;
mod types;

pub use iterator::{IteratorState, PageIterator};
pub use types::{PageInfo, PaginatedResponse, Pagination};
