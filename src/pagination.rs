//! Offset-based pagination over the Pokemon index.

use crate::connection::Connection;
use crate::error::Result;
use crate::models::{NamedResource, PokemonListPage};

/// Continuation state for an offset-paged list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub page_size: u32,
    pub pages_fetched: u32,
    /// Total entries reported by the most recent page; `None` before the first fetch.
    pub total_count: Option<u32>,
}

impl PageState {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            pages_fetched: 0,
            total_count: None,
        }
    }

    /// Offset of the next page to request: `pages_fetched * page_size`.
    pub fn next_offset(&self) -> u32 {
        self.pages_fetched.saturating_mul(self.page_size)
    }

    /// Whether another page exists. Always true before the first fetch.
    pub fn has_next_page(&self) -> bool {
        match self.total_count {
            Some(total) => self.next_offset() < total,
            None => true,
        }
    }

    /// Record a fetched page.
    pub fn record(&mut self, page: &PokemonListPage) {
        self.pages_fetched += 1;
        self.total_count = Some(page.count);
    }
}

/// Walks the Pokemon index page by page, accumulating entries.
///
/// Pages come from the connection's cache when already fetched.
pub struct Paginator<'a> {
    conn: &'a Connection,
    state: PageState,
    entries: Vec<NamedResource>,
}

impl<'a> Paginator<'a> {
    pub fn new(conn: &'a Connection, page_size: u32) -> Self {
        Self {
            conn,
            state: PageState::new(page_size),
            entries: Vec::new(),
        }
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn has_next_page(&self) -> bool {
        self.state.has_next_page()
    }

    /// Every entry fetched so far, in index order.
    pub fn entries(&self) -> &[NamedResource] {
        &self.entries
    }

    /// Fetch the next page. Returns `Ok(None)` when the index is exhausted.
    ///
    /// A failed fetch leaves the state untouched, so calling again retries the
    /// same page.
    pub fn fetch_next_page(&mut self) -> Result<Option<&[NamedResource]>> {
        if !self.state.has_next_page() {
            return Ok(None);
        }
        let offset = self.state.next_offset();
        let page = self.conn.fetch_list(self.state.page_size, offset)?;
        self.state.record(&page);

        let start = self.entries.len();
        self.entries.extend(page.results);
        Ok(self.entries.get(start..))
    }
}
