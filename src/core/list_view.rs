//! # Country List View-Model
//!
//! Pure derivations over the loaded collection:
//!
//! ```text
//! countries ──filter(query)──▶ filtered ──page(current_page)──▶ page slice
//! ```
//!
//! Nothing here is cached; every call re-derives from the collection. The
//! collection is a few hundred rows, so this is cheap.
//!
//! ## Page policy on search
//!
//! By default, editing the query leaves `current_page` alone. A page that
//! becomes out of range after filtering shows zero rows until the user pages
//! back. Set `reset_page_on_search` to jump back to page 1 instead.

use crate::api::Country;

/// Rows per page.
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub query: String,
    /// 1-based.
    pub current_page: usize,
    pub reset_page_on_search: bool,
}

impl Default for ListView {
    fn default() -> Self {
        Self {
            query: String::new(),
            current_page: 1,
            reset_page_on_search: false,
        }
    }
}

impl ListView {
    pub fn new(reset_page_on_search: bool) -> Self {
        Self {
            reset_page_on_search,
            ..Default::default()
        }
    }

    pub fn set_query(&mut self, query: String) {
        if query == self.query {
            return;
        }
        self.query = query;
        if self.reset_page_on_search {
            self.current_page = 1;
        }
    }

    pub fn push_char(&mut self, c: char) {
        let mut query = self.query.clone();
        query.push(c);
        self.set_query(query);
    }

    pub fn pop_char(&mut self) {
        let mut query = self.query.clone();
        if query.pop().is_some() {
            self.set_query(query);
        }
    }

    /// Countries whose common name contains the query, case-insensitively.
    /// Keeps collection order. An empty query matches everything.
    pub fn filtered<'a>(&self, countries: &'a [Country]) -> Vec<&'a Country> {
        filter_by_name(countries, &self.query)
    }

    /// The rows visible on the current page. Empty when the page is past the
    /// end of `filtered`.
    pub fn page_slice<'a, 'b>(&self, filtered: &'b [&'a Country]) -> &'b [&'a Country] {
        let start = self.current_page.saturating_sub(1).saturating_mul(PAGE_SIZE);
        if start >= filtered.len() {
            return &[];
        }
        let end = (start + PAGE_SIZE).min(filtered.len());
        &filtered[start..end]
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, filtered_len: usize) -> bool {
        self.current_page < page_count(filtered_len)
    }

    /// Moves back one page. No-op on page 1.
    pub fn previous(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    /// Moves forward one page. No-op on the last page.
    pub fn next(&mut self, filtered_len: usize) {
        if self.has_next(filtered_len) {
            self.current_page += 1;
        }
    }
}

/// Case-insensitive substring match on the common name.
pub fn filter_by_name<'a>(countries: &'a [Country], query: &str) -> Vec<&'a Country> {
    let needle = query.to_lowercase();
    countries
        .iter()
        .filter(|c| c.common_name.to_lowercase().contains(&needle))
        .collect()
}

/// `ceil(len / PAGE_SIZE)`, never less than 1.
pub fn page_count(filtered_len: usize) -> usize {
    filtered_len.div_ceil(PAGE_SIZE).max(1)
}
