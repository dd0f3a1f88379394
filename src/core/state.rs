//! # Application State
//!
//! Core business state for terra. Domain logic only; presentation state
//! (row cursor, input mode) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn CountrySource>  // where countries come from
//! ├── route: Route                     // list or detail
//! ├── list: ListLoad                   // Loading | Loaded | Failed
//! ├── list_seq: RequestSeq             // newest list request
//! ├── view: ListView                   // query + current page
//! ├── selection: Selection             // up to two countries to compare
//! ├── detail: DetailLoad               // Loading | Found | NotFound | Failed
//! ├── detail_seq: RequestSeq           // newest detail request
//! ├── cache: QueryCache                // best-effort shared query cache
//! └── status_message: String           // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::api::{Country, CountrySource};
use crate::core::cache::QueryCache;
use crate::core::config::ResolvedConfig;
use crate::core::list_view::ListView;
use crate::core::loader::{DetailLoad, ListLoad, RequestSeq};
use crate::core::route::Route;
use crate::core::selection::Selection;

pub struct App {
    pub source: Arc<dyn CountrySource>,
    pub route: Route,
    pub list: ListLoad,
    pub list_seq: RequestSeq,
    pub view: ListView,
    pub selection: Selection,
    pub detail: DetailLoad,
    pub detail_seq: RequestSeq,
    pub cache: QueryCache,
    pub status_message: String,
}

impl App {
    pub fn new(source: Arc<dyn CountrySource>) -> Self {
        Self {
            source,
            route: Route::List,
            list: ListLoad::Loading,
            list_seq: RequestSeq::default(),
            view: ListView::default(),
            selection: Selection::new(),
            detail: DetailLoad::Loading,
            detail_seq: RequestSeq::default(),
            cache: QueryCache::new(),
            status_message: String::new(),
        }
    }

    pub fn from_config(source: Arc<dyn CountrySource>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(source);
        app.view = ListView::new(config.reset_page_on_search);
        app
    }

    /// Countries matching the current query, in collection order.
    pub fn filtered(&self) -> Vec<&Country> {
        self.view.filtered(self.list.countries())
    }

    /// Rows on the current page.
    pub fn page_rows(&self) -> Vec<&Country> {
        let filtered = self.filtered();
        self.view.page_slice(&filtered).to_vec()
    }

    pub fn find_by_code(&self, code: &str) -> Option<&Country> {
        self.list.countries().iter().find(|c| c.code == code)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.list.is_loading());
        assert_eq!(app.view.current_page, 1);
        assert!(app.selection.is_empty());
        assert_eq!(app.route, crate::core::route::Route::List);
        assert!(app.filtered().is_empty());
    }
}
