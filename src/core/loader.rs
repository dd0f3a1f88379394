//! # Loader States
//!
//! The list and detail screens each own one loader. A loader starts in
//! `Loading`, and settles exactly once per request:
//!
//! ```text
//!            ┌──────── retry ────────┐
//!            ▼                       │
//!        Loading ──ok──▶ Loaded      │
//!            │                       │
//!            └──err──▶ Failed ───────┘
//! ```
//!
//! The detail loader adds `NotFound` for an empty match list.
//!
//! Every request is stamped with a sequence number from [`RequestSeq`]. A
//! response whose number is older than the latest request is dropped, so a
//! slow first fetch can never overwrite a newer retry.

use crate::api::{Country, DETAIL_FETCH_FAILED_MESSAGE, FETCH_FAILED_MESSAGE, FetchError};

/// Message shown when a name search matches nothing.
pub const NOT_FOUND_MESSAGE: &str = "No country data found.";

#[derive(Debug, Clone, PartialEq)]
pub enum ListLoad {
    Loading,
    Loaded(Vec<Country>),
    Failed(String),
}

impl ListLoad {
    pub fn from_result(result: Result<Vec<Country>, FetchError>) -> Self {
        match result {
            Ok(countries) => ListLoad::Loaded(countries),
            Err(e) => ListLoad::Failed(e.user_message(FETCH_FAILED_MESSAGE)),
        }
    }

    pub fn countries(&self) -> &[Country] {
        match self {
            ListLoad::Loaded(countries) => countries,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListLoad::Loading)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailLoad {
    Loading,
    Found(Box<Country>),
    NotFound,
    Failed(String),
}

impl DetailLoad {
    /// Takes the first match; an empty list is `NotFound`.
    pub fn from_result(result: Result<Vec<Country>, FetchError>) -> Self {
        match result {
            Ok(matches) => match matches.into_iter().next() {
                Some(country) => DetailLoad::Found(Box::new(country)),
                None => DetailLoad::NotFound,
            },
            Err(e) => DetailLoad::Failed(e.user_message(DETAIL_FETCH_FAILED_MESSAGE)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DetailLoad::Loading)
    }
}

/// Monotonic request counter for one loader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    /// Starts a new request and returns its number.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// True if `seq` belongs to the most recently started request.
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }
}
