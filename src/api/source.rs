use std::fmt;

use async_trait::async_trait;

use super::types::Country;

/// User-facing message for any failed request against the country list.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data. Please try again later.";

/// User-facing message for a failed detail lookup.
pub const DETAIL_FETCH_FAILED_MESSAGE: &str = "Failed to fetch data";

/// Errors that can occur while talking to the country-data service.
#[derive(Debug)]
pub enum FetchError {
    /// Transport-level failure (DNS, connection refused, timeout).
    Network(String),
    /// The service answered with a non-success status.
    Api { status: u16, message: String },
    /// The body was not the JSON we expected.
    Parse(String),
}

impl FetchError {
    /// Collapses the error into the string shown to the user.
    ///
    /// Transport and status failures share one generic message; parse
    /// failures surface the underlying decoder message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            FetchError::Network(_) | FetchError::Api { .. } => fallback.to_string(),
            FetchError::Parse(msg) => msg.clone(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Anything that can hand out country records.
///
/// The TUI holds an `Arc<dyn CountrySource>` so tests can swap the HTTP
/// client for an in-memory fake.
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Returns the name of the source (for logging).
    fn name(&self) -> &str;

    /// Fetches the whole collection.
    async fn fetch_all(&self) -> Result<Vec<Country>, FetchError>;

    /// Searches by common name. May return several fuzzy matches, or none.
    async fn fetch_by_name(&self, name: &str) -> Result<Vec<Country>, FetchError>;
}
