pub mod client;
pub mod source;
pub mod types;

pub use client::RestCountriesClient;
pub use source::{CountrySource, DETAIL_FETCH_FAILED_MESSAGE, FETCH_FAILED_MESSAGE, FetchError};
pub use types::{Country, Currency};
