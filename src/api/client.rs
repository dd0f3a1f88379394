//! HTTP client for the REST Countries API.
//!
//! Two endpoints are used:
//! - `GET {base_url}/all` for the whole collection
//! - `GET {base_url}/name/{name}` for a fuzzy name search
//!
//! No pagination or filtering is pushed to the server.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::source::{CountrySource, FetchError};
use super::types::Country;

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// REST Countries client.
pub struct RestCountriesClient {
    base_url: String,
    fields: Vec<String>,
    client: reqwest::Client,
}

impl RestCountriesClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// * `base_url` - Optional custom base URL (defaults to the public v3.1 API)
    /// * `timeout` - Optional per-request timeout. `None` waits forever.
    pub fn new(base_url: Option<String>, timeout: Option<Duration>) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            warn!("Failed to build HTTP client with timeout, using defaults: {e}");
            reqwest::Client::new()
        });

        Self {
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            fields: Vec::new(),
            client,
        }
    }

    /// Restricts the `/all` response to the given fields (`?fields=a,b`).
    /// Empty means no query string at all.
    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = fields;
        self
    }

    fn all_url(&self) -> String {
        if self.fields.is_empty() {
            format!("{}/all", self.base_url)
        } else {
            format!("{}/all?fields={}", self.base_url, self.fields.join(","))
        }
    }

    fn name_url(&self, name: &str) -> String {
        format!("{}/name/{}", self.base_url, urlencoding::encode(name))
    }

    /// Issues a GET and returns the raw body of a successful response.
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        info!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("Response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Country API error: {} - {}", status, err_body);
            return Err(FetchError::Api {
                status,
                message: err_body,
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))
    }
}

fn parse_countries(body: &str) -> Result<Vec<Country>, FetchError> {
    serde_json::from_str(body).map_err(|e| {
        warn!("Failed to parse country payload: {e}");
        FetchError::Parse(e.to_string())
    })
}

#[async_trait]
impl CountrySource for RestCountriesClient {
    fn name(&self) -> &str {
        "restcountries"
    }

    async fn fetch_all(&self) -> Result<Vec<Country>, FetchError> {
        let body = self.get(&self.all_url()).await?;
        let countries = parse_countries(&body)?;
        info!("Fetched {} countries", countries.len());
        Ok(countries)
    }

    async fn fetch_by_name(&self, name: &str) -> Result<Vec<Country>, FetchError> {
        match self.get(&self.name_url(name)).await {
            Ok(body) => {
                let matches = parse_countries(&body)?;
                debug!("Name search '{}' returned {} matches", name, matches.len());
                Ok(matches)
            }
            // The name endpoint answers 404 when nothing matches.
            Err(FetchError::Api { status: 404, .. }) => {
                info!("Name search '{}' returned no matches", name);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}
