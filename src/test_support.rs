//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{Country, CountrySource, FetchError};

/// An in-memory source for tests that don't need real HTTP.
pub struct StaticSource {
    pub countries: Vec<Country>,
}

#[async_trait]
impl CountrySource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_all(&self) -> Result<Vec<Country>, FetchError> {
        Ok(self.countries.clone())
    }

    async fn fetch_by_name(&self, name: &str) -> Result<Vec<Country>, FetchError> {
        let needle = name.to_lowercase();
        Ok(self
            .countries
            .iter()
            .filter(|c| c.common_name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}

/// A country with only code and name set.
pub fn country(code: &str, name: &str) -> Country {
    Country {
        code: code.to_string(),
        common_name: name.to_string(),
        official_name: None,
        population: None,
        area_km2: None,
        capital: None,
        currencies: None,
        languages: None,
        region: None,
        subregion: None,
        flag_image_url: None,
        flag_alt: None,
    }
}

/// `n` countries coded `C0..` and named `Country 0..`.
pub fn numbered_countries(n: usize) -> Vec<Country> {
    (0..n)
        .map(|i| country(&format!("C{i}"), &format!("Country {i}")))
        .collect()
}

/// Creates a test App backed by an empty StaticSource.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(StaticSource {
        countries: Vec::new(),
    }))
}
