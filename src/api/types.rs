//! Wire types for the country-data API.
//!
//! The remote shape is nested (`name.common`, `flags.png`) and every field
//! except the code and name may be missing. We flatten it into `Country`
//! on the way in so the rest of the crate never touches raw JSON.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

/// A single country as returned by the API.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "RawCountry")]
pub struct Country {
    /// ISO 3166-1 alpha-2 code. Stable key for rows and selection.
    pub code: String,
    pub common_name: String,
    pub official_name: Option<String>,
    pub population: Option<f64>,
    pub area_km2: Option<f64>,
    pub capital: Option<Vec<String>>,
    /// Currency code → currency, in wire order.
    pub currencies: Option<Vec<(String, Currency)>>,
    /// Language code → language name, in wire order.
    pub languages: Option<Vec<(String, String)>>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub flag_image_url: Option<String>,
    pub flag_alt: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Currency {
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

// ============================================================================
// Raw wire shape
// ============================================================================

#[derive(Deserialize, Debug)]
struct RawName {
    common: String,
    #[serde(default)]
    official: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
struct RawFlags {
    #[serde(default)]
    png: Option<String>,
    #[serde(default)]
    alt: Option<String>,
}

#[derive(Deserialize, Debug)]
struct RawCountry {
    cca2: String,
    name: RawName,
    #[serde(default)]
    population: Option<f64>,
    #[serde(default)]
    area: Option<f64>,
    #[serde(default)]
    capital: Option<Vec<String>>,
    #[serde(default, deserialize_with = "ordered_map")]
    currencies: Option<Vec<(String, Currency)>>,
    #[serde(default, deserialize_with = "ordered_map")]
    languages: Option<Vec<(String, String)>>,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    subregion: Option<String>,
    #[serde(default)]
    flags: Option<RawFlags>,
}

impl From<RawCountry> for Country {
    fn from(raw: RawCountry) -> Self {
        let flags = raw.flags.unwrap_or_default();
        Country {
            code: raw.cca2,
            common_name: raw.name.common,
            official_name: raw.name.official,
            population: raw.population,
            area_km2: raw.area,
            capital: raw.capital,
            currencies: raw.currencies,
            languages: raw.languages,
            region: raw.region,
            subregion: raw.subregion,
            flag_image_url: flags.png,
            flag_alt: flags.alt,
        }
    }
}

/// Deserializes a JSON object into key/value pairs, keeping document order.
/// A `null` value is treated the same as a missing field.
fn ordered_map<'de, D, V>(deserializer: D) -> Result<Option<Vec<(String, V)>>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct OrderedMapVisitor<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
        type Value = Option<Vec<(String, V)>>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a JSON object or null")
        }

        fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
            d.deserialize_map(self)
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((key, value)) = access.next_entry::<String, V>()? {
                entries.push((key, value));
            }
            Ok(Some(entries))
        }
    }

    deserializer.deserialize_option(OrderedMapVisitor(PhantomData))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRANCE: &str = r#"{
        "cca2": "FR",
        "name": { "common": "France", "official": "French Republic" },
        "population": 67391582,
        "area": 551695.0,
        "capital": ["Paris"],
        "currencies": { "EUR": { "name": "Euro", "symbol": "€" } },
        "languages": { "fra": "French" },
        "region": "Europe",
        "subregion": "Western Europe",
        "flags": { "png": "https://flagcdn.com/w320/fr.png", "alt": "Tricolour" }
    }"#;

    #[test]
    fn test_country_flattens_wire_shape() {
        let country: Country = serde_json::from_str(FRANCE).unwrap();
        assert_eq!(country.code, "FR");
        assert_eq!(country.common_name, "France");
        assert_eq!(country.official_name.as_deref(), Some("French Republic"));
        assert_eq!(country.population, Some(67391582.0));
        assert_eq!(country.capital, Some(vec!["Paris".to_string()]));
        assert_eq!(
            country.flag_image_url.as_deref(),
            Some("https://flagcdn.com/w320/fr.png")
        );
        assert_eq!(country.languages, Some(vec![("fra".into(), "French".into())]));
    }

    #[test]
    fn test_missing_optional_fields_are_none() {
        let json = r#"{ "cca2": "AQ", "name": { "common": "Antarctica" } }"#;
        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.common_name, "Antarctica");
        assert!(country.population.is_none());
        assert!(country.capital.is_none());
        assert!(country.currencies.is_none());
        assert!(country.flag_image_url.is_none());
    }

    #[test]
    fn test_null_map_is_none() {
        let json = r#"{ "cca2": "AQ", "name": { "common": "Antarctica" }, "currencies": null }"#;
        let country: Country = serde_json::from_str(json).unwrap();
        assert!(country.currencies.is_none());
    }

    #[test]
    fn test_currencies_keep_document_order() {
        let json = r#"{
            "cca2": "ZW",
            "name": { "common": "Zimbabwe" },
            "currencies": {
                "USD": { "name": "United States dollar" },
                "BWP": { "name": "Botswana pula" },
                "ZWL": { "name": "Zimbabwean dollar" }
            }
        }"#;
        let country: Country = serde_json::from_str(json).unwrap();
        let codes: Vec<&str> = country
            .currencies
            .as_ref()
            .unwrap()
            .iter()
            .map(|(code, _)| code.as_str())
            .collect();
        assert_eq!(codes, vec!["USD", "BWP", "ZWL"]);
    }

    #[test]
    fn test_missing_code_is_an_error() {
        let json = r#"{ "name": { "common": "Nowhere" } }"#;
        assert!(serde_json::from_str::<Country>(json).is_err());
    }
}
