//! # Routes
//!
//! Two screens, addressed like the paths of a web app:
//!
//! - `/countries`: the list
//! - `/country/{name}`: detail, where `{name}` is the percent-encoded
//!   common name
//!
//! The detail loader decodes the name before searching with it.

use std::fmt;

const LIST_PATH: &str = "/countries";
const DETAIL_PREFIX: &str = "/country/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    /// Holds the encoded path segment, as it would appear in a URL.
    Detail(String),
}

impl Route {
    /// Builds the detail route for a common name.
    pub fn detail_for(common_name: &str) -> Self {
        Route::Detail(urlencoding::encode(common_name).into_owned())
    }

    /// The decoded country name for a detail route.
    ///
    /// A segment that is not valid percent-encoded UTF-8 is used verbatim.
    pub fn country_name(&self) -> Option<String> {
        match self {
            Route::List => None,
            Route::Detail(segment) => Some(
                urlencoding::decode(segment)
                    .map(|s| s.into_owned())
                    .unwrap_or_else(|_| segment.clone()),
            ),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::List => f.write_str(LIST_PATH),
            Route::Detail(segment) => write!(f, "{DETAIL_PREFIX}{segment}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_route_encodes_name() {
        let route = Route::detail_for("United States");
        assert_eq!(route.to_string(), "/country/United%20States");
        assert_eq!(route.country_name().as_deref(), Some("United States"));
    }

    #[test]
    fn test_non_ascii_name_round_trips() {
        let route = Route::detail_for("Côte d'Ivoire");
        assert_eq!(route.to_string(), "/country/C%C3%B4te%20d%27Ivoire");
        assert_eq!(route.country_name().as_deref(), Some("Côte d'Ivoire"));
    }

    #[test]
    fn test_list_route_has_no_name() {
        assert_eq!(Route::List.to_string(), "/countries");
        assert_eq!(Route::List.country_name(), None);
    }

    #[test]
    fn test_invalid_encoding_used_verbatim() {
        let route = Route::Detail("%FF".to_string());
        assert_eq!(route.country_name().as_deref(), Some("%FF"));
    }
}
