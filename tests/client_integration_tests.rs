use std::time::Duration;

use terra::api::{CountrySource, FETCH_FAILED_MESSAGE, FetchError, RestCountriesClient};
use terra::core::format;
use tokio_test::{assert_err, assert_ok};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

// ============================================================================
// Helper Functions
// ============================================================================

const FRANCE: &str = r#"{
    "cca2": "FR",
    "name": { "common": "France", "official": "French Republic" },
    "population": 67391582,
    "area": 551695,
    "capital": ["Paris"],
    "currencies": { "EUR": { "name": "Euro", "symbol": "€" } },
    "languages": { "fra": "French" },
    "region": "Europe",
    "subregion": "Western Europe",
    "flags": { "png": "https://flagcdn.com/w320/fr.png", "alt": "Three vertical bands" }
}"#;

const ANTARCTICA: &str = r#"{
    "cca2": "AQ",
    "name": { "common": "Antarctica" },
    "population": 1000,
    "region": "Antarctic"
}"#;

fn client_for(server: &MockServer) -> RestCountriesClient {
    RestCountriesClient::new(Some(server.uri()), Some(Duration::from_secs(5)))
}

// ============================================================================
// Collection endpoint
// ============================================================================

#[tokio::test]
async fn test_fetch_all_parses_collection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!("[{FRANCE},{ANTARCTICA}]"))
                .insert_header("content-type", "application/json"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let countries = assert_ok!(client_for(&mock_server).fetch_all().await);

    assert_eq!(countries.len(), 2);
    assert_eq!(countries[0].code, "FR");
    assert_eq!(countries[0].official_name.as_deref(), Some("French Republic"));
    assert_eq!(format::number_or_na(countries[0].population), "67,391,582");
    assert_eq!(format::capital(&countries[0]), "Paris");
    assert_eq!(countries[1].code, "AQ");
    assert_eq!(format::capital(&countries[1]), "N/A");
    assert_eq!(format::currencies(&countries[1]), "N/A");
}

#[tokio::test]
async fn test_fetch_all_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let err = assert_err!(client_for(&mock_server).fetch_all().await);

    match &err {
        FetchError::Api { status, message } => {
            assert_eq!(*status, 500);
            assert!(message.contains("Internal Server Error"));
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
    assert_eq!(err.user_message(FETCH_FAILED_MESSAGE), FETCH_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_fetch_all_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[{\"cca2\": "))
        .mount(&mock_server)
        .await;

    let err = assert_err!(client_for(&mock_server).fetch_all().await);

    assert!(matches!(err, FetchError::Parse(_)));
    // Decoder messages are surfaced as-is
    assert_ne!(err.user_message(FETCH_FAILED_MESSAGE), FETCH_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_fetch_all_connection_refused() {
    // Nothing listens on port 9 locally
    let client = RestCountriesClient::new(
        Some("http://127.0.0.1:9".to_string()),
        Some(Duration::from_secs(2)),
    );

    let err = assert_err!(client.fetch_all().await);

    assert!(matches!(err, FetchError::Network(_)));
    assert_eq!(err.user_message(FETCH_FAILED_MESSAGE), FETCH_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_fetch_all_sends_fields_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/all"))
        .and(query_param("fields", "cca2,name,population"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!("[{ANTARCTICA}]")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).with_fields(vec![
        "cca2".to_string(),
        "name".to_string(),
        "population".to_string(),
    ]);
    let countries = assert_ok!(client.fetch_all().await);
    assert_eq!(countries.len(), 1);
}

#[tokio::test]
async fn test_currency_names_keep_wire_order() {
    let mock_server = MockServer::start().await;

    let body = r#"[{
        "cca2": "ZW",
        "name": { "common": "Zimbabwe" },
        "currencies": {
            "EUR": { "name": "Euro" },
            "USD": { "name": "Dollar", "symbol": "$" }
        }
    }]"#;

    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let countries = assert_ok!(client_for(&mock_server).fetch_all().await);
    assert_eq!(format::currencies(&countries[0]), "Euro, Dollar");
}

// ============================================================================
// Name endpoint
// ============================================================================

#[tokio::test]
async fn test_fetch_by_name_returns_matches() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/name/France"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!("[{FRANCE}]")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let matches = assert_ok!(client_for(&mock_server).fetch_by_name("France").await);

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].common_name, "France");
    assert_eq!(format::languages(&matches[0]), "French");
    assert_eq!(matches[0].flag_alt.as_deref(), Some("Three vertical bands"));
}

#[tokio::test]
async fn test_fetch_by_name_encodes_spaces() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/name/United%20Kingdom"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[{"cca2": "GB", "name": {"common": "United Kingdom"}}]"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let matches = assert_ok!(client_for(&mock_server).fetch_by_name("United Kingdom").await);
    assert_eq!(matches[0].code, "GB");
}

#[tokio::test]
async fn test_fetch_by_name_not_found_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/name/Atlantis"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string(r#"{"status": 404, "message": "Not Found"}"#),
        )
        .mount(&mock_server)
        .await;

    let matches = assert_ok!(client_for(&mock_server).fetch_by_name("Atlantis").await);
    assert!(matches.is_empty());
}

#[tokio::test]
async fn test_fetch_by_name_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/name/France"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let err = assert_err!(client_for(&mock_server).fetch_by_name("France").await);
    assert!(matches!(err, FetchError::Api { status: 503, .. }));
}
