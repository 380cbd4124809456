#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! HTTP-level tests for `RestSuperheroApi` against a local mock server.

use humble_heroes_client::{
    ClientConfig, ClientError, NewSuperhero, RestSuperheroApi, Superhero, SuperheroApi,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COLLECTION_PATH: &str = "/api/superheroes";

fn api_for(server: &MockServer, max_retries: u32) -> RestSuperheroApi {
    let config = ClientConfig {
        max_retries,
        ..ClientConfig::with_endpoint(format!("{}{COLLECTION_PATH}", server.uri()))
    };
    RestSuperheroApi::new(&config).expect("mock server uri should be valid")
}

#[tokio::test]
async fn list_parses_collection_in_server_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "1", "name": "Zeta", "superpower": "flight", "humilityScore": 9},
            {"_id": "2", "name": "Alpha", "superpower": "patience", "humilityScore": 4}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let heroes = api_for(&server, 0).list_superheroes().await.unwrap();

    assert_eq!(
        heroes,
        vec![
            Superhero {
                id: "1".into(),
                name: "Zeta".into(),
                superpower: "flight".into(),
                humility_score: 9,
            },
            Superhero {
                id: "2".into(),
                name: "Alpha".into(),
                superpower: "patience".into(),
                humility_score: 4,
            },
        ]
    );
}

#[tokio::test]
async fn list_non_2xx_is_http_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let result = api_for(&server, 0).list_superheroes().await;

    assert!(
        matches!(&result, Err(ClientError::HttpStatus { status: 500, .. })),
        "unexpected result: {result:?}"
    );
}

#[tokio::test]
async fn list_malformed_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"heroes": []})))
        .mount(&server)
        .await;

    let result = api_for(&server, 0).list_superheroes().await;

    assert!(
        matches!(&result, Err(ClientError::ParseError { .. })),
        "unexpected result: {result:?}"
    );
}

#[tokio::test]
async fn create_posts_json_without_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COLLECTION_PATH))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "name": "Modesto",
            "superpower": "invisibility",
            "humilityScore": 7
        })))
        .respond_with(ResponseTemplate::new(201).set_body_string("not even json"))
        .expect(1)
        .mount(&server)
        .await;

    let result = api_for(&server, 0)
        .create_superhero(&NewSuperhero::new("Modesto", "invisibility", 7))
        .await;

    assert!(result.is_ok(), "unexpected result: {result:?}");
}

#[tokio::test]
async fn create_non_2xx_is_http_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COLLECTION_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_string("duplicate"))
        .mount(&server)
        .await;

    let result = api_for(&server, 0)
        .create_superhero(&NewSuperhero::new("A", "B", 5))
        .await;

    match result {
        Err(ClientError::HttpStatus {
            status,
            raw_message,
            ..
        }) => {
            assert_eq!(status, 400);
            assert_eq!(raw_message.as_deref(), Some("duplicate"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn no_retry_by_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let result = api_for(&server, 0).list_superheroes().await;

    assert!(result.is_err());
}

#[tokio::test]
async fn transient_failures_are_retried_when_enabled() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let heroes = api_for(&server, 2).list_superheroes().await.unwrap();

    assert!(heroes.is_empty());
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COLLECTION_PATH))
        .respond_with(ResponseTemplate::new(422))
        .expect(1)
        .mount(&server)
        .await;

    let result = api_for(&server, 3)
        .create_superhero(&NewSuperhero::new("A", "B", 5))
        .await;

    assert!(matches!(
        result,
        Err(ClientError::HttpStatus { status: 422, .. })
    ));
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    // Nothing listens on the discard port
    let config = ClientConfig::with_endpoint("http://127.0.0.1:9/api/superheroes");
    let api = RestSuperheroApi::new(&config).unwrap();

    let result = api.list_superheroes().await;

    assert!(
        matches!(
            &result,
            Err(ClientError::NetworkError { .. } | ClientError::Timeout { .. })
        ),
        "unexpected result: {result:?}"
    );
}
