use crate::common::{TestClient, TestStateBuilder, test_app};
use axum::http::StatusCode;
use fcb_api::router;
use serde_json::{Value, json};

#[tokio::test]
async fn test_health() {
    let (client, _pool) = test_app().await;

    client.get("/health").await.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (client, _pool) = test_app().await;

    let response = client.get("/cards").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.json::<Value>()["message"].is_string());
}

#[tokio::test]
async fn test_invalid_json_is_malformed() {
    let (client, _pool) = test_app().await;

    let response = client.post_raw("/deckgroups", "{\"name\": ").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "MALFORMED_REQUEST");
    assert_eq!(body["fieldErrors"], json!([]));
}

#[tokio::test]
async fn test_unparsable_id_is_malformed() {
    let (client, _pool) = test_app().await;

    let responses = [
        client.get("/decks/abc").await,
        client.get("/decks/99999999999").await,
        client.delete("/deckgroups/abc").await,
        client.post("/flashcards/abc/viewed").await,
    ];

    for response in responses {
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["code"], "MALFORMED_REQUEST");
        assert_eq!(body["fieldErrors"], json!([]));
    }
}

#[tokio::test]
async fn test_responses_carry_request_id_and_security_headers() {
    let (client, _pool) = test_app().await;

    let response = client.get("/deckgroups").await;
    response.assert_status(StatusCode::OK);
    assert!(response.headers.get("x-request-id").is_some());
    assert_eq!(response.headers.get("x-content-type-options").unwrap(), "nosniff");
    assert!(response.headers.get("strict-transport-security").is_none());
}

#[tokio::test]
async fn test_production_sends_hsts() {
    let state = TestStateBuilder::new()
        .with_var("ENV", "production")
        .build()
        .await
        .expect("Failed to build test state");
    let client = TestClient::new(router::app(state));

    let response = client.get("/health").await;
    response.assert_status(StatusCode::OK);
    assert!(response.headers.get("strict-transport-security").is_some());
}
