use crate::common::{db, test_app, test_data};
use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_create_and_get_deck() {
    let (client, pool) = test_app().await;
    let group_id = test_data::create_deck_group(&client, &test_data::unique_name("Languages")).await;

    let response = client
        .post_json(
            "/decks",
            &json!({
                "deckGroupId": group_id,
                "name": "Spanish Vocabulary",
                "description": "Basic Spanish words"
            }),
        )
        .await;
    response.assert_status(StatusCode::CREATED);
    let id = response.json::<Value>()["id"].as_i64().unwrap();

    let response = client.get(&format!("/decks/{id}")).await;
    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "id": id,
            "deckGroupId": group_id,
            "name": "Spanish Vocabulary",
            "description": "Basic Spanish words",
            "flashcards": []
        })
    );

    db::delete_deck_group(&pool, group_id).await.unwrap();
}

#[tokio::test]
async fn test_deck_lists_flashcard_previews() {
    let (client, pool) = test_app().await;
    let (group_id, deck_id) = test_data::create_deck_fixture(&client).await;
    let apple = test_data::create_flashcard(
        &client,
        deck_id,
        "What is the Spanish word for apple?",
        Some("manzana"),
    )
    .await;
    let milk = test_data::create_flashcard(&client, deck_id, "What is the Spanish word for milk?", None).await;

    let body: Value = client.get(&format!("/decks/{deck_id}")).await.json();
    assert_eq!(
        body["flashcards"],
        json!([
            { "id": apple, "deckId": deck_id, "contentPreview": "What is the Spanish word for apple?" },
            { "id": milk, "deckId": deck_id, "contentPreview": "What is the Spanish word for milk?" },
        ])
    );

    db::delete_deck_group(&pool, group_id).await.unwrap();
}

#[tokio::test]
async fn test_list_decks_contains_created_deck() {
    let (client, pool) = test_app().await;
    let (group_id, deck_id) = test_data::create_deck_fixture(&client).await;

    let response = client.get("/decks").await;
    response.assert_status(StatusCode::OK);
    let decks: Vec<Value> = response.json();
    let deck = decks
        .iter()
        .find(|d| d["id"] == deck_id)
        .expect("Created deck missing from list");
    assert_eq!(deck["deckGroupId"], group_id);
    assert!(deck.get("flashcards").is_none());

    db::delete_deck_group(&pool, group_id).await.unwrap();
}

#[tokio::test]
async fn test_invalid_deck_reports_both_fields() {
    let (client, _pool) = test_app().await;

    let response = client
        .post_json("/decks", &json!({ "deckGroupId": 0, "name": "" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "code": "VALIDATION_FAILED",
            "message": "Validation failed for 2 field(s).",
            "fieldErrors": [
                { "property": "deckGroupId", "message": "The deck group ID should be positive number." },
                { "property": "name", "message": "The deck name is required." }
            ]
        })
    );
}

#[tokio::test]
async fn test_update_deck_moves_it_to_another_group() {
    let (client, pool) = test_app().await;
    let (group_id, deck_id) = test_data::create_deck_fixture(&client).await;
    let other_group = test_data::create_deck_group(&client, &test_data::unique_name("Other")).await;

    client
        .put_json(
            "/decks",
            &json!({ "id": deck_id, "deckGroupId": other_group, "name": "Renamed", "description": "moved" }),
        )
        .await
        .assert_status(StatusCode::OK);

    let deck: Value = client.get(&format!("/decks/{deck_id}")).await.json();
    assert_eq!(deck["deckGroupId"], other_group);
    assert_eq!(deck["name"], "Renamed");

    let old_group: Value = client.get(&format!("/deckgroups/{group_id}")).await.json();
    assert_eq!(old_group["decks"], json!([]));

    db::delete_deck_group(&pool, group_id).await.unwrap();
    db::delete_deck_group(&pool, other_group).await.unwrap();
}

#[tokio::test]
async fn test_update_missing_deck() {
    let (client, pool) = test_app().await;
    let (group_id, _) = test_data::create_deck_fixture(&client).await;
    let id = db::unused_id(&pool, "deck").await.unwrap();

    let response = client
        .put_json("/decks", &json!({ "id": id, "deckGroupId": group_id, "name": "Ghost" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], format!("Deck with id {id} not found."));

    db::delete_deck_group(&pool, group_id).await.unwrap();
}

#[tokio::test]
async fn test_create_deck_in_missing_group_is_an_internal_error() {
    let (client, pool) = test_app().await;
    let group_id = db::unused_id(&pool, "deck_group").await.unwrap();

    let response = client
        .post_json("/decks", &json!({ "deckGroupId": group_id, "name": "Orphan" }))
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>(), json!({ "message": "Internal server error" }));
}

#[tokio::test]
async fn test_delete_deck_twice() {
    let (client, pool) = test_app().await;
    let (group_id, deck_id) = test_data::create_deck_fixture(&client).await;

    client.delete(&format!("/decks/{deck_id}")).await.assert_status(StatusCode::OK);
    let response = client.delete(&format!("/decks/{deck_id}")).await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["message"],
        format!("Deck with id {deck_id} not found.")
    );

    db::delete_deck_group(&pool, group_id).await.unwrap();
}
