use sqlx::{Executor, Postgres};

use super::WriteOutcome;
use crate::{
    assemble::assemble_one,
    models::{Deck, DeckCreate, DeckFlashcardRow, DeckListItem, DeckUpdate},
};

/// All decks without their flashcards, ordered by id.
pub async fn find_all<'e, E>(executor: E) -> Result<Vec<DeckListItem>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, group_id, deck_name, description
            FROM deck
            ORDER BY id
        "#,
    )
    .fetch_all(executor)
    .await
}

/// A deck with its flashcard previews, ordered by flashcard id.
pub async fn find_by_id<'e, E>(executor: E, id: i32) -> Result<Option<Deck>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let rows: Vec<DeckFlashcardRow> = sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT
                d.id,
                d.group_id,
                d.deck_name,
                d.description,
                f.id as flashcard_id,
                cc.text as front_text
            FROM deck d
            LEFT JOIN flashcard f ON f.deck_id = d.id
            LEFT JOIN card_content cc ON cc.id = f.front_content_id
            WHERE d.id = $1
            ORDER BY f.id
        "#,
    )
    .bind(id)
    .fetch_all(executor)
    .await?;

    Ok(assemble_one(rows))
}

/// Insert a deck and return its id.
pub async fn insert<'e, E>(executor: E, deck: &DeckCreate) -> Result<i32, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let (id,): (i32,) = sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO deck (group_id, deck_name, description)
            VALUES ($1, $2, $3)
            RETURNING id
        "#,
    )
    .bind(deck.deck_group_id)
    .bind(&deck.name)
    .bind(&deck.description)
    .fetch_one(executor)
    .await?;

    Ok(id)
}

/// Replace group, name and description of a deck.
pub async fn update<'e, E>(executor: E, deck: &DeckUpdate) -> Result<WriteOutcome, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            UPDATE deck
            SET group_id = $1, deck_name = $2, description = $3
            WHERE id = $4
        "#,
    )
    .bind(deck.deck_group_id)
    .bind(&deck.name)
    .bind(&deck.description)
    .bind(deck.id)
    .execute(executor)
    .await?;

    Ok(WriteOutcome::from_rows_affected(result.rows_affected()))
}

/// Delete a deck together with its flashcards.
pub async fn delete_by_id<'e, E>(executor: E, id: i32) -> Result<WriteOutcome, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM deck
            WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(executor)
    .await?;

    Ok(WriteOutcome::from_rows_affected(result.rows_affected()))
}
