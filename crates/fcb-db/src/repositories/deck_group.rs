use sqlx::{Executor, Postgres};

use super::WriteOutcome;
use crate::{
    assemble::assemble_one,
    models::{DeckGroup, DeckGroupCreate, DeckGroupDeckRow, DeckGroupListItem, DeckGroupUpdate},
};

/// All deck groups without their decks, ordered by id.
pub async fn find_all<'e, E>(executor: E) -> Result<Vec<DeckGroupListItem>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, group_name, description
            FROM deck_group
            ORDER BY id
        "#,
    )
    .fetch_all(executor)
    .await
}

/// A deck group with its decks, ordered by deck id.
pub async fn find_by_id<'e, E>(executor: E, id: i32) -> Result<Option<DeckGroup>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let rows: Vec<DeckGroupDeckRow> = sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT
                dg.id,
                dg.group_name,
                dg.description,
                d.id as deck_id,
                d.deck_name,
                d.description as deck_description
            FROM deck_group dg
            LEFT JOIN deck d ON d.group_id = dg.id
            WHERE dg.id = $1
            ORDER BY d.id
        "#,
    )
    .bind(id)
    .fetch_all(executor)
    .await?;

    Ok(assemble_one(rows))
}

/// Insert a deck group and return its id.
pub async fn insert<'e, E>(executor: E, deck_group: &DeckGroupCreate) -> Result<i32, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let (id,): (i32,) = sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO deck_group (group_name, description)
            VALUES ($1, $2)
            RETURNING id
        "#,
    )
    .bind(&deck_group.name)
    .bind(&deck_group.description)
    .fetch_one(executor)
    .await?;

    Ok(id)
}

/// Replace name and description of a deck group.
pub async fn update<'e, E>(executor: E, deck_group: &DeckGroupUpdate) -> Result<WriteOutcome, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            UPDATE deck_group
            SET group_name = $1, description = $2
            WHERE id = $3
        "#,
    )
    .bind(&deck_group.name)
    .bind(&deck_group.description)
    .bind(deck_group.id)
    .execute(executor)
    .await?;

    Ok(WriteOutcome::from_rows_affected(result.rows_affected()))
}

/// Delete a deck group. Its decks and their flashcards go with it.
pub async fn delete_by_id<'e, E>(executor: E, id: i32) -> Result<WriteOutcome, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM deck_group
            WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(executor)
    .await?;

    Ok(WriteOutcome::from_rows_affected(result.rows_affected()))
}
