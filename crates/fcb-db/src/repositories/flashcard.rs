use sqlx::{Executor, PgConnection, Postgres};

use super::WriteOutcome;
use crate::models::{
    CardContentInput, CardContentType, Flashcard, FlashcardCreate, FlashcardListItem,
    FlashcardRow, FlashcardUpdate, StudyStatus,
};

/// All flashcards as previews of their front text, ordered by id.
pub async fn find_all<'e, E>(executor: E) -> Result<Vec<FlashcardListItem>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT f.id, f.deck_id, cc.text as content_preview
            FROM flashcard f
            JOIN card_content cc ON cc.id = f.front_content_id
            ORDER BY f.id
        "#,
    )
    .fetch_all(executor)
    .await
}

/// A flashcard with both sides of content.
pub async fn find_by_id<'e, E>(executor: E, id: i32) -> Result<Option<Flashcard>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let row: Option<FlashcardRow> = sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT
                f.id,
                f.deck_id,
                f.study_status,
                f.comment,
                f.last_viewed,
                front.id as front_id,
                front.text as front_text,
                front.media_url as front_media_url,
                back.id as back_id,
                back.text as back_text,
                back.media_url as back_media_url
            FROM flashcard f
            JOIN card_content front ON front.id = f.front_content_id
            LEFT JOIN card_content back ON back.id = f.back_content_id
            WHERE f.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(row.map(Flashcard::from))
}

async fn insert_content(
    conn: &mut PgConnection,
    content: &CardContentInput,
    content_type: CardContentType,
) -> Result<i32, sqlx::Error> {
    let (id,): (i32,) = sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO card_content (card_content_type, text, media_url)
            VALUES ($1, $2, $3)
            RETURNING id
        "#,
    )
    .bind(content_type)
    .bind(&content.text)
    .bind(&content.media_url)
    .fetch_one(&mut *conn)
    .await?;

    Ok(id)
}

async fn update_content(
    conn: &mut PgConnection,
    content_id: i32,
    content: &CardContentInput,
) -> Result<(), sqlx::Error> {
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            UPDATE card_content
            SET text = $1, media_url = $2
            WHERE id = $3
        "#,
    )
    .bind(&content.text)
    .bind(&content.media_url)
    .bind(content_id)
    .execute(&mut *conn)
    .await?;

    // the id was read from the flashcard row, so the content row exists
    debug_assert_eq!(result.rows_affected(), 1);
    Ok(())
}

/// Insert the front content, the optional back content and the flashcard row.
///
/// Three statements; run inside a transaction so a failure leaves no orphan
/// content rows behind.
pub async fn insert(conn: &mut PgConnection, card: &FlashcardCreate) -> Result<i32, sqlx::Error> {
    let front_content_id = insert_content(conn, &card.front, CardContentType::Front).await?;
    let back_content_id = match &card.back {
        Some(back) => Some(insert_content(conn, back, CardContentType::Back).await?),
        None => None,
    };

    let (id,): (i32,) = sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO flashcard (deck_id, front_content_id, back_content_id, study_status, comment)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
        "#,
    )
    .bind(card.deck_id)
    .bind(front_content_id)
    .bind(back_content_id)
    .bind(StudyStatus::New)
    .bind(&card.comment)
    .fetch_one(&mut *conn)
    .await?;

    Ok(id)
}

/// Update the flashcard row, then whichever sides are supplied.
///
/// Content rows are found through the card itself, never by a client supplied
/// content id. A back side supplied for a card without one is created and linked.
/// Run inside a transaction; on `NotFound` nothing has been written.
pub async fn update(conn: &mut PgConnection, card: &FlashcardUpdate) -> Result<WriteOutcome, sqlx::Error> {
    let content_ids: Option<(i32, Option<i32>)> = sqlx::query_as(
        // language=PostgreSQL
        r#"
            UPDATE flashcard
            SET deck_id = $1, comment = $2
            WHERE id = $3
            RETURNING front_content_id, back_content_id
        "#,
    )
    .bind(card.deck_id)
    .bind(&card.comment)
    .bind(card.id)
    .fetch_optional(&mut *conn)
    .await?;

    let Some((front_content_id, back_content_id)) = content_ids else {
        return Ok(WriteOutcome::NotFound);
    };

    if let Some(front) = &card.front {
        update_content(conn, front_content_id, front).await?;
    }

    if let Some(back) = &card.back {
        match back_content_id {
            Some(back_content_id) => {
                update_content(conn, back_content_id, back).await?;
            }
            None => {
                let back_content_id = insert_content(conn, back, CardContentType::Back).await?;
                sqlx::query(
                    // language=PostgreSQL
                    r#"
                        UPDATE flashcard
                        SET back_content_id = $1
                        WHERE id = $2
                    "#,
                )
                .bind(back_content_id)
                .bind(card.id)
                .execute(&mut *conn)
                .await?;
            }
        }
    }

    Ok(WriteOutcome::Applied)
}

/// Set the study status of a flashcard.
pub async fn update_study_status<'e, E>(
    executor: E,
    id: i32,
    study_status: StudyStatus,
) -> Result<WriteOutcome, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            UPDATE flashcard
            SET study_status = $1
            WHERE id = $2
        "#,
    )
    .bind(study_status)
    .bind(id)
    .execute(executor)
    .await?;

    Ok(WriteOutcome::from_rows_affected(result.rows_affected()))
}

/// Set `last_viewed` to the current time.
pub async fn touch_last_viewed<'e, E>(executor: E, id: i32) -> Result<WriteOutcome, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            UPDATE flashcard
            SET last_viewed = NOW()
            WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(executor)
    .await?;

    Ok(WriteOutcome::from_rows_affected(result.rows_affected()))
}

/// Delete a flashcard. Its content rows are removed by the `flashcard` delete trigger.
pub async fn delete_by_id<'e, E>(executor: E, id: i32) -> Result<WriteOutcome, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM flashcard
            WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(executor)
    .await?;

    Ok(WriteOutcome::from_rows_affected(result.rows_affected()))
}
