//! Flashcards: a front side, an optional back side and study metadata.
//!
//! Each side lives in its own `card_content` row, so creating and updating a
//! card spans several statements and runs in one transaction.

pub mod model;
pub mod routes;

use fcb_db::{
    WriteOutcome,
    models::{Flashcard, FlashcardListItem},
    repositories::flashcard,
};
use sqlx::PgPool;

use crate::resource::Resource;
use model::{FlashcardCreateDto, FlashcardUpdateDto};

/// The `/flashcards` resource
#[derive(Debug)]
pub struct Flashcards;

impl Resource for Flashcards {
    const NAME: &'static str = "Flashcard";
    const PATH: &'static str = "/flashcards";

    type Summary = FlashcardListItem;
    type Detail = Flashcard;
    type Create = FlashcardCreateDto;
    type Update = FlashcardUpdateDto;

    async fn find_all(pool: &PgPool) -> Result<Vec<FlashcardListItem>, sqlx::Error> {
        flashcard::find_all(pool).await
    }

    async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Flashcard>, sqlx::Error> {
        flashcard::find_by_id(pool, id).await
    }

    async fn create(pool: &PgPool, input: FlashcardCreateDto) -> Result<i32, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let id = flashcard::insert(&mut *tx, &input.into()).await?;
        tx.commit().await?;
        Ok(id)
    }

    async fn update(pool: &PgPool, input: FlashcardUpdateDto) -> Result<WriteOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let outcome = flashcard::update(&mut *tx, &input.into()).await?;
        // Nothing was written for an unknown id, dropping the transaction rolls it back
        if outcome.is_applied() {
            tx.commit().await?;
        }
        Ok(outcome)
    }

    async fn delete_by_id(pool: &PgPool, id: i32) -> Result<WriteOutcome, sqlx::Error> {
        flashcard::delete_by_id(pool, id).await
    }
}
