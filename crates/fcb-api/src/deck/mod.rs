//! Decks: named collections of flashcards inside a deck group.

pub mod model;

use fcb_db::{
    WriteOutcome,
    models::{Deck, DeckListItem},
    repositories::deck,
};
use sqlx::PgPool;

use crate::resource::Resource;
use model::{DeckCreateDto, DeckUpdateDto};

/// The `/decks` resource
#[derive(Debug)]
pub struct Decks;

impl Resource for Decks {
    const NAME: &'static str = "Deck";
    const PATH: &'static str = "/decks";

    type Summary = DeckListItem;
    type Detail = Deck;
    type Create = DeckCreateDto;
    type Update = DeckUpdateDto;

    async fn find_all(pool: &PgPool) -> Result<Vec<DeckListItem>, sqlx::Error> {
        deck::find_all(pool).await
    }

    async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Deck>, sqlx::Error> {
        deck::find_by_id(pool, id).await
    }

    async fn create(pool: &PgPool, input: DeckCreateDto) -> Result<i32, sqlx::Error> {
        deck::insert(pool, &input.into()).await
    }

    async fn update(pool: &PgPool, input: DeckUpdateDto) -> Result<WriteOutcome, sqlx::Error> {
        deck::update(pool, &input.into()).await
    }

    async fn delete_by_id(pool: &PgPool, id: i32) -> Result<WriteOutcome, sqlx::Error> {
        deck::delete_by_id(pool, id).await
    }
}
