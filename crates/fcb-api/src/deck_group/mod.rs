//! Deck groups: named collections of decks.

pub mod model;

use fcb_db::{
    WriteOutcome,
    models::{DeckGroup, DeckGroupListItem},
    repositories::deck_group,
};
use sqlx::PgPool;

use crate::resource::Resource;
use model::{DeckGroupCreateDto, DeckGroupUpdateDto};

/// The `/deckgroups` resource
#[derive(Debug)]
pub struct DeckGroups;

impl Resource for DeckGroups {
    const NAME: &'static str = "Deck group";
    const PATH: &'static str = "/deckgroups";

    type Summary = DeckGroupListItem;
    type Detail = DeckGroup;
    type Create = DeckGroupCreateDto;
    type Update = DeckGroupUpdateDto;

    async fn find_all(pool: &PgPool) -> Result<Vec<DeckGroupListItem>, sqlx::Error> {
        deck_group::find_all(pool).await
    }

    async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<DeckGroup>, sqlx::Error> {
        deck_group::find_by_id(pool, id).await
    }

    async fn create(pool: &PgPool, input: DeckGroupCreateDto) -> Result<i32, sqlx::Error> {
        deck_group::insert(pool, &input.into()).await
    }

    async fn update(pool: &PgPool, input: DeckGroupUpdateDto) -> Result<WriteOutcome, sqlx::Error> {
        deck_group::update(pool, &input.into()).await
    }

    async fn delete_by_id(pool: &PgPool, id: i32) -> Result<WriteOutcome, sqlx::Error> {
        deck_group::delete_by_id(pool, id).await
    }
}
