use fcb_db::models::{DeckCreate, DeckUpdate};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{resource::Identified, validation::not_blank};

/// Body of `POST /decks`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeckCreateDto {
    #[validate(range(min = 1, message = "The deck group ID should be positive number."))]
    #[serde(default)]
    pub deck_group_id: i32,
    #[validate(custom(function = "not_blank", message = "The deck name is required."))]
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
}

impl From<DeckCreateDto> for DeckCreate {
    fn from(dto: DeckCreateDto) -> Self {
        Self {
            deck_group_id: dto.deck_group_id,
            name: dto.name,
            description: dto.description,
        }
    }
}

/// Body of `PUT /decks`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeckUpdateDto {
    #[validate(range(min = 1, message = "The deck ID should be positive number."))]
    #[serde(default)]
    pub id: i32,
    #[validate(range(min = 1, message = "The deck group ID should be positive number."))]
    #[serde(default)]
    pub deck_group_id: i32,
    #[validate(custom(function = "not_blank", message = "The deck name is required."))]
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
}

impl Identified for DeckUpdateDto {
    fn id(&self) -> i32 {
        self.id
    }
}

impl From<DeckUpdateDto> for DeckUpdate {
    fn from(dto: DeckUpdateDto) -> Self {
        Self {
            id: dto.id,
            deck_group_id: dto.deck_group_id,
            name: dto.name,
            description: dto.description,
        }
    }
}
