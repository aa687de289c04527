use fcb_db::models::{DeckGroupCreate, DeckGroupUpdate};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{resource::Identified, validation::not_blank};

/// Body of `POST /deckgroups`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeckGroupCreateDto {
    #[validate(custom(function = "not_blank", message = "The deck group name is required."))]
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
}

impl From<DeckGroupCreateDto> for DeckGroupCreate {
    fn from(dto: DeckGroupCreateDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }
}

/// Body of `PUT /deckgroups`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeckGroupUpdateDto {
    #[validate(range(min = 1, message = "The deck group ID should be positive number."))]
    #[serde(default)]
    pub id: i32,
    #[validate(custom(function = "not_blank", message = "The deck group name is required."))]
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
}

impl Identified for DeckGroupUpdateDto {
    fn id(&self) -> i32 {
        self.id
    }
}

impl From<DeckGroupUpdateDto> for DeckGroupUpdate {
    fn from(dto: DeckGroupUpdateDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            description: dto.description,
        }
    }
}
