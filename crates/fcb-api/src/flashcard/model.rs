use fcb_db::models::{CardContentInput, FlashcardCreate, FlashcardUpdate, StudyStatus};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{resource::Identified, validation::not_blank};

/// One side of a card in a request body
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CardContentDto {
    #[validate(custom(function = "not_blank", message = "The card content is required."))]
    #[serde(default)]
    pub text: String,
    pub media_url: Option<String>,
}

impl From<CardContentDto> for CardContentInput {
    fn from(dto: CardContentDto) -> Self {
        Self {
            text: dto.text,
            media_url: dto.media_url,
        }
    }
}

/// Body of `POST /flashcards`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardCreateDto {
    #[validate(range(min = 1, message = "The deck ID should be positive number."))]
    #[serde(default)]
    pub deck_id: i32,
    #[validate(nested)]
    pub front: CardContentDto,
    #[validate(nested)]
    pub back: Option<CardContentDto>,
    pub comment: Option<String>,
}

impl From<FlashcardCreateDto> for FlashcardCreate {
    fn from(dto: FlashcardCreateDto) -> Self {
        Self {
            deck_id: dto.deck_id,
            front: dto.front.into(),
            back: dto.back.map(Into::into),
            comment: dto.comment,
        }
    }
}

/// Body of `PUT /flashcards`. Omitted sides keep their current content.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardUpdateDto {
    #[validate(range(min = 1, message = "The card ID should be positive number."))]
    #[serde(default)]
    pub id: i32,
    #[validate(range(min = 1, message = "The deck ID should be positive number."))]
    #[serde(default)]
    pub deck_id: i32,
    #[validate(nested)]
    pub front: Option<CardContentDto>,
    #[validate(nested)]
    pub back: Option<CardContentDto>,
    pub comment: Option<String>,
}

impl Identified for FlashcardUpdateDto {
    fn id(&self) -> i32 {
        self.id
    }
}

impl From<FlashcardUpdateDto> for FlashcardUpdate {
    fn from(dto: FlashcardUpdateDto) -> Self {
        Self {
            id: dto.id,
            deck_id: dto.deck_id,
            front: dto.front.map(Into::into),
            back: dto.back.map(Into::into),
            comment: dto.comment,
        }
    }
}

/// Body of `PUT /flashcards/study-status`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StudyStatusUpdateDto {
    #[validate(range(min = 1, message = "The card ID should be positive number."))]
    #[serde(default)]
    pub id: i32,
    pub study_status: StudyStatus,
}
