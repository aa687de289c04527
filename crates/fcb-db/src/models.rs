use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::assemble::{HasChildren, JoinedRow};

/// Study status of a flashcard. New cards start as `New`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "study_status", rename_all = "UPPERCASE")]
pub enum StudyStatus {
    #[default]
    New,
    Young,
    Mature,
    Suspended,
    Buried,
}

/// Which side of a flashcard a content row holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "card_content_type", rename_all = "UPPERCASE")]
pub enum CardContentType {
    Front,
    Back,
}

// ---------------------------------------------------------------------------
// Deck groups
// ---------------------------------------------------------------------------

/// Deck group as shown in list endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DeckGroupListItem {
    pub id: i32,
    #[sqlx(rename = "group_name")]
    pub name: String,
    pub description: Option<String>,
}

/// Deck group with the summaries of its decks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckGroup {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub decks: Vec<DeckListItem>,
}

impl HasChildren for DeckGroup {
    type Child = DeckListItem;

    fn children_mut(&mut self) -> &mut Vec<DeckListItem> {
        &mut self.decks
    }
}

#[derive(Debug, Clone)]
pub struct DeckGroupCreate {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DeckGroupUpdate {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// `deck_group LEFT JOIN deck` row
#[derive(Debug, Clone, FromRow)]
pub struct DeckGroupDeckRow {
    pub id: i32,
    pub group_name: String,
    pub description: Option<String>,
    pub deck_id: Option<i32>,
    pub deck_name: Option<String>,
    pub deck_description: Option<String>,
}

impl JoinedRow for DeckGroupDeckRow {
    type ParentKey = i32;
    type ChildKey = i32;
    type Parent = DeckGroup;
    type Child = DeckListItem;

    fn parent_key(&self) -> i32 {
        self.id
    }

    fn to_parent(&self) -> DeckGroup {
        DeckGroup {
            id: self.id,
            name: self.group_name.clone(),
            description: self.description.clone(),
            decks: Vec::new(),
        }
    }

    fn to_child(&self) -> Option<(i32, DeckListItem)> {
        let deck_id = self.deck_id?;
        let deck = DeckListItem {
            id: deck_id,
            deck_group_id: self.id,
            name: self.deck_name.clone().unwrap_or_default(),
            description: self.deck_description.clone(),
        };
        Some((deck_id, deck))
    }
}

// ---------------------------------------------------------------------------
// Decks
// ---------------------------------------------------------------------------

/// Deck as shown in list endpoints and inside its deck group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DeckListItem {
    pub id: i32,
    #[sqlx(rename = "group_id")]
    pub deck_group_id: i32,
    #[sqlx(rename = "deck_name")]
    pub name: String,
    pub description: Option<String>,
}

/// Deck with the summaries of its flashcards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub id: i32,
    pub deck_group_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub flashcards: Vec<FlashcardListItem>,
}

impl HasChildren for Deck {
    type Child = FlashcardListItem;

    fn children_mut(&mut self) -> &mut Vec<FlashcardListItem> {
        &mut self.flashcards
    }
}

#[derive(Debug, Clone)]
pub struct DeckCreate {
    pub deck_group_id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DeckUpdate {
    pub id: i32,
    pub deck_group_id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// `deck LEFT JOIN flashcard LEFT JOIN card_content` row
#[derive(Debug, Clone, FromRow)]
pub struct DeckFlashcardRow {
    pub id: i32,
    pub group_id: i32,
    pub deck_name: String,
    pub description: Option<String>,
    pub flashcard_id: Option<i32>,
    pub front_text: Option<String>,
}

impl JoinedRow for DeckFlashcardRow {
    type ParentKey = i32;
    type ChildKey = i32;
    type Parent = Deck;
    type Child = FlashcardListItem;

    fn parent_key(&self) -> i32 {
        self.id
    }

    fn to_parent(&self) -> Deck {
        Deck {
            id: self.id,
            deck_group_id: self.group_id,
            name: self.deck_name.clone(),
            description: self.description.clone(),
            flashcards: Vec::new(),
        }
    }

    fn to_child(&self) -> Option<(i32, FlashcardListItem)> {
        let flashcard_id = self.flashcard_id?;
        let flashcard = FlashcardListItem {
            id: flashcard_id,
            deck_id: self.id,
            content_preview: self.front_text.clone().unwrap_or_default(),
        };
        Some((flashcard_id, flashcard))
    }
}

// ---------------------------------------------------------------------------
// Flashcards
// ---------------------------------------------------------------------------

/// Flashcard as shown in list endpoints and inside its deck.
/// `content_preview` is the front text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardListItem {
    pub id: i32,
    pub deck_id: i32,
    pub content_preview: String,
}

/// Text and optional media for one side of a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardContent {
    pub id: i32,
    #[serde(rename = "type")]
    pub content_type: CardContentType,
    pub text: String,
    pub media_url: Option<String>,
}

/// Full flashcard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: i32,
    pub deck_id: i32,
    pub front: CardContent,
    pub back: Option<CardContent>,
    pub study_status: StudyStatus,
    pub comment: Option<String>,
    /// Not stored yet, always empty
    pub tags: Vec<String>,
    pub last_viewed: DateTime<Utc>,
}

/// `flashcard JOIN card_content (front) LEFT JOIN card_content (back)` row
#[derive(Debug, Clone, FromRow)]
pub struct FlashcardRow {
    pub id: i32,
    pub deck_id: i32,
    pub study_status: StudyStatus,
    pub comment: Option<String>,
    pub last_viewed: DateTime<Utc>,
    pub front_id: i32,
    pub front_text: String,
    pub front_media_url: Option<String>,
    pub back_id: Option<i32>,
    pub back_text: Option<String>,
    pub back_media_url: Option<String>,
}

impl From<FlashcardRow> for Flashcard {
    fn from(row: FlashcardRow) -> Self {
        let back = match (row.back_id, row.back_text) {
            (Some(id), Some(text)) => Some(CardContent {
                id,
                content_type: CardContentType::Back,
                text,
                media_url: row.back_media_url,
            }),
            _ => None,
        };

        Self {
            id: row.id,
            deck_id: row.deck_id,
            front: CardContent {
                id: row.front_id,
                content_type: CardContentType::Front,
                text: row.front_text,
                media_url: row.front_media_url,
            },
            back,
            study_status: row.study_status,
            comment: row.comment,
            tags: Vec::new(),
            last_viewed: row.last_viewed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CardContentInput {
    pub text: String,
    pub media_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FlashcardCreate {
    pub deck_id: i32,
    pub front: CardContentInput,
    pub back: Option<CardContentInput>,
    pub comment: Option<String>,
}

/// Full replacement of a flashcard. Absent `front`/`back` leave that side as is.
#[derive(Debug, Clone)]
pub struct FlashcardUpdate {
    pub id: i32,
    pub deck_id: i32,
    pub front: Option<CardContentInput>,
    pub back: Option<CardContentInput>,
    pub comment: Option<String>,
}
