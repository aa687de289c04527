//! HTTP API for decks of flashcards grouped into deck groups.

pub mod config;
pub mod deck;
pub mod deck_group;
pub mod error;
pub mod flashcard;
pub mod metrics;
pub mod middleware;
pub mod resource;
pub mod router;
pub mod service;
pub mod state;
pub mod tracing;
pub mod validation;

pub use config::ApiConfig;
pub use state::ApiState;
