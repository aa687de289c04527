//! Flashcard routes beyond the shared CRUD table.

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{post, put},
};
use fcb_db::repositories::flashcard;

use super::{Flashcards, model::StudyStatusUpdateDto};
use crate::{
    ApiState,
    error::ApiError,
    resource::{self, Resource},
    service::{ensure_found, timed},
    validation::{IdPath, ValidatedJson},
};

/// Create the flashcard routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/flashcards/study-status", put(update_study_status))
        .route("/flashcards/{id}/viewed", post(mark_viewed))
        .merge(resource::routes::<Flashcards>())
}

async fn update_study_status(
    State(state): State<ApiState>,
    ValidatedJson(input): ValidatedJson<StudyStatusUpdateDto>,
) -> Result<StatusCode, ApiError> {
    let outcome = timed(
        Flashcards::NAME,
        "update_study_status",
        flashcard::update_study_status(&state.pool, input.id, input.study_status),
    )
    .await?;
    ensure_found(outcome, Flashcards::NAME, input.id)?;

    tracing::info!(id = input.id, study_status = ?input.study_status, "Study status updated");
    Ok(StatusCode::OK)
}

async fn mark_viewed(State(state): State<ApiState>, IdPath(id): IdPath) -> Result<StatusCode, ApiError> {
    let outcome = timed(
        Flashcards::NAME,
        "touch_last_viewed",
        flashcard::touch_last_viewed(&state.pool, id),
    )
    .await?;
    ensure_found(outcome, Flashcards::NAME, id)?;
    Ok(StatusCode::OK)
}
