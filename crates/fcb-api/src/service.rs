//! Service layer shared by all resources.
//!
//! Calls into a [`Resource`], records query metrics and turns missing rows
//! into [`ApiError::NotFound`].

use std::time::Instant;

use fcb_db::WriteOutcome;
use sqlx::PgPool;

use crate::{
    error::ApiError,
    metrics::record_db_query,
    resource::{Identified, Resource},
};

/// Map a write outcome to `NotFound` for `entity`/`id`.
pub fn ensure_found(outcome: WriteOutcome, entity: &'static str, id: i32) -> Result<(), ApiError> {
    match outcome {
        WriteOutcome::Applied => Ok(()),
        WriteOutcome::NotFound => Err(ApiError::not_found(entity, id)),
    }
}

/// Await a repository call and record its duration under `entity.operation`.
pub async fn timed<T>(
    entity: &'static str,
    operation: &'static str,
    query: impl Future<Output = Result<T, sqlx::Error>>,
) -> Result<T, sqlx::Error> {
    let start = Instant::now();
    let result = query.await;
    record_db_query(
        &format!("{entity}.{operation}"),
        start.elapsed().as_secs_f64(),
        result.is_ok(),
    );
    result
}

pub async fn find_all<R: Resource>(pool: &PgPool) -> Result<Vec<R::Summary>, ApiError> {
    Ok(timed(R::NAME, "find_all", R::find_all(pool)).await?)
}

pub async fn find_by_id<R: Resource>(pool: &PgPool, id: i32) -> Result<R::Detail, ApiError> {
    timed(R::NAME, "find_by_id", R::find_by_id(pool, id))
        .await?
        .ok_or_else(|| ApiError::not_found(R::NAME, id))
}

pub async fn create<R: Resource>(pool: &PgPool, input: R::Create) -> Result<i32, ApiError> {
    let id = timed(R::NAME, "create", R::create(pool, input)).await?;
    tracing::info!(entity = R::NAME, id, "Created");
    Ok(id)
}

pub async fn update<R: Resource>(pool: &PgPool, input: R::Update) -> Result<(), ApiError> {
    let id = input.id();
    let outcome = timed(R::NAME, "update", R::update(pool, input)).await?;
    ensure_found(outcome, R::NAME, id)?;
    tracing::info!(entity = R::NAME, id, "Updated");
    Ok(())
}

pub async fn delete_by_id<R: Resource>(pool: &PgPool, id: i32) -> Result<(), ApiError> {
    let outcome = timed(R::NAME, "delete", R::delete_by_id(pool, id)).await?;
    ensure_found(outcome, R::NAME, id)?;
    tracing::info!(entity = R::NAME, id, "Deleted");
    Ok(())
}
