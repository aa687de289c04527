//! Generic CRUD contract and its HTTP route table.
//!
//! Every entity exposes the same five operations over the same URL shape, so
//! the handlers are written once against [`Resource`] and instantiated per
//! entity:
//!
//! | Verb | Path | Success |
//! |---|---|---|
//! | GET | `{PATH}` | 200, array of summaries |
//! | GET | `{PATH}/{id}` | 200, full entity |
//! | POST | `{PATH}` | 201, `{"id": ..}` |
//! | PUT | `{PATH}` | 200, id taken from the body |
//! | DELETE | `{PATH}/{id}` | 200 |
//!
//! Unknown ids answer 404 on every verb that takes one.

use std::future::Future;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use fcb_db::WriteOutcome;
use serde::{Serialize, de::DeserializeOwned};
use sqlx::PgPool;
use validator::Validate;

use crate::{
    ApiState,
    error::ApiError,
    service,
    validation::{IdPath, ValidatedJson},
};

/// Update payloads carry the id of the row they replace
pub trait Identified {
    fn id(&self) -> i32;
}

/// One CRUD-managed entity type
pub trait Resource: Send + Sync + 'static {
    /// Name used in not-found messages, e.g. `Deck group`
    const NAME: &'static str;
    /// Collection path, e.g. `/deckgroups`
    const PATH: &'static str;

    type Summary: Serialize + Send;
    type Detail: Serialize + Send;
    type Create: DeserializeOwned + Validate + Send;
    type Update: DeserializeOwned + Validate + Identified + Send;

    /// All rows, ordered by id
    fn find_all(pool: &PgPool) -> impl Future<Output = Result<Vec<Self::Summary>, sqlx::Error>> + Send;

    fn find_by_id(
        pool: &PgPool,
        id: i32,
    ) -> impl Future<Output = Result<Option<Self::Detail>, sqlx::Error>> + Send;

    /// Insert and return the generated id
    fn create(pool: &PgPool, input: Self::Create) -> impl Future<Output = Result<i32, sqlx::Error>> + Send;

    fn update(
        pool: &PgPool,
        input: Self::Update,
    ) -> impl Future<Output = Result<WriteOutcome, sqlx::Error>> + Send;

    fn delete_by_id(pool: &PgPool, id: i32) -> impl Future<Output = Result<WriteOutcome, sqlx::Error>> + Send;
}

/// Body of a 201 response
#[derive(Debug, Serialize)]
pub struct Created {
    pub id: i32,
}

/// Create the CRUD routes of `R`
pub fn routes<R: Resource>() -> Router<ApiState> {
    Router::new()
        .route(R::PATH, get(list::<R>).post(create::<R>).put(update::<R>))
        .route(
            &format!("{}/{{id}}", R::PATH),
            get(get_by_id::<R>).delete(delete_by_id::<R>),
        )
}

async fn list<R: Resource>(State(state): State<ApiState>) -> Result<Json<Vec<R::Summary>>, ApiError> {
    let items = service::find_all::<R>(&state.pool).await?;
    Ok(Json(items))
}

async fn get_by_id<R: Resource>(
    State(state): State<ApiState>,
    IdPath(id): IdPath,
) -> Result<Json<R::Detail>, ApiError> {
    let item = service::find_by_id::<R>(&state.pool, id).await?;
    Ok(Json(item))
}

async fn create<R: Resource>(
    State(state): State<ApiState>,
    ValidatedJson(input): ValidatedJson<R::Create>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    let id = service::create::<R>(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(Created { id })))
}

async fn update<R: Resource>(
    State(state): State<ApiState>,
    ValidatedJson(input): ValidatedJson<R::Update>,
) -> Result<StatusCode, ApiError> {
    service::update::<R>(&state.pool, input).await?;
    Ok(StatusCode::OK)
}

async fn delete_by_id<R: Resource>(
    State(state): State<ApiState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, ApiError> {
    service::delete_by_id::<R>(&state.pool, id).await?;
    Ok(StatusCode::OK)
}
