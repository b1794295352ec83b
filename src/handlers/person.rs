//! Person resource handlers: one repository call per route.

use crate::error::AppError;
use crate::model::{NewPerson, Person};
use crate::repository::PersonRepository;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

/// POST /persons: store the payload and return it with its assigned id.
/// The insert runs in a single transaction.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewPerson>,
) -> Result<Json<Person>, AppError> {
    let person = PersonRepository::persist(&state.pool, &body).await?;
    Ok(Json(person))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Person>>, AppError> {
    let persons = PersonRepository::list_all(&state.pool).await?;
    Ok(Json(persons))
}

pub async fn by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Person>>, AppError> {
    let persons = PersonRepository::find_by_name(&state.pool, &name).await?;
    Ok(Json(persons))
}

pub async fn by_age_greater_than(
    State(state): State<AppState>,
    Path(age): Path<i32>,
) -> Result<Json<Vec<Person>>, AppError> {
    let persons = PersonRepository::find_by_age_greater_than(&state.pool, age).await?;
    Ok(Json(persons))
}

/// GET /persons/{id}: the person with this id, serialized as JSON null when
/// absent. An unknown id is not an error.
pub async fn by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Option<Person>>, AppError> {
    let person = PersonRepository::find_by_id(&state.pool, id).await?;
    Ok(Json(person))
}
