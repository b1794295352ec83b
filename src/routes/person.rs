//! Person resource routes under /persons.
//! Static segments (name, age-greater-than) take precedence over the :id
//! capture, so /persons/name/x never reaches the by-id handler.

use crate::handlers::person::{by_age_greater_than, by_id, by_name, create, list};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn person_routes(state: AppState) -> Router {
    Router::new()
        .route("/persons", get(list).post(create))
        .route("/persons/name/:name", get(by_name))
        .route("/persons/age-greater-than/:age", get(by_age_greater_than))
        .route("/persons/:id", get(by_id))
        .with_state(state)
}
