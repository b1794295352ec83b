//! Person entity and create payload.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted person row. The id is assigned by the database on insert and
/// never changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub age: i32,
}

/// Create payload: a person without an id.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewPerson {
    pub name: String,
    pub age: i32,
}
