//! Person service: a minimal REST resource over a single SQLite-backed table.

pub mod config;
pub mod error;
pub mod model;
pub mod repository;
pub mod state;
pub mod store;
pub mod handlers;
pub mod routes;

pub use config::AppConfig;
pub use error::AppError;
pub use model::{NewPerson, Person};
pub use repository::PersonRepository;
pub use state::AppState;
pub use store::{connect_pool, ensure_schema};
pub use routes::{common_routes, common_routes_with_ready, person_routes};
