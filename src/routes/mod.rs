//! Route tables: person resource and operational endpoints.

pub mod common;
pub mod person;

pub use common::{common_routes, common_routes_with_ready};
pub use person::person_routes;
