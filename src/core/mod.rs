//! Core domain model: route table, cutout queries, API client and configuration.

pub mod api;
pub mod config;
pub mod query;
pub mod routes;
#[cfg(test)]
mod tests;

pub use query::{BoundingBox, CutoutQuery, Layer, QueryError};
pub use routes::{ROUTES, RouteEntry};
