//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum routes exposing the profile store
//! - `postgres` - PostgreSQL persistence via sqlx
//! - `memory` - In-memory store for tests and local development

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::InMemoryProfileStore;
pub use postgres::{PostgresProfileReader, PostgresProfileRepository};
