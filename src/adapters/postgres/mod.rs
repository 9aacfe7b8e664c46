//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresProfileRepository` - Inserts, overwrites and deletes profiles
//! - `PostgresProfileReader` - Single and ordered list queries
//! - `connect_pool` / `ensure_schema` - Startup wiring

mod pool;
mod profile_reader;
mod profile_repository;
mod profile_row;
mod schema;

pub use pool::{connect_options, connect_pool};
pub use profile_reader::PostgresProfileReader;
pub use profile_repository::PostgresProfileRepository;
pub use schema::{ensure_schema, CREATE_PROFILES_TABLE};
