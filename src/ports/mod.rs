//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ProfileRepository` - Writes against the profile table
//! - `ProfileReader` - Reads against the profile table

mod profile_reader;
mod profile_repository;

pub use profile_reader::ProfileReader;
pub use profile_repository::ProfileRepository;
