//! In-memory adapters for tests and local development.

mod in_memory_profile_store;

pub use in_memory_profile_store::InMemoryProfileStore;
