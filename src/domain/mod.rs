//! Domain layer containing the profile record and shared primitives.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, errors)
//! - `profile` - Medical profile record and display link template

pub mod foundation;
pub mod profile;
