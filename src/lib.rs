//! Medical Profiles - emergency medical record store
//!
//! This crate exposes a small HTTP API for saving, reading, listing,
//! updating and deleting medical profiles backed by PostgreSQL. Each stored
//! profile gets a shareable display link embedding its identifier.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
