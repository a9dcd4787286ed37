//! Persistence Layer
//!
//! SQLite-backed storage implementation

pub mod sqlite;
