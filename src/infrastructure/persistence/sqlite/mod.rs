//! SQLite Persistence

mod database;
mod text_repo;

pub use database::*;
pub use text_repo::*;
