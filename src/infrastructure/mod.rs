//! Infrastructure Layer
//!
//! Concrete implementations of the application ports

pub mod adapters;
pub mod http;
pub mod persistence;
