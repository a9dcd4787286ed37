//! Infrastructure Adapters
//!
//! Concrete implementations of the application ports

pub mod detector;

pub use detector::*;
