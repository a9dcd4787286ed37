//! HTTP Handlers

mod ping;
mod text;

pub use ping::*;
pub use text::*;
