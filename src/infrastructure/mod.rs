//! Infrastructure layer: concrete implementations of domain traits.
//!
//! - [`http`] - [`crate::domain::ShortenerApi`] over HTTP (reqwest)
//! - [`terminal`] - [`crate::domain::Page`] printing to a terminal

pub mod http;
pub mod terminal;

pub use http::HttpShortenerApi;
pub use terminal::TerminalPage;
