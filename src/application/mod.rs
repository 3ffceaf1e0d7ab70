//! Application layer: the operations a page exposes.
//!
//! Services consume the [`crate::domain::ShortenerApi`] trait and a
//! [`crate::domain::Page`], so the same code drives the CLI and tests.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Shorten and stats operations

pub mod services;
