//! Wire formats exchanged with the shortener service.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization

pub mod dto;
