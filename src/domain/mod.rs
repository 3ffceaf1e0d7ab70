//! Domain layer: the host page and the shortener service contract.
//!
//! # Architecture
//!
//! - [`page`] - Page abstraction the operations read from and write to
//! - [`shortener_api`] - Transport trait for the remote shortener service
//!
//! Neither module knows about HTTP or terminals; concrete implementations live
//! in [`crate::infrastructure`].

pub mod page;
pub mod shortener_api;

pub use page::{ElementId, MemoryPage, Page};
pub use shortener_api::ShortenerApi;

#[cfg(test)]
pub use shortener_api::MockShortenerApi;
