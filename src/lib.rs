//! # URL Shortener Client
//!
//! Client for a URL shortening service: submit a long URL for shortening and
//! show usage statistics for a short code.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Page abstraction and the service contract
//! - **Application Layer** ([`application`]) - The shorten and stats operations
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest transport and terminal page
//! - **API Layer** ([`api`]) - Request/response DTOs
//!
//! ## Quick Start
//!
//! ```bash
//! export SHORTENER_BASE_URL="http://localhost:8000"
//!
//! cargo run -- shorten https://example.com
//! cargo run -- stats aB3xYz
//! ```
//!
//! ## Embedding
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use url_shortener_client::prelude::*;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = url_shortener_client::config::load_from_env()?;
//! let service = ShortenerService::new(Arc::new(HttpShortenerApi::from_config(&config)?));
//!
//! let page = MemoryPage::new().with_field(ElementId::LongUrl, "https://example.com");
//! service.shorten(&page).await?;
//! println!("{:?}", page.text(ElementId::ShortResult));
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod utils;

pub mod config;

pub use error::ClientError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::dto::{ShortenRequest, ShortenResponse, StatsResponse, StatsSummary};
    pub use crate::application::services::ShortenerService;
    pub use crate::domain::{ElementId, MemoryPage, Page, ShortenerApi};
    pub use crate::error::ClientError;
    pub use crate::infrastructure::{HttpShortenerApi, TerminalPage};
}
