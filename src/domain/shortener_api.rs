//! Contract for talking to the remote shortener service.

use crate::api::dto::{ShortenRequest, ShortenResponse, StatsResponse};
use crate::error::ClientError;
use async_trait::async_trait;

/// Remote shortener service.
///
/// Each call maps to exactly one request; implementations never retry.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpShortenerApi`] - reqwest over HTTP
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenerApi: Send + Sync {
    /// Submits a long URL and returns the service's short URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Request`] if no response was received,
    /// [`ClientError::Status`] on a non-success status and
    /// [`ClientError::Malformed`] if the body is not `{"short_url": ...}`.
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResponse, ClientError>;

    /// Fetches the statistics document for a short code.
    ///
    /// # Errors
    ///
    /// Same as [`ShortenerApi::shorten`]; additionally [`ClientError::InvalidCode`]
    /// if the code cannot be used as a path segment.
    async fn stats(&self, code: &str) -> Result<StatsResponse, ClientError>;
}
