//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Body of `POST /shorten`.
///
/// The long URL is sent exactly as entered. The service decides whether it
/// accepts it; the client only refuses blank input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct ShortenRequest {
    #[validate(custom(function = "not_blank"))]
    pub long_url: String,
}

impl ShortenRequest {
    pub fn new(long_url: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
        }
    }
}

/// Body returned by `POST /shorten`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShortenResponse {
    pub short_url: String,
}

impl ShortenResponse {
    /// Text shown in the shortening result element.
    pub fn render(&self) -> String {
        format!("Short URL: {}", self.short_url)
    }
}

/// Path parameter of `GET /stats/{code}`.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct StatsRequest {
    #[validate(custom(function = "not_blank"))]
    pub code: String,
}

impl StatsRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be empty".into()));
    }
    Ok(())
}
