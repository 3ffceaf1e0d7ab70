//! Error type shared by the transport and the page operations.
//!
//! Failures are split so callers can tell a request that never got an answer
//! apart from an answer that could not be understood.

use crate::domain::page::ElementId;
use crate::utils::endpoint::EndpointError;
use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The page has no element with this id.
    #[error("page has no field `{0}`")]
    MissingField(ElementId),

    /// Input was rejected before any request was made.
    #[error("invalid {field}: {message}")]
    Validation { field: ElementId, message: String },

    /// The short code cannot be placed into a request path.
    #[error("invalid short code `{0}`")]
    InvalidCode(String),

    /// The configured base URL cannot have endpoint paths appended.
    #[error("invalid base URL `{0}`")]
    InvalidBaseUrl(String),

    /// The request did not complete (connect, timeout, body read).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service returned {status}{}", format_detail(.detail))]
    Status {
        status: StatusCode,
        detail: Option<String>,
    },

    /// The service answered, but the body was not the expected JSON.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<EndpointError> for ClientError {
    fn from(err: EndpointError) -> Self {
        match err {
            EndpointError::ReservedSegment(segment) => Self::InvalidCode(segment),
            EndpointError::CannotBeABase(base) => Self::InvalidBaseUrl(base),
        }
    }
}

fn format_detail(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

impl ClientError {
    pub fn validation(field: ElementId, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn malformed(err: impl std::fmt::Display) -> Self {
        Self::Malformed(err.to_string())
    }

    /// True when no usable answer came back from the service.
    pub fn is_request_failure(&self) -> bool {
        matches!(self, Self::Request(_))
    }

    /// True when the service answered with a body that could not be parsed.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status == StatusCode::TOO_MANY_REQUESTS)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}
