//! Error body returned by the service on non-success statuses.

use serde::Deserialize;
use serde_json::Value;

/// `{"detail": ...}` error body.
///
/// `detail` is usually a string, but validation failures carry a list of
/// objects, so it is kept as raw JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub detail: Value,
}

impl ErrorDetail {
    /// Parses an error body, `None` if it is not in the `detail` format.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    pub fn message(&self) -> String {
        match &self.detail {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
