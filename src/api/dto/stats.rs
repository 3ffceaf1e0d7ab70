//! DTOs for the statistics endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body returned by `GET /stats/{code}`.
///
/// Kept as an opaque JSON value so any shape the service returns is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatsResponse(pub Value);

impl StatsResponse {
    /// Text shown in the statistics result element: two-space indented JSON.
    pub fn render(&self) -> String {
        // Serializing a `Value` cannot fail.
        serde_json::to_string_pretty(&self.0).unwrap_or_default()
    }

    /// Typed view of the document, if it has the usual shape.
    pub fn summary(&self) -> Option<StatsSummary> {
        StatsSummary::deserialize(&self.0).ok()
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

/// Statistics for one short code as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatsSummary {
    pub short_code: String,
    pub long_url: String,
    pub total_clicks: u64,
    #[serde(default)]
    pub click_logs: Vec<ClickLog>,
}

/// Single recorded click.
///
/// Fields are optional because the service may omit them for old records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClickLog {
    pub timestamp: Option<String>,
    pub ip: Option<String>,
}
