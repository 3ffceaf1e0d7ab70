//! Data Transfer Objects for service requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod error;
pub mod shorten;
pub mod stats;

pub use error::ErrorDetail;
pub use shorten::{ShortenRequest, ShortenResponse, StatsRequest};
pub use stats::{ClickLog, StatsResponse, StatsSummary};
