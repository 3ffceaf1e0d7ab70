//! Utility functions shared by the transport and configuration.
//!
//! - [`endpoint`] - Base URL parsing and endpoint path building

pub mod endpoint;
