//! Tracing subscriber setup.
//!
//! Logs go to stderr so that stdout only carries page output.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global subscriber.
///
/// `config.log_format` selects `text` or `json` output.
pub fn init(config: &Config) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.log_level))
        .with_writer(std::io::stderr);

    // A second init (e.g. in tests) keeps the first subscriber.
    let result = if config.log_format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        tracing::debug!("Tracing subscriber already installed: {}", e);
    }
}

/// `RUST_LOG` directives take precedence; `log_level` is the fallback, then `warn`.
fn build_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}
