//! Configuration loading and resolution.
//!
//! Every setting resolves in the same order: explicit CLI value, then
//! environment variable, then built-in default.

use crate::transport::DEFAULT_MAX_FRAME_BYTES;

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "TOYBOX_LOG";

/// Environment variable overriding the maximum frame size.
pub const MAX_FRAME_ENV: &str = "TOYBOX_MAX_FRAME_BYTES";

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub max_frame_bytes: usize,
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_frame_bytes: DEFAULT_MAX_FRAME_BYTES,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ServerConfig {
    /// Resolve against the process environment.
    pub fn resolve(log_level: Option<&str>, max_frame_bytes: Option<usize>) -> Self {
        Self::resolve_with(log_level, max_frame_bytes, |key| std::env::var(key).ok())
    }

    /// Resolve with an injectable environment lookup.
    pub fn resolve_with(
        log_level: Option<&str>,
        max_frame_bytes: Option<usize>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let log_filter = log_level
            .map(str::to_string)
            .or_else(|| env(LOG_ENV).filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let max_frame_bytes = max_frame_bytes
            .or_else(|| env(MAX_FRAME_ENV).and_then(|v| parse_frame_size(&v)))
            .unwrap_or(DEFAULT_MAX_FRAME_BYTES);

        Self {
            max_frame_bytes,
            log_filter,
        }
    }
}

fn parse_frame_size(raw: &str) -> Option<usize> {
    match raw.trim().parse::<usize>() {
        Ok(0) | Err(_) => {
            tracing::warn!("Ignoring invalid {MAX_FRAME_ENV}={raw:?}");
            None
        }
        Ok(n) => Some(n),
    }
}
