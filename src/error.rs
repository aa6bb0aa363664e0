//! Error types for the support-tools library.

use thiserror::Error;

/// Errors raised while setting the tools up.
///
/// Failures inside a tool call are reported as `{"error": ...}` records
/// instead; see [`crate::tool::ToolResult::error`].
#[derive(Debug, Error)]
pub enum SupportError {
    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
