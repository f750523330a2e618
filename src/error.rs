//! Error types for the Nimbus platform client.

use thiserror::Error;

/// Errors surfaced by commands and the platform API client.
///
/// Every variant here is terminal for the running command: the binary prints
/// the message and exits non-zero. Soft, report-and-return failures (the
/// legacy "URL is not mapped" case) never become an `ApiError`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid domain '{0}'")]
    InvalidDomain(String),

    #[error("Invalid route '{0}'")]
    InvalidRoute(String),

    #[error("Invalid domain '{given}': multi-segment host names are not supported (routes split on the first '.'; '{registered}' is a registered domain)")]
    MultiSegmentHost { given: String, registered: String },

    #[error("Application not found: {0}")]
    AppNotFound(String),

    #[error("Space not found: {0}")]
    SpaceNotFound(String),

    #[error("No space targeted. Run `nimbus target <url> --space <guid>` first.")]
    NoSpace,

    #[error("No organization targeted. Run `nimbus target <url> --organization <guid>` first.")]
    NoOrganization,

    #[error("No API endpoint targeted. Run `nimbus target <url>` first.")]
    NoTarget,

    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Input error: {0}")]
    InputError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
