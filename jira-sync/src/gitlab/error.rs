//! GitLab client error types.

use thiserror::Error;

/// Errors returned by the GitLab API client.
#[derive(Debug, Error)]
pub enum GitLabError {
    /// Transport or body decoding failure.
    #[error("GitLab request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// GitLab answered with a non-success status.
    #[error("GitLab API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// A request URL could not be built from the configured base URL.
    #[error("Invalid GitLab URL: {0}")]
    Url(#[from] url::ParseError),
}
