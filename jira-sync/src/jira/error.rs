//! Jira client error types.

use thiserror::Error;

/// Errors returned by the Jira API client.
#[derive(Debug, Error)]
pub enum JiraError {
    /// Transport or body decoding failure.
    #[error("Jira request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Jira answered with a non-success status.
    #[error("Jira API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// A request URL could not be built from the configured base URL.
    #[error("Invalid Jira URL: {0}")]
    Url(#[from] url::ParseError),
}
