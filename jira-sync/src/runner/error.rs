//! Sync error types.

use crate::config::ConfigError;
use crate::gitlab::GitLabError;
use crate::jira::JiraError;
use crate::templates::TemplateError;

/// Errors that can occur while syncing.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// Missing or malformed settings or flags.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The description template is broken.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// The Tempo account could not be resolved.
    #[error("Failed to resolve Jira account '{account_key}': {source}")]
    Account {
        account_key: String,
        #[source]
        source: JiraError,
    },

    /// A GitLab issue could not be fetched.
    #[error("Failed to fetch GitLab issue {issue_id}: {source}")]
    Fetch {
        issue_id: u64,
        #[source]
        source: GitLabError,
    },

    /// Jira rejected or never received the ticket.
    #[error("Failed to create Jira ticket for GitLab issue {issue_id}: {source}")]
    CreateTicket {
        issue_id: u64,
        #[source]
        source: JiraError,
    },

    /// The ticket exists but the GitLab issue could not be labelled.
    #[error("Jira issue {ticket_key} was created but labelling GitLab issue {issue_id} failed: {source}")]
    AddLabel {
        issue_id: u64,
        ticket_key: String,
        #[source]
        source: GitLabError,
    },
}
