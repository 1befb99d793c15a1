//! Per-issue sync outcomes.

use crate::runner::SyncError;

/// Result of syncing a single GitLab issue.
#[derive(Debug)]
pub enum SyncOutcome {
    /// Ticket created and GitLab issue labelled.
    Synced {
        /// GitLab issue iid.
        issue_id: u64,
        /// Created Jira ticket key.
        ticket_key: String,
    },

    /// Sync failed for this issue.
    Failed {
        /// GitLab issue iid.
        issue_id: u64,
        /// Key of the ticket if it was created before the failure.
        ticket_key: Option<String>,
        /// What went wrong.
        error: SyncError,
    },
}

impl SyncOutcome {
    /// Returns the GitLab issue iid.
    #[must_use]
    pub fn issue_id(&self) -> u64 {
        match self {
            Self::Synced { issue_id, .. } | Self::Failed { issue_id, .. } => *issue_id,
        }
    }

    /// Returns the created Jira ticket key, if any.
    #[must_use]
    pub fn ticket_key(&self) -> Option<&str> {
        match self {
            Self::Synced { ticket_key, .. } => Some(ticket_key),
            Self::Failed { ticket_key, .. } => ticket_key.as_deref(),
        }
    }

    /// Returns true if this issue failed.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
