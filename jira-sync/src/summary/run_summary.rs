//! Run summary types.

use super::result::SyncOutcome;

/// Summary of a complete run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Outcome of every attempted issue, in the order attempted.
    pub outcomes: Vec<SyncOutcome>,

    /// Number of GitLab issues in the batch.
    pub issues_requested: usize,

    /// Number of Jira tickets created, labelled or not.
    pub tickets_created: usize,

    /// Number of GitLab issues labelled as synced.
    pub issues_labelled: usize,

    /// Number of issues that failed.
    pub issues_failed: usize,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary for a batch of `issues_requested` issues.
    #[must_use]
    pub fn new(dry_run: bool, issues_requested: usize) -> Self {
        Self {
            dry_run,
            issues_requested,
            ..Default::default()
        }
    }

    /// Updates the summary with an issue's outcome.
    pub fn record(&mut self, outcome: SyncOutcome) {
        match &outcome {
            SyncOutcome::Synced { .. } => {
                self.tickets_created += 1;
                self.issues_labelled += 1;
            }
            SyncOutcome::Failed { ticket_key, .. } => {
                if ticket_key.is_some() {
                    self.tickets_created += 1;
                }
                self.issues_failed += 1;
            }
        }
        self.outcomes.push(outcome);
    }

    /// Number of issues never attempted because the batch stopped early.
    #[must_use]
    pub fn issues_not_attempted(&self) -> usize {
        if self.dry_run {
            return 0;
        }
        self.issues_requested.saturating_sub(self.outcomes.len())
    }

    /// Iterates over `(issue iid, ticket key)` for fully synced issues.
    pub fn synced(&self) -> impl Iterator<Item = (u64, &str)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            SyncOutcome::Synced {
                issue_id,
                ticket_key,
            } => Some((*issue_id, ticket_key.as_str())),
            SyncOutcome::Failed { .. } => None,
        })
    }

    /// Iterates over failed outcomes.
    pub fn failures(&self) -> impl Iterator<Item = &SyncOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.is_failure())
    }

    /// Returns true if any failures occurred.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.issues_failed > 0
    }

    /// Returns true if every requested issue was synced.
    #[must_use]
    pub fn all_success(&self) -> bool {
        !self.has_failures() && self.issues_not_attempted() == 0
    }
}
