//! Per-run sync options.

use super::ConfigError;

/// How the Jira description is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DescriptionMode {
    /// Render the full onboarding write-up around the GitLab description.
    #[default]
    Rendered,
    /// Use the GitLab issue URL as the whole description.
    Link,
}

/// What to do when an issue fails to sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop the batch at the first failed issue.
    #[default]
    StopOnFirstFailure,
    /// Record the failure and move on to the next issue.
    ContinueOnError,
}

/// Options for a single sync run, fixed for the run's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// GitLab project path or numeric id.
    pub gitlab_project: String,
    /// GitLab issue iids, in the order they are synced.
    pub issue_ids: Vec<u64>,
    /// Jira project key (ex: SE).
    pub jira_project: String,
    /// Jira epic key (ex: SE-1234).
    pub jira_epic: String,
    /// Tempo account key (ex: ABC).
    pub jira_account: String,
    /// Description rendering mode.
    pub description_mode: DescriptionMode,
    /// Batch failure policy.
    pub failure_policy: FailurePolicy,
    /// Preview requests without creating or labelling anything.
    pub dry_run: bool,
}

impl SyncConfig {
    /// Creates a run configuration with the default description mode and
    /// failure policy.
    pub fn new(
        gitlab_project: impl Into<String>,
        issue_ids: Vec<u64>,
        jira_project: impl Into<String>,
        jira_epic: impl Into<String>,
        jira_account: impl Into<String>,
    ) -> Self {
        Self {
            gitlab_project: gitlab_project.into(),
            issue_ids,
            jira_project: jira_project.into(),
            jira_epic: jira_epic.into(),
            jira_account: jira_account.into(),
            description_mode: DescriptionMode::default(),
            failure_policy: FailurePolicy::default(),
            dry_run: false,
        }
    }

    /// Sets the description mode.
    #[must_use]
    pub fn with_description_mode(mut self, mode: DescriptionMode) -> Self {
        self.description_mode = mode;
        self
    }

    /// Sets the failure policy.
    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Enables or disables dry-run mode.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Checks that every required option was supplied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for the first missing option.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("gitlab-project", &self.gitlab_project),
            ("jira-project", &self.jira_project),
            ("jira-epic", &self.jira_epic),
            ("jira-account", &self.jira_account),
        ];
        for (flag, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::validation(format!("--{flag} is required")));
            }
        }
        if self.issue_ids.is_empty() {
            return Err(ConfigError::validation(
                "at least one --gitlab-issue is required",
            ));
        }
        Ok(())
    }
}
