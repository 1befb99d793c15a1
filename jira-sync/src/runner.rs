//! Orchestrates a GitLab to Jira sync run.
//!
//! A run resolves the Tempo account once, fetches the whole batch, then
//! processes issues strictly in order:
//!
//! ```text
//! pending -> rendered -> submitted -> created -> labelled
//!                                 \-> failed
//! ```
//!
//! Nothing is rolled back. A ticket whose GitLab label update fails stays
//! in Jira and the outcome records its key.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::SyncError;

use crate::account::resolve_account;
use crate::config::{DescriptionMode, FailurePolicy, Settings, SyncConfig};
use crate::gitlab::{GitLabClient, SourceIssue, SourceTracker, TICKET_CREATED_LABEL};
use crate::issues::fetch_issues;
use crate::jira::{JiraClient, TargetTracker, TicketRequest};
use crate::mapping::build_ticket_request;
use crate::summary::{RunSummary, SyncOutcome};
use crate::templates::{DescriptionRenderer, TemplateError};
use tracing::{error, info, info_span, warn, Instrument};

/// Drives a sync run against a source and a target tracker.
pub struct Runner<S = GitLabClient, T = JiraClient> {
    config: RunnerConfig,
    source: S,
    target: T,
    renderer: DescriptionRenderer,
}

impl Runner {
    /// Builds a runner talking to the GitLab and Jira instances in the
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Config`] if settings or options are invalid.
    pub fn new(config: RunnerConfig) -> Result<Self, SyncError> {
        config.validate()?;
        let source = GitLabClient::new(config.settings())?;
        let target = JiraClient::new(config.settings())?;
        Self::with_trackers(config, source, target)
    }
}

impl<S, T> Runner<S, T>
where
    S: SourceTracker,
    T: TargetTracker,
{
    /// Builds a runner over arbitrary tracker implementations.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Config`] if the run options or custom field ids
    /// are invalid.
    pub fn with_trackers(config: RunnerConfig, source: S, target: T) -> Result<Self, SyncError> {
        config.sync().validate()?;
        config.settings().custom_fields.validate()?;
        Ok(Self {
            config,
            source,
            target,
            renderer: DescriptionRenderer::new()?,
        })
    }

    /// Executes the full sync flow.
    ///
    /// # Errors
    ///
    /// Returns an error if the account cannot be resolved or any issue
    /// cannot be fetched; nothing is created in that case. Per-issue
    /// failures are reported in the summary instead.
    pub async fn run(&self) -> Result<RunSummary, SyncError> {
        let sync = self.config.sync();
        let account_id = resolve_account(&self.target, &sync.jira_account).await?;

        info!(project = %sync.gitlab_project, count = sync.issue_ids.len(), "Fetching GitLab issues");
        let issues = fetch_issues(&self.source, &sync.gitlab_project, &sync.issue_ids).await?;

        let mut summary = RunSummary::new(sync.dry_run, issues.len());

        if sync.dry_run {
            print_dry_run_preview(sync, &issues, account_id, &self.renderer, self.config.settings());
            return Ok(summary);
        }

        for issue in &issues {
            let outcome = self.sync_issue(issue, account_id).await;
            let failed = outcome.is_failure();
            summary.record(outcome);

            if failed && sync.failure_policy == FailurePolicy::StopOnFirstFailure {
                let remaining = summary.issues_not_attempted();
                if remaining > 0 {
                    warn!(remaining, "Stopping batch after failure");
                }
                break;
            }
        }

        Ok(summary)
    }

    /// Builds the creation request for one issue.
    fn build_request(
        &self,
        issue: &SourceIssue,
        account_id: u64,
    ) -> Result<TicketRequest, SyncError> {
        let sync = self.config.sync();
        let description = self.renderer.render(issue, sync.description_mode)?;
        Ok(build_ticket_request(
            issue,
            description,
            &sync.jira_project,
            &sync.jira_epic,
            account_id,
            &self.config.settings().custom_fields,
        ))
    }

    async fn sync_issue(&self, issue: &SourceIssue, account_id: u64) -> SyncOutcome {
        let span = info_span!("sync_issue", iid = issue.iid);
        async {
            let request = match self.build_request(issue, account_id) {
                Ok(request) => request,
                Err(e) => return failed(issue.iid, None, e),
            };

            let ticket = match self.target.create_ticket(&request).await {
                Ok(ticket) => ticket,
                Err(e) => {
                    return failed(
                        issue.iid,
                        None,
                        SyncError::CreateTicket {
                            issue_id: issue.iid,
                            source: e,
                        },
                    )
                }
            };
            info!(ticket = %ticket.key, "Jira ticket created");

            if let Err(e) = self
                .source
                .add_labels(
                    &self.config.sync().gitlab_project,
                    issue.iid,
                    &[TICKET_CREATED_LABEL],
                )
                .await
            {
                return failed(
                    issue.iid,
                    Some(ticket.key.clone()),
                    SyncError::AddLabel {
                        issue_id: issue.iid,
                        ticket_key: ticket.key,
                        source: e,
                    },
                );
            }

            println!("Jira issue {} is created from {}", ticket.key, issue.iid);
            SyncOutcome::Synced {
                issue_id: issue.iid,
                ticket_key: ticket.key,
            }
        }
        .instrument(span)
        .await
    }
}

fn failed(issue_id: u64, ticket_key: Option<String>, error: SyncError) -> SyncOutcome {
    error!(iid = issue_id, error = %error, "Failed to sync issue");
    SyncOutcome::Failed {
        issue_id,
        ticket_key,
        error,
    }
}

fn print_dry_run_preview(
    sync: &SyncConfig,
    issues: &[SourceIssue],
    account_id: u64,
    renderer: &DescriptionRenderer,
    settings: &Settings,
) {
    println!(
        "\n[DRY RUN] {} -> Jira project {}",
        sync.gitlab_project, sync.jira_project
    );
    println!(
        "  Epic: {} ({}), account: {} -> {} ({})",
        sync.jira_epic,
        settings.custom_fields.epic,
        sync.jira_account,
        account_id,
        settings.custom_fields.account
    );
    println!("  Found {} issues:\n", issues.len());

    for (i, issue) in issues.iter().enumerate() {
        println!("  [{}/{}] #{} {}", i + 1, issues.len(), issue.iid, issue.title);
        println!("    Would create Story: \"{}\"", issue.title);
        println!("    Would add label: \"{TICKET_CREATED_LABEL}\"");
    }

    if let Some(first) = issues.first() {
        println!("\n  Sample description:");
        match sample_description(renderer, first, sync.description_mode) {
            Ok(lines) => {
                for line in lines {
                    println!("    {line}");
                }
            }
            Err(e) => warn!(iid = first.iid, error = %e, "Failed to render sample description"),
        }
    }

    println!();
}

/// First lines of the rendered description, with "..." if truncated.
fn sample_description(
    renderer: &DescriptionRenderer,
    issue: &SourceIssue,
    mode: DescriptionMode,
) -> Result<Vec<String>, TemplateError> {
    const PREVIEW_LINES: usize = 10;

    let body = renderer.render(issue, mode)?;
    let mut lines: Vec<String> = body.lines().take(PREVIEW_LINES).map(str::to_string).collect();
    if body.lines().count() > PREVIEW_LINES {
        lines.push("...".to_string());
    }
    Ok(lines)
}
