//! CLI for jira-sync.
//!
//! Syncs GitLab issues to Jira and marks the synced GitLab issues with a
//! "ticket created" label.

use clap::Parser;
use jira_sync::{
    load_settings, DescriptionMode, FailurePolicy, RunSummary, Runner, RunnerConfig, SyncConfig,
    SyncError, SyncOutcome,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// jira-sync - Sync GitLab issues to Jira.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (default is $HOME/.jira-sync.toml).
    #[arg(long, env = "JIRA_SYNC_CONFIG")]
    config: Option<PathBuf>,

    /// GitLab project path or id.
    #[arg(long)]
    gitlab_project: String,

    /// GitLab issue IDs.
    #[arg(short = 'i', long = "gitlab-issue", value_delimiter = ',', required = true)]
    gitlab_issues: Vec<u64>,

    /// Jira project key (ex: SE).
    #[arg(long)]
    jira_project: String,

    /// Jira epic key (ex: SE-1234).
    #[arg(long)]
    jira_epic: String,

    /// Jira account key (ex: ABC).
    #[arg(long)]
    jira_account: String,

    /// Use the GitLab issue link as the description of the Jira ticket.
    #[arg(long)]
    link_as_description: bool,

    /// Keep syncing the remaining issues after one fails.
    #[arg(long)]
    continue_on_error: bool,

    /// Preview tickets without creating or labelling anything.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);

            if summary.has_failures() {
                ExitCode::from(1)
            } else {
                ExitCode::from(0)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with `RUST_LOG` filtering, defaulting to "info".
fn init_tracing() {
    tracing_subscriber::registry()
        // Compact single-line output on stderr, keeping stdout for sync results
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        // Allow runtime log filtering via RUST_LOG env var (e.g., RUST_LOG=debug)
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        // Register as the global default subscriber
        .init();
}

async fn run(args: Args) -> Result<RunSummary, SyncError> {
    let settings = load_settings(args.config.as_deref())?;

    let description_mode = if args.link_as_description {
        DescriptionMode::Link
    } else {
        DescriptionMode::Rendered
    };
    let failure_policy = if args.continue_on_error {
        FailurePolicy::ContinueOnError
    } else {
        FailurePolicy::StopOnFirstFailure
    };
    let sync = SyncConfig::new(
        args.gitlab_project,
        args.gitlab_issues,
        args.jira_project,
        args.jira_epic,
        args.jira_account,
    )
    .with_description_mode(description_mode)
    .with_failure_policy(failure_policy)
    .with_dry_run(args.dry_run);

    let runner = Runner::new(RunnerConfig::new(settings, sync))?;
    runner.run().await
}

fn print_summary(summary: &RunSummary) {
    if summary.dry_run {
        return;
    }

    for outcome in summary.failures() {
        if let SyncOutcome::Failed { error, .. } = outcome {
            eprintln!("error: {error}");
        }
    }

    if summary.has_failures() || summary.outcomes.len() > 1 {
        println!("\nSummary:");
        println!("  Issues requested: {}", summary.issues_requested);
        println!("  Tickets created: {}", summary.tickets_created);
        println!("  Issues labelled: {}", summary.issues_labelled);
        println!("  Issues failed: {}", summary.issues_failed);
        println!("  Issues not attempted: {}", summary.issues_not_attempted());
    }
}
