#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod account;
pub mod config;
pub mod gitlab;
pub mod issues;
pub mod jira;
pub mod mapping;
pub mod runner;
pub mod summary;
pub mod templates;

pub use account::resolve_account;
pub use config::{
    default_config_path, load_settings, read_settings, ConfigError, CustomFields,
    DescriptionMode, FailurePolicy, Settings, SyncConfig,
};
pub use gitlab::{GitLabClient, GitLabError, SourceIssue, SourceTracker, TICKET_CREATED_LABEL};
pub use issues::fetch_issues;
pub use jira::{JiraClient, JiraError, TargetTicket, TargetTracker, TicketRequest};
pub use mapping::build_ticket_request;
pub use runner::{Runner, RunnerConfig, SyncError};
pub use summary::{RunSummary, SyncOutcome};
pub use templates::{DescriptionRenderer, TemplateError};
