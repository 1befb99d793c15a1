//! GitLab side of the sync: reading issues and labelling synced ones.

mod error;
mod issue;

pub use error::GitLabError;
pub use issue::SourceIssue;

use crate::config::{ConfigError, Settings};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;
use url::Url;

/// Label added to a GitLab issue once its Jira ticket exists.
pub const TICKET_CREATED_LABEL: &str = "ticket created";

/// Source tracker operations used by the sync.
#[async_trait]
pub trait SourceTracker: Send + Sync {
    /// Fetches one issue by iid within a project.
    async fn get_issue(&self, project: &str, iid: u64) -> Result<SourceIssue, GitLabError>;

    /// Adds labels to an issue without touching anything else.
    async fn add_labels(&self, project: &str, iid: u64, labels: &[&str])
        -> Result<(), GitLabError>;
}

/// GitLab REST v4 client.
#[derive(Debug, Clone)]
pub struct GitLabClient {
    base_url: Url,
    token: String,
    client: Client,
}

impl GitLabClient {
    /// Builds a client from validated settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the GitLab URL is malformed.
    pub fn new(settings: &Settings) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: settings.gitlab_base()?,
            token: settings.gitlab_token.clone(),
            client: Client::new(),
        })
    }

    fn issue_url(&self, project: &str, iid: u64) -> Result<Url, GitLabError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let project = urlencoding::encode(project);
        Ok(Url::parse(&format!(
            "{base}/api/v4/projects/{project}/issues/{iid}"
        ))?)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, GitLabError> {
        let response = request
            .header("PRIVATE-TOKEN", &self.token)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GitLabError::Status { status, body });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl SourceTracker for GitLabClient {
    async fn get_issue(&self, project: &str, iid: u64) -> Result<SourceIssue, GitLabError> {
        let url = self.issue_url(project, iid)?;
        debug!(%url, "Fetching GitLab issue");
        self.send_json(self.client.get(url)).await
    }

    async fn add_labels(
        &self,
        project: &str,
        iid: u64,
        labels: &[&str],
    ) -> Result<(), GitLabError> {
        let url = self.issue_url(project, iid)?;
        debug!(%url, labels = ?labels, "Adding GitLab labels");
        let body = json!({ "add_labels": labels.join(",") });
        let _: serde_json::Value = self.send_json(self.client.put(url).json(&body)).await?;
        Ok(())
    }
}
