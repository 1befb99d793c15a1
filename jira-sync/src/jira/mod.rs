//! Jira side of the sync: Tempo account lookup and ticket creation.

mod error;
mod ticket;

pub use error::JiraError;
pub use ticket::{TargetTicket, TicketRequest, STORY_ISSUE_TYPE};

use crate::config::{ConfigError, Settings};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;
use url::Url;

/// Target tracker operations used by the sync.
#[async_trait]
pub trait TargetTracker: Send + Sync {
    /// Looks up the numeric id of a Tempo account by its key.
    async fn account_id(&self, account_key: &str) -> Result<u64, JiraError>;

    /// Creates a ticket and returns its key.
    async fn create_ticket(&self, request: &TicketRequest) -> Result<TargetTicket, JiraError>;
}

#[derive(Deserialize)]
struct TempoAccount {
    id: u64,
}

/// Jira REST v2 client using basic auth.
#[derive(Clone)]
pub struct JiraClient {
    base_url: Url,
    username: String,
    password: String,
    client: Client,
}

impl std::fmt::Debug for JiraClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiraClient")
            .field("base_url", &self.base_url.as_str())
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl JiraClient {
    /// Builds a client from validated settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the Jira URL is malformed.
    pub fn new(settings: &Settings) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: settings.jira_base()?,
            username: settings.jira_username.clone(),
            password: settings.jira_password.clone(),
            client: Client::new(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, JiraError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{}", path.trim_start_matches('/')))?)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, JiraError> {
        let response = request
            .basic_auth(&self.username, Some(&self.password))
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(JiraError::Status { status, body });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl TargetTracker for JiraClient {
    async fn account_id(&self, account_key: &str) -> Result<u64, JiraError> {
        let url = self.endpoint(&format!(
            "rest/tempo-accounts/1/account/key/{}",
            urlencoding::encode(account_key)
        ))?;
        debug!(%url, "Looking up Tempo account");
        let account: TempoAccount = self.send_json(self.client.get(url)).await?;
        Ok(account.id)
    }

    async fn create_ticket(&self, request: &TicketRequest) -> Result<TargetTicket, JiraError> {
        let url = self.endpoint("rest/api/2/issue")?;
        debug!(%url, summary = %request.summary, "Creating Jira ticket");
        self.send_json(self.client.post(url).json(request)).await
    }
}
