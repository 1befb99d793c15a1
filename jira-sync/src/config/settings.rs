//! Tracker endpoints, credentials and custom field identifiers.

use super::ConfigError;
use serde::Deserialize;
use std::fmt;
use url::Url;

/// Default GitLab instance.
pub const DEFAULT_GITLAB_URL: &str = "https://gitlab.com";

/// Default Jira custom field holding the epic link.
pub const DEFAULT_EPIC_FIELD: &str = "customfield_10006";

/// Default Jira custom field holding the Tempo account.
pub const DEFAULT_ACCOUNT_FIELD: &str = "customfield_10011";

/// Credentials and endpoints for both trackers.
///
/// Read once at startup from `~/.jira-sync.toml` (or `--config`) and
/// overridden by environment variables of the same name in upper case.
#[derive(Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the GitLab instance.
    pub gitlab_url: String,
    /// GitLab personal access token.
    pub gitlab_token: String,
    /// Base URL of the Jira instance.
    pub jira_url: String,
    /// Jira username for basic auth.
    pub jira_username: String,
    /// Jira password or API token for basic auth.
    pub jira_password: String,
    /// Jira custom field identifiers for this instance.
    pub custom_fields: CustomFields,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gitlab_url: DEFAULT_GITLAB_URL.to_string(),
            gitlab_token: String::new(),
            jira_url: String::new(),
            jira_username: String::new(),
            jira_password: String::new(),
            custom_fields: CustomFields::default(),
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("gitlab_url", &self.gitlab_url)
            .field("gitlab_token", &"<redacted>")
            .field("jira_url", &self.jira_url)
            .field("jira_username", &self.jira_username)
            .field("jira_password", &"<redacted>")
            .field("custom_fields", &self.custom_fields)
            .finish()
    }
}

/// Maps a custom field's purpose to its instance-specific identifier.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CustomFields {
    /// Field receiving the epic key.
    pub epic: String,
    /// Field receiving the numeric account id as text.
    pub account: String,
}

impl Default for CustomFields {
    fn default() -> Self {
        Self {
            epic: DEFAULT_EPIC_FIELD.to_string(),
            account: DEFAULT_ACCOUNT_FIELD.to_string(),
        }
    }
}

/// Fields every create payload already sets; custom fields must not reuse them.
const BUILTIN_FIELDS: [&str; 4] = ["issuetype", "project", "summary", "description"];

impl CustomFields {
    /// Checks that each custom field id is set and distinct.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for an empty id, an id used
    /// for both purposes, or an id that shadows a built-in Jira field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, id) in [("epic", &self.epic), ("account", &self.account)] {
            let id = id.trim();
            if id.is_empty() {
                return Err(ConfigError::validation(format!(
                    "custom_fields.{name} is empty"
                )));
            }
            if BUILTIN_FIELDS.contains(&id) {
                return Err(ConfigError::validation(format!(
                    "custom_fields.{name} '{id}' is a built-in Jira field"
                )));
            }
        }
        if self.epic.trim() == self.account.trim() {
            return Err(ConfigError::validation(format!(
                "custom_fields.epic and custom_fields.account are both '{}'",
                self.epic.trim()
            )));
        }
        Ok(())
    }
}

impl Settings {
    /// Applies environment overrides using the provided lookup.
    pub(crate) fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let targets: [(&str, &mut String); 5] = [
            ("GITLAB_URL", &mut self.gitlab_url),
            ("GITLAB_TOKEN", &mut self.gitlab_token),
            ("JIRA_URL", &mut self.jira_url),
            ("JIRA_USERNAME", &mut self.jira_username),
            ("JIRA_PASSWORD", &mut self.jira_password),
        ];
        for (var, target) in targets {
            if let Some(value) = lookup(var).filter(|v| !v.is_empty()) {
                *target = value;
            }
        }
    }

    /// Checks that the settings needed to talk to both trackers are present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] naming the first bad setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gitlab_token.trim().is_empty() {
            return Err(ConfigError::validation("no GitLab token was set in config"));
        }
        if self.jira_url.trim().is_empty() {
            return Err(ConfigError::validation("no Jira URL was set in config"));
        }
        parse_url("gitlab_url", &self.gitlab_url)?;
        parse_url("jira_url", &self.jira_url)?;
        self.custom_fields.validate()
    }

    /// Returns the parsed GitLab base URL.
    pub(crate) fn gitlab_base(&self) -> Result<Url, ConfigError> {
        parse_url("gitlab_url", &self.gitlab_url)
    }

    /// Returns the parsed Jira base URL.
    pub(crate) fn jira_base(&self) -> Result<Url, ConfigError> {
        parse_url("jira_url", &self.jira_url)
    }
}

fn parse_url(name: &str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value.trim())
        .map_err(|e| ConfigError::validation(format!("{name} '{value}' is not a valid URL: {e}")))
}
