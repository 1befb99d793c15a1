//! GitLab issue representation.

use serde::{Deserialize, Deserializer};

/// A GitLab issue as read by the sync.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceIssue {
    /// Project-scoped issue number.
    pub iid: u64,
    /// Issue title.
    pub title: String,
    /// Free-text description; empty when GitLab has none.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Canonical web URL.
    pub web_url: String,
    /// Labels currently on the issue.
    #[serde(default)]
    pub labels: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
