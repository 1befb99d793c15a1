//! Jira ticket creation payloads.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// Issue type given to every synced ticket.
pub const STORY_ISSUE_TYPE: &str = "Story";

/// A ticket-creation request, built fresh for each GitLab issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRequest {
    /// Jira issue type name.
    pub issue_type: String,
    /// Jira project key.
    pub project_key: String,
    /// Ticket summary.
    pub summary: String,
    /// Ticket description in Jira wiki markup.
    pub description: String,
    /// Custom field id to value.
    pub custom_fields: BTreeMap<String, String>,
}

/// A ticket Jira reports as created.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TargetTicket {
    /// Ticket key, e.g. `SE-1234`.
    pub key: String,
}

#[derive(Serialize)]
struct CreatePayload<'a> {
    fields: Fields<'a>,
}

#[derive(Serialize)]
struct Fields<'a> {
    issuetype: Named<'a>,
    project: Keyed<'a>,
    summary: &'a str,
    description: &'a str,
    #[serde(flatten)]
    custom: &'a BTreeMap<String, String>,
}

#[derive(Serialize)]
struct Named<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct Keyed<'a> {
    key: &'a str,
}

impl Serialize for TicketRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        CreatePayload {
            fields: Fields {
                issuetype: Named {
                    name: &self.issue_type,
                },
                project: Keyed {
                    key: &self.project_key,
                },
                summary: &self.summary,
                description: &self.description,
                custom: &self.custom_fields,
            },
        }
        .serialize(serializer)
    }
}
