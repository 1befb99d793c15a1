//! Maps a GitLab issue onto a Jira ticket-creation request.

use crate::config::CustomFields;
use crate::gitlab::SourceIssue;
use crate::jira::{TicketRequest, STORY_ISSUE_TYPE};
use std::collections::BTreeMap;

/// Builds the creation request for one GitLab issue.
///
/// The summary is the issue title untouched and the account field carries
/// the numeric account id as decimal text. Nothing is validated locally;
/// Jira rejects what it does not accept.
#[must_use]
pub fn build_ticket_request(
    issue: &SourceIssue,
    description: String,
    project_key: &str,
    epic_key: &str,
    account_id: u64,
    fields: &CustomFields,
) -> TicketRequest {
    let custom_fields = BTreeMap::from([
        (fields.epic.clone(), epic_key.to_string()),
        (fields.account.clone(), account_id.to_string()),
    ]);

    TicketRequest {
        issue_type: STORY_ISSUE_TYPE.to_string(),
        project_key: project_key.to_string(),
        summary: issue.title.clone(),
        description,
        custom_fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_issue(title: &str) -> SourceIssue {
        SourceIssue {
            iid: 3,
            title: title.to_string(),
            description: "Crash on load".to_string(),
            web_url: "https://x/y/3".to_string(),
            labels: vec![],
        }
    }

    #[test]
    fn maps_fixed_and_configured_fields() {
        let request = build_ticket_request(
            &sample_issue("Fix bug"),
            "body".to_string(),
            "SE",
            "SE-100",
            42,
            &CustomFields::default(),
        );

        assert_eq!(request.issue_type, "Story");
        assert_eq!(request.project_key, "SE");
        assert_eq!(request.summary, "Fix bug");
        assert_eq!(request.description, "body");
        assert_eq!(request.custom_fields["customfield_10006"], "SE-100");
        assert_eq!(request.custom_fields["customfield_10011"], "42");
    }

    #[test]
    fn summary_is_not_truncated_or_escaped() {
        let title = format!("<Fix> \"quoted\" & {}", "x".repeat(400));
        let request = build_ticket_request(
            &sample_issue(&title),
            String::new(),
            "SE",
            "SE-100",
            7,
            &CustomFields::default(),
        );

        assert_eq!(request.summary, title);
    }

    #[test]
    fn uses_configured_field_ids() {
        let fields = CustomFields {
            epic: "customfield_20001".to_string(),
            account: "customfield_20002".to_string(),
        };
        let request = build_ticket_request(
            &sample_issue("Fix bug"),
            String::new(),
            "SE",
            "SE-100",
            7,
            &fields,
        );

        assert_eq!(request.custom_fields.len(), 2);
        assert_eq!(request.custom_fields["customfield_20001"], "SE-100");
        assert_eq!(request.custom_fields["customfield_20002"], "7");
    }
}
