//! GitLab issue retrieval.

use crate::gitlab::{SourceIssue, SourceTracker};
use crate::runner::SyncError;
use tracing::{debug, info, info_span, Instrument};

/// Fetches every requested issue, in the requested order.
///
/// All or nothing: the first failed lookup aborts the fetch and no issues
/// are returned.
///
/// # Errors
///
/// Returns [`SyncError::Fetch`] naming the issue that could not be read.
pub async fn fetch_issues<S>(
    source: &S,
    project: &str,
    issue_ids: &[u64],
) -> Result<Vec<SourceIssue>, SyncError>
where
    S: SourceTracker + ?Sized,
{
    let span = info_span!("fetch_issues", project = %project, count = issue_ids.len());
    async {
        let mut issues = Vec::with_capacity(issue_ids.len());
        for &iid in issue_ids {
            let issue = source
                .get_issue(project, iid)
                .await
                .map_err(|e| SyncError::Fetch {
                    issue_id: iid,
                    source: e,
                })?;
            debug!(iid, title = %issue.title, "Fetched issue");
            issues.push(issue);
        }
        info!(count = issues.len(), "Fetched GitLab issues");
        Ok(issues)
    }
    .instrument(span)
    .await
}
