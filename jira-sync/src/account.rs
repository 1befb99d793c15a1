//! Tempo account resolution.

use crate::config::ConfigError;
use crate::jira::TargetTracker;
use crate::runner::SyncError;
use tracing::{info, info_span, Instrument};

/// Resolves a Tempo account key to its numeric id with a single lookup.
///
/// # Errors
///
/// Returns [`SyncError::Config`] for an empty key, before any request is
/// made, and [`SyncError::Account`] if Jira cannot resolve it.
pub async fn resolve_account<T>(target: &T, account_key: &str) -> Result<u64, SyncError>
where
    T: TargetTracker + ?Sized,
{
    if account_key.trim().is_empty() {
        return Err(ConfigError::validation("--jira-account is required").into());
    }

    let span = info_span!("resolve_account", account_key = %account_key);
    async {
        let id = target
            .account_id(account_key)
            .await
            .map_err(|e| SyncError::Account {
                account_key: account_key.to_string(),
                source: e,
            })?;
        info!(account_id = id, "Resolved Tempo account");
        Ok(id)
    }
    .instrument(span)
    .await
}
