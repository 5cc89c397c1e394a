//! Traits related to remote git forges
use async_trait::async_trait;

use crate::{forge::types::PullRequestSummary, result::Result};

/// Lists the open pull requests of the configured repository. The
/// implementation owns the credentials and repository coordinates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PullRequestLister: Send + Sync {
    /// Fails with [`crate::error::ReminderError::Http`] when the forge
    /// answers with an error status, e.g. 404 for an unknown repository.
    async fn list_pull_requests(&self) -> Result<Vec<PullRequestSummary>>;
}
