//! Implements the PullRequestLister trait for Github
use async_trait::async_trait;
use log::*;
use octocrab::{Octocrab, models::pulls::PullRequest, params};

use crate::{
    error::ReminderError,
    forge::{
        config::RemoteConfig, traits::PullRequestLister,
        types::PullRequestSummary,
    },
    result::Result,
};

/// Page size used when listing pull requests.
pub const DEFAULT_PAGE_SIZE: u8 = 100;

/// Converts API error responses into [`ReminderError::Http`] so callers can
/// inspect the status code. Other failures pass through as reports.
fn map_octocrab_error(err: octocrab::Error) -> color_eyre::Report {
    match err {
        octocrab::Error::GitHub { source, .. } => {
            let status = source.status_code.as_u16();
            error!("github responded with status {status}: {}", source.message);
            ReminderError::http(status, source.message).into()
        }
        other => other.into(),
    }
}

fn to_summary(pr: PullRequest) -> PullRequestSummary {
    PullRequestSummary {
        url: pr.url,
        html_url: pr.html_url.map(|u| u.to_string()).unwrap_or_default(),
        body: pr.body.unwrap_or_default(),
        title: pr.title.unwrap_or_default(),
        head_ref: pr.head.ref_field,
    }
}

/// GitHub forge implementation using Octocrab for API interactions.
pub struct Github {
    config: RemoteConfig,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with personal access token authentication and API
    /// base URL configuration.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let base_uri = config.api_base_uri();
        let instance = Octocrab::builder()
            .personal_token(config.token.clone())
            .base_uri(base_uri)?
            .build()?;

        Ok(Self { config, instance })
    }
}

#[async_trait]
impl PullRequestLister for Github {
    async fn list_pull_requests(&self) -> Result<Vec<PullRequestSummary>> {
        info!(
            "listing open pull requests for {}/{}",
            self.config.owner, self.config.repo
        );

        let page = self
            .instance
            .pulls(&self.config.owner, &self.config.repo)
            .list()
            .state(params::State::Open)
            .per_page(DEFAULT_PAGE_SIZE)
            .send()
            .await
            .map_err(map_octocrab_error)?;

        let prs = self
            .instance
            .all_pages(page)
            .await
            .map_err(map_octocrab_error)?;

        debug!("found {} open pull requests", prs.len());

        Ok(prs.into_iter().map(to_summary).collect())
    }
}
