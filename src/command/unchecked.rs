//! Lists the authors who still have to check off their commits.
use log::*;

use crate::{
    cli::Args,
    config::Config,
    forge::{github::Github, traits::PullRequestLister},
    release::{ReleaseStatus, get_release_status},
    result::Result,
};

/// Output lines for a release: a summary followed by one author per line.
pub fn format_status(status: &ReleaseStatus) -> Vec<String> {
    let mut authors: Vec<&String> = status.unchecked_authors.iter().collect();
    authors.sort();

    let mut lines = vec![format!(
        "release {} ({}): {} author(s) with unchecked commits",
        status.release.version,
        status.release.url,
        authors.len()
    )];

    lines.extend(authors.into_iter().map(|a| a.to_string()));

    lines
}

/// Resolves the release status and renders it, `None` without a release PR.
pub async fn run(
    forge: &dyn PullRequestLister,
    config: &Config,
) -> Result<Option<Vec<String>>> {
    let status = get_release_status(forge, config).await?;

    if status.is_none() {
        warn!(
            "no open pull request found for branch {}",
            config.release_branch
        );
    }

    Ok(status.as_ref().map(format_status))
}

pub async fn execute(args: &Args) -> Result<()> {
    let config = Config::load(args.config.as_deref()).await?;
    let forge = Github::new(args.get_remote()?)?;

    if let Some(lines) = run(&forge, &config).await? {
        for line in lines {
            println!("{line}");
        }
    }

    Ok(())
}
