//! Locates the release candidate pull request and finds the authors who
//! still have to check off their commits.
use log::*;
use std::collections::HashSet;

use crate::{
    checklist::{CommitRecord, parse_checkmarks},
    config::Config,
    error::ReminderError,
    forge::{
        traits::PullRequestLister,
        types::{PullRequestSummary, ReleasePr},
    },
    result::Result,
};

/// The release pull request together with its outstanding authors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseStatus {
    pub release: ReleasePr,
    pub unchecked_authors: HashSet<String>,
}

fn to_release_pr(pr: PullRequestSummary, title_prefix: &str) -> ReleasePr {
    let version = pr
        .title
        .strip_prefix(title_prefix)
        .unwrap_or(&pr.title)
        .trim()
        .to_string();

    ReleasePr {
        body: pr.body,
        version,
        url: pr.html_url,
    }
}

/// Finds the single open pull request whose source branch is the
/// configured release branch.
///
/// Returns `Ok(None)` when there is none. Two or more is an inconsistency
/// that is reported as [`ReminderError::MultipleReleasePrs`] instead of
/// guessing. Errors from the forge are returned untouched.
pub async fn get_release_pr(
    forge: &dyn PullRequestLister,
    config: &Config,
) -> Result<Option<ReleasePr>> {
    let branch = &config.release_branch;

    let mut matching: Vec<PullRequestSummary> = forge
        .list_pull_requests()
        .await?
        .into_iter()
        .filter(|pr| &pr.head_ref == branch)
        .collect();

    if matching.len() > 1 {
        error!("found {} open pull requests for {branch}", matching.len());
        return Err(ReminderError::multiple_release_prs(branch).into());
    }

    let Some(pr) = matching.pop() else {
        info!("no open release pull request for branch {branch}");
        return Ok(None);
    };

    let release = to_release_pr(pr, &config.release_title_prefix);

    info!("found release {} at {}", release.version, release.url);

    Ok(Some(release))
}

/// Distinct authors with at least one unchecked item.
pub fn unchecked_authors(records: &[CommitRecord]) -> HashSet<String> {
    records
        .iter()
        .filter(|r| !r.checked)
        .map(|r| r.author_name.clone())
        .collect()
}

/// Looks up the release pull request and parses its checklist.
pub async fn get_release_status(
    forge: &dyn PullRequestLister,
    config: &Config,
) -> Result<Option<ReleaseStatus>> {
    let Some(release) = get_release_pr(forge, config).await? else {
        return Ok(None);
    };

    let records = parse_checkmarks(&release.body);
    debug!("parsed {} checklist items", records.len());

    let unchecked_authors = unchecked_authors(&records);

    Ok(Some(ReleaseStatus {
        release,
        unchecked_authors,
    }))
}

/// Authors of the current release who have not checked off all their
/// commits. Empty when there is no release pull request.
pub async fn get_unchecked_authors(
    forge: &dyn PullRequestLister,
    config: &Config,
) -> Result<HashSet<String>> {
    Ok(get_release_status(forge, config)
        .await?
        .map(|status| status.unchecked_authors)
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use crate::forge::traits::MockPullRequestLister;

    use super::*;

    const FAKE_RELEASE_PR_BODY: &str = r"

## Alice Pote
  - [x] Implemented AutomaticEmail API ([5de04973](../commit/5de049732f769ec8a2a24068514603f353e13ed4))
  - [ ] Unmarked some files as executable ([c665a2c7](../commit/c665a2c79eaf5e2d54b18f5a880709f5065ed517))

## Nathan Levesque
  - [x] Fixed seed data for naive timestamps (#2712) ([50d19c4a](../commit/50d19c4adf22c5ddc8b8299f4b4579c2b1e35b7f))
  - [garbage] xyz
    ";

    fn other_pr() -> PullRequestSummary {
        PullRequestSummary {
            url: "https://api.github.com/repos/mitodl/micromasters/pulls/2985"
                .into(),
            html_url: "https://github.com/mitodl/micromasters/pull/2985".into(),
            body: "not a release".into(),
            title: "not a release".into(),
            head_ref: "other-branch".into(),
        }
    }

    fn release_pr() -> PullRequestSummary {
        PullRequestSummary {
            url: "https://api.github.com/repos/mitodl/micromasters/pulls/2993"
                .into(),
            html_url: "https://github.com/mitodl/micromasters/pull/2993".into(),
            body: FAKE_RELEASE_PR_BODY.into(),
            title: "Release 0.53.3".into(),
            head_ref: "release-candidate".into(),
        }
    }

    fn mock_forge(prs: Vec<PullRequestSummary>) -> MockPullRequestLister {
        let mut mock_forge = MockPullRequestLister::new();
        mock_forge
            .expect_list_pull_requests()
            .times(1)
            .returning(move || Ok(prs.clone()));
        mock_forge
    }

    #[tokio::test]
    async fn gets_release_pr() {
        let forge = mock_forge(vec![other_pr(), release_pr()]);

        let pr = get_release_pr(&forge, &Config::default())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(pr.body, FAKE_RELEASE_PR_BODY);
        assert_eq!(pr.url, "https://github.com/mitodl/micromasters/pull/2993");
        assert_eq!(pr.version, "0.53.3");
    }

    #[tokio::test]
    async fn returns_none_without_release_pr() {
        let forge = mock_forge(vec![other_pr()]);

        let pr = get_release_pr(&forge, &Config::default()).await.unwrap();

        assert!(pr.is_none());
    }

    #[tokio::test]
    async fn fails_with_more_than_one_release_pr() {
        let forge = mock_forge(vec![release_pr(), release_pr()]);

        let err = get_release_pr(&forge, &Config::default())
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "More than one pull request for the branch release-candidate"
        );
        assert!(matches!(
            err.downcast_ref::<ReminderError>(),
            Some(ReminderError::MultipleReleasePrs { branch })
                if branch == "release-candidate"
        ));
    }

    #[tokio::test]
    async fn propagates_http_errors() {
        let mut forge = MockPullRequestLister::new();
        forge
            .expect_list_pull_requests()
            .returning(|| Err(ReminderError::http(404, "Not Found").into()));

        let err = get_release_pr(&forge, &Config::default())
            .await
            .unwrap_err();

        let err = err.downcast_ref::<ReminderError>().unwrap();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn uses_configured_branch_and_prefix() {
        let mut pr = release_pr();
        pr.head_ref = "rc".into();
        pr.title = "v1.2.3".into();
        let forge = mock_forge(vec![release_pr(), pr]);

        let config = Config {
            release_branch: "rc".into(),
            release_title_prefix: "v".into(),
            ..Config::default()
        };

        let found = get_release_pr(&forge, &config).await.unwrap().unwrap();
        assert_eq!(found.version, "1.2.3");
    }

    #[tokio::test]
    async fn keeps_title_without_prefix() {
        let mut pr = release_pr();
        pr.title = "0.1.0".into();
        let forge = mock_forge(vec![pr]);

        let found = get_release_pr(&forge, &Config::default())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.version, "0.1.0");
    }

    #[tokio::test]
    async fn gets_unchecked_authors() {
        let forge = mock_forge(vec![other_pr(), release_pr()]);

        let unchecked = get_unchecked_authors(&forge, &Config::default())
            .await
            .unwrap();

        assert_eq!(unchecked, HashSet::from(["Alice Pote".to_string()]));
    }

    #[tokio::test]
    async fn no_release_means_no_unchecked_authors() {
        let forge = mock_forge(vec![other_pr()]);

        let unchecked = get_unchecked_authors(&forge, &Config::default())
            .await
            .unwrap();

        assert!(unchecked.is_empty());
    }

    #[test]
    fn collapses_duplicate_authors() {
        let records =
            parse_checkmarks("## A\n- [ ] one\n- [ ] two\n## B\n- [x] three");
        assert_eq!(
            unchecked_authors(&records),
            HashSet::from(["A".to_string()])
        );
    }
}
