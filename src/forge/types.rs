#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Open pull request as listed by the forge.
pub struct PullRequestSummary {
    /// API URL of the pull request
    pub url: String,
    /// Human-facing URL of the pull request
    pub html_url: String,
    pub body: String,
    pub title: String,
    /// Name of the source branch
    pub head_ref: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The open pull request of the release candidate branch.
pub struct ReleasePr {
    /// Raw description holding the author checklist
    pub body: String,
    /// Version taken from the title, e.g. "0.53.3" for "Release 0.53.3"
    pub version: String,
    /// Human-facing URL of the pull request
    pub url: String,
}
