//! Domain errors for release-reminder.

use thiserror::Error;

/// Errors callers are expected to tell apart from generic failures.
#[derive(Error, Debug)]
pub enum ReminderError {
    /// More than one open pull request uses the release branch. This is a
    /// data integrity problem and is never resolved automatically.
    #[error("More than one pull request for the branch {branch}")]
    MultipleReleasePrs { branch: String },

    /// A remote API answered with a client or server error status.
    #[error("HTTP request failed with status {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Slack API error: {0}")]
    SlackApi(String),

    #[error("Missing access token: {0}")]
    MissingToken(String),

    #[error("Invalid repository URL: {0}")]
    InvalidRepoUrl(String),
}

impl ReminderError {
    /// Create a consistency error for the given release branch
    pub fn multiple_release_prs(branch: impl Into<String>) -> Self {
        Self::MultipleReleasePrs {
            branch: branch.into(),
        }
    }

    /// Create an HTTP error from a status code and a description
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Status code of an HTTP error, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
