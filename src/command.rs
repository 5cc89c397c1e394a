//! Command execution for release-reminder.
//!
//! Each command loads the configuration, connects to the services it needs
//! and runs its workflow through a `run` function that only sees the
//! service traits, so the workflow can be exercised with mocks.
//!
//! Consistency and transport errors abort the command. A missing release
//! pull request or an author without a chat account is logged and skipped.

/// Prints the repository URL with an access token embedded.
pub mod authenticated_url;

/// Schedules the checklist reminder in Slack.
pub mod remind;

/// Prints the authors with unchecked commits.
pub mod unchecked;
