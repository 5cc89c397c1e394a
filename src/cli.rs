//! CLI argument parsing and forge configuration.
use clap::{Parser, Subcommand};
use color_eyre::eyre::eyre;
use git_url_parse::GitUrl;
use secrecy::SecretString;
use std::{env, path::PathBuf};

use crate::{error::ReminderError, forge::config::RemoteConfig, result::Result};

pub const GITHUB_TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Global CLI arguments for forge configuration and debugging.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = "", global = true)]
    /// GitHub repository URL (https://github.com/owner/repo).
    pub github_repo: String,

    #[arg(long, default_value = "", global = true)]
    /// GitHub personal access token. Falls back to GITHUB_TOKEN env var.
    pub github_token: String,

    #[arg(long, global = true)]
    /// Configuration file. Defaults to ./release-reminder.toml if present.
    pub config: Option<PathBuf>,

    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Reminder subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the authors who have not checked off their commits.
    Unchecked,

    /// Schedule a Slack reminder for the next business day.
    Remind {
        #[arg(long)]
        /// Slack channel id to post the reminder in.
        channel: String,

        #[arg(long, default_value = "")]
        /// Slack bot token. Falls back to SLACK_TOKEN env var.
        slack_token: String,

        #[arg(long, default_value_t = false)]
        /// Log the reminder instead of scheduling it.
        dry_run: bool,
    },

    /// Print the repository URL with the access token embedded.
    AuthenticatedUrl {
        #[arg(long)]
        /// URL to authenticate. Defaults to --github-repo.
        url: Option<String>,
    },
}

impl Args {
    /// Configure remote repository connection from CLI arguments.
    pub fn get_remote(&self) -> Result<RemoteConfig> {
        if self.github_repo.is_empty() {
            return Err(eyre!("must configure --github-repo"));
        }

        get_github_remote(&self.github_repo, &self.github_token)
    }
}

/// Validate repository URL uses HTTP or HTTPS scheme.
fn validate_scheme(scheme: git_url_parse::Scheme) -> Result<()> {
    match scheme {
        git_url_parse::Scheme::Http => Ok(()),
        git_url_parse::Scheme::Https => Ok(()),
        _ => Err(ReminderError::InvalidRepoUrl(
            "only http and https schemes are supported for repo urls".into(),
        )
        .into()),
    }
}

/// Builds the remote of the repository whose release pull request is
/// checked. The token comes from `--github-token`, then from the URL's
/// userinfo, then from `GITHUB_TOKEN`; a remote without one is rejected.
fn get_github_remote(
    github_repo: &str,
    github_token: &str,
) -> Result<RemoteConfig> {
    let parsed = GitUrl::parse(github_repo)
        .map_err(|e| ReminderError::InvalidRepoUrl(e.to_string()))?;

    validate_scheme(parsed.scheme)?;

    let mut token = github_token.to_string();

    if token.is_empty()
        && let Some(parsed_token) = parsed.token
    {
        token = parsed_token;
    }

    if token.is_empty()
        && let Ok(env_var_token) = env::var(GITHUB_TOKEN_ENV_VAR)
    {
        token = env_var_token;
    }

    if token.is_empty() {
        let err = ReminderError::MissingToken("must set github token".into());
        return Err(err.into());
    }

    let host = parsed
        .host
        .ok_or(eyre!("unable to parse host from github repo"))?;

    let owner = parsed
        .owner
        .ok_or(eyre!("unable to parse owner from github repo"))?;

    Ok(RemoteConfig {
        host,
        scheme: parsed.scheme.to_string(),
        owner,
        repo: parsed.name,
        url: github_repo.to_string(),
        token: SecretString::from(token),
    })
}
